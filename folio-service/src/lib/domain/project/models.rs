use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::project::errors::ProjectContentError;
use crate::domain::project::errors::ProjectTypeError;

/// Project unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProjectId(pub Uuid);

impl ProjectId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ProjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Portfolio category of a project, stored as 1, 2 or 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectType(u8);

impl ProjectType {
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for ProjectType {
    type Error = ProjectTypeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1..=3 => Ok(Self(value as u8)),
            _ => Err(ProjectTypeError(Some(value))),
        }
    }
}

/// Portfolio project.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub project_type: ProjectType,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
}

/// Command to create a project with validated content
#[derive(Debug, Clone)]
pub struct CreateProjectCommand {
    pub title: String,
    pub description: String,
    pub project_type: ProjectType,
    pub images: Vec<String>,
    pub end_date: Option<DateTime<Utc>>,
}

impl CreateProjectCommand {
    const MAX_TITLE_LENGTH: usize = 200;

    /// Validate raw project fields.
    ///
    /// # Arguments
    /// * `end_date` - RFC 3339 timestamp; blank means none
    ///
    /// # Errors
    /// * `MissingFields` - Title or description blank
    /// * `TitleTooLong` - Title over 200 characters
    /// * `InvalidEndDate` - End date does not parse
    pub fn new(
        title: Option<String>,
        description: Option<String>,
        project_type: ProjectType,
        images: Vec<String>,
        end_date: Option<String>,
    ) -> Result<Self, ProjectContentError> {
        let title = title.map(|t| t.trim().to_string()).unwrap_or_default();
        let description = description
            .map(|d| d.trim().to_string())
            .unwrap_or_default();

        if title.is_empty() || description.is_empty() {
            return Err(ProjectContentError::MissingFields);
        }

        let length = title.chars().count();
        if length > Self::MAX_TITLE_LENGTH {
            return Err(ProjectContentError::TitleTooLong {
                max: Self::MAX_TITLE_LENGTH,
                actual: length,
            });
        }

        let end_date = match end_date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                DateTime::parse_from_rfc3339(raw)
                    .map(|date| date.with_timezone(&Utc))
                    .map_err(|_| ProjectContentError::InvalidEndDate(raw.to_string()))?,
            ),
        };

        Ok(Self {
            title,
            description,
            project_type,
            images: images
                .into_iter()
                .map(|url| url.trim().to_string())
                .filter(|url| !url.is_empty())
                .collect(),
            end_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_type_accepts_one_to_three() {
        for value in 1..=3 {
            assert_eq!(ProjectType::try_from(value).unwrap().value(), value as u8);
        }
    }

    #[test]
    fn test_project_type_rejects_out_of_range() {
        for value in [0, 4, -1, 300] {
            let err = ProjectType::try_from(value).unwrap_err();
            assert_eq!(err.to_string(), "Invalid project type. Must be 1, 2, or 3.");
        }
    }

    #[test]
    fn test_create_command_parses_end_date() {
        let command = CreateProjectCommand::new(
            Some("Folio".to_string()),
            Some("Portfolio site".to_string()),
            ProjectType::try_from(2).unwrap(),
            vec!["https://img/a.png".to_string(), " ".to_string()],
            Some("2024-06-30T00:00:00Z".to_string()),
        )
        .unwrap();

        assert_eq!(command.images, vec!["https://img/a.png".to_string()]);
        assert_eq!(
            command.end_date.map(|d| d.to_rfc3339()),
            Some("2024-06-30T00:00:00+00:00".to_string())
        );
    }

    #[test]
    fn test_create_command_rejects_bad_input() {
        let project_type = ProjectType::try_from(1).unwrap();

        assert_eq!(
            CreateProjectCommand::new(None, Some("d".to_string()), project_type, vec![], None)
                .unwrap_err(),
            ProjectContentError::MissingFields
        );
        assert!(matches!(
            CreateProjectCommand::new(
                Some("t".to_string()),
                Some("d".to_string()),
                project_type,
                vec![],
                Some("next tuesday".to_string()),
            ),
            Err(ProjectContentError::InvalidEndDate(_))
        ));
    }
}
