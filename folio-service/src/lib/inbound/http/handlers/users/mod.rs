use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::user::models::User;

pub mod delete_user;
pub mod get_user;
pub mod list_users;
pub mod login;
pub mod register;
pub mod update_profile;
pub mod upload_profile_picture;

pub use delete_user::delete_user;
pub use get_user::get_user;
pub use list_users::list_users;
pub use login::login_admin;
pub use login::login_user;
pub use register::register_admin;
pub use register::register_user;
pub use update_profile::update_profile_info;
pub use upload_profile_picture::upload_profile_picture;

/// Public view of an account. The password hash never leaves the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponseData {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub profile_picture: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponseData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.as_str().to_string(),
            email: user.email.as_str().to_string(),
            role: user.role.to_string(),
            profile_picture: user.profile_picture.clone(),
            description: user.description.clone(),
            address: user.address.clone(),
            created_at: user.created_at,
        }
    }
}
