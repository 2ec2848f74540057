pub mod blog;
pub mod project;
pub mod user;

pub use blog::PostgresBlogRepository;
pub use project::PostgresProjectRepository;
pub use user::PostgresUserRepository;
