mod create_project;
mod delete_project;
mod get_projects;
mod get_single_project;
mod update_project;

pub use create_project::*;
pub use delete_project::*;
pub use get_projects::*;
pub use get_single_project::*;
pub use update_project::*;
