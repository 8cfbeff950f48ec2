pub mod coerce;
pub mod extractor_config;
pub mod multipart;
pub mod response;

pub use extractor_config::{custom_json_config, custom_path_config};
pub use response::ApiResponse;
