pub mod entities;
pub mod image_policy;
