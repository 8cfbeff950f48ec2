pub mod asset;
pub mod auth;
pub mod lead;
pub mod payment;
pub mod project;
pub mod review;
pub mod stats;
