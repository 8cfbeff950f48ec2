pub mod domain;
pub mod ports;
pub mod review_use_cases;
pub mod services;
