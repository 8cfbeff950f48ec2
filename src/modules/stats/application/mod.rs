pub mod domain;
pub mod ports;
pub mod services;
pub mod stats_use_cases;
