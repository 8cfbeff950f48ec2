pub mod domain;
pub mod lead_use_cases;
pub mod ports;
pub mod services;
