// Debt exposure module

pub mod controllers;
pub mod models;
pub mod services;

pub use models::PeakExposure;
pub use services::ExposureCalculator;
