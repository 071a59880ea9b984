pub mod exposure_controller;

pub use exposure_controller::configure;
