pub mod peak_exposure;

pub use peak_exposure::{CalculateExposureRequest, CustomerProfile, PeakExposure};
