use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::modules::customers::models::{Address, Purchase};

/// Result of the peak-exposure scan.
///
/// `month` is the `MM/YYYY` key of the calendar month in which the running
/// balance first reached its all-time high; empty when there is no history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeakExposure {
    pub month: String,
    pub total: Decimal,
}

impl PeakExposure {
    /// Defined zero result for customers without purchases, not an error.
    pub fn zero() -> Self {
        Self {
            month: String::new(),
            total: Decimal::ZERO,
        }
    }
}

/// Body of POST /exposure/calculate
#[derive(Debug, Clone, Deserialize)]
pub struct CalculateExposureRequest {
    pub customer: CustomerProfile,
}

/// Customer payload submitted for calculation. The history field stays
/// optional so its absence can be rejected as a client error rather than a
/// deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerProfile {
    pub id: u64,
    pub name: String,
    pub cpf: String,
    pub email: String,
    pub phone: String,
    pub address: Address,
    pub purchase_history: Option<Vec<Purchase>>,
}
