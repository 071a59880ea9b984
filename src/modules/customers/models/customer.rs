//! Customer domain records as they live in the data file.
//!
//! A customer owns a purchase history; each purchase carries the full
//! principal drawn at its date plus the scheduled installments. Installment
//! balance fields (`open_capital`) are informational only; exposure is
//! derived from purchase amounts and recorded payments, never from them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Postal address attached to a customer profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub number: String,
    pub district: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

/// One scheduled repayment of a purchase.
///
/// `amount_paid > 0` signals that a real payment of exactly that amount
/// happened on `last_payment_date` (partial or full).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Installment {
    pub due_amount: Decimal,
    pub due_date: NaiveDate,

    #[serde(default, deserialize_with = "optional_date")]
    pub last_payment_date: Option<NaiveDate>,

    /// Absent means nothing was paid yet
    #[serde(default)]
    pub amount_paid: Decimal,

    #[serde(default)]
    pub open_capital: Decimal,
}

impl Installment {
    /// A payment event exists only when something was actually paid and the
    /// payment date was recorded.
    pub fn payment(&self) -> Option<(NaiveDate, Decimal)> {
        if self.amount_paid > Decimal::ZERO {
            self.last_payment_date.map(|date| (date, self.amount_paid))
        } else {
            None
        }
    }
}

/// One credit-purchase event with its installment schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Purchase {
    pub id: u64,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub contract_id: String,
    pub installments: Vec<Installment>,
}

/// Full customer record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: u64,
    pub name: String,
    pub cpf: String,
    pub email: String,
    pub phone: String,
    pub address: Address,

    #[serde(default)]
    pub purchase_history: Vec<Purchase>,
}

/// Listing view: purchase history and address are stripped
#[derive(Debug, Clone, Serialize)]
pub struct CustomerSummary {
    pub id: u64,
    pub name: String,
    pub cpf: String,
    pub email: String,
    pub phone: String,
}

impl From<&Customer> for CustomerSummary {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.name.clone(),
            cpf: customer.cpf.clone(),
            email: customer.email.clone(),
            phone: customer.phone.clone(),
        }
    }
}

/// Unpaid installments are stored with an empty or absent payment date, so
/// both map to `None` instead of failing the whole record.
fn optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
