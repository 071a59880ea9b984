//! Peak debt exposure over a purchase history.
//!
//! Exposure accounting is event-driven: a purchase raises the outstanding
//! balance by its full amount on the purchase date, and every recorded
//! payment lowers it by the paid amount on the payment date, regardless of
//! which installment or due date it nominally settles. The balance is
//! cumulative across purchases and is never reset.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::core::money::round_currency;
use crate::modules::customers::models::Purchase;
use crate::modules::exposure::models::PeakExposure;

/// One dated, signed balance movement: positive for purchases, negative for
/// payments.
#[derive(Debug, Clone, Copy)]
struct LedgerEvent {
    date: NaiveDate,
    amount: Decimal,
}

/// Pure calculator for a customer's maximum historical debt exposure
pub struct ExposureCalculator;

impl ExposureCalculator {
    /// Find the calendar month in which the customer's outstanding balance
    /// peaked, and that peak balance rounded to two fractional digits.
    ///
    /// Total over any input: no history means the zero result, and the scan
    /// itself cannot fail. Runs in O(n log n) over the number of purchase and
    /// payment events, allocating only the event list.
    pub fn peak_exposure(purchases: &[Purchase]) -> PeakExposure {
        let mut events = collect_events(purchases);
        if events.is_empty() {
            return PeakExposure::zero();
        }

        // Stable sort: same-date events keep their input order. The final
        // balance does not depend on it, but the reported month for a
        // same-value tie does, so this is a determinism requirement.
        events.sort_by_key(|event| event.date);

        let mut balance = Decimal::ZERO;
        let mut peak = Decimal::ZERO;
        let mut peak_month = String::new();

        for event in &events {
            balance += event.amount;
            // Strict comparison: the first month reaching a given peak value
            // wins when the same level recurs later.
            if balance > peak {
                peak = balance;
                peak_month = month_key(event.date);
            }
        }

        PeakExposure {
            month: peak_month,
            total: round_currency(peak),
        }
    }
}

/// Flatten a purchase history into signed events. Input order is preserved;
/// chronology is established by the sort afterwards, so unsorted purchase
/// lists are handled correctly.
fn collect_events(purchases: &[Purchase]) -> Vec<LedgerEvent> {
    let mut events = Vec::new();

    for purchase in purchases {
        events.push(LedgerEvent {
            date: purchase.date,
            amount: purchase.amount,
        });

        for installment in &purchase.installments {
            if let Some((date, amount)) = installment.payment() {
                events.push(LedgerEvent {
                    date,
                    amount: -amount,
                });
            }
        }
    }

    events
}

fn month_key(date: NaiveDate) -> String {
    format!("{:02}/{:04}", date.month(), date.year())
}
