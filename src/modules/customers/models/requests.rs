//! Request payloads for the customer endpoints, with the field-format rules
//! enforced before anything reaches the store.

use rust_decimal::Decimal;
use serde::Deserialize;

use super::customer::{Address, Installment};
use crate::core::{AppError, Result};
use chrono::NaiveDate;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCustomerRequest {
    pub name: String,
    pub cpf: String,
    pub email: String,
    pub phone: String,
    pub address: Address,
}

impl CreateCustomerRequest {
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)?;
        validate_cpf(&self.cpf)?;
        validate_email(&self.email)?;
        validate_phone(&self.phone)?;
        validate_address(&self.address)
    }
}

/// Partial profile update; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCustomerRequest {
    pub name: Option<String>,
    pub cpf: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<AddressPatch>,
}

impl UpdateCustomerRequest {
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(cpf) = &self.cpf {
            validate_cpf(cpf)?;
        }
        if let Some(email) = &self.email {
            validate_email(email)?;
        }
        if let Some(phone) = &self.phone {
            validate_phone(phone)?;
        }
        if let Some(address) = &self.address {
            address.validate()?;
        }

        Ok(())
    }
}

/// Field-by-field address merge
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddressPatch {
    pub street: Option<String>,
    pub number: Option<String>,
    pub district: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
}

impl AddressPatch {
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("street", &self.street),
            ("number", &self.number),
            ("district", &self.district),
            ("city", &self.city),
        ] {
            if let Some(value) = value {
                if value.trim().is_empty() {
                    return Err(AppError::validation(format!(
                        "address {field} must not be empty"
                    )));
                }
            }
        }
        if let Some(state) = &self.state {
            validate_state(state)?;
        }
        if let Some(postal_code) = &self.postal_code {
            validate_postal_code(postal_code)?;
        }

        Ok(())
    }

    pub fn apply_to(&self, address: &mut Address) {
        if let Some(street) = &self.street {
            address.street = street.clone();
        }
        if let Some(number) = &self.number {
            address.number = number.clone();
        }
        if let Some(district) = &self.district {
            address.district = district.clone();
        }
        if let Some(city) = &self.city {
            address.city = city.clone();
        }
        if let Some(state) = &self.state {
            address.state = state.clone();
        }
        if let Some(postal_code) = &self.postal_code {
            address.postal_code = postal_code.clone();
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePurchaseRequest {
    pub amount: Decimal,
    pub date: NaiveDate,
    pub contract_id: String,
    pub installments: Vec<Installment>,
}

impl CreatePurchaseRequest {
    pub fn validate(&self) -> Result<()> {
        if self.amount <= Decimal::ZERO {
            return Err(AppError::validation("purchase amount must be positive"));
        }
        if self.contract_id.trim().is_empty() {
            return Err(AppError::validation("contract id must not be empty"));
        }
        if self.installments.is_empty() {
            return Err(AppError::validation(
                "purchase must have at least one installment",
            ));
        }
        for installment in &self.installments {
            validate_installment(installment)?;
        }

        Ok(())
    }
}

fn validate_installment(installment: &Installment) -> Result<()> {
    if installment.due_amount <= Decimal::ZERO {
        return Err(AppError::validation(
            "installment due amount must be positive",
        ));
    }
    if installment.amount_paid < Decimal::ZERO {
        return Err(AppError::validation(
            "installment amount paid must not be negative",
        ));
    }
    if installment.open_capital < Decimal::ZERO {
        return Err(AppError::validation(
            "installment open capital must not be negative",
        ));
    }

    Ok(())
}

fn validate_name(name: &str) -> Result<()> {
    let length = name.chars().count();
    if !(2..=100).contains(&length) {
        return Err(AppError::validation(
            "name must be between 2 and 100 characters",
        ));
    }

    Ok(())
}

fn validate_cpf(cpf: &str) -> Result<()> {
    if cpf.len() != 11 || !all_digits(cpf.as_bytes()) {
        return Err(AppError::validation(
            "CPF must contain exactly 11 numeric digits",
        ));
    }

    Ok(())
}

fn validate_email(email: &str) -> Result<()> {
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    };
    if !valid {
        return Err(AppError::validation("email must be valid"));
    }

    Ok(())
}

/// Expected shape: `(XX) XXXXX-XXXX`, with a 4- or 5-digit middle group
fn validate_phone(phone: &str) -> Result<()> {
    let bytes = phone.as_bytes();
    let valid = bytes.len() >= 5
        && bytes[0] == b'('
        && all_digits(&bytes[1..3])
        && bytes[3] == b')'
        && bytes[4] == b' '
        && phone_local_part_valid(&bytes[5..]);
    if !valid {
        return Err(AppError::validation(
            "phone must be in the format (XX) XXXXX-XXXX",
        ));
    }

    Ok(())
}

fn phone_local_part_valid(rest: &[u8]) -> bool {
    match rest.iter().position(|&b| b == b'-') {
        Some(dash) => {
            (dash == 4 || dash == 5)
                && rest.len() == dash + 5
                && all_digits(&rest[..dash])
                && all_digits(&rest[dash + 1..])
        }
        None => false,
    }
}

fn validate_address(address: &Address) -> Result<()> {
    for (field, value) in [
        ("street", &address.street),
        ("number", &address.number),
        ("district", &address.district),
        ("city", &address.city),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::validation(format!(
                "address {field} must not be empty"
            )));
        }
    }
    validate_state(&address.state)?;
    validate_postal_code(&address.postal_code)
}

fn validate_state(state: &str) -> Result<()> {
    if state.chars().count() != 2 {
        return Err(AppError::validation("state must be exactly 2 characters"));
    }

    Ok(())
}

/// Expected shape: `XXXXX-XXX`
fn validate_postal_code(postal_code: &str) -> Result<()> {
    let bytes = postal_code.as_bytes();
    let valid = bytes.len() == 9
        && bytes[5] == b'-'
        && all_digits(&bytes[..5])
        && all_digits(&bytes[6..]);
    if !valid {
        return Err(AppError::validation(
            "postal code must be in the format XXXXX-XXX",
        ));
    }

    Ok(())
}

fn all_digits(value: &[u8]) -> bool {
    !value.is_empty() && value.iter().all(|b| b.is_ascii_digit())
}
