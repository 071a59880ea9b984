//! Store-level operations on customer records.
//!
//! Each mutation runs inside a single store write, so id assignment and
//! uniqueness checks cannot race between handlers.

use std::sync::Arc;

use crate::core::{AppError, Result};
use crate::modules::customers::models::{
    CreateCustomerRequest, CreatePurchaseRequest, Customer, CustomerSummary, Purchase,
    UpdateCustomerRequest,
};
use crate::storage::{Database, JsonStore};

pub struct CustomerRepository {
    store: Arc<JsonStore>,
}

impl CustomerRepository {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Vec<CustomerSummary> {
        self.store
            .read(|db| db.customers.iter().map(CustomerSummary::from).collect())
            .await
    }

    pub async fn find_by_id(&self, id: u64) -> Result<Customer> {
        self.store
            .read(|db| db.customers.iter().find(|c| c.id == id).cloned())
            .await
            .ok_or_else(|| AppError::not_found("customer not found"))
    }

    pub async fn create(&self, request: CreateCustomerRequest) -> Result<Customer> {
        self.store
            .write(|db| {
                if db.customers.iter().any(|c| c.cpf == request.cpf) {
                    return Err(AppError::conflict("CPF already registered"));
                }
                if db.customers.iter().any(|c| c.email == request.email) {
                    return Err(AppError::conflict("email already registered"));
                }

                let customer = Customer {
                    id: next_customer_id(db),
                    name: request.name,
                    cpf: request.cpf,
                    email: request.email,
                    phone: request.phone,
                    address: request.address,
                    purchase_history: Vec::new(),
                };
                db.customers.push(customer.clone());

                Ok(customer)
            })
            .await
    }

    pub async fn update(&self, id: u64, request: UpdateCustomerRequest) -> Result<Customer> {
        self.store
            .write(|db| {
                if let Some(cpf) = &request.cpf {
                    if db.customers.iter().any(|c| c.cpf == *cpf && c.id != id) {
                        return Err(AppError::conflict(
                            "CPF already registered to another customer",
                        ));
                    }
                }
                if let Some(email) = &request.email {
                    if db.customers.iter().any(|c| c.email == *email && c.id != id) {
                        return Err(AppError::conflict(
                            "email already registered to another customer",
                        ));
                    }
                }

                let customer = db
                    .customers
                    .iter_mut()
                    .find(|c| c.id == id)
                    .ok_or_else(|| AppError::not_found("customer not found"))?;

                if let Some(name) = request.name {
                    customer.name = name;
                }
                if let Some(cpf) = request.cpf {
                    customer.cpf = cpf;
                }
                if let Some(email) = request.email {
                    customer.email = email;
                }
                if let Some(phone) = request.phone {
                    customer.phone = phone;
                }
                if let Some(patch) = request.address {
                    patch.apply_to(&mut customer.address);
                }

                Ok(customer.clone())
            })
            .await
    }

    pub async fn delete(&self, id: u64) -> Result<Customer> {
        self.store
            .write(|db| {
                let position = db
                    .customers
                    .iter()
                    .position(|c| c.id == id)
                    .ok_or_else(|| AppError::not_found("customer not found"))?;

                Ok(db.customers.remove(position))
            })
            .await
    }

    pub async fn purchases(&self, id: u64) -> Result<Vec<Purchase>> {
        Ok(self.find_by_id(id).await?.purchase_history)
    }

    pub async fn add_purchase(&self, id: u64, request: CreatePurchaseRequest) -> Result<Purchase> {
        self.store
            .write(|db| {
                let customer = db
                    .customers
                    .iter_mut()
                    .find(|c| c.id == id)
                    .ok_or_else(|| AppError::not_found("customer not found"))?;

                let purchase = Purchase {
                    id: next_purchase_id(customer),
                    amount: request.amount,
                    date: request.date,
                    contract_id: request.contract_id,
                    installments: request.installments,
                };
                customer.purchase_history.push(purchase.clone());

                Ok(purchase)
            })
            .await
    }
}

fn next_customer_id(db: &Database) -> u64 {
    db.customers.iter().map(|c| c.id).max().unwrap_or(0) + 1
}

fn next_purchase_id(customer: &Customer) -> u64 {
    customer
        .purchase_history
        .iter()
        .map(|p| p.id)
        .max()
        .unwrap_or(0)
        + 1
}
