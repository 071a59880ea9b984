// Customer management module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Customer, CustomerSummary, Installment, Purchase};
pub use repositories::CustomerRepository;
pub use services::CustomerService;
