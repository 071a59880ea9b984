pub mod customer;
pub mod requests;

pub use customer::{Address, Customer, CustomerSummary, Installment, Purchase};
pub use requests::{AddressPatch, CreateCustomerRequest, CreatePurchaseRequest, UpdateCustomerRequest};
