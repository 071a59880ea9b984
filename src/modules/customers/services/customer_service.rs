//! Business layer for customer management: request validation in front of the
//! repository, plus operational logging.

use tracing::info;

use crate::core::Result;
use crate::modules::customers::models::{
    CreateCustomerRequest, CreatePurchaseRequest, Customer, CustomerSummary, Purchase,
    UpdateCustomerRequest,
};
use crate::modules::customers::repositories::CustomerRepository;

pub struct CustomerService {
    repository: CustomerRepository,
}

impl CustomerService {
    pub fn new(repository: CustomerRepository) -> Self {
        Self { repository }
    }

    pub async fn list_customers(&self) -> Vec<CustomerSummary> {
        self.repository.list().await
    }

    pub async fn get_customer(&self, id: u64) -> Result<Customer> {
        self.repository.find_by_id(id).await
    }

    pub async fn create_customer(&self, request: CreateCustomerRequest) -> Result<Customer> {
        request.validate()?;
        let customer = self.repository.create(request).await?;
        info!(customer_id = customer.id, "customer created");

        Ok(customer)
    }

    pub async fn update_customer(
        &self,
        id: u64,
        request: UpdateCustomerRequest,
    ) -> Result<Customer> {
        request.validate()?;
        let customer = self.repository.update(id, request).await?;
        info!(customer_id = customer.id, "customer updated");

        Ok(customer)
    }

    pub async fn delete_customer(&self, id: u64) -> Result<Customer> {
        let customer = self.repository.delete(id).await?;
        info!(customer_id = customer.id, "customer deleted");

        Ok(customer)
    }

    pub async fn purchase_history(&self, id: u64) -> Result<Vec<Purchase>> {
        self.repository.purchases(id).await
    }

    pub async fn add_purchase(
        &self,
        id: u64,
        request: CreatePurchaseRequest,
    ) -> Result<Purchase> {
        request.validate()?;
        let purchase = self.repository.add_purchase(id, request).await?;
        info!(
            customer_id = id,
            purchase_id = purchase.id,
            contract_id = %purchase.contract_id,
            "purchase recorded"
        );

        Ok(purchase)
    }
}
