//! Lifecycle services for customers and their phone numbers.

use crate::domain::entities::{Customer, CustomerInput, CustomerPhone, CustomerPhoneInput};
use crate::domain::error::{PersistenceError, Result};
use crate::storage::repositories::{CustomerPhoneRepository, CustomerRepository};

#[derive(Clone)]
pub struct CustomerService {
    repo: CustomerRepository,
}

impl CustomerService {
    pub fn new(repo: CustomerRepository) -> Self {
        Self { repo }
    }

    pub async fn get_all(&self) -> Result<Vec<Customer>> {
        self.repo.get_all().await
    }

    pub async fn create(&self, input: CustomerInput) -> Result<Customer> {
        let customer = Customer::from(input);
        customer.validate()?;
        self.repo.create(&customer).await
    }

    pub async fn update(&self, input: CustomerInput) -> Result<Customer> {
        let id = input
            .customer_id
            .filter(|id| *id != 0)
            .ok_or_else(|| PersistenceError::id_required("CustomerID"))?;
        let existing = self.repo.find_by_id(id).await?;
        let mut customer = Customer::from(input);
        customer.customer_id = existing.customer_id;
        customer.validate()?;
        self.repo.update(&customer).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.repo.delete(id).await
    }
}

#[derive(Clone)]
pub struct CustomerPhoneService {
    repo: CustomerPhoneRepository,
}

impl CustomerPhoneService {
    pub fn new(repo: CustomerPhoneRepository) -> Self {
        Self { repo }
    }

    pub async fn get_all(&self) -> Result<Vec<CustomerPhone>> {
        self.repo.get_all().await
    }

    pub async fn create(&self, input: CustomerPhoneInput) -> Result<CustomerPhone> {
        let phone = CustomerPhone::from(input);
        phone.validate()?;
        self.repo.create(&phone).await
    }

    pub async fn update(&self, input: CustomerPhoneInput) -> Result<CustomerPhone> {
        let id = input
            .customer_phone_id
            .filter(|id| *id != 0)
            .ok_or_else(|| PersistenceError::id_required("CustomerPhoneID"))?;
        let existing = self.repo.find_by_id(id).await?;
        let mut phone = CustomerPhone::from(input);
        phone.customer_phone_id = existing.customer_phone_id;
        phone.validate()?;
        self.repo.update(&phone).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.repo.delete(id).await
    }
}
