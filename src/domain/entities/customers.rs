//! Customer accounts and their phone numbers.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::entities::{ensure_valid, require_reference, require_string};
use crate::domain::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Customer {
    #[serde(rename = "CustomerID")]
    pub customer_id: i64,
    pub customer_name: String,
    pub customer_address: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CustomerRef {
    #[serde(rename = "CustomerID")]
    pub customer_id: i64,
}

impl CustomerRef {
    pub fn new(customer_id: i64) -> Self {
        Self { customer_id }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct CustomerInput {
    #[serde(rename = "CustomerID")]
    pub customer_id: Option<i64>,
    pub customer_name: Option<String>,
    pub customer_address: Option<String>,
}

impl From<CustomerInput> for Customer {
    fn from(input: CustomerInput) -> Self {
        Customer {
            customer_id: input.customer_id.unwrap_or_default(),
            customer_name: input.customer_name.unwrap_or_default(),
            customer_address: input.customer_address.unwrap_or_default(),
        }
    }
}

impl Customer {
    pub fn validate(&self) -> Result<()> {
        let mut violations = Vec::new();
        require_string(&mut violations, "CustomerName", &self.customer_name);
        require_string(&mut violations, "CustomerAddress", &self.customer_address);
        ensure_valid(violations)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct CustomerPhone {
    #[serde(rename = "CustomerPhoneID")]
    pub customer_phone_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerRef>,
    pub phone_number: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct CustomerPhoneInput {
    #[serde(rename = "CustomerPhoneID")]
    pub customer_phone_id: Option<i64>,
    pub customer: Option<CustomerRef>,
    pub phone_number: Option<String>,
}

impl From<CustomerPhoneInput> for CustomerPhone {
    fn from(input: CustomerPhoneInput) -> Self {
        CustomerPhone {
            customer_phone_id: input.customer_phone_id.unwrap_or_default(),
            customer: input.customer,
            phone_number: input.phone_number.unwrap_or_default(),
        }
    }
}

impl CustomerPhone {
    pub fn validate(&self) -> Result<()> {
        let mut violations = Vec::new();
        require_reference(&mut violations, "Customer", &self.customer);
        require_string(&mut violations, "PhoneNumber", &self.phone_number);
        ensure_valid(violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_requires_name_and_address() {
        let partial = Customer::from(CustomerInput {
            customer_name: Some("Greene Inc".to_string()),
            ..CustomerInput::default()
        });
        let err = partial.validate().unwrap_err();
        assert_eq!(err.to_string(), "Validation failed: CustomerAddress should not be empty");
    }

    #[test]
    fn phone_requires_owner_and_number() {
        let bare = CustomerPhone::from(CustomerPhoneInput::default());
        let err = bare.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: Customer should not be empty; PhoneNumber should not be empty"
        );
    }
}
