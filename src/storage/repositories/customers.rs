//! Gateways for the `customer` and `customer_phone` tables.

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::entities::{Customer, CustomerPhone, CustomerRef};
use crate::domain::error::{PersistenceError, Result};
use crate::storage::repositories::ensure_vacant;

fn customer_from_row(row: &PgRow) -> Result<Customer, sqlx::Error> {
    Ok(Customer {
        customer_id: row.try_get("CustomerID")?,
        customer_name: row.try_get("CustomerName")?,
        customer_address: row.try_get("CustomerAddress")?,
    })
}

#[derive(Clone)]
pub struct CustomerRepository {
    pool: PgPool,
}

impl CustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Customer> {
        let row = sqlx::query(r#"SELECT * FROM customer WHERE "CustomerID" = $1"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        match row {
            Some(row) => Ok(customer_from_row(&row)?),
            None => Err(PersistenceError::NotFound("Customer")),
        }
    }

    pub async fn get_all(&self) -> Result<Vec<Customer>> {
        let rows = sqlx::query("SELECT * FROM customer").fetch_all(&self.pool).await?;
        rows.iter()
            .map(|row| customer_from_row(row).map_err(Into::into))
            .collect()
    }

    pub async fn create(&self, customer: &Customer) -> Result<Customer> {
        let row = if customer.customer_id != 0 {
            ensure_vacant(&self.pool, "customer", "CustomerID", customer.customer_id).await?;
            sqlx::query(
                r#"INSERT INTO customer ("CustomerID", "CustomerName", "CustomerAddress")
                   VALUES ($1, $2, $3) RETURNING *"#,
            )
            .bind(customer.customer_id)
            .bind(&customer.customer_name)
            .bind(&customer.customer_address)
            .fetch_one(&self.pool)
            .await?
        } else {
            sqlx::query(
                r#"INSERT INTO customer ("CustomerName", "CustomerAddress")
                   VALUES ($1, $2) RETURNING *"#,
            )
            .bind(&customer.customer_name)
            .bind(&customer.customer_address)
            .fetch_one(&self.pool)
            .await?
        };
        Ok(customer_from_row(&row)?)
    }

    pub async fn update(&self, customer: &Customer) -> Result<Customer> {
        let row = sqlx::query(
            r#"UPDATE customer SET "CustomerName" = $2, "CustomerAddress" = $3
               WHERE "CustomerID" = $1 RETURNING *"#,
        )
        .bind(customer.customer_id)
        .bind(&customer.customer_name)
        .bind(&customer.customer_address)
        .fetch_one(&self.pool)
        .await?;
        Ok(customer_from_row(&row)?)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query(r#"DELETE FROM customer WHERE "CustomerID" = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(PersistenceError::NotFound("Customer"));
        }
        Ok(())
    }
}

fn customer_phone_from_row(row: &PgRow) -> Result<CustomerPhone, sqlx::Error> {
    Ok(CustomerPhone {
        customer_phone_id: row.try_get("CustomerPhoneID")?,
        customer: row.try_get::<Option<i64>, _>("CustomerID")?.map(CustomerRef::new),
        phone_number: row.try_get("PhoneNumber")?,
    })
}

#[derive(Clone)]
pub struct CustomerPhoneRepository {
    pool: PgPool,
}

impl CustomerPhoneRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<CustomerPhone> {
        let row = sqlx::query(r#"SELECT * FROM customer_phone WHERE "CustomerPhoneID" = $1"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        match row {
            Some(row) => Ok(customer_phone_from_row(&row)?),
            None => Err(PersistenceError::NotFound("CustomerPhone")),
        }
    }

    pub async fn get_all(&self) -> Result<Vec<CustomerPhone>> {
        let rows = sqlx::query("SELECT * FROM customer_phone").fetch_all(&self.pool).await?;
        rows.iter()
            .map(|row| customer_phone_from_row(row).map_err(Into::into))
            .collect()
    }

    pub async fn create(&self, phone: &CustomerPhone) -> Result<CustomerPhone> {
        let customer_id = phone.customer.map(|r| r.customer_id);
        let row = if phone.customer_phone_id != 0 {
            ensure_vacant(
                &self.pool,
                "customer_phone",
                "CustomerPhoneID",
                phone.customer_phone_id,
            )
            .await?;
            sqlx::query(
                r#"INSERT INTO customer_phone ("CustomerPhoneID", "CustomerID", "PhoneNumber")
                   VALUES ($1, $2, $3) RETURNING *"#,
            )
            .bind(phone.customer_phone_id)
            .bind(customer_id)
            .bind(&phone.phone_number)
            .fetch_one(&self.pool)
            .await?
        } else {
            sqlx::query(
                r#"INSERT INTO customer_phone ("CustomerID", "PhoneNumber")
                   VALUES ($1, $2) RETURNING *"#,
            )
            .bind(customer_id)
            .bind(&phone.phone_number)
            .fetch_one(&self.pool)
            .await?
        };
        Ok(customer_phone_from_row(&row)?)
    }

    pub async fn update(&self, phone: &CustomerPhone) -> Result<CustomerPhone> {
        let row = sqlx::query(
            r#"UPDATE customer_phone SET "CustomerID" = $2, "PhoneNumber" = $3
               WHERE "CustomerPhoneID" = $1 RETURNING *"#,
        )
        .bind(phone.customer_phone_id)
        .bind(phone.customer.map(|r| r.customer_id))
        .bind(&phone.phone_number)
        .fetch_one(&self.pool)
        .await?;
        Ok(customer_phone_from_row(&row)?)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query(r#"DELETE FROM customer_phone WHERE "CustomerPhoneID" = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(PersistenceError::NotFound("CustomerPhone"));
        }
        Ok(())
    }
}
