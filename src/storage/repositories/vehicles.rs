//! Gateways for the `vehicle_type` and `vehicle` tables.

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::entities::{Vehicle, VehicleType, VehicleTypeRef};
use crate::domain::error::{PersistenceError, Result};
use crate::storage::repositories::ensure_vacant;

fn vehicle_type_from_row(row: &PgRow) -> Result<VehicleType, sqlx::Error> {
    Ok(VehicleType {
        vehicle_type_id: row.try_get("VehicleTypeID")?,
        vehicle_type_name: row.try_get("VehicleTypeName")?,
    })
}

#[derive(Clone)]
pub struct VehicleTypeRepository {
    pool: PgPool,
}

impl VehicleTypeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<VehicleType> {
        let row = sqlx::query(r#"SELECT * FROM vehicle_type WHERE "VehicleTypeID" = $1"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        match row {
            Some(row) => Ok(vehicle_type_from_row(&row)?),
            None => Err(PersistenceError::NotFound("VehicleType")),
        }
    }

    pub async fn get_all(&self) -> Result<Vec<VehicleType>> {
        let rows = sqlx::query("SELECT * FROM vehicle_type")
            .fetch_all(&self.pool)
            .await?;
        rows.iter()
            .map(|row| vehicle_type_from_row(row).map_err(Into::into))
            .collect()
    }

    pub async fn create(&self, vehicle_type: &VehicleType) -> Result<VehicleType> {
        let row = if vehicle_type.vehicle_type_id != 0 {
            ensure_vacant(
                &self.pool,
                "vehicle_type",
                "VehicleTypeID",
                vehicle_type.vehicle_type_id,
            )
            .await?;
            sqlx::query(
                r#"INSERT INTO vehicle_type ("VehicleTypeID", "VehicleTypeName")
                   VALUES ($1, $2) RETURNING *"#,
            )
            .bind(vehicle_type.vehicle_type_id)
            .bind(&vehicle_type.vehicle_type_name)
            .fetch_one(&self.pool)
            .await?
        } else {
            sqlx::query(r#"INSERT INTO vehicle_type ("VehicleTypeName") VALUES ($1) RETURNING *"#)
                .bind(&vehicle_type.vehicle_type_name)
                .fetch_one(&self.pool)
                .await?
        };
        Ok(vehicle_type_from_row(&row)?)
    }

    pub async fn update(&self, vehicle_type: &VehicleType) -> Result<VehicleType> {
        let row = sqlx::query(
            r#"UPDATE vehicle_type SET "VehicleTypeName" = $2
               WHERE "VehicleTypeID" = $1 RETURNING *"#,
        )
        .bind(vehicle_type.vehicle_type_id)
        .bind(&vehicle_type.vehicle_type_name)
        .fetch_one(&self.pool)
        .await?;
        Ok(vehicle_type_from_row(&row)?)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query(r#"DELETE FROM vehicle_type WHERE "VehicleTypeID" = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(PersistenceError::NotFound("VehicleType"));
        }
        Ok(())
    }
}

fn vehicle_from_row(row: &PgRow) -> Result<Vehicle, sqlx::Error> {
    Ok(Vehicle {
        vehicle_id: row.try_get("VehicleID")?,
        vehicle_type: row
            .try_get::<Option<i64>, _>("VehicleTypeID")?
            .map(VehicleTypeRef::new),
        brand: row.try_get("Brand")?,
        load: row.try_get("Load")?,
        capacity: row.try_get("Capacity")?,
        year: row.try_get("Year")?,
        number_of_repairs: row.try_get("NumberOfRepairs")?,
    })
}

#[derive(Clone)]
pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Vehicle> {
        let row = sqlx::query(r#"SELECT * FROM vehicle WHERE "VehicleID" = $1"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        match row {
            Some(row) => Ok(vehicle_from_row(&row)?),
            None => Err(PersistenceError::NotFound("Vehicle")),
        }
    }

    pub async fn get_all(&self) -> Result<Vec<Vehicle>> {
        let rows = sqlx::query("SELECT * FROM vehicle").fetch_all(&self.pool).await?;
        rows.iter()
            .map(|row| vehicle_from_row(row).map_err(Into::into))
            .collect()
    }

    /// How many vehicles currently reference the given type. Used by the
    /// vehicle type deletion guard.
    pub async fn count_by_vehicle_type(&self, vehicle_type_id: i64) -> Result<i64> {
        let count: i64 =
            sqlx::query_scalar(r#"SELECT COUNT(*) FROM vehicle WHERE "VehicleTypeID" = $1"#)
                .bind(vehicle_type_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }

    pub async fn create(&self, vehicle: &Vehicle) -> Result<Vehicle> {
        let type_id = vehicle.vehicle_type.map(|r| r.vehicle_type_id);
        let row = if vehicle.vehicle_id != 0 {
            ensure_vacant(&self.pool, "vehicle", "VehicleID", vehicle.vehicle_id).await?;
            sqlx::query(
                r#"INSERT INTO vehicle
                       ("VehicleID", "VehicleTypeID", "Brand", "Load", "Capacity", "Year", "NumberOfRepairs")
                   VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *"#,
            )
            .bind(vehicle.vehicle_id)
            .bind(type_id)
            .bind(&vehicle.brand)
            .bind(vehicle.load)
            .bind(vehicle.capacity)
            .bind(vehicle.year)
            .bind(vehicle.number_of_repairs)
            .fetch_one(&self.pool)
            .await?
        } else {
            sqlx::query(
                r#"INSERT INTO vehicle
                       ("VehicleTypeID", "Brand", "Load", "Capacity", "Year", "NumberOfRepairs")
                   VALUES ($1, $2, $3, $4, $5, $6) RETURNING *"#,
            )
            .bind(type_id)
            .bind(&vehicle.brand)
            .bind(vehicle.load)
            .bind(vehicle.capacity)
            .bind(vehicle.year)
            .bind(vehicle.number_of_repairs)
            .fetch_one(&self.pool)
            .await?
        };
        Ok(vehicle_from_row(&row)?)
    }

    pub async fn update(&self, vehicle: &Vehicle) -> Result<Vehicle> {
        let row = sqlx::query(
            r#"UPDATE vehicle
               SET "VehicleTypeID" = $2, "Brand" = $3, "Load" = $4,
                   "Capacity" = $5, "Year" = $6, "NumberOfRepairs" = $7
               WHERE "VehicleID" = $1 RETURNING *"#,
        )
        .bind(vehicle.vehicle_id)
        .bind(vehicle.vehicle_type.map(|r| r.vehicle_type_id))
        .bind(&vehicle.brand)
        .bind(vehicle.load)
        .bind(vehicle.capacity)
        .bind(vehicle.year)
        .bind(vehicle.number_of_repairs)
        .fetch_one(&self.pool)
        .await?;
        Ok(vehicle_from_row(&row)?)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query(r#"DELETE FROM vehicle WHERE "VehicleID" = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(PersistenceError::NotFound("Vehicle"));
        }
        Ok(())
    }
}
