//! Gateways for the `shipment`, `trip`, `driver` and `trip_driver` tables.

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::entities::{
    CustomerRef, Driver, DriverRef, Shipment, ShipmentRef, Trip, TripDriver, TripRef, VehicleRef,
};
use crate::domain::error::{PersistenceError, Result};
use crate::storage::repositories::ensure_vacant;

fn shipment_from_row(row: &PgRow) -> Result<Shipment, sqlx::Error> {
    Ok(Shipment {
        shipment_id: row.try_get("ShipmentID")?,
        customer: row.try_get::<Option<i64>, _>("CustomerID")?.map(CustomerRef::new),
        weight: row.try_get("Weight")?,
        value: row.try_get("Value")?,
        origin_place: row.try_get("OriginPlace")?,
        destination_place: row.try_get("DestinationPlace")?,
    })
}

#[derive(Clone)]
pub struct ShipmentRepository {
    pool: PgPool,
}

impl ShipmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Shipment> {
        let row = sqlx::query(r#"SELECT * FROM shipment WHERE "ShipmentID" = $1"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        match row {
            Some(row) => Ok(shipment_from_row(&row)?),
            None => Err(PersistenceError::NotFound("Shipment")),
        }
    }

    pub async fn get_all(&self) -> Result<Vec<Shipment>> {
        let rows = sqlx::query("SELECT * FROM shipment").fetch_all(&self.pool).await?;
        rows.iter()
            .map(|row| shipment_from_row(row).map_err(Into::into))
            .collect()
    }

    pub async fn create(&self, shipment: &Shipment) -> Result<Shipment> {
        let customer_id = shipment.customer.map(|r| r.customer_id);
        let row = if shipment.shipment_id != 0 {
            ensure_vacant(&self.pool, "shipment", "ShipmentID", shipment.shipment_id).await?;
            sqlx::query(
                r#"INSERT INTO shipment
                       ("ShipmentID", "CustomerID", "Weight", "Value", "OriginPlace", "DestinationPlace")
                   VALUES ($1, $2, $3, $4, $5, $6) RETURNING *"#,
            )
            .bind(shipment.shipment_id)
            .bind(customer_id)
            .bind(shipment.weight)
            .bind(shipment.value)
            .bind(&shipment.origin_place)
            .bind(&shipment.destination_place)
            .fetch_one(&self.pool)
            .await?
        } else {
            sqlx::query(
                r#"INSERT INTO shipment
                       ("CustomerID", "Weight", "Value", "OriginPlace", "DestinationPlace")
                   VALUES ($1, $2, $3, $4, $5) RETURNING *"#,
            )
            .bind(customer_id)
            .bind(shipment.weight)
            .bind(shipment.value)
            .bind(&shipment.origin_place)
            .bind(&shipment.destination_place)
            .fetch_one(&self.pool)
            .await?
        };
        Ok(shipment_from_row(&row)?)
    }

    pub async fn update(&self, shipment: &Shipment) -> Result<Shipment> {
        let row = sqlx::query(
            r#"UPDATE shipment
               SET "CustomerID" = $2, "Weight" = $3, "Value" = $4,
                   "OriginPlace" = $5, "DestinationPlace" = $6
               WHERE "ShipmentID" = $1 RETURNING *"#,
        )
        .bind(shipment.shipment_id)
        .bind(shipment.customer.map(|r| r.customer_id))
        .bind(shipment.weight)
        .bind(shipment.value)
        .bind(&shipment.origin_place)
        .bind(&shipment.destination_place)
        .fetch_one(&self.pool)
        .await?;
        Ok(shipment_from_row(&row)?)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query(r#"DELETE FROM shipment WHERE "ShipmentID" = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(PersistenceError::NotFound("Shipment"));
        }
        Ok(())
    }
}

fn trip_from_row(row: &PgRow) -> Result<Trip, sqlx::Error> {
    Ok(Trip {
        trip_id: row.try_get("TripID")?,
        vehicle: row.try_get::<Option<i64>, _>("VehicleID")?.map(VehicleRef::new),
        shipment: row.try_get::<Option<i64>, _>("ShipmentID")?.map(ShipmentRef::new),
        from_place: row.try_get("FromPlace")?,
        to_place: row.try_get("ToPlace")?,
    })
}

#[derive(Clone)]
pub struct TripRepository {
    pool: PgPool,
}

impl TripRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Trip> {
        let row = sqlx::query(r#"SELECT * FROM trip WHERE "TripID" = $1"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        match row {
            Some(row) => Ok(trip_from_row(&row)?),
            None => Err(PersistenceError::NotFound("Trip")),
        }
    }

    pub async fn get_all(&self) -> Result<Vec<Trip>> {
        let rows = sqlx::query("SELECT * FROM trip").fetch_all(&self.pool).await?;
        rows.iter()
            .map(|row| trip_from_row(row).map_err(Into::into))
            .collect()
    }

    pub async fn create(&self, trip: &Trip) -> Result<Trip> {
        let vehicle_id = trip.vehicle.map(|r| r.vehicle_id);
        let shipment_id = trip.shipment.map(|r| r.shipment_id);
        let row = if trip.trip_id != 0 {
            ensure_vacant(&self.pool, "trip", "TripID", trip.trip_id).await?;
            sqlx::query(
                r#"INSERT INTO trip ("TripID", "VehicleID", "ShipmentID", "FromPlace", "ToPlace")
                   VALUES ($1, $2, $3, $4, $5) RETURNING *"#,
            )
            .bind(trip.trip_id)
            .bind(vehicle_id)
            .bind(shipment_id)
            .bind(&trip.from_place)
            .bind(&trip.to_place)
            .fetch_one(&self.pool)
            .await?
        } else {
            sqlx::query(
                r#"INSERT INTO trip ("VehicleID", "ShipmentID", "FromPlace", "ToPlace")
                   VALUES ($1, $2, $3, $4) RETURNING *"#,
            )
            .bind(vehicle_id)
            .bind(shipment_id)
            .bind(&trip.from_place)
            .bind(&trip.to_place)
            .fetch_one(&self.pool)
            .await?
        };
        Ok(trip_from_row(&row)?)
    }

    pub async fn update(&self, trip: &Trip) -> Result<Trip> {
        let row = sqlx::query(
            r#"UPDATE trip
               SET "VehicleID" = $2, "ShipmentID" = $3, "FromPlace" = $4, "ToPlace" = $5
               WHERE "TripID" = $1 RETURNING *"#,
        )
        .bind(trip.trip_id)
        .bind(trip.vehicle.map(|r| r.vehicle_id))
        .bind(trip.shipment.map(|r| r.shipment_id))
        .bind(&trip.from_place)
        .bind(&trip.to_place)
        .fetch_one(&self.pool)
        .await?;
        Ok(trip_from_row(&row)?)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query(r#"DELETE FROM trip WHERE "TripID" = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(PersistenceError::NotFound("Trip"));
        }
        Ok(())
    }
}

fn driver_from_row(row: &PgRow) -> Result<Driver, sqlx::Error> {
    Ok(Driver {
        driver_id: row.try_get("DriverID")?,
        driver_name: row.try_get("DriverName")?,
    })
}

#[derive(Clone)]
pub struct DriverRepository {
    pool: PgPool,
}

impl DriverRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Driver> {
        let row = sqlx::query(r#"SELECT * FROM driver WHERE "DriverID" = $1"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        match row {
            Some(row) => Ok(driver_from_row(&row)?),
            None => Err(PersistenceError::NotFound("Driver")),
        }
    }

    pub async fn get_all(&self) -> Result<Vec<Driver>> {
        let rows = sqlx::query("SELECT * FROM driver").fetch_all(&self.pool).await?;
        rows.iter()
            .map(|row| driver_from_row(row).map_err(Into::into))
            .collect()
    }

    pub async fn create(&self, driver: &Driver) -> Result<Driver> {
        let row = if driver.driver_id != 0 {
            ensure_vacant(&self.pool, "driver", "DriverID", driver.driver_id).await?;
            sqlx::query(
                r#"INSERT INTO driver ("DriverID", "DriverName") VALUES ($1, $2) RETURNING *"#,
            )
            .bind(driver.driver_id)
            .bind(&driver.driver_name)
            .fetch_one(&self.pool)
            .await?
        } else {
            sqlx::query(r#"INSERT INTO driver ("DriverName") VALUES ($1) RETURNING *"#)
                .bind(&driver.driver_name)
                .fetch_one(&self.pool)
                .await?
        };
        Ok(driver_from_row(&row)?)
    }

    pub async fn update(&self, driver: &Driver) -> Result<Driver> {
        let row = sqlx::query(
            r#"UPDATE driver SET "DriverName" = $2 WHERE "DriverID" = $1 RETURNING *"#,
        )
        .bind(driver.driver_id)
        .bind(&driver.driver_name)
        .fetch_one(&self.pool)
        .await?;
        Ok(driver_from_row(&row)?)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query(r#"DELETE FROM driver WHERE "DriverID" = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(PersistenceError::NotFound("Driver"));
        }
        Ok(())
    }
}

fn trip_driver_from_row(row: &PgRow) -> Result<TripDriver, sqlx::Error> {
    Ok(TripDriver {
        trip_driver_id: row.try_get("TripDriverID")?,
        trip: row.try_get::<Option<i64>, _>("TripID")?.map(TripRef::new),
        driver: row.try_get::<Option<i64>, _>("DriverID")?.map(DriverRef::new),
    })
}

#[derive(Clone)]
pub struct TripDriverRepository {
    pool: PgPool,
}

impl TripDriverRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<TripDriver> {
        let row = sqlx::query(r#"SELECT * FROM trip_driver WHERE "TripDriverID" = $1"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        match row {
            Some(row) => Ok(trip_driver_from_row(&row)?),
            None => Err(PersistenceError::NotFound("TripDriver")),
        }
    }

    pub async fn get_all(&self) -> Result<Vec<TripDriver>> {
        let rows = sqlx::query("SELECT * FROM trip_driver").fetch_all(&self.pool).await?;
        rows.iter()
            .map(|row| trip_driver_from_row(row).map_err(Into::into))
            .collect()
    }

    pub async fn create(&self, trip_driver: &TripDriver) -> Result<TripDriver> {
        let trip_id = trip_driver.trip.map(|r| r.trip_id);
        let driver_id = trip_driver.driver.map(|r| r.driver_id);
        let row = if trip_driver.trip_driver_id != 0 {
            ensure_vacant(
                &self.pool,
                "trip_driver",
                "TripDriverID",
                trip_driver.trip_driver_id,
            )
            .await?;
            sqlx::query(
                r#"INSERT INTO trip_driver ("TripDriverID", "TripID", "DriverID")
                   VALUES ($1, $2, $3) RETURNING *"#,
            )
            .bind(trip_driver.trip_driver_id)
            .bind(trip_id)
            .bind(driver_id)
            .fetch_one(&self.pool)
            .await?
        } else {
            sqlx::query(
                r#"INSERT INTO trip_driver ("TripID", "DriverID") VALUES ($1, $2) RETURNING *"#,
            )
            .bind(trip_id)
            .bind(driver_id)
            .fetch_one(&self.pool)
            .await?
        };
        Ok(trip_driver_from_row(&row)?)
    }

    pub async fn update(&self, trip_driver: &TripDriver) -> Result<TripDriver> {
        let row = sqlx::query(
            r#"UPDATE trip_driver SET "TripID" = $2, "DriverID" = $3
               WHERE "TripDriverID" = $1 RETURNING *"#,
        )
        .bind(trip_driver.trip_driver_id)
        .bind(trip_driver.trip.map(|r| r.trip_id))
        .bind(trip_driver.driver.map(|r| r.driver_id))
        .fetch_one(&self.pool)
        .await?;
        Ok(trip_driver_from_row(&row)?)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query(r#"DELETE FROM trip_driver WHERE "TripDriverID" = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(PersistenceError::NotFound("TripDriver"));
        }
        Ok(())
    }
}
