//! Gateway for the `repair_record` table.

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::entities::{MechanicRef, RepairRecord, VehicleRef};
use crate::domain::error::{PersistenceError, Result};
use crate::storage::repositories::ensure_vacant;

fn repair_record_from_row(row: &PgRow) -> Result<RepairRecord, sqlx::Error> {
    Ok(RepairRecord {
        repair_record_id: row.try_get("RepairRecordID")?,
        vehicle: row.try_get::<Option<i64>, _>("VehicleID")?.map(VehicleRef::new),
        mechanic: row.try_get::<Option<i64>, _>("MechanicID")?.map(MechanicRef::new),
        estimated_time: row.try_get("EstimatedTime")?,
        actual_cost_time: row.try_get("ActualCostTime")?,
    })
}

#[derive(Clone)]
pub struct RepairRecordRepository {
    pool: PgPool,
}

impl RepairRecordRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<RepairRecord> {
        let row = sqlx::query(r#"SELECT * FROM repair_record WHERE "RepairRecordID" = $1"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        match row {
            Some(row) => Ok(repair_record_from_row(&row)?),
            None => Err(PersistenceError::NotFound("RepairRecord")),
        }
    }

    pub async fn get_all(&self) -> Result<Vec<RepairRecord>> {
        let rows = sqlx::query("SELECT * FROM repair_record").fetch_all(&self.pool).await?;
        rows.iter()
            .map(|row| repair_record_from_row(row).map_err(Into::into))
            .collect()
    }

    pub async fn create(&self, record: &RepairRecord) -> Result<RepairRecord> {
        let vehicle_id = record.vehicle.map(|r| r.vehicle_id);
        let mechanic_id = record.mechanic.map(|r| r.mechanic_id);
        let row = if record.repair_record_id != 0 {
            ensure_vacant(
                &self.pool,
                "repair_record",
                "RepairRecordID",
                record.repair_record_id,
            )
            .await?;
            sqlx::query(
                r#"INSERT INTO repair_record
                       ("RepairRecordID", "VehicleID", "MechanicID", "EstimatedTime", "ActualCostTime")
                   VALUES ($1, $2, $3, $4, $5) RETURNING *"#,
            )
            .bind(record.repair_record_id)
            .bind(vehicle_id)
            .bind(mechanic_id)
            .bind(record.estimated_time)
            .bind(record.actual_cost_time)
            .fetch_one(&self.pool)
            .await?
        } else {
            sqlx::query(
                r#"INSERT INTO repair_record
                       ("VehicleID", "MechanicID", "EstimatedTime", "ActualCostTime")
                   VALUES ($1, $2, $3, $4) RETURNING *"#,
            )
            .bind(vehicle_id)
            .bind(mechanic_id)
            .bind(record.estimated_time)
            .bind(record.actual_cost_time)
            .fetch_one(&self.pool)
            .await?
        };
        Ok(repair_record_from_row(&row)?)
    }

    pub async fn update(&self, record: &RepairRecord) -> Result<RepairRecord> {
        let row = sqlx::query(
            r#"UPDATE repair_record
               SET "VehicleID" = $2, "MechanicID" = $3, "EstimatedTime" = $4, "ActualCostTime" = $5
               WHERE "RepairRecordID" = $1 RETURNING *"#,
        )
        .bind(record.repair_record_id)
        .bind(record.vehicle.map(|r| r.vehicle_id))
        .bind(record.mechanic.map(|r| r.mechanic_id))
        .bind(record.estimated_time)
        .bind(record.actual_cost_time)
        .fetch_one(&self.pool)
        .await?;
        Ok(repair_record_from_row(&row)?)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query(r#"DELETE FROM repair_record WHERE "RepairRecordID" = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(PersistenceError::NotFound("RepairRecord"));
        }
        Ok(())
    }
}
