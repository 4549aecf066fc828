//! Lifecycle service for repair records.
//!
//! This is the one service with a cross-entity side effect: the referenced
//! vehicle's `NumberOfRepairs` counter moves with record creation and
//! deletion. The record write and the counter write are separate statements
//! with no transaction around them; a failure between the two leaves the
//! counter out of step with the actual record count.

use crate::domain::entities::{RepairRecord, RepairRecordInput};
use crate::domain::error::{PersistenceError, Result};
use crate::storage::repositories::{RepairRecordRepository, VehicleRepository};

#[derive(Clone)]
pub struct RepairRecordService {
    repo: RepairRecordRepository,
    vehicles: VehicleRepository,
}

impl RepairRecordService {
    pub fn new(repo: RepairRecordRepository, vehicles: VehicleRepository) -> Self {
        Self { repo, vehicles }
    }

    pub async fn get_all(&self) -> Result<Vec<RepairRecord>> {
        self.repo.get_all().await
    }

    pub async fn create(&self, input: RepairRecordInput) -> Result<RepairRecord> {
        let record = RepairRecord::from(input);
        record.validate()?;
        let created = self.repo.create(&record).await?;
        if let Some(vehicle_ref) = created.vehicle {
            let mut vehicle = self.vehicles.find_by_id(vehicle_ref.vehicle_id).await?;
            vehicle.number_of_repairs += 1;
            self.vehicles.update(&vehicle).await?;
        }
        Ok(created)
    }

    /// The counter is not adjusted on update, even when the vehicle
    /// reference changes.
    pub async fn update(&self, input: RepairRecordInput) -> Result<RepairRecord> {
        let id = input
            .repair_record_id
            .filter(|id| *id != 0)
            .ok_or_else(|| PersistenceError::id_required("RepairRecordID"))?;
        let existing = self.repo.find_by_id(id).await?;
        let mut record = RepairRecord::from(input);
        record.repair_record_id = existing.repair_record_id;
        record.validate()?;
        self.repo.update(&record).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let record = self.repo.find_by_id(id).await?;
        if let Some(vehicle_ref) = record.vehicle {
            match self.vehicles.find_by_id(vehicle_ref.vehicle_id).await {
                Ok(mut vehicle) => {
                    vehicle.number_of_repairs -= 1;
                    self.vehicles.update(&vehicle).await?;
                }
                // Stale vehicle reference: skip the decrement.
                Err(PersistenceError::NotFound(_)) => {}
                Err(err) => return Err(err),
            }
        }
        self.repo.delete(id).await
    }
}
