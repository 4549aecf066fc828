//! Lifecycle services for vehicle types and vehicles.

use crate::domain::entities::{Vehicle, VehicleInput, VehicleType, VehicleTypeInput};
use crate::domain::error::{PersistenceError, Result};
use crate::storage::repositories::{VehicleRepository, VehicleTypeRepository};

#[derive(Clone)]
pub struct VehicleTypeService {
    repo: VehicleTypeRepository,
    vehicles: VehicleRepository,
}

impl VehicleTypeService {
    pub fn new(repo: VehicleTypeRepository, vehicles: VehicleRepository) -> Self {
        Self { repo, vehicles }
    }

    pub async fn get_all(&self) -> Result<Vec<VehicleType>> {
        self.repo.get_all().await
    }

    pub async fn create(&self, input: VehicleTypeInput) -> Result<VehicleType> {
        let vehicle_type = VehicleType::from(input);
        vehicle_type.validate()?;
        self.repo.create(&vehicle_type).await
    }

    pub async fn update(&self, input: VehicleTypeInput) -> Result<VehicleType> {
        let id = input
            .vehicle_type_id
            .filter(|id| *id != 0)
            .ok_or_else(|| PersistenceError::id_required("VehicleTypeID"))?;
        let existing = self.repo.find_by_id(id).await?;
        let mut vehicle_type = VehicleType::from(input);
        vehicle_type.vehicle_type_id = existing.vehicle_type_id;
        vehicle_type.validate()?;
        self.repo.update(&vehicle_type).await
    }

    /// Refuses to remove a type while any vehicle still references it.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.repo.find_by_id(id).await?;
        if self.vehicles.count_by_vehicle_type(id).await? > 0 {
            return Err(PersistenceError::Invalid(
                "Cannot delete VehicleType with associated Vehicles".to_string(),
            ));
        }
        self.repo.delete(id).await
    }
}

#[derive(Clone)]
pub struct VehicleService {
    repo: VehicleRepository,
}

impl VehicleService {
    pub fn new(repo: VehicleRepository) -> Self {
        Self { repo }
    }

    pub async fn get_all(&self) -> Result<Vec<Vehicle>> {
        self.repo.get_all().await
    }

    pub async fn create(&self, input: VehicleInput) -> Result<Vehicle> {
        let vehicle = Vehicle::from(input);
        vehicle.validate()?;
        self.repo.create(&vehicle).await
    }

    pub async fn update(&self, input: VehicleInput) -> Result<Vehicle> {
        let id = input
            .vehicle_id
            .filter(|id| *id != 0)
            .ok_or_else(|| PersistenceError::id_required("VehicleID"))?;
        let existing = self.repo.find_by_id(id).await?;
        let mut vehicle = Vehicle::from(input);
        vehicle.vehicle_id = existing.vehicle_id;
        vehicle.validate()?;
        self.repo.update(&vehicle).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.repo.delete(id).await
    }
}
