//! Lifecycle services for shipments, trips, drivers and trip assignments.

use crate::domain::entities::{
    Driver, DriverInput, Shipment, ShipmentInput, Trip, TripDriver, TripDriverInput, TripInput,
};
use crate::domain::error::{PersistenceError, Result};
use crate::storage::repositories::{
    DriverRepository, ShipmentRepository, TripDriverRepository, TripRepository,
};

#[derive(Clone)]
pub struct ShipmentService {
    repo: ShipmentRepository,
}

impl ShipmentService {
    pub fn new(repo: ShipmentRepository) -> Self {
        Self { repo }
    }

    pub async fn get_all(&self) -> Result<Vec<Shipment>> {
        self.repo.get_all().await
    }

    pub async fn create(&self, input: ShipmentInput) -> Result<Shipment> {
        let shipment = Shipment::from(input);
        shipment.validate()?;
        self.repo.create(&shipment).await
    }

    pub async fn update(&self, input: ShipmentInput) -> Result<Shipment> {
        let id = input
            .shipment_id
            .filter(|id| *id != 0)
            .ok_or_else(|| PersistenceError::id_required("ShipmentID"))?;
        let existing = self.repo.find_by_id(id).await?;
        let mut shipment = Shipment::from(input);
        shipment.shipment_id = existing.shipment_id;
        shipment.validate()?;
        self.repo.update(&shipment).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.repo.delete(id).await
    }
}

#[derive(Clone)]
pub struct TripService {
    repo: TripRepository,
}

impl TripService {
    pub fn new(repo: TripRepository) -> Self {
        Self { repo }
    }

    pub async fn get_all(&self) -> Result<Vec<Trip>> {
        self.repo.get_all().await
    }

    pub async fn create(&self, input: TripInput) -> Result<Trip> {
        let trip = Trip::from(input);
        trip.validate()?;
        self.repo.create(&trip).await
    }

    pub async fn update(&self, input: TripInput) -> Result<Trip> {
        let id = input
            .trip_id
            .filter(|id| *id != 0)
            .ok_or_else(|| PersistenceError::id_required("TripID"))?;
        let existing = self.repo.find_by_id(id).await?;
        let mut trip = Trip::from(input);
        trip.trip_id = existing.trip_id;
        trip.validate()?;
        self.repo.update(&trip).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.repo.delete(id).await
    }
}

#[derive(Clone)]
pub struct DriverService {
    repo: DriverRepository,
}

impl DriverService {
    pub fn new(repo: DriverRepository) -> Self {
        Self { repo }
    }

    pub async fn get_all(&self) -> Result<Vec<Driver>> {
        self.repo.get_all().await
    }

    pub async fn create(&self, input: DriverInput) -> Result<Driver> {
        let driver = Driver::from(input);
        driver.validate()?;
        self.repo.create(&driver).await
    }

    pub async fn update(&self, input: DriverInput) -> Result<Driver> {
        let id = input
            .driver_id
            .filter(|id| *id != 0)
            .ok_or_else(|| PersistenceError::id_required("DriverID"))?;
        let existing = self.repo.find_by_id(id).await?;
        let mut driver = Driver::from(input);
        driver.driver_id = existing.driver_id;
        driver.validate()?;
        self.repo.update(&driver).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.repo.delete(id).await
    }
}

#[derive(Clone)]
pub struct TripDriverService {
    repo: TripDriverRepository,
}

impl TripDriverService {
    pub fn new(repo: TripDriverRepository) -> Self {
        Self { repo }
    }

    pub async fn get_all(&self) -> Result<Vec<TripDriver>> {
        self.repo.get_all().await
    }

    pub async fn create(&self, input: TripDriverInput) -> Result<TripDriver> {
        let trip_driver = TripDriver::from(input);
        trip_driver.validate()?;
        self.repo.create(&trip_driver).await
    }

    pub async fn update(&self, input: TripDriverInput) -> Result<TripDriver> {
        let id = input
            .trip_driver_id
            .filter(|id| *id != 0)
            .ok_or_else(|| PersistenceError::id_required("TripDriverID"))?;
        let existing = self.repo.find_by_id(id).await?;
        let mut trip_driver = TripDriver::from(input);
        trip_driver.trip_driver_id = existing.trip_driver_id;
        trip_driver.validate()?;
        self.repo.update(&trip_driver).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.repo.delete(id).await
    }
}
