//! Lifecycle services for employees, certifications and mechanics.

use crate::domain::entities::{
    Certification, CertificationInput, Employee, EmployeeInput, Mechanic, MechanicInput,
};
use crate::domain::error::{PersistenceError, Result};
use crate::storage::repositories::{CertificationRepository, EmployeeRepository, MechanicRepository};

#[derive(Clone)]
pub struct EmployeeService {
    repo: EmployeeRepository,
}

impl EmployeeService {
    pub fn new(repo: EmployeeRepository) -> Self {
        Self { repo }
    }

    pub async fn get_all(&self) -> Result<Vec<Employee>> {
        self.repo.get_all().await
    }

    pub async fn create(&self, input: EmployeeInput) -> Result<Employee> {
        let employee = Employee::from(input);
        employee.validate()?;
        self.repo.create(&employee).await
    }

    pub async fn update(&self, input: EmployeeInput) -> Result<Employee> {
        let id = input
            .employee_id
            .filter(|id| *id != 0)
            .ok_or_else(|| PersistenceError::id_required("EmployeeID"))?;
        let existing = self.repo.find_by_id(id).await?;
        let mut employee = Employee::from(input);
        employee.employee_id = existing.employee_id;
        employee.validate()?;
        self.repo.update(&employee).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.repo.delete(id).await
    }
}

#[derive(Clone)]
pub struct CertificationService {
    repo: CertificationRepository,
}

impl CertificationService {
    pub fn new(repo: CertificationRepository) -> Self {
        Self { repo }
    }

    pub async fn get_all(&self) -> Result<Vec<Certification>> {
        self.repo.get_all().await
    }

    pub async fn create(&self, input: CertificationInput) -> Result<Certification> {
        let certification = Certification::from(input);
        certification.validate()?;
        self.repo.create(&certification).await
    }

    pub async fn update(&self, input: CertificationInput) -> Result<Certification> {
        let id = input
            .certification_id
            .filter(|id| *id != 0)
            .ok_or_else(|| PersistenceError::id_required("CertificationID"))?;
        let existing = self.repo.find_by_id(id).await?;
        let mut certification = Certification::from(input);
        certification.certification_id = existing.certification_id;
        certification.validate()?;
        self.repo.update(&certification).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.repo.delete(id).await
    }
}

#[derive(Clone)]
pub struct MechanicService {
    repo: MechanicRepository,
}

impl MechanicService {
    pub fn new(repo: MechanicRepository) -> Self {
        Self { repo }
    }

    pub async fn get_all(&self) -> Result<Vec<Mechanic>> {
        self.repo.get_all().await
    }

    pub async fn create(&self, input: MechanicInput) -> Result<Mechanic> {
        let mechanic = Mechanic::from(input);
        mechanic.validate()?;
        self.repo.create(&mechanic).await
    }

    pub async fn update(&self, input: MechanicInput) -> Result<Mechanic> {
        let id = input
            .mechanic_id
            .filter(|id| *id != 0)
            .ok_or_else(|| PersistenceError::id_required("MechanicID"))?;
        let existing = self.repo.find_by_id(id).await?;
        let mut mechanic = Mechanic::from(input);
        mechanic.mechanic_id = existing.mechanic_id;
        mechanic.validate()?;
        self.repo.update(&mechanic).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.repo.delete(id).await
    }
}
