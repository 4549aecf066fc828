//! Gateways for the `employee`, `certification` and `mechanic` tables.

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::entities::{Certification, Employee, EmployeeRef, Mechanic, VehicleTypeRef};
use crate::domain::error::{PersistenceError, Result};
use crate::storage::repositories::ensure_vacant;

fn employee_from_row(row: &PgRow) -> Result<Employee, sqlx::Error> {
    Ok(Employee {
        employee_id: row.try_get("EmployeeID")?,
        first_name: row.try_get("FirstName")?,
        surname: row.try_get("Surname")?,
        seniority: row.try_get("Seniority")?,
    })
}

#[derive(Clone)]
pub struct EmployeeRepository {
    pool: PgPool,
}

impl EmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Employee> {
        let row = sqlx::query(r#"SELECT * FROM employee WHERE "EmployeeID" = $1"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        match row {
            Some(row) => Ok(employee_from_row(&row)?),
            None => Err(PersistenceError::NotFound("Employee")),
        }
    }

    pub async fn get_all(&self) -> Result<Vec<Employee>> {
        let rows = sqlx::query("SELECT * FROM employee").fetch_all(&self.pool).await?;
        rows.iter()
            .map(|row| employee_from_row(row).map_err(Into::into))
            .collect()
    }

    pub async fn create(&self, employee: &Employee) -> Result<Employee> {
        let row = if employee.employee_id != 0 {
            ensure_vacant(&self.pool, "employee", "EmployeeID", employee.employee_id).await?;
            sqlx::query(
                r#"INSERT INTO employee ("EmployeeID", "FirstName", "Surname", "Seniority")
                   VALUES ($1, $2, $3, $4) RETURNING *"#,
            )
            .bind(employee.employee_id)
            .bind(&employee.first_name)
            .bind(&employee.surname)
            .bind(employee.seniority)
            .fetch_one(&self.pool)
            .await?
        } else {
            sqlx::query(
                r#"INSERT INTO employee ("FirstName", "Surname", "Seniority")
                   VALUES ($1, $2, $3) RETURNING *"#,
            )
            .bind(&employee.first_name)
            .bind(&employee.surname)
            .bind(employee.seniority)
            .fetch_one(&self.pool)
            .await?
        };
        Ok(employee_from_row(&row)?)
    }

    pub async fn update(&self, employee: &Employee) -> Result<Employee> {
        let row = sqlx::query(
            r#"UPDATE employee SET "FirstName" = $2, "Surname" = $3, "Seniority" = $4
               WHERE "EmployeeID" = $1 RETURNING *"#,
        )
        .bind(employee.employee_id)
        .bind(&employee.first_name)
        .bind(&employee.surname)
        .bind(employee.seniority)
        .fetch_one(&self.pool)
        .await?;
        Ok(employee_from_row(&row)?)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query(r#"DELETE FROM employee WHERE "EmployeeID" = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(PersistenceError::NotFound("Employee"));
        }
        Ok(())
    }
}

fn certification_from_row(row: &PgRow) -> Result<Certification, sqlx::Error> {
    Ok(Certification {
        certification_id: row.try_get("CertificationID")?,
        employee: row.try_get::<Option<i64>, _>("EmployeeID")?.map(EmployeeRef::new),
        vehicle_type: row
            .try_get::<Option<i64>, _>("VehicleTypeID")?
            .map(VehicleTypeRef::new),
    })
}

#[derive(Clone)]
pub struct CertificationRepository {
    pool: PgPool,
}

impl CertificationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Certification> {
        let row = sqlx::query(r#"SELECT * FROM certification WHERE "CertificationID" = $1"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        match row {
            Some(row) => Ok(certification_from_row(&row)?),
            None => Err(PersistenceError::NotFound("Certification")),
        }
    }

    pub async fn get_all(&self) -> Result<Vec<Certification>> {
        let rows = sqlx::query("SELECT * FROM certification").fetch_all(&self.pool).await?;
        rows.iter()
            .map(|row| certification_from_row(row).map_err(Into::into))
            .collect()
    }

    pub async fn create(&self, certification: &Certification) -> Result<Certification> {
        let employee_id = certification.employee.map(|r| r.employee_id);
        let type_id = certification.vehicle_type.map(|r| r.vehicle_type_id);
        let row = if certification.certification_id != 0 {
            ensure_vacant(
                &self.pool,
                "certification",
                "CertificationID",
                certification.certification_id,
            )
            .await?;
            sqlx::query(
                r#"INSERT INTO certification ("CertificationID", "EmployeeID", "VehicleTypeID")
                   VALUES ($1, $2, $3) RETURNING *"#,
            )
            .bind(certification.certification_id)
            .bind(employee_id)
            .bind(type_id)
            .fetch_one(&self.pool)
            .await?
        } else {
            sqlx::query(
                r#"INSERT INTO certification ("EmployeeID", "VehicleTypeID")
                   VALUES ($1, $2) RETURNING *"#,
            )
            .bind(employee_id)
            .bind(type_id)
            .fetch_one(&self.pool)
            .await?
        };
        Ok(certification_from_row(&row)?)
    }

    pub async fn update(&self, certification: &Certification) -> Result<Certification> {
        let row = sqlx::query(
            r#"UPDATE certification SET "EmployeeID" = $2, "VehicleTypeID" = $3
               WHERE "CertificationID" = $1 RETURNING *"#,
        )
        .bind(certification.certification_id)
        .bind(certification.employee.map(|r| r.employee_id))
        .bind(certification.vehicle_type.map(|r| r.vehicle_type_id))
        .fetch_one(&self.pool)
        .await?;
        Ok(certification_from_row(&row)?)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query(r#"DELETE FROM certification WHERE "CertificationID" = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(PersistenceError::NotFound("Certification"));
        }
        Ok(())
    }
}

fn mechanic_from_row(row: &PgRow) -> Result<Mechanic, sqlx::Error> {
    Ok(Mechanic {
        mechanic_id: row.try_get("MechanicID")?,
        employee: row.try_get::<Option<i64>, _>("EmployeeID")?.map(EmployeeRef::new),
        vehicle_type: row
            .try_get::<Option<i64>, _>("VehicleTypeID")?
            .map(VehicleTypeRef::new),
    })
}

#[derive(Clone)]
pub struct MechanicRepository {
    pool: PgPool,
}

impl MechanicRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Mechanic> {
        let row = sqlx::query(r#"SELECT * FROM mechanic WHERE "MechanicID" = $1"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        match row {
            Some(row) => Ok(mechanic_from_row(&row)?),
            None => Err(PersistenceError::NotFound("Mechanic")),
        }
    }

    pub async fn get_all(&self) -> Result<Vec<Mechanic>> {
        let rows = sqlx::query("SELECT * FROM mechanic").fetch_all(&self.pool).await?;
        rows.iter()
            .map(|row| mechanic_from_row(row).map_err(Into::into))
            .collect()
    }

    pub async fn create(&self, mechanic: &Mechanic) -> Result<Mechanic> {
        let employee_id = mechanic.employee.map(|r| r.employee_id);
        let type_id = mechanic.vehicle_type.map(|r| r.vehicle_type_id);
        let row = if mechanic.mechanic_id != 0 {
            ensure_vacant(&self.pool, "mechanic", "MechanicID", mechanic.mechanic_id).await?;
            sqlx::query(
                r#"INSERT INTO mechanic ("MechanicID", "EmployeeID", "VehicleTypeID")
                   VALUES ($1, $2, $3) RETURNING *"#,
            )
            .bind(mechanic.mechanic_id)
            .bind(employee_id)
            .bind(type_id)
            .fetch_one(&self.pool)
            .await?
        } else {
            sqlx::query(
                r#"INSERT INTO mechanic ("EmployeeID", "VehicleTypeID")
                   VALUES ($1, $2) RETURNING *"#,
            )
            .bind(employee_id)
            .bind(type_id)
            .fetch_one(&self.pool)
            .await?
        };
        Ok(mechanic_from_row(&row)?)
    }

    pub async fn update(&self, mechanic: &Mechanic) -> Result<Mechanic> {
        let row = sqlx::query(
            r#"UPDATE mechanic SET "EmployeeID" = $2, "VehicleTypeID" = $3
               WHERE "MechanicID" = $1 RETURNING *"#,
        )
        .bind(mechanic.mechanic_id)
        .bind(mechanic.employee.map(|r| r.employee_id))
        .bind(mechanic.vehicle_type.map(|r| r.vehicle_type_id))
        .fetch_one(&self.pool)
        .await?;
        Ok(mechanic_from_row(&row)?)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query(r#"DELETE FROM mechanic WHERE "MechanicID" = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(PersistenceError::NotFound("Mechanic"));
        }
        Ok(())
    }
}
