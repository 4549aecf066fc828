//! Persistence gateways, one per entity table.
//!
//! Each repository is the sole storage interface for its entity: find-by-id,
//! get-all, create (with explicit-identifier duplicate check), full-field
//! update, and delete. Rows are mapped by hand from the case-preserving
//! column names; identifier value `0` on create means "assign from storage".

use sqlx::PgPool;

use crate::domain::error::{PersistenceError, Result};

pub mod customers;
pub mod freight;
pub mod personnel;
pub mod repairs;
pub mod vehicles;

pub use customers::{CustomerPhoneRepository, CustomerRepository};
pub use freight::{DriverRepository, ShipmentRepository, TripDriverRepository, TripRepository};
pub use personnel::{CertificationRepository, EmployeeRepository, MechanicRepository};
pub use repairs::RepairRecordRepository;
pub use vehicles::{VehicleRepository, VehicleTypeRepository};

/// Fails with `Conflict` when a row with the supplied identifier already
/// exists. Only called for explicitly supplied (non-zero) identifiers.
pub(crate) async fn ensure_vacant(
    pool: &PgPool,
    table: &str,
    id_column: &'static str,
    id: i64,
) -> Result<()> {
    let sql = format!(r#"SELECT 1 FROM {table} WHERE "{id_column}" = $1"#);
    if sqlx::query(&sql).bind(id).fetch_optional(pool).await?.is_some() {
        return Err(PersistenceError::Conflict(id_column));
    }
    Ok(())
}
