//! Error taxonomy shared by repositories and services.
//!
//! Every failure a CRUD operation can produce is one of these variants. The
//! transport layer owns the HTTP mapping; everything below it only decides
//! *which* variant applies.

pub type Result<T, E = PersistenceError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    /// One or more required fields missing or empty (400).
    /// The message lists every violation joined by "; ".
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Input rejected for a reason other than field-level validation,
    /// e.g. a missing identifier on update or a guarded delete (400).
    #[error("{0}")]
    Invalid(String),

    /// No row with the requested identifier (404).
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Create with an identifier that already exists (409).
    #[error("{0} already exists")]
    Conflict(&'static str),

    /// Underlying storage failure; surfaced generically to clients (500).
    #[error(transparent)]
    Storage(#[from] sqlx::Error),
}

impl PersistenceError {
    /// Builds a `Validation` error from individual field violations.
    pub fn validation(violations: Vec<String>) -> Self {
        PersistenceError::Validation(violations.join("; "))
    }

    /// The identifier field is required for update.
    pub fn id_required(id_field: &str) -> Self {
        PersistenceError::Invalid(format!("{id_field} is required for update"))
    }

    /// HTTP status this error maps to.
    pub fn status(&self) -> u16 {
        match self {
            PersistenceError::Validation(_) | PersistenceError::Invalid(_) => 400,
            PersistenceError::NotFound(_) => 404,
            PersistenceError::Conflict(_) => 409,
            PersistenceError::Storage(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_the_taxonomy() {
        assert_eq!(PersistenceError::Validation("x".into()).status(), 400);
        assert_eq!(PersistenceError::id_required("TripID").status(), 400);
        assert_eq!(PersistenceError::NotFound("Trip").status(), 404);
        assert_eq!(PersistenceError::Conflict("TripID").status(), 409);
    }

    #[test]
    fn messages_match_the_wire_contract() {
        let err = PersistenceError::validation(vec![
            "FirstName should not be empty".to_string(),
            "Surname should not be empty".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "Validation failed: FirstName should not be empty; Surname should not be empty"
        );
        assert_eq!(
            PersistenceError::id_required("VehicleTypeID").to_string(),
            "VehicleTypeID is required for update"
        );
        assert_eq!(PersistenceError::NotFound("VehicleType").to_string(), "VehicleType not found");
        assert_eq!(
            PersistenceError::Conflict("VehicleTypeID").to_string(),
            "VehicleTypeID already exists"
        );
    }
}
