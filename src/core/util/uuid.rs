//! UUID generation and validation utilities.

use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur during UUID validation.
///
/// # Examples
///
/// ```rust
/// use bolza::core::util::UuidValidationError;
///
/// let err = UuidValidationError::NilUuid;
/// assert!(matches!(err, UuidValidationError::NilUuid));
/// ```
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum UuidValidationError {
    /// The UUID is nil (all zeros), which is not allowed.
    #[error("UUID is nil (all zeros) which is not allowed")]
    NilUuid,
    /// The UUID is not version 4.
    #[error("UUID is not version 4: expected version 4, found version {found}")]
    InvalidVersion {
        /// The version number that was found.
        found: usize,
    },
}

/// Validates that a UUID is not nil and is version 4.
///
/// Vertices and faces are always created with [`make_uuid`], so anything else
/// indicates a corrupted or hand-assembled data structure.
///
/// # Errors
///
/// Returns `UuidValidationError::NilUuid` if the UUID is nil,
/// or `UuidValidationError::InvalidVersion` if the UUID is not version 4.
///
/// # Examples
///
/// ```
/// use bolza::core::collections::Uuid;
/// use bolza::core::util::{make_uuid, validate_uuid};
///
/// assert!(validate_uuid(&make_uuid()).is_ok());
/// assert!(validate_uuid(&Uuid::nil()).is_err());
/// ```
pub const fn validate_uuid(uuid: &Uuid) -> Result<(), UuidValidationError> {
    if uuid.is_nil() {
        return Err(UuidValidationError::NilUuid);
    }

    let version = uuid.get_version_num();
    if version != 4 {
        return Err(UuidValidationError::InvalidVersion { found: version });
    }

    Ok(())
}

/// Generates a random version 4 [Uuid].
///
/// # Example
///
/// ```
/// use bolza::core::util::make_uuid;
/// let uuid = make_uuid();
/// assert_eq!(uuid.get_version_num(), 4);
/// ```
#[must_use]
pub fn make_uuid() -> Uuid {
    Uuid::new_v4()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_uuid_is_unique_v4() {
        let a = make_uuid();
        let b = make_uuid();
        assert_ne!(a, b, "UUIDs should be unique");
        assert_eq!(a.get_version_num(), 4);
        assert!(validate_uuid(&a).is_ok());
    }

    #[test]
    fn test_validate_uuid_rejects_nil_and_other_versions() {
        assert_eq!(
            validate_uuid(&Uuid::nil()),
            Err(UuidValidationError::NilUuid)
        );

        let v1_uuid = Uuid::parse_str("550e8400-e29b-11d4-a716-446655440000").unwrap();
        assert_eq!(
            validate_uuid(&v1_uuid),
            Err(UuidValidationError::InvalidVersion { found: 1 })
        );

        let message = UuidValidationError::InvalidVersion { found: 3 }.to_string();
        assert!(message.contains("found version 3"));
    }
}
