//! ObjectId helpers.
//!
//! Identifiers cross the API boundary as 24-character hex strings and are
//! stored as BSON ObjectIds.

use bson::oid::ObjectId;
use validator::ValidationError;

/// Parses a hex string into an ObjectId, `None` when malformed.
pub fn parse_object_id(value: &str) -> Option<ObjectId> {
    ObjectId::parse_str(value.trim()).ok()
}

/// `validator` hook for DTO fields that reference another document.
pub fn validate_object_id(value: &str) -> Result<(), ValidationError> {
    match parse_object_id(value) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("object_id")),
    }
}
