pub mod menu;
pub mod orders;

use uuid::Uuid;

use crate::domain::errors::DomainError;

/// Identities are opaque to callers; anything that is not one of ours simply
/// does not exist.
pub(crate) fn parse_id(raw: &str, entity: &'static str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(raw).map_err(|_| DomainError::NotFound(entity))
}
