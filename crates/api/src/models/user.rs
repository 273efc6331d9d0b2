//! User domain type.

use serde::Serialize;
use sqlx::FromRow;

use cartwheel_core::{Email, UserId};

/// A registered user.
///
/// The password hash never leaves the repository layer, so it is not part
/// of this type.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// User's email address.
    pub email: Email,
}
