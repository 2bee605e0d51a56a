//! Customer identity type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Identifier for a storefront customer account.
///
/// A newtype over the numeric ID issued by the backing user store, so
/// customer IDs cannot be confused with other numeric identifiers.
///
/// ## Examples
///
/// ```
/// use saltbox_core::CustomerId;
///
/// let id = CustomerId::new(42);
/// assert_eq!(id.as_i64(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(i64);

impl CustomerId {
    /// Create a new ID from an i64 value.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the underlying i64 value.
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for CustomerId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<CustomerId> for i64 {
    fn from(id: CustomerId) -> Self {
        id.0
    }
}
