//! Permission requests attached to a reply.

use serde::{Deserialize, Serialize};

/// A user-data permission the reply can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Permission {
    /// The user's display name.
    Name,
    /// Coarse device location (city, postcode).
    DeviceCoarseLocation,
    /// Precise device location (coordinates, street address).
    DevicePreciseLocation,
}

impl Permission {
    /// Every permission, in declaration order.
    pub const ALL: [Self; 3] = [
        Self::Name,
        Self::DeviceCoarseLocation,
        Self::DevicePreciseLocation,
    ];

    /// Returns the wire name of the permission.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "NAME",
            Self::DeviceCoarseLocation => "DEVICE_COARSE_LOCATION",
            Self::DevicePreciseLocation => "DEVICE_PRECISE_LOCATION",
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an unknown permission name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePermissionError(String);

impl std::fmt::Display for ParsePermissionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid permission: '{}'", self.0)
    }
}

impl std::error::Error for ParsePermissionError {}

impl TryFrom<&str> for Permission {
    type Error = ParsePermissionError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|permission| permission.as_str() == s)
            .ok_or_else(|| ParsePermissionError(s.to_owned()))
    }
}

/// Ordered, duplicate-free set of requested permissions.
///
/// The first request of a permission fixes its position; repeats are
/// ignored.
///
/// # Examples
///
/// ```
/// use palaver::response::domain::{Permission, PermissionSet};
///
/// let mut set = PermissionSet::default();
/// set.insert(Permission::DevicePreciseLocation);
/// set.insert(Permission::Name);
/// set.insert(Permission::DevicePreciseLocation);
/// assert_eq!(set.as_slice(), [Permission::DevicePreciseLocation, Permission::Name]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionSet {
    #[serde(default)]
    permissions: Vec<Permission>,
}

impl PermissionSet {
    /// Adds `permission` unless already present.
    ///
    /// Returns `true` if the set changed.
    pub fn insert(&mut self, permission: Permission) -> bool {
        let added = !self.contains(permission);
        self.permissions.push(permission);
        self.dedup();
        added
    }

    /// Returns `true` if `permission` has been requested.
    #[must_use]
    pub fn contains(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }

    /// Returns the permissions in request order.
    #[must_use]
    pub fn as_slice(&self) -> &[Permission] {
        &self.permissions
    }

    /// Returns `true` if nothing has been requested.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }

    // Rehydrated sets may carry repeats, so dedup over the whole sequence.
    fn dedup(&mut self) {
        let mut seen = Vec::with_capacity(self.permissions.len());
        self.permissions.retain(|permission| {
            if seen.contains(permission) {
                false
            } else {
                seen.push(*permission);
                true
            }
        });
    }
}
