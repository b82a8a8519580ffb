use serde::{Deserialize, Serialize};
use std::fmt;

/// User role, fixed at account creation. Registration always produces
/// `Regular`; admins are promoted directly in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(i16)]
pub enum UserRole {
    #[default]
    Regular = 0,
    Admin = 1,
}

impl UserRole {
    /// Stored form.
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    /// Wire form, as serialized into session DTOs.
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Admin => "admin",
        }
    }

    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Inverse of [`id`](Self::id). An unknown id can only come from a
    /// manual database edit; it demotes to `Regular` instead of
    /// failing the whole row.
    #[inline]
    pub fn from_id(id: i16) -> Self {
        match id {
            1 => Self::Admin,
            0 => Self::Regular,
            other => {
                tracing::error!(id = other, "Unknown user role id, treating as regular");
                Self::Regular
            }
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_round_trip() {
        for role in [UserRole::Regular, UserRole::Admin] {
            assert_eq!(UserRole::from_id(role.id()), role);
        }
        // Unknown ids demote to the least privileged role
        assert_eq!(UserRole::from_id(42), UserRole::Regular);
    }

    #[test]
    fn test_display_matches_code() {
        assert_eq!(UserRole::Regular.to_string(), "regular");
        assert_eq!(UserRole::Admin.to_string(), "admin");
    }

    #[test]
    fn test_default_is_least_privileged() {
        assert_eq!(UserRole::default(), UserRole::Regular);
        assert!(!UserRole::default().is_admin());
        assert!(UserRole::Admin.is_admin());
    }
}
