//! Signed-in user identity.

use serde::{Deserialize, Serialize};

use crate::types::email::Email;
use crate::types::id::UserId;

/// The identity issued by the authentication collaborator on a successful
/// login or registration.
///
/// Immutable once issued; the session owns it for the duration of a
/// signed-in session and persists it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// User's email address.
    pub email: Email,
    /// Storefront role.
    pub role: Role,
}

/// Storefront role with different permission levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Regular shopper.
    #[default]
    Customer,
    /// Store administrator.
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Customer => write!(f, "customer"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Self::Customer),
            "admin" => Ok(Self::Admin),
            _ => Err(format!("invalid role: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trips_through_str() {
        for role in [Role::Customer, Role::Admin] {
            let parsed: Role = role.to_string().parse().unwrap();
            assert_eq!(parsed, role);
        }
        assert!("cashier".parse::<Role>().is_err());
    }

    #[test]
    fn test_identity_serde_shape() {
        let identity = Identity {
            id: UserId::new("u-1"),
            name: "Ada".to_owned(),
            email: Email::parse("ada@example.com").unwrap(),
            role: Role::Customer,
        };

        let json = serde_json::to_value(&identity).unwrap();
        assert_eq!(json["id"], "u-1");
        assert_eq!(json["role"], "customer");
    }
}
