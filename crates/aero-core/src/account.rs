//! Account and ownership models.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Entitlement level of the active session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// No account; nothing persisted server-side beyond the session
    Guest,
    /// Registered single-airport account
    Free,
    /// Multi-airport account with all premium features
    Premium,
}

impl Tier {
    pub fn is_premium(self) -> bool {
        matches!(self, Tier::Premium)
    }
}

/// A registered account as returned by the profile endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default)]
    pub email: Option<String>,
}

impl Account {
    /// Registered accounts are either free or premium; guests have no account.
    pub fn tier(&self) -> Tier {
        if self.is_premium {
            Tier::Premium
        } else {
            Tier::Free
        }
    }
}

/// Who owns a surface.
///
/// The wire format uses `0` as the guest sentinel; real account ids start
/// at 1, so the sentinel can never collide with a registered owner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Owner {
    #[default]
    Guest,
    Account(i64),
}

impl Owner {
    pub fn from_account(account: Option<&Account>) -> Self {
        match account {
            Some(account) => Owner::Account(account.id),
            None => Owner::Guest,
        }
    }

    pub fn account_id(self) -> Option<i64> {
        match self {
            Owner::Guest => None,
            Owner::Account(id) => Some(id),
        }
    }
}

impl Serialize for Owner {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let id = match self {
            Owner::Guest => 0,
            Owner::Account(id) => *id,
        };
        serializer.serialize_i64(id)
    }
}

impl<'de> Deserialize<'de> for Owner {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = i64::deserialize(deserializer)?;
        Ok(if id == 0 {
            Owner::Guest
        } else {
            Owner::Account(id)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_wire_sentinel() {
        assert_eq!(serde_json::to_string(&Owner::Guest).unwrap(), "0");
        assert_eq!(serde_json::to_string(&Owner::Account(42)).unwrap(), "42");

        let guest: Owner = serde_json::from_str("0").unwrap();
        assert_eq!(guest, Owner::Guest);
        let owned: Owner = serde_json::from_str("7").unwrap();
        assert_eq!(owned, Owner::Account(7));
    }

    #[test]
    fn test_account_tier() {
        let account = Account {
            id: 1,
            username: "ops".to_string(),
            is_premium: false,
            email: None,
        };
        assert_eq!(account.tier(), Tier::Free);

        let pro = Account {
            is_premium: true,
            ..account
        };
        assert_eq!(pro.tier(), Tier::Premium);
    }
}
