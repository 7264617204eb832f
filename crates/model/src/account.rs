//! Patient account records.
//!
//! An account is the owning side of every patient-scoped relationship:
//! appointments, prescriptions, billing records and payment instruments all
//! reference an `AccountId`.
//!
//! Username and email are required to be unique across accounts, but that
//! precondition is enforced by the upstream validation collaborator, not
//! here — see the store crate's documentation for the contract.

use crate::ids::AccountId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored patient account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Server-assigned identity.
    pub id: AccountId,
    pub first_name: String,
    pub last_name: String,
    /// Unique login name (uniqueness is a caller-side precondition).
    pub username: String,
    /// Unique contact email (uniqueness is a caller-side precondition).
    pub email: String,
    pub phone: Option<String>,
    /// ISO-8601 date (`YYYY-MM-DD`); the store never interprets it.
    pub date_of_birth: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub insurance_provider: Option<String>,
    pub insurance_policy_number: Option<String>,
    /// Server-assigned creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Fields a caller may supply when creating an account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub insurance_provider: Option<String>,
    #[serde(default)]
    pub insurance_policy_number: Option<String>,
}

/// Partial update for an account. Absent fields leave the stored value
/// untouched; an optional stored field cannot be cleared back to unset.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub insurance_provider: Option<String>,
    pub insurance_policy_number: Option<String>,
}

impl Account {
    /// Builds the stored shape from an insertable one. This is the only
    /// place server-assigned account fields are populated.
    pub fn from_new(id: AccountId, new: NewAccount, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            first_name: new.first_name,
            last_name: new.last_name,
            username: new.username,
            email: new.email,
            phone: new.phone,
            date_of_birth: new.date_of_birth,
            address: new.address,
            city: new.city,
            state: new.state,
            postal_code: new.postal_code,
            insurance_provider: new.insurance_provider,
            insurance_policy_number: new.insurance_policy_number,
            created_at,
        }
    }
}

impl AccountPatch {
    /// Merges the supplied fields over an existing account.
    pub fn apply(self, account: &mut Account) {
        if let Some(v) = self.first_name {
            account.first_name = v;
        }
        if let Some(v) = self.last_name {
            account.last_name = v;
        }
        if let Some(v) = self.username {
            account.username = v;
        }
        if let Some(v) = self.email {
            account.email = v;
        }
        if let Some(v) = self.phone {
            account.phone = Some(v);
        }
        if let Some(v) = self.date_of_birth {
            account.date_of_birth = Some(v);
        }
        if let Some(v) = self.address {
            account.address = Some(v);
        }
        if let Some(v) = self.city {
            account.city = Some(v);
        }
        if let Some(v) = self.state {
            account.state = Some(v);
        }
        if let Some(v) = self.postal_code {
            account.postal_code = Some(v);
        }
        if let Some(v) = self.insurance_provider {
            account.insurance_provider = Some(v);
        }
        if let Some(v) = self.insurance_policy_number {
            account.insurance_policy_number = Some(v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_new() -> NewAccount {
        NewAccount {
            first_name: "Sarah".to_string(),
            last_name: "Williams".to_string(),
            username: "sarahw".to_string(),
            email: "sarah@example.com".to_string(),
            phone: Some("(555) 111-2222".to_string()),
            date_of_birth: Some("1992-03-20".to_string()),
            address: None,
            city: Some("Healthcare City".to_string()),
            state: None,
            postal_code: Some("12345".to_string()),
            insurance_provider: Some("Acme Mutual".to_string()),
            insurance_policy_number: None,
        }
    }

    #[test]
    fn from_new_carries_caller_fields_unchanged() {
        let created_at = Utc::now();
        let account = Account::from_new(AccountId::new(1), sample_new(), created_at);

        assert_eq!(account.id, AccountId::new(1));
        assert_eq!(account.username, "sarahw");
        assert_eq!(account.email, "sarah@example.com");
        assert_eq!(account.created_at, created_at);
    }

    #[test]
    fn patch_merges_supplied_fields_and_preserves_the_rest() {
        let mut account = Account::from_new(AccountId::new(1), sample_new(), Utc::now());

        let patch = AccountPatch {
            phone: Some("(555) 999-0000".to_string()),
            address: Some("1 New Street".to_string()),
            ..AccountPatch::default()
        };
        patch.apply(&mut account);

        assert_eq!(account.phone.as_deref(), Some("(555) 999-0000"));
        assert_eq!(account.address.as_deref(), Some("1 New Street"));
        // Untouched fields keep their values.
        assert_eq!(account.username, "sarahw");
        assert_eq!(account.city.as_deref(), Some("Healthcare City"));
    }

    #[test]
    fn wire_shape_uses_camel_case_field_names() {
        let account = Account::from_new(AccountId::new(3), sample_new(), Utc::now());
        let json = serde_json::to_value(&account).expect("serialise account");

        assert_eq!(json["id"], 3);
        assert_eq!(json["firstName"], "Sarah");
        assert_eq!(json["insuranceProvider"], "Acme Mutual");
        assert!(json.get("first_name").is_none());
    }

    #[test]
    fn new_account_deserialises_with_optional_fields_absent() {
        let new: NewAccount = serde_json::from_str(
            r#"{
                "firstName": "Bob",
                "lastName": "Jones",
                "username": "bobj",
                "email": "bob@example.com"
            }"#,
        )
        .expect("deserialise minimal payload");

        assert_eq!(new.username, "bobj");
        assert!(new.phone.is_none());
        assert!(new.insurance_provider.is_none());
    }
}
