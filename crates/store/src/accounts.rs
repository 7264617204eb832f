//! Account operations.

use crate::{read, write, HealthStore};
use chrono::Utc;
use ninc_model::{Account, AccountId, AccountPatch, NewAccount};

impl HealthStore {
    /// Creates an account, assigning its identity and creation timestamp.
    ///
    /// Username and email uniqueness is a caller-side precondition; the
    /// store accepts whatever it is given.
    pub fn create_account(&self, new: NewAccount) -> Account {
        let account = write(&self.accounts)
            .insert_with(|id| Account::from_new(AccountId::new(id), new, Utc::now()));
        tracing::debug!(id = %account.id, "account created");
        account
    }

    /// Returns the account, or `None` if the identity is unknown.
    pub fn account(&self, id: AccountId) -> Option<Account> {
        read(&self.accounts).get(id.value())
    }

    /// Merges `patch` over the account and returns the result, or `None`
    /// (with no other effect) if the identity is unknown.
    pub fn update_account(&self, id: AccountId, patch: AccountPatch) -> Option<Account> {
        let updated = write(&self.accounts).modify(id.value(), |account| patch.apply(account));
        match &updated {
            Some(_) => tracing::debug!(%id, "account updated"),
            None => tracing::debug!(%id, "update for unknown account ignored"),
        }
        updated
    }
}
