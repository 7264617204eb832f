//! Payment instrument operations.
//!
//! The only entity kind with an explicit delete. Storing a new default
//! instrument does not demote an existing default; "default" records the
//! caller's intent and nothing more, and a test pins that behaviour.

use crate::{read, write, HealthStore};
use chrono::Utc;
use ninc_model::{
    AccountId, NewPaymentInstrument, PaymentInstrument, PaymentInstrumentId,
    PaymentInstrumentPatch,
};

impl HealthStore {
    /// Stores a payment instrument, assigning its identity and creation
    /// timestamp.
    pub fn create_payment_instrument(&self, new: NewPaymentInstrument) -> PaymentInstrument {
        let instrument = write(&self.payment_instruments).insert_with(|id| {
            PaymentInstrument::from_new(PaymentInstrumentId::new(id), new, Utc::now())
        });
        tracing::debug!(
            id = %instrument.id,
            account_id = %instrument.account_id,
            "payment instrument created"
        );
        instrument
    }

    /// Returns the instrument, or `None` if the identity is unknown.
    pub fn payment_instrument(&self, id: PaymentInstrumentId) -> Option<PaymentInstrument> {
        read(&self.payment_instruments).get(id.value())
    }

    /// Merges `patch` over the instrument and returns the result, or
    /// `None` (with no other effect) if the identity is unknown.
    pub fn update_payment_instrument(
        &self,
        id: PaymentInstrumentId,
        patch: PaymentInstrumentPatch,
    ) -> Option<PaymentInstrument> {
        let updated =
            write(&self.payment_instruments).modify(id.value(), |instrument| patch.apply(instrument));
        if updated.is_none() {
            tracing::debug!(%id, "update for unknown payment instrument ignored");
        }
        updated
    }

    /// Removes the instrument, reporting whether it existed. The removed
    /// identity is never reused.
    pub fn delete_payment_instrument(&self, id: PaymentInstrumentId) -> bool {
        let removed = write(&self.payment_instruments).remove(id.value());
        if removed {
            tracing::debug!(%id, "payment instrument deleted");
        } else {
            tracing::debug!(%id, "delete for unknown payment instrument ignored");
        }
        removed
    }

    /// All instruments owned by `account_id`, in insertion order.
    pub fn payment_instruments_for_account(&self, account_id: AccountId) -> Vec<PaymentInstrument> {
        read(&self.payment_instruments).select(|instrument| instrument.account_id == account_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ninc_model::InstrumentKind;

    fn card_for(account_id: AccountId, last4: &str, is_default: bool) -> NewPaymentInstrument {
        NewPaymentInstrument {
            account_id,
            kind: InstrumentKind::Card,
            card_last4: Some(last4.to_string()),
            card_brand: Some("Visa".to_string()),
            expiry_month: Some("09".to_string()),
            expiry_year: Some("2028".to_string()),
            is_default,
        }
    }

    #[test]
    fn create_then_get_yields_an_equal_record() {
        let store = HealthStore::new();
        let created = store.create_payment_instrument(card_for(AccountId::new(1), "4242", true));

        let fetched = store
            .payment_instrument(created.id)
            .expect("instrument exists");
        assert_eq!(fetched, created);
    }

    #[test]
    fn double_delete_reports_true_then_false() {
        let store = HealthStore::new();
        let created = store.create_payment_instrument(card_for(AccountId::new(1), "4242", false));

        assert!(store.delete_payment_instrument(created.id));
        assert!(store.payment_instrument(created.id).is_none());
        assert!(!store.delete_payment_instrument(created.id));
    }

    #[test]
    fn identities_keep_increasing_after_delete() {
        let store = HealthStore::new();
        let first = store.create_payment_instrument(card_for(AccountId::new(1), "1111", false));
        let second = store.create_payment_instrument(card_for(AccountId::new(1), "2222", false));

        assert!(store.delete_payment_instrument(second.id));

        let third = store.create_payment_instrument(card_for(AccountId::new(1), "3333", false));
        assert!(third.id > second.id);
        assert!(first.id < third.id);
    }

    #[test]
    fn a_new_default_does_not_demote_the_existing_default() {
        // The store records the caller's intent verbatim; demotion would be
        // the caller's job. This pins the permissive behaviour.
        let store = HealthStore::new();
        let first = store.create_payment_instrument(card_for(AccountId::new(1), "1111", true));
        let second = store.create_payment_instrument(card_for(AccountId::new(1), "2222", true));

        let listed = store.payment_instruments_for_account(AccountId::new(1));
        assert_eq!(listed.len(), 2);
        assert!(listed.iter().all(|instrument| instrument.is_default));
        assert_eq!(listed[0].id, first.id);
        assert_eq!(listed[1].id, second.id);
    }

    #[test]
    fn listing_filters_by_owner() {
        let store = HealthStore::new();
        store.create_payment_instrument(card_for(AccountId::new(1), "1111", true));
        store.create_payment_instrument(card_for(AccountId::new(2), "2222", false));

        let listed = store.payment_instruments_for_account(AccountId::new(2));
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].card_last4.as_deref(), Some("2222"));
    }

    #[test]
    fn update_on_unknown_identity_is_absent() {
        let store = HealthStore::new();
        let result = store
            .update_payment_instrument(PaymentInstrumentId::new(8), PaymentInstrumentPatch::default());
        assert!(result.is_none());
    }
}
