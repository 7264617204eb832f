//! Billing record operations.

use crate::{read, write, HealthStore};
use chrono::Utc;
use ninc_model::{AccountId, BillingRecord, BillingRecordId, BillingRecordPatch, NewBillingRecord};

impl HealthStore {
    /// Raises a billing record, assigning its identity and creation
    /// timestamp. Patient responsibility is stored as supplied; the store
    /// does not recompute it from total and insurance-paid.
    pub fn create_billing_record(&self, new: NewBillingRecord) -> BillingRecord {
        let record = write(&self.billing_records)
            .insert_with(|id| BillingRecord::from_new(BillingRecordId::new(id), new, Utc::now()));
        tracing::debug!(
            id = %record.id,
            account_id = %record.account_id,
            "billing record created"
        );
        record
    }

    /// Returns the billing record, or `None` if the identity is unknown.
    pub fn billing_record(&self, id: BillingRecordId) -> Option<BillingRecord> {
        read(&self.billing_records).get(id.value())
    }

    /// Merges `patch` over the billing record and returns the result, or
    /// `None` (with no other effect) if the identity is unknown.
    pub fn update_billing_record(
        &self,
        id: BillingRecordId,
        patch: BillingRecordPatch,
    ) -> Option<BillingRecord> {
        let updated = write(&self.billing_records).modify(id.value(), |record| patch.apply(record));
        if updated.is_none() {
            tracing::debug!(%id, "update for unknown billing record ignored");
        }
        updated
    }

    /// All billing records owned by `account_id`, in insertion order.
    pub fn billing_records_for_account(&self, account_id: AccountId) -> Vec<BillingRecord> {
        read(&self.billing_records).select(|record| record.account_id == account_id)
    }
}
