//! Prescription operations.
//!
//! The store never auto-expires a prescription when its expiry date
//! passes; an external scheduler collaborator drives that transition
//! through `update_prescription` like any other caller.

use crate::{read, write, HealthStore};
use chrono::Utc;
use ninc_model::{AccountId, NewPrescription, Prescription, PrescriptionId, PrescriptionPatch};

impl HealthStore {
    /// Records a prescription, assigning its identity and creation timestamp.
    pub fn create_prescription(&self, new: NewPrescription) -> Prescription {
        let prescription = write(&self.prescriptions)
            .insert_with(|id| Prescription::from_new(PrescriptionId::new(id), new, Utc::now()));
        tracing::debug!(
            id = %prescription.id,
            account_id = %prescription.account_id,
            "prescription created"
        );
        prescription
    }

    /// Returns the prescription, or `None` if the identity is unknown.
    pub fn prescription(&self, id: PrescriptionId) -> Option<Prescription> {
        read(&self.prescriptions).get(id.value())
    }

    /// Merges `patch` over the prescription and returns the result, or
    /// `None` (with no other effect) if the identity is unknown.
    pub fn update_prescription(
        &self,
        id: PrescriptionId,
        patch: PrescriptionPatch,
    ) -> Option<Prescription> {
        let updated =
            write(&self.prescriptions).modify(id.value(), |prescription| patch.apply(prescription));
        if updated.is_none() {
            tracing::debug!(%id, "update for unknown prescription ignored");
        }
        updated
    }

    /// All prescriptions owned by `account_id`, in insertion order.
    pub fn prescriptions_for_account(&self, account_id: AccountId) -> Vec<Prescription> {
        read(&self.prescriptions).select(|prescription| prescription.account_id == account_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ninc_model::{PrescriptionStatus, ProviderId};

    fn script_for(account_id: AccountId, medication: &str) -> NewPrescription {
        NewPrescription {
            account_id,
            provider_id: ProviderId::new(1),
            medication_name: medication.to_string(),
            dosage: "10mg".to_string(),
            quantity: 30,
            refills_remaining: 2,
            instructions: None,
            prescribed_date: "2026-08-01".to_string(),
            expiry_date: "2027-08-01".to_string(),
            status: PrescriptionStatus::default(),
        }
    }

    #[test]
    fn create_then_get_yields_an_equal_record() {
        let store = HealthStore::new();
        let created = store.create_prescription(script_for(AccountId::new(1), "Lisinopril"));

        assert_eq!(created.status, PrescriptionStatus::Active);
        let fetched = store.prescription(created.id).expect("prescription exists");
        assert_eq!(fetched, created);
    }

    #[test]
    fn listing_filters_by_owner() {
        let store = HealthStore::new();
        store.create_prescription(script_for(AccountId::new(1), "Lisinopril"));
        store.create_prescription(script_for(AccountId::new(2), "Metformin"));
        store.create_prescription(script_for(AccountId::new(1), "Atorvastatin"));

        let listed = store.prescriptions_for_account(AccountId::new(1));
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].medication_name, "Lisinopril");
        assert_eq!(listed[1].medication_name, "Atorvastatin");
    }

    #[test]
    fn refill_decrement_goes_through_update() {
        let store = HealthStore::new();
        let created = store.create_prescription(script_for(AccountId::new(1), "Lisinopril"));

        let patch = PrescriptionPatch {
            refills_remaining: Some(1),
            ..PrescriptionPatch::default()
        };
        let updated = store
            .update_prescription(created.id, patch)
            .expect("prescription exists");

        assert_eq!(updated.refills_remaining, 1);
        assert_eq!(updated.status, PrescriptionStatus::Active);
    }

    #[test]
    fn update_on_unknown_identity_is_absent() {
        let store = HealthStore::new();
        let patch = PrescriptionPatch {
            status: Some(PrescriptionStatus::Expired),
            ..PrescriptionPatch::default()
        };
        assert!(store.update_prescription(PrescriptionId::new(7), patch).is_none());
    }
}
