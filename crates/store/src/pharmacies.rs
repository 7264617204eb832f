//! Pharmacy operations.
//!
//! Pharmacies are read-mostly reference data; the postal-code lookup is an
//! exact match, unlike the substring semantics of the provider search.

use crate::{read, write, HealthStore};
use ninc_model::{NewPharmacy, Pharmacy, PharmacyId, PharmacyPatch};

impl HealthStore {
    /// Adds a pharmacy, assigning its identity. Pharmacies carry no
    /// creation timestamp.
    pub fn create_pharmacy(&self, new: NewPharmacy) -> Pharmacy {
        let pharmacy =
            write(&self.pharmacies).insert_with(|id| Pharmacy::from_new(PharmacyId::new(id), new));
        tracing::debug!(id = %pharmacy.id, name = %pharmacy.name, "pharmacy created");
        pharmacy
    }

    /// Returns the pharmacy, or `None` if the identity is unknown.
    pub fn pharmacy(&self, id: PharmacyId) -> Option<Pharmacy> {
        read(&self.pharmacies).get(id.value())
    }

    /// Merges `patch` over the pharmacy and returns the result, or `None`
    /// (with no other effect) if the identity is unknown.
    pub fn update_pharmacy(&self, id: PharmacyId, patch: PharmacyPatch) -> Option<Pharmacy> {
        let updated = write(&self.pharmacies).modify(id.value(), |pharmacy| patch.apply(pharmacy));
        if updated.is_none() {
            tracing::debug!(%id, "update for unknown pharmacy ignored");
        }
        updated
    }

    /// All pharmacies, in insertion order.
    pub fn pharmacies(&self) -> Vec<Pharmacy> {
        read(&self.pharmacies).all()
    }

    /// Pharmacies whose postal code equals `code` exactly.
    pub fn pharmacies_by_postal_code(&self, code: &str) -> Vec<Pharmacy> {
        read(&self.pharmacies).select(|pharmacy| pharmacy.postal_code == code)
    }
}
