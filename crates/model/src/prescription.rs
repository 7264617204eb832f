//! Prescription records.
//!
//! Refills remaining is unsigned, so the "non-negative" invariant holds by
//! construction. The store never auto-expires a prescription when its
//! expiry date passes; that belongs to an external scheduler.

use crate::ids::{AccountId, PrescriptionId, ProviderId};
use crate::status::PrescriptionStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored prescription.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prescription {
    /// Server-assigned identity.
    pub id: PrescriptionId,
    pub account_id: AccountId,
    pub provider_id: ProviderId,
    pub medication_name: String,
    /// Dose description such as `"10mg"`.
    pub dosage: String,
    pub quantity: u32,
    pub refills_remaining: u32,
    pub instructions: Option<String>,
    /// ISO-8601 date (`YYYY-MM-DD`).
    pub prescribed_date: String,
    /// ISO-8601 date (`YYYY-MM-DD`).
    pub expiry_date: String,
    pub status: PrescriptionStatus,
    /// Server-assigned creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Fields a caller may supply when recording a prescription.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPrescription {
    pub account_id: AccountId,
    pub provider_id: ProviderId,
    pub medication_name: String,
    pub dosage: String,
    pub quantity: u32,
    #[serde(default)]
    pub refills_remaining: u32,
    #[serde(default)]
    pub instructions: Option<String>,
    pub prescribed_date: String,
    pub expiry_date: String,
    /// Initial status; defaults to `active` when omitted.
    #[serde(default)]
    pub status: PrescriptionStatus,
}

/// Partial update for a prescription. Refill decrements and status
/// transitions both arrive through here.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrescriptionPatch {
    pub medication_name: Option<String>,
    pub dosage: Option<String>,
    pub quantity: Option<u32>,
    pub refills_remaining: Option<u32>,
    pub instructions: Option<String>,
    pub prescribed_date: Option<String>,
    pub expiry_date: Option<String>,
    pub status: Option<PrescriptionStatus>,
}

impl Prescription {
    /// Builds the stored shape from an insertable one.
    pub fn from_new(id: PrescriptionId, new: NewPrescription, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            account_id: new.account_id,
            provider_id: new.provider_id,
            medication_name: new.medication_name,
            dosage: new.dosage,
            quantity: new.quantity,
            refills_remaining: new.refills_remaining,
            instructions: new.instructions,
            prescribed_date: new.prescribed_date,
            expiry_date: new.expiry_date,
            status: new.status,
            created_at,
        }
    }
}

impl PrescriptionPatch {
    /// Merges the supplied fields over an existing prescription.
    pub fn apply(self, prescription: &mut Prescription) {
        if let Some(v) = self.medication_name {
            prescription.medication_name = v;
        }
        if let Some(v) = self.dosage {
            prescription.dosage = v;
        }
        if let Some(v) = self.quantity {
            prescription.quantity = v;
        }
        if let Some(v) = self.refills_remaining {
            prescription.refills_remaining = v;
        }
        if let Some(v) = self.instructions {
            prescription.instructions = Some(v);
        }
        if let Some(v) = self.prescribed_date {
            prescription.prescribed_date = v;
        }
        if let Some(v) = self.expiry_date {
            prescription.expiry_date = v;
        }
        if let Some(v) = self.status {
            prescription.status = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_new() -> NewPrescription {
        NewPrescription {
            account_id: AccountId::new(1),
            provider_id: ProviderId::new(1),
            medication_name: "Lisinopril".to_string(),
            dosage: "10mg".to_string(),
            quantity: 30,
            refills_remaining: 3,
            instructions: Some("Take once daily with food".to_string()),
            prescribed_date: "2026-08-01".to_string(),
            expiry_date: "2027-08-01".to_string(),
            status: PrescriptionStatus::default(),
        }
    }

    #[test]
    fn refills_default_to_zero_and_status_to_active() {
        let new: NewPrescription = serde_json::from_str(
            r#"{
                "accountId": 1,
                "providerId": 1,
                "medicationName": "Lisinopril",
                "dosage": "10mg",
                "quantity": 30,
                "prescribedDate": "2026-08-01",
                "expiryDate": "2027-08-01"
            }"#,
        )
        .expect("deserialise minimal payload");

        assert_eq!(new.refills_remaining, 0);
        assert_eq!(new.status, PrescriptionStatus::Active);
    }

    #[test]
    fn negative_refill_counts_are_rejected_at_the_boundary() {
        let result = serde_json::from_str::<NewPrescription>(
            r#"{
                "accountId": 1,
                "providerId": 1,
                "medicationName": "Lisinopril",
                "dosage": "10mg",
                "quantity": 30,
                "refillsRemaining": -1,
                "prescribedDate": "2026-08-01",
                "expiryDate": "2027-08-01"
            }"#,
        );
        assert!(result.is_err(), "unsigned field should reject -1");
    }

    #[test]
    fn patch_decrements_refills_and_flags_refill_due() {
        let mut prescription =
            Prescription::from_new(PrescriptionId::new(1), sample_new(), Utc::now());

        let patch = PrescriptionPatch {
            refills_remaining: Some(0),
            status: Some(PrescriptionStatus::RefillDue),
            ..PrescriptionPatch::default()
        };
        patch.apply(&mut prescription);

        assert_eq!(prescription.refills_remaining, 0);
        assert_eq!(prescription.status, PrescriptionStatus::RefillDue);
        assert_eq!(prescription.medication_name, "Lisinopril");
    }
}
