//! Billing records.
//!
//! A billing record belongs to one account and optionally references the
//! appointment it bills for. Patient responsibility is expected to equal
//! total minus insurance-paid, but that is caller-computed; the store does
//! not recompute or enforce it.

use crate::ids::{AccountId, AppointmentId, BillingRecordId};
use crate::status::BillingStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored billing record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingRecord {
    /// Server-assigned identity.
    pub id: BillingRecordId,
    pub account_id: AccountId,
    pub appointment_id: Option<AppointmentId>,
    pub description: String,
    pub total_amount: f64,
    pub insurance_paid: f64,
    /// Caller-computed; expected to be `total_amount - insurance_paid`.
    pub patient_responsibility: f64,
    pub status: BillingStatus,
    /// ISO-8601 date (`YYYY-MM-DD`).
    pub due_date: String,
    /// ISO-8601 date; set through a patch when the bill is settled.
    pub paid_date: Option<String>,
    /// Free-text label of the instrument used, e.g. `"Visa ending 4242"`.
    pub payment_method: Option<String>,
    /// Server-assigned creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Fields a caller may supply when raising a billing record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBillingRecord {
    pub account_id: AccountId,
    #[serde(default)]
    pub appointment_id: Option<AppointmentId>,
    pub description: String,
    pub total_amount: f64,
    #[serde(default)]
    pub insurance_paid: f64,
    pub patient_responsibility: f64,
    /// Initial status; defaults to `pending` when omitted.
    #[serde(default)]
    pub status: BillingStatus,
    pub due_date: String,
    #[serde(default)]
    pub paid_date: Option<String>,
    #[serde(default)]
    pub payment_method: Option<String>,
}

/// Partial update for a billing record. Settling a bill patches status,
/// paid date and payment method together.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BillingRecordPatch {
    pub description: Option<String>,
    pub total_amount: Option<f64>,
    pub insurance_paid: Option<f64>,
    pub patient_responsibility: Option<f64>,
    pub status: Option<BillingStatus>,
    pub due_date: Option<String>,
    pub paid_date: Option<String>,
    pub payment_method: Option<String>,
}

impl BillingRecord {
    /// Builds the stored shape from an insertable one.
    pub fn from_new(id: BillingRecordId, new: NewBillingRecord, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            account_id: new.account_id,
            appointment_id: new.appointment_id,
            description: new.description,
            total_amount: new.total_amount,
            insurance_paid: new.insurance_paid,
            patient_responsibility: new.patient_responsibility,
            status: new.status,
            due_date: new.due_date,
            paid_date: new.paid_date,
            payment_method: new.payment_method,
            created_at,
        }
    }
}

impl BillingRecordPatch {
    /// Merges the supplied fields over an existing billing record.
    pub fn apply(self, record: &mut BillingRecord) {
        if let Some(v) = self.description {
            record.description = v;
        }
        if let Some(v) = self.total_amount {
            record.total_amount = v;
        }
        if let Some(v) = self.insurance_paid {
            record.insurance_paid = v;
        }
        if let Some(v) = self.patient_responsibility {
            record.patient_responsibility = v;
        }
        if let Some(v) = self.status {
            record.status = v;
        }
        if let Some(v) = self.due_date {
            record.due_date = v;
        }
        if let Some(v) = self.paid_date {
            record.paid_date = Some(v);
        }
        if let Some(v) = self.payment_method {
            record.payment_method = Some(v);
        }
    }
}
