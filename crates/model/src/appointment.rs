//! Appointment records.
//!
//! An appointment belongs to one account and one provider. The owning
//! identities are fixed at creation; a booking is never reparented, it is
//! cancelled and rebooked.

use crate::ids::{AccountId, AppointmentId, ProviderId};
use crate::status::{AppointmentModality, AppointmentStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored appointment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    /// Server-assigned identity.
    pub id: AppointmentId,
    pub account_id: AccountId,
    pub provider_id: ProviderId,
    /// ISO-8601 date (`YYYY-MM-DD`); the store never interprets it.
    pub date: String,
    /// Clock time such as `"14:30"`; the store never interprets it.
    pub time: String,
    pub modality: AppointmentModality,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    /// Server-assigned creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Fields a caller may supply when booking an appointment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub account_id: AccountId,
    pub provider_id: ProviderId,
    pub date: String,
    pub time: String,
    pub modality: AppointmentModality,
    /// Initial status; defaults to `scheduled` when omitted.
    #[serde(default)]
    pub status: AppointmentStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Partial update for an appointment. Status transitions go through here;
/// the store applies them blindly.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppointmentPatch {
    pub date: Option<String>,
    pub time: Option<String>,
    pub modality: Option<AppointmentModality>,
    pub status: Option<AppointmentStatus>,
    pub notes: Option<String>,
}

impl Appointment {
    /// Builds the stored shape from an insertable one.
    pub fn from_new(id: AppointmentId, new: NewAppointment, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            account_id: new.account_id,
            provider_id: new.provider_id,
            date: new.date,
            time: new.time,
            modality: new.modality,
            status: new.status,
            notes: new.notes,
            created_at,
        }
    }
}

impl AppointmentPatch {
    /// Merges the supplied fields over an existing appointment.
    pub fn apply(self, appointment: &mut Appointment) {
        if let Some(v) = self.date {
            appointment.date = v;
        }
        if let Some(v) = self.time {
            appointment.time = v;
        }
        if let Some(v) = self.modality {
            appointment.modality = v;
        }
        if let Some(v) = self.status {
            appointment.status = v;
        }
        if let Some(v) = self.notes {
            appointment.notes = Some(v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_new() -> NewAppointment {
        NewAppointment {
            account_id: AccountId::new(1),
            provider_id: ProviderId::new(2),
            date: "2026-09-14".to_string(),
            time: "14:30".to_string(),
            modality: AppointmentModality::InPerson,
            status: AppointmentStatus::default(),
            notes: None,
        }
    }

    #[test]
    fn booking_payload_without_status_defaults_to_scheduled() {
        let new: NewAppointment = serde_json::from_str(
            r#"{
                "accountId": 1,
                "providerId": 2,
                "date": "2026-09-14",
                "time": "14:30",
                "modality": "remote"
            }"#,
        )
        .expect("deserialise booking payload");

        assert_eq!(new.status, AppointmentStatus::Scheduled);
        assert_eq!(new.modality, AppointmentModality::Remote);
    }

    #[test]
    fn caller_may_choose_the_initial_status() {
        let new = NewAppointment {
            status: AppointmentStatus::Confirmed,
            ..sample_new()
        };
        let appointment = Appointment::from_new(AppointmentId::new(1), new, Utc::now());
        assert_eq!(appointment.status, AppointmentStatus::Confirmed);
    }

    #[test]
    fn patch_drives_a_status_transition() {
        let mut appointment =
            Appointment::from_new(AppointmentId::new(1), sample_new(), Utc::now());

        let patch = AppointmentPatch {
            status: Some(AppointmentStatus::Cancelled),
            notes: Some("patient rescheduling".to_string()),
            ..AppointmentPatch::default()
        };
        patch.apply(&mut appointment);

        assert_eq!(appointment.status, AppointmentStatus::Cancelled);
        assert_eq!(appointment.notes.as_deref(), Some("patient rescheduling"));
        assert_eq!(appointment.date, "2026-09-14");
    }
}
