//! Appointment operations.
//!
//! Status transitions arrive through `update_appointment`; the store never
//! drives one itself. Appointments are retired by status, never deleted.

use crate::{read, write, HealthStore};
use chrono::Utc;
use ninc_model::{AccountId, Appointment, AppointmentId, AppointmentPatch, NewAppointment};

impl HealthStore {
    /// Books an appointment, assigning its identity and creation timestamp.
    pub fn create_appointment(&self, new: NewAppointment) -> Appointment {
        let appointment = write(&self.appointments)
            .insert_with(|id| Appointment::from_new(AppointmentId::new(id), new, Utc::now()));
        tracing::debug!(
            id = %appointment.id,
            account_id = %appointment.account_id,
            provider_id = %appointment.provider_id,
            "appointment created"
        );
        appointment
    }

    /// Returns the appointment, or `None` if the identity is unknown.
    pub fn appointment(&self, id: AppointmentId) -> Option<Appointment> {
        read(&self.appointments).get(id.value())
    }

    /// Merges `patch` over the appointment and returns the result, or
    /// `None` (with no other effect) if the identity is unknown.
    pub fn update_appointment(
        &self,
        id: AppointmentId,
        patch: AppointmentPatch,
    ) -> Option<Appointment> {
        let updated =
            write(&self.appointments).modify(id.value(), |appointment| patch.apply(appointment));
        if updated.is_none() {
            tracing::debug!(%id, "update for unknown appointment ignored");
        }
        updated
    }

    /// All appointments owned by `account_id`, in insertion order.
    pub fn appointments_for_account(&self, account_id: AccountId) -> Vec<Appointment> {
        read(&self.appointments).select(|appointment| appointment.account_id == account_id)
    }
}
