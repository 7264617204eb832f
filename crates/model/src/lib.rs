//! # NINC Model
//!
//! Entity definitions for the NINC patient-care record store.
//!
//! This crate contains pure data definitions with no storage behaviour:
//! - Stored shapes (`Account`, `Provider`, `Appointment`, `Prescription`,
//!   `Pharmacy`, `BillingRecord`, `PaymentInstrument`)
//! - Insertable shapes (`NewAccount`, `NewProvider`, ...) lacking every
//!   server-assigned field
//! - Patch shapes (`AccountPatch`, ...) for partial updates
//! - Status enums with their wire-format strings
//! - Per-kind identity newtypes
//!
//! The only path from an insertable shape to a stored shape is the
//! `from_new` constructor on each stored type, which is where identity,
//! creation timestamps and kind-specific defaults are populated. Callers
//! cannot supply those fields at all.
//!
//! **No storage concerns**: locking, identity allocation and query logic
//! belong in `ninc-store`.

pub mod account;
pub mod appointment;
pub mod billing;
pub mod ids;
pub mod payment;
pub mod pharmacy;
pub mod prescription;
pub mod provider;
pub mod status;

pub use account::{Account, AccountPatch, NewAccount};
pub use appointment::{Appointment, AppointmentPatch, NewAppointment};
pub use billing::{BillingRecord, BillingRecordPatch, NewBillingRecord};
pub use ids::{
    AccountId, AppointmentId, BillingRecordId, PaymentInstrumentId, PharmacyId, PrescriptionId,
    ProviderId,
};
pub use payment::{NewPaymentInstrument, PaymentInstrument, PaymentInstrumentPatch};
pub use pharmacy::{NewPharmacy, Pharmacy, PharmacyPatch};
pub use prescription::{NewPrescription, Prescription, PrescriptionPatch};
pub use provider::{NewProvider, Provider, ProviderPatch};
pub use status::{
    AppointmentModality, AppointmentStatus, BillingStatus, InstrumentKind, PrescriptionStatus,
    StatusParseError,
};
