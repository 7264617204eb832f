//! Status and classification enums with their wire-format strings.
//!
//! These enums are deliberately *closed*: the store only ever holds one of
//! the listed values, so an invalid status string cannot exist past the
//! deserialisation boundary. Wire strings match the original NINC API
//! contract (`"refill_due"`, `"in-person"`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when a wire string does not name a known enum value.
#[derive(Debug, thiserror::Error)]
#[error("unrecognised {kind} value: {value:?}")]
pub struct StatusParseError {
    kind: &'static str,
    value: String,
}

impl StatusParseError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
        }
    }
}

/// Lifecycle of an appointment.
///
/// Transitions happen only through `update` operations on the store; the
/// store itself never drives a transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    /// Booked but not yet confirmed. Initial status unless the caller says otherwise.
    #[default]
    Scheduled,
    /// Confirmed by the provider's office.
    Confirmed,
    /// The visit took place.
    Completed,
    /// Cancelled by either party. Cancelled appointments are retired, never deleted.
    Cancelled,
}

impl AppointmentStatus {
    /// Wire-format string for this status.
    pub fn as_wire(self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl FromStr for AppointmentStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(AppointmentStatus::Scheduled),
            "confirmed" => Ok(AppointmentStatus::Confirmed),
            "completed" => Ok(AppointmentStatus::Completed),
            "cancelled" => Ok(AppointmentStatus::Cancelled),
            other => Err(StatusParseError::new("appointment status", other)),
        }
    }
}

/// How an appointment is delivered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentModality {
    /// The patient attends the provider's practice.
    #[serde(rename = "in-person")]
    InPerson,
    /// Remote consultation (video or phone).
    #[serde(rename = "remote")]
    Remote,
}

impl AppointmentModality {
    /// Wire-format string for this modality.
    pub fn as_wire(self) -> &'static str {
        match self {
            AppointmentModality::InPerson => "in-person",
            AppointmentModality::Remote => "remote",
        }
    }
}

impl fmt::Display for AppointmentModality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl FromStr for AppointmentModality {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in-person" => Ok(AppointmentModality::InPerson),
            "remote" => Ok(AppointmentModality::Remote),
            other => Err(StatusParseError::new("appointment modality", other)),
        }
    }
}

/// Lifecycle of a prescription.
///
/// The store never auto-expires a prescription when its expiry date passes;
/// that transition belongs to an external scheduler collaborator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrescriptionStatus {
    /// May still be dispensed.
    #[default]
    Active,
    /// Past its expiry date.
    Expired,
    /// Refills exhausted or nearly so; a refill request is warranted.
    RefillDue,
}

impl PrescriptionStatus {
    /// Wire-format string for this status.
    pub fn as_wire(self) -> &'static str {
        match self {
            PrescriptionStatus::Active => "active",
            PrescriptionStatus::Expired => "expired",
            PrescriptionStatus::RefillDue => "refill_due",
        }
    }
}

impl fmt::Display for PrescriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl FromStr for PrescriptionStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(PrescriptionStatus::Active),
            "expired" => Ok(PrescriptionStatus::Expired),
            "refill_due" => Ok(PrescriptionStatus::RefillDue),
            other => Err(StatusParseError::new("prescription status", other)),
        }
    }
}

/// Settlement state of a billing record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingStatus {
    /// Awaiting payment.
    #[default]
    Pending,
    /// Settled in full.
    Paid,
    /// Past its due date.
    Overdue,
}

impl BillingStatus {
    /// Wire-format string for this status.
    pub fn as_wire(self) -> &'static str {
        match self {
            BillingStatus::Pending => "pending",
            BillingStatus::Paid => "paid",
            BillingStatus::Overdue => "overdue",
        }
    }
}

impl fmt::Display for BillingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl FromStr for BillingStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(BillingStatus::Pending),
            "paid" => Ok(BillingStatus::Paid),
            "overdue" => Ok(BillingStatus::Overdue),
            other => Err(StatusParseError::new("billing status", other)),
        }
    }
}

/// Kind of payment instrument on file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstrumentKind {
    /// Credit or debit card. Card-specific fields apply.
    Card,
    /// Bank account.
    Bank,
}

impl InstrumentKind {
    /// Wire-format string for this kind.
    pub fn as_wire(self) -> &'static str {
        match self {
            InstrumentKind::Card => "card",
            InstrumentKind::Bank => "bank",
        }
    }
}

impl fmt::Display for InstrumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl FromStr for InstrumentKind {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "card" => Ok(InstrumentKind::Card),
            "bank" => Ok(InstrumentKind::Bank),
            other => Err(StatusParseError::new("instrument kind", other)),
        }
    }
}
