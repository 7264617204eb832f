//! Per-kind record identities.
//!
//! Every entity kind has its own integer identity newtype so that, for
//! example, an `AppointmentId` cannot be passed where an `AccountId` is
//! expected. Identities are allocated by the store, start at 1 and increase
//! monotonically per kind; they are never reused or reassigned.

use serde::{Deserialize, Serialize};

macro_rules! record_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw identity value, e.g. one taken from a request path.
            pub fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Returns the raw identity value.
            pub fn value(self) -> i64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

record_id!(
    /// Identity of an [`Account`](crate::Account).
    AccountId
);
record_id!(
    /// Identity of a [`Provider`](crate::Provider).
    ProviderId
);
record_id!(
    /// Identity of an [`Appointment`](crate::Appointment).
    AppointmentId
);
record_id!(
    /// Identity of a [`Prescription`](crate::Prescription).
    PrescriptionId
);
record_id!(
    /// Identity of a [`Pharmacy`](crate::Pharmacy).
    PharmacyId
);
record_id!(
    /// Identity of a [`BillingRecord`](crate::BillingRecord).
    BillingRecordId
);
record_id!(
    /// Identity of a [`PaymentInstrument`](crate::PaymentInstrument).
    PaymentInstrumentId
);
