//! # NINC Store
//!
//! The single authoritative, in-process store for all seven NINC entity
//! kinds: accounts, providers, appointments, prescriptions, pharmacies,
//! billing records and payment instruments.
//!
//! ## Contract
//!
//! - Creation allocates the next kind-local identity, stamps the creation
//!   timestamp where the kind has one, applies kind defaults and returns
//!   the stored record. It never fails for well-formed input.
//! - Lookups return `Option`: `None` is the "absent" signal, not an error.
//! - Updates merge an explicit patch type over the existing record and
//!   return `None` (creating nothing, touching nothing) for an unknown
//!   identity.
//! - Only payment instruments are physically deleted; every other kind is
//!   retired through its status field.
//! - Callers always receive copies, never references into internal
//!   storage.
//!
//! Uniqueness preconditions (account username/email) are enforced by the
//! upstream validation collaborator, not here: the store accepts duplicates
//! silently, and that permissive behaviour is pinned by tests.
//!
//! ## Concurrency
//!
//! Parallel callers, serialised mutation: each entity kind's table sits
//! behind its own `RwLock`, so reads run concurrently and never observe a
//! partially-applied write, while writes to a kind are mutually exclusive.
//! There is no cross-kind transaction support — a logical operation that
//! touches two kinds is not atomic across them.
//!
//! ## Usage
//!
//! Construct a [`HealthStore`] and pass it (usually behind an `Arc`) to
//! consumers explicitly; there is no module-level singleton.
//!
//! **No API concerns**: request parsing, status-code mapping and payload
//! validation belong to the route layer and validation collaborator.

mod accounts;
mod appointments;
mod billing;
mod payments;
mod pharmacies;
mod prescriptions;
mod providers;
pub mod seed;
mod table;

use ninc_model::{
    Account, Appointment, BillingRecord, PaymentInstrument, Pharmacy, Prescription, Provider,
};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use table::Table;

/// In-process store owning one guarded table per entity kind.
pub struct HealthStore {
    accounts: RwLock<Table<Account>>,
    providers: RwLock<Table<Provider>>,
    appointments: RwLock<Table<Appointment>>,
    prescriptions: RwLock<Table<Prescription>>,
    pharmacies: RwLock<Table<Pharmacy>>,
    billing_records: RwLock<Table<BillingRecord>>,
    payment_instruments: RwLock<Table<PaymentInstrument>>,
}

impl HealthStore {
    /// Creates an empty store. All identity counters start at 1.
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(Table::new()),
            providers: RwLock::new(Table::new()),
            appointments: RwLock::new(Table::new()),
            prescriptions: RwLock::new(Table::new()),
            pharmacies: RwLock::new(Table::new()),
            billing_records: RwLock::new(Table::new()),
            payment_instruments: RwLock::new(Table::new()),
        }
    }
}

impl Default for HealthStore {
    fn default() -> Self {
        Self::new()
    }
}

// A poisoned lock means some caller panicked while holding the guard.
// Every mutation either fully replaces a row or does nothing, so the table
// is still consistent; recover the guard instead of propagating the panic.

pub(crate) fn read<T>(lock: &RwLock<Table<T>>) -> RwLockReadGuard<'_, Table<T>> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn write<T>(lock: &RwLock<Table<T>>) -> RwLockWriteGuard<'_, Table<T>> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
