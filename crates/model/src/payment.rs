//! Payment instruments on file for an account.
//!
//! This is the only entity kind with an explicit delete operation; every
//! other kind is retired through a status field. The default flag is purely
//! the caller's intent: storing a new default instrument does not demote an
//! existing one.

use crate::ids::{AccountId, PaymentInstrumentId};
use crate::status::InstrumentKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored payment instrument.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInstrument {
    /// Server-assigned identity.
    pub id: PaymentInstrumentId,
    pub account_id: AccountId,
    pub kind: InstrumentKind,
    /// Last four digits of the card number; card instruments only.
    pub card_last4: Option<String>,
    /// Card brand such as `"Visa"`; card instruments only.
    pub card_brand: Option<String>,
    pub expiry_month: Option<String>,
    pub expiry_year: Option<String>,
    pub is_default: bool,
    /// Server-assigned creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Fields a caller may supply when storing a payment instrument.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPaymentInstrument {
    pub account_id: AccountId,
    pub kind: InstrumentKind,
    #[serde(default)]
    pub card_last4: Option<String>,
    #[serde(default)]
    pub card_brand: Option<String>,
    #[serde(default)]
    pub expiry_month: Option<String>,
    #[serde(default)]
    pub expiry_year: Option<String>,
    #[serde(default)]
    pub is_default: bool,
}

/// Partial update for a payment instrument.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentInstrumentPatch {
    pub kind: Option<InstrumentKind>,
    pub card_last4: Option<String>,
    pub card_brand: Option<String>,
    pub expiry_month: Option<String>,
    pub expiry_year: Option<String>,
    pub is_default: Option<bool>,
}

impl PaymentInstrument {
    /// Builds the stored shape from an insertable one.
    pub fn from_new(
        id: PaymentInstrumentId,
        new: NewPaymentInstrument,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            account_id: new.account_id,
            kind: new.kind,
            card_last4: new.card_last4,
            card_brand: new.card_brand,
            expiry_month: new.expiry_month,
            expiry_year: new.expiry_year,
            is_default: new.is_default,
            created_at,
        }
    }
}

impl PaymentInstrumentPatch {
    /// Merges the supplied fields over an existing instrument.
    pub fn apply(self, instrument: &mut PaymentInstrument) {
        if let Some(v) = self.kind {
            instrument.kind = v;
        }
        if let Some(v) = self.card_last4 {
            instrument.card_last4 = Some(v);
        }
        if let Some(v) = self.card_brand {
            instrument.card_brand = Some(v);
        }
        if let Some(v) = self.expiry_month {
            instrument.expiry_month = Some(v);
        }
        if let Some(v) = self.expiry_year {
            instrument.expiry_year = Some(v);
        }
        if let Some(v) = self.is_default {
            instrument.is_default = v;
        }
    }
}
