//! Pharmacy reference records.
//!
//! Pharmacies are read-mostly reference data: they own nothing, nothing
//! references them, and they carry no creation timestamp.

use crate::ids::PharmacyId;
use serde::{Deserialize, Serialize};

/// A stored pharmacy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pharmacy {
    /// Server-assigned identity.
    pub id: PharmacyId,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    /// Matched exactly (no substring) by the postal-code lookup.
    pub postal_code: String,
    pub phone: String,
    /// Human-readable opening hours such as `"Open until 10 PM"`.
    pub hours: String,
    pub distance_miles: Option<f64>,
}

/// Fields a caller may supply when adding a pharmacy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPharmacy {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub phone: String,
    pub hours: String,
    #[serde(default)]
    pub distance_miles: Option<f64>,
}

/// Partial update for a pharmacy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PharmacyPatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub phone: Option<String>,
    pub hours: Option<String>,
    pub distance_miles: Option<f64>,
}

impl Pharmacy {
    /// Builds the stored shape from an insertable one.
    pub fn from_new(id: PharmacyId, new: NewPharmacy) -> Self {
        Self {
            id,
            name: new.name,
            address: new.address,
            city: new.city,
            state: new.state,
            postal_code: new.postal_code,
            phone: new.phone,
            hours: new.hours,
            distance_miles: new.distance_miles,
        }
    }
}

impl PharmacyPatch {
    /// Merges the supplied fields over an existing pharmacy.
    pub fn apply(self, pharmacy: &mut Pharmacy) {
        if let Some(v) = self.name {
            pharmacy.name = v;
        }
        if let Some(v) = self.address {
            pharmacy.address = v;
        }
        if let Some(v) = self.city {
            pharmacy.city = v;
        }
        if let Some(v) = self.state {
            pharmacy.state = v;
        }
        if let Some(v) = self.postal_code {
            pharmacy.postal_code = v;
        }
        if let Some(v) = self.phone {
            pharmacy.phone = v;
        }
        if let Some(v) = self.hours {
            pharmacy.hours = v;
        }
        if let Some(v) = self.distance_miles {
            pharmacy.distance_miles = Some(v);
        }
    }
}
