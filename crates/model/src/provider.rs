//! Healthcare provider records.
//!
//! Rating and review count are server-assigned: a newly created provider
//! always starts at zero for both, independent of anything the caller sent.
//! The insertable shape cannot carry them at all, so the invariant holds by
//! construction rather than by runtime check.

use crate::ids::ProviderId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored healthcare provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    /// Server-assigned identity.
    pub id: ProviderId,
    pub first_name: String,
    pub last_name: String,
    /// Free-text specialty, matched by case-insensitive substring in search.
    pub specialty: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub consultation_fee: f64,
    /// Aggregate rating. Zero on creation; maintained by an external review workflow.
    pub rating: f64,
    /// Number of reviews behind `rating`. Zero on creation.
    pub review_count: u32,
    /// Availability tags such as `"today"` or `"this_week"`.
    pub availability: Vec<String>,
    pub photo_url: Option<String>,
    /// Server-assigned creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Fields a caller may supply when creating a provider. Note the absence of
/// `rating` and `review_count`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProvider {
    pub first_name: String,
    pub last_name: String,
    pub specialty: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub consultation_fee: f64,
    #[serde(default)]
    pub availability: Vec<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

/// Partial update for a provider. Rating and review count are patchable
/// here because the external review workflow writes them back through the
/// same update path as everything else.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProviderPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub specialty: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub consultation_fee: Option<f64>,
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    pub availability: Option<Vec<String>>,
    pub photo_url: Option<String>,
}

impl Provider {
    /// Builds the stored shape from an insertable one, zeroing the
    /// review aggregates.
    pub fn from_new(id: ProviderId, new: NewProvider, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            first_name: new.first_name,
            last_name: new.last_name,
            specialty: new.specialty,
            email: new.email,
            phone: new.phone,
            address: new.address,
            city: new.city,
            state: new.state,
            postal_code: new.postal_code,
            consultation_fee: new.consultation_fee,
            rating: 0.0,
            review_count: 0,
            availability: new.availability,
            photo_url: new.photo_url,
            created_at,
        }
    }
}

impl ProviderPatch {
    /// Merges the supplied fields over an existing provider.
    pub fn apply(self, provider: &mut Provider) {
        if let Some(v) = self.first_name {
            provider.first_name = v;
        }
        if let Some(v) = self.last_name {
            provider.last_name = v;
        }
        if let Some(v) = self.specialty {
            provider.specialty = v;
        }
        if let Some(v) = self.email {
            provider.email = v;
        }
        if let Some(v) = self.phone {
            provider.phone = v;
        }
        if let Some(v) = self.address {
            provider.address = v;
        }
        if let Some(v) = self.city {
            provider.city = v;
        }
        if let Some(v) = self.state {
            provider.state = v;
        }
        if let Some(v) = self.postal_code {
            provider.postal_code = v;
        }
        if let Some(v) = self.consultation_fee {
            provider.consultation_fee = v;
        }
        if let Some(v) = self.rating {
            provider.rating = v;
        }
        if let Some(v) = self.review_count {
            provider.review_count = v;
        }
        if let Some(v) = self.availability {
            provider.availability = v;
        }
        if let Some(v) = self.photo_url {
            provider.photo_url = Some(v);
        }
    }
}
