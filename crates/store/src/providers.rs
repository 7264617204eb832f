//! Provider operations, including the specialty/location search.

use crate::{read, write, HealthStore};
use chrono::Utc;
use ninc_model::{NewProvider, Provider, ProviderId, ProviderPatch};

/// Specialty filter value meaning "no specialty filter". The search UI
/// sends this literally for its default dropdown entry.
const ALL_SPECIALTIES: &str = "All Specialties";

impl HealthStore {
    /// Creates a provider. Rating and review count start at zero whatever
    /// the caller intended; the insertable shape cannot carry them.
    pub fn create_provider(&self, new: NewProvider) -> Provider {
        let provider = write(&self.providers)
            .insert_with(|id| Provider::from_new(ProviderId::new(id), new, Utc::now()));
        tracing::debug!(id = %provider.id, specialty = %provider.specialty, "provider created");
        provider
    }

    /// Returns the provider, or `None` if the identity is unknown.
    pub fn provider(&self, id: ProviderId) -> Option<Provider> {
        read(&self.providers).get(id.value())
    }

    /// Merges `patch` over the provider and returns the result, or `None`
    /// (with no other effect) if the identity is unknown.
    pub fn update_provider(&self, id: ProviderId, patch: ProviderPatch) -> Option<Provider> {
        let updated = write(&self.providers).modify(id.value(), |provider| patch.apply(provider));
        if updated.is_none() {
            tracing::debug!(%id, "update for unknown provider ignored");
        }
        updated
    }

    /// All providers, in insertion order.
    pub fn providers(&self) -> Vec<Provider> {
        read(&self.providers).all()
    }

    /// Searches providers by specialty and/or location.
    ///
    /// The specialty filter is a case-insensitive substring match, skipped
    /// when the value is empty or the `"All Specialties"` sentinel. The
    /// location filter matches a substring of the provider's city
    /// (case-insensitive) or of its postal code. Both filters apply
    /// conjunctively; with neither, every provider is returned.
    pub fn search_providers(
        &self,
        specialty: Option<&str>,
        location: Option<&str>,
    ) -> Vec<Provider> {
        let specialty = specialty
            .filter(|s| !s.is_empty() && *s != ALL_SPECIALTIES)
            .map(str::to_lowercase);
        let location = location.filter(|s| !s.is_empty()).map(str::to_lowercase);

        read(&self.providers).select(|provider| {
            let specialty_matches = specialty
                .as_deref()
                .map_or(true, |needle| provider.specialty.to_lowercase().contains(needle));
            let location_matches = location.as_deref().map_or(true, |needle| {
                provider.city.to_lowercase().contains(needle)
                    || provider.postal_code.to_lowercase().contains(needle)
            });
            specialty_matches && location_matches
        })
    }
}
