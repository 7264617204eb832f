//! Demo seed records.
//!
//! Mirrors the sample data the original NINC deployment loaded at startup:
//! three providers across three specialties and two pharmacies, enough for
//! the search and lookup screens to show something on a fresh install.
//!
//! Seeding is not idempotent; callers seed a freshly constructed store.

use crate::HealthStore;
use ninc_model::{NewPharmacy, NewProvider};

/// Loads the demo providers and pharmacies into `store`.
pub fn load_demo_records(store: &HealthStore) {
    for provider in demo_providers() {
        store.create_provider(provider);
    }
    for pharmacy in demo_pharmacies() {
        store.create_pharmacy(pharmacy);
    }
    tracing::info!(providers = 3, pharmacies = 2, "demo records loaded");
}

fn demo_providers() -> Vec<NewProvider> {
    vec![
        NewProvider {
            first_name: "Sarah".to_string(),
            last_name: "Wilson".to_string(),
            specialty: "Cardiology".to_string(),
            email: "s.wilson@hospital.com".to_string(),
            phone: "(555) 123-4567".to_string(),
            address: "123 Medical Center Dr".to_string(),
            city: "Healthcare City".to_string(),
            state: "HC".to_string(),
            postal_code: "12345".to_string(),
            consultation_fee: 200.0,
            availability: vec!["today".to_string(), "tomorrow".to_string()],
            photo_url: Some("https://images.example.com/providers/s-wilson.jpg".to_string()),
        },
        NewProvider {
            first_name: "Michael".to_string(),
            last_name: "Chen".to_string(),
            specialty: "Family Medicine".to_string(),
            email: "m.chen@clinic.com".to_string(),
            phone: "(555) 234-5678".to_string(),
            address: "456 Riverside Ave".to_string(),
            city: "Healthcare City".to_string(),
            state: "HC".to_string(),
            postal_code: "12345".to_string(),
            consultation_fee: 150.0,
            availability: vec!["tomorrow".to_string(), "this_week".to_string()],
            photo_url: Some("https://images.example.com/providers/m-chen.jpg".to_string()),
        },
        NewProvider {
            first_name: "Emily".to_string(),
            last_name: "Rodriguez".to_string(),
            specialty: "Pediatrics".to_string(),
            email: "e.rodriguez@children.com".to_string(),
            phone: "(555) 345-6789".to_string(),
            address: "789 Children's Way".to_string(),
            city: "Healthcare City".to_string(),
            state: "HC".to_string(),
            postal_code: "12345".to_string(),
            consultation_fee: 180.0,
            availability: vec!["this_week".to_string()],
            photo_url: Some("https://images.example.com/providers/e-rodriguez.jpg".to_string()),
        },
    ]
}

fn demo_pharmacies() -> Vec<NewPharmacy> {
    vec![
        NewPharmacy {
            name: "CVS Pharmacy".to_string(),
            address: "123 Main Street".to_string(),
            city: "Healthcare City".to_string(),
            state: "HC".to_string(),
            postal_code: "12345".to_string(),
            phone: "(555) 123-4567".to_string(),
            hours: "Open until 10 PM".to_string(),
            distance_miles: Some(0.8),
        },
        NewPharmacy {
            name: "Walgreens".to_string(),
            address: "456 Oak Avenue".to_string(),
            city: "Healthcare City".to_string(),
            state: "HC".to_string(),
            postal_code: "12345".to_string(),
            phone: "(555) 234-5678".to_string(),
            hours: "Open 24 hours".to_string(),
            distance_miles: Some(1.2),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_records_are_reachable_through_the_queries() {
        let store = HealthStore::new();
        load_demo_records(&store);

        assert_eq!(store.providers().len(), 3);
        assert_eq!(store.pharmacies().len(), 2);

        let cardiology = store.search_providers(Some("cardiology"), None);
        assert_eq!(cardiology.len(), 1);
        assert_eq!(cardiology[0].last_name, "Wilson");
        // Seeded providers still start with zeroed review aggregates.
        assert_eq!(cardiology[0].rating, 0.0);
        assert_eq!(cardiology[0].review_count, 0);

        assert_eq!(store.pharmacies_by_postal_code("12345").len(), 2);
        assert!(store.pharmacies_by_postal_code("99999").is_empty());
    }
}
