//! Demo destinations
//!
//! Inserted on startup when `SEED_DESTINATIONS` is set and the storage has no destinations yet

use anyhow::Result;

use crate::api::CreateDestinationForm;
use crate::api::create_destination;
use crate::destinations::ActivitiesInput;
use crate::storage::Storage;
use crate::utils::non_empty_env_var;

struct SeedDestination {
    name: &'static str,
    country: &'static str,
    continent: &'static str,
    description: &'static str,
    image: &'static str,
    activities: &'static str,
    rating: f64,
}

static SEED_DESTINATIONS: &[SeedDestination] = &[
    SeedDestination {
        name: "Bali",
        country: "Indonesia",
        continent: "Asia",
        description: "Discover tropical paradise with stunning beaches, lush rice terraces, and \
            vibrant cultural experiences.",
        image: "https://images.pexels.com/photos/2166553/pexels-photo-2166553.jpeg",
        activities: "Beach, Culture, Adventure",
        rating: 4.8,
    },
    SeedDestination {
        name: "Santorini",
        country: "Greece",
        continent: "Europe",
        description: "Experience the iconic white buildings, breathtaking sunsets, and \
            crystal-clear waters of the Aegean Sea.",
        image: "https://images.pexels.com/photos/1010657/pexels-photo-1010657.jpeg",
        activities: "Romantic, Beach, Sightseeing",
        rating: 4.9,
    },
    SeedDestination {
        name: "Kyoto",
        country: "Japan",
        continent: "Asia",
        description: "Immerse yourself in Japanese history with ancient temples, traditional \
            gardens, and authentic cuisine.",
        image: "https://images.pexels.com/photos/1440476/pexels-photo-1440476.jpeg",
        activities: "Culture, History, Food",
        rating: 4.7,
    },
    SeedDestination {
        name: "Machu Picchu",
        country: "Peru",
        continent: "South America",
        description: "Explore the ancient Incan citadel nestled high in the Andes Mountains with \
            breathtaking views.",
        image: "https://images.pexels.com/photos/2356045/pexels-photo-2356045.jpeg",
        activities: "History, Hiking, Adventure",
        rating: 4.9,
    },
    SeedDestination {
        name: "Paris",
        country: "France",
        continent: "Europe",
        description: "The City of Light captivates with its iconic landmarks, world-class \
            cuisine, and rich cultural heritage.",
        image: "https://images.pexels.com/photos/699466/pexels-photo-699466.jpeg",
        activities: "Culture, Food, Romantic",
        rating: 4.6,
    },
    SeedDestination {
        name: "Cape Town",
        country: "South Africa",
        continent: "Africa",
        description: "Experience dramatic landscapes, diverse wildlife, and vibrant culture at \
            the southern tip of Africa.",
        image: "https://images.pexels.com/photos/259447/pexels-photo-259447.jpeg",
        activities: "Adventure, Nature, Wine",
        rating: 4.7,
    },
    SeedDestination {
        name: "New York City",
        country: "USA",
        continent: "North America",
        description: "The city that never sleeps offers iconic landmarks, cultural diversity, \
            and endless entertainment options.",
        image: "https://images.pexels.com/photos/466685/pexels-photo-466685.jpeg",
        activities: "Urban, Culture, Food",
        rating: 4.5,
    },
    SeedDestination {
        name: "Sydney",
        country: "Australia",
        continent: "Oceania",
        description: "Stunning harbor views, iconic architecture, and beautiful beaches make \
            this city a must-visit destination.",
        image: "https://images.pexels.com/photos/1878293/pexels-photo-1878293.jpeg",
        activities: "Beach, Urban, Nature",
        rating: 4.8,
    },
];

/// Seed the demo destinations when `SEED_DESTINATIONS` is set
pub async fn ensure_seed_destinations<S: Storage>(storage: &S) -> Result<()> {
    if non_empty_env_var("SEED_DESTINATIONS").is_none() {
        return Ok(());
    }

    let count = seed_destinations(storage).await?;

    if count > 0 {
        tracing::info!("Seeded {count} demo destinations");
    }

    Ok(())
}

/// Insert the demo destinations, only when there are no destinations at all
///
/// Returns the number of inserted destinations
pub async fn seed_destinations<S: Storage>(storage: &S) -> Result<usize> {
    if !storage.find_all_destinations().await?.is_empty() {
        tracing::debug!("Destinations already exist, skipping seed");

        return Ok(0);
    }

    for seed in SEED_DESTINATIONS {
        let form = CreateDestinationForm {
            name: Some(seed.name.to_string()),
            country: Some(seed.country.to_string()),
            continent: Some(seed.continent.to_string()),
            description: Some(seed.description.to_string()),
            image: Some(seed.image.to_string()),
            activities: Some(ActivitiesInput::Text(seed.activities.to_string())),
            rating: Some(seed.rating),
        };

        create_destination(storage, form).await?;
    }

    Ok(SEED_DESTINATIONS.len())
}
