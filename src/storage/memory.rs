//! Memory storage
//!
//! Will be destroyed on system shutdown

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::destinations::Destination;

use super::CreateDestinationValues;
use super::Result;
use super::Storage;
use super::UpdateDestinationValues;

/// An in-memory storage
///
/// Will be destroyed on system shutdown
#[derive(Clone, Debug, Default)]
pub struct Memory {
    /// All destinations in storage, in creation order
    destinations: Arc<Mutex<Vec<Destination>>>,
}

impl Memory {
    /// Create a new empty Memory storage
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for Memory {
    async fn find_all_destinations(&self) -> Result<Vec<Destination>> {
        Ok(self.destinations.lock().await.clone())
    }

    async fn find_single_destination_by_id(&self, id: &Uuid) -> Result<Option<Destination>> {
        Ok(self
            .destinations
            .lock()
            .await
            .iter()
            .find(|destination| &destination.id == id)
            .cloned())
    }

    async fn create_destination(
        &self,
        values: &CreateDestinationValues<'_>,
    ) -> Result<Destination> {
        let mut destinations = self.destinations.lock().await;

        let mut id = Uuid::new_v4();
        while destinations.iter().any(|destination| destination.id == id) {
            id = Uuid::new_v4();
        }

        let now = Utc::now();

        let destination = Destination {
            id,
            name: values.name.to_string(),
            country: values.country.to_string(),
            continent: values.continent.to_string(),
            description: values.description.to_string(),
            image: values.image.to_string(),
            activities: values.activities.to_vec(),
            rating: values.rating,
            created_at: now,
            updated_at: now,
        };

        destinations.push(destination.clone());

        Ok(destination)
    }

    async fn update_destination(
        &self,
        id: &Uuid,
        values: &UpdateDestinationValues<'_>,
    ) -> Result<Option<Destination>> {
        Ok(self
            .destinations
            .lock()
            .await
            .iter_mut()
            .find(|destination| &destination.id == id)
            .map(|destination| {
                if let Some(name) = values.name {
                    destination.name = name.to_string();
                }

                if let Some(country) = values.country {
                    destination.country = country.to_string();
                }

                if let Some(continent) = values.continent {
                    destination.continent = continent.to_string();
                }

                if let Some(description) = values.description {
                    destination.description = description.to_string();
                }

                if let Some(image) = values.image {
                    destination.image = image.to_string();
                }

                if let Some(activities) = values.activities {
                    destination.activities = activities.to_vec();
                }

                if let Some(rating) = values.rating {
                    destination.rating = rating;
                }

                // clock can go backwards, `updated_at` can not
                destination.updated_at = Utc::now().max(destination.updated_at);

                destination.clone()
            }))
    }

    async fn delete_destination(&self, id: &Uuid) -> Result<u64> {
        let mut destinations = self.destinations.lock().await;

        if let Some(position) = destinations
            .iter()
            .position(|destination| &destination.id == id)
        {
            destinations.remove(position);

            Ok(1)
        } else {
            Ok(0)
        }
    }

    async fn close(&self) {
        tracing::debug!("Memory storage closed, all destinations are dropped");
    }
}
