//! Admin console
//!
//! Keeps the state of the admin page: the list of destinations, a single form used for both
//! creating and editing, and the notifications shown to the user. All changes go through a
//! [`CatalogClient`].
//!
//! The console is in one of two modes:
//! - [`Mode::Create`], nothing is selected and submitting creates a destination
//! - [`Mode::Edit`], a destination is selected, the form is pre-filled and submitting replaces
//!   its fields
//!
//! A failed call never touches the form, so the input of the user is not lost.

use serde::Serialize;
use uuid::Uuid;

use crate::destinations::Destination;
use crate::destinations::join_activities;
use crate::destinations::split_activities;

pub use client::CatalogClient;
pub use client::ClientError;
pub use client::ServiceClient;

mod client;

/// Values of the form, as typed by the user
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormValues {
    pub name: String,
    pub country: String,
    pub continent: String,
    pub description: String,
    pub image: String,

    /// Comma-separated
    pub activities: String,

    pub rating: f64,
}

impl FormValues {
    /// Pre-fill the form from an existing destination
    pub fn from_destination(destination: &Destination) -> Self {
        Self {
            name: destination.name.clone(),
            country: destination.country.clone(),
            continent: destination.continent.clone(),
            description: destination.description.clone(),
            image: destination.image.clone(),
            activities: join_activities(&destination.activities),
            rating: destination.rating,
        }
    }

    /// Payload to send, activities are split on commas
    pub fn to_payload(&self, id: Option<Uuid>) -> DestinationPayload {
        DestinationPayload {
            id,
            name: self.name.clone(),
            country: self.country.clone(),
            continent: self.continent.clone(),
            description: self.description.clone(),
            image: self.image.clone(),
            activities: split_activities(&self.activities),
            rating: self.rating,
        }
    }
}

/// Destination as sent to the API
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationPayload {
    /// Only set when replacing
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,

    pub name: String,
    pub country: String,
    pub continent: String,
    pub description: String,
    pub image: String,
    pub activities: Vec<String>,
    pub rating: f64,
}

/// Mode of the console
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Submitting creates a new destination
    Create,

    /// Submitting replaces the destination with this ID
    Edit(Uuid),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Message shown to the user until dismissed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    fn success(description: &str) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: "Success".to_string(),
            description: description.to_string(),
        }
    }

    /// All failures look the same to the user, only the message differs
    fn error(err: &ClientError, fallback: &str) -> Self {
        let description = if err.message.is_empty() {
            fallback.to_string()
        } else {
            err.message.clone()
        };

        Self {
            kind: NotificationKind::Error,
            title: "Error".to_string(),
            description,
        }
    }
}

/// State of the admin console
pub struct Console<C> {
    client: C,
    destinations: Vec<Destination>,
    form: FormValues,
    mode: Mode,
    notifications: Vec<Notification>,
}

impl<C: CatalogClient> Console<C> {
    /// Create an empty console in create mode
    ///
    /// Nothing is fetched until [`refresh`](Self::refresh) is called
    pub fn new(client: C) -> Self {
        Self {
            client,
            destinations: Vec::new(),
            form: FormValues::default(),
            mode: Mode::Create,
            notifications: Vec::new(),
        }
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn form(&self) -> &FormValues {
        &self.form
    }

    /// Change the values of the form
    pub fn form_mut(&mut self) -> &mut FormValues {
        &mut self.form
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Dismiss a notification
    pub fn dismiss(&mut self, index: usize) -> Option<Notification> {
        (index < self.notifications.len()).then(|| self.notifications.remove(index))
    }

    /// Fetch all destinations and replace the displayed list
    ///
    /// On failure the current list stays as-is
    pub async fn refresh(&mut self) -> bool {
        match self.client.list().await {
            Ok(destinations) => {
                self.destinations = destinations;

                true
            }
            Err(err) => {
                tracing::warn!("Could not fetch destinations: {err}");

                self.notifications
                    .push(Notification::error(&err, "Failed to fetch destinations"));

                false
            }
        }
    }

    /// Select a destination from the list for editing
    ///
    /// Returns `false` when the destination is not in the list, nothing changes then
    pub fn edit(&mut self, id: Uuid) -> bool {
        let Some(destination) = self
            .destinations
            .iter()
            .find(|destination| destination.id == id)
        else {
            return false;
        };

        self.form = FormValues::from_destination(destination);
        self.mode = Mode::Edit(id);

        true
    }

    /// Leave edit mode and clear the form
    pub fn cancel_edit(&mut self) {
        self.form = FormValues::default();
        self.mode = Mode::Create;
    }

    /// Submit the form
    ///
    /// Creates or replaces depending on the mode. After success the form is reset, the console
    /// is back in create mode and the list is refreshed.
    pub async fn submit(&mut self) -> bool {
        let result = match self.mode {
            Mode::Create => self
                .client
                .create(&self.form.to_payload(None))
                .await
                .map(|_| "Destination created successfully."),
            Mode::Edit(id) => self
                .client
                .replace(&self.form.to_payload(Some(id)))
                .await
                .map(|_| "Destination updated successfully."),
        };

        match result {
            Ok(description) => {
                self.notifications.push(Notification::success(description));
                self.cancel_edit();
                self.refresh().await;

                true
            }
            Err(err) => {
                tracing::warn!("Could not save destination: {err}");

                self.notifications
                    .push(Notification::error(&err, "Failed to save destination"));

                false
            }
        }
    }

    /// Delete a destination
    ///
    /// The list only changes after the deletion is confirmed and the list is refreshed
    pub async fn delete(&mut self, id: Uuid) -> bool {
        match self.client.delete(&id).await {
            Ok(_) => {
                self.notifications.push(Notification::success(
                    "Destination has been deleted successfully.",
                ));
                self.refresh().await;

                true
            }
            Err(err) => {
                tracing::warn!("Could not delete destination {id}: {err}");

                self.notifications
                    .push(Notification::error(&err, "Failed to delete destination"));

                false
            }
        }
    }
}
