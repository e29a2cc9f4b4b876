//! Destinations API endpoints
//!
//! Everything related to the destinations management

use axum::Extension;
use serde::Deserialize;
use serde_json::Value;

use crate::destinations::ActivitiesInput;
use crate::destinations::CreateResult;
use crate::destinations::DeleteResult;
use crate::destinations::Destination;
use crate::destinations::UpdateResult;
use crate::storage::CreateDestinationValues;
use crate::storage::Storage;
use crate::storage::UpdateDestinationValues;

use super::CatalogError;
use super::Error;
use super::Form;
use super::PathParameters;
use super::QueryParameters;
use super::Success;
use super::parse_identifier;
use super::parse_image;
use super::parse_rating;
use super::parse_text;

/// List all destinations
///
/// Request:
/// ```sh
/// curl -v http://localhost:6000/api/destinations
/// ```
///
/// Response:
/// ```json
/// [ { "_id": "<uuid>", "name": "Bali", "country": "Indonesia" ... } ]
/// ```
pub async fn list<S: Storage>(
    Extension(storage): Extension<S>,
) -> Result<Success<Vec<Destination>>, Error> {
    let destinations = storage
        .find_all_destinations()
        .await
        .map_err(CatalogError::store_unavailable("Failed to fetch destinations"))?;

    Ok(Success::ok(destinations))
}

/// Get a single destination
///
/// Unknown and malformed IDs are both not found
///
/// Request:
/// ```sh
/// curl -v http://localhost:6000/api/destinations/<uuid>
/// ```
pub async fn single<S: Storage>(
    Extension(storage): Extension<S>,
    PathParameters(destination_id): PathParameters<String>,
) -> Result<Success<Destination>, Error> {
    let Ok(destination_id) = parse_identifier(&destination_id) else {
        return Err(Error::not_found("Destination not found"));
    };

    storage
        .find_single_destination_by_id(&destination_id)
        .await
        .map_err(CatalogError::store_unavailable("Failed to fetch destination"))?
        .map_or_else(
            || Err(Error::not_found("Destination not found")),
            |destination| Ok(Success::ok(destination)),
        )
}

/// Create destination form
///
/// Fields to create a destination with, missing required fields fail the validation
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDestinationForm {
    pub name: Option<String>,
    pub country: Option<String>,
    pub continent: Option<String>,
    pub description: Option<String>,

    /// Absolute http(s) URL
    pub image: Option<String>,

    /// Defaults to no activities
    pub activities: Option<ActivitiesInput>,

    /// Defaults to 0
    pub rating: Option<f64>,
}

/// Validated values of a new destination
struct NewDestination {
    name: String,
    country: String,
    continent: String,
    description: String,
    image: String,
    activities: Vec<String>,
    rating: f64,
}

impl NewDestination {
    fn from_form(form: CreateDestinationForm) -> Result<Self, CatalogError> {
        let name = parse_text("name", form.name.as_deref(), false)?;
        let country = parse_text("country", form.country.as_deref(), false)?;
        let continent = parse_text("continent", form.continent.as_deref(), false)?;
        let description = parse_text("description", form.description.as_deref(), true)?;
        let image = parse_image(&parse_text("image", form.image.as_deref(), false)?)?;
        let rating = parse_rating(form.rating.unwrap_or_default())?;
        let activities = form
            .activities
            .map(ActivitiesInput::into_activities)
            .unwrap_or_default();

        Ok(Self {
            name,
            country,
            continent,
            description,
            image,
            activities,
            rating,
        })
    }

    fn values(&self) -> CreateDestinationValues<'_> {
        CreateDestinationValues {
            name: &self.name,
            country: &self.country,
            continent: &self.continent,
            description: &self.description,
            image: &self.image,
            activities: &self.activities,
            rating: self.rating,
        }
    }
}

/// Validate the form and create the destination
///
/// Nothing is stored when the validation fails
pub async fn create_destination<S: Storage>(
    storage: &S,
    form: CreateDestinationForm,
) -> Result<CreateResult, CatalogError> {
    let new_destination = NewDestination::from_form(form)?;

    let destination = storage
        .create_destination(&new_destination.values())
        .await
        .map_err(CatalogError::store_unavailable("Failed to create destination"))?;

    tracing::debug!(
        r#"Created destination "{}" with ID {}"#,
        destination.name,
        destination.id
    );

    Ok(CreateResult {
        inserted_id: destination.id,
    })
}

/// Create a destination based on the [`CreateDestinationForm`](CreateDestinationForm) form
///
/// Request:
/// ```sh
/// curl -v -H 'Content-Type: application/json' \
///     -d '{ "name": "Bali", "country": "Indonesia", "continent": "Asia", "description": "...",
///           "image": "https://www.example.com/bali.jpeg", "activities": "Beach, Culture",
///           "rating": 4.8 }' \
///     http://localhost:6000/api/destinations
/// ```
///
/// Response
/// ```json
/// { "insertedId": "<uuid>" }
/// ```
pub async fn create<S: Storage>(
    Extension(storage): Extension<S>,
    Form(form): Form<CreateDestinationForm>,
) -> Result<Success<CreateResult>, Error> {
    let result = create_destination(&storage, form).await?;

    Ok(Success::ok(result))
}

/// Replace destination form
///
/// The `_id` identifies the destination, all other fields are optional and are not touched when
/// not provided
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceDestinationForm {
    /// Kept as-is, anything but a string is a malformed identifier
    #[serde(rename = "_id")]
    pub id: Option<Value>,

    pub name: Option<String>,
    pub country: Option<String>,
    pub continent: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub activities: Option<ActivitiesInput>,
    pub rating: Option<f64>,
}

/// Validated changes to a destination
#[derive(Default)]
struct DestinationChanges {
    name: Option<String>,
    country: Option<String>,
    continent: Option<String>,
    description: Option<String>,
    image: Option<String>,
    activities: Option<Vec<String>>,
    rating: Option<f64>,
}

impl DestinationChanges {
    fn from_form(form: ReplaceDestinationForm) -> Result<Self, CatalogError> {
        let optional_text = |field, value: Option<String>, allow_empty| {
            value
                .map(|value| parse_text(field, Some(&value), allow_empty))
                .transpose()
        };

        Ok(Self {
            name: optional_text("name", form.name, false)?,
            country: optional_text("country", form.country, false)?,
            continent: optional_text("continent", form.continent, false)?,
            description: optional_text("description", form.description, true)?,
            image: form.image.as_deref().map(parse_image).transpose()?,
            activities: form.activities.map(ActivitiesInput::into_activities),
            rating: form.rating.map(parse_rating).transpose()?,
        })
    }

    fn values(&self) -> UpdateDestinationValues<'_> {
        UpdateDestinationValues {
            name: self.name.as_deref(),
            country: self.country.as_deref(),
            continent: self.continent.as_deref(),
            description: self.description.as_deref(),
            image: self.image.as_deref(),
            activities: self.activities.as_deref(),
            rating: self.rating,
        }
    }
}

/// Validate the form and replace the provided fields of the destination
///
/// An unknown ID is not an error, the result will have a `matched_count` of zero
pub async fn replace_destination<S: Storage>(
    storage: &S,
    mut form: ReplaceDestinationForm,
) -> Result<UpdateResult, CatalogError> {
    let destination_id = match form.id.take() {
        None => return Err(CatalogError::MissingParameter("`_id` is required")),
        Some(Value::String(destination_id)) => parse_identifier(&destination_id)?,
        Some(destination_id) => {
            return Err(CatalogError::MalformedIdentifier(destination_id.to_string()));
        }
    };
    let changes = DestinationChanges::from_form(form)?;

    let destination = storage
        .update_destination(&destination_id, &changes.values())
        .await
        .map_err(CatalogError::store_unavailable("Failed to update destination"))?;

    let matched_count = u64::from(destination.is_some());

    if matched_count == 0 {
        tracing::debug!("No destination with ID {destination_id} to update");
    }

    Ok(UpdateResult {
        matched_count,
        modified_count: matched_count,
    })
}

/// Replace fields of a destination based on the
/// [`ReplaceDestinationForm`](ReplaceDestinationForm) form
///
/// Only provided values are processed, the other fields of the destination will not be touched
///
/// Request:
/// ```sh
/// curl -v -XPUT -H 'Content-Type: application/json' \
///     -d '{ "_id": "<uuid>", "rating": 4.9 }' \
///     http://localhost:6000/api/destinations
/// ```
///
/// Response
/// ```json
/// { "matchedCount": 1, "modifiedCount": 1 }
/// ```
pub async fn replace<S: Storage>(
    Extension(storage): Extension<S>,
    Form(form): Form<ReplaceDestinationForm>,
) -> Result<Success<UpdateResult>, Error> {
    let result = replace_destination(&storage, form).await?;

    Ok(Success::ok(result))
}

/// Query parameters to delete a destination with
#[derive(Debug, Deserialize)]
pub struct DeleteParameters {
    id: Option<String>,
}

/// Delete a destination
///
/// Deleting an unknown destination is not an error, the result will have a `deleted_count` of
/// zero
///
/// Request:
/// ```sh
/// curl -v -XDELETE http://localhost:6000/api/destinations?id=<uuid>
/// ```
///
/// Response
/// ```json
/// { "deletedCount": 1 }
/// ```
pub async fn delete<S: Storage>(
    Extension(storage): Extension<S>,
    QueryParameters(parameters): QueryParameters<DeleteParameters>,
) -> Result<Success<DeleteResult>, Error> {
    let destination_id = parameters
        .id
        .filter(|id| !id.trim().is_empty())
        .ok_or(CatalogError::MissingParameter("ID is required"))?;

    let destination_id = parse_identifier(&destination_id)?;

    let deleted_count = storage
        .delete_destination(&destination_id)
        .await
        .map_err(CatalogError::store_unavailable("Failed to delete destination"))?;

    tracing::debug!("Deleted {deleted_count} destination(s) with ID {destination_id}");

    Ok(Success::ok(DeleteResult { deleted_count }))
}
