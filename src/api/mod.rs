//! All API endpoint setup

use axum::Router;
use axum::routing::get;

pub use catalog_error::CatalogError;
pub use destinations::CreateDestinationForm;
pub use destinations::ReplaceDestinationForm;
pub use destinations::create_destination;
pub use destinations::replace_destination;
pub use request::Form;
pub use request::PathParameters;
pub use request::QueryParameters;
pub use request::normalize_text;
pub use request::parse_identifier;
pub use request::parse_image;
pub use request::parse_rating;
pub use request::parse_text;
pub use response::Error;
pub use response::Success;

use crate::storage::Storage;

mod catalog;
mod catalog_error;
mod destinations;
mod request;
mod response;

/// Get the Axum router for all API routes
pub fn router<S: Storage>() -> Router {
    let destinations = Router::new()
        .route(
            "/",
            get(destinations::list::<S>)
                .post(destinations::create::<S>)
                .put(destinations::replace::<S>)
                .delete(destinations::delete::<S>),
        )
        .route("/{destination}", get(destinations::single::<S>));

    let packages = Router::new()
        .route("/", get(catalog::packages))
        .route("/featured", get(catalog::featured))
        .route("/{package}", get(catalog::single_package));

    Router::new()
        .nest("/destinations", destinations)
        .nest("/packages", packages)
        .route("/testimonials", get(catalog::testimonials))
}
