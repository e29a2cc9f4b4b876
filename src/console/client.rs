//! Clients the console uses to reach the destinations API

use core::fmt;
use std::future::Future;

use axum::body::Body;
use axum::http::Method;
use axum::http::Request;
use axum::http::Response;
use axum::http::header::CONTENT_TYPE;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tower::Service;
use tower::ServiceExt;
use uuid::Uuid;

use crate::destinations::CreateResult;
use crate::destinations::DeleteResult;
use crate::destinations::Destination;
use crate::destinations::UpdateResult;

use super::DestinationPayload;

/// Path of the destinations collection
const DESTINATIONS_PATH: &str = "/api/destinations";

/// Upper limit of a response body
const BODY_LIMIT: usize = 8 * 1024 * 1024;

/// Failed call to the destinations API
///
/// The kind of failure is not kept, only a message to show to the user
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientError {
    pub message: String,
}

impl ClientError {
    pub fn new<M>(message: M) -> Self
    where
        M: ToString,
    {
        Self {
            message: message.to_string(),
        }
    }
}

impl std::error::Error for ClientError {}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Every operation the console needs from the destinations API
///
/// Each call is a single attempt, there are no retries
pub trait CatalogClient {
    /// Fetch all destinations
    fn list(&self) -> impl Future<Output = Result<Vec<Destination>, ClientError>>;

    /// Create a destination, the payload should not have an ID
    fn create(
        &self,
        payload: &DestinationPayload,
    ) -> impl Future<Output = Result<CreateResult, ClientError>>;

    /// Replace the fields of the destination identified by the payload ID
    fn replace(
        &self,
        payload: &DestinationPayload,
    ) -> impl Future<Output = Result<UpdateResult, ClientError>>;

    /// Delete a destination
    fn delete(&self, id: &Uuid) -> impl Future<Output = Result<DeleteResult, ClientError>>;
}

/// Error body of the API
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
    description: Option<String>,
}

/// Client talking HTTP to any service, like the router of the app
#[derive(Clone, Debug)]
pub struct ServiceClient<T> {
    service: T,
}

impl<T> ServiceClient<T>
where
    T: Service<Request<Body>, Response = Response<Body>> + Clone,
    T::Error: fmt::Display,
{
    pub fn new(service: T) -> Self {
        Self { service }
    }

    async fn send<R>(&self, request: Request<Body>) -> Result<R, ClientError>
    where
        R: DeserializeOwned,
    {
        let response = self
            .service
            .clone()
            .oneshot(request)
            .await
            .map_err(ClientError::new)?;

        let status_code = response.status();

        let body = axum::body::to_bytes(response.into_body(), BODY_LIMIT)
            .await
            .map_err(ClientError::new)?;

        if status_code.is_success() {
            return serde_json::from_slice(&body).map_err(ClientError::new);
        }

        tracing::debug!("Destinations API responded with {status_code}");

        match serde_json::from_slice::<ErrorBody>(&body) {
            Ok(ErrorBody {
                error,
                description: Some(description),
            }) => Err(ClientError::new(format!("{error}: {description}"))),
            Ok(ErrorBody { error, .. }) => Err(ClientError::new(error)),
            Err(_) => Err(ClientError::new(format!(
                "Unexpected response: {status_code}"
            ))),
        }
    }

    fn json_request(
        method: Method,
        payload: &DestinationPayload,
    ) -> Result<Request<Body>, ClientError> {
        let body = serde_json::to_vec(payload).map_err(ClientError::new)?;

        Request::builder()
            .method(method)
            .uri(DESTINATIONS_PATH)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .map_err(ClientError::new)
    }
}

impl<T> CatalogClient for ServiceClient<T>
where
    T: Service<Request<Body>, Response = Response<Body>> + Clone,
    T::Error: fmt::Display,
{
    async fn list(&self) -> Result<Vec<Destination>, ClientError> {
        let request = Request::builder()
            .method(Method::GET)
            .uri(DESTINATIONS_PATH)
            .body(Body::empty())
            .map_err(ClientError::new)?;

        self.send(request).await
    }

    async fn create(&self, payload: &DestinationPayload) -> Result<CreateResult, ClientError> {
        let request = Self::json_request(Method::POST, payload)?;

        self.send(request).await
    }

    async fn replace(&self, payload: &DestinationPayload) -> Result<UpdateResult, ClientError> {
        let request = Self::json_request(Method::PUT, payload)?;

        self.send(request).await
    }

    async fn delete(&self, id: &Uuid) -> Result<DeleteResult, ClientError> {
        let request = Request::builder()
            .method(Method::DELETE)
            .uri(format!("{DESTINATIONS_PATH}?id={id}"))
            .body(Body::empty())
            .map_err(ClientError::new)?;

        self.send(request).await
    }
}
