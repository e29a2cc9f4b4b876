use axum::Router;
use axum::body::Body;
use axum::body::Bytes;
use axum::http::Method;
use axum::http::Request;
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use chrono::DateTime;
use chrono::Utc;
use http_body_util::BodyExt;
use serde_json::Map;
use serde_json::Value;
use serde_json::json;
use tower::Service;
use uuid::Uuid;

use crate::create_router;
use crate::storage::Memory;
use crate::storage::Storage;

/// Test helper version of Destination struct
#[derive(Debug, Clone)]
pub struct Destination {
    pub id: Uuid,
    pub name: String,
    pub country: String,
    pub continent: String,
    pub description: String,
    pub image: String,
    pub activities: Vec<String>,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Error response
#[derive(Debug, PartialEq, Eq)]
pub struct Error {
    pub error: String,
    pub description: Option<String>,
}

/// Setup the Wanderlust app with an empty in-memory storage
///
/// Never seeded, whatever the environment says
pub fn setup_test_app() -> Router {
    create_router(Memory::new())
}

/// Setup the Wanderlust app with a specific storage
pub fn setup_test_app_with_storage<S: Storage>(storage: S) -> Router {
    create_router(storage)
}

/// Payload of a valid destination
pub fn bali() -> Value {
    json!({
        "name": "Bali",
        "country": "Indonesia",
        "continent": "Asia",
        "description": "Discover tropical paradise with stunning beaches.",
        "image": "https://images.pexels.com/photos/2166553/pexels-photo-2166553.jpeg",
        "activities": "Beach, Culture",
        "rating": 4.8,
    })
}

/// Payload of another valid destination
pub fn kyoto() -> Value {
    json!({
        "name": "Kyoto",
        "country": "Japan",
        "continent": "Asia",
        "description": "Ancient temples and traditional gardens.",
        "image": "https://images.pexels.com/photos/1440476/pexels-photo-1440476.jpeg",
        "activities": ["Culture", "History", "Food"],
        "rating": 4.7,
    })
}

async fn call(app: &mut Router, request: Request<Body>) -> (StatusCode, Bytes) {
    let response = app.call(request).await.unwrap();
    let status_code = response.status();

    let body = response.into_body().collect().await.unwrap().to_bytes();

    (status_code, body)
}

fn json_request(method: Method, uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
        .body(Body::from(serde_json::to_vec(payload).unwrap()))
        .unwrap()
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn list_destinations(app: &mut Router) -> (StatusCode, Option<Vec<Destination>>) {
    let (status_code, body) = call(app, empty_request(Method::GET, "/api/destinations")).await;

    (
        status_code,
        if status_code == StatusCode::OK {
            Some(get_destinations(&body))
        } else {
            None
        },
    )
}

pub async fn single_destination(
    app: &mut Router,
    id: &str,
) -> (StatusCode, Option<Destination>, Option<Error>) {
    let (status_code, body) = call(
        app,
        empty_request(Method::GET, &format!("/api/destinations/{id}")),
    )
    .await;

    if status_code == StatusCode::OK {
        (status_code, Some(get_destination(&body)), None)
    } else {
        (status_code, None, Some(get_error(&body)))
    }
}

pub async fn maybe_create_destination(
    app: &mut Router,
    payload: &Value,
) -> (StatusCode, Option<Uuid>, Option<Error>) {
    let (status_code, body) = call(
        app,
        json_request(Method::POST, "/api/destinations", payload),
    )
    .await;

    if status_code == StatusCode::OK {
        (status_code, Some(get_inserted_id(&body)), None)
    } else {
        (status_code, None, Some(get_error(&body)))
    }
}

pub async fn create_destination(app: &mut Router, payload: &Value) -> Uuid {
    let (status_code, id, error) = maybe_create_destination(app, payload).await;
    assert_eq!(StatusCode::OK, status_code, "{error:?}");

    id.unwrap()
}

pub async fn maybe_create_destination_with_raw_body(
    app: &mut Router,
    body: &'static str,
    include_content_type: bool,
) -> (StatusCode, Option<Uuid>, Option<Error>) {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri("/api/destinations");

    if include_content_type {
        builder = builder.header(CONTENT_TYPE, mime::APPLICATION_JSON.as_ref());
    }

    let request = builder.body(Body::from(body.as_bytes())).unwrap();

    let (status_code, body) = call(app, request).await;

    if status_code == StatusCode::OK {
        (status_code, Some(get_inserted_id(&body)), None)
    } else {
        (status_code, None, Some(get_error(&body)))
    }
}

/// Returns the matched and modified counts on success
pub async fn maybe_replace_destination(
    app: &mut Router,
    payload: &Value,
) -> (StatusCode, Option<(u64, u64)>, Option<Error>) {
    let (status_code, body) = call(
        app,
        json_request(Method::PUT, "/api/destinations", payload),
    )
    .await;

    if status_code == StatusCode::OK {
        let result = serde_json::from_slice::<Value>(&body[..]).unwrap();

        (
            status_code,
            Some((
                result["matchedCount"].as_u64().unwrap(),
                result["modifiedCount"].as_u64().unwrap(),
            )),
            None,
        )
    } else {
        (status_code, None, Some(get_error(&body)))
    }
}

/// Returns the deleted count on success
///
/// The query string is used as-is, like `?id=<uuid>`
pub async fn maybe_delete_destination(
    app: &mut Router,
    query: &str,
) -> (StatusCode, Option<u64>, Option<Error>) {
    let (status_code, body) = call(
        app,
        empty_request(Method::DELETE, &format!("/api/destinations{query}")),
    )
    .await;

    if status_code == StatusCode::OK {
        let result = serde_json::from_slice::<Value>(&body[..]).unwrap();

        (status_code, result["deletedCount"].as_u64(), None)
    } else {
        (status_code, None, Some(get_error(&body)))
    }
}

pub async fn get_json(app: &mut Router, uri: &str) -> (StatusCode, Value) {
    let (status_code, body) = call(app, empty_request(Method::GET, uri)).await;

    (status_code, serde_json::from_slice::<Value>(&body[..]).unwrap())
}

fn value_to_destination(destination: &Map<String, Value>) -> Destination {
    let string = |key: &str| destination[key].as_str().map(ToString::to_string).unwrap();

    Destination {
        id: Uuid::parse_str(&string("_id")).unwrap(),
        name: string("name"),
        country: string("country"),
        continent: string("continent"),
        description: string("description"),
        image: string("image"),
        activities: destination["activities"]
            .as_array()
            .unwrap()
            .iter()
            .map(|activity| activity.as_str().map(ToString::to_string).unwrap())
            .collect(),
        rating: destination["rating"].as_f64().unwrap(),
        created_at: string("createdAt").parse().unwrap(),
        updated_at: string("updatedAt").parse().unwrap(),
    }
}

fn get_destination(body: &Bytes) -> Destination {
    serde_json::from_slice::<Value>(&body[..])
        .unwrap()
        .as_object()
        .map(value_to_destination)
        .unwrap()
}

fn get_destinations(body: &Bytes) -> Vec<Destination> {
    serde_json::from_slice::<Value>(&body[..])
        .unwrap()
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f.as_object().unwrap())
        .map(value_to_destination)
        .collect()
}

fn get_inserted_id(body: &Bytes) -> Uuid {
    serde_json::from_slice::<Value>(&body[..]).unwrap()["insertedId"]
        .as_str()
        .map(Uuid::parse_str)
        .unwrap()
        .unwrap()
}

fn value_to_error(error: &Map<String, Value>) -> Error {
    Error {
        error: error["error"].as_str().map(ToString::to_string).unwrap(),
        description: error
            .get("description")
            .and_then(Value::as_str)
            .map(ToString::to_string),
    }
}

fn get_error(body: &Bytes) -> Error {
    serde_json::from_slice::<Value>(&body[..])
        .unwrap()
        .as_object()
        .map(value_to_error)
        .unwrap()
}
