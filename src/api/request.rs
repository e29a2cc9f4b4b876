//! API request helpers

use axum::extract::FromRequest;
use axum::extract::FromRequestParts;
use axum::extract::Json;
use axum::extract::Path;
use axum::extract::Query;
use axum::extract::Request;
use axum::extract::rejection::JsonRejection;
use axum::extract::rejection::PathRejection;
use axum::extract::rejection::QueryRejection;
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use unicode_normalization::UnicodeNormalization;
use url::Url;
use uuid::Uuid;

use super::CatalogError;
use super::Error;

/// Parse a destination identifier
///
/// ```rust
/// # use wanderlust::api::parse_identifier;
/// assert!(parse_identifier("67e55044-10b1-426f-9247-bb680e5fe0c8").is_ok());
/// assert!(parse_identifier("not-an-id").is_err());
/// ```
pub fn parse_identifier(id: &str) -> Result<Uuid, CatalogError> {
    Uuid::parse_str(id.trim()).map_err(|_| CatalogError::MalformedIdentifier(id.to_string()))
}

/// Normalize a text value
///
/// Surrounding whitespace is removed and the text is Unicode (NFC) normalized
pub fn normalize_text(text: &str) -> String {
    text.trim().nfc().collect::<String>()
}

/// Parse a required text value
///
/// The value should be present, and non-empty when `allow_empty` is `false`
pub fn parse_text(
    field: &'static str,
    value: Option<&str>,
    allow_empty: bool,
) -> Result<String, CatalogError> {
    let Some(value) = value else {
        return Err(CatalogError::ValidationFailure(format!(
            "`{field}` is required"
        )));
    };

    let value = normalize_text(value);

    if value.is_empty() && !allow_empty {
        return Err(CatalogError::ValidationFailure(format!(
            "`{field}` can not be empty"
        )));
    }

    Ok(value)
}

/// Parse and validate the image URL
///
/// The URL is only checked, the normalized text is kept as submitted
///
/// ```rust
/// # use wanderlust::api::parse_image;
/// assert!(parse_image("https://www.example.com/bali.jpeg").is_ok());
/// assert!(parse_image("bali.jpeg").is_err());
/// ```
pub fn parse_image(image: &str) -> Result<String, CatalogError> {
    let image = normalize_text(image);

    let url = Url::parse(&image).map_err(|err| {
        CatalogError::ValidationFailure(format!("`image` is not a valid URL: {err}"))
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(CatalogError::ValidationFailure(
            "`image` should be an http(s) URL".to_string(),
        ));
    }

    Ok(image)
}

/// Validate a rating, should be between 0 and 5
pub fn parse_rating(rating: f64) -> Result<f64, CatalogError> {
    if rating.is_finite() && (0.0..=5.0).contains(&rating) {
        Ok(rating)
    } else {
        Err(CatalogError::ValidationFailure(format!(
            "`rating` should be between 0 and 5, got {rating}"
        )))
    }
}

fn parse_json<J>(json: Result<Json<J>, JsonRejection>) -> Result<J, Error> {
    match json {
        Ok(Json(json)) => Ok(json),
        Err(err) => match err {
            JsonRejection::JsonDataError(err) => {
                Err(Error::bad_request("Data error").with_description(err))
            }
            JsonRejection::JsonSyntaxError(err) => {
                let description = std::error::Error::source(&err)
                    .map_or_else(|| err.body_text(), ToString::to_string);

                Err(Error::bad_request("JSON syntax error").with_description(description))
            }
            JsonRejection::MissingJsonContentType(_err) => Err(Error::bad_request(
                "Missing `application/json` content type",
            )),
            JsonRejection::BytesRejection(err) => {
                Err(Error::bad_request("Invalid characters in JSON").with_description(err))
            }
            err => Err(Error::bad_request("Unknown JSON error").with_description(err)),
        },
    }
}

/// Wrapper for the JSON extractor
pub struct Form<F>(pub F);

impl<S, F> FromRequest<S> for Form<F>
where
    S: Send + Sync,
    F: DeserializeOwned + Send,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let json = Json::<F>::from_request(req, state).await;

        parse_json(json).map(Form)
    }
}

fn parse_path<P>(path: Result<Path<P>, PathRejection>) -> Result<P, Error> {
    match path {
        Ok(Path(path)) => Ok(path),
        Err(err) => match err {
            PathRejection::FailedToDeserializePathParams(err) => {
                Err(Error::bad_request("Invalid path parameter").with_description(err))
            }
            PathRejection::MissingPathParams(err) => {
                Err(Error::bad_request("Missing path parameter").with_description(err))
            }
            err => Err(Error::bad_request("Unknown path error").with_description(err)),
        },
    }
}

/// Wrapper for the path extractor
pub struct PathParameters<P>(pub P);

impl<S, P> FromRequestParts<S> for PathParameters<P>
where
    S: Send + Sync,
    P: DeserializeOwned + Send,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let path = Path::<P>::from_request_parts(parts, state).await;

        parse_path(path).map(PathParameters)
    }
}

fn parse_query<Q>(query: Result<Query<Q>, QueryRejection>) -> Result<Q, Error> {
    match query {
        Ok(Query(query)) => Ok(query),
        Err(err) => Err(Error::bad_request("Invalid query parameters").with_description(err)),
    }
}

/// Wrapper for the query string extractor
pub struct QueryParameters<Q>(pub Q);

impl<S, Q> FromRequestParts<S> for QueryParameters<Q>
where
    S: Send + Sync,
    Q: DeserializeOwned + Send,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let query = Query::<Q>::from_request_parts(parts, state).await;

        parse_query(query).map(QueryParameters)
    }
}
