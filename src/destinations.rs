//! Destinations, the single persisted record of the catalog

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// A travel destination in the catalog
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    /// Assigned by the storage on creation, never changes
    #[serde(rename = "_id")]
    pub id: Uuid,

    pub name: String,

    pub country: String,

    pub continent: String,

    pub description: String,

    /// URL of the hero image
    pub image: String,

    pub activities: Vec<String>,

    /// Expected to be between 0 and 5
    pub rating: f64,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// Result of creating a destination
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateResult {
    /// Identifier of the new destination
    pub inserted_id: Uuid,
}

/// Result of replacing the fields of a destination
///
/// A `matched_count` of zero means no destination has the given identifier, nothing changed
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResult {
    pub matched_count: u64,
    pub modified_count: u64,
}

/// Result of deleting a destination
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    pub deleted_count: u64,
}

/// Activities as provided by a client
///
/// Either a list of activities or a single comma-separated string
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ActivitiesInput {
    List(Vec<String>),
    Text(String),
}

impl ActivitiesInput {
    /// Normalize the input into a list of activities
    pub fn into_activities(self) -> Vec<String> {
        match self {
            Self::List(activities) => activities
                .iter()
                .map(|activity| activity.trim())
                .filter(|activity| !activity.is_empty())
                .map(ToString::to_string)
                .collect(),
            Self::Text(text) => split_activities(&text),
        }
    }
}

/// Split a comma-separated list of activities
///
/// Every activity is trimmed, empty ones are dropped
///
/// ```rust
/// # use wanderlust::destinations::split_activities;
/// assert_eq!(split_activities("Beach, Culture"), vec!["Beach", "Culture"]);
/// ```
pub fn split_activities(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|activity| !activity.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Join activities back into the comma-separated form used for editing
pub fn join_activities(activities: &[String]) -> String {
    activities.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_activities() {
        assert_eq!(split_activities("Beach, Culture"), vec!["Beach", "Culture"]);
        assert_eq!(
            split_activities("  Hiking ,History,, Adventure "),
            vec!["Hiking", "History", "Adventure"]
        );
        assert!(split_activities("").is_empty());
        assert!(split_activities(" , ").is_empty());
    }

    #[test]
    fn test_activities_input() {
        let input: ActivitiesInput = serde_json::from_str(r#""Beach, Culture""#).unwrap();
        assert_eq!(input.into_activities(), vec!["Beach", "Culture"]);

        let input: ActivitiesInput = serde_json::from_str(r#"[" Beach", "", "Culture "]"#).unwrap();
        assert_eq!(input.into_activities(), vec!["Beach", "Culture"]);
    }

    #[test]
    fn test_join_activities() {
        let activities = split_activities("Beach,Culture");
        assert_eq!(join_activities(&activities), "Beach, Culture");
    }

    #[test]
    fn test_destination_wire_names() {
        let now = Utc::now();
        let destination = Destination {
            id: Uuid::new_v4(),
            name: "Bali".to_string(),
            country: "Indonesia".to_string(),
            continent: "Asia".to_string(),
            description: String::new(),
            image: "https://www.example.com/bali.jpeg".to_string(),
            activities: vec!["Beach".to_string()],
            rating: 4.8,
            created_at: now,
            updated_at: now,
        };

        let value = serde_json::to_value(&destination).unwrap();
        assert_eq!(value["_id"], destination.id.to_string());
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert!(value.get("id").is_none());
    }
}
