use uuid::Uuid;

use crate::console::CatalogClient;
use crate::console::ClientError;
use crate::console::Console;
use crate::console::DestinationPayload;
use crate::console::FormValues;
use crate::console::Mode;
use crate::console::NotificationKind;
use crate::console::ServiceClient;
use crate::destinations::CreateResult;
use crate::destinations::DeleteResult;
use crate::destinations::Destination;
use crate::destinations::UpdateResult;
use crate::tests::helper;

fn bali_form() -> FormValues {
    FormValues {
        name: "Bali".to_string(),
        country: "Indonesia".to_string(),
        continent: "Asia".to_string(),
        description: "Discover tropical paradise with stunning beaches.".to_string(),
        image: "https://images.pexels.com/photos/2166553/pexels-photo-2166553.jpeg".to_string(),
        activities: "Beach, Culture".to_string(),
        rating: 4.8,
    }
}

#[tokio::test]
async fn test_create_from_console() {
    let mut app = helper::setup_test_app();
    let mut console = Console::new(ServiceClient::new(app.clone()));

    assert!(console.refresh().await);
    assert!(console.destinations().is_empty());
    assert_eq!(Mode::Create, console.mode());

    *console.form_mut() = bali_form();
    assert!(console.submit().await);

    // form is reset and the list refreshed
    assert_eq!(&FormValues::default(), console.form());
    assert_eq!(Mode::Create, console.mode());
    assert_eq!(1, console.destinations().len());

    let destination = &console.destinations()[0];
    assert_eq!("Bali", destination.name);
    assert_eq!(vec!["Beach", "Culture"], destination.activities);
    assert!((destination.rating - 4.8).abs() < f64::EPSILON);

    let notifications = console.notifications();
    assert_eq!(1, notifications.len());
    assert_eq!(NotificationKind::Success, notifications[0].kind);
    assert_eq!(
        "Destination created successfully.",
        notifications[0].description
    );

    // the API sees the same destination
    let (_, destinations) = helper::list_destinations(&mut app).await;
    assert_eq!(destination.id, destinations.unwrap()[0].id);
}

#[tokio::test]
async fn test_edit_from_console() {
    let mut app = helper::setup_test_app();
    let id = helper::create_destination(&mut app, &helper::bali()).await;
    let other_id = helper::create_destination(&mut app, &helper::kyoto()).await;

    let mut console = Console::new(ServiceClient::new(app.clone()));
    assert!(console.refresh().await);

    // unknown destinations can not be selected
    assert!(!console.edit(Uuid::new_v4()));
    assert_eq!(Mode::Create, console.mode());

    assert!(console.edit(id));
    assert_eq!(Mode::Edit(id), console.mode());
    assert_eq!(&bali_form(), console.form());

    console.form_mut().rating = 4.9;
    console.form_mut().activities = "Beach, Culture, Surfing".to_string();
    assert!(console.submit().await);

    assert_eq!(Mode::Create, console.mode());
    assert_eq!(&FormValues::default(), console.form());
    assert_eq!(
        "Destination updated successfully.",
        console.notifications()[0].description
    );

    let (_, destination, _) = helper::single_destination(&mut app, &id.to_string()).await;
    let destination = destination.unwrap();
    assert!((destination.rating - 4.9).abs() < f64::EPSILON);
    assert_eq!(vec!["Beach", "Culture", "Surfing"], destination.activities);

    // the other one is untouched
    let (_, other, _) = helper::single_destination(&mut app, &other_id.to_string()).await;
    assert_eq!("Kyoto", other.unwrap().name);

    assert!(console.edit(other_id));
    console.cancel_edit();
    assert_eq!(Mode::Create, console.mode());
    assert_eq!(&FormValues::default(), console.form());
}

#[tokio::test]
async fn test_failed_submit_keeps_form() {
    let mut app = helper::setup_test_app();
    let id = helper::create_destination(&mut app, &helper::bali()).await;

    let mut console = Console::new(ServiceClient::new(app.clone()));
    assert!(console.refresh().await);
    assert!(console.edit(id));

    console.form_mut().name = "   ".to_string();
    let form = console.form().clone();
    assert!(!console.submit().await);

    assert_eq!(Mode::Edit(id), console.mode());
    assert_eq!(&form, console.form());

    let notification = &console.notifications()[0];
    assert_eq!(NotificationKind::Error, notification.kind);
    assert_eq!(
        "Validation failed: `name` can not be empty",
        notification.description
    );

    assert!(console.dismiss(0).is_some());
    assert!(console.notifications().is_empty());
    assert!(console.dismiss(0).is_none());

    // nothing was stored
    let (_, destination, _) = helper::single_destination(&mut app, &id.to_string()).await;
    assert_eq!("Bali", destination.unwrap().name);
}

#[tokio::test]
async fn test_delete_from_console() {
    let mut app = helper::setup_test_app();
    let id = helper::create_destination(&mut app, &helper::bali()).await;
    helper::create_destination(&mut app, &helper::kyoto()).await;

    let mut console = Console::new(ServiceClient::new(app.clone()));
    assert!(console.refresh().await);
    assert_eq!(2, console.destinations().len());

    assert!(console.delete(id).await);
    assert_eq!(1, console.destinations().len());
    assert_eq!("Kyoto", console.destinations()[0].name);
    assert_eq!(
        "Destination has been deleted successfully.",
        console.notifications()[0].description
    );

    // deleting again matches nothing, which is not a failure
    assert!(console.delete(id).await);
    assert_eq!(1, console.destinations().len());
}

/// Client without a reachable API
struct Offline;

impl CatalogClient for Offline {
    async fn list(&self) -> Result<Vec<Destination>, ClientError> {
        Err(ClientError::new(""))
    }

    async fn create(&self, _payload: &DestinationPayload) -> Result<CreateResult, ClientError> {
        Err(ClientError::new("connection refused"))
    }

    async fn replace(&self, _payload: &DestinationPayload) -> Result<UpdateResult, ClientError> {
        Err(ClientError::new("connection refused"))
    }

    async fn delete(&self, _id: &Uuid) -> Result<DeleteResult, ClientError> {
        Err(ClientError::new(""))
    }
}

#[tokio::test]
async fn test_offline_console() {
    let mut console = Console::new(Offline);

    assert!(!console.refresh().await);
    assert!(console.destinations().is_empty());
    assert_eq!(
        "Failed to fetch destinations",
        console.notifications()[0].description
    );

    assert!(!console.delete(Uuid::new_v4()).await);
    assert_eq!(
        "Failed to delete destination",
        console.notifications()[1].description
    );

    *console.form_mut() = bali_form();
    assert!(!console.submit().await);
    assert_eq!(&bali_form(), console.form());
    assert_eq!("connection refused", console.notifications()[2].description);
    assert!(
        console
            .notifications()
            .iter()
            .all(|notification| notification.kind == NotificationKind::Error)
    );
}
