use async_trait::async_trait;
use record_actor::mock::MockClient;
use record_actor::{ActorRecord, FrameworkError, RecordActor, RecordClient};

// --- Test Record ---

#[derive(Clone, Debug, PartialEq)]
struct Ticket {
    id: String,
    title: String,
    open: bool,
}

impl Ticket {
    fn new(id: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            open: true,
        }
    }
}

#[derive(Debug)]
struct TicketPatch {
    title: Option<String>,
}

#[derive(Debug)]
enum TicketAction {
    Close,
}

#[derive(Debug, PartialEq, thiserror::Error)]
enum TicketError {
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("ticket {0} is already closed")]
    AlreadyClosed(String),
    #[error("ticket {0} is locked")]
    Locked(String),
}

#[async_trait]
impl ActorRecord for Ticket {
    type Id = String;
    type Patch = TicketPatch;
    type Action = TicketAction;
    type ActionResult = bool;
    type Context = ();
    type Error = TicketError;

    fn id(&self) -> &String {
        &self.id
    }

    async fn on_upsert(&mut self, _ctx: &()) -> Result<(), TicketError> {
        if self.title.is_empty() {
            return Err(TicketError::EmptyTitle);
        }
        Ok(())
    }

    async fn apply_patch(&mut self, patch: TicketPatch, _ctx: &()) -> Result<(), TicketError> {
        if let Some(title) = patch.title {
            // Mutate first so a failure proves the store keeps the old value.
            self.title = title;
            if self.title.is_empty() {
                return Err(TicketError::EmptyTitle);
            }
        }
        Ok(())
    }

    async fn on_remove(&self, _ctx: &()) -> Result<(), TicketError> {
        if self.title == "locked" {
            return Err(TicketError::Locked(self.id.clone()));
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: TicketAction, _ctx: &()) -> Result<bool, TicketError> {
        match action {
            TicketAction::Close => {
                if !self.open {
                    return Err(TicketError::AlreadyClosed(self.id.clone()));
                }
                self.open = false;
                Ok(true)
            }
        }
    }
}

fn start() -> RecordClient<Ticket> {
    let (actor, client) = RecordActor::<Ticket>::new(10);
    tokio::spawn(actor.run(()));
    client
}

#[tokio::test]
async fn test_upsert_get_list_remove() {
    let client = start();

    client.upsert(Ticket::new("t1", "Fries")).await.unwrap();
    client.upsert(Ticket::new("t2", "Burger")).await.unwrap();

    // Upserting an existing id replaces it
    client.upsert(Ticket::new("t1", "Large fries")).await.unwrap();

    let t1 = client.get("t1".into()).await.unwrap().unwrap();
    assert_eq!(t1.title, "Large fries");

    let mut titles: Vec<String> = client
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.title)
        .collect();
    titles.sort();
    assert_eq!(titles, vec!["Burger", "Large fries"]);

    let removed = client.remove("t2".into()).await.unwrap();
    assert_eq!(removed.title, "Burger");
    assert!(client.get("t2".into()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_rejected_upsert_leaves_store_untouched() {
    let client = start();

    let err = client.upsert(Ticket::new("t1", "")).await.unwrap_err();
    assert_eq!(err.into_record_error::<TicketError>().unwrap(), TicketError::EmptyTitle);
    assert!(client.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_failed_patch_does_not_leak_partial_state() {
    let client = start();
    client.upsert(Ticket::new("t1", "Fries")).await.unwrap();

    let patched = client
        .patch("t1".into(), TicketPatch { title: Some("Curly fries".into()) })
        .await
        .unwrap();
    assert_eq!(patched.title, "Curly fries");

    let result = client
        .patch("t1".into(), TicketPatch { title: Some(String::new()) })
        .await;
    assert!(matches!(result, Err(FrameworkError::RecordError(_))));

    let stored = client.get("t1".into()).await.unwrap().unwrap();
    assert_eq!(stored.title, "Curly fries");
}

#[tokio::test]
async fn test_actions_and_missing_records() {
    let client = start();
    client.upsert(Ticket::new("t1", "Fries")).await.unwrap();

    assert!(client.perform_action("t1".into(), TicketAction::Close).await.unwrap());
    assert!(!client.get("t1".into()).await.unwrap().unwrap().open);

    let again = client
        .perform_action("t1".into(), TicketAction::Close)
        .await
        .unwrap_err();
    assert_eq!(
        again.into_record_error::<TicketError>().unwrap(),
        TicketError::AlreadyClosed("t1".into())
    );

    let missing = client.perform_action("nope".into(), TicketAction::Close).await;
    assert!(matches!(missing, Err(FrameworkError::NotFound(id)) if id == "nope"));

    let missing = client.remove("nope".into()).await;
    assert!(matches!(missing, Err(FrameworkError::NotFound(_))));
}

#[tokio::test]
async fn test_on_remove_can_veto() {
    let client = start();
    client.upsert(Ticket::new("t1", "locked")).await.unwrap();

    let err = client.remove("t1".into()).await.unwrap_err();
    assert_eq!(
        err.into_record_error::<TicketError>().unwrap(),
        TicketError::Locked("t1".into())
    );
    assert!(client.get("t1".into()).await.unwrap().is_some());
}

#[tokio::test]
async fn test_client_fails_after_actor_stops() {
    let (actor, client) = RecordActor::<Ticket>::new(1);
    let handle = tokio::spawn(actor.run(()));
    let probe = client.clone();
    drop(client);
    drop(probe);
    handle.await.unwrap();

    let (actor, client) = RecordActor::<Ticket>::new(1);
    drop(actor);
    assert!(matches!(client.list().await, Err(FrameworkError::ActorClosed)));
}

#[tokio::test]
async fn test_mock_client_answers_in_order() {
    let mut mock = MockClient::<Ticket>::new();
    mock.expect_get("t1".into()).return_ok(Some(Ticket::new("t1", "Fries")));
    mock.expect_list().return_ok(vec![]);
    mock.expect_action("t1".into()).return_err(FrameworkError::ActorClosed);

    let client = mock.client();
    let ticket = client.get("t1".into()).await.unwrap().unwrap();
    assert_eq!(ticket.title, "Fries");
    assert!(client.list().await.unwrap().is_empty());
    let result = client.perform_action("t1".into(), TicketAction::Close).await;
    assert!(matches!(result, Err(FrameworkError::ActorClosed)));

    mock.verify();
}

#[tokio::test]
#[should_panic(expected = "expected id t1, got t2")]
async fn test_mock_client_reports_wrong_id() {
    let mut mock = MockClient::<Ticket>::new();
    mock.expect_get("t1".into()).return_ok(None);

    let result = mock.client().get("t2".into()).await;
    assert!(matches!(result, Err(FrameworkError::ActorDropped)));

    mock.verify();
}
