//! Integration tests for `SqliteStore` against in-memory and on-disk
//! databases.

use analytiq_core::{
  Error as CoreError,
  contact::NewContactMessage,
  forms::{self, ContactForm, SubscribeForm},
  store::{ContactStore, SubscriptionStore},
  subscriber::NewSubscriber,
  validation::{EmailAddress, NonEmptyText},
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  let s = SqliteStore::open_in_memory()
    .await
    .expect("in-memory store");
  s.initialize().await.expect("schema");
  s
}

fn subscriber(name: &str, email: &str) -> NewSubscriber {
  NewSubscriber {
    name:  NonEmptyText::parse("name", name).unwrap(),
    email: EmailAddress::parse(email).unwrap(),
  }
}

fn message(name: &str, email: &str, body: &str) -> NewContactMessage {
  NewContactMessage {
    name:    NonEmptyText::parse("name", name).unwrap(),
    email:   EmailAddress::parse(email).unwrap(),
    message: NonEmptyText::parse("message", body).unwrap(),
  }
}

// ─── Schema ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn initialize_twice_keeps_rows() {
  let s = store().await;
  s.add_subscriber(subscriber("Ana", "ana@example.com"))
    .await
    .unwrap();
  s.add_contact_message(message("Ana", "ana@example.com", "Hola"))
    .await
    .unwrap();

  s.initialize().await.unwrap();
  s.initialize_subscribers().await.unwrap();
  s.initialize_contacts().await.unwrap();

  assert_eq!(s.list_subscribers().await.unwrap().len(), 1);
  assert_eq!(s.list_contact_messages().await.unwrap().len(), 1);
}

#[tokio::test]
async fn operations_fail_before_initialize() {
  let s = SqliteStore::open_in_memory().await.unwrap();
  let err = s
    .add_subscriber(subscriber("Ana", "ana@example.com"))
    .await
    .unwrap_err();
  assert!(matches!(err, CoreError::Storage(_)));
}

// ─── Subscribers ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_then_is_registered() {
  let s = store().await;
  assert!(!s.is_registered("juan@example.com").await.unwrap());

  let added = s
    .add_subscriber(subscriber("Juan Pérez", "juan@example.com"))
    .await
    .unwrap();
  assert_eq!(added.name, "Juan Pérez");
  assert_eq!(added.email, "juan@example.com");

  assert!(s.is_registered("juan@example.com").await.unwrap());
}

#[tokio::test]
async fn duplicate_email_is_rejected_without_second_row() {
  let s = store().await;
  s.add_subscriber(subscriber("Juan Pérez", "juan@example.com"))
    .await
    .unwrap();

  let err = s
    .add_subscriber(subscriber("Other", "juan@example.com"))
    .await
    .unwrap_err();
  assert!(matches!(err, CoreError::DuplicateEmail(ref e) if e == "juan@example.com"));

  let all = s.list_subscribers().await.unwrap();
  assert_eq!(all.len(), 1);
  assert_eq!(all[0].name, "Juan Pérez");
}

#[tokio::test]
async fn email_comparison_is_case_sensitive() {
  let s = store().await;
  s.add_subscriber(subscriber("Juan", "juan@example.com"))
    .await
    .unwrap();

  assert!(!s.is_registered("Juan@Example.com").await.unwrap());
  s.add_subscriber(subscriber("Juan", "Juan@Example.com"))
    .await
    .unwrap();
  assert_eq!(s.list_subscribers().await.unwrap().len(), 2);
}

#[tokio::test]
async fn ids_increase_monotonically() {
  let s = store().await;
  let a = s.add_subscriber(subscriber("A", "a@example.com")).await.unwrap();
  let b = s.add_subscriber(subscriber("B", "b@example.com")).await.unwrap();
  assert!(b.id > a.id);

  let listed: Vec<i64> = s
    .list_subscribers()
    .await
    .unwrap()
    .into_iter()
    .map(|sub| sub.id)
    .collect();
  assert_eq!(listed, vec![a.id, b.id]);
}

#[tokio::test]
async fn concurrent_duplicates_admit_exactly_one() {
  let s = store().await;

  let mut handles = Vec::new();
  for i in 0..8 {
    let s = s.clone();
    handles.push(tokio::spawn(async move {
      s.add_subscriber(subscriber(&format!("Racer {i}"), "race@example.com"))
        .await
    }));
  }

  let mut ok = 0;
  for h in handles {
    match h.await.unwrap() {
      Ok(_) => ok += 1,
      Err(CoreError::DuplicateEmail(_)) => {}
      Err(e) => panic!("unexpected error: {e}"),
    }
  }
  assert_eq!(ok, 1);
  assert_eq!(s.list_subscribers().await.unwrap().len(), 1);
}

// ─── Contact messages ────────────────────────────────────────────────────────

#[tokio::test]
async fn contact_message_is_stored_with_timestamp() {
  let s = store().await;
  let stored = s
    .add_contact_message(message("María", "maria@x.com", "Hola"))
    .await
    .unwrap();

  let all = s.list_contact_messages().await.unwrap();
  assert_eq!(all.len(), 1);
  assert_eq!(all[0], stored);
  assert_eq!(all[0].name, "María");
  assert_eq!(all[0].email, "maria@x.com");
  assert_eq!(all[0].message, "Hola");

  let age = chrono::Utc::now() - all[0].created_at;
  assert!(age.num_seconds().abs() < 60, "created_at too far off: {age}");
}

#[tokio::test]
async fn identical_contact_messages_are_all_kept() {
  let s = store().await;
  for n in 1..=3 {
    s.add_contact_message(message("María", "maria@x.com", "Hola"))
      .await
      .unwrap();
    assert_eq!(s.list_contact_messages().await.unwrap().len(), n);
  }
}

// ─── Workflow against SQLite ─────────────────────────────────────────────────

#[tokio::test]
async fn subscribe_workflow_scenario() {
  let s = store().await;

  forms::subscribe(&s, SubscribeForm {
    name:  "Juan Pérez".into(),
    email: "juan@example.com".into(),
  })
  .await
  .unwrap();
  assert!(s.is_registered("juan@example.com").await.unwrap());

  let err = forms::subscribe(&s, SubscribeForm {
    name:  "Other".into(),
    email: "juan@example.com".into(),
  })
  .await
  .unwrap_err();
  assert!(matches!(err, CoreError::DuplicateEmail(_)));
}

#[tokio::test]
async fn contact_workflow_scenario() {
  let s = store().await;
  forms::contact(&s, ContactForm {
    name:    "María".into(),
    email:   "maria@x.com".into(),
    message: "Hola".into(),
  })
  .await
  .unwrap();
  assert_eq!(s.list_contact_messages().await.unwrap().len(), 1);
}

// ─── On-disk persistence ─────────────────────────────────────────────────────

#[tokio::test]
async fn rows_survive_reopen() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("newsletter.db");

  {
    let s = SqliteStore::open(&path).await.unwrap();
    s.initialize().await.unwrap();
    s.add_subscriber(subscriber("Ana", "ana@example.com"))
      .await
      .unwrap();
    s.add_contact_message(message("Ana", "ana@example.com", "Hola"))
      .await
      .unwrap();
  }

  let s = SqliteStore::open(&path).await.unwrap();
  s.initialize().await.unwrap();
  assert!(s.is_registered("ana@example.com").await.unwrap());
  assert_eq!(s.list_contact_messages().await.unwrap().len(), 1);

  let err = s
    .add_subscriber(subscriber("Ana again", "ana@example.com"))
    .await
    .unwrap_err();
  assert!(matches!(err, CoreError::DuplicateEmail(_)));
}

#[tokio::test]
async fn reads_rows_written_by_earlier_deployments() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("newsletter.db");

  {
    let conn = rusqlite::Connection::open(&path).unwrap();
    conn
      .execute_batch(
        "CREATE TABLE newsletter (
             id INTEGER PRIMARY KEY AUTOINCREMENT,
             name TEXT NOT NULL,
             email TEXT NOT NULL UNIQUE,
             created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
         );
         INSERT INTO newsletter (name, email, created_at)
           VALUES ('Legacy', 'legacy@example.com', '2024-12-01 18:45:00');",
      )
      .unwrap();
  }

  let s = SqliteStore::open(&path).await.unwrap();
  s.initialize().await.unwrap();
  let all = s.list_subscribers().await.unwrap();
  assert_eq!(all.len(), 1);
  assert_eq!(all[0].email, "legacy@example.com");
  assert_eq!(all[0].created_at.to_rfc3339(), "2024-12-01T18:45:00+00:00");
  assert!(s.is_registered("legacy@example.com").await.unwrap());
}
