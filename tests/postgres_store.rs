//! Runs against a real database: `DATABASE_URL=postgres://... cargo test -- --ignored`.

use dotenv::dotenv;
use pretty_assertions::assert_eq;
use serde_json::{json, Map, Value};
use taskvault::store::{CredentialStore, PgStore, TaskStore};
use taskvault::AppError;
use uuid::Uuid;

fn fields(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("test fields must be an object"),
    }
}

async fn connect() -> PgStore {
    dotenv().ok();
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for tests");
    PgStore::connect(&database_url, 2)
        .await
        .expect("Failed to connect to test DB")
}

#[ignore]
#[actix_rt::test]
async fn test_pg_credentials_are_unique() {
    let store = connect().await;
    let email = format!("pg-{}@example.com", Uuid::new_v4());

    let user = store.create(&email, "hash-1").await.unwrap();
    assert_eq!(user.email, email);

    match store.create(&email, "hash-2").await {
        Err(AppError::Conflict(_)) => {}
        other => panic!("expected conflict, got {:?}", other),
    }

    let found = store.find_by_email(&email).await.unwrap().unwrap();
    assert_eq!(found.password_hash, "hash-1");

    let _ = sqlx::query("DELETE FROM users WHERE email = $1")
        .bind(&email)
        .execute(store.pool())
        .await;
}

#[ignore]
#[actix_rt::test]
async fn test_pg_task_lifecycle() {
    let store = connect().await;

    let task = store
        .insert(fields(json!({ "title": "pg task", "done": false })))
        .await
        .unwrap();
    let other = store
        .insert(fields(json!({ "title": "bystander" })))
        .await
        .unwrap();

    let fetched = store.get(task.id).await.unwrap().unwrap();
    assert_eq!(fetched, task);

    let updated = store
        .update(task.id, fields(json!({ "done": true, "id": Uuid::new_v4() })))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.id, task.id);
    assert_eq!(
        Value::Object(updated.fields),
        json!({ "title": "pg task", "done": true })
    );

    let listed: Vec<Uuid> = store.list().await.unwrap().iter().map(|t| t.id).collect();
    let first = listed.iter().position(|id| *id == task.id).unwrap();
    let second = listed.iter().position(|id| *id == other.id).unwrap();
    assert!(first < second, "listing keeps insertion order");

    let deleted = store
        .delete_many(&[task.id, Uuid::new_v4()])
        .await
        .unwrap();
    assert_eq!(deleted, 1);
    assert!(store.get(task.id).await.unwrap().is_none());

    assert_eq!(store.delete(other.id).await.unwrap(), 1);
}
