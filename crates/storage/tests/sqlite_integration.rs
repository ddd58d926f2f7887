use chrono::Duration;
use screening_core::model::{Answer, Handoff, HandoffSlot, ScreeningPayload, ScreeningResult};
use screening_core::time::fixed_now;
use serde_json::json;
use storage::repository::{HandoffRecord, HandoffRepository, Storage};
use storage::sqlite::SqliteRepository;

fn payload_record(value: i64) -> HandoffRecord {
    let payload = ScreeningPayload::from_answers([Answer::Value(value); 6]);
    HandoffRecord::from_handoff(&Handoff::Payload(payload), fixed_now()).unwrap()
}

#[tokio::test]
async fn sqlite_roundtrip_keeps_body_and_timestamp() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_handoff_roundtrip?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    let record = payload_record(2);
    repo.put(&record).await.unwrap();

    let fetched = repo
        .get(HandoffSlot::ScreeningData)
        .await
        .unwrap()
        .expect("slot written");
    assert_eq!(fetched, record);
    assert_eq!(
        fetched.into_handoff().unwrap(),
        Handoff::Payload(ScreeningPayload::from_answers([Answer::Value(2); 6]))
    );
}

#[tokio::test]
async fn sqlite_put_overwrites_previous_submission() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_handoff_overwrite?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    repo.put(&payload_record(0)).await.unwrap();
    let mut later = payload_record(1);
    later.written_at = fixed_now() + Duration::minutes(5);
    repo.put(&later).await.unwrap();

    let fetched = repo.get(HandoffSlot::ScreeningData).await.unwrap();
    assert_eq!(fetched, Some(later));
}

#[tokio::test]
async fn sqlite_slots_are_independent_and_clearable() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_handoff_slots?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    let result = HandoffRecord::from_handoff(
        &Handoff::Result(ScreeningResult::new(json!({"risk": "low"}))),
        fixed_now(),
    )
    .unwrap();
    repo.put(&payload_record(1)).await.unwrap();
    repo.put(&result).await.unwrap();

    assert!(repo.delete(HandoffSlot::ScreeningData).await.unwrap());
    assert!(!repo.delete(HandoffSlot::ScreeningData).await.unwrap());
    assert_eq!(repo.get(HandoffSlot::ScreeningData).await.unwrap(), None);
    assert_eq!(repo.get(HandoffSlot::ScreeningResult).await.unwrap(), Some(result));
}

#[tokio::test]
async fn migrate_is_idempotent() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_handoff_migrate?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("first migrate");
    repo.migrate().await.expect("second migrate");
}

#[tokio::test]
async fn storage_sqlite_exposes_handoff_repo() {
    let storage = Storage::sqlite("sqlite:file:memdb_handoff_storage?mode=memory&cache=shared")
        .await
        .expect("storage");
    storage.handoff.put(&payload_record(1)).await.unwrap();
    assert!(
        storage
            .handoff
            .get(HandoffSlot::ScreeningData)
            .await
            .unwrap()
            .is_some()
    );
}
