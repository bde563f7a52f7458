//! Tests for the room service layer.

use tempfile::NamedTempFile;

use chess_rooms::{DbErrorKind, GameRepository, RoomService};

fn setup_test_service() -> (NamedTempFile, RoomService) {
    let db_file = NamedTempFile::new().expect("Failed to create temp file");
    let db_path = db_file.path().to_str().expect("Invalid path").to_string();

    let repo = GameRepository::new(db_path).expect("Failed to create repository");
    repo.run_migrations().expect("Migrations failed");
    (db_file, RoomService::new(repo))
}

#[test]
fn test_create_room() {
    let (_db, service) = setup_test_service();
    let game = service
        .create_room("Lobby-1".to_string(), 1, 2)
        .expect("Create failed");
    assert_eq!(game.name(), "Lobby-1");
    assert!(*game.id() > 0);
}

#[test]
fn test_create_room_rejects_taken_name() {
    let (_db, service) = setup_test_service();
    service
        .create_room("Lobby-2".to_string(), 1, 2)
        .expect("First create failed");

    let err = service
        .create_room("Lobby-2".to_string(), 3, 4)
        .expect_err("Taken name should be rejected");
    assert_eq!(err.kind(), DbErrorKind::Constraint);
}

#[test]
fn test_finish_room_hides_it_from_open_rooms() {
    let (_db, service) = setup_test_service();
    let game = service
        .create_room("Lobby-3".to_string(), 1, 2)
        .expect("Create failed");
    assert_eq!(service.open_rooms().expect("List failed").len(), 1);

    let affected = service.finish_room(*game.id()).expect("Finish failed");
    assert_eq!(affected, 1);
    assert!(service.open_rooms().expect("List failed").is_empty());
}

#[test]
fn test_finish_room_missing_id_affects_zero_rows() {
    let (_db, service) = setup_test_service();
    let affected = service.finish_room(9999).expect("Finish failed");
    assert_eq!(affected, 0);
}

#[test]
fn test_remove_room_frees_the_name() {
    let (_db, service) = setup_test_service();
    let game = service
        .create_room("Lobby-4".to_string(), 1, 2)
        .expect("Create failed");

    let affected = service.remove_room(*game.id()).expect("Remove failed");
    assert_eq!(affected, 1);

    // The name is available again after removal.
    service
        .create_room("Lobby-4".to_string(), 5, 6)
        .expect("Recreate failed");
}

#[test]
fn test_room_count_includes_finished_rooms() {
    let (_db, service) = setup_test_service();
    let first = service
        .create_room("Lobby-5".to_string(), 1, 2)
        .expect("Create failed");
    service
        .create_room("Lobby-6".to_string(), 3, 4)
        .expect("Create failed");
    service.finish_room(*first.id()).expect("Finish failed");

    assert_eq!(*service.room_count().expect("Count failed").total(), 2);
}
