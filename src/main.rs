//! Chess Rooms - room management CLI
//!
//! Operates the game-room database from the command line.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use chess_rooms::{GameRepository, NewGame, RoomService};
use clap::Parser;
use cli::{Cli, Command};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let db_path = resolve_db_path(cli.db_path);
    info!(db_path = %db_path, "Opening room database");

    let repository = GameRepository::new(db_path)?;
    repository.run_migrations()?;
    let service = RoomService::new(repository);

    match cli.command {
        Command::Create { name, host, guest } => create_room(&service, name, host, guest),
        Command::List { json } => list_rooms(&service, json),
        Command::Show { id } => show_game(&service, id),
        Command::Turn { id } => show_turn(&service, id),
        Command::ToggleTurn { id } => toggle_turn(&service, id),
        Command::Finish { id, undo } => set_finished(&service, id, !undo),
        Command::Count { json } => count_games(&service, json),
        Command::Delete { id } => delete_game(&service, id),
        Command::Exists { name } => check_name(&service, &name),
    }
}

/// Resolves the database path: flag, then CHESS_ROOMS_DB, then the default.
#[instrument]
fn resolve_db_path(flag: Option<String>) -> String {
    flag.or_else(|| std::env::var("CHESS_ROOMS_DB").ok())
        .unwrap_or_else(|| "chess_rooms.db".to_string())
}

#[instrument(skip(service))]
fn create_room(service: &RoomService, name: String, host: i32, guest: i32) -> Result<()> {
    let game = service.create_room(name, host, guest)?;
    println!("Created room '{}' with id {}", game.name(), game.id());
    Ok(())
}

#[instrument(skip(service))]
fn list_rooms(service: &RoomService, json: bool) -> Result<()> {
    let rooms = service.open_rooms()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&rooms)?);
    } else if rooms.is_empty() {
        println!("No open rooms");
    } else {
        for room in &rooms {
            println!("{}\t{}", room.id(), room.name());
        }
    }
    Ok(())
}

#[instrument(skip(service))]
fn show_game(service: &RoomService, id: i32) -> Result<()> {
    let game = service.repository().find_by_id(id)?;
    println!(
        "id: {}\nname: {}\nhost: {}\nguest: {}\nturn: {}\nfinished: {}\ncreated: {}",
        game.id(),
        game.name(),
        game.host_id(),
        game.guest_id(),
        game.turn(),
        game.is_finished(),
        game.created_time()
    );
    Ok(())
}

#[instrument(skip(service))]
fn show_turn(service: &RoomService, id: i32) -> Result<()> {
    let turn = service.repository().get_turn(id)?;
    println!("{}", turn.to_db_string());
    Ok(())
}

#[instrument(skip(service))]
fn toggle_turn(service: &RoomService, id: i32) -> Result<()> {
    let affected = service.repository().toggle_turn(id)?;
    if affected == 0 {
        println!("No game with id {}", id);
    } else {
        let turn = service.repository().get_turn(id)?;
        println!("Turn is now {}", turn.to_db_string());
    }
    Ok(())
}

#[instrument(skip(service))]
fn set_finished(service: &RoomService, id: i32, finished: bool) -> Result<()> {
    let affected = if finished {
        service.finish_room(id)?
    } else {
        service.repository().set_finished(id, false)?
    };
    println!("{} row(s) updated", affected);
    Ok(())
}

#[instrument(skip(service))]
fn count_games(service: &RoomService, json: bool) -> Result<()> {
    let count = service.room_count()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&count)?);
    } else {
        println!("{}", count.total());
    }
    Ok(())
}

#[instrument(skip(service))]
fn delete_game(service: &RoomService, id: i32) -> Result<()> {
    let affected = service.remove_room(id)?;
    println!("{} row(s) deleted", affected);
    Ok(())
}

#[instrument(skip(service))]
fn check_name(service: &RoomService, name: &str) -> Result<()> {
    let taken = service.repository().exists_by_name(name)?;
    println!("{}", if taken { "taken" } else { "available" });
    Ok(())
}
