//! Chess Rooms - persistence layer for a chess-room backend
//!
//! Maps the relational `game` table to read/write operations for room
//! management: creating rooms, tracking turn state, listing open rooms, and
//! counting/deleting rooms.
//!
//! # Architecture
//!
//! - **Repository**: one connection and one statement per call against SQLite
//! - **Service**: duplicate-name check and other room flows over the repository
//! - **Models**: plain row and projection records mapped with diesel derives
//!
//! # Example
//!
//! ```no_run
//! use chess_rooms::{GameRepository, NewGame};
//!
//! # fn example() -> Result<(), chess_rooms::DbError> {
//! let repo = GameRepository::new("chess_rooms.db".to_string())?;
//! repo.run_migrations()?;
//!
//! let game = repo.create(NewGame::new("Alice-Room".to_string(), 1, 2))?;
//! repo.toggle_turn(*game.id())?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod db;
mod room_service;

// Crate-level exports - Database layer
pub use db::{
    DbError, DbErrorKind, Game, GameCount, GameRepository, MIGRATIONS, NewGame, RoomSummary, Turn,
};

// Crate-level exports - Room service
pub use room_service::RoomService;
