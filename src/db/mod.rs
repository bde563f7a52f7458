//! Database persistence layer for chess game rooms.

// Private module declarations
mod error;
mod models;
mod repository;
mod schema; // Diesel generated schema - internal use only

// Crate-level exports via pub use
pub use error::{DbError, DbErrorKind};
pub use models::{Game, GameCount, NewGame, RoomSummary, Turn};
pub use repository::{GameRepository, MIGRATIONS};
