//! Command-line interface for chess_rooms.

use clap::{Parser, Subcommand};

/// Chess Rooms - room persistence for a chess backend
#[derive(Parser, Debug)]
#[command(name = "chess_rooms")]
#[command(about = "Manage chess game rooms in a SQLite database", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the database file (created if it doesn't exist).
    /// Falls back to CHESS_ROOMS_DB, then "chess_rooms.db".
    #[arg(long)]
    pub db_path: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new game room
    Create {
        /// Display name of the room (must be unique)
        name: String,

        /// Host player id
        #[arg(long)]
        host: i32,

        /// Guest player id
        #[arg(long)]
        guest: i32,
    },

    /// List all joinable (unfinished) rooms
    List {
        /// Print as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Show a game by id
    Show {
        /// Game id
        id: i32,
    },

    /// Print which side is to move
    Turn {
        /// Game id
        id: i32,
    },

    /// Flip the side to move
    ToggleTurn {
        /// Game id
        id: i32,
    },

    /// Mark a game as finished
    Finish {
        /// Game id
        id: i32,

        /// Clear the flag instead, reopening the room
        #[arg(long)]
        undo: bool,
    },

    /// Count all games, finished or not
    Count {
        /// Print as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Delete a game by id
    Delete {
        /// Game id
        id: i32,
    },

    /// Check whether a room name is taken
    Exists {
        /// Room name to check
        name: String,
    },
}
