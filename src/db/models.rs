//! Database models and domain types.

use chrono::NaiveDateTime;
use derive_getters::Getters;
use derive_new::new;
use diesel::prelude::*;
use serde::Serialize;
use tracing::instrument;

use crate::db::{DbError, DbErrorKind, schema};

/// Game room database model.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable, Getters)]
#[diesel(table_name = schema::game)]
pub struct Game {
    id: i32,
    name: String,
    host_id: i32,
    guest_id: i32,
    turn: String,
    is_finished: bool,
    created_time: NaiveDateTime,
}

impl Game {
    /// Parses the stored turn string into a [`Turn`] enum.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn parse_turn(&self) -> Result<Turn, DbError> {
        Turn::from_db_string(self.turn())
    }
}

/// Insertable game model for creating new rooms.
///
/// `id`, `turn`, `is_finished` and `created_time` are filled in by the
/// storage defaults on insert.
#[derive(Debug, Clone, Insertable, new, Getters)]
#[diesel(table_name = schema::game)]
pub struct NewGame {
    name: String,
    host_id: i32,
    guest_id: i32,
}

/// Side to move, from the white player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    /// White is to move.
    White,
    /// Black is to move.
    Black,
}

impl Turn {
    /// Converts the turn to the string stored in the database.
    #[instrument]
    pub fn to_db_string(&self) -> &'static str {
        match self {
            Self::White => "WHITE",
            Self::Black => "BLACK",
        }
    }

    /// Parses the turn from the string stored in the database.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the string is not a valid turn value.
    #[instrument(skip(s), fields(s = %s))]
    pub fn from_db_string(s: &str) -> Result<Self, DbError> {
        match s {
            "WHITE" => Ok(Self::White),
            "BLACK" => Ok(Self::Black),
            _ => Err(DbError::new(
                DbErrorKind::Query,
                format!("Invalid turn: '{}'", s),
            )),
        }
    }

    /// Returns the other side.
    #[instrument]
    pub fn other(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }
}

/// Room listing projection: the name and id of a joinable room.
#[derive(Debug, Clone, Queryable, Getters, Serialize)]
pub struct RoomSummary {
    name: String,
    id: i32,
}

/// Aggregate count of all game rows.
#[derive(Debug, Clone, Copy, new, Getters, Serialize)]
pub struct GameCount {
    total: i64,
}
