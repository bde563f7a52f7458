//! Room management business logic layer.

use tracing::{debug, info, instrument};

use crate::{DbError, DbErrorKind, Game, GameCount, GameRepository, NewGame, RoomSummary};

/// Service layer for game room operations.
///
/// Wraps [`GameRepository`] with higher-level flows such as the
/// duplicate-name check before room creation.
#[derive(Debug, Clone)]
pub struct RoomService {
    repository: GameRepository,
}

impl RoomService {
    /// Creates a new room service backed by the given repository.
    #[instrument(skip(repository))]
    pub fn new(repository: GameRepository) -> Self {
        info!("Creating RoomService");
        Self { repository }
    }

    /// Returns the underlying repository.
    #[instrument(skip(self))]
    pub fn repository(&self) -> &GameRepository {
        &self.repository
    }

    /// Creates a room after checking the name is not already taken.
    ///
    /// The check and the insert are separate statements, so two concurrent
    /// creators can both pass the check; the unique index on `name` is the
    /// backstop and surfaces as a constraint error from the insert.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] with [`DbErrorKind::Constraint`] if the name is
    /// taken, or any repository error.
    #[instrument(skip(self))]
    pub fn create_room(&self, name: String, host_id: i32, guest_id: i32) -> Result<Game, DbError> {
        debug!(name = %name, "Creating room");

        if self.repository.exists_by_name(&name)? {
            info!(name = %name, "Room name already taken");
            return Err(DbError::new(
                DbErrorKind::Constraint,
                format!("Room name '{}' is already taken", name),
            ));
        }

        self.repository.create(NewGame::new(name, host_id, guest_id))
    }

    /// Lists all joinable (unfinished) rooms.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn open_rooms(&self) -> Result<Vec<RoomSummary>, DbError> {
        debug!("Listing joinable rooms");
        self.repository.list_open_rooms()
    }

    /// Returns the total number of rooms, finished or not.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn room_count(&self) -> Result<GameCount, DbError> {
        debug!("Counting rooms");
        self.repository.count_all()
    }

    /// Marks a room's game as finished.
    ///
    /// Returns the number of rows affected (0 if the id does not exist).
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn finish_room(&self, game_id: i32) -> Result<usize, DbError> {
        debug!(game_id, "Finishing room");
        let affected = self.repository.set_finished(game_id, true)?;
        info!(game_id, affected, "Room finished");
        Ok(affected)
    }

    /// Removes a room entirely.
    ///
    /// Returns the number of rows affected (0 if the id does not exist).
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn remove_room(&self, game_id: i32) -> Result<usize, DbError> {
        debug!(game_id, "Removing room");
        self.repository.delete_by_id(game_id)
    }
}
