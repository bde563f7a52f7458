//! Database repository for chess game rooms.

use diesel::dsl::{exists, sql};
use diesel::prelude::*;
use diesel::sql_types::Text;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info, instrument};

use crate::db::{DbError, DbErrorKind, Game, GameCount, NewGame, RoomSummary, Turn, schema};

/// Migrations embedded at compile time from the `migrations/` directory.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Database repository for game room operations.
///
/// Each method opens its own connection, issues a single statement, and maps
/// the result rows. There is no cross-call state and no multi-statement
/// transaction; isolation between concurrent callers is the storage engine's
/// concern.
#[derive(Debug, Clone)]
pub struct GameRepository {
    db_path: String,
}

impl GameRepository {
    /// Creates a new repository connected to the database at the given path.
    ///
    /// Use `":memory:"` for an in-memory database (useful for tests).
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the path is invalid.
    #[instrument(skip(db_path), fields(db_path = %db_path))]
    pub fn new(db_path: String) -> Result<Self, DbError> {
        info!(path = %db_path, "Creating GameRepository");
        Ok(Self { db_path })
    }

    /// Establishes a database connection.
    #[instrument(skip(self))]
    fn connection(&self) -> Result<SqliteConnection, DbError> {
        debug!(path = %self.db_path, "Establishing connection");
        SqliteConnection::establish(&self.db_path).map_err(|e| {
            DbError::new(
                DbErrorKind::Connection,
                format!("Failed to connect to '{}': {}", self.db_path, e),
            )
        })
    }

    /// Applies any pending embedded migrations.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the connection fails or a migration cannot be
    /// applied.
    #[instrument(skip(self))]
    pub fn run_migrations(&self) -> Result<(), DbError> {
        debug!("Running pending migrations");
        let mut conn = self.connection()?;

        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| DbError::new(DbErrorKind::Query, format!("Migration error: {}", e)))?;

        info!(count = applied.len(), "Migrations applied");
        Ok(())
    }

    /// Creates a new game room.
    ///
    /// The storage assigns `id`, the initial turn, the unfinished flag and
    /// the creation timestamp; the full stored row is returned.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] with [`DbErrorKind::Constraint`] if the name is
    /// already taken, or another kind for any other database failure.
    #[instrument(skip(self, new_game), fields(name = %new_game.name(), host_id = new_game.host_id(), guest_id = new_game.guest_id()))]
    pub fn create(&self, new_game: NewGame) -> Result<Game, DbError> {
        debug!("Creating game room");
        let mut conn = self.connection()?;

        let game = diesel::insert_into(schema::game::table)
            .values(&new_game)
            .returning(Game::as_returning())
            .get_result(&mut conn)?;

        info!(game_id = game.id(), name = %game.name(), "Game room created");
        Ok(game)
    }

    /// Fetches a game by id.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] with [`DbErrorKind::NotFound`] if no row matches.
    #[instrument(skip(self))]
    pub fn find_by_id(&self, game_id: i32) -> Result<Game, DbError> {
        debug!(game_id, "Looking up game by id");
        let mut conn = self.connection()?;

        let game = schema::game::table
            .find(game_id)
            .first::<Game>(&mut conn)
            .optional()?
            .ok_or_else(|| DbError::not_found(format!("No game with id {}", game_id)))?;

        debug!(game_id = game.id(), name = %game.name(), "Game found");
        Ok(game)
    }

    /// Sets the finished flag on a game.
    ///
    /// Returns the number of rows affected; 0 for a missing id is a normal
    /// outcome, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn set_finished(&self, game_id: i32, finished: bool) -> Result<usize, DbError> {
        debug!(game_id, finished, "Updating finished flag");
        let mut conn = self.connection()?;

        let affected = diesel::update(schema::game::table.find(game_id))
            .set(schema::game::is_finished.eq(finished))
            .execute(&mut conn)?;

        info!(game_id, finished, affected, "Finished flag updated");
        Ok(affected)
    }

    /// Flips the stored turn between WHITE and BLACK.
    ///
    /// The flip is a single UPDATE whose CASE expression is evaluated by the
    /// storage engine, so there is no read-then-write race. Returns the
    /// number of rows affected.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn toggle_turn(&self, game_id: i32) -> Result<usize, DbError> {
        debug!(game_id, "Toggling turn");
        let mut conn = self.connection()?;

        let affected = diesel::update(schema::game::table.find(game_id))
            .set(schema::game::turn.eq(sql::<Text>(
                "CASE WHEN turn = 'BLACK' THEN 'WHITE' ELSE 'BLACK' END",
            )))
            .execute(&mut conn)?;

        info!(game_id, affected, "Turn toggled");
        Ok(affected)
    }

    /// Gets the side to move for a game.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] with [`DbErrorKind::NotFound`] if no row matches,
    /// or another kind if the stored value is not a valid turn.
    #[instrument(skip(self))]
    pub fn get_turn(&self, game_id: i32) -> Result<Turn, DbError> {
        debug!(game_id, "Reading turn");
        let mut conn = self.connection()?;

        let turn = schema::game::table
            .find(game_id)
            .select(schema::game::turn)
            .first::<String>(&mut conn)
            .optional()?
            .ok_or_else(|| DbError::not_found(format!("No game with id {}", game_id)))?;

        Turn::from_db_string(&turn)
    }

    /// Lists all unfinished rooms as `(name, id)` summaries.
    ///
    /// The result is a snapshot at call time, in storage-native order.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn list_open_rooms(&self) -> Result<Vec<RoomSummary>, DbError> {
        debug!("Listing open rooms");
        let mut conn = self.connection()?;

        let rooms = schema::game::table
            .filter(schema::game::is_finished.eq(false))
            .select((schema::game::name, schema::game::id))
            .load::<RoomSummary>(&mut conn)?;

        info!(count = rooms.len(), "Open rooms loaded");
        Ok(rooms)
    }

    /// Counts all game rows, finished or not.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn count_all(&self) -> Result<GameCount, DbError> {
        debug!("Counting games");
        let mut conn = self.connection()?;

        let total = schema::game::table.count().get_result::<i64>(&mut conn)?;

        debug!(total, "Games counted");
        Ok(GameCount::new(total))
    }

    /// Deletes a game by id.
    ///
    /// Returns the number of rows affected; 0 for a missing id is a normal
    /// outcome, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn delete_by_id(&self, game_id: i32) -> Result<usize, DbError> {
        debug!(game_id, "Deleting game");
        let mut conn = self.connection()?;

        let affected = diesel::delete(schema::game::table.find(game_id)).execute(&mut conn)?;

        info!(game_id, affected, "Game deleted");
        Ok(affected)
    }

    /// Checks whether a room with the given name exists.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn exists_by_name(&self, room_name: &str) -> Result<bool, DbError> {
        debug!(room_name, "Checking name existence");
        let mut conn = self.connection()?;

        let found = diesel::select(exists(
            schema::game::table.filter(schema::game::name.eq(room_name)),
        ))
        .get_result::<bool>(&mut conn)?;

        debug!(room_name, found, "Name existence checked");
        Ok(found)
    }
}
