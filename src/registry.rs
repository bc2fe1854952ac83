//! Registry mapping game handles to live games.
//!
//! The boundary consumed by a surrounding service layer. There is no hidden
//! process-wide state: callers own a [`GameRegistry`] value and address games
//! through [`GameId`] handles. Textual coordinates are decoded here; below
//! this module everything works on typed [`Square`]s.
//!
//! Access is serialized per registry with a [`parking_lot::Mutex`]; the
//! engine itself performs no locking and assumes exclusive-owner mutation.

use std::collections::HashMap;
use std::fmt;

use log::{debug, info};
use parking_lot::Mutex;
use rand::Rng;

use crate::board::{MoveError, NotationError, PieceKind, Square};
use crate::game::{Clock, Game, MoveOutcome};

/// Opaque handle to a game held by a [`GameRegistry`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct GameId(u64);

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// Error type for registry operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No game registered under this handle
    UnknownGame { id: GameId },
    /// Malformed square notation in the request
    Notation(NotationError),
    /// The move was rejected by the rules engine
    Move(MoveError),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::UnknownGame { id } => write!(f, "No game with id {id}"),
            RegistryError::Notation(err) => write!(f, "{err}"),
            RegistryError::Move(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for RegistryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RegistryError::UnknownGame { .. } => None,
            RegistryError::Notation(err) => Some(err),
            RegistryError::Move(err) => Some(err),
        }
    }
}

impl From<NotationError> for RegistryError {
    fn from(err: NotationError) -> Self {
        RegistryError::Notation(err)
    }
}

impl From<MoveError> for RegistryError {
    fn from(err: MoveError) -> Self {
        RegistryError::Move(err)
    }
}

/// Owner of all active games.
#[derive(Debug, Default)]
pub struct GameRegistry {
    games: Mutex<HashMap<GameId, Game>>,
}

impl GameRegistry {
    #[must_use]
    pub fn new() -> Self {
        GameRegistry {
            games: Mutex::new(HashMap::new()),
        }
    }

    /// Create a game in the standard starting position and return its handle
    pub fn create(&self, clock: Clock) -> GameId {
        let mut games = self.games.lock();
        let mut rng = rand::thread_rng();
        let id = loop {
            let candidate = GameId(rng.gen());
            if !games.contains_key(&candidate) {
                break candidate;
            }
        };
        let _ = games.insert(id, Game::new(clock));
        info!("created game {id}");
        id
    }

    /// Legal destinations for the piece on `from` (algebraic notation)
    pub fn possible_moves(&self, id: GameId, from: &str) -> Result<Vec<Square>, RegistryError> {
        let from: Square = from.parse()?;
        let games = self.games.lock();
        let game = games.get(&id).ok_or(RegistryError::UnknownGame { id })?;
        Ok(game.possible_moves(from)?)
    }

    /// Apply a move given in algebraic notation.
    ///
    /// `promotion` is consulted only when the move promotes; `None` promotes
    /// to a queen.
    pub fn apply_move(
        &self,
        id: GameId,
        from: &str,
        to: &str,
        promotion: Option<PieceKind>,
    ) -> Result<MoveOutcome, RegistryError> {
        let from: Square = from.parse()?;
        let to: Square = to.parse()?;
        let mut games = self.games.lock();
        let game = games.get_mut(&id).ok_or(RegistryError::UnknownGame { id })?;
        let outcome = game.try_move_with_promotion(from, to, promotion)?;
        debug!("game {id}: {} ({:?})", outcome.details, outcome.result);
        Ok(outcome)
    }

    /// Character grid of the position for display
    pub fn render(&self, id: GameId) -> Result<[[char; 8]; 8], RegistryError> {
        let games = self.games.lock();
        let game = games.get(&id).ok_or(RegistryError::UnknownGame { id })?;
        Ok(game.board().render())
    }

    /// Run a closure against a game, e.g. to read the turn or adjust clocks
    pub fn with_game<T>(
        &self,
        id: GameId,
        f: impl FnOnce(&mut Game) -> T,
    ) -> Result<T, RegistryError> {
        let mut games = self.games.lock();
        let game = games.get_mut(&id).ok_or(RegistryError::UnknownGame { id })?;
        Ok(f(game))
    }

    /// Drop a finished or abandoned game
    pub fn remove(&self, id: GameId) -> Result<(), RegistryError> {
        let removed = self.games.lock().remove(&id);
        match removed {
            Some(_) => {
                info!("removed game {id}");
                Ok(())
            }
            None => Err(RegistryError::UnknownGame { id }),
        }
    }

    /// Number of active games
    #[must_use]
    pub fn len(&self) -> usize {
        self.games.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.lock().is_empty()
    }
}
