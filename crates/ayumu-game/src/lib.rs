//! Game session management for the Ayumu memory game.
//!
//! This crate owns the round state machine:
//!
//! ```text
//! Setup -> Memorize -> Playing -> LevelUp  -> (restart) -> Setup
//!                              \-> GameOver -> (restart) -> Setup
//! ```
//!
//! [`Game`] is driven from the outside by three inputs: the passage of time
//! ([`Game::tick`]), pointer clicks ([`Game::handle_click`]) and the restart key
//! ([`Game::handle_restart`]). Rendering reads a [`GameSnapshot`].
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//!
//! use ayumu_core::{BoardLayout, Level};
//! use ayumu_game::{Game, Phase};
//! use ayumu_generator::{GridGenerator, SeededShuffler};
//!
//! let t0 = Instant::now();
//! let generator = GridGenerator::new(BoardLayout::default());
//! let mut game = Game::new(generator, SeededShuffler::new(1), Level::FIRST, t0);
//! assert_eq!(game.phase(), Phase::Memorize);
//!
//! game.tick(t0 + Duration::from_secs(2));
//! assert_eq!(game.phase(), Phase::Playing);
//! ```

pub use self::{
    game::Game,
    snapshot::{GameSnapshot, TileView},
    timer::MemorizeTimer,
};

mod game;
mod snapshot;
mod timer;

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum Phase {
    /// The grid is being rebuilt. Transient; immediately followed by `Memorize`.
    #[display("setup")]
    Setup,
    /// Every tile is face-up while the countdown runs.
    #[display("memorize")]
    Memorize,
    /// Tiles are face-down and clicks are resolved.
    #[display("playing")]
    Playing,
    /// The level was cleared; restart starts the next one.
    #[display("level up")]
    LevelUp,
    /// A wrong tile was picked, or the last level was cleared.
    #[display("game over")]
    GameOver,
}

impl Phase {
    /// Returns `true` in the phases that accept the restart input.
    #[must_use]
    pub fn accepts_restart(self) -> bool {
        matches!(self, Self::LevelUp | Self::GameOver)
    }
}

/// Result of a pointer click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum ClickOutcome {
    /// No clickable tile was hit, or the game is not in [`Phase::Playing`].
    Ignored,
    /// The next number in the sequence was picked.
    Correct {
        /// The number that was picked.
        number: u8,
    },
    /// The last numbered tile of a level before the final one was picked.
    LevelCleared,
    /// The last numbered tile of the final level was picked.
    AllLevelsCleared,
    /// A numbered tile was picked out of order.
    Mistake {
        /// The number the player should have picked.
        expected: u8,
        /// The number on the picked tile.
        found: u8,
    },
}
