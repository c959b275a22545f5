//! The fixed level table.

use std::time::Duration;

/// Maximum number of sequence values placed on any grid.
///
/// Grids with more cells than this are padded with filler tiles.
pub const MAX_NUMBERED_TILES: u8 = 9;

/// Grid dimensions of a level, in tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{rows}x{cols}")]
pub struct GridShape {
    rows: u8,
    cols: u8,
}

impl GridShape {
    /// Creates a shape with the given number of rows and columns.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    #[must_use]
    pub const fn new(rows: u8, cols: u8) -> Self {
        assert!(rows > 0 && cols > 0, "grid shape must not be empty");
        Self { rows, cols }
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn rows(self) -> u8 {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn cols(self) -> u8 {
        self.cols
    }

    /// Returns the total number of cells (`rows * cols`).
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Returns how many cells carry a sequence number.
    ///
    /// This is `min(rows * cols, MAX_NUMBERED_TILES)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ayumu_core::GridShape;
    ///
    /// assert_eq!(GridShape::new(2, 3).numbered_count(), 6);
    /// assert_eq!(GridShape::new(5, 5).numbered_count(), 9);
    /// ```
    #[must_use]
    pub const fn numbered_count(self) -> u8 {
        if self.cell_count() < MAX_NUMBERED_TILES as usize {
            self.rows * self.cols
        } else {
            MAX_NUMBERED_TILES
        }
    }

    /// Returns how many cells are fillers.
    #[must_use]
    pub const fn filler_count(self) -> usize {
        self.cell_count() - self.numbered_count() as usize
    }
}

const SHAPES: [GridShape; Level::COUNT] = [
    GridShape::new(1, 2),
    GridShape::new(2, 2),
    GridShape::new(2, 3),
    GridShape::new(2, 4),
    GridShape::new(3, 3),
    GridShape::new(3, 4),
    GridShape::new(4, 4),
    GridShape::new(4, 5),
    GridShape::new(5, 5),
];

/// Error returned when converting an out-of-range number into a [`Level`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum LevelError {
    /// The number is not in `1..=9`.
    #[display("level {number} is out of range (expected 1-9)")]
    OutOfRange {
        /// The rejected level number.
        number: u8,
    },
}

/// A game level in the range 1-9.
///
/// Levels form a closed table: each maps to a fixed [`GridShape`] and a
/// memorize duration. Progression is internal to the game, so constructing a
/// level from an arbitrary number panics on invalid input; use
/// [`Level::try_from`] for numbers coming from outside the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub struct Level(u8);

impl Level {
    /// Number of levels in the table.
    pub const COUNT: usize = 9;

    /// The starting level.
    pub const FIRST: Self = Self(1);

    /// The final level; completing it ends the round.
    pub const LAST: Self = Self(9);

    /// Creates a level from its number.
    ///
    /// # Panics
    ///
    /// Panics if `number` is not in the range 1-9.
    ///
    /// ```should_panic
    /// use ayumu_core::Level;
    ///
    /// let _ = Level::from_number(10);
    /// ```
    #[must_use]
    pub fn from_number(number: u8) -> Self {
        match Self::try_from(number) {
            Ok(level) => level,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns the level number (1-9).
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Returns the grid shape for this level.
    #[must_use]
    pub const fn shape(self) -> GridShape {
        SHAPES[self.0 as usize - 1]
    }

    /// Returns how long the tiles stay face-up before play starts.
    ///
    /// The duration is a step function: 2s for levels 1-2, 3s for 3-4,
    /// 5s for 5-6 and 8s for 7-9.
    #[must_use]
    pub const fn memorize_duration(self) -> Duration {
        let secs = match self.0 {
            1..=2 => 2,
            3..=4 => 3,
            5..=6 => 5,
            _ => 8,
        };
        Duration::from_secs(secs)
    }

    /// Returns the following level, or `None` on the last level.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        if self.is_last() {
            None
        } else {
            Some(Self(self.0 + 1))
        }
    }

    /// Returns `true` for the final level.
    #[must_use]
    pub const fn is_last(self) -> bool {
        self.0 == Self::LAST.0
    }

    /// Iterates over all levels in ascending order.
    pub fn all() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (Self::FIRST.0..=Self::LAST.0).map(Self)
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::FIRST
    }
}

impl TryFrom<u8> for Level {
    type Error = LevelError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        if (Self::FIRST.0..=Self::LAST.0).contains(&number) {
            Ok(Self(number))
        } else {
            Err(LevelError::OutOfRange { number })
        }
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}
