//! Shuffled grid construction for the Ayumu memory game.
//!
//! [`GridGenerator`] turns a [`Level`] into a freshly laid-out [`Grid`]: the
//! sequence values `1..=n` plus filler cells, permuted by a [`TileShuffler`] and
//! placed row-major into the centered board of a [`BoardLayout`].
//!
//! # Example
//!
//! ```
//! use ayumu_core::{BoardLayout, Level};
//! use ayumu_generator::{GridGenerator, SeededShuffler};
//!
//! let generator = GridGenerator::new(BoardLayout::default());
//! let mut shuffler = SeededShuffler::new(42);
//! let grid = generator.generate(Level::LAST, &mut shuffler);
//!
//! assert_eq!(grid.tiles().len(), 25);
//! assert_eq!(grid.numbered_count(), 9);
//! ```

use ayumu_core::{BoardLayout, Grid, GridShape, Level, Tile};

pub use self::shuffler::{SeededShuffler, TileShuffler};

mod shuffler;

/// Builds grids for levels on a fixed board layout.
#[derive(Debug, Clone, Default)]
pub struct GridGenerator {
    layout: BoardLayout,
}

impl GridGenerator {
    /// Creates a generator for `layout`.
    #[must_use]
    pub fn new(layout: BoardLayout) -> Self {
        Self { layout }
    }

    /// Returns the board layout tiles are placed on.
    #[must_use]
    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    /// Builds a shuffled, face-up grid for `level`.
    pub fn generate<S>(&self, level: Level, shuffler: &mut S) -> Grid
    where
        S: TileShuffler + ?Sized,
    {
        let shape = level.shape();
        let mut values = tile_values(shape);
        shuffler.shuffle(&mut values);

        let tiles = values
            .into_iter()
            .zip(self.layout.tile_rects(shape))
            .map(|(value, rect)| Tile::new(value, rect))
            .collect();
        log::debug!(
            "generated {shape} grid for level {level} ({} numbered, {} filler)",
            shape.numbered_count(),
            shape.filler_count()
        );
        Grid::new(shape, tiles)
    }
}

/// Returns the unshuffled cell values for `shape`.
///
/// The list holds `1..=shape.numbered_count()` in ascending order followed by
/// one `None` per filler cell.
///
/// # Example
///
/// ```
/// use ayumu_core::GridShape;
/// use ayumu_generator::tile_values;
///
/// let values = tile_values(GridShape::new(2, 5));
/// assert_eq!(values.len(), 10);
/// assert_eq!(values[8], Some(9));
/// assert_eq!(values[9], None);
/// ```
#[must_use]
pub fn tile_values(shape: GridShape) -> Vec<Option<u8>> {
    (1..=shape.numbered_count())
        .map(Some)
        .chain(std::iter::repeat_n(None, shape.filler_count()))
        .collect()
}
