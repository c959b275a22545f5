//! The tile grid for one level.

use crate::{GridShape, Point, Tile};

/// An ordered, row-major collection of tiles.
///
/// The numbered tiles of a grid always carry the values `1..=n` exactly once,
/// where `n` is [`GridShape::numbered_count`]; every other tile is a filler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    shape: GridShape,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Creates a grid from tiles in row-major order.
    ///
    /// # Panics
    ///
    /// Panics if the tile count does not match `shape`, or if the numbered
    /// tiles do not hold each value `1..=shape.numbered_count()` exactly once.
    #[must_use]
    pub fn new(shape: GridShape, tiles: Vec<Tile>) -> Self {
        assert_eq!(
            tiles.len(),
            shape.cell_count(),
            "tile count does not match grid shape {shape}"
        );
        let mut values: Vec<u8> = tiles.iter().filter_map(Tile::value).collect();
        values.sort_unstable();
        assert!(
            values.iter().copied().eq(1..=shape.numbered_count()),
            "grid values must be 1..={} without gaps, found {values:?}",
            shape.numbered_count()
        );
        Self { shape, tiles }
    }

    /// Returns the grid shape.
    #[must_use]
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// Returns the tiles in row-major order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Returns the tile at `index`.
    #[must_use]
    pub fn tile(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// Returns the tile at `index` for mutation.
    pub fn tile_mut(&mut self, index: usize) -> Option<&mut Tile> {
        self.tiles.get_mut(index)
    }

    /// Returns the index of the first clickable tile containing `point`.
    ///
    /// Fillers and already-solved tiles are skipped, as are points outside
    /// every tile.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<usize> {
        self.tiles
            .iter()
            .position(|tile| tile.is_clickable() && tile.rect().contains(point))
    }

    /// Turns every tile face-up.
    pub fn reveal_all(&mut self) {
        self.tiles.iter_mut().for_each(Tile::reveal);
    }

    /// Turns every tile face-down.
    pub fn hide_all(&mut self) {
        self.tiles.iter_mut().for_each(Tile::hide);
    }

    /// Returns `true` once every numbered tile has been solved.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.tiles
            .iter()
            .all(|tile| tile.is_filler() || tile.is_solved())
    }

    /// Returns the number of numbered tiles.
    #[must_use]
    pub fn numbered_count(&self) -> usize {
        self.tiles.iter().filter(|tile| !tile.is_filler()).count()
    }
}
