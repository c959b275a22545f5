//! A single grid cell.

use crate::TileRect;

/// Display tone of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum TileMark {
    /// A numbered tile that has not been clicked.
    Plain,
    /// A filler tile.
    Filler,
    /// A numbered tile clicked in the right order.
    Correct,
    /// The numbered tile whose click ended the round.
    Wrong,
}

/// One cell of the grid.
///
/// A tile either holds a sequence number or is a filler. Its geometry is fixed
/// at creation; only the reveal, solved and mark flags change over its life.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    value: Option<u8>,
    rect: TileRect,
    revealed: bool,
    solved: bool,
    mark: TileMark,
}

impl Tile {
    /// Creates a face-up tile.
    ///
    /// `value` of `None` creates a filler.
    #[must_use]
    pub fn new(value: Option<u8>, rect: TileRect) -> Self {
        let mark = if value.is_some() {
            TileMark::Plain
        } else {
            TileMark::Filler
        };
        Self {
            value,
            rect,
            revealed: true,
            solved: false,
            mark,
        }
    }

    /// Returns the sequence number, or `None` for fillers.
    #[must_use]
    pub fn value(&self) -> Option<u8> {
        self.value
    }

    /// Returns the tile's square on the canvas.
    #[must_use]
    pub fn rect(&self) -> TileRect {
        self.rect
    }

    /// Returns `true` if the tile holds no number.
    #[must_use]
    pub fn is_filler(&self) -> bool {
        self.value.is_none()
    }

    /// Returns `true` if the tile is face-up.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Returns `true` if the tile was already clicked in order.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Returns the display tone.
    #[must_use]
    pub fn mark(&self) -> TileMark {
        self.mark
    }

    /// Returns `true` if the tile can still receive a click.
    #[must_use]
    pub fn is_clickable(&self) -> bool {
        !self.is_filler() && !self.solved
    }

    /// Returns the number to draw, if the tile is face-up and numbered.
    #[must_use]
    pub fn displayed_number(&self) -> Option<u8> {
        self.value.filter(|_| self.revealed)
    }

    /// Turns the tile face-up.
    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    /// Turns the tile face-down.
    pub fn hide(&mut self) {
        self.revealed = false;
    }

    /// Marks a numbered tile as correctly clicked.
    pub fn mark_solved(&mut self) {
        debug_assert!(!self.is_filler(), "filler tiles cannot be solved");
        self.solved = true;
        self.mark = TileMark::Correct;
    }

    /// Flags a numbered tile as the wrong pick.
    pub fn mark_wrong(&mut self) {
        self.mark = TileMark::Wrong;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tiles_start_face_up() {
        let tile = Tile::new(Some(3), TileRect::new(0, 0, 10));
        assert!(tile.is_revealed());
        assert!(!tile.is_solved());
        assert!(tile.mark().is_plain());
        assert_eq!(tile.displayed_number(), Some(3));
    }

    #[test]
    fn test_filler_is_never_clickable_or_numbered() {
        let mut tile = Tile::new(None, TileRect::new(0, 0, 10));
        assert!(tile.is_filler());
        assert!(!tile.is_clickable());
        assert!(tile.mark().is_filler());
        tile.reveal();
        assert_eq!(tile.displayed_number(), None);
    }

    #[test]
    fn test_hidden_tile_displays_nothing() {
        let mut tile = Tile::new(Some(1), TileRect::new(0, 0, 10));
        tile.hide();
        assert_eq!(tile.displayed_number(), None);
        assert_eq!(tile.value(), Some(1));
    }

    #[test]
    fn test_solved_tile_is_not_clickable() {
        let mut tile = Tile::new(Some(1), TileRect::new(0, 0, 10));
        assert!(tile.is_clickable());
        tile.mark_solved();
        assert!(tile.is_solved());
        assert!(!tile.is_clickable());
        assert!(tile.mark().is_correct());
    }
}
