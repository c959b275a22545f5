use ayumu_core::{Level, TileMark, TileRect};

use crate::Phase;

/// Read-only view of a single tile for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileView {
    /// Square on the canvas.
    pub rect: TileRect,
    /// Number to draw, `None` for fillers and face-down tiles.
    pub number: Option<u8>,
    /// Display tone.
    pub mark: TileMark,
    /// Whether the tile is face-up.
    pub revealed: bool,
}

/// Read-only view of the whole game for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Current round state.
    pub phase: Phase,
    /// Current level.
    pub level: Level,
    /// Whole seconds left to memorize; `Some` only in [`Phase::Memorize`].
    pub remaining_memorize_secs: Option<u64>,
    /// Tiles in grid order.
    pub tiles: Vec<TileView>,
}
