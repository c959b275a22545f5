//! Core data structures for the Ayumu memory game.
//!
//! This crate provides the fixed level table, the board geometry, and the tile
//! grid that the generator fills and the game state machine mutates.
//!
//! # Overview
//!
//! - [`level`]: The nine predefined levels, their grid shapes and memorize durations.
//! - [`layout`]: Canvas geometry ([`Point`], [`TileRect`], [`BoardLayout`]).
//! - [`tile`]: A single grid cell, numbered or filler.
//! - [`grid`]: The ordered tile collection for one level.
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//!
//! use ayumu_core::{GridShape, Level};
//!
//! let level = Level::from_number(5);
//! assert_eq!(level.shape(), GridShape::new(3, 3));
//! assert_eq!(level.memorize_duration(), Duration::from_secs(5));
//! assert_eq!(level.next(), Some(Level::from_number(6)));
//! ```

pub mod grid;
pub mod layout;
pub mod level;
pub mod tile;

pub use self::{
    grid::Grid,
    layout::{BoardLayout, Point, TileRect},
    level::{GridShape, Level, LevelError, MAX_NUMBERED_TILES},
    tile::{Tile, TileMark},
};
