pub(crate) mod board;
pub(crate) mod footer;
pub(crate) mod game_screen;
pub(crate) mod header;
pub(crate) mod input;
pub mod layout;
pub(crate) mod theme;
