//! Start-up configuration.

use std::num::ParseIntError;

use ayumu_core::{BoardLayout, Level, LevelError};
use clap::Parser;

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ConfigError {
    #[display("not a level number: {_0}")]
    NotANumber(ParseIntError),
    #[display("{_0}")]
    Level(LevelError),
}

/// Command-line options.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Seed for the tile shuffler. A random seed is used when omitted.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Level to start at (1-9).
    #[arg(long, value_name = "LEVEL", default_value = "1", value_parser = parse_level)]
    pub level: Level,
}

fn parse_level(s: &str) -> Result<Level, ConfigError> {
    let number: u8 = s.trim().parse()?;
    Ok(Level::try_from(number)?)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: Option<u64>,
    pub start_level: Level,
    pub layout: BoardLayout,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            start_level: Level::FIRST,
            layout: BoardLayout::default(),
        }
    }
}

impl From<Args> for AppConfig {
    fn from(args: Args) -> Self {
        let Args { seed, level } = args;
        Self {
            seed,
            start_level: level,
            ..Self::default()
        }
    }
}
