//! Shared library module for the Ayumu app crate.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub use self::app::AyumuApp;

pub(crate) mod action;
pub(crate) mod action_handler;
pub mod app;
pub mod config;
pub mod ui;
pub mod version;
pub(crate) mod view_model_builder;
