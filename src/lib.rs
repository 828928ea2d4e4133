//! swipedeck - a swipe-card deck engine with a terminal front end
//!
//! This library exposes modules for use in integration tests and embedding
//! hosts. The deck core ([`deck`], [`gesture`]) is synchronous and takes
//! explicit instants; [`app`] drives it from an async event loop.

pub mod adapters;
pub mod app;
pub mod config;
pub mod deck;
pub mod error;
pub mod gesture;
pub mod logging;
pub mod models;
pub mod terminal;
pub mod traits;
pub mod ui;
