//! Poker entities and the per-bot view of the hand in progress.
//!
//! This module provides:
//! - Cards, players and the actions a server can offer
//! - The notifications a server broadcasts during play
//! - Pure card helpers such as pair detection
//! - The play-state snapshot rebuilt from those notifications

pub mod constants;
pub mod entities;
pub mod events;
pub mod functional;
pub mod state;

pub use events::GameEvent;
pub use state::CurrentPlayState;
