//! # Holdem Agent
//!
//! A Texas Hold'em bot that plays a fixed rule table against a poker server.
//!
//! The bot watches the notifications a server broadcasts while a table is
//! running and, when it's asked to act, picks one of the offered actions.
//! Everything it knows about the hand comes from a play-state snapshot the
//! client rebuilds from those notifications.
//!
//! ## Core Modules
//!
//! - [`game`]: Cards, actions, notifications and the play-state snapshot
//! - [`bot`]: The player contract, the decision table and the bot itself
//! - [`net`]: Networking components (client and message protocol)
//!
//! ## Example
//!
//! ```no_run
//! use holdem_agent::{Client, bot::{BotConfig, PairBot}, messages::Room};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut bot = PairBot::new(BotConfig {
//!     name: Some("pairbot".to_string()),
//!     ..Default::default()
//! });
//! let addr = "127.0.0.1:4711".parse()?;
//! let mut session = Client::connect(&addr)?.register_for_play(&mut bot, Room::Training)?;
//! session.play(&mut bot)?;
//! # Ok(())
//! # }
//! ```

/// Bots and the contract they implement.
pub mod bot;

/// Poker entities, notifications and the play-state snapshot.
pub mod game;
pub use game::{CurrentPlayState, GameEvent, constants, entities, functional};

/// Networking components for client-server communication.
pub mod net;
pub use net::{
    client::{Client, Session, SessionEnd},
    messages, utils,
};
