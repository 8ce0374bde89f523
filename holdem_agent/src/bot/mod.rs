//! Bot module providing the heuristic bot and the contract it plays by.
//!
//! This module implements:
//! - Player: one handler per server notification plus the decision prompt
//! - DecisionMaker: a fixed rule table picking one legal action
//! - PairBot: a bot wiring the rule table into the handlers
//!
//! ## Rule table
//!
//! The bot becomes suspicious once an opponent has put four big blinds or
//! more into the pot. It then checks if it can and folds otherwise, unless
//! it holds a pair. With a pair it calls, or raises when calling isn't
//! offered. On a quiet table without a pair it checks, calls or folds, in
//! that order of preference.
//!
//! ## Example
//!
//! ```
//! use holdem_agent::bot::{BotConfig, PairBot, Player};
//! use holdem_agent::game::{
//!     CurrentPlayState,
//!     entities::{Action, ActionRequest, ActionType, Username},
//! };
//!
//! let mut bot = PairBot::new(BotConfig {
//!     name: Some("pairbot".to_string()),
//!     ..Default::default()
//! });
//! let state = CurrentPlayState::new(Username::new("pairbot"));
//! let request = ActionRequest {
//!     request_id: 1,
//!     possible_actions: vec![Action::fold(), Action::check()],
//! };
//! let action = bot.action_required(&request, &state).unwrap();
//! assert_eq!(action.action_type, ActionType::Check);
//! ```

pub mod decision;
pub mod models;
pub mod player;

pub use decision::{DecisionConfig, DecisionMaker, Signals};
pub use models::{BotConfig, PairBot};
pub use player::{Player, PlayerError};
