//! Notifications the server broadcasts while a table is running.
//!
//! Each kind of notification has its own payload type so handlers can take
//! exactly what they need. [`GameEvent`] wraps them for the wire.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::entities::{Card, GamePlayer, PlayRound, Usd};

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ServerIsShuttingDownEvent {
    pub message: String,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PlayIsStartedEvent {
    pub table_id: u64,
    pub small_blind: Usd,
    pub big_blind: Usd,
    pub players: Vec<GamePlayer>,
    pub dealer: GamePlayer,
    pub small_blind_player: GamePlayer,
    pub big_blind_player: GamePlayer,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TableChangedStateEvent {
    pub round: PlayRound,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct YouHaveBeenDealtACardEvent {
    pub card: Card,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CommunityHasBeenDealtACardEvent {
    pub card: Card,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PlayerBetBigBlindEvent {
    pub player: GamePlayer,
    pub big_blind: Usd,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PlayerBetSmallBlindEvent {
    pub player: GamePlayer,
    pub small_blind: Usd,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PlayerFoldedEvent {
    pub player: GamePlayer,
    pub invested_in_pot: Usd,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PlayerCalledEvent {
    pub player: GamePlayer,
    pub call_bet: Usd,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PlayerRaisedEvent {
    pub player: GamePlayer,
    pub raise_bet: Usd,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PlayerWentAllInEvent {
    pub player: GamePlayer,
    pub all_in_amount: Usd,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PlayerCheckedEvent {
    pub player: GamePlayer,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct YouWonAmountEvent {
    pub won_amount: Usd,
    pub your_chip_amount: Usd,
}

/// A single player's revealed hand at showdown.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PlayerShowDown {
    pub player: GamePlayer,
    pub cards: Vec<Card>,
    pub won_amount: Usd,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ShowDownEvent {
    pub players_show_down: Vec<PlayerShowDown>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TableIsDoneEvent {
    pub players: Vec<GamePlayer>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PlayerQuitEvent {
    pub player: GamePlayer,
}

/// Every notification that can be delivered to a seated bot.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum GameEvent {
    ServerIsShuttingDown(ServerIsShuttingDownEvent),
    PlayIsStarted(PlayIsStartedEvent),
    TableChangedState(TableChangedStateEvent),
    YouHaveBeenDealtACard(YouHaveBeenDealtACardEvent),
    CommunityHasBeenDealtACard(CommunityHasBeenDealtACardEvent),
    PlayerBetBigBlind(PlayerBetBigBlindEvent),
    PlayerBetSmallBlind(PlayerBetSmallBlindEvent),
    PlayerFolded(PlayerFoldedEvent),
    PlayerCalled(PlayerCalledEvent),
    PlayerRaised(PlayerRaisedEvent),
    PlayerWentAllIn(PlayerWentAllInEvent),
    PlayerChecked(PlayerCheckedEvent),
    YouWonAmount(YouWonAmountEvent),
    ShowDown(ShowDownEvent),
    TableIsDone(TableIsDoneEvent),
    PlayerQuit(PlayerQuitEvent),
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::ServerIsShuttingDown(event) => {
                format!("server is shutting down: {}", event.message)
            }
            Self::PlayIsStarted(event) => format!(
                "play started at table {} with {} players (blinds ${}/${})",
                event.table_id,
                event.players.len(),
                event.small_blind,
                event.big_blind
            ),
            Self::TableChangedState(event) => format!("table moved to the {}", event.round),
            Self::YouHaveBeenDealtACard(event) => format!("dealt {}", event.card),
            Self::CommunityHasBeenDealtACard(event) => {
                format!("community dealt {}", event.card)
            }
            Self::PlayerBetBigBlind(event) => {
                format!("{} posted the big blind ${}", event.player.name, event.big_blind)
            }
            Self::PlayerBetSmallBlind(event) => format!(
                "{} posted the small blind ${}",
                event.player.name, event.small_blind
            ),
            Self::PlayerFolded(event) => format!("{} folded", event.player.name),
            Self::PlayerCalled(event) => {
                format!("{} called ${}", event.player.name, event.call_bet)
            }
            Self::PlayerRaised(event) => {
                format!("{} raised ${}", event.player.name, event.raise_bet)
            }
            Self::PlayerWentAllIn(event) => {
                format!("{} went all-in ${}", event.player.name, event.all_in_amount)
            }
            Self::PlayerChecked(event) => format!("{} checked", event.player.name),
            Self::YouWonAmount(event) => format!(
                "won ${} (now ${})",
                event.won_amount, event.your_chip_amount
            ),
            Self::ShowDown(event) => {
                format!("showdown between {} players", event.players_show_down.len())
            }
            Self::TableIsDone(event) => {
                format!("table done with {} players", event.players.len())
            }
            Self::PlayerQuit(event) => format!("{} quit", event.player.name),
        };
        write!(f, "{repr}")
    }
}
