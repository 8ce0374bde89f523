use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::constants;

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Suit {
    Club,
    Diamond,
    Heart,
    Spade,
}

impl Suit {
    /// Stable one-letter name. Only used to give cards of equal value a
    /// total order; it carries no poker meaning.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Club => "c",
            Self::Diamond => "d",
            Self::Heart => "h",
            Self::Spade => "s",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::Club => "♣",
            Self::Diamond => "♦",
            Self::Heart => "♥",
            Self::Spade => "♠",
        };
        write!(f, "{repr}")
    }
}

/// Placeholder for card values.
pub type Value = u8;

/// A card is a tuple of a uInt8 value (deuce=2u8 ... ace=14u8)
/// and a suit.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Card(pub Value, pub Suit);

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let value = match self.0 {
            14 => "A",
            13 => "K",
            12 => "Q",
            11 => "J",
            v => &v.to_string(),
        };
        let repr = format!("{value}/{}", self.1);
        write!(f, "{repr:>4}")
    }
}

/// Type alias for whole chips. All bets and player stacks are represented
/// as whole chips.
pub type Usd = u64;

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Username(String);

impl Username {
    pub fn new(s: &str) -> Self {
        let username = s
            .trim()
            .chars()
            .take(constants::MAX_NAME_LENGTH)
            .map(|c| if c.is_ascii_whitespace() { '_' } else { c })
            .collect();
        Self(username)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<'de> Deserialize<'de> for Username {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::new(&s))
    }
}

impl From<String> for Username {
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}

impl From<&str> for Username {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A player seated at the table, as announced by the server when a hand
/// starts. Only meaningful for the hand it was announced with.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct GamePlayer {
    pub name: Username,
    pub chip_count: Usd,
}

impl GamePlayer {
    pub fn new(name: &str, chip_count: Usd) -> Self {
        Self {
            name: Username::new(name),
            chip_count,
        }
    }
}

impl fmt::Display for GamePlayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (${})", self.name, self.chip_count)
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum ActionType {
    Fold,
    Check,
    Call,
    Raise,
    AllIn,
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::Fold => "fold",
            Self::Check => "check",
            Self::Call => "call",
            Self::Raise => "raise",
            Self::AllIn => "all-in",
        };
        write!(f, "{repr}")
    }
}

/// One legal move offered by the server. `amount` is what the move
/// commits to the pot and is zero for folds and checks.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Action {
    pub action_type: ActionType,
    pub amount: Usd,
}

impl Action {
    pub fn new(action_type: ActionType, amount: Usd) -> Self {
        Self {
            action_type,
            amount,
        }
    }

    pub fn fold() -> Self {
        Self::new(ActionType::Fold, 0)
    }

    pub fn check() -> Self {
        Self::new(ActionType::Check, 0)
    }

    pub fn call(amount: Usd) -> Self {
        Self::new(ActionType::Call, amount)
    }

    pub fn raise(amount: Usd) -> Self {
        Self::new(ActionType::Raise, amount)
    }

    pub fn all_in(amount: Usd) -> Self {
        Self::new(ActionType::AllIn, amount)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let amount = self.amount;
        let repr = match self.action_type {
            ActionType::Fold => "folds".to_string(),
            ActionType::Check => "checks".to_string(),
            ActionType::Call => format!("calls ${amount}"),
            ActionType::Raise => format!("raises ${amount}"),
            ActionType::AllIn => format!("all-ins ${amount}"),
        };
        write!(f, "{repr}")
    }
}

/// The server's prompt for a decision. Answered exactly once, quoting
/// `request_id`.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ActionRequest {
    pub request_id: u64,
    pub possible_actions: Vec<Action>,
}

impl fmt::Display for ActionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let num_options = self.possible_actions.len();
        let repr = self
            .possible_actions
            .iter()
            .enumerate()
            .map(|(i, action)| {
                let repr = action.action_type.to_string();
                match i {
                    0 if num_options == 1 => repr,
                    0 if num_options == 2 => format!("{repr} "),
                    0 if num_options >= 3 => format!("{repr}, "),
                    i if i == num_options - 1 && num_options != 1 => format!("or {repr}"),
                    _ => format!("{repr}, "),
                }
            })
            .collect::<String>();
        write!(f, "{repr}")
    }
}

/// Betting rounds of a hand, as announced by the table.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum PlayRound {
    #[default]
    PreFlop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl fmt::Display for PlayRound {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::PreFlop => "pre-flop",
            Self::Flop => "flop",
            Self::Turn => "turn",
            Self::River => "river",
            Self::Showdown => "showdown",
        };
        write!(f, "{repr}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_display() {
        assert_eq!(Card(14, Suit::Spade).to_string(), " A/♠");
        assert_eq!(Card(10, Suit::Heart).to_string(), "10/♥");
        assert_eq!(Card(2, Suit::Club).to_string(), " 2/♣");
    }

    #[test]
    fn test_suit_short_names_are_distinct() {
        let suits = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];
        let names: Vec<_> = suits.iter().map(Suit::short_name).collect();
        assert_eq!(names, vec!["c", "d", "h", "s"]);
    }

    #[test]
    fn test_username_replaces_whitespace() {
        let username = Username::new("  pair hunter ");
        assert_eq!(username.as_str(), "pair_hunter");
    }

    #[test]
    fn test_username_is_truncated() {
        let long = "x".repeat(constants::MAX_NAME_LENGTH * 2);
        assert_eq!(Username::new(&long).as_str().len(), constants::MAX_NAME_LENGTH);
    }

    #[test]
    fn test_username_blank_is_empty() {
        assert!(Username::new("   ").is_empty());
    }

    #[test]
    fn test_action_display() {
        assert_eq!(Action::fold().to_string(), "folds");
        assert_eq!(Action::call(20).to_string(), "calls $20");
        assert_eq!(Action::raise(40).to_string(), "raises $40");
    }

    #[test]
    fn test_action_request_display() {
        let request = ActionRequest {
            request_id: 1,
            possible_actions: vec![Action::fold(), Action::call(10), Action::raise(20)],
        };
        assert_eq!(request.to_string(), "fold, call, or raise");

        let request = ActionRequest {
            request_id: 2,
            possible_actions: vec![Action::fold(), Action::check()],
        };
        assert_eq!(request.to_string(), "fold or check");
    }
}
