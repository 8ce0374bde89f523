use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

use super::super::game::{
    GameEvent,
    entities::{Action, ActionRequest, Username},
};

/// Errors due to the poker client's interaction with the poker server
/// and not from a particular decision.
#[derive(Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum ClientError {
    #[error("name already taken")]
    NameAlreadyTaken,
    #[error("no room available")]
    NoRoomAvailable,
    #[error("not registered for play")]
    NotRegistered,
}

/// Play areas a bot can register for.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum Room {
    #[default]
    Training,
    Freeplay,
    Tournament,
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::Training => "training",
            Self::Freeplay => "freeplay",
            Self::Tournament => "tournament",
        };
        write!(f, "{repr}")
    }
}

#[derive(Debug, Eq, Error, PartialEq)]
#[error("unknown room {0:?} (expected training, freeplay, or tournament)")]
pub struct ParseRoomError(String);

impl FromStr for Room {
    type Err = ParseRoomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "training" => Ok(Self::Training),
            "freeplay" => Ok(Self::Freeplay),
            "tournament" => Ok(Self::Tournament),
            _ => Err(ParseRoomError(s.to_string())),
        }
    }
}

/// A message from a bot to the poker server.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ClientMessage {
    /// Ask for a seat in a room under the given name.
    RegisterForPlay { name: Username, room: Room },
    /// Answer to a [`ServerMessage::ActionRequest`].
    ActionResponse { request_id: u64, action: Action },
}

impl fmt::Display for ClientMessage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::RegisterForPlay { name, room } => {
                write!(f, "{name} registers for the {room} room")
            }
            Self::ActionResponse { request_id, action } => {
                write!(f, "{action} (request {request_id})")
            }
        }
    }
}

/// A message from the poker server to a bot.
#[derive(Debug, Deserialize, Serialize)]
pub enum ServerMessage {
    /// Registration went through; notifications will follow.
    Ack,
    /// The client did something the server couldn't process.
    ClientError(ClientError),
    /// A notification about the table.
    GameEvent(GameEvent),
    /// It's the bot's turn; exactly one of the actions must be sent back.
    ActionRequest(ActionRequest),
}

impl fmt::Display for ServerMessage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match &self {
            Self::Ack => "ack".to_string(),
            Self::ClientError(error) => error.to_string(),
            Self::GameEvent(event) => event.to_string(),
            Self::ActionRequest(request) => format!("action request: {request}"),
        };
        write!(f, "{repr}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_display() {
        assert_eq!(ClientError::NameAlreadyTaken.to_string(), "name already taken");
        assert_eq!(ClientError::NoRoomAvailable.to_string(), "no room available");
        assert_eq!(ClientError::NotRegistered.to_string(), "not registered for play");
    }

    #[test]
    fn test_room_from_str() {
        assert_eq!("training".parse(), Ok(Room::Training));
        assert_eq!("FreePlay".parse(), Ok(Room::Freeplay));
        assert_eq!(" tournament ".parse(), Ok(Room::Tournament));
        assert!("casino".parse::<Room>().is_err());
    }

    #[test]
    fn test_room_display_parses_back() {
        for room in [Room::Training, Room::Freeplay, Room::Tournament] {
            assert_eq!(room.to_string().parse(), Ok(room));
        }
    }

    #[test]
    fn test_parse_room_error_display() {
        let err = "casino".parse::<Room>().unwrap_err();
        assert!(err.to_string().contains("\"casino\""));
    }

    #[test]
    fn test_client_message_display() {
        let msg = ClientMessage::RegisterForPlay {
            name: Username::new("pairbot"),
            room: Room::Training,
        };
        assert_eq!(msg.to_string(), "pairbot registers for the training room");

        let msg = ClientMessage::ActionResponse {
            request_id: 3,
            action: Action::call(20),
        };
        assert_eq!(msg.to_string(), "calls $20 (request 3)");
    }

    #[test]
    fn test_server_message_display() {
        let msg = ServerMessage::ActionRequest(ActionRequest {
            request_id: 1,
            possible_actions: vec![Action::fold(), Action::check()],
        });
        assert_eq!(msg.to_string(), "action request: fold or check");
        assert_eq!(ServerMessage::Ack.to_string(), "ack");
    }
}
