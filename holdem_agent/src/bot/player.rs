//! The callback surface a bot exposes to the client.
//!
//! Every notification kind has its own handler. All of them default to
//! doing nothing, so a bot only overrides what it cares about. Handlers
//! run synchronously on the client's thread and must not block.

use thiserror::Error;

use crate::game::{
    entities::{Action, ActionRequest, Username},
    events::{
        CommunityHasBeenDealtACardEvent, GameEvent, PlayIsStartedEvent, PlayerBetBigBlindEvent,
        PlayerBetSmallBlindEvent, PlayerCalledEvent, PlayerCheckedEvent, PlayerFoldedEvent,
        PlayerQuitEvent, PlayerRaisedEvent, PlayerWentAllInEvent, ServerIsShuttingDownEvent,
        ShowDownEvent, TableChangedStateEvent, TableIsDoneEvent, YouHaveBeenDealtACardEvent,
        YouWonAmountEvent,
    },
    state::CurrentPlayState,
};

#[derive(Debug, Eq, Error, PartialEq)]
pub enum PlayerError {
    #[error("did you forget to specify a name for your bot?")]
    MissingName,
}

#[allow(unused_variables)]
pub trait Player {
    /// Name the bot registers with. Only asked for when registering, so a
    /// bot without one fails then rather than when it's built.
    fn name(&self) -> Result<Username, PlayerError> {
        Err(PlayerError::MissingName)
    }

    /// Choose a response to the server's prompt. `None` means no decision
    /// could be made, which the client treats as fatal.
    fn action_required(
        &mut self,
        request: &ActionRequest,
        state: &CurrentPlayState,
    ) -> Option<Action>;

    fn on_server_is_shutting_down(
        &mut self,
        event: &ServerIsShuttingDownEvent,
        state: &CurrentPlayState,
    ) {
    }

    fn on_play_is_started(&mut self, event: &PlayIsStartedEvent, state: &CurrentPlayState) {}

    fn on_table_changed_state(&mut self, event: &TableChangedStateEvent, state: &CurrentPlayState) {
    }

    fn on_you_have_been_dealt_a_card(
        &mut self,
        event: &YouHaveBeenDealtACardEvent,
        state: &CurrentPlayState,
    ) {
    }

    fn on_community_has_been_dealt_a_card(
        &mut self,
        event: &CommunityHasBeenDealtACardEvent,
        state: &CurrentPlayState,
    ) {
    }

    fn on_player_bet_big_blind(&mut self, event: &PlayerBetBigBlindEvent, state: &CurrentPlayState) {
    }

    fn on_player_bet_small_blind(
        &mut self,
        event: &PlayerBetSmallBlindEvent,
        state: &CurrentPlayState,
    ) {
    }

    fn on_player_folded(&mut self, event: &PlayerFoldedEvent, state: &CurrentPlayState) {}

    fn on_player_called(&mut self, event: &PlayerCalledEvent, state: &CurrentPlayState) {}

    fn on_player_raised(&mut self, event: &PlayerRaisedEvent, state: &CurrentPlayState) {}

    fn on_player_went_all_in(&mut self, event: &PlayerWentAllInEvent, state: &CurrentPlayState) {}

    fn on_player_checked(&mut self, event: &PlayerCheckedEvent, state: &CurrentPlayState) {}

    fn on_you_won_amount(&mut self, event: &YouWonAmountEvent, state: &CurrentPlayState) {}

    fn on_show_down(&mut self, event: &ShowDownEvent, state: &CurrentPlayState) {}

    fn on_table_is_done(&mut self, event: &TableIsDoneEvent, state: &CurrentPlayState) {}

    fn on_player_quit(&mut self, event: &PlayerQuitEvent, state: &CurrentPlayState) {}

    fn on_connection_established(&mut self) {}

    /// The session is over. The client returns to its caller right after
    /// this, so there's nothing to shut down here.
    fn on_connection_lost(&mut self) {}
}

impl GameEvent {
    /// Hand the event to the player's handler for its kind.
    pub fn dispatch<P: Player + ?Sized>(&self, player: &mut P, state: &CurrentPlayState) {
        match self {
            Self::ServerIsShuttingDown(event) => player.on_server_is_shutting_down(event, state),
            Self::PlayIsStarted(event) => player.on_play_is_started(event, state),
            Self::TableChangedState(event) => player.on_table_changed_state(event, state),
            Self::YouHaveBeenDealtACard(event) => {
                player.on_you_have_been_dealt_a_card(event, state);
            }
            Self::CommunityHasBeenDealtACard(event) => {
                player.on_community_has_been_dealt_a_card(event, state);
            }
            Self::PlayerBetBigBlind(event) => player.on_player_bet_big_blind(event, state),
            Self::PlayerBetSmallBlind(event) => player.on_player_bet_small_blind(event, state),
            Self::PlayerFolded(event) => player.on_player_folded(event, state),
            Self::PlayerCalled(event) => player.on_player_called(event, state),
            Self::PlayerRaised(event) => player.on_player_raised(event, state),
            Self::PlayerWentAllIn(event) => player.on_player_went_all_in(event, state),
            Self::PlayerChecked(event) => player.on_player_checked(event, state),
            Self::YouWonAmount(event) => player.on_you_won_amount(event, state),
            Self::ShowDown(event) => player.on_show_down(event, state),
            Self::TableIsDone(event) => player.on_table_is_done(event, state),
            Self::PlayerQuit(event) => player.on_player_quit(event, state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::entities::{Card, GamePlayer, Suit};

    #[derive(Default)]
    struct Recorder {
        calls: Vec<&'static str>,
    }

    impl Player for Recorder {
        fn action_required(
            &mut self,
            request: &ActionRequest,
            _state: &CurrentPlayState,
        ) -> Option<Action> {
            request.possible_actions.first().cloned()
        }

        fn on_player_folded(&mut self, _event: &PlayerFoldedEvent, _state: &CurrentPlayState) {
            self.calls.push("folded");
        }

        fn on_community_has_been_dealt_a_card(
            &mut self,
            _event: &CommunityHasBeenDealtACardEvent,
            _state: &CurrentPlayState,
        ) {
            self.calls.push("community");
        }

        fn on_table_is_done(&mut self, _event: &TableIsDoneEvent, _state: &CurrentPlayState) {
            self.calls.push("done");
        }
    }

    #[test]
    fn test_default_name_fails_loudly() {
        let recorder = Recorder::default();
        let err = recorder.name().unwrap_err();
        assert_eq!(err, PlayerError::MissingName);
        assert!(err.to_string().contains("forget to specify a name"));
    }

    #[test]
    fn test_dispatch_routes_by_kind() {
        let mut recorder = Recorder::default();
        let state = CurrentPlayState::new(Username::new("me"));
        let player = GamePlayer::new("alice", 100);

        let events = [
            GameEvent::PlayerFolded(PlayerFoldedEvent {
                player: player.clone(),
                invested_in_pot: 10,
            }),
            GameEvent::PlayerChecked(PlayerCheckedEvent {
                player: player.clone(),
            }),
            GameEvent::CommunityHasBeenDealtACard(CommunityHasBeenDealtACardEvent {
                card: Card(3, Suit::Club),
            }),
            GameEvent::TableIsDone(TableIsDoneEvent {
                players: vec![player],
            }),
        ];
        for event in &events {
            event.dispatch(&mut recorder, &state);
        }
        assert_eq!(recorder.calls, vec!["folded", "community", "done"]);
    }
}
