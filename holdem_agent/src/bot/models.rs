//! Bot player models.

use log::{debug, info, warn};

use super::{
    decision::{DecisionConfig, DecisionMaker},
    player::{Player, PlayerError},
};
use crate::game::{
    entities::{Action, ActionRequest, Username},
    events::{ServerIsShuttingDownEvent, TableIsDoneEvent},
    state::CurrentPlayState,
};

/// Bot player configuration
#[derive(Debug, Clone, Default)]
pub struct BotConfig {
    /// Name shown at the table. Required before registering.
    pub name: Option<String>,

    /// Decision table tuning
    pub decision: DecisionConfig,
}

/// A bot that calls with pairs and backs off from heavy bettors.
///
/// All the thinking happens in [`DecisionMaker`]; the bot itself only logs
/// a few notifications.
#[derive(Debug, Clone)]
pub struct PairBot {
    name: Option<Username>,
    decision_maker: DecisionMaker,
}

impl PairBot {
    pub fn new(config: BotConfig) -> Self {
        Self {
            name: config
                .name
                .map(|name| Username::new(&name))
                .filter(|name| !name.is_empty()),
            decision_maker: DecisionMaker::with_config(config.decision),
        }
    }
}

impl Player for PairBot {
    fn name(&self) -> Result<Username, PlayerError> {
        self.name.clone().ok_or(PlayerError::MissingName)
    }

    fn action_required(
        &mut self,
        request: &ActionRequest,
        state: &CurrentPlayState,
    ) -> Option<Action> {
        let action = self
            .decision_maker
            .select_action(&request.possible_actions, state)
            .cloned();
        match &action {
            Some(action) => debug!("{} returning action: {action}", state.my_name()),
            None => warn!(
                "{} has no action for request {} ({request})",
                state.my_name(),
                request.request_id
            ),
        }
        action
    }

    fn on_server_is_shutting_down(
        &mut self,
        event: &ServerIsShuttingDownEvent,
        _state: &CurrentPlayState,
    ) {
        info!("Server is shutting down: {}", event.message);
    }

    fn on_table_is_done(&mut self, _event: &TableIsDoneEvent, state: &CurrentPlayState) {
        debug!(
            "Table is done, I'm leaving the table with ${}",
            state.my_current_chip_amount()
        );
    }

    fn on_connection_established(&mut self) {
        info!("Connected to game server");
    }

    fn on_connection_lost(&mut self) {
        info!("Connection to game server is lost. Exit time");
    }
}
