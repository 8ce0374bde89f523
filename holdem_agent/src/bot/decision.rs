//! Bot decision-making logic: a fixed, ordered rule table.

use log::debug;

use crate::game::{
    constants::DEFAULT_AGGRESSION_MULTIPLIER,
    entities::{Action, ActionType, Usd},
    functional::has_pair,
    state::CurrentPlayState,
};

/// Configuration for the decision table.
///
/// # Examples
///
/// ```
/// use holdem_agent::bot::decision::DecisionConfig;
///
/// let config = DecisionConfig::default();
/// assert_eq!(config.aggression_multiplier, 4);
/// ```
#[derive(Debug, Clone)]
pub struct DecisionConfig {
    /// An opponent whose pot investment reaches this many big blinds
    /// counts as aggressive.
    ///
    /// **Effect**: 4 = an opponent with $40 in a $10 big blind game
    /// makes the bot check or fold
    /// **Lower** = more easily scared off
    pub aggression_multiplier: Usd,
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            aggression_multiplier: DEFAULT_AGGRESSION_MULTIPLIER,
        }
    }
}

/// What the bot reads off the table before picking an action.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Signals {
    /// Some opponent has invested heavily this hand.
    pub aggression_detected: bool,
    /// Own hole cards plus the board contain a pair.
    pub have_pair: bool,
}

/// The legal actions of a request, bucketed by type. A later action of a
/// type replaces an earlier one; all-ins are never chosen.
#[derive(Debug, Default)]
struct LegalActions<'a> {
    fold: Option<&'a Action>,
    check: Option<&'a Action>,
    call: Option<&'a Action>,
    raise: Option<&'a Action>,
}

impl<'a> LegalActions<'a> {
    fn from_slice(actions: &'a [Action]) -> Self {
        let mut legal = Self::default();
        for action in actions {
            let slot = match action.action_type {
                ActionType::Fold => &mut legal.fold,
                ActionType::Check => &mut legal.check,
                ActionType::Call => &mut legal.call,
                ActionType::Raise => &mut legal.raise,
                ActionType::AllIn => continue,
            };
            *slot = Some(action);
        }
        legal
    }
}

/// Bot decision maker
#[derive(Debug, Clone, Default)]
pub struct DecisionMaker {
    /// Configuration for decision-making
    config: DecisionConfig,
}

impl DecisionMaker {
    /// Create a new decision maker with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new decision maker with custom config
    pub fn with_config(config: DecisionConfig) -> Self {
        Self { config }
    }

    /// Read the aggression and pair signals off the play state.
    pub fn signals(&self, state: &CurrentPlayState) -> Signals {
        let threshold = state
            .big_blind()
            .saturating_mul(self.config.aggression_multiplier);
        let aggression_detected = state
            .opponents()
            .any(|player| state.investment_in_pot_for(player) >= threshold);

        let mut cards = Vec::with_capacity(state.my_cards().len() + state.community_cards().len());
        cards.extend_from_slice(state.my_cards());
        cards.extend_from_slice(state.community_cards());

        Signals {
            aggression_detected,
            have_pair: has_pair(&cards),
        }
    }

    /// Pick one of the legal actions for the hand in progress.
    ///
    /// Rules, first match wins:
    ///
    /// 1. Aggressive opponent and checking is legal: check.
    /// 2. Aggressive opponent and no pair: fold.
    /// 3. Pair and calling is legal: call.
    /// 4. Pair and raising is legal: raise.
    /// 5. No pair and no aggression: check, else call, else fold.
    ///
    /// If no rule produced an action, fold when folding is legal.
    ///
    /// # Arguments
    ///
    /// * `legal_actions` - Actions offered by the server
    /// * `state` - Snapshot of the hand, borrowed for this call only
    ///
    /// # Returns
    ///
    /// * `Option<&Action>` - One of `legal_actions`, or `None` when the rules
    ///   found nothing and folding isn't offered either
    pub fn select_action<'r>(
        &self,
        legal_actions: &'r [Action],
        state: &CurrentPlayState,
    ) -> Option<&'r Action> {
        let legal = LegalActions::from_slice(legal_actions);
        let Signals {
            aggression_detected,
            have_pair,
        } = self.signals(state);

        let action = if aggression_detected && legal.check.is_some() {
            legal.check
        } else if aggression_detected && !have_pair {
            legal.fold
        } else if have_pair && legal.call.is_some() {
            legal.call
        } else if have_pair && legal.raise.is_some() {
            legal.raise
        } else if !have_pair && !aggression_detected {
            legal.check.or(legal.call).or(legal.fold)
        } else {
            None
        };

        let action = action.or(legal.fold);
        debug!(
            "aggression: {aggression_detected}, pair: {have_pair}, decision: {}",
            action.map_or_else(|| "none".to_string(), ToString::to_string)
        );
        action
    }
}
