//! Snapshot of the hand currently being played, as seen by one bot.
//!
//! The snapshot is rebuilt from the notifications the server sends. Bots
//! only ever borrow it for the duration of a single handler or decision.

use std::collections::{HashMap, HashSet};

use super::{
    entities::{Card, GamePlayer, PlayRound, Usd, Username},
    events::GameEvent,
};

#[derive(Clone, Debug)]
pub struct CurrentPlayState {
    me: Username,
    table_id: Option<u64>,
    round: PlayRound,
    small_blind: Usd,
    big_blind: Usd,
    players: Vec<GamePlayer>,
    dealer: Option<GamePlayer>,
    investments: HashMap<Username, Usd>,
    folded: HashSet<Username>,
    all_in: HashSet<Username>,
    my_cards: Vec<Card>,
    community_cards: Vec<Card>,
    my_chips: Usd,
}

impl CurrentPlayState {
    pub fn new(me: Username) -> Self {
        Self {
            me,
            table_id: None,
            round: PlayRound::default(),
            small_blind: 0,
            big_blind: 0,
            players: Vec::new(),
            dealer: None,
            investments: HashMap::new(),
            folded: HashSet::new(),
            all_in: HashSet::new(),
            my_cards: Vec::new(),
            community_cards: Vec::new(),
            my_chips: 0,
        }
    }

    /// Fold a notification into the snapshot.
    pub fn apply(&mut self, event: &GameEvent) {
        match event {
            GameEvent::PlayIsStarted(event) => {
                self.reset_hand();
                self.table_id = Some(event.table_id);
                self.small_blind = event.small_blind;
                self.big_blind = event.big_blind;
                self.players = event.players.clone();
                self.dealer = Some(event.dealer.clone());
                if let Some(me) = self.players.iter().find(|p| p.name == self.me) {
                    self.my_chips = me.chip_count;
                }
            }
            GameEvent::TableChangedState(event) => self.round = event.round,
            GameEvent::YouHaveBeenDealtACard(event) => self.my_cards.push(event.card),
            GameEvent::CommunityHasBeenDealtACard(event) => self.community_cards.push(event.card),
            GameEvent::PlayerBetBigBlind(event) => self.invest(&event.player, event.big_blind),
            GameEvent::PlayerBetSmallBlind(event) => {
                self.invest(&event.player, event.small_blind);
            }
            GameEvent::PlayerCalled(event) => self.invest(&event.player, event.call_bet),
            GameEvent::PlayerRaised(event) => self.invest(&event.player, event.raise_bet),
            GameEvent::PlayerWentAllIn(event) => {
                self.invest(&event.player, event.all_in_amount);
                self.all_in.insert(event.player.name.clone());
            }
            GameEvent::PlayerFolded(event) => {
                self.folded.insert(event.player.name.clone());
            }
            GameEvent::YouWonAmount(event) => self.my_chips = event.your_chip_amount,
            GameEvent::TableIsDone(event) => {
                if let Some(me) = event.players.iter().find(|p| p.name == self.me) {
                    self.my_chips = me.chip_count;
                }
            }
            GameEvent::PlayerQuit(event) => {
                self.players.retain(|p| p.name != event.player.name);
            }
            GameEvent::ServerIsShuttingDown(_)
            | GameEvent::PlayerChecked(_)
            | GameEvent::ShowDown(_) => {}
        }
    }

    fn invest(&mut self, player: &GamePlayer, amount: Usd) {
        *self.investments.entry(player.name.clone()).or_default() += amount;
        if player.name == self.me {
            self.my_chips = self.my_chips.saturating_sub(amount);
        }
    }

    fn reset_hand(&mut self) {
        self.round = PlayRound::default();
        self.investments.clear();
        self.folded.clear();
        self.all_in.clear();
        self.my_cards.clear();
        self.community_cards.clear();
    }

    pub fn big_blind(&self) -> Usd {
        self.big_blind
    }

    pub fn small_blind(&self) -> Usd {
        self.small_blind
    }

    pub fn players(&self) -> &[GamePlayer] {
        &self.players
    }

    /// Players other than the bot itself.
    pub fn opponents(&self) -> impl Iterator<Item = &GamePlayer> {
        self.players.iter().filter(|p| !self.is_me(p))
    }

    pub fn investment_in_pot_for(&self, player: &GamePlayer) -> Usd {
        self.investments.get(&player.name).copied().unwrap_or(0)
    }

    pub fn my_cards(&self) -> &[Card] {
        &self.my_cards
    }

    pub fn community_cards(&self) -> &[Card] {
        &self.community_cards
    }

    pub fn my_current_chip_amount(&self) -> Usd {
        self.my_chips
    }

    pub fn my_name(&self) -> &Username {
        &self.me
    }

    pub fn is_me(&self, player: &GamePlayer) -> bool {
        player.name == self.me
    }

    pub fn has_player_folded(&self, player: &GamePlayer) -> bool {
        self.folded.contains(&player.name)
    }

    pub fn has_player_gone_all_in(&self, player: &GamePlayer) -> bool {
        self.all_in.contains(&player.name)
    }

    /// Seated players that have neither folded nor quit this hand.
    pub fn number_of_players_in_hand(&self) -> usize {
        self.players
            .iter()
            .filter(|p| !self.has_player_folded(p))
            .count()
    }

    pub fn dealer(&self) -> Option<&GamePlayer> {
        self.dealer.as_ref()
    }

    pub fn table_id(&self) -> Option<u64> {
        self.table_id
    }

    pub fn round(&self) -> PlayRound {
        self.round
    }
}
