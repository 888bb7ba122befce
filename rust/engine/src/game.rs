use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{evaluate, HandResult};
use crate::logger::{ActionRecord, ShowdownHand, ShowdownInfo};
use crate::player::{Action, Player, PlayerId, Position};
use crate::pot::PotManager;
use crate::rules::{validate_action, ValidatedAction};

/// Seed used when a caller does not pick one.
pub const DEFAULT_SEED: u64 = 0xA1A2_A3A4;

/// Hole cards, three burns and a full board.
pub const CARDS_PER_HAND: usize = 12;

/// Stakes and starting chips for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub starting_stack: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    /// Base seed; hand `n` shuffles with `seed.wrapping_add(n)`
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_stack: 1_000,
            small_blind: 10,
            big_blind: 20,
            seed: DEFAULT_SEED,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.small_blind == 0 || self.big_blind == 0 {
            return Err(GameError::InvalidConfig("blinds must be > 0".into()));
        }
        if self.small_blind >= self.big_blind {
            return Err(GameError::InvalidConfig(
                "small blind must be below the big blind".into(),
            ));
        }
        if self.starting_stack < self.big_blind {
            return Err(GameError::InvalidConfig(
                "starting stack must cover the big blind".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Waiting,
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
    Complete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Waiting => "waiting",
            Phase::Preflop => "preflop",
            Phase::Flop => "flop",
            Phase::Turn => "turn",
            Phase::River => "river",
            Phase::Showdown => "showdown",
            Phase::Complete => "complete",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum WinReason {
    OpponentFolded,
    BestHand,
    SplitPot,
}

impl fmt::Display for WinReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WinReason::OpponentFolded => "opponent folded",
            WinReason::BestHand => "best hand",
            WinReason::SplitPot => "split pot",
        };
        f.write_str(s)
    }
}

/// Complete state of one heads-up game: stacks that persist across hands plus
/// everything about the hand in progress.
///
/// Transitions are transactional: they run on a scratch copy that replaces
/// `self` only on success, so a rejected call leaves the state untouched. The
/// engine does no locking; callers serialize access per game.
///
/// The whole value (including the undealt deck) round-trips through serde, so a
/// persisted mid-hand state resumes exactly where it stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    game_id: String,
    config: GameConfig,
    players: [Player; 2],
    /// Board cards: 0, 3, 4 or 5
    community: Vec<Card>,
    pot: u32,
    /// Street bet every live player must match
    current_bet: u32,
    /// Smallest legal raise increment on this street
    min_raise: u32,
    /// Seat whose turn it is; `None` when no action is pending
    to_act: Option<usize>,
    phase: Phase,
    hand_number: u64,
    /// Button seat; heads-up the button posts the big blind
    dealer_index: usize,
    winner: Option<usize>,
    win_reason: Option<WinReason>,
    showdown: Option<ShowdownInfo>,
    actions: Vec<ActionRecord>,
    /// Seed the current deck was shuffled with; `None` for a supplied deck
    hand_seed: Option<u64>,
    deck: Deck,
}

impl GameState {
    /// New game in the `Waiting` phase, every seat starting with `config.starting_stack`.
    pub fn new<G, I, N>(game_id: G, seats: [(I, N); 2], config: GameConfig) -> Result<Self, GameError>
    where
        G: Into<String>,
        I: Into<PlayerId>,
        N: Into<String>,
    {
        let [(id0, name0), (id1, name1)] = seats;
        let players = [
            Player::new(id0, name0, config.starting_stack),
            Player::new(id1, name1, config.starting_stack),
        ];
        Self::with_players(game_id, players, config)
    }

    /// New game from already-built players, keeping their stacks.
    pub fn with_players(
        game_id: impl Into<String>,
        mut players: [Player; 2],
        config: GameConfig,
    ) -> Result<Self, GameError> {
        config.validate()?;
        if players[0].id == players[1].id {
            return Err(GameError::InvalidConfig(format!(
                "duplicate player id '{}'",
                players[0].id
            )));
        }
        if players[0].stack.checked_add(players[1].stack).is_none() {
            return Err(GameError::InvalidConfig(
                "combined stacks exceed the chip limit".to_string(),
            ));
        }
        for p in players.iter_mut() {
            p.reset_for_hand();
        }
        Ok(Self {
            game_id: game_id.into(),
            config,
            players,
            community: Vec::with_capacity(5),
            pot: 0,
            current_bet: 0,
            min_raise: config.big_blind,
            to_act: None,
            phase: Phase::Waiting,
            hand_number: 0,
            // first deal flips this so seat 0 deals hand 1
            dealer_index: 1,
            winner: None,
            win_reason: None,
            showdown: None,
            actions: Vec::new(),
            hand_seed: None,
            deck: Deck::new(),
        })
    }

    pub fn game_id(&self) -> &str {
        &self.game_id
    }
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }
    pub fn community(&self) -> &[Card] {
        &self.community
    }
    pub fn pot(&self) -> u32 {
        self.pot
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn min_raise(&self) -> u32 {
        self.min_raise
    }
    pub fn to_act(&self) -> Option<usize> {
        self.to_act
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn hand_number(&self) -> u64 {
        self.hand_number
    }
    pub fn dealer_index(&self) -> usize {
        self.dealer_index
    }
    pub fn winner(&self) -> Option<usize> {
        self.winner
    }
    pub fn win_reason(&self) -> Option<WinReason> {
        self.win_reason
    }
    pub fn showdown(&self) -> Option<&ShowdownInfo> {
        self.showdown.as_ref()
    }
    pub fn actions(&self) -> &[ActionRecord] {
        &self.actions
    }
    pub fn hand_seed(&self) -> Option<u64> {
        self.hand_seed
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    pub fn is_hand_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    pub fn seat_of(&self, player_id: &str) -> Option<usize> {
        self.players.iter().position(|p| p.id.as_str() == player_id)
    }

    pub fn position(&self, seat: usize) -> Position {
        if seat == self.dealer_index {
            Position::BigBlind
        } else {
            Position::SmallBlind
        }
    }

    /// Chips `seat` needs to put in to match the current bet.
    pub fn to_call(&self, seat: usize) -> u32 {
        self.players
            .get(seat)
            .map_or(0, |p| self.current_bet.saturating_sub(p.street_bet))
    }

    /// Smallest street bet a raise may target.
    pub fn min_raise_to(&self) -> u32 {
        self.current_bet + self.min_raise
    }

    /// Starts the next hand with a deck shuffled from the game seed.
    ///
    /// # Errors
    ///
    /// - [`GameError::HandInProgress`] unless the phase is `Waiting` or `Complete`
    /// - [`GameError::NotEnoughChips`] when a seat has no chips left
    /// - [`GameError::InsufficientPlayers`] when a seat cannot cover the big blind
    pub fn deal_new_hand(&mut self) -> Result<(), GameError> {
        let seed = self.config.seed.wrapping_add(self.hand_number + 1);
        let mut next = self.clone();
        next.start_hand(Deck::shuffled(seed), Some(seed))?;
        *self = next;
        Ok(())
    }

    /// Starts the next hand dealing from `deck` as given (replays, fixed scenarios).
    ///
    /// Besides the [`deal_new_hand`](Self::deal_new_hand) errors, the deck must
    /// hold at least [`CARDS_PER_HAND`] undealt cards ([`GameError::DeckExhausted`])
    /// with no card repeated ([`GameError::DuplicateDeckCard`]).
    pub fn deal_new_hand_with_deck(&mut self, deck: Deck) -> Result<(), GameError> {
        let mut next = self.clone();
        next.start_hand(deck, None)?;
        *self = next;
        Ok(())
    }

    /// Applies one action for `player_id`, advancing streets and resolving the
    /// hand as needed.
    ///
    /// Validation runs in this order: unknown player, already folded, no hand
    /// dealt, hand already complete, out of turn, then the sizing rules.
    pub fn apply_action(&mut self, player_id: &str, action: Action) -> Result<(), GameError> {
        let seat = self
            .seat_of(player_id)
            .ok_or_else(|| GameError::UnknownPlayer(player_id.to_string()))?;
        if self.players[seat].folded {
            return Err(GameError::AlreadyFolded);
        }
        match self.phase {
            Phase::Waiting => return Err(GameError::HandNotDealt),
            Phase::Showdown | Phase::Complete => return Err(GameError::HandAlreadyComplete),
            Phase::Preflop | Phase::Flop | Phase::Turn | Phase::River => {}
        }
        let expected = self.to_act.ok_or(GameError::HandAlreadyComplete)?;
        if expected != seat {
            return Err(GameError::NotYourTurn {
                expected,
                actual: seat,
            });
        }

        let mut next = self.clone();
        next.execute(seat, action)?;
        *self = next;
        Ok(())
    }

    fn start_hand(&mut self, deck: Deck, hand_seed: Option<u64>) -> Result<(), GameError> {
        if !matches!(self.phase, Phase::Waiting | Phase::Complete) {
            return Err(GameError::HandInProgress);
        }
        if self.players.iter().any(|p| p.stack == 0) {
            return Err(GameError::NotEnoughChips);
        }
        if self.players.iter().any(|p| p.stack < self.config.big_blind) {
            return Err(GameError::InsufficientPlayers);
        }
        if deck.remaining() < CARDS_PER_HAND {
            return Err(GameError::DeckExhausted);
        }
        if let Some(card) = deck.first_duplicate() {
            return Err(GameError::DuplicateDeckCard(card));
        }

        self.hand_number += 1;
        self.dealer_index = 1 - self.dealer_index;
        for p in self.players.iter_mut() {
            p.reset_for_hand();
        }
        self.community.clear();
        self.pot = 0;
        self.winner = None;
        self.win_reason = None;
        self.showdown = None;
        self.actions.clear();
        self.deck = deck;
        self.hand_seed = hand_seed;

        let dealer = self.dealer_index;
        let small = 1 - dealer;
        for _ in 0..2 {
            for seat in [small, dealer] {
                let c = self.draw()?;
                self.players[seat].give_card(c);
            }
        }

        self.pot += self.players[small].commit(self.config.small_blind);
        self.pot += self.players[dealer].commit(self.config.big_blind);
        self.current_bet = self.config.big_blind;
        self.min_raise = self.config.big_blind;
        self.to_act = Some(small);
        self.phase = Phase::Preflop;

        tracing::info!(
            game_id = %self.game_id,
            hand = self.hand_number,
            dealer = dealer,
            seed = ?hand_seed,
            "hand dealt"
        );
        self.debug_check_invariants();
        Ok(())
    }

    fn execute(&mut self, seat: usize, action: Action) -> Result<(), GameError> {
        let opponent = 1 - seat;
        let p = &self.players[seat];
        let validated = validate_action(
            p.stack,
            p.street_bet,
            self.current_bet,
            self.min_raise,
            action,
        )?;

        let raises = match validated {
            ValidatedAction::Raise { .. } => true,
            ValidatedAction::AllIn { to, .. } => to > self.current_bet,
            _ => false,
        };
        if raises && !self.players[opponent].can_act() {
            return Err(GameError::RaiseNotAllowed);
        }

        self.actions.push(ActionRecord {
            seat,
            phase: self.phase,
            action,
        });
        tracing::debug!(
            game_id = %self.game_id,
            hand = self.hand_number,
            seat = seat,
            phase = %self.phase,
            action = %action,
            "action applied"
        );

        match validated {
            ValidatedAction::Fold => {
                self.players[seat].folded = true;
                self.players[seat].has_acted = true;
                self.award_uncontested(opponent);
                return Ok(());
            }
            ValidatedAction::Check => {}
            ValidatedAction::Call(chips) => {
                self.pot += self.players[seat].commit(chips);
            }
            ValidatedAction::Raise { to, chips } | ValidatedAction::AllIn { to, chips } => {
                self.pot += self.players[seat].commit(chips);
                if to > self.current_bet {
                    let increment = to - self.current_bet;
                    // an all-in short of a full raise leaves the increment alone
                    if increment >= self.min_raise {
                        self.min_raise = increment;
                    }
                    self.current_bet = to;
                    self.players[opponent].has_acted = false;
                }
            }
        }
        self.players[seat].has_acted = true;
        self.debug_check_invariants();

        if self.street_complete() {
            self.finish_street()
        } else {
            self.to_act = Some(opponent);
            Ok(())
        }
    }

    fn street_complete(&self) -> bool {
        self.players
            .iter()
            .filter(|p| !p.folded)
            .all(|p| p.all_in || (p.has_acted && p.street_bet == self.current_bet))
    }

    /// Closes the betting street and deals the next one. With fewer than two
    /// seats able to bet, keeps dealing straight through to showdown.
    fn finish_street(&mut self) -> Result<(), GameError> {
        loop {
            for p in self.players.iter_mut() {
                p.reset_for_street();
            }
            self.current_bet = 0;
            self.min_raise = self.config.big_blind;

            let (next, cards) = match self.phase {
                Phase::Preflop => (Phase::Flop, 3),
                Phase::Flop => (Phase::Turn, 1),
                Phase::Turn => (Phase::River, 1),
                _ => {
                    self.phase = Phase::Showdown;
                    self.to_act = None;
                    return self.resolve_showdown();
                }
            };
            self.deck.burn_card().ok_or(GameError::DeckExhausted)?;
            for _ in 0..cards {
                let c = self.draw()?;
                self.community.push(c);
            }
            self.phase = next;
            tracing::debug!(
                game_id = %self.game_id,
                hand = self.hand_number,
                phase = %self.phase,
                pot = self.pot,
                "street dealt"
            );
            self.debug_check_invariants();

            if self.players.iter().filter(|p| p.can_act()).count() >= 2 {
                // non-dealer opens every post-flop street
                self.to_act = Some(1 - self.dealer_index);
                return Ok(());
            }
            self.to_act = None;
        }
    }

    fn resolve_showdown(&mut self) -> Result<(), GameError> {
        let mut hands: [Option<HandResult>; 2] = [None, None];
        for (seat, p) in self.players.iter().enumerate() {
            if p.folded {
                continue;
            }
            let mut cards = p.hole.clone();
            cards.extend_from_slice(&self.community);
            hands[seat] = Some(evaluate(&cards)?);
        }

        let contributions = [self.players[0].committed, self.players[1].committed];
        let folded = [self.players[0].folded, self.players[1].folded];
        let pots = PotManager::with_folded(&contributions, &folded);
        let odd_chip_seat = 1 - self.dealer_index;

        let mut payouts = [0u32; 2];
        for pot in pots.pots() {
            let best = pot
                .eligible
                .iter()
                .filter_map(|&s| hands[s].as_ref().map(|h| h.score))
                .max();
            let winners: Vec<usize> = pot
                .eligible
                .iter()
                .copied()
                .filter(|&s| hands[s].as_ref().map(|h| h.score) == best && best.is_some())
                .collect();
            for (seat, share) in split_amount(pot.amount, &winners, odd_chip_seat) {
                payouts[seat] += share;
            }
        }
        debug_assert_eq!(payouts.iter().sum::<u32>(), self.pot, "pot not fully awarded");

        for (seat, amount) in payouts.iter().enumerate() {
            self.players[seat].add_chips(*amount);
        }
        self.pot = 0;

        let (winners, reason) = match (&hands[0], &hands[1]) {
            (Some(a), Some(b)) if a.score == b.score => (vec![0, 1], WinReason::SplitPot),
            (Some(a), Some(b)) => (vec![if a.score > b.score { 0 } else { 1 }], WinReason::BestHand),
            (Some(_), None) => (vec![0], WinReason::BestHand),
            (None, _) => (vec![1], WinReason::BestHand),
        };
        self.winner = match reason {
            WinReason::SplitPot => None,
            _ => winners.first().copied(),
        };
        self.win_reason = Some(reason);

        let shown: Vec<ShowdownHand> = hands
            .into_iter()
            .enumerate()
            .filter_map(|(seat, hand)| hand.map(|hand| ShowdownHand { seat, hand }))
            .collect();
        self.showdown = Some(ShowdownInfo {
            notes: shown
                .iter()
                .find(|h| winners.contains(&h.seat))
                .map(|h| h.hand.description.clone()),
            winners,
            hands: shown,
            payouts: payouts.to_vec(),
        });
        self.complete_hand();
        Ok(())
    }

    fn award_uncontested(&mut self, winner: usize) {
        let amount = self.pot;
        self.players[winner].add_chips(amount);
        self.pot = 0;
        self.winner = Some(winner);
        self.win_reason = Some(WinReason::OpponentFolded);
        self.complete_hand();
    }

    fn complete_hand(&mut self) {
        self.phase = Phase::Complete;
        self.to_act = None;
        self.current_bet = 0;
        tracing::info!(
            game_id = %self.game_id,
            hand = self.hand_number,
            winner = ?self.winner,
            reason = ?self.win_reason,
            stacks = ?[self.players[0].stack, self.players[1].stack],
            "hand complete"
        );
        self.debug_check_invariants();
    }

    fn draw(&mut self) -> Result<Card, GameError> {
        self.deck.deal_card().ok_or(GameError::DeckExhausted)
    }

    fn debug_check_invariants(&self) {
        let committed: u32 = self.players.iter().map(|p| p.committed).sum();
        if self.phase == Phase::Complete {
            debug_assert_eq!(self.pot, 0, "completed hand left chips in the pot");
        } else {
            debug_assert_eq!(self.pot, committed, "pot differs from chips committed");
        }
        debug_assert!(self.players.iter().all(|p| p.street_bet <= p.committed));
    }
}

/// Splits `amount` evenly across `winners`; the indivisible remainder goes to
/// `odd_chip_seat` when it is among them, otherwise to the first winner.
pub(crate) fn split_amount(amount: u32, winners: &[usize], odd_chip_seat: usize) -> Vec<(usize, u32)> {
    if winners.is_empty() {
        return Vec::new();
    }
    let share = amount / winners.len() as u32;
    let remainder = amount % winners.len() as u32;
    let odd = if winners.contains(&odd_chip_seat) {
        odd_chip_seat
    } else {
        winners[0]
    };
    winners
        .iter()
        .map(|&seat| (seat, share + if seat == odd { remainder } else { 0 }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    #[test]
    fn odd_chip_goes_to_the_named_seat() {
        assert_eq!(split_amount(31, &[0, 1], 1), vec![(0, 15), (1, 16)]);
        assert_eq!(split_amount(31, &[0, 1], 0), vec![(0, 16), (1, 15)]);
        assert_eq!(split_amount(31, &[0], 1), vec![(0, 31)]);
        assert!(split_amount(31, &[], 1).is_empty());
    }

    #[test]
    fn config_validation() {
        assert!(GameConfig::default().validate().is_ok());
        let bad = GameConfig {
            small_blind: 20,
            big_blind: 20,
            ..GameConfig::default()
        };
        assert!(matches!(bad.validate(), Err(GameError::InvalidConfig(_))));
        let short = GameConfig {
            starting_stack: 10,
            ..GameConfig::default()
        };
        assert!(short.validate().is_err());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let r = GameState::new("g", [("a", "A"), ("a", "B")], GameConfig::default());
        assert!(matches!(r, Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn short_supplied_deck_fails_without_mutation() {
        let mut gs = GameState::new("g", [("a", "A"), ("b", "B")], GameConfig::default()).unwrap();
        let before = gs.clone();
        let deck = Deck::from_cards(parse_cards("As Kd").unwrap());
        assert_eq!(gs.deal_new_hand_with_deck(deck), Err(GameError::DeckExhausted));
        assert_eq!(gs, before);
    }

    #[test]
    fn deck_without_a_full_board_is_refused_at_deal() {
        let mut gs = GameState::new("g", [("a", "A"), ("b", "B")], GameConfig::default()).unwrap();
        let before = gs.clone();
        let hole_only = Deck::from_cards(parse_cards("2c 3c 4c 5c").unwrap());
        assert_eq!(gs.deal_new_hand_with_deck(hole_only), Err(GameError::DeckExhausted));
        let one_short = Deck::from_cards(parse_cards("2c 3c 4c 5c 6c 7c 8c 9c Tc Jc Qc").unwrap());
        assert_eq!(gs.deal_new_hand_with_deck(one_short), Err(GameError::DeckExhausted));
        assert_eq!(gs, before);
    }

    #[test]
    fn repeated_card_in_supplied_deck_is_refused_at_deal() {
        let mut gs = GameState::new("g", [("a", "A"), ("b", "B")], GameConfig::default()).unwrap();
        let before = gs.clone();
        let deck = Deck::from_cards(parse_cards("Ac Kd Qh Js Ac 2d 3h 4s 5c 6d 7h 8s").unwrap());
        let ace = parse_cards("Ac").unwrap()[0];
        assert_eq!(
            gs.deal_new_hand_with_deck(deck),
            Err(GameError::DuplicateDeckCard(ace))
        );
        assert_eq!(gs, before);
    }

    #[test]
    fn exact_twelve_card_deck_plays_to_showdown() {
        let mut gs = GameState::new("g", [("a", "A"), ("b", "B")], GameConfig::default()).unwrap();
        let deck = Deck::from_cards(parse_cards("Ac Kd Qh Js 2c 9d 8h 3s 7c 4d 6h 5s").unwrap());
        gs.deal_new_hand_with_deck(deck).unwrap();
        gs.apply_action("b", Action::Call).unwrap();
        gs.apply_action("a", Action::Check).unwrap();
        for _ in 0..3 {
            gs.apply_action("b", Action::Check).unwrap();
            gs.apply_action("a", Action::Check).unwrap();
        }
        assert_eq!(gs.phase(), Phase::Complete);
        assert_eq!(gs.community().len(), 5);
        assert_eq!(gs.deck_remaining(), 0);
    }

    #[test]
    fn stacks_beyond_the_chip_limit_are_rejected() {
        let players = [Player::new("a", "A", u32::MAX), Player::new("b", "B", 1)];
        let r = GameState::with_players("g", players, GameConfig::default());
        assert!(matches!(r, Err(GameError::InvalidConfig(_))));
    }
}
