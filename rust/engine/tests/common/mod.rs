#![allow(dead_code)]

use holdem_engine::cards::{full_deck, parse_cards, Card};
use holdem_engine::deck::Deck;
use holdem_engine::game::{GameConfig, GameState};
use holdem_engine::player::Player;

pub fn cards(text: &str) -> Vec<Card> {
    parse_cards(text).expect("valid card text")
}

/// Deck that deals the given hole cards and board for a hand where seat 0 is
/// the dealer. Burn cards are filled from cards nobody holds.
pub fn stacked(seat0: &str, seat1: &str, board: &str) -> Deck {
    let h0 = cards(seat0);
    let h1 = cards(seat1);
    let b = cards(board);
    assert_eq!((h0.len(), h1.len(), b.len()), (2, 2, 5));
    let used: Vec<Card> = h0.iter().chain(&h1).chain(&b).copied().collect();
    let burns: Vec<Card> = full_deck()
        .into_iter()
        .filter(|c| !used.contains(c))
        .take(3)
        .collect();

    // non-dealer gets the first card of each round
    let mut order = vec![h1[0], h0[0], h1[1], h0[1]];
    order.push(burns[0]);
    order.extend_from_slice(&b[..3]);
    order.push(burns[1]);
    order.push(b[3]);
    order.push(burns[2]);
    order.push(b[4]);
    Deck::from_cards(order)
}

pub fn new_game() -> GameState {
    GameState::new("g1", [("alice", "Alice"), ("bob", "Bob")], GameConfig::default())
        .expect("valid game")
}

pub fn game_with_stacks(seat0: u32, seat1: u32) -> GameState {
    let players = [
        Player::new("alice", "Alice", seat0),
        Player::new("bob", "Bob", seat1),
    ];
    GameState::with_players("g1", players, GameConfig::default()).expect("valid game")
}

pub fn total_chips(gs: &GameState) -> u32 {
    gs.players().iter().map(|p| p.stack()).sum::<u32>() + gs.pot()
}
