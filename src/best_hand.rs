use itertools::Itertools;

use crate::cards::Card;
use crate::hand_evaluator::{score_cards, EvaluatedHand};

/// The five cards that make the strongest hand, found by scoring every
/// five-card subset. Inputs of five cards or fewer are returned unchanged.
pub fn get_best_hand(cards: &[Card]) -> Vec<Card> {
    best_five(cards)
        .map(|(five, _)| five)
        .unwrap_or_else(|| cards.to_vec())
}

/// Like [`get_best_hand`] but also returns the winning evaluation. `None`
/// when fewer than five cards are supplied.
pub fn best_five(cards: &[Card]) -> Option<(Vec<Card>, EvaluatedHand)> {
    if cards.len() < 5 {
        return None;
    }
    cards
        .iter()
        .copied()
        .combinations(5)
        .map(|five| {
            let hand = score_cards(&five);
            (five, hand)
        })
        .max_by_key(|(_, hand)| hand.score)
}
