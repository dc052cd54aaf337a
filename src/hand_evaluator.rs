use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::cards::{Card, ALL_SUITS};
use crate::error::{GtoError, GtoResult};

/// Width of one category band. Every category's score lies in
/// `[base, base + CATEGORY_BAND)`.
pub const CATEGORY_BAND: u32 = 1_000_000;

/// Score of a royal flush, the highest score `evaluate_hand` can return.
pub const MAX_SCORE: u32 = 9 * CATEGORY_BAND;

/// Kicker digits are base 15 so any rank (2..=14) fits in one digit and five
/// digits stay below 15^5 = 759_375 < CATEGORY_BAND.
const KICKER_BASE: u32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl HandCategory {
    pub fn name(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }

    fn base(self) -> u32 {
        self as u32 * CATEGORY_BAND
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Category plus a composite score. Scores order hands exactly the way
/// showdown does: higher category always wins, kickers break ties within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EvaluatedHand {
    pub category: HandCategory,
    pub score: u32,
}

impl EvaluatedHand {
    fn new(category: HandCategory, tiebreak: u32) -> Self {
        EvaluatedHand {
            category,
            score: category.base() + tiebreak,
        }
    }

    pub fn name(&self) -> &'static str {
        self.category.name()
    }
}

impl fmt::Display for EvaluatedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.category, self.score)
    }
}

impl PartialOrd for EvaluatedHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EvaluatedHand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score.cmp(&other.score)
    }
}

/// Packs ranks, most significant first, into base-15 digits.
fn encode(ranks: &[u8]) -> u32 {
    ranks
        .iter()
        .fold(0, |acc, &r| acc * KICKER_BASE + u32::from(r))
}

/// Rank bitmask with bit `r` set for every rank present; an ace also sets
/// bit 1 so the wheel is found by the same scan.
fn rank_mask(ranks: impl Iterator<Item = u8>) -> u16 {
    ranks.fold(0u16, |mask, r| {
        let mask = mask | (1 << r);
        if r == 14 {
            mask | 0b10
        } else {
            mask
        }
    })
}

/// Top rank of the highest five-long run in `mask`, if any.
fn straight_high(mask: u16) -> Option<u8> {
    (5..=14u8).rev().find(|&top| {
        let run = 0b1_1111u16 << (top - 4);
        mask & run == run
    })
}

/// Ranks present (count >= 1), highest first.
fn ranks_desc(counts: &[u8; 15]) -> impl Iterator<Item = u8> + '_ {
    (2..=14u8).rev().filter(move |&r| counts[r as usize] > 0)
}

fn kickers(counts: &[u8; 15], exclude: &[u8], n: usize) -> Vec<u8> {
    ranks_desc(counts)
        .filter(|r| !exclude.contains(r))
        .take(n)
        .collect()
}

/// Best straight-flush or flush available in any suit holding five or more cards.
fn best_flush(cards: &[Card]) -> Option<EvaluatedHand> {
    ALL_SUITS
        .iter()
        .filter_map(|&suit| {
            let mut ranks: Vec<u8> = cards
                .iter()
                .filter(|c| c.suit == suit)
                .map(|c| c.value())
                .collect();
            if ranks.len() < 5 {
                return None;
            }
            ranks.sort_unstable_by(|a, b| b.cmp(a));
            let hand = match straight_high(rank_mask(ranks.iter().copied())) {
                Some(14) => EvaluatedHand::new(HandCategory::RoyalFlush, 0),
                Some(top) => EvaluatedHand::new(HandCategory::StraightFlush, u32::from(top)),
                None => EvaluatedHand::new(HandCategory::Flush, encode(&ranks[..5])),
            };
            Some(hand)
        })
        .max()
}

/// Scores any number of cards without checking the count. With fewer than
/// five cards the result is the partial high-card / pair encoding.
pub(crate) fn score_cards(cards: &[Card]) -> EvaluatedHand {
    let mut counts = [0u8; 15];
    for c in cards {
        counts[c.value() as usize] += 1;
    }

    let flush = best_flush(cards);
    if let Some(hand) = flush {
        if hand.category >= HandCategory::StraightFlush {
            return hand;
        }
    }

    let ranks_with = |n: u8| -> Vec<u8> {
        (2..=14u8)
            .rev()
            .filter(|&r| counts[r as usize] >= n)
            .collect()
    };
    let quads = ranks_with(4);
    let trips = ranks_with(3);
    let pairs = ranks_with(2);

    if let Some(&quad) = quads.first() {
        let kicker = kickers(&counts, &[quad], 1);
        return EvaluatedHand::new(
            HandCategory::FourOfAKind,
            encode(&[quad, kicker.first().copied().unwrap_or(0)]),
        );
    }

    if let Some(&trip) = trips.first() {
        if let Some(&pair) = pairs.iter().find(|&&p| p != trip) {
            return EvaluatedHand::new(HandCategory::FullHouse, encode(&[trip, pair]));
        }
    }

    if let Some(hand) = flush {
        return hand;
    }

    if let Some(top) = straight_high(rank_mask(ranks_desc(&counts))) {
        return EvaluatedHand::new(HandCategory::Straight, u32::from(top));
    }

    if let Some(&trip) = trips.first() {
        let mut digits = vec![trip];
        digits.extend(kickers(&counts, &[trip], 2));
        return EvaluatedHand::new(HandCategory::ThreeOfAKind, encode(&digits));
    }

    if let [high, low, ..] = pairs[..] {
        let mut digits = vec![high, low];
        digits.extend(kickers(&counts, &[high, low], 1));
        return EvaluatedHand::new(HandCategory::TwoPair, encode(&digits));
    }

    if let Some(&pair) = pairs.first() {
        let mut digits = vec![pair];
        digits.extend(kickers(&counts, &[pair], 3));
        return EvaluatedHand::new(HandCategory::OnePair, encode(&digits));
    }

    EvaluatedHand::new(HandCategory::HighCard, encode(&kickers(&counts, &[], 5)))
}

/// Evaluates 5 to 7 cards, returning the category and score of the best
/// five-card hand contained in them.
pub fn evaluate_hand(cards: &[Card]) -> GtoResult<EvaluatedHand> {
    if cards.len() < 5 {
        return Err(GtoError::NotEnoughCards {
            need: 5,
            got: cards.len(),
        });
    }
    if cards.len() > 7 {
        return Err(GtoError::TooManyCards {
            max: 7,
            got: cards.len(),
        });
    }
    Ok(score_cards(cards))
}

/// Category label, or "Incomplete Hand" when fewer than five cards are known.
pub fn hand_category_name(cards: &[Card]) -> &'static str {
    match evaluate_hand(cards) {
        Ok(hand) => hand.name(),
        Err(_) => "Incomplete Hand",
    }
}

/// Compares two holdings on a shared board: 1 if the first wins, -1 if the
/// second wins, 0 on a tie.
pub fn compare_hands(hand1: &[Card], hand2: &[Card], board: &[Card]) -> GtoResult<i32> {
    let r1 = evaluate_hand(&[hand1, board].concat())?;
    let r2 = evaluate_hand(&[hand2, board].concat())?;
    Ok(match r1.cmp(&r2) {
        Ordering::Greater => 1,
        Ordering::Less => -1,
        Ordering::Equal => 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_is_lexicographic() {
        assert!(encode(&[14, 2, 2, 2, 2]) > encode(&[13, 14, 14, 14, 14]));
        assert!(encode(&[9, 8, 7, 6, 2]) > encode(&[9, 8, 7, 5, 4]));
        assert!(encode(&[14, 14, 14, 14, 14]) < CATEGORY_BAND);
    }

    #[test]
    fn test_rank_mask_sets_low_ace() {
        let mask = rank_mask([14u8, 2, 3, 4, 5].into_iter());
        assert_eq!(straight_high(mask), Some(5));
    }

    #[test]
    fn test_straight_high_prefers_top_run() {
        let mask = rank_mask([14u8, 2, 3, 4, 5, 6, 7].into_iter());
        assert_eq!(straight_high(mask), Some(7));
    }

    #[test]
    fn test_no_straight_with_gap() {
        let mask = rank_mask([2u8, 3, 4, 5, 7, 8].into_iter());
        assert_eq!(straight_high(mask), None);
    }
}
