use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::cards::{simplify_hand, Card, RANKS_STR};
use crate::error::GtoResult;
use crate::strategy::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum HandTier {
    Weak,
    Speculative,
    Playable,
    Medium,
    Strong,
    Premium,
}

impl fmt::Display for HandTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandTier::Premium => write!(f, "Premium"),
            HandTier::Strong => write!(f, "Strong"),
            HandTier::Medium => write!(f, "Medium"),
            HandTier::Playable => write!(f, "Playable"),
            HandTier::Speculative => write!(f, "Speculative"),
            HandTier::Weak => write!(f, "Weak"),
        }
    }
}

const PREMIUM: &[&str] = &["AA", "KK", "QQ", "AKs"];
const STRONG: &[&str] = &["JJ", "TT", "99", "AQs", "AJs", "AKo", "AQo"];
const MEDIUM: &[&str] = &[
    "88", "77", "66", "ATs", "A9s", "A8s", "KQs", "KJs", "AJo", "KQo",
];
const PLAYABLE: &[&str] = &[
    "55", "44", "33", "22", "A7s", "A6s", "A5s", "A4s", "A3s", "A2s", "KTs", "QJs", "JTs", "ATo",
    "KJo",
];
const SPECULATIVE: &[&str] = &[
    "K9s", "Q9s", "J9s", "T9s", "98s", "87s", "76s", "65s", "54s", "A9o", "KTo", "QJo",
];

static TIERS: Lazy<HashMap<&'static str, HandTier>> = Lazy::new(|| {
    [
        (PREMIUM, HandTier::Premium),
        (STRONG, HandTier::Strong),
        (MEDIUM, HandTier::Medium),
        (PLAYABLE, HandTier::Playable),
        (SPECULATIVE, HandTier::Speculative),
    ]
    .into_iter()
    .flat_map(|(hands, tier)| hands.iter().map(move |&h| (h, tier)))
    .collect()
});

const UTG_RANGE: &[&str] = &[
    "AA", "KK", "QQ", "JJ", "TT", "99", "88", "AKs", "AQs", "AJs", "ATs", "KQs", "KJs", "AKo",
    "AQo",
];
const MP_RANGE: &[&str] = &[
    "AA", "KK", "QQ", "JJ", "TT", "99", "88", "77", "AKs", "AQs", "AJs", "ATs", "A9s", "KQs",
    "KJs", "KTs", "QJs", "QTs", "JTs", "AKo", "AQo", "AJo", "KQo",
];
const CO_RANGE: &[&str] = &[
    "AA", "KK", "QQ", "JJ", "TT", "99", "88", "77", "66", "55", "AKs", "AQs", "AJs", "ATs",
    "A9s", "A8s", "A7s", "A6s", "A5s", "A4s", "A3s", "A2s", "KQs", "KJs", "KTs", "K9s", "QJs",
    "QTs", "Q9s", "JTs", "J9s", "T9s", "98s", "87s", "76s", "AKo", "AQo", "AJo", "ATo", "A9o",
    "KQo", "KJo", "QJo",
];
const BTN_RANGE: &[&str] = &[
    "AA", "KK", "QQ", "JJ", "TT", "99", "88", "77", "66", "55", "44", "33", "22", "AKs", "AQs",
    "AJs", "ATs", "A9s", "A8s", "A7s", "A6s", "A5s", "A4s", "A3s", "A2s", "KQs", "KJs", "KTs",
    "K9s", "K8s", "K7s", "K6s", "K5s", "K4s", "K3s", "K2s", "QJs", "QTs", "Q9s", "Q8s", "Q7s",
    "Q6s", "JTs", "J9s", "J8s", "T9s", "T8s", "98s", "87s", "76s", "65s", "54s", "AKo", "AQo",
    "AJo", "ATo", "A9o", "A8o", "A7o", "A6o", "A5o", "A4o", "A3o", "A2o", "KQo", "KJo", "KTo",
    "K9o", "QJo", "QTo", "JTo",
];
const SB_RANGE: &[&str] = &[
    "AA", "KK", "QQ", "JJ", "TT", "99", "88", "77", "66", "55", "44", "33", "22", "AKs", "AQs",
    "AJs", "ATs", "A9s", "A8s", "A7s", "A6s", "A5s", "A4s", "A3s", "A2s", "KQs", "KJs", "KTs",
    "K9s", "K8s", "K7s", "K6s", "K5s", "K4s", "K3s", "K2s", "QJs", "QTs", "Q9s", "Q8s", "Q7s",
    "JTs", "J9s", "T9s", "98s", "87s", "76s", "65s", "AKo", "AQo", "AJo", "ATo", "A9o", "A8o",
    "KQo", "KJo", "KTo", "QJo", "QTo", "JTo",
];
const BB_RANGE: &[&str] = &[
    "AA", "KK", "QQ", "JJ", "TT", "99", "88", "77", "66", "55", "44", "33", "22", "AKs", "AQs",
    "AJs", "ATs", "A9s", "A8s", "A7s", "A6s", "A5s", "A4s", "A3s", "A2s", "KQs", "KJs", "KTs",
    "K9s", "K8s", "K7s", "K6s", "QJs", "QTs", "JTs", "AKo", "AQo", "AJo", "ATo", "KQo",
];

/// All 169 starting-hand classes: pairs, then suited, then offsuit, each high to low.
pub fn generate_starting_hands() -> Vec<String> {
    let ranks: Vec<char> = RANKS_STR.chars().rev().collect();
    let mut hands: Vec<String> = ranks.iter().map(|r| format!("{r}{r}")).collect();
    for suffix in ['s', 'o'] {
        for (i, hi) in ranks.iter().enumerate() {
            for lo in &ranks[i + 1..] {
                hands.push(format!("{hi}{lo}{suffix}"));
            }
        }
    }
    hands
}

/// Number of concrete two-card combos in a hand class.
pub fn combo_count(notation: &str) -> u32 {
    let chars: Vec<char> = notation.chars().collect();
    match chars.as_slice() {
        [a, b] if a == b => 6,
        [_, _, 's'] => 4,
        [_, _, 'o'] => 12,
        _ => 0,
    }
}

pub fn hand_tier(notation: &str) -> HandTier {
    TIERS.get(notation).copied().unwrap_or(HandTier::Weak)
}

/// Tier of two concrete hole cards.
pub fn tier_of(cards: &[Card]) -> GtoResult<HandTier> {
    Ok(hand_tier(&simplify_hand(cards)?))
}

/// Hand classes a player opens from `position` by default.
pub fn default_range(position: Position) -> &'static [&'static str] {
    match position {
        Position::UTG => UTG_RANGE,
        Position::MP => MP_RANGE,
        Position::CO => CO_RANGE,
        Position::BTN => BTN_RANGE,
        Position::SB => SB_RANGE,
        Position::BB => BB_RANGE,
    }
}

pub fn in_default_range(position: Position, notation: &str) -> bool {
    default_range(position).iter().any(|&h| h == notation)
}

pub fn range_combos(hands: &[&str]) -> u32 {
    hands.iter().map(|h| combo_count(h)).sum()
}
