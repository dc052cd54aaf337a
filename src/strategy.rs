//! Heuristic action recommender.
//!
//! This is not an equilibrium solver: the iteration count only feeds the
//! Monte Carlo equity estimate. Equity is mapped through fixed threshold bands
//! to a small weighted set of actions with illustrative EVs.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::equity::calculate_equity_with_rng;
use crate::error::{GtoError, GtoResult};
use crate::hand_evaluator::{evaluate_hand, MAX_SCORE};
use crate::math_engine::{aggressive_ev, passive_ev, pot_odds};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    BTN,
    CO,
    MP,
    UTG,
    SB,
    BB,
}

impl Position {
    pub const ALL: [Position; 6] = [
        Position::BTN,
        Position::SB,
        Position::BB,
        Position::UTG,
        Position::MP,
        Position::CO,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Position::BTN => "BTN",
            Position::CO => "CO",
            Position::MP => "MP",
            Position::UTG => "UTG",
            Position::SB => "SB",
            Position::BB => "BB",
        }
    }

    /// Additive preflop equity adjustment for acting from this seat.
    pub fn equity_bias(self) -> f64 {
        match self {
            Position::BTN => 0.10,
            Position::CO => 0.05,
            Position::MP => 0.0,
            Position::UTG => -0.05,
            Position::SB => -0.02,
            Position::BB => 0.02,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = GtoError;

    fn from_str(s: &str) -> GtoResult<Position> {
        let upper = s.trim().to_uppercase();
        Position::ALL
            .into_iter()
            .find(|p| p.as_str() == upper)
            .ok_or_else(|| GtoError::InvalidPosition(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
    #[serde(rename = "All-In")]
    AllIn,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Fold => write!(f, "Fold"),
            Action::Check => write!(f, "Check"),
            Action::Call => write!(f, "Call"),
            Action::Bet => write!(f, "Bet"),
            Action::Raise => write!(f, "Raise"),
            Action::AllIn => write!(f, "All-In"),
        }
    }
}

/// Snapshot of the decision supplied by the caller for a single call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub player_cards: Vec<Card>,
    pub community_cards: Vec<Card>,
    pub position: Position,
    pub pot_size: f64,
    pub bet_size: f64,
    pub stack_size: f64,
    pub is_preflop: bool,
}

impl GameState {
    /// Builds a state whose street follows the board: preflop iff no community cards.
    pub fn new(
        player_cards: Vec<Card>,
        community_cards: Vec<Card>,
        position: Position,
        pot_size: f64,
        bet_size: f64,
        stack_size: f64,
    ) -> Self {
        let is_preflop = community_cards.is_empty();
        GameState {
            player_cards,
            community_cards,
            position,
            pot_size,
            bet_size,
            stack_size,
            is_preflop,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionRecommendation {
    pub action: Action,
    /// Integer percentage; a recommendation list sums to 100 (within rounding).
    pub frequency: u32,
    pub ev: f64,
}

/// Unnormalized template entry: action, raw weight, EV.
type RawEntry = (Action, f64, f64);

fn preflop_entries(equity: f64, pot: f64, bet: f64) -> Vec<RawEntry> {
    let raise = aggressive_ev(equity, pot, bet);
    let call = passive_ev(equity, pot, bet);

    if equity > 0.7 {
        vec![(Action::Raise, 0.8, raise), (Action::Call, 0.2, call)]
    } else if equity > 0.5 {
        vec![
            (Action::Raise, 0.5, raise),
            (Action::Call, 0.3, call),
            (Action::Fold, 0.2, 0.0),
        ]
    } else if equity > 0.3 {
        vec![(Action::Call, 0.6, call), (Action::Fold, 0.4, 0.0)]
    } else {
        vec![(Action::Call, 0.2, call), (Action::Fold, 0.8, 0.0)]
    }
}

fn postflop_entries(strength: f64, odds: f64, pot: f64, bet: f64) -> Vec<RawEntry> {
    let value = pot * strength;
    let check = pot * strength * 0.8;
    let thin = aggressive_ev(strength, pot, bet);

    if strength > odds * 1.5 {
        vec![(Action::Bet, 0.7, value), (Action::Check, 0.3, check)]
    } else if strength > odds {
        vec![(Action::Bet, 0.4, value), (Action::Check, 0.6, check)]
    } else if strength > odds * 0.7 {
        vec![(Action::Bet, 0.2, thin), (Action::Check, 0.8, check)]
    } else {
        vec![(Action::Bet, 0.1, thin), (Action::Check, 0.9, check)]
    }
}

/// Scales raw weights to integer percentages and sorts by frequency, highest first.
fn normalize(entries: Vec<RawEntry>) -> Vec<ActionRecommendation> {
    let total: f64 = entries.iter().map(|(_, w, _)| w).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut recs: Vec<ActionRecommendation> = entries
        .into_iter()
        .map(|(action, weight, ev)| ActionRecommendation {
            action,
            frequency: (weight / total * 100.0).round() as u32,
            ev,
        })
        .collect();
    recs.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    recs
}

/// Recommends a weighted mix of actions for `state`, estimating equity with
/// `iterations` random runouts against an unknown opponent hand. Returns an
/// empty list unless the player holds exactly two cards, or when the equity
/// estimate is rejected (zero iterations, duplicate cards, a 1 or 2 card board).
pub fn solve_for_gto(state: &GameState, iterations: usize) -> Vec<ActionRecommendation> {
    solve_for_gto_with_rng(state, iterations, &mut rand::thread_rng())
}

pub fn solve_for_gto_with_rng<R: Rng + ?Sized>(
    state: &GameState,
    iterations: usize,
    rng: &mut R,
) -> Vec<ActionRecommendation> {
    if state.player_cards.len() != 2 {
        log::warn!(
            "no recommendation: player holds {} cards",
            state.player_cards.len()
        );
        return Vec::new();
    }

    let estimate = calculate_equity_with_rng(
        &state.player_cards,
        &[],
        &state.community_cards,
        iterations,
        rng,
    );
    if estimate.simulations == 0 {
        log::warn!("no recommendation: equity could not be estimated for this spot");
        return Vec::new();
    }
    let equity = estimate.player_equity;

    let entries = if state.is_preflop {
        let adjusted = (equity + state.position.equity_bias()).clamp(0.0, 1.0);
        log::debug!(
            "preflop {}: equity {:.3}, adjusted {:.3}",
            state.position,
            equity,
            adjusted
        );
        preflop_entries(adjusted, state.pot_size, state.bet_size)
    } else {
        let cards = [state.player_cards.as_slice(), state.community_cards.as_slice()].concat();
        let hand_strength = match evaluate_hand(&cards) {
            Ok(hand) => (f64::from(hand.score) / f64::from(MAX_SCORE)).min(1.0),
            Err(e) => {
                log::debug!("hand strength unavailable: {}", e);
                0.0
            }
        };
        let odds = pot_odds(state.pot_size, state.bet_size);
        let combined = 0.7 * equity + 0.3 * hand_strength;
        log::debug!(
            "postflop: equity {:.3}, strength {:.3}, combined {:.3}, pot odds {:.3}",
            equity,
            hand_strength,
            combined,
            odds
        );
        postflop_entries(combined, odds, state.pot_size, state.bet_size)
    };

    normalize(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum(recs: &[ActionRecommendation]) -> u32 {
        recs.iter().map(|r| r.frequency).sum()
    }

    #[test]
    fn test_every_template_normalizes_to_100() {
        for equity in [0.1, 0.4, 0.6, 0.9] {
            let recs = normalize(preflop_entries(equity, 100.0, 75.0));
            assert!((99..=101).contains(&sum(&recs)), "{:?}", recs);
        }
        for strength in [0.01, 0.2, 0.3, 0.5, 0.9] {
            let recs = normalize(postflop_entries(strength, 0.3, 100.0, 75.0));
            assert!((99..=101).contains(&sum(&recs)), "{:?}", recs);
        }
    }

    #[test]
    fn test_normalize_sorts_descending() {
        let recs = normalize(vec![
            (Action::Fold, 0.2, 0.0),
            (Action::Raise, 0.5, 1.0),
            (Action::Call, 0.3, 0.5),
        ]);
        let order: Vec<Action> = recs.iter().map(|r| r.action).collect();
        assert_eq!(order, vec![Action::Raise, Action::Call, Action::Fold]);
        assert_eq!(recs[0].frequency, 50);
    }

    #[test]
    fn test_normalize_empty() {
        assert!(normalize(Vec::new()).is_empty());
    }

    #[test]
    fn test_postflop_bands() {
        let odds = pot_odds(100.0, 50.0);
        let top = normalize(postflop_entries(0.9, odds, 100.0, 50.0));
        assert_eq!((top[0].action, top[0].frequency), (Action::Bet, 70));
        let weak = normalize(postflop_entries(0.05, odds, 100.0, 50.0));
        assert_eq!((weak[0].action, weak[0].frequency), (Action::Check, 90));
    }
}
