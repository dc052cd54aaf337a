pub mod best_hand;
pub mod cards;
pub mod cli;
pub mod config;
pub mod display;
pub mod equity;
pub mod error;
pub mod hand_evaluator;
pub mod math_engine;
pub mod ranges;
pub mod strategy;

pub use best_hand::get_best_hand;
pub use cards::{Card, Rank, Suit};
pub use equity::{calculate_equity, EquityResult};
pub use error::{GtoError, GtoResult};
pub use hand_evaluator::{evaluate_hand, EvaluatedHand, HandCategory};
pub use strategy::{solve_for_gto, ActionRecommendation, GameState, Position};
