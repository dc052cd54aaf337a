use std::fmt;

use serde::Serialize;

use crate::error::{GtoError, GtoResult};

/// Fraction of the final pot the caller must put in: `bet / (pot + bet)`.
/// An empty pot with no bet has no price and yields 0.
pub fn pot_odds(pot: f64, bet: f64) -> f64 {
    let total = pot + bet;
    if total <= 0.0 {
        return 0.0;
    }
    bet / total
}

/// Minimum defense frequency against a bet of `bet` into `pot`.
pub fn mdf(pot: f64, bet: f64) -> f64 {
    1.0 - pot_odds(pot, bet)
}

/// EV of a raise or bet: win the pot with `equity`, lose the bet otherwise.
pub fn aggressive_ev(equity: f64, pot: f64, bet: f64) -> f64 {
    pot * equity - (1.0 - equity) * bet
}

/// EV of a call, where only half the bet is treated as at risk.
pub fn passive_ev(equity: f64, pot: f64, bet: f64) -> f64 {
    pot * equity - (1.0 - equity) * bet * 0.5
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SprZone {
    Low,
    Medium,
    High,
}

impl fmt::Display for SprZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SprZone::Low => write!(f, "low"),
            SprZone::Medium => write!(f, "medium"),
            SprZone::High => write!(f, "high"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SprResult {
    pub ratio: f64,
    pub zone: SprZone,
    pub guidance: &'static str,
}

impl fmt::Display for SprResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SPR {:.1} ({})", self.ratio, self.zone)
    }
}

pub fn spr(stack: f64, pot: f64) -> GtoResult<SprResult> {
    if pot <= 0.0 {
        return Err(GtoError::InvalidValue("Pot must be positive".to_string()));
    }
    let ratio = stack / pot;
    let (zone, guidance) = if ratio <= 4.0 {
        (
            SprZone::Low,
            "Commit with top pair+. All-in pressure is standard.",
        )
    } else if ratio <= 10.0 {
        (
            SprZone::Medium,
            "Two pair+ for stacking. One pair hands play cautiously.",
        )
    } else {
        (
            SprZone::High,
            "Need very strong hands to stack off. Implied odds matter most.",
        )
    };
    Ok(SprResult {
        ratio,
        zone,
        guidance,
    })
}
