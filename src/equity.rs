use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, ControlFlow};

use rand::seq::SliceRandom;
use rand::Rng;
use rayon::prelude::*;
use serde::Serialize;

use crate::cards::{find_duplicate, Card, Deck};
use crate::error::{GtoError, GtoResult};
use crate::hand_evaluator::score_cards;

/// Iterations per unit of work handed to the rayon pool.
pub const PARALLEL_BATCH: usize = 2_000;

/// Raw win/loss/tie counters from the player's point of view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub wins: u64,
    pub losses: u64,
    pub ties: u64,
}

impl Tally {
    pub fn total(&self) -> u64 {
        self.wins + self.losses + self.ties
    }

    fn record(&mut self, outcome: Ordering) {
        match outcome {
            Ordering::Greater => self.wins += 1,
            Ordering::Less => self.losses += 1,
            Ordering::Equal => self.ties += 1,
        }
    }
}

impl Add for Tally {
    type Output = Tally;

    fn add(self, rhs: Tally) -> Tally {
        Tally {
            wins: self.wins + rhs.wins,
            losses: self.losses + rhs.losses,
            ties: self.ties + rhs.ties,
        }
    }
}

impl AddAssign for Tally {
    fn add_assign(&mut self, rhs: Tally) {
        *self = *self + rhs;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct EquityResult {
    pub player_equity: f64,
    pub opponent_equity: f64,
    pub tie_equity: f64,
    pub simulations: usize,
}

impl EquityResult {
    /// The degenerate result returned for unusable input.
    pub fn zero() -> Self {
        EquityResult::default()
    }

    pub fn from_tally(tally: &Tally) -> Self {
        let total = tally.total();
        if total == 0 {
            return EquityResult::zero();
        }
        let n = total as f64;
        let player_equity = tally.wins as f64 / n;
        // The last non-empty bucket takes the remainder, so the three shares
        // add up to exactly 1.0 in f64 and empty buckets stay exactly 0.0.
        let (opponent_equity, tie_equity) = if tally.ties == 0 {
            (1.0 - player_equity, 0.0)
        } else {
            let opponent_equity = tally.losses as f64 / n;
            (opponent_equity, 1.0 - (player_equity + opponent_equity))
        };
        EquityResult {
            player_equity,
            opponent_equity,
            tie_equity,
            simulations: total as usize,
        }
    }

    /// Share of the pot the player expects, splitting ties evenly.
    pub fn equity(&self) -> f64 {
        self.player_equity + self.tie_equity / 2.0
    }
}

impl fmt::Display for EquityResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Win {:.1}% | Tie {:.1}% | Lose {:.1}% (equity: {:.1}%)",
            self.player_equity * 100.0,
            self.tie_equity * 100.0,
            self.opponent_equity * 100.0,
            self.equity() * 100.0,
        )
    }
}

/// Monte Carlo simulator for one heads-up matchup. Holds validated inputs and
/// accumulates a [`Tally`] across any number of batches.
#[derive(Debug, Clone)]
pub struct EquitySimulator {
    player: [Card; 2],
    opponent: Option<[Card; 2]>,
    board: Vec<Card>,
    deck: Vec<Card>,
    tally: Tally,
}

impl EquitySimulator {
    /// `opponent` may be empty (sampled every iteration) or exactly two cards.
    pub fn new(player: &[Card], opponent: &[Card], board: &[Card]) -> GtoResult<Self> {
        let player: [Card; 2] = player.try_into().map_err(|_| GtoError::InvalidHoleCards {
            owner: "Player",
            got: player.len(),
        })?;
        let opponent: Option<[Card; 2]> = match opponent {
            [] => None,
            [a, b] => Some([*a, *b]),
            _ => {
                return Err(GtoError::InvalidHoleCards {
                    owner: "Opponent",
                    got: opponent.len(),
                })
            }
        };
        if !matches!(board.len(), 0 | 3 | 4 | 5) {
            return Err(GtoError::InvalidBoardSize(board.len()));
        }

        let mut used: Vec<Card> = player.to_vec();
        used.extend(opponent.iter().flatten());
        used.extend_from_slice(board);
        if let Some(dup) = find_duplicate(&used) {
            return Err(GtoError::DuplicateCard(dup));
        }

        Ok(EquitySimulator {
            player,
            opponent,
            board: board.to_vec(),
            deck: Deck::without(&used).into_cards(),
            tally: Tally::default(),
        })
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    pub fn result(&self) -> EquityResult {
        EquityResult::from_tally(&self.tally)
    }

    /// True when every card is fixed and each iteration has the same outcome.
    pub fn is_deterministic(&self) -> bool {
        self.opponent.is_some() && self.board.len() == 5
    }

    /// Runs `iterations` more samples. The deck buffer is reshuffled in place
    /// each time, so memory stays constant regardless of the count.
    pub fn run_batch<R: Rng + ?Sized>(&mut self, iterations: usize, rng: &mut R) {
        for _ in 0..iterations {
            self.deck.shuffle(rng);
            let outcome = self.showdown();
            self.tally.record(outcome);
        }
    }

    /// Runs `total` iterations in chunks of `batch_size`, calling `on_batch`
    /// with the running tally after each chunk. Returning `Break` stops early.
    pub fn run_in_batches<R, F>(
        &mut self,
        total: usize,
        batch_size: usize,
        rng: &mut R,
        mut on_batch: F,
    ) -> EquityResult
    where
        R: Rng + ?Sized,
        F: FnMut(&Tally) -> ControlFlow<()>,
    {
        let batch_size = batch_size.max(1);
        let mut remaining = total;
        while remaining > 0 {
            let n = remaining.min(batch_size);
            self.run_batch(n, rng);
            remaining -= n;
            log::debug!("equity batch done: {} left, {:?}", remaining, self.tally);
            if on_batch(&self.tally).is_break() {
                log::debug!("equity simulation stopped after {} samples", self.tally.total());
                break;
            }
        }
        self.result()
    }

    /// Deals the current deck order and compares both seven-card hands.
    fn showdown(&self) -> Ordering {
        let (opponent, runout) = match self.opponent {
            Some(hole) => (hole, &self.deck[..]),
            None => ([self.deck[0], self.deck[1]], &self.deck[2..]),
        };

        let mut player_cards = Vec::with_capacity(7);
        player_cards.extend_from_slice(&self.player);
        player_cards.extend_from_slice(&self.board);
        player_cards.extend_from_slice(&runout[..5 - self.board.len()]);

        let mut opponent_cards = Vec::with_capacity(7);
        opponent_cards.extend_from_slice(&opponent);
        opponent_cards.extend_from_slice(&player_cards[2..]);

        score_cards(&player_cards).cmp(&score_cards(&opponent_cards))
    }
}

fn prepare(
    player: &[Card],
    opponent: &[Card],
    community: &[Card],
    iterations: usize,
) -> Option<EquitySimulator> {
    if iterations == 0 {
        log::warn!("equity requested with zero iterations");
        return None;
    }
    match EquitySimulator::new(player, opponent, community) {
        Ok(sim) => Some(sim),
        Err(e) => {
            log::warn!("equity input rejected: {}", e);
            None
        }
    }
}

/// Estimates win/loss/tie fractions for the player against a known opponent
/// hand (two cards) or a random one (no cards). Invalid input yields
/// [`EquityResult::zero`] instead of an error.
pub fn calculate_equity(
    player: &[Card],
    opponent: &[Card],
    community: &[Card],
    iterations: usize,
) -> EquityResult {
    calculate_equity_with_rng(player, opponent, community, iterations, &mut rand::thread_rng())
}

pub fn calculate_equity_with_rng<R: Rng + ?Sized>(
    player: &[Card],
    opponent: &[Card],
    community: &[Card],
    iterations: usize,
    rng: &mut R,
) -> EquityResult {
    let Some(mut sim) = prepare(player, opponent, community, iterations) else {
        return EquityResult::zero();
    };
    log::debug!(
        "simulating {} iterations (deterministic: {})",
        iterations,
        sim.is_deterministic()
    );
    sim.run_batch(iterations, rng);
    sim.result()
}

/// Same contract as [`calculate_equity`], spread across the rayon pool in
/// batches of [`PARALLEL_BATCH`], each with its own thread-local generator.
pub fn calculate_equity_parallel(
    player: &[Card],
    opponent: &[Card],
    community: &[Card],
    iterations: usize,
) -> EquityResult {
    let Some(sim) = prepare(player, opponent, community, iterations) else {
        return EquityResult::zero();
    };
    let batches = iterations.div_ceil(PARALLEL_BATCH);

    let tally = (0..batches)
        .into_par_iter()
        .map(|i| {
            let n = PARALLEL_BATCH.min(iterations - i * PARALLEL_BATCH);
            let mut local = sim.clone();
            local.run_batch(n, &mut rand::thread_rng());
            local.tally()
        })
        .reduce(Tally::default, |a, b| a + b);

    log::debug!("parallel equity finished over {} batches: {:?}", batches, tally);
    EquityResult::from_tally(&tally)
}
