use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::best_hand::best_five;
use crate::cards::{find_duplicate, parse_board, parse_hole_cards, simplify_hand, Card};
use crate::config::Settings;
use crate::display::{
    board_display, equity_bar, equity_table, odds_table, print_error, print_section,
    range_grid, recommendation_table,
};
use crate::equity::{calculate_equity_parallel, calculate_equity_with_rng};
use crate::error::{GtoError, GtoResult};
use crate::hand_evaluator::evaluate_hand;
use crate::math_engine::{mdf, pot_odds, spr};
use crate::ranges::{default_range, range_combos, tier_of};
use crate::strategy::{solve_for_gto_with_rng, GameState, Position};

#[derive(Parser)]
#[command(name = "gto", version, about = "Heads-up hold'em advisor: hand strength, equity, and action mix.")]
struct Cli {
    /// Settings file (JSON) with default iteration counts
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log engine progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate 5 to 7 cards and show the best five
    Eval {
        /// Cards (e.g., AsKsQsJsTs or AhKd7c7s2h9d)
        cards: String,
    },
    /// Monte Carlo equity of a hand against a known or random hand
    Equity {
        /// Your hand (e.g., AhAs)
        hand1: String,
        /// "vs" keyword (optional)
        versus: Option<String>,
        /// Opponent hand (e.g., KsKd); omit for a random opponent
        hand2: Option<String>,
        /// Board cards (e.g., AsKd5c)
        #[arg(short, long)]
        board: Option<String>,
        /// Number of simulations (defaults to the settings file)
        #[arg(short = 'n', long)]
        sims: Option<usize>,
        /// Seed for a reproducible run
        #[arg(long, conflicts_with = "parallel")]
        seed: Option<u64>,
        /// Spread the simulation across all cores
        #[arg(long)]
        parallel: bool,
    },
    /// Recommend an action mix for a spot
    Solve {
        /// Your hole cards (e.g., AhKs)
        hand: String,
        /// Your position (BTN, CO, MP, UTG, SB, BB)
        position: String,
        /// Board cards; omit for preflop
        #[arg(short, long)]
        board: Option<String>,
        /// Current pot size
        #[arg(long, default_value = "100")]
        pot: f64,
        /// Bet facing you
        #[arg(long, default_value = "75")]
        bet: f64,
        /// Effective stack
        #[arg(long, default_value = "1000")]
        stack: f64,
        /// Equity iterations (defaults to the settings file)
        #[arg(short = 'n', long)]
        iterations: Option<usize>,
        /// Seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,
        /// Print the recommendation list as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the default opening range for a position
    Range {
        /// Position (BTN, CO, MP, UTG, SB, BB)
        position: String,
    },
}

pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if let Err(e) = dispatch(cli) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn dispatch(cli: Cli) -> GtoResult<()> {
    let settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    match cli.command {
        Commands::Eval { cards } => cmd_eval(&cards),
        Commands::Equity {
            hand1,
            versus,
            hand2,
            board,
            sims,
            seed,
            parallel,
        } => {
            // Accept "gto equity AhAs vs KsKd" as well as "gto equity AhAs KsKd".
            let opponent = match (hand2, versus) {
                (None, Some(v)) if !v.eq_ignore_ascii_case("vs") => Some(v),
                (h2, _) => h2,
            };
            let sims = sims.unwrap_or(settings.equity_iterations);
            cmd_equity(&hand1, opponent.as_deref(), board.as_deref(), sims, seed, parallel, &settings)
        }
        Commands::Solve {
            hand,
            position,
            board,
            pot,
            bet,
            stack,
            iterations,
            seed,
            json,
        } => {
            let iterations = iterations.unwrap_or(settings.gto_iterations);
            if iterations == 0 {
                return Err(GtoError::ZeroIterations);
            }
            let hole = parse_hole_cards(&hand)?;
            let board = parse_optional_board(board.as_deref())?;
            let all: Vec<Card> = hole.iter().chain(&board).copied().collect();
            if let Some(dup) = find_duplicate(&all) {
                return Err(GtoError::DuplicateCard(dup));
            }
            let state = GameState::new(
                hole.to_vec(),
                board,
                position.parse()?,
                pot,
                bet,
                stack,
            );
            cmd_solve(&state, iterations, seed, json)
        }
        Commands::Range { position } => cmd_range(position.parse()?),
    }
}

fn parse_optional_board(board: Option<&str>) -> GtoResult<Vec<Card>> {
    let cards = match board {
        Some(b) => parse_board(b)?,
        None => Vec::new(),
    };
    if !matches!(cards.len(), 0 | 3 | 4 | 5) {
        return Err(GtoError::InvalidBoardSize(cards.len()));
    }
    Ok(cards)
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

fn cmd_eval(notation: &str) -> GtoResult<()> {
    let cards = parse_board(notation)?;
    if let Some(dup) = find_duplicate(&cards) {
        return Err(GtoError::DuplicateCard(dup));
    }
    let hand = evaluate_hand(&cards)?;

    println!();
    println!("  {}", board_display(&cards));
    println!("  {} {}", hand.name().bold(), format!("(score {})", hand.score).dimmed());
    if let Some((five, _)) = best_five(&cards) {
        print_section("Best five", &board_display(&five));
    }
    println!();
    Ok(())
}

fn cmd_equity(
    hand: &str,
    opponent: Option<&str>,
    board: Option<&str>,
    sims: usize,
    seed: Option<u64>,
    parallel: bool,
    settings: &Settings,
) -> GtoResult<()> {
    let hero = parse_hole_cards(hand)?;
    let villain: Vec<Card> = match opponent {
        Some(h) => parse_hole_cards(h)?.to_vec(),
        None => Vec::new(),
    };
    let board = parse_optional_board(board)?;

    let all: Vec<Card> = hero.iter().chain(&villain).chain(&board).copied().collect();
    if let Some(dup) = find_duplicate(&all) {
        return Err(GtoError::DuplicateCard(dup));
    }
    if sims == 0 {
        return Err(GtoError::ZeroIterations);
    }

    let villain_label = opponent.unwrap_or("random");
    let board_str = if board.is_empty() {
        String::new()
    } else {
        format!(" on {}", board_display(&board))
    };
    println!();
    println!("  {} vs {}{}", hand.bold(), villain_label.bold(), board_str);
    println!("  Running {} simulations...\n", sims.to_string().bold());

    let result = if parallel {
        calculate_equity_parallel(&hero, &villain, &board, sims)
    } else {
        calculate_equity_with_rng(&hero, &villain, &board, sims, &mut seeded_rng(seed))
    };

    if settings.show_equity_percentage {
        println!("  Hero:    {}", equity_bar(result.equity(), 30));
        println!("  Villain: {}", equity_bar(1.0 - result.equity(), 30));
        println!();
    }
    println!("{}", equity_table(&result));
    println!();
    Ok(())
}

fn cmd_solve(state: &GameState, iterations: usize, seed: Option<u64>, json: bool) -> GtoResult<()> {
    let mut rng = seeded_rng(seed);
    let recs = solve_for_gto_with_rng(state, iterations, &mut rng);

    if json {
        println!("{}", serde_json::to_string_pretty(&recs)?);
        return Ok(());
    }

    let street = match state.community_cards.len() {
        0 => "Preflop",
        3 => "Flop",
        4 => "Turn",
        _ => "River",
    };
    let class = simplify_hand(&state.player_cards)?;
    println!();
    println!(
        "  {} ({}) {} {}",
        board_display(&state.player_cards),
        class.bold(),
        state.position.to_string().cyan().bold(),
        street.dimmed()
    );
    if !state.community_cards.is_empty() {
        println!("  Board: {}", board_display(&state.community_cards));
    } else {
        println!("  Tier: {}", tier_of(&state.player_cards)?);
    }
    println!();
    println!("{}", recommendation_table(&recs));

    let odds = pot_odds(state.pot_size, state.bet_size);
    println!("{}", odds_table(state.pot_size, state.bet_size, odds, mdf(state.pot_size, state.bet_size)));
    if let Ok(ratio) = spr(state.stack_size, state.pot_size) {
        print_section(&ratio.to_string(), ratio.guidance);
    }
    println!();
    Ok(())
}

fn cmd_range(position: Position) -> GtoResult<()> {
    let hands = default_range(position);
    let title = format!(
        "{} opening range: {} hands, {} combos",
        position,
        hands.len(),
        range_combos(hands)
    );
    println!();
    println!("{}", range_grid(hands, &title));
    println!();
    Ok(())
}
