mod strategy;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use quint_core::dice::{Die, MAX_ROLLS};
use quint_core::game::Game;
use quint_core::scoring;
use quint_core::turn::Turn;

/// quint-sim - headless autoplay harness for the quint rules engine
#[derive(Parser, Debug)]
#[command(name = "quint-sim", version, about)]
struct Args {
    /// Number of players per game
    #[arg(short, long, default_value_t = 2)]
    players: usize,

    /// Number of games to play
    #[arg(short, long, default_value_t = 1)]
    games: u32,

    /// RNG seed; random when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Rolls allowed per turn (the engine leaves the cap to the caller)
    #[arg(long, default_value_t = MAX_ROLLS)]
    max_rolls: u8,

    /// Print the summary as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct Summary {
    games: u32,
    players: usize,
    wins_by_player: Vec<u32>,
    ties: u32,
    mean_winning_score: f64,
    min_winning_score: u32,
    max_winning_score: u32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quint_sim=info".into()),
        )
        .init();

    let args = Args::parse();
    let players = args.players.max(1);
    let games = args.games.max(1);
    let max_rolls = args.max_rolls.max(1);

    let mut die = match args.seed {
        Some(seed) => Die::new(StdRng::seed_from_u64(seed)),
        None => Die::from_entropy(),
    };

    tracing::info!(
        "playing {} game(s) with {} player(s), up to {} roll(s) per turn",
        games,
        players,
        max_rolls
    );

    let mut wins_by_player = vec![0u32; players];
    let mut ties = 0u32;
    let mut winning_scores = Vec::with_capacity(games as usize);

    for game_no in 1..=games {
        let game = play_game(&mut die, players, max_rolls)?;
        let winner_ids: Vec<u32> = game.winners.iter().map(|w| w.id).collect();
        let top = game.winners.first().map_or(0, |w| w.score);
        winning_scores.push(top);
        if game.winners.len() > 1 {
            ties += 1;
        }
        for winner in &game.winners {
            wins_by_player[(winner.id - 1) as usize] += 1;
        }
        tracing::info!("game {}: winner(s) {:?} with {} points", game_no, winner_ids, top);
    }

    let total: u64 = winning_scores.iter().map(|&s| u64::from(s)).sum();
    let summary = Summary {
        games,
        players,
        wins_by_player,
        ties,
        mean_winning_score: total as f64 / winning_scores.len() as f64,
        min_winning_score: winning_scores.iter().copied().min().unwrap_or(0),
        max_winning_score: winning_scores.iter().copied().max().unwrap_or(0),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }
    Ok(())
}

/// Drive one full match through the engine's public surface.
fn play_game(die: &mut Die<StdRng>, players: usize, max_rolls: u8) -> anyhow::Result<Game> {
    let mut game = Game::new();
    game.create_players(players);

    while !game.is_over() {
        let points = play_turn(die, max_rolls)?;
        let player_id = game.current_player().id;
        game.current_player_mut().add_points(points);
        tracing::debug!(
            "player {} scored {} (total {})",
            player_id,
            points,
            game.current_player().score
        );
        game.next_player();
        game.turns_completed += 1;
    }

    game.determine_winner();
    Ok(game)
}

/// One roll, reroll and score cycle: roll, then reroll per the strategy
/// until it stands pat or the cap is reached.
fn play_turn(die: &mut Die<StdRng>, max_rolls: u8) -> anyhow::Result<u32> {
    let mut turn = Turn::new();
    turn.roll_dice(die);

    while turn.number_of_rolls < max_rolls {
        let picks = strategy::choose_reroll(&turn);
        if picks.is_empty() {
            break;
        }
        turn.reroll_dice(die, &picks)?;
    }

    let points = turn.evaluate_rolls();
    match scoring::classify(&turn.sorted_rolls) {
        Some(combo) => tracing::debug!(
            "hand {:?} is a {} for {}",
            turn.sorted_rolls,
            combo.display_name(),
            points
        ),
        None => tracing::debug!("hand {:?} scores nothing", turn.sorted_rolls),
    }
    Ok(points)
}

fn print_summary(summary: &Summary) {
    println!(
        "Results over {} game(s), {} player(s):",
        summary.games, summary.players
    );
    for (i, wins) in summary.wins_by_player.iter().enumerate() {
        println!("  player {}: {} win(s)", i + 1, wins);
    }
    println!("  ties: {}", summary.ties);
    println!(
        "  winning score: mean {:.1}, min {}, max {}",
        summary.mean_winning_score, summary.min_winning_score, summary.max_winning_score
    );
}
