#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};
#[cfg(feature = "std")]
use std::path::{Path, PathBuf};
#[cfg(feature = "std")]
use std::time::Instant;

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[cfg(feature = "std")]
use slidepuzzle::{
    init_logging, is_solvable, parse_key, render_board, shuffled_tiles, slide, Direction, Event,
    Leaderboard, PuzzleEngine, DEFAULT_GRID_SIZE, DEFAULT_TILE_EXTENT,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play interactively in the terminal (w/a/s/d to slide, q to quit).
    Play {
        #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
        size: usize,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(
            long,
            default_value = "puzzle_scores.json",
            help = "Leaderboard file to read and update"
        )]
        scores: PathBuf,
    },
    /// Drive a game with random slides and report the outcome.
    Sim {
        #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
        size: usize,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 1000)]
        max_moves: usize,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Play { size, seed, scores } => play(size, seed, &scores),
        Commands::Sim {
            size,
            seed,
            max_moves,
        } => sim(size, seed, max_moves),
    }
}

#[cfg(feature = "std")]
fn rng_from_seed(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn start_game(engine: &mut PuzzleEngine, rng: &mut SmallRng, size: usize) -> anyhow::Result<()> {
    // keep shuffling until the layout can actually be slid back home
    let tiles = loop {
        let tiles = shuffled_tiles(rng, size);
        if is_solvable(&tiles, size) {
            break tiles;
        }
    };
    engine
        .new_game(size, tiles, DEFAULT_TILE_EXTENT)
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}

#[cfg(feature = "std")]
fn play(size: usize, seed: Option<u64>, scores: &Path) -> anyhow::Result<()> {
    let mut rng = rng_from_seed(seed);
    let mut engine = PuzzleEngine::new();
    start_game(&mut engine, &mut rng, size)?;
    let mut board_file = Leaderboard::load(scores)?;

    println!("Slide tiles with w/a/s/d; q quits.");
    let stdin = io::stdin();
    let mut last_input = Instant::now();
    'game: loop {
        println!("\n{}", render_board(&engine));
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        engine.tick(last_input.elapsed().as_millis() as u64, None);
        last_input = Instant::now();

        for key in line.trim().chars() {
            if key == 'q' {
                break 'game;
            }
            let Some(dir) = parse_key(key) else {
                continue;
            };
            slide(&mut engine, dir);
            for event in engine.take_events() {
                if let Event::Solved { play_time_ms } = event {
                    println!("\n{}", render_board(&engine));
                    println!("Solved in {:.1} s!", play_time_ms as f64 / 1000.0);
                    record_score(&mut board_file, scores, play_time_ms)?;
                    break 'game;
                }
            }
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn record_score(board: &mut Leaderboard, path: &Path, play_time_ms: u64) -> anyhow::Result<()> {
    print!("Your name for the leaderboard (blank to skip): ");
    io::stdout().flush()?;
    let mut name = String::new();
    io::stdin().lock().read_line(&mut name)?;
    let name = name.trim();
    if name.is_empty() {
        return Ok(());
    }
    board.record(name, play_time_ms);
    board.save(path)?;
    println!("Leaderboard:");
    for (rank, entry) in board.ranked() {
        println!(
            "{:>3}. {:<20} {:>8.1} s",
            rank,
            entry.name,
            entry.play_time_ms as f64 / 1000.0
        );
    }
    Ok(())
}

#[cfg(feature = "std")]
fn sim(size: usize, seed: Option<u64>, max_moves: usize) -> anyhow::Result<()> {
    use rand::Rng;

    let mut rng = rng_from_seed(seed);
    let mut engine = PuzzleEngine::new();
    start_game(&mut engine, &mut rng, size)?;
    println!("{}", render_board(&engine));

    let mut moves_made = 0usize;
    for _ in 0..max_moves {
        let dir = match rng.random_range(0..4) {
            0 => Direction::Up,
            1 => Direction::Down,
            2 => Direction::Left,
            _ => Direction::Right,
        };
        engine.tick(16, None);
        if !slide(&mut engine, dir) {
            continue;
        }
        moves_made += 1;
        if engine
            .take_events()
            .iter()
            .any(|event| matches!(event, Event::Solved { .. }))
        {
            println!("{}", render_board(&engine));
            println!("Solved after {} slides.", moves_made);
            return Ok(());
        }
    }
    println!("{}", render_board(&engine));
    println!("Gave up after {} slides without solving.", moves_made);
    Ok(())
}
