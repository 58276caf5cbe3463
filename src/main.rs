use clap::{Parser, Subcommand};
use flexi_logger::Logger;
use go_health_board::{Benchmark, Board, EngineConfig, Player, Point};
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "go_health_board")]
#[command(about = "Go board evaluation engine: benchmark and demo")]
struct Args {
    /// JSON engine configuration; defaults apply to missing fields
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play random games, applying and undoing every move
    Bench {
        #[arg(short, long, default_value_t = 100)]
        games: usize,

        /// Move cap per game; defaults to twice the number of points
        #[arg(long)]
        max_moves: Option<usize>,

        #[arg(long, default_value_t = 123)]
        seed: u32,
    },
    /// Capture a stone in the center and print the evaluation
    Demo,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    Logger::try_with_env_or_str(&args.log_level)?.start()?;

    let config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };

    match args.command {
        Command::Bench { games, max_moves, seed } => {
            let max_moves = max_moves.unwrap_or(2 * config.board_size * config.board_size);
            let mut bench = Benchmark::new(config, seed)?;
            println!("{}", bench.run(games, max_moves)?);
        }
        Command::Demo => demo(config)?,
    }
    Ok(())
}

fn demo(config: EngineConfig) -> Result<(), Box<dyn Error>> {
    let weights = config.weights;
    let mut board = Board::with_config(config)?;
    let center = (board.size() + 1) / 2;
    board.apply_move(Point::new(center, center), Player::White)?;
    for (dr, dc) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
        let row = (center as isize + dr) as usize;
        let col = (center as isize + dc) as usize;
        let record = board.apply_move(Point::new(row, col), Player::Black)?;
        if record.num_captures() > 0 {
            println!("Black captures {} at ({row}, {col})", record.num_captures());
        }
    }
    println!("{board}");
    for group in board.groups_snapshot() {
        println!("{group:?}");
    }
    board.update_life_and_death();
    println!("worth: {:.3}", board.board_worth(&weights));
    println!(
        "final score: black {:.1}, white {:.1}",
        board.final_score(Player::Black),
        board.final_score(Player::White)
    );
    Ok(())
}
