use crate::board::{Board, MoveRecord};
use crate::config::EngineConfig;
use crate::error::{ConfigError, InvariantViolation};
use crate::fast_random::FastRandom;
use crate::perf_counter::PerfCounter;
use crate::stats::EvalStats;
use crate::types::Player;
use log::{debug, info, trace};
use std::time::Instant;

/// Plays random games on a board, evaluating the worth after every move and
/// then undoing the whole game, to time move application end to end.
pub struct Benchmark {
    empty_board: Board,
    board: Board,
    random: FastRandom,
    seed: u32,
    stats: EvalStats,
    move_count: usize,
    worth_sum: f64,
}

impl Benchmark {
    pub fn new(config: EngineConfig, seed: u32) -> Result<Self, ConfigError> {
        let empty_board = Board::with_config(config)?;
        Ok(Benchmark {
            board: empty_board.clone(),
            empty_board,
            random: FastRandom::new(seed),
            seed,
            stats: EvalStats::new(),
            move_count: 0,
            worth_sum: 0.0,
        })
    }

    pub fn stats(&self) -> &EvalStats {
        &self.stats
    }

    /// Plays one game of at most `max_moves` moves and takes all of it back.
    /// Returns the number of moves played, passes included.
    pub fn play_game(&mut self, max_moves: usize) -> Result<usize, InvariantViolation> {
        self.board.clone_from(&self.empty_board);
        let weights = self.board.config().weights;
        let mut records: Vec<MoveRecord> = Vec::new();
        let mut player = Player::Black;
        let mut passes = 0;

        while records.len() < max_moves && passes < 2 {
            let mut candidates = self.board.legal_candidates();
            self.random.shuffle(&mut candidates);
            let mut played = None;
            for point in candidates {
                match self.board.apply_move_with_stats(point, player, &mut self.stats) {
                    Ok(record) => {
                        played = Some(record);
                        break;
                    }
                    Err(reason) => trace!("{reason}"),
                }
            }
            let record = match played {
                Some(record) => {
                    passes = 0;
                    record
                }
                None => {
                    passes += 1;
                    self.board.apply_pass_with_stats(player, &mut self.stats)
                }
            };
            self.worth_sum += self.board.board_worth_with_stats(&weights, &mut self.stats);
            records.push(record);
            player = player.opponent();
        }

        let moves = records.len();
        debug!(
            "game over after {} moves, captures {}/{}\n{}",
            moves,
            self.board.captures(Player::Black),
            self.board.captures(Player::White),
            self.board
        );
        while let Some(record) = records.pop() {
            self.board.undo_move_with_stats(&record, &mut self.stats)?;
        }
        Ok(moves)
    }

    pub fn run(&mut self, games: usize, max_moves: usize) -> Result<String, InvariantViolation> {
        self.move_count = 0;
        self.worth_sum = 0.0;
        self.random = FastRandom::new(self.seed);
        self.stats.reset();

        let mut perf_counter = PerfCounter::new();
        perf_counter.start();
        let start = Instant::now();

        for game in 0..games {
            let moves = self.play_game(max_moves)?;
            trace!("game {game}: {moves} moves");
            self.move_count += moves;
        }

        let duration = start.elapsed();
        perf_counter.stop();
        let perf_cycles = perf_counter.read();

        let seconds = duration.as_secs_f64();
        // Each move is applied and undone once.
        let moves_per_sec = 2.0 * self.move_count as f64 / seconds;
        let cc_per_move = match perf_cycles {
            Some(cycles) if self.move_count > 0 => {
                format!("{:.1}", cycles as f64 / self.move_count as f64)
            }
            _ => "N/A".to_string(),
        };
        info!("{games} games, {} moves in {seconds:.3}s", self.move_count);

        Ok(format!(
            "\n{} games on {}x{}\n\
             in {:.6} seconds => {:.1} moves/s (apply + undo)\n\
             CC/move (perf counter): {}\n\
             AVG moves/game = {:.3}\n\
             AVG worth = {:.3}\n\
             {}",
            games,
            self.board.size(),
            self.board.size(),
            seconds,
            moves_per_sec,
            cc_per_move,
            self.move_count as f64 / games.max(1) as f64,
            self.worth_sum / self.move_count.max(1) as f64,
            self.stats.report()
        ))
    }
}
