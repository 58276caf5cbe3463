use std::fmt::Write;
use std::time::{Duration, Instant};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Phase {
    ChainUpdate,
    GroupRebuild,
    EyeDetection,
    AbsoluteHealth,
    RelativeHealth,
    EmptyRegions,
    Worth,
}

impl Phase {
    pub const COUNT: usize = 7;

    pub const ALL: [Phase; Phase::COUNT] = [
        Phase::ChainUpdate,
        Phase::GroupRebuild,
        Phase::EyeDetection,
        Phase::AbsoluteHealth,
        Phase::RelativeHealth,
        Phase::EmptyRegions,
        Phase::Worth,
    ];

    fn name(self) -> &'static str {
        match self {
            Phase::ChainUpdate => "chain update",
            Phase::GroupRebuild => "group rebuild",
            Phase::EyeDetection => "eye detection",
            Phase::AbsoluteHealth => "absolute health",
            Phase::RelativeHealth => "relative health",
            Phase::EmptyRegions => "empty regions",
            Phase::Worth => "worth",
        }
    }
}

#[derive(Copy, Clone, Debug, Default)]
pub struct PhaseStat {
    pub calls: u64,
    pub elapsed: Duration,
}

/// Per-phase call counts and timings of board evaluation. Owned by the
/// caller and passed into the evaluating board operations.
#[derive(Clone, Debug, Default)]
pub struct EvalStats {
    phases: [PhaseStat; Phase::COUNT],
}

#[must_use]
pub struct PhaseTimer {
    phase: Phase,
    start: Instant,
}

impl EvalStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&self, phase: Phase) -> PhaseTimer {
        PhaseTimer {
            phase,
            start: Instant::now(),
        }
    }

    pub fn stop(&mut self, timer: PhaseTimer) {
        let stat = &mut self.phases[timer.phase as usize];
        stat.calls += 1;
        stat.elapsed += timer.start.elapsed();
    }

    pub fn get(&self, phase: Phase) -> PhaseStat {
        self.phases[phase as usize]
    }

    pub fn merge(&mut self, other: &EvalStats) {
        for (mine, theirs) in self.phases.iter_mut().zip(&other.phases) {
            mine.calls += theirs.calls;
            mine.elapsed += theirs.elapsed;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn report(&self) -> String {
        let mut out = String::new();
        for phase in Phase::ALL {
            let stat = self.get(phase);
            let _ = writeln!(
                out,
                "{:>16}: {:>9} calls {:>12.3} ms",
                phase.name(),
                stat.calls,
                stat.elapsed.as_secs_f64() * 1000.0
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timers_accumulate_per_phase() {
        let mut stats = EvalStats::new();
        for _ in 0..3 {
            let timer = stats.start(Phase::EyeDetection);
            stats.stop(timer);
        }
        assert_eq!(stats.get(Phase::EyeDetection).calls, 3);
        assert_eq!(stats.get(Phase::Worth).calls, 0);

        let mut total = EvalStats::new();
        total.merge(&stats);
        total.merge(&stats);
        assert_eq!(total.get(Phase::EyeDetection).calls, 6);
        assert!(total.report().contains("eye detection"));
    }
}
