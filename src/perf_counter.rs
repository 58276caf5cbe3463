use log::warn;
use perf_event::events::Hardware;
use perf_event::{Builder, Counter};

/// CPU cycle counter for the benchmark. Falls back to reporting nothing when
/// the kernel refuses perf events (containers, restricted paranoia levels).
pub struct PerfCounter {
    counter: Option<Counter>,
}

impl PerfCounter {
    pub fn new() -> Self {
        let counter = Builder::new()
            .kind(Hardware::CPU_CYCLES)
            .build()
            .map_err(|e| warn!("perf counter unavailable ({e}), cycles will not be reported"))
            .ok();

        PerfCounter { counter }
    }

    pub fn start(&mut self) {
        if let Some(ref mut counter) = self.counter {
            let _ = counter.reset();
            let _ = counter.enable();
        }
    }

    pub fn stop(&mut self) {
        if let Some(ref mut counter) = self.counter {
            let _ = counter.disable();
        }
    }

    /// Cycles counted between `start` and `stop`, or None without a counter.
    pub fn read(&mut self) -> Option<u64> {
        let counter = self.counter.as_mut()?;
        counter
            .read()
            .map_err(|e| warn!("failed to read perf counter: {e}"))
            .ok()
    }
}

impl Default for PerfCounter {
    fn default() -> Self {
        Self::new()
    }
}
