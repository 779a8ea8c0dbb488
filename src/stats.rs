use std::fmt;
use std::time::{Duration, Instant};

/// Wall-clock timing for one simulation run
#[derive(Debug)]
pub struct RunStats {
    started: Instant,
    generations: u32,
}

impl RunStats {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            generations: 0,
        }
    }

    pub fn record(&mut self) {
        self.generations += 1;
    }

    #[inline]
    pub fn generations(&self) -> u32 {
        self.generations
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn report(&self, faults: u32) -> RunReport {
        RunReport {
            generations: self.generations,
            elapsed: self.elapsed(),
            faults,
        }
    }
}

impl Default for RunStats {
    fn default() -> Self {
        Self::new()
    }
}

/// End-of-run summary printed once the generation loop finishes
#[derive(Debug, Clone)]
pub struct RunReport {
    pub generations: u32,
    pub elapsed: Duration,
    pub faults: u32,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.elapsed.as_secs_f64();
        let rate = if secs > 0.0 {
            self.generations as f64 / secs
        } else {
            0.0
        };
        write!(
            f,
            "{} generations in {} milliseconds ({:.02} gen/s)",
            self.generations,
            self.elapsed.as_millis(),
            rate
        )?;
        if self.faults > 0 {
            write!(f, ", neighbor faults: {}", self.faults)?;
        }
        Ok(())
    }
}
