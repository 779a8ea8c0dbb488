use crate::engine::GameOfLife;
use crate::grid::Grid;
use crate::render::{Frame, Render};
use crate::stats::{RunReport, RunStats};
use std::io;
use std::thread;
use std::time::Duration;

/// Number of generations a run performs by default
pub const MAX_GENERATIONS: u32 = 100;
/// Default pause between generations, for human-paced observation
pub const STEP_DELAY_MS: u64 = 350;

#[derive(Debug, Clone, Copy)]
pub struct Config {
    pub max_generations: u32,
    pub step_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_generations: MAX_GENERATIONS,
            step_delay: Duration::from_millis(STEP_DELAY_MS),
        }
    }
}

/// Drives a fixed number of generations over an exclusively-owned engine,
/// handing each snapshot to a display collaborator.
#[derive(Debug)]
pub struct Simulation {
    game: GameOfLife,
    config: Config,
    stats: RunStats,
}

impl Simulation {
    pub fn new(seed: Grid, config: Config) -> Self {
        Self {
            game: GameOfLife::from_seed(seed),
            config,
            stats: RunStats::new(),
        }
    }

    #[inline]
    pub fn game(&self) -> &GameOfLife {
        &self.game
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.game.generation() >= self.config.max_generations
    }

    /// Advances one generation without pausing; returns false once the
    /// configured generation count is reached
    ///
    /// Pull-based displays (the window) call this on their own clock.
    pub fn tick(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        self.game.step();
        self.stats.record();
        !self.is_done()
    }

    /// Runs the whole simulation against a display collaborator
    ///
    /// Each generation is rendered before it is stepped, so the seed itself
    /// is the first frame shown. Terminates after exactly
    /// `config.max_generations` iterations; there is no convergence check.
    pub fn run(&mut self, display: &mut dyn Render) -> io::Result<RunReport> {
        while !self.is_done() {
            display.render(&Frame::new(&self.game))?;
            self.tick();
            if !self.config.step_delay.is_zero() {
                thread::sleep(self.config.step_delay);
            }
        }
        Ok(self.report())
    }

    pub fn report(&self) -> RunReport {
        self.stats.report(self.game.fault_count())
    }
}
