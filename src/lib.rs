//! Core library for a fixed-grid Game of Life simulation.

pub mod enc;
pub mod engine;
pub mod grid;
pub mod gui;
pub mod render;
pub mod seed;
pub mod sim;
pub mod stats;

pub use enc::{GridCodec, Plaintext, RunLengthEncoded};
pub use engine::{FaultLog, GameOfLife};
pub use grid::Grid;
pub use render::{Frame, Render, TextRender};
pub use seed::SeedSource;
pub use sim::{Config, Simulation};
