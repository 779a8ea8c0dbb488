use crate::grid::Grid;
use crate::sim::{Config, Simulation};
use eframe::egui::{self, CentralPanel, Color32, Context, Rect, Sense, Vec2, ViewportBuilder};
use std::time::{Duration, Instant};

/// Side of the square drawn for each cell, in pixels
pub const TILE_SIZE: f32 = 25.0;
/// Gap around each tile
pub const TILE_PADDING: f32 = 3.0;

const LIVE_COLOR: Color32 = Color32::from_rgb(46, 139, 58);
const DEAD_COLOR: Color32 = Color32::from_rgb(228, 228, 228);

/// Window display collaborator
///
/// eframe is pull-based, so instead of receiving pushed frames the app owns
/// the simulation and ticks it from `update` on the configured delay. The
/// window stays open after the run finishes, until the user closes it.
pub struct App {
    sim: Simulation,
    tile: f32,
    last_step: Instant,
    reported: bool,
}

impl App {
    pub fn new(seed: Grid, config: Config, tile: f32) -> Self {
        Self {
            sim: Simulation::new(seed, config),
            tile,
            last_step: Instant::now(),
            reported: false,
        }
    }

    fn advance(&mut self) {
        if self.sim.is_done() {
            if !self.reported {
                self.reported = true;
                println!("{}", self.sim.report());
            }
            return;
        }
        if self.last_step.elapsed() >= self.sim.config().step_delay {
            self.sim.tick();
            self.last_step = Instant::now();
        }
    }
}

/// Opens the window and runs the simulation in it; blocks until the window
/// is closed
pub fn run(seed: Grid, config: Config, tile: f32) -> Result<(), eframe::Error> {
    let canvas = Vec2::new(
        seed.cols() as f32 * tile + 16.0,
        seed.rows() as f32 * tile + 48.0,
    );
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(canvas)
            .with_resizable(false),
        ..Default::default()
    };
    eframe::run_native(
        "Game of Life Cell Display",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(seed, config, tile)))),
    )
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.advance();

        CentralPanel::default()
            .frame(egui::Frame::default().fill(Color32::WHITE))
            .show(ctx, |ui| {
                ui.label(format!("Generation #{}", self.sim.game().generation()));

                let grid = self.sim.game().grid();
                let size = Vec2::new(
                    grid.cols() as f32 * self.tile,
                    grid.rows() as f32 * self.tile,
                );
                let (response, painter) = ui.allocate_painter(size, Sense::hover());
                let origin = response.rect.min;
                let square = self.tile - 2.0 * TILE_PADDING;

                for row in 0..grid.rows() {
                    for col in 0..grid.cols() {
                        let min = egui::pos2(
                            origin.x + col as f32 * self.tile + TILE_PADDING,
                            origin.y + row as f32 * self.tile + TILE_PADDING,
                        );
                        let color = if grid.get(row, col) {
                            LIVE_COLOR
                        } else {
                            DEAD_COLOR
                        };
                        painter.rect_filled(Rect::from_min_size(min, Vec2::splat(square)), 2.0, color);
                    }
                }
            });

        if !self.sim.is_done() {
            // wake up in time for the next tick even with no input events
            let wait = self.sim.config().step_delay.min(Duration::from_millis(50));
            ctx.request_repaint_after(wait);
        }
    }
}
