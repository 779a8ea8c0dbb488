use std::time::Duration;

use gridlife::seed::{self, SeedSource};
use gridlife::{gui, sim};

pub struct Args {
    matches: getopts::Matches,
}

impl Args {
    fn new<T: AsRef<str>>(args: &[T]) -> Option<Self> {
        let mut opts = getopts::Options::new();
        opts.optflag("", "help", "print this help menu");
        opts.optflag("w", "window", "render generations in a window");
        opts.optopt("g", "gens", "max number of generations", "COUNT");
        opts.optopt(
            "s",
            "sleep",
            "the amount of time to sleep between generations",
            "MILLIS",
        );
        opts.optopt("f", "fill", "seed fill type (fixed, random, empty)", "TYPE");
        opts.optopt("", "width", "grid width for generated fills", "COLS");
        opts.optopt("", "height", "grid height for generated fills", "ROWS");
        opts.optopt("t", "tile", "cell tile size in pixels (window mode)", "PX");
        opts.optopt("i", "input", "read the seed from an RLE file", "FILE");
        opts.optopt("o", "output", "write the final grid to an RLE file", "FILE");

        let matches = opts.parse(args.iter().map(T::as_ref)).unwrap();
        if matches.opt_present("help") {
            println!("{}", opts.usage("usage: gridlife [options]"));
            None
        } else {
            Some(Self { matches })
        }
    }
    pub fn from_env() -> Option<Self> {
        let env = std::env::args().collect::<Vec<_>>();
        Self::new(&env[1..])
    }

    fn width(&self) -> Option<usize> {
        self.matches.opt_get("width").unwrap()
    }
    fn height(&self) -> Option<usize> {
        self.matches.opt_get("height").unwrap()
    }

    pub fn window(&self) -> bool {
        self.matches.opt_present("window")
    }

    pub fn generations(&self) -> u32 {
        self.matches
            .opt_get("gens")
            .unwrap()
            .unwrap_or(sim::MAX_GENERATIONS)
    }
    pub fn sleep(&self) -> Duration {
        let millis = self
            .matches
            .opt_get("sleep")
            .unwrap()
            .unwrap_or(sim::STEP_DELAY_MS);
        Duration::from_millis(millis)
    }

    /// Grid dimensions for the generated fills, as (rows, cols)
    pub fn grid_size(&self) -> (usize, usize) {
        (
            self.height().unwrap_or(seed::SEED_ROWS),
            self.width().unwrap_or(seed::SEED_COLS),
        )
    }
    pub fn fill_mode(&self) -> SeedSource {
        let mode_str = self.matches.opt_str("fill");
        SeedSource::new(mode_str.as_deref().unwrap_or("fixed")).expect("valid fill mode string")
    }

    pub fn tile_size(&self) -> f32 {
        self.matches
            .opt_get("tile")
            .unwrap()
            .unwrap_or(gui::TILE_SIZE + 2.0 * gui::TILE_PADDING)
    }

    pub fn input_file(&self) -> Option<String> {
        self.matches.opt_str("input")
    }
    pub fn output_file(&self) -> Option<String> {
        self.matches.opt_str("output")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Args {
        Args::new(list).expect("args parse")
    }

    #[test]
    fn fill_mode_parses() {
        assert!(matches!(
            args(&["--fill", "random"]).fill_mode(),
            SeedSource::Random
        ));
        assert!(matches!(args(&[]).fill_mode(), SeedSource::Fixed));
    }

    #[test]
    fn generations_default_to_one_hundred() {
        assert_eq!(args(&[]).generations(), 100);
        assert_eq!(args(&["--gens", "12"]).generations(), 12);
    }

    #[test]
    fn sleep_defaults_to_350ms() {
        assert_eq!(args(&[]).sleep(), Duration::from_millis(350));
        assert_eq!(args(&["-s", "10"]).sleep(), Duration::from_millis(10));
    }

    #[test]
    fn grid_size_defaults_to_seed_dimensions() {
        assert_eq!(args(&[]).grid_size(), (23, 23));
        assert_eq!(
            args(&["--width", "40", "--height", "30"]).grid_size(),
            (30, 40)
        );
    }

    #[test]
    fn window_mode_is_opt_in() {
        assert!(!args(&[]).window());
        assert!(args(&["-w"]).window());
    }

    #[test]
    fn tile_size_defaults_to_image_plus_padding() {
        assert_eq!(args(&[]).tile_size(), 31.0);
        assert_eq!(args(&["--tile", "12"]).tile_size(), 12.0);
    }
}
