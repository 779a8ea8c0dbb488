use std::{error::Error, fs};

mod options;

use gridlife::enc::{GridCodec, RunLengthEncoded};
use gridlife::gui;
use gridlife::render::TextRender;
use gridlife::sim::{Config, Simulation};

fn main() -> Result<(), Box<dyn Error>> {
    let Some(args) = options::Args::from_env() else {
        // --help already printed the usage
        return Ok(());
    };

    // setup: load the seed and derive the run configuration
    let seed = match args.input_file() {
        Some(file) => {
            let encoded = fs::read_to_string(file)?;
            RunLengthEncoded::default().decode(&encoded)?
        }
        None => {
            let (rows, cols) = args.grid_size();
            args.fill_mode().create_grid(rows, cols)?
        }
    };
    println!(
        "seed: {}x{}, {} live",
        seed.rows(),
        seed.cols(),
        seed.live_count()
    );

    let config = Config {
        max_generations: args.generations(),
        step_delay: args.sleep(),
    };

    if args.window() {
        // the window owns the run and keeps the process alive until closed
        gui::run(seed, config, args.tile_size())?;
        return Ok(());
    }

    let mut sim = Simulation::new(seed, config);
    let mut display = TextRender::new()?;
    let report = sim.run(&mut display)?;
    // restore the cursor before the final report
    drop(display);
    println!("{report}");

    if let Some(file) = args.output_file() {
        let encoder = RunLengthEncoded::default().set_name("gridlife final state");
        fs::write(file, encoder.encode(sim.game().grid()))?;
    }

    Ok(())
}
