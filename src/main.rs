//! Gobang GUI
//!
//! Play five-in-a-row against the suggestion engine, or hotseat with hints.

mod args;

use args::Args;
use clap::Parser;
use gobang::ui::GobangApp;
use log::{info, LevelFilter};
use simplelog::{Config, SimpleLogger, WriteLogger};
use std::error::Error;
use std::fs::File;

fn main() -> Result<(), Box<dyn Error>> {
    let args = init()?;
    let settings = args.settings();
    info!("Starting with {:?}", settings);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 680.0])
            .with_min_inner_size([720.0, 540.0])
            .with_title("Gobang"),
        ..Default::default()
    };

    eframe::run_native(
        "Gobang",
        options,
        Box::new(move |cc| Ok(Box::new(GobangApp::new(cc, settings)))),
    )?;

    Ok(())
}

fn init() -> Result<Args, Box<dyn Error>> {
    let args = Args::parse();
    let level = LevelFilter::from(args.log_level);

    match &args.log_file {
        Some(path) => WriteLogger::init(level, Config::default(), File::create(path)?)?,
        None => SimpleLogger::init(level, Config::default())?,
    }

    Ok(args)
}
