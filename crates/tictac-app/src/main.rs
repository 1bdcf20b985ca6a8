//! Two-player tic-tac-toe in a single 800x600 window.

mod app;
mod compose;
mod fonts;
mod input_map;
mod layout;

use anyhow::Result;
use tictac_engine::device::GpuInit;
use tictac_engine::logging::{init_logging, LoggingConfig};
use tictac_engine::window::{Runtime, RuntimeConfig};
use winit::dpi::LogicalSize;

use crate::app::TicTacToeApp;
use crate::layout::{LAYOUT_HEIGHT, LAYOUT_WIDTH};

fn main() {
    init_logging(LoggingConfig::default());

    if let Err(e) = run() {
        log::error!("fatal: {e:#}");
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let candidates = fonts::default_candidates();
    let atlas = fonts::load_atlas(candidates.as_slice());

    let config = RuntimeConfig {
        title: "Tic Tac Toe".to_string(),
        initial_size: LogicalSize::new(f64::from(LAYOUT_WIDTH), f64::from(LAYOUT_HEIGHT)),
        ..RuntimeConfig::default()
    };

    let app = TicTacToeApp::new(atlas);
    Runtime::run(config, GpuInit::default(), app)?;

    log::info!("window closed");
    Ok(())
}
