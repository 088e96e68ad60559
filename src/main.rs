use std::sync::mpsc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use raylib::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod assets;
mod beam;
mod config;
mod constants;
mod controller;
mod element;
mod engine;
mod error;
mod layout;
mod stage;
mod state;
mod timer;

use crate::assets::AssetLayout;
use crate::beam::BreakBeam;
use crate::config::{Config, read_bin_type};
use crate::constants::*;
use crate::controller::DisplayController;
use crate::layout::StageLayout;
use crate::stage::Stage;

fn screen_layout(rl: &RaylibHandle) -> StageLayout {
    StageLayout::for_screen(rl.get_screen_width() as f32, rl.get_screen_height() as f32)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Leaves the failure on screen for a moment so it is visible on the kiosk itself.
fn show_startup_error(rl: &mut RaylibHandle, thread: &RaylibThread, err: &anyhow::Error) {
    error!(error = %format!("{err:#}"), "startup failed");
    let mut d = rl.begin_drawing(thread);
    d.clear_background(Color::BLACK);
    d.draw_text(&format!("Error: {err:#}"), 20, 20, 20, Color::RED);
    drop(d);
    std::thread::sleep(Duration::from_secs(5));
}

fn main() -> Result<()> {
    init_tracing();
    let config = Config::parse();

    let bin_type = read_bin_type(&config.bin_type_file).context("Failed to determine bin type")?;
    let assets = AssetLayout::new(&config.images_root, &bin_type);
    info!(bin_type = %bin_type, assets = %assets.base().display(), "starting kiosk");

    let mut builder = raylib::init();
    builder.title("Smart Waste Bin").vsync();
    if config.windowed {
        builder.size(WINDOWED_WIDTH, WINDOWED_HEIGHT).resizable();
    } else {
        // Zero size lets raylib pick the monitor resolution
        builder.size(0, 0).fullscreen();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    rl.hide_cursor();

    let mut layout = screen_layout(&rl);

    let loaded = Stage::load(&mut rl, &thread, &assets)
        .with_context(|| format!("Failed to load assets for bin type '{}'", bin_type))
        .and_then(|stage| {
            let (idle, dialogs) = stage.paths();
            info!(idle = idle.len(), dialogs = dialogs.len(), "assets loaded");
            let controller = DisplayController::new(idle, dialogs, &layout)?;
            Ok((stage, controller))
        });
    let (stage, mut controller) = match loaded {
        Ok(loaded) => loaded,
        Err(e) => {
            show_startup_error(&mut rl, &thread, &e);
            return Err(e);
        }
    };

    let (tx, rx) = mpsc::channel();
    let _beam = BreakBeam::new().spawn(tx);

    while !rl.window_should_close() {
        for _ in rx.try_iter() {
            let dialog = controller.on_detection();
            info!(dialog, "detection");
        }
        if rl.is_window_resized() {
            layout = screen_layout(&rl);
            controller.relayout(&layout);
            info!(width = layout.screen.x, height = layout.screen.y, "window resized");
        }
        controller.update(rl.get_frame_time());

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::WHITE);
        let mut canvas = stage.canvas(&mut d, layout.screen);
        controller.render(&mut canvas);
    }

    info!("window closed");
    Ok(())
}
