use std::{path::PathBuf, process, sync::Arc};

use clap::Parser;
use egui::Vec2;
use log::error;

use padboard::records::RecordStore;
use padboard::ui::{DashboardApp, config::AppConfig};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the launch records CSV file
    #[arg(short, long, default_value = "data/spacex_launch_dash.csv")]
    data: PathBuf,
}

fn main() {
    colog::init();

    let args = Args::parse();
    ctrlc::set_handler(move || {
        println!("Exiting...");
        std::process::exit(0);
    })
    .expect("Could not set Ctrl-C handler");

    // The dataset either loads fully or the process does not start.
    let store = match RecordStore::load(&args.data) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            error!("Could not load launch records: {}", e);
            process::exit(1);
        }
    };

    let app_config = AppConfig::from_local_file().unwrap_or_default();

    let mut native_options = eframe::NativeOptions::default();
    native_options.viewport = native_options
        .viewport
        .with_inner_size(Vec2::new(
            app_config.window_width,
            app_config.window_height,
        ))
        .with_position(app_config.window_position.clone());

    eframe::run_native(
        "SpaceX Launch Records Dashboard",
        native_options,
        Box::new(move |cc| Ok(Box::new(DashboardApp::new(store, app_config, cc)))),
    )
    .expect("could not start app");
}
