#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

mod app;

use clickgate::{Args, DataPath, DataPathType};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::app::DemoApp;

fn setup_logging(path: &DataPath) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_appender::{
        non_blocking,
        rolling::{RollingFileAppender, Rotation},
    };
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let file_appender = RollingFileAppender::new(
        Rotation::DAILY,
        path.path(DataPathType::Log),
        format!("clickgate-{}.log", env!("CARGO_PKG_VERSION")),
    );
    let (non_blocking_writer, guard) = non_blocking(file_appender);

    // Log to stdout (if you run with `RUST_LOG=debug`).
    let console_layer = fmt::layer().with_target(true).with_writer(std::io::stdout);

    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(non_blocking_writer);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("clickgate=info,clickgate_demo=info"));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .with(env_filter)
        .init();

    guard
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (parsed_args, unrecognized_args) = Args::parse(&args);

    let path = match &parsed_args.datapath {
        Some(datapath) => DataPath::new(datapath),
        None => DataPath::default(),
    };

    // need guard to live for lifetime of program
    let _log_guard = setup_logging(&path);

    for arg in &unrecognized_args {
        warn!("unrecognized argument: {arg}");
    }
    if parsed_args.debug {
        info!("debug mode, data path {:?}", path.path(DataPathType::Setting));
    }

    let interval = parsed_args.click_interval;
    let res = eframe::run_native(
        "clickgate demo",
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default().with_inner_size([420.0, 240.0]),
            ..Default::default()
        },
        Box::new(move |cc| Ok(Box::new(DemoApp::new(&cc.egui_ctx, &path, interval)))),
    );

    if let Err(e) = res {
        error!("eframe exited with error: {e}");
    }
}
