// Command-line entry: one state file in, one PNG out.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use cue_sketch::RenderConfig;
use cue_sketch::config::{DEFAULT_OFFSET, DEFAULT_SCALE};

#[derive(Parser, Debug)]
#[command(name = "cue-sketch")]
#[command(version, about = "Render a pool table state file to a PNG with an aim line")]
struct Cli {
    /// Table state file: "<width> <height>" then one "<x> <y> <type>" row per ball
    state_file: PathBuf,

    /// Where to write the PNG
    #[arg(long, short, value_name = "PATH", default_value = "output-image")]
    output: PathBuf,

    /// Pixels per grid unit
    #[arg(long, value_name = "PX", default_value_t = DEFAULT_SCALE)]
    scale: u32,

    /// Margin around the table in pixels
    #[arg(long, value_name = "PX", default_value_t = DEFAULT_OFFSET)]
    offset: u32,

    /// Show the rendered table in a window (ESC to close)
    #[cfg(feature = "preview")]
    #[arg(long)]
    preview: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = RenderConfig::with_geometry(cli.scale, cli.offset);

    match cue_sketch::run(&cli.state_file, &cli.output, &config) {
        #[cfg(feature = "preview")]
        Ok(fb) if cli.preview => match cue_sketch::preview::show("cue-sketch", &fb) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => fail(e),
        },
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => fail(e),
    }
}

fn fail(e: cue_sketch::Error) -> ExitCode {
    log::error!("{e}");
    eprintln!("error: {e}");
    ExitCode::FAILURE
}
