// SPDX-License-Identifier: MPL-2.0
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use iced_transport::config;
use iced_transport::controls::ControlSurface;
use iced_transport::error::Result;
use iced_transport::infrastructure::{HeadlessMedia, HeadlessWindow};
use iced_transport::script;
use tracing_subscriber::EnvFilter;

const DEFAULT_DURATION_SECS: f64 = 60.0;

const HELP: &str = "\
Replays a control script against a headless video player.

USAGE:
  iced_transport [OPTIONS] [SCRIPT]

ARGS:
  <SCRIPT>              Script file (reads stdin when omitted)

OPTIONS:
  --duration <SECS>     Media duration in seconds [default: 60]
  --config <PATH>       controls.toml to use instead of the user config
  -h, --help            Print help

Set RUST_LOG (e.g. RUST_LOG=iced_transport=debug) for logs on stderr.
";

struct Args {
    duration: f64,
    config: Option<PathBuf>,
    script: Option<PathBuf>,
}

fn parse_args() -> std::result::Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let parsed = Args {
        duration: args
            .opt_value_from_str("--duration")?
            .unwrap_or(DEFAULT_DURATION_SECS),
        config: args.opt_value_from_str("--config")?,
        script: args.opt_free_from_str()?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unused arguments");
    }
    Ok(Some(parsed))
}

fn run(args: &Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => config::load_from_path(path)?,
        None => config::load()?,
    };

    let source = match &args.script {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut source = String::new();
            std::io::stdin().read_to_string(&mut source)?;
            source
        }
    };
    let commands = script::parse(&source)?;

    let mut surface = ControlSurface::mount(
        HeadlessMedia::with_duration(args.duration),
        HeadlessWindow::default(),
        &config,
    );
    surface.settle();
    println!("{}", surface.view());

    for command in &commands {
        surface.run(command);
        println!("{command:?} -> {}", surface.view());
    }

    surface.unmount();
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(?err, "driver failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
