mod script;

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use clap::{Args, Parser, Subcommand};
use scene::config::EditorConfig;
use scene::consts::{DUPLICATE_OFFSET_X, DUPLICATE_OFFSET_Y, MIN_SHAPE_SIZE, ROTATE_SNAP_STEP_DEG};
use scene::doc::ShapeKind;
use scene::engine::EngineCore;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("cannot open script {path}: {source}")]
    Open { path: String, source: io::Error },
    #[error("read failed: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: invalid event: {source}")]
    Script { line: usize, source: serde_json::Error },
    #[error("line {line}: no shape at index {index} (scene has {len})")]
    NoShape { line: usize, index: usize, len: usize },
    #[error("invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "siteplan", about = "Headless driver for the facility-layout scene engine")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a JSON-lines event script and print the resulting scene.
    Replay(ReplayArgs),
    /// List shape kinds with their anchor and default size.
    Kinds,
}

#[derive(Args, Debug)]
struct ReplayArgs {
    /// Script path, or `-` for stdin.
    #[arg(default_value = "-")]
    input: String,

    #[arg(long, env = "SITEPLAN_MIN_SIZE", default_value_t = MIN_SHAPE_SIZE)]
    min_size: f64,

    #[arg(long, env = "SITEPLAN_DUPLICATE_DX", default_value_t = DUPLICATE_OFFSET_X)]
    duplicate_dx: f64,

    #[arg(long, env = "SITEPLAN_DUPLICATE_DY", default_value_t = DUPLICATE_OFFSET_Y)]
    duplicate_dy: f64,

    #[arg(long, env = "SITEPLAN_ROTATE_SNAP", default_value_t = ROTATE_SNAP_STEP_DEG)]
    rotate_snap: f64,

    /// Select the copy after a duplicate.
    #[arg(long, env = "SITEPLAN_SELECT_DUPLICATE")]
    select_duplicate: bool,

    /// Keep at most this many undo steps.
    #[arg(long, env = "SITEPLAN_HISTORY_LIMIT")]
    history_limit: Option<usize>,

    /// Include the projected draw primitives.
    #[arg(long)]
    frame: bool,

    #[arg(long)]
    pretty: bool,
}

impl ReplayArgs {
    fn config(&self) -> EditorConfig {
        EditorConfig {
            min_size: self.min_size,
            duplicate_offset: (self.duplicate_dx, self.duplicate_dy),
            rotate_snap_deg: self.rotate_snap,
            select_duplicate: self.select_duplicate,
            history_limit: self.history_limit,
        }
    }
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Replay(args) => run_replay(&args),
        Command::Kinds => {
            run_kinds();
            Ok(())
        }
    }
}

fn run_replay(args: &ReplayArgs) -> Result<(), CliError> {
    let reader: Box<dyn BufRead> = if args.input == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        let file = File::open(&args.input).map_err(|source| CliError::Open { path: args.input.clone(), source })?;
        Box::new(BufReader::new(file))
    };

    let mut engine = EngineCore::with_config(args.config());
    let events = script::replay(&mut engine, reader)?;

    let report = script::Report::new(&engine, events, args.frame);
    let rendered = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{rendered}");
    Ok(())
}

fn run_kinds() {
    for kind in ShapeKind::ALL {
        let (w, h) = kind.default_size();
        println!("{kind:?}\t{:?}\t{w}x{h}", kind.anchor());
    }
}
