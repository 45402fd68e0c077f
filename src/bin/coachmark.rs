use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "coachmark", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve one label placement and print it as JSON.
    Place(PlaceArgs),
    /// Run a tutorial script against its host fixture and print every sink event.
    Replay(ReplayArgs),
}

#[derive(Parser, Debug)]
struct PlaceArgs {
    /// Target rectangle as `x,y,w,h`.
    #[arg(long, value_parser = parse_list::<4>, allow_hyphen_values = true)]
    target: [f64; 4],

    /// Label size as `w,h`.
    #[arg(long, value_parser = parse_list::<2>)]
    label: [f64; 2],

    /// Viewport size as `w,h`.
    #[arg(long, value_parser = parse_list::<2>)]
    viewport: [f64; 2],

    /// Inherited target scale as `sx,sy`.
    #[arg(long, value_parser = parse_list::<2>, default_value = "1,1")]
    scale: [f64; 2],
}

#[derive(Parser, Debug)]
struct ReplayArgs {
    /// Input tutorial script JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Number of advances (defaults to one full pass: scenes + 1).
    #[arg(long)]
    steps: Option<usize>,

    /// Fade length in milliseconds (defaults to the script's `default_fade_ms`).
    #[arg(long, allow_hyphen_values = true)]
    fade_ms: Option<i64>,

    /// Log sequencer decisions to stderr.
    #[arg(long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Place(args) => cmd_place(args),
        Command::Replay(args) => cmd_replay(args),
    }
}

fn parse_list<const N: usize>(s: &str) -> Result<[f64; N], String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f64>().map_err(|e| format!("'{p}': {e}")))
        .collect::<Result<Vec<_>, _>>()?;
    <[f64; N]>::try_from(parts)
        .map_err(|v| format!("expected {N} comma-separated numbers, got {}", v.len()))
}

fn cmd_place(args: PlaceArgs) -> anyhow::Result<()> {
    let [x, y, w, h] = args.target;
    let req = coachmark::PlacementRequest {
        target: coachmark::Rect::new(x, y, x + w, y + h),
        label: coachmark::Size::new(args.label[0], args.label[1]),
        viewport: coachmark::Size::new(args.viewport[0], args.viewport[1]),
    };
    let scale = coachmark::Vec2::new(args.scale[0], args.scale[1]);
    let placement = coachmark::place_label(&req, scale)?;
    println!("{}", serde_json::to_string(&placement)?);
    Ok(())
}

fn cmd_replay(args: ReplayArgs) -> anyhow::Result<()> {
    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    let script = coachmark::TutorialScript::from_path(&args.in_path)
        .with_context(|| format!("read tutorial script '{}'", args.in_path.display()))?;
    let fade_ms = args.fade_ms.unwrap_or(script.config.default_fade_ms);
    let coachmark::LoadedScript {
        tree,
        mut sequencer,
        ..
    } = script.load().with_context(|| "load tutorial script")?;

    let steps = args.steps.unwrap_or(sequencer.scenes().len() + 1);
    let mut sink = coachmark::RecordingSink::new();
    for step in 0..steps {
        match sequencer.advance(&tree, &mut sink, fade_ms) {
            Ok(outcome) => println!("{}", serde_json::to_string(&outcome)?),
            Err(err) if err.is_recoverable() => eprintln!("step {step}: {err}; skipping"),
            Err(err) => return Err(err).with_context(|| format!("advance step {step}")),
        }
        for pending in sink.take_pending() {
            sequencer.commit(&mut sink, pending.token)?;
        }
        for event in sink.events() {
            println!("{}", serde_json::to_string(event)?);
        }
        sink.clear();
    }
    Ok(())
}
