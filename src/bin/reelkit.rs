use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "reelkit", version)]
struct Cli {
    /// Log level filter for the tracing subscriber (error, warn, info, debug, trace).
    #[arg(long, global = true, default_value = "info")]
    log: tracing::Level,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a timeline document and print a summary.
    Check(CheckArgs),
    /// Play a timeline headless with a fixed time step.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Input timeline JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Input timeline JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Fixed frame rate; defaults to the scene's target_fps.
    #[arg(long)]
    fps: Option<u32>,

    /// Stop after this many simulated seconds even if the timeline is not done.
    #[arg(long)]
    max_secs: Option<f64>,

    /// Print the last frame's draw commands as JSON.
    #[arg(long, default_value_t = false)]
    dump_last_frame: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.log)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Check(args) => cmd_check(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn load_doc(path: &std::path::Path) -> anyhow::Result<reelkit::TimelineDoc> {
    reelkit::TimelineDoc::from_path(path)
        .with_context(|| format!("load timeline '{}'", path.display()))
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let doc = load_doc(&args.in_path)?;
    let mut loader = reelkit::NullLoader::new();
    let built = doc.build(&mut loader)?;

    let mut total = 0.0;
    for anim in built.scene.queue().iter() {
        total += built.stage.total_duration(anim)?;
    }

    println!("title:      {}", doc.scene.title);
    println!(
        "canvas:     {}x{}",
        doc.scene.canvas.width, doc.scene.canvas.height
    );
    println!("objects:    {}", built.stage.object_count());
    println!("animations: {}", built.stage.animation_count());
    println!("steps:      {}", doc.step_count());
    println!("duration:   {total:.3}s");
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let doc = load_doc(&args.in_path)?;
    let mut loader = reelkit::NullLoader::new();
    let reelkit::BuiltTimeline {
        mut stage,
        mut scene,
        ..
    } = doc.build(&mut loader)?;

    let fps = args.fps.unwrap_or(doc.scene.target_fps);
    if fps == 0 {
        anyhow::bail!("--fps must be > 0");
    }
    let mut clock = reelkit::FixedStepClock::from_fps(fps);
    if let Some(limit) = args.max_secs {
        clock = clock.with_limit(limit);
    }
    let mut backend = reelkit::RecordingBackend::new();

    let stats = reelkit::Player::new(reelkit::PlayerOptions::default()).run(
        &mut scene,
        &mut stage,
        &mut clock,
        &mut backend,
    )?;

    println!("{}", serde_json::to_string_pretty(&stats)?);
    if args.dump_last_frame {
        if let Some(frame) = backend.last_frame() {
            println!("{}", serde_json::to_string_pretty(frame)?);
        }
    }

    scene.teardown(&mut loader);
    Ok(())
}
