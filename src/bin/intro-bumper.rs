use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use intro_bumper::composition::intro::INTRO_BUMPER_FPS;
use intro_bumper::{
    BumperConfig, Composition, Fps, FrameIndex, FrameRange, IntroBumper, RenderSession,
    RenderSessionOpts, SvgDirSink, Theme, root_at,
};

#[derive(Parser, Debug)]
#[command(name = "intro-bumper", version, about = "Evaluate and render the intro bumper")]
struct Cli {
    /// Log debug events to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List registered compositions.
    List(ConfigArgs),
    /// Print the visual state of one frame as JSON.
    State(StateArgs),
    /// Print the per-character typing schedule as JSON.
    Schedule(ConfigArgs),
    /// Write one frame as an SVG document.
    Frame(FrameArgs),
    /// Write a range of frames as SVG documents plus `states.json`.
    Render(RenderArgs),
}

#[derive(Args, Debug)]
struct ConfigArgs {
    /// Bumper configuration JSON. Defaults are used for missing fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Frame rate, e.g. `30` or `30000/1001`. Keeps the clip's length in seconds.
    #[arg(long)]
    fps: Option<Fps>,

    /// Override the configured theme (`light` or `dark`).
    #[arg(long)]
    theme: Option<Theme>,
}

#[derive(Args, Debug)]
struct StateArgs {
    #[command(flatten)]
    common: ConfigArgs,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    common: ConfigArgs,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    common: ConfigArgs,

    /// Output directory.
    #[arg(long)]
    out: PathBuf,

    /// Replace frame files that already exist.
    #[arg(long, default_value_t = false)]
    overwrite: bool,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// End frame (exclusive). Defaults to the composition duration.
    #[arg(long)]
    end: Option<u64>,

    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Render chunk size.
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,

    /// Enable static-frame elision within chunks.
    #[arg(long, default_value_t = false)]
    static_frame_elision: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::List(args) => cmd_list(&args),
        Command::State(args) => cmd_state(&args),
        Command::Schedule(args) => cmd_schedule(&args),
        Command::Frame(args) => cmd_frame(&args),
        Command::Render(args) => cmd_render(&args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

impl ConfigArgs {
    fn bumper_config(&self) -> anyhow::Result<BumperConfig> {
        let mut config = match self.config.as_deref() {
            Some(path) => BumperConfig::from_path(path)
                .with_context(|| format!("load config '{}'", path.display()))?,
            None => BumperConfig::default(),
        };
        if let Some(theme) = self.theme {
            config.theme = theme;
        }
        Ok(config)
    }

    fn load(&self) -> anyhow::Result<IntroBumper> {
        let comp = IntroBumper::new(self.bumper_config()?)?;
        Ok(match self.fps {
            Some(fps) => comp.with_fps(fps)?,
            None => comp,
        })
    }
}

fn print_json(value: &impl serde::Serialize) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{s}");
    Ok(())
}

fn cmd_list(args: &ConfigArgs) -> anyhow::Result<()> {
    let fps = args.fps.unwrap_or(INTRO_BUMPER_FPS);
    let registry = root_at(args.bumper_config()?, fps)?;
    for comp in registry.iter() {
        let spec = comp.spec();
        println!(
            "{}\t{}x{}\t{} fps\t{} frames",
            spec.id, spec.canvas.width, spec.canvas.height, spec.fps, spec.duration.0
        );
    }
    Ok(())
}

fn cmd_state(args: &StateArgs) -> anyhow::Result<()> {
    let comp = args.common.load()?;
    print_json(&comp.state(FrameIndex(args.frame)))
}

fn cmd_schedule(args: &ConfigArgs) -> anyhow::Result<()> {
    let comp = args.load()?;
    let timeline = comp.timeline();
    let typing = timeline.typing();
    print_json(&serde_json::json!({
        "fps": timeline.fps().to_string(),
        "breakpoints": timeline.breakpoints(),
        "text": typing.text(),
        "base_frames_per_char": typing.base_frames_per_char(),
        "total_frames": typing.total_frames(),
        "steps": typing.steps().collect::<Vec<_>>(),
    }))
}

fn cmd_frame(args: &FrameArgs) -> anyhow::Result<()> {
    let comp: Arc<dyn Composition> = Arc::new(args.common.load()?);
    let sess = RenderSession::new(comp, RenderSessionOpts::default())?;
    let frame = sess.render_frame(FrameIndex(args.frame))?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, frame.svg.as_bytes())
        .with_context(|| format!("write svg '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: &RenderArgs) -> anyhow::Result<()> {
    let comp: Arc<dyn Composition> = Arc::new(args.common.load()?);
    let end = args.end.unwrap_or(comp.spec().duration.0);
    let range = FrameRange::new(FrameIndex(args.start), FrameIndex(end))?;

    let opts = RenderSessionOpts {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
        static_frame_elision: args.static_frame_elision,
    };
    let sess = RenderSession::new(comp, opts)?;
    let mut sink = SvgDirSink::new(&args.out, args.overwrite);
    let stats = sess
        .render_range(range, &mut sink)
        .with_context(|| format!("render into '{}'", args.out.display()))?;

    eprintln!(
        "wrote {} frames to {} ({} rendered, {} elided)",
        stats.frames_total,
        args.out.display(),
        stats.frames_rendered,
        stats.frames_elided
    );
    Ok(())
}
