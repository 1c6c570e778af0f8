use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use jetframe::{FrameContext, GameConfig, PngSurface, Position};

#[derive(Parser, Debug)]
#[command(name = "jetframe", version)]
struct Cli {
    /// Log at DEBUG instead of INFO.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose a single frame and write it as a PNG.
    Frame(FrameArgs),
    /// Open a window and run the game loop (requires the `window` feature).
    Run(RunArgs),
}

#[derive(Args, Debug)]
struct SceneArgs {
    /// Game config JSON. Flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Background image.
    #[arg(long)]
    background: Option<PathBuf>,

    /// Sprite image.
    #[arg(long)]
    sprite: Option<PathBuf>,

    /// Framebuffer width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Framebuffer height in pixels.
    #[arg(long)]
    height: Option<u32>,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Sprite x position.
    #[arg(long, allow_negative_numbers = true)]
    x: Option<i32>,

    /// Sprite y position.
    #[arg(long, allow_negative_numbers = true)]
    y: Option<i32>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
#[cfg_attr(not(feature = "window"), allow(dead_code))]
struct RunArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Score at which the game ends.
    #[arg(long)]
    goal: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Run(args) => cmd_run(args),
    }
}

fn load_config(args: &SceneArgs) -> anyhow::Result<GameConfig> {
    let mut cfg = match &args.config {
        Some(path) => GameConfig::from_path(path)?,
        None => GameConfig::default(),
    };
    if let Some(p) = &args.background {
        cfg.background = p.clone();
    }
    if let Some(p) = &args.sprite {
        cfg.sprite = p.clone();
    }
    if let Some(w) = args.width {
        cfg.width = w;
    }
    if let Some(h) = args.height {
        cfg.height = h;
    }
    cfg.validate()?;
    Ok(cfg)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.scene)?;
    let start = cfg.sprite_start;

    let mut ctx: FrameContext<PngSurface> = FrameContext::from_config(cfg)?;
    ctx.set_position(Position::new(
        args.x.unwrap_or(start.x),
        args.y.unwrap_or(start.y),
    ));
    ctx.bind_surface(PngSurface::new(&args.out));
    ctx.render();
    ctx.present()
        .with_context(|| format!("present frame to '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

#[cfg(feature = "window")]
fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    use jetframe::{ScoreTicker, WindowSurface, WindowSurfaceOpts, run_loop};

    let mut cfg = load_config(&args.scene)?;
    if let Some(goal) = args.goal {
        cfg.score_goal = goal;
    }
    let interval = std::time::Duration::from_millis(cfg.score_interval_ms);
    let opts = WindowSurfaceOpts {
        title: cfg.title.clone(),
        width: cfg.width,
        height: cfg.height,
        target_fps: cfg.target_fps,
    };

    let mut ctx: FrameContext<WindowSurface> = FrameContext::from_config(cfg)?;
    ctx.bind_surface(WindowSurface::open(opts)?);
    let ticker = ScoreTicker::spawn(interval)?;

    let summary = run_loop(&mut ctx, &ticker)?;
    eprintln!(
        "exit: {:?} after {} frames, score {}",
        summary.exit, summary.frames, summary.score
    );
    Ok(())
}

#[cfg(not(feature = "window"))]
fn cmd_run(_args: RunArgs) -> anyhow::Result<()> {
    anyhow::bail!(
        "jetframe was built without the `window` feature; rebuild with `--features window`"
    )
}
