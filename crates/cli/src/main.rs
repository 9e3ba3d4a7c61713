use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use nalgebra::Vector2;
use tracing_subscriber::fmt::SubscriberBuilder;
use untangle::prelude::*;

mod events;
mod render;

#[derive(Parser)]
#[command(name = "untangle-cli")]
#[command(about = "Headless driver for the untangle puzzle core")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, ValueEnum)]
enum Anchor {
    Center,
    Pointer,
}

#[derive(clap::Args)]
struct PuzzleArgs {
    /// Number of vertices
    #[arg(long, default_value_t = 10)]
    vertices: usize,
    /// Seed for a reproducible puzzle; omitted means OS entropy
    #[arg(long)]
    seed: Option<u64>,
    /// Draw index within the seed's stream
    #[arg(long, default_value_t = 0)]
    index: u64,
}

#[derive(clap::Args)]
struct ViewArgs {
    #[arg(long, default_value_t = 1200.0)]
    width: f64,
    #[arg(long, default_value_t = 700.0)]
    height: f64,
    /// Vertex hit-test radius in pixels
    #[arg(long, default_value_t = 10.0)]
    radius: f64,
    #[arg(long, value_enum, default_value_t = Anchor::Pointer)]
    anchor: Anchor,
}

impl ViewArgs {
    fn to_cfg(&self) -> ViewCfg {
        ViewCfg {
            screen_size: Vector2::new(self.width, self.height),
            vertex_radius: self.radius,
            zoom_anchor: match self.anchor {
                Anchor::Center => ZoomAnchor::Center,
                Anchor::Pointer => ZoomAnchor::Pointer,
            },
            ..ViewCfg::default()
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Generate a crossing-free puzzle and print its scene as JSON
    Generate {
        #[command(flatten)]
        puzzle: PuzzleArgs,
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Replay a JSON pointer-event script against a puzzle and print the final scene
    Replay {
        #[command(flatten)]
        puzzle: PuzzleArgs,
        #[command(flatten)]
        view: ViewArgs,
        #[arg(long)]
        events: String,
    },
    /// Print version information
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Generate { puzzle, view } => generate(&puzzle, &view),
        Action::Replay {
            puzzle,
            view,
            events,
        } => replay(&puzzle, &view, &events),
        Action::Report => report(),
    }
}

fn build_graph(puzzle: &PuzzleArgs) -> Graph {
    match puzzle.seed {
        Some(seed) => generate_seeded(
            puzzle.vertices,
            PuzzleSeed {
                seed,
                index: puzzle.index,
            },
        ),
        None => {
            let mut rng = rand::thread_rng();
            generate_graph(puzzle.vertices, &mut rng)
        }
    }
}

fn generate(puzzle: &PuzzleArgs, view: &ViewArgs) -> Result<()> {
    tracing::info!(vertices = puzzle.vertices, seed = ?puzzle.seed, "generate");
    let session = Session::new(build_graph(puzzle), view.to_cfg());
    let doc = render::scene_json(&session.scene());
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn replay(puzzle: &PuzzleArgs, view: &ViewArgs, path: &str) -> Result<()> {
    let script = events::load(path).with_context(|| format!("loading event script {path}"))?;
    tracing::info!(
        vertices = puzzle.vertices,
        seed = ?puzzle.seed,
        events = script.len(),
        "replay"
    );
    let mut session = Session::new(build_graph(puzzle), view.to_cfg());
    let skipped = events::run(&mut session, &script);
    let scene = session.scene();
    tracing::info!(
        crossings = scene.crossing_count(),
        skipped,
        "replay finished"
    );
    println!("{}", serde_json::to_string_pretty(&render::scene_json(&scene))?);
    Ok(())
}

fn report() -> Result<()> {
    let rev = option_env!("GIT_COMMIT").unwrap_or("unknown");
    let obj = serde_json::json!({
        "code_rev": rev,
        "version": untangle::VERSION,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
