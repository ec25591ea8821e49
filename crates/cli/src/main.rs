use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod commands;
mod files;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Crease pattern checks, folding and export", version = origami::VERSION)]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Summarise a .fold pattern and test flat-foldability
    Check {
        input: PathBuf,
        /// Split crossings and merge vertices before checking
        #[arg(long)]
        clean: bool,
    },
    /// Fold a pattern and write the folded vertex positions as .fold
    Fold {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Face that stays put (default: the face under the sheet centroid)
        #[arg(long)]
        root: Option<usize>,
    },
    /// Render a pattern to SVG
    Svg {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 400.0)]
        size: f64,
    },
    /// Write the reference bird base as .fold
    BirdBase {
        #[arg(long)]
        out: PathBuf,
    },
    /// Print per-node Maekawa/Kawasaki results as JSON
    Report { input: PathBuf },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Check { input, clean } => {
            let summary = commands::check(&input, clean)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
            Ok(())
        }
        Action::Fold { input, out, root } => commands::fold(&input, &out, root),
        Action::Svg { input, out, size } => commands::svg(&input, &out, size),
        Action::BirdBase { out } => commands::write_bird_base(&out),
        Action::Report { input } => {
            println!("{}", commands::report(&input)?);
            Ok(())
        }
    }
}
