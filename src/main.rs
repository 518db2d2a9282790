mod color;
mod config;
mod controller;
mod storage;
mod style;
mod theme;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};

use crate::controller::ThemeController;
use crate::storage::{LastChoice, SqliteStore};
use crate::style::RootStyle;
use crate::theme::Catalog;

#[derive(Debug, Parser)]
#[command(name = "tint", version, about = "Random accent palette per load, never the same twice in a row")]
struct Cli {
    /// Override config file path.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Pick a new palette, remember it, and emit its stylesheet (default).
    Apply {
        /// Write the stylesheet to this file instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
        /// Seed the random draw (reproducible picks).
        #[arg(long)]
        seed: Option<u64>,
        /// Neither read nor remember the previous choice.
        #[arg(long)]
        ephemeral: bool,
    },
    /// List palettes in catalog order.
    List {
        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Emit one palette's stylesheet without touching the stored choice.
    Show {
        name: String,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the style variables every palette sets.
    Vars,
    /// Print the remembered palette.
    Last,
    /// Forget the remembered palette.
    Reset,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref()).context("load config")?;
    let catalog = Catalog::from_config(&cfg.theme.palettes).context("build palette catalog")?;

    match cli.command.unwrap_or(Command::Apply {
        out: None,
        seed: None,
        ephemeral: false,
    }) {
        Command::Apply {
            out,
            seed,
            ephemeral,
        } => {
            let mut store = storage::open_store(&cfg.paths.storage_path(), ephemeral);
            let mut root = RootStyle::new(cfg.output.selector.as_str());
            let controller = ThemeController::new(&catalog, &cfg.theme.storage_key);

            let applied = match seed {
                Some(seed) => controller.run(
                    store.as_mut(),
                    &mut root,
                    &mut StdRng::seed_from_u64(seed),
                ),
                None => controller.run(store.as_mut(), &mut root, &mut rand::rng()),
            };
            tracing::debug!(
                "picked {} ({}) after {:?}",
                applied.index,
                applied.name,
                applied.previous
            );

            emit(&root.to_css(), out.or(cfg.output.css_path).as_deref())?;
        }
        Command::List { json } => {
            let mut store = SqliteStore::open(&cfg.paths.storage_path())?;
            let last = LastChoice::new(&mut store, &cfg.theme.storage_key).load(catalog.len());
            if json {
                let palettes: Vec<_> = catalog.iter().collect();
                println!("{}", serde_json::to_string_pretty(&palettes)?);
            } else {
                for (i, p) in catalog.iter().enumerate() {
                    let marker = if Some(i) == last { "*" } else { " " };
                    println!("{marker} {i}. {}  (primary {})", p.name, p.primary);
                }
            }
        }
        Command::Show { name, out } => {
            let (_, palette) = catalog
                .find(&name)
                .with_context(|| format!("no palette named {name:?}"))?;
            let mut root = RootStyle::new(cfg.output.selector.as_str());
            style::apply(palette, &mut root);
            emit(&root.to_css(), out.as_deref())?;
        }
        Command::Vars => {
            for name in style::variable_names() {
                println!("{name}");
            }
        }
        Command::Last => {
            let mut store = SqliteStore::open(&cfg.paths.storage_path())?;
            match LastChoice::new(&mut store, &cfg.theme.storage_key).load(catalog.len()) {
                Some(i) => println!("{i}. {}", catalog[i].name),
                None => println!("none"),
            }
        }
        Command::Reset => {
            let mut store = SqliteStore::open(&cfg.paths.storage_path())?;
            LastChoice::new(&mut store, &cfg.theme.storage_key).clear()?;
            println!("Cleared remembered palette.");
        }
    }

    Ok(())
}

fn emit(css: &str, out: Option<&Path>) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create dir {}", parent.display()))?;
            }
            std::fs::write(path, css).with_context(|| format!("write {}", path.display()))?;
        }
        None => print!("{css}"),
    }
    Ok(())
}
