use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dungeon_core::{DungeonGenerator, GeneratorConfig, SeedChoice, SeedMode};
use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML generator config; defaults apply when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Fixed seed, overriding the config's seed mode
    #[arg(short, long)]
    seed: Option<u64>,
    /// Upper bound of the room count draw
    #[arg(long)]
    rooms: Option<usize>,
    /// Per-room incoming and outgoing edge bound
    #[arg(long)]
    max_connections: Option<usize>,
    /// Upper bound of extra edges after the spanning pass
    #[arg(long)]
    extra: Option<usize>,
    /// Print the whole generated dungeon as JSON
    #[arg(long)]
    json: bool,
    /// Log generation phases to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn resolve_config(&self) -> Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::load(path)
                .with_context(|| format!("Failed to load config file: {}", path.display()))?,
            None => GeneratorConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.seed = SeedMode::Fixed(seed);
        }
        if let Some(rooms) = self.rooms {
            config.max_room_count = rooms;
        }
        if let Some(max_connections) = self.max_connections {
            config.max_connections = max_connections;
        }
        if let Some(extra) = self.extra {
            config.max_extra_connections = extra;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    TermLogger::init(
        level,
        ConfigBuilder::new()
            .set_target_level(LevelFilter::Off)
            .set_location_level(LevelFilter::Off)
            .build(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let config = args.resolve_config()?;
    let generator = DungeonGenerator::new(config).context("Invalid generator settings")?;
    let seed: SeedChoice = generator.config().resolve_seed();
    let dungeon = generator.generate(seed).context("Dungeon generation failed")?;

    if args.json {
        let json = serde_json::to_string_pretty(&dungeon)
            .context("Failed to serialize generated dungeon")?;
        println!("{json}");
        return Ok(());
    }

    println!("Seed: {}", dungeon.seed);
    println!("{}", dungeon.graph);
    println!("Fingerprint: 0x{:016x}", dungeon.graph.fingerprint());

    Ok(())
}
