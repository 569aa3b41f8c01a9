use anyhow::{Result, bail};
use clap::Parser;
use dungeon_core::{DungeonGraph, RoomType, build_graph};
use log::{LevelFilter, info};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Number of graphs to generate
    #[arg(short, long, default_value_t = 1000)]
    graphs: u32,
    #[arg(long, default_value_t = 64)]
    max_rooms: usize,
}

fn pick(rng: &mut ChaCha8Rng, min_value: usize, max_value: usize) -> usize {
    min_value + (rng.next_u64() as usize % (max_value - min_value + 1))
}

fn check_invariants(graph: &DungeonGraph, room_count: usize, max_connections: usize) -> Result<()> {
    if graph.room_count() != room_count {
        bail!("expected {room_count} rooms, found {}", graph.room_count());
    }
    if graph.entrance().room_type() != RoomType::Entrance
        || graph.exit().room_type() != RoomType::Exit
    {
        bail!("terminal rooms have the wrong type");
    }
    for room in graph.rooms() {
        if room.outgoing().contains(&room.id()) {
            bail!("room {} links to itself", room.id());
        }
        if room.outgoing().len() > max_connections || room.incoming().len() > max_connections {
            bail!("room {} exceeds degree bound {max_connections}", room.id());
        }
        if room.id() != graph.entrance().id()
            && room.id() != graph.exit().id()
            && !room.room_type().is_interior()
        {
            bail!("interior room {} drew {}", room.id(), room.room_type());
        }
    }
    if !graph.is_weakly_connected() {
        bail!("graph is not weakly connected");
    }
    Ok(())
}

fn main() -> Result<()> {
    TermLogger::init(
        LevelFilter::Info,
        ConfigBuilder::new()
            .set_target_level(LevelFilter::Off)
            .set_location_level(LevelFilter::Off)
            .build(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let args = Args::parse();
    info!("Fuzzing {} graphs from seed {}...", args.graphs, args.seed);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    for index in 0..args.graphs {
        let room_count = pick(&mut rng, 2, args.max_rooms.max(2));
        let max_connections = pick(&mut rng, 1, 6);
        let extra = pick(&mut rng, 0, 8);
        let graph_seed = rng.next_u64();

        let graph = build_graph(
            room_count,
            max_connections,
            extra,
            &mut ChaCha8Rng::seed_from_u64(graph_seed),
        )?;
        if let Err(err) = check_invariants(&graph, room_count, max_connections) {
            bail!(
                "graph {index} (seed={graph_seed}, rooms={room_count}, max={max_connections}, extra={extra}): {err}"
            );
        }
    }

    info!("Fuzzing completed successfully.");
    Ok(())
}
