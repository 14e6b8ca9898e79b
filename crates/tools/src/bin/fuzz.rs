use anyhow::{Result, bail};
use cavegen::{GenerationConfig, Grid, MapGenerator, Tile, regions_of};
use clap::Parser;
use env_logger::{Builder, Env};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 500)]
    iterations: u32,
    /// Largest width/height to try
    #[arg(long, default_value_t = 64)]
    max_size: u64,
}

fn pick(rng: &mut ChaCha8Rng, low: u64, high_inclusive: u64) -> u64 {
    low + rng.next_u64() % (high_inclusive - low + 1)
}

fn main() -> Result<()> {
    Builder::from_env(Env::default().default_filter_or("error")).init();
    let args = Args::parse();
    if args.max_size == 0 {
        bail!("--max-size must be at least 1");
    }

    println!("Starting cave fuzz on seed {} for {} iterations...", args.seed, args.iterations);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    for iteration in 0..args.iterations {
        let config = GenerationConfig {
            width: pick(&mut rng, 1, args.max_size) as usize,
            height: pick(&mut rng, 1, args.max_size) as usize,
            smooth_level: pick(&mut rng, 0, 8) as u32,
            wall_cluster_threshold_size: pick(&mut rng, 0, 60) as usize,
            room_threshold_size: pick(&mut rng, 0, 60) as usize,
            random_fill_percent: pick(&mut rng, 30, 70) as u32,
            ..GenerationConfig::default()
        };
        let map_seed = rng.next_u64();

        let generator = MapGenerator::new(config.clone())?;
        let grid = generator.generate_with_seed_hash(map_seed);
        if let Err(violation) = check_invariants(&grid, &config) {
            bail!("iteration {iteration} (map seed {map_seed}, {config:?}): {violation}");
        }
        if generator.generate_with_seed_hash(map_seed) != grid {
            bail!("iteration {iteration} (map seed {map_seed}): regeneration was not identical");
        }
    }

    println!("Fuzzing completed successfully.");
    Ok(())
}

fn check_invariants(grid: &Grid, config: &GenerationConfig) -> Result<(), String> {
    if (grid.width(), grid.height()) != (config.width, config.height) {
        return Err(format!("grid is {}x{}", grid.width(), grid.height()));
    }
    if let Some(coord) =
        grid.coords().find(|&coord| grid.is_border_coord(coord) && grid.tile(coord) != Tile::Wall)
    {
        return Err(format!("border cell {coord:?} is not a wall"));
    }

    let mut covered = 0;
    for region in regions_of(grid, Tile::Wall) {
        covered += region.len();
        if region.len() < config.wall_cluster_threshold_size && !region.touches_border(grid) {
            return Err(format!("wall cluster of {} cells survived pruning", region.len()));
        }
    }
    for region in regions_of(grid, Tile::Floor) {
        covered += region.len();
        if region.len() < config.room_threshold_size {
            return Err(format!("room of {} cells survived pruning", region.len()));
        }
    }
    if covered != grid.width() * grid.height() {
        return Err(format!("regions cover {covered} cells"));
    }
    Ok(())
}
