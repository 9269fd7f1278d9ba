//! This is the core of the generator.  Given an algorithm, a seed and the size of the grid, it steps the algorithm
//! once per cell in row-major order, turns every raw value into a color and keeps running statistics on the way.
//!
//! A run is a single synchronous pass.  The engine keeps nothing between runs; the grid and statistics it builds are
//! handed back together once every cell has been filled, so a caller never sees a half-painted grid.

use std::time::{Duration, Instant};

use serde::{Serialize, Serializer};

use crate::generator::{Algorithm, Generator};
use crate::seed::Seed;
use crate::universe::{Grid, GridConf};
use crate::util::{value_to_color, Color};

pub mod iterator;

use self::iterator::SerialGridIterator;

/// Statistics gathered during one generation run.
///
/// On an empty grid `min_value` and `max_value` stay at their starting sentinels, `u64::MAX` and `0`, so
/// `min_value <= max_value` only holds when `iteration_count > 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GenerationStats {
    /// Raw value of the last cell visited, or 0 if nothing was generated.
    pub last_value: u64,
    pub iteration_count: u64,
    pub min_value: u64,
    pub max_value: u64,
    /// Time spent stepping and coloring; excludes setup and lookup.
    #[serde(rename = "elapsed_secs", serialize_with = "serialize_secs")]
    pub elapsed: Duration,
}

impl GenerationStats {
    pub fn empty() -> GenerationStats {
        GenerationStats {
            last_value: 0,
            iteration_count: 0,
            min_value: u64::MAX,
            max_value: 0,
            elapsed: Duration::ZERO,
        }
    }

    fn record(&mut self, value: u64) {
        self.last_value = value;
        self.iteration_count += 1;
        self.min_value = self.min_value.min(value);
        self.max_value = self.max_value.max(value);
    }
}

impl Default for GenerationStats {
    fn default() -> GenerationStats {
        GenerationStats::empty()
    }
}

fn serialize_secs<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64())
}

/// The output of one run: a fully populated grid together with the statistics that produced it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Generation {
    pub grid: Grid,
    pub stats: GenerationStats,
}

impl Generation {
    pub fn empty() -> Generation {
        Generation {
            grid: Grid::empty(),
            stats: GenerationStats::empty(),
        }
    }
}

/// Runs one of the registered algorithms over a grid, tinting cells with the algorithm's accent color.
pub fn generate(algorithm: Algorithm, seed: Seed, conf: GridConf) -> Generation {
    generate_with(&algorithm, algorithm.tint(), seed, conf)
}

/// Runs any `Generator` over a grid.
///
/// The state starts from the seed (as the generator chooses to reduce it) and every cell takes the state produced by stepping the previous one; the cell's
/// color comes from normalizing that state against the range the generator reported for it.  `conf` is clamped to
/// `MAX_GRID_DIMENSION` on each side first.
pub fn generate_with<G: Generator + ?Sized>(generator: &G, tint: Color, seed: Seed, conf: GridConf) -> Generation {
    let conf = conf.bounded();
    if conf.is_empty() {
        return Generation::empty();
    }

    let mut stats = GenerationStats::empty();
    let mut cells: Vec<Color> = Vec::with_capacity(conf.cell_count());
    let mut state = generator.initial_state(seed);

    let start = Instant::now();
    for _ in SerialGridIterator::new(conf) {
        let (next_state, range) = generator.step(state);
        state = next_state;
        stats.record(state);
        cells.push(value_to_color(state, range, tint));
    }
    stats.elapsed = start.elapsed();

    Generation {
        grid: Grid::from_cells(conf, cells),
        stats,
    }
}
