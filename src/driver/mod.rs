//! Owns the output surface that a display shell draws from and drives the engine to repaint it.
//!
//! The engine is pure; everything stateful about a visualizer session lives here instead: the current grid and
//! statistics, the algorithm and seed that produced them, and the middleware hooked around each run.  A run takes
//! `&mut self`, so only one generation can be in flight against a driver at a time.  Callers that share a driver
//! between threads have to put it behind a lock of their own.

use serde::Serialize;
use tracing::{debug, info};

use crate::engine::{self, Generation, GenerationStats};
use crate::error::Result;
use crate::generator::{get_algorithm, Algorithm};
use crate::seed::{ResolvedSeed, Seed};
use crate::universe::{Grid, GridConf};

pub mod middleware;

use self::middleware::Middleware;

/// Summary of a completed run, suitable for echoing back to a user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub algorithm: Algorithm,
    pub seed: ResolvedSeed,
    pub stats: GenerationStats,
}

pub struct GridDriver {
    conf: GridConf,
    current: Generation,
    last_run: Option<(Algorithm, Seed)>,
    middleware: Vec<Box<dyn Middleware>>,
}

impl Default for GridDriver {
    fn default() -> GridDriver {
        GridDriver::new(GridConf::default())
    }
}

impl GridDriver {
    pub fn new(conf: GridConf) -> GridDriver {
        GridDriver {
            conf,
            current: Generation::empty(),
            last_run: None,
            middleware: Vec::new(),
        }
    }

    pub fn with_middleware<M: Middleware + 'static>(mut self, middleware: M) -> GridDriver {
        self.add_middleware(middleware);
        self
    }

    pub fn add_middleware<M: Middleware + 'static>(&mut self, middleware: M) {
        self.middleware.push(Box::new(middleware));
    }

    /// Repaints the grid from user-supplied text.
    ///
    /// The algorithm is looked up first; if it isn't registered the error is returned and the current grid and
    /// statistics are left exactly as they were.  Seed text that isn't an integer is replaced with a random seed and
    /// the report says so.
    pub fn run(&mut self, algorithm_name: &str, seed_text: &str) -> Result<RunReport> {
        let algorithm = get_algorithm(algorithm_name)?;
        let seed = Seed::resolve(seed_text);
        if seed.substituted {
            info!(input = seed_text, seed = %seed.seed, "Seed isn't an integer; using a random one");
        }

        Ok(self.execute(algorithm, seed))
    }

    /// Repaints the grid from an already parsed seed.
    pub fn run_seed(&mut self, algorithm_name: &str, seed: Seed) -> Result<RunReport> {
        let algorithm = get_algorithm(algorithm_name)?;
        Ok(self.execute(algorithm, ResolvedSeed { seed, substituted: false }))
    }

    fn execute(&mut self, algorithm: Algorithm, seed: ResolvedSeed) -> RunReport {
        for m in self.middleware.iter_mut() {
            m.before_generate(algorithm, seed.seed, &self.conf);
        }

        debug!(%algorithm, seed = %seed.seed, width = self.conf.width, height = self.conf.height, "Generating");
        // the previous generation is swapped out in one move once the new one is complete
        self.current = engine::generate(algorithm, seed.seed, self.conf);
        self.last_run = Some((algorithm, seed.seed));

        for m in self.middleware.iter_mut() {
            m.after_generate(algorithm, &self.current);
        }

        RunReport {
            algorithm,
            seed,
            stats: self.current.stats,
        }
    }

    /// Blanks the surface: an empty grid and sentinel statistics.
    pub fn clear(&mut self) {
        self.current = Generation::empty();
        self.last_run = None;
        info!("Grid cleared");
    }

    /// Changes the size used by subsequent runs.  The current grid keeps its size until the next run.
    pub fn set_conf(&mut self, conf: GridConf) {
        self.conf = conf;
    }

    pub fn conf(&self) -> GridConf {
        self.conf
    }

    pub fn grid(&self) -> &Grid {
        &self.current.grid
    }

    pub fn stats(&self) -> &GenerationStats {
        &self.current.stats
    }

    pub fn generation(&self) -> &Generation {
        &self.current
    }

    /// The algorithm and seed behind the current grid, if anything has been generated since the last clear.
    pub fn last_run(&self) -> Option<(Algorithm, Seed)> {
        self.last_run
    }
}
