//! Declares additions that can be hooked onto the driver either before or after a generation run.  Enables things
//! like status reporting and previews without the engine knowing about them.

use tracing::info;

use crate::engine::Generation;
use crate::generator::Algorithm;
use crate::seed::Seed;
use crate::universe::GridConf;

/// Adds some side effect on to the beginning or end of a generation run.
pub trait Middleware {
    fn before_generate(&mut self, _algorithm: Algorithm, _seed: Seed, _conf: &GridConf) {}

    fn after_generate(&mut self, _algorithm: Algorithm, _generation: &Generation) {}
}

/// Reports the outcome of every run through `tracing`, the way the original status bar did.
#[derive(Clone, Copy, Debug, Default)]
pub struct StatsLogger;

impl Middleware for StatsLogger {
    fn after_generate(&mut self, algorithm: Algorithm, generation: &Generation) {
        let stats = &generation.stats;
        if stats.iteration_count == 0 {
            info!(algorithm = algorithm.name(), "Grid is empty; nothing generated");
            return;
        }

        info!(
            final_value = stats.last_value,
            min_value = stats.min_value,
            max_value = stats.max_value,
            elapsed = ?stats.elapsed,
            "Generated {} values using {}",
            stats.iteration_count,
            algorithm
        );
    }
}
