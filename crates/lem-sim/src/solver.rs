//! End-to-end pipeline: enumerate → select → simulate.

use tracing::debug;

use lem_colony::Colony;
use lem_core::SolverConfig;
use lem_paths::{EnumerateOptions, Path, PathSet, enumerate_paths_with, select_with_strategy};

use crate::{MoveLog, SimBuilder, SimObserver, SimResult};

/// Everything one solve produced.
#[derive(Clone, Debug)]
pub struct Solution {
    /// Every enumerated path, in discovery order.
    pub paths:    Vec<Path>,
    /// The paths agents were routed along.
    pub path_set: PathSet,
    pub log:      MoveLog,
}

/// Route `colony.agent_count()` agents from start to end.
///
/// An unreachable end room is not an error: the solution then has no paths,
/// an empty path set, and an empty log with outcome
/// [`SimOutcome::NoRoute`][crate::SimOutcome::NoRoute].
pub fn solve<O: SimObserver>(
    colony:   &Colony,
    config:   &SolverConfig,
    observer: &mut O,
) -> SimResult<Solution> {
    config.validate()?;

    let paths = enumerate_paths_with(colony, EnumerateOptions { max_paths: config.max_paths });
    let path_set = select_with_strategy(&paths, colony.agent_count(), config.strategy)?;
    debug!(
        enumerated = paths.len(),
        selected = path_set.len(),
        strategy = %config.strategy,
        "paths ready"
    );

    let log = SimBuilder::new(&path_set, colony.agent_count(), colony.end())
        .max_turns(config.max_turns)
        .build()?
        .run(observer)?;

    Ok(Solution { paths, path_set, log })
}
