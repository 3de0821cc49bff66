//! Disjoint path selection.
//!
//! # Algorithm
//!
//! 1. Stable-sort the candidates by room count, so equal-length paths keep
//!    discovery order.
//! 2. Precompute the [`ConflictMatrix`].
//! 3. Backtrack over every strictly increasing index sequence, extending the
//!    current selection with path `i` only if `i` overlaps none of it.  Every
//!    node of the search (the empty selection included) is scored; a node
//!    replaces the incumbent only on a strictly higher score, so ties go to
//!    the first subset found.
//! 4. Truncate the winner to `agent_count` paths, keeping order.
//!
//! # Pluggability
//!
//! Scoring goes through the [`SubsetScorer`] trait.  [`MaxCardinality`]
//! maximises the number of paths and ignores their length.  [`MinTurns`]
//! minimises an estimate of the turns needed to move every agent.
//!
//! A scorer may also report an upper bound for a subtree; branches whose
//! bound cannot beat the incumbent are skipped.  Because replacement needs a
//! strictly higher score, skipping such a branch never changes the result.

use tracing::debug;

use lem_core::SelectionStrategy;

use crate::{ConflictMatrix, Path, PathError, PathResult, PathSet};

/// Largest candidate list the selector accepts.  The conflict matrix is
/// `n² / 8` bytes, 128 MiB at this size.
pub const MAX_CANDIDATES: usize = 1 << 15;

// ── SubsetScorer trait ────────────────────────────────────────────────────────

/// Scores a candidate subset of mutually disjoint paths.  Higher is better.
pub trait SubsetScorer {
    /// Score `subset` (in selection order) for moving `agent_count` agents.
    fn score(&self, subset: &[&Path], agent_count: u32) -> i64;

    /// Best score reachable by extending a selection of `selected` paths
    /// with at most `remaining` more.  `None` disables pruning.
    fn upper_bound(&self, _selected: usize, _remaining: usize) -> Option<i64> {
        None
    }
}

/// Score = number of paths.  Path length plays no part.
#[derive(Copy, Clone, Debug, Default)]
pub struct MaxCardinality;

impl SubsetScorer for MaxCardinality {
    fn score(&self, subset: &[&Path], _agent_count: u32) -> i64 {
        subset.len() as i64
    }

    fn upper_bound(&self, selected: usize, remaining: usize) -> Option<i64> {
        Some((selected + remaining) as i64)
    }
}

/// Score = negated [`estimate_turns`]; the empty subset scores `i64::MIN`.
#[derive(Copy, Clone, Debug, Default)]
pub struct MinTurns;

impl SubsetScorer for MinTurns {
    fn score(&self, subset: &[&Path], agent_count: u32) -> i64 {
        let edges: Vec<u64> = subset.iter().map(|p| p.edges() as u64).collect();
        match estimate_turns(&edges, agent_count) {
            Some(t) => -(t.min(i64::MAX as u64) as i64),
            None => i64::MIN,
        }
    }
}

/// Turns needed to move `agents` agents over paths of the given tunnel
/// counts when every path is filled evenly.
///
/// A path with `e` tunnels delivers its first agent on turn `e` and one more
/// every turn after, so by turn `T` it has delivered `max(0, T - e + 1)`.
/// Returns the smallest `T` at which the paths together deliver `agents`,
/// or `None` for an empty path list.  Zero-length paths deliver everyone at
/// turn 0.
pub fn estimate_turns(edges: &[u64], agents: u32) -> Option<u64> {
    if edges.is_empty() {
        return None;
    }
    if agents == 0 || edges.contains(&0) {
        return Some(0);
    }
    let mut sorted = edges.to_vec();
    sorted.sort_unstable();

    let n = agents as u64;
    let mut best = u64::MAX;
    let mut sum = 0u64;
    for (i, &e) in sorted.iter().enumerate() {
        let k = i as u64 + 1;
        sum += e;
        // k·T − sum + k ≥ n  ⇒  T ≥ (n + sum − k) / k
        let t = (n + sum - k).div_ceil(k);
        if t + 1 < e {
            // The k-th path would not have delivered anyone yet.
            break;
        }
        best = best.min(t);
    }
    Some(best)
}

// ── Public entry points ───────────────────────────────────────────────────────

/// Select paths with the scorer named by `strategy`.
pub fn select_with_strategy(
    paths:       &[Path],
    agent_count: u32,
    strategy:    SelectionStrategy,
) -> PathResult<PathSet> {
    match strategy {
        SelectionStrategy::MaxPaths => select_paths(paths, agent_count, &MaxCardinality),
        SelectionStrategy::MinTurns => select_paths(paths, agent_count, &MinTurns),
    }
}

/// Choose a set of interior-disjoint paths from `paths` using `scorer`, then
/// keep at most `agent_count` of them.
///
/// An empty candidate list gives an empty set.
pub fn select_paths<S: SubsetScorer>(
    paths:       &[Path],
    agent_count: u32,
    scorer:      &S,
) -> PathResult<PathSet> {
    if paths.len() > MAX_CANDIDATES {
        return Err(PathError::CandidateLimit { got: paths.len(), max: MAX_CANDIDATES });
    }

    let mut sorted: Vec<&Path> = paths.iter().collect();
    sorted.sort_by_key(|p| p.len());

    let conflicts = ConflictMatrix::build(&sorted);
    let mut search = SubsetSearch {
        sorted: &sorted,
        conflicts: &conflicts,
        scorer,
        agent_count,
        best: None,
        nodes: 0,
    };
    let mut selected = Vec::new();
    let mut chosen = Vec::new();
    search.extend(0, &mut selected, &mut chosen);

    let nodes = search.nodes;
    let best = search.best.map(|(_, idx)| idx).unwrap_or_default();
    let picked: Vec<Path> = best
        .iter()
        .take(agent_count as usize)
        .map(|&i| sorted[i].clone())
        .collect();

    debug!(
        candidates = paths.len(),
        nodes,
        best = best.len(),
        kept = picked.len(),
        "selected disjoint paths"
    );
    Ok(PathSet::from_disjoint(picked))
}

// ── Search internals ──────────────────────────────────────────────────────────

struct SubsetSearch<'a, 'p, S> {
    sorted:      &'a [&'p Path],
    conflicts:   &'a ConflictMatrix,
    scorer:      &'a S,
    agent_count: u32,
    /// Incumbent score and its index sequence into `sorted`.
    best:        Option<(i64, Vec<usize>)>,
    nodes:       u64,
}

impl<'p, S: SubsetScorer> SubsetSearch<'_, 'p, S> {
    /// Score the current selection, then try every compatible extension
    /// starting at `from`.  `selected` and `chosen` are restored on return.
    fn extend(&mut self, from: usize, selected: &mut Vec<usize>, chosen: &mut Vec<&'p Path>) {
        self.nodes += 1;

        let score = self.scorer.score(chosen, self.agent_count);
        if self.best.as_ref().is_none_or(|(b, _)| score > *b) {
            self.best = Some((score, selected.clone()));
        }

        for i in from..self.sorted.len() {
            if let (Some(bound), Some((b, _))) = (
                self.scorer.upper_bound(selected.len(), self.sorted.len() - i),
                self.best.as_ref(),
            ) {
                if bound <= *b {
                    break;
                }
            }
            if !self.conflicts.compatible(selected, i) {
                continue;
            }
            selected.push(i);
            chosen.push(self.sorted[i]);
            self.extend(i + 1, selected, chosen);
            chosen.pop();
            selected.pop();
        }
    }
}
