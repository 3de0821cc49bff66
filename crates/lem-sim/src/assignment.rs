//! Fixed agent → path assignment.

use lem_core::AgentId;

/// Which path of the path set each agent follows, computed once before the
/// first turn.
///
/// Agents are dealt round-robin over the paths in path-set order, except the
/// highest-numbered agent, which always takes path 0.  Path length plays no
/// part in the deal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    /// Path index per agent, indexed by `AgentId`.
    table: Vec<usize>,
}

impl Assignment {
    /// Deal `agent_count` agents over `path_count` paths.  `None` if there
    /// are no paths.
    pub fn round_robin(path_count: usize, agent_count: u32) -> Option<Self> {
        if path_count == 0 {
            return None;
        }
        let n = agent_count as usize;
        let table = (0..n)
            .map(|i| if i + 1 == n { 0 } else { i % path_count })
            .collect();
        Some(Self { table })
    }

    pub fn agent_count(&self) -> usize {
        self.table.len()
    }

    /// Path index for `agent`, or `None` if the id is out of range.
    pub fn path_of(&self, agent: AgentId) -> Option<usize> {
        self.table.get(agent.index()).copied()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.table
    }
}
