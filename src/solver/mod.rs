mod expand;
mod stats;

use std::collections::VecDeque;
use std::fmt::{self, Debug, Display, Formatter};

use fnv::FnvHashSet;
use log::debug;

use crate::puzzle::Puzzle;
use crate::state::State;
use crate::Solve;

pub use self::expand::expand;
pub use self::stats::Stats;

/// A state waiting in (or just taken from) the frontier.
///
/// Doesn't remember how it was reached - only the final state and cost are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode {
    pub state: State,
    pub cost: u32,
}

impl SearchNode {
    pub fn new(state: State, cost: u32) -> Self {
        Self { state, cost }
    }
}

/// Gets to see every node the search dequeues, in order, before it's checked against the goal.
pub trait Observer {
    fn node_processed(&mut self, node: &SearchNode);
}

impl<F: FnMut(&SearchNode)> Observer for F {
    fn node_processed(&mut self, node: &SearchNode) {
        (*self)(node)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoObserver;

impl Observer for NoObserver {
    fn node_processed(&mut self, _node: &SearchNode) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Solved { state: State, cost: u32 },
    /// Frontier ran out - the goal is unreachable.
    Exhausted,
}

impl SearchOutcome {
    pub fn is_solved(&self) -> bool {
        match *self {
            SearchOutcome::Solved { .. } => true,
            SearchOutcome::Exhausted => false,
        }
    }

    pub fn cost(&self) -> Option<u32> {
        match *self {
            SearchOutcome::Solved { cost, .. } => Some(cost),
            SearchOutcome::Exhausted => None,
        }
    }
}

impl Display for SearchOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SearchOutcome::Solved { state, cost } => write!(f, "{} (cost {})", state, cost),
            SearchOutcome::Exhausted => write!(f, "No solution"),
        }
    }
}

pub struct SolverOk {
    pub outcome: SearchOutcome,
    pub stats: Stats,
}

impl SolverOk {
    fn new(outcome: SearchOutcome, stats: Stats) -> Self {
        Self { outcome, stats }
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.outcome)?;
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for Puzzle {
    fn solve(&self) -> SolverOk {
        search(self.initial, self.goal, &mut NoObserver)
    }

    fn solve_with(&self, observer: &mut dyn Observer) -> SolverOk {
        search(self.initial, self.goal, observer)
    }
}

/// Breadth-first search from `initial` to `goal`.
///
/// The goal is checked when a node is dequeued so the first hit has minimal cost.
pub fn search(initial: State, goal: State, observer: &mut dyn Observer) -> SolverOk {
    debug!("Search called");

    let mut stats = Stats::new();

    let mut to_visit = VecDeque::new();
    // mirrors the states in to_visit so we don't have to scan it
    let mut queued = FnvHashSet::default();
    let mut visited = FnvHashSet::default();

    let start = SearchNode::new(initial, 0);
    stats.add_created(start.cost);
    queued.insert(start.state);
    to_visit.push_back(start);

    while let Some(cur_node) = to_visit.pop_front() {
        queued.remove(&cur_node.state);

        if stats.add_visited(cur_node.cost) {
            debug!("Visited new depth: {}", cur_node.cost);
        }
        observer.node_processed(&cur_node);

        if cur_node.state == goal {
            debug!("Solved with cost {}", cur_node.cost);
            let outcome = SearchOutcome::Solved {
                state: cur_node.state,
                cost: cur_node.cost,
            };
            return SolverOk::new(outcome, stats);
        }

        let next_cost = cur_node.cost + 1;
        for neighbor_state in expand(&cur_node.state) {
            if visited.contains(&neighbor_state) {
                stats.add_skipped_visited(next_cost);
                continue;
            }
            if queued.contains(&neighbor_state) {
                stats.add_skipped_queued(next_cost);
                continue;
            }
            stats.add_created(next_cost);
            queued.insert(neighbor_state);
            to_visit.push_back(SearchNode::new(neighbor_state, next_cost));
        }

        // inserted after expanding - a neighbor can never equal the current state anyway
        visited.insert(cur_node.state);
    }

    debug!("Exhausted after {} states", visited.len());
    SolverOk::new(SearchOutcome::Exhausted, stats)
}
