use std::fmt::{self, Debug, Display, Formatter};

use prettytable::format::consts::FORMAT_CLEAN;
use prettytable::{Cell, Row, Table};
use separator::Separatable;

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Stats {
    created_states: Vec<i32>,
    visited_states: Vec<i32>,
    skipped_visited: Vec<i32>,
    skipped_queued: Vec<i32>,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_created(&self) -> i32 {
        self.created_states.iter().sum::<i32>()
    }

    pub fn total_visited(&self) -> i32 {
        self.visited_states.iter().sum::<i32>()
    }

    pub fn total_skipped_visited(&self) -> i32 {
        self.skipped_visited.iter().sum::<i32>()
    }

    pub fn total_skipped_queued(&self) -> i32 {
        self.skipped_queued.iter().sum::<i32>()
    }

    /// Deepest level any state was created at.
    pub fn max_depth(&self) -> usize {
        self.created_states.len().saturating_sub(1)
    }

    pub fn created_by_depth(&self) -> &[i32] {
        &self.created_states
    }

    pub fn visited_by_depth(&self) -> &[i32] {
        &self.visited_states
    }

    pub(crate) fn add_created(&mut self, depth: u32) -> bool {
        Self::add(&mut self.created_states, depth)
    }

    /// Returns true if this is the first state visited at this depth.
    pub(crate) fn add_visited(&mut self, depth: u32) -> bool {
        Self::add(&mut self.visited_states, depth)
    }

    pub(crate) fn add_skipped_visited(&mut self, depth: u32) -> bool {
        Self::add(&mut self.skipped_visited, depth)
    }

    pub(crate) fn add_skipped_queued(&mut self, depth: u32) -> bool {
        Self::add(&mut self.skipped_queued, depth)
    }

    fn add(counts: &mut Vec<i32>, depth: u32) -> bool {
        let depth = depth as usize;
        let mut ret = false;

        // while because skipped candidates start at depth 2
        while depth >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[depth] += 1;
        ret
    }

    fn depth_table(&self) -> Table {
        fn at(counts: &[i32], i: usize) -> String {
            counts.get(i).cloned().unwrap_or(0).separated_string()
        }

        let mut table = Table::new();
        table.set_format(*FORMAT_CLEAN);
        table.set_titles(Row::new(vec![
            Cell::new("Depth"),
            Cell::new("Created"),
            Cell::new("Visited"),
            Cell::new("Skipped (visited)"),
            Cell::new("Skipped (queued)"),
        ]));

        // skipped candidates can be one level deeper than anything created
        let depths = self
            .created_states
            .len()
            .max(self.skipped_visited.len())
            .max(self.skipped_queued.len());
        for i in 0..depths {
            table.add_row(Row::new(vec![
                Cell::new(&format!("{}:", i)),
                Cell::new(&at(&self.created_states, i)),
                Cell::new(&at(&self.visited_states, i)),
                Cell::new(&at(&self.skipped_visited, i)),
                Cell::new(&at(&self.skipped_queued, i)),
            ]));
        }
        table
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "created by depth: {:?}", self.created_states)?;
        writeln!(f, "visited by depth: {:?}", self.visited_states)?;
        writeln!(f, "skipped as visited by depth: {:?}", self.skipped_visited)?;
        writeln!(f, "skipped as queued by depth: {:?}", self.skipped_queued)?;
        writeln!(f, "total created: {}", self.total_created().separated_string())?;
        writeln!(f, "total visited: {}", self.total_visited().separated_string())?;
        writeln!(
            f,
            "total skipped: {} / {}",
            self.total_skipped_visited().separated_string(),
            self.total_skipped_queued().separated_string()
        )
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let created = self.total_created();
        let visited = self.total_visited();
        let left = created - visited;
        writeln!(f, "States created total: {}", created.separated_string())?;
        writeln!(f, "Unique states visited total: {}", visited.separated_string())?;
        writeln!(
            f,
            "Skipped as already visited: {}",
            self.total_skipped_visited().separated_string()
        )?;
        writeln!(
            f,
            "Skipped as already queued: {}",
            self.total_skipped_queued().separated_string()
        )?;
        writeln!(f, "Created but not visited total: {}", left.separated_string())?;
        writeln!(f)?;
        write!(f, "{}", self.depth_table())
    }
}
