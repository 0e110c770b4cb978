use std::fmt::{Debug, Display, Formatter, Result};

use separator::Separatable;

/// Counters for one search, bucketed by depth (number of moves from the initial state).
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Stats {
    created_states: Vec<u64>,
    visited_states: Vec<u64>,
    duplicate_states: Vec<u64>,
}

impl Stats {
    pub fn new() -> Self {
        Stats::default()
    }

    /// States generated by applying a move (plus the initial state).
    pub fn total_created(&self) -> u64 {
        self.created_states.iter().sum::<u64>()
    }

    /// States taken off the frontier and expanded.
    pub fn total_visited(&self) -> u64 {
        self.visited_states.iter().sum::<u64>()
    }

    /// States thrown away because they were already seen.
    pub fn total_duplicates(&self) -> u64 {
        self.duplicate_states.iter().sum::<u64>()
    }

    /// Greatest depth any state was created at.
    pub fn max_depth(&self) -> usize {
        self.created_states.len().saturating_sub(1)
    }

    pub(crate) fn add_created(&mut self, dist: u32) -> bool {
        Self::add(&mut self.created_states, dist)
    }

    pub(crate) fn add_visited(&mut self, dist: u32) -> bool {
        Self::add(&mut self.visited_states, dist)
    }

    pub(crate) fn add_duplicate(&mut self, dist: u32) -> bool {
        Self::add(&mut self.duplicate_states, dist)
    }

    /// Returns true if this is the first state at that depth.
    fn add(counts: &mut Vec<u64>, dist: u32) -> bool {
        let dist = dist as usize;
        let mut ret = false;

        // while because greedy can skip depths
        while dist >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[dist] += 1;
        ret
    }

    fn at(counts: &[u64], depth: usize) -> u64 {
        counts.get(depth).cloned().unwrap_or(0)
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "created by depth: {:?}", self.created_states)?;
        writeln!(f, "reached duplicates by depth: {:?}", self.duplicate_states)?;
        writeln!(f, "visited by depth: {:?}", self.visited_states)?;
        writeln!(f, "total created: {}", self.total_created().separated_string())?;
        writeln!(f, "total reached duplicates: {}", self.total_duplicates().separated_string())?;
        write!(f, "total visited: {}", self.total_visited().separated_string())
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let created = self.total_created();
        let visited = self.total_visited();
        let duplicates = self.total_duplicates();
        let left = created - visited - duplicates;
        writeln!(f, "States created total: {}", created.separated_string())?;
        writeln!(f, "Visited total: {}", visited.separated_string())?;
        writeln!(f, "Reached duplicates total: {}", duplicates.separated_string())?;
        writeln!(f, "Created but not reached total: {}", left.separated_string())?;
        writeln!(f)?;

        writeln!(
            f,
            "{:<15}{:<15}{:<15}{:<15}{}",
            "Depth", "Created", "Visited", "Duplicates", "Unknown (not reached)"
        )?;
        // created_states is the longest vec
        for depth in 0..self.created_states.len() {
            let created = self.created_states[depth];
            let visited = Self::at(&self.visited_states, depth);
            let duplicates = Self::at(&self.duplicate_states, depth);
            writeln!(
                f,
                "{:<15}{:<15}{:<15}{:<15}{}",
                format!("{}:", depth),
                created.separated_string(),
                visited.separated_string(),
                duplicates.separated_string(),
                (created - visited - duplicates).separated_string()
            )?;
        }
        Ok(())
    }
}
