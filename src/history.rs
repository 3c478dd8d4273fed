//! History of completed connection sets and its console report

use crate::constants::output::HISTORY_PREFIX;
use crate::nodes::BlockGraph;
use log::info;
use std::io::{self, Write};

/// One completed set: `(start_index, end_index)` pairs, one-based in drop order
pub type ConnectionSnapshot = Vec<(usize, usize)>;

/// Linear record of every completed connection set
#[derive(Debug, Clone, Default)]
pub struct ConnectionHistory {
    snapshots: Vec<ConnectionSnapshot>,
}

impl ConnectionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Snapshots the graph's connections, records them, and writes the report to `out`.
    ///
    /// The report is one `<start> -> <end>` line per connection followed by the
    /// accumulated history line.
    pub fn complete<W: Write>(&mut self, graph: &BlockGraph, out: &mut W) -> io::Result<&ConnectionSnapshot> {
        let snapshot = graph.indexed_connections();
        info!("Completed connection set {} with {} connections", self.snapshots.len() + 1, snapshot.len());
        self.snapshots.push(snapshot);

        let latest = &self.snapshots[self.snapshots.len() - 1];
        for (start, end) in latest {
            writeln!(out, "{} -> {}", start, end)?;
        }
        writeln!(out, "{} {}", HISTORY_PREFIX, self.format_history())?;
        out.flush()?;
        Ok(latest)
    }

    /// Accumulated history in list-of-tuples notation, e.g. `[[(1, 2)], []]`
    pub fn format_history(&self) -> String {
        format_snapshots(&self.snapshots)
    }
}

fn format_snapshots(snapshots: &[ConnectionSnapshot]) -> String {
    let sets: Vec<String> = snapshots
        .iter()
        .map(|snapshot| {
            let pairs: Vec<String> = snapshot
                .iter()
                .map(|(start, end)| format!("({}, {})", start, end))
                .collect();
            format!("[{}]", pairs.join(", "))
        })
        .collect();
    format!("[{}]", sets.join(", "))
}
