//! Serializable structure summaries for diagnostics and tests.
//!
//! Face loops are reported as lists of stable node ids, each loop rotated to
//! start at its smallest id and the loops sorted by that id, so two
//! structurally identical graphs produce identical summaries regardless of
//! construction order.

use serde::{Deserialize, Serialize};
use slotmap::SecondaryMap;

use crate::graph::Graph;
use crate::node::NodeId;

/// Snapshot of a graph's face structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSummary {
    /// Total node count.
    pub nodes: usize,
    /// Total face-cycle count, exterior faces included.
    pub faces: usize,
    /// Node ids around each face, canonically rotated and sorted.
    pub face_loops: Vec<Vec<u32>>,
    /// Indices into `face_loops` of the faces marked exterior.
    pub exterior_faces: Vec<usize>,
}

impl Graph {
    /// Build a canonical summary of the face structure.
    pub fn summary(&self) -> GraphSummary {
        let mut seen: SecondaryMap<NodeId, ()> = SecondaryMap::new();
        let mut loops = Vec::new();
        for seed in self.node_ids() {
            if seen.contains_key(seed) {
                continue;
            }
            let mut ids = Vec::new();
            let mut exterior = false;
            let mut cur = seed;
            loop {
                seen.insert(cur, ());
                ids.push(self.node_id(cur));
                exterior |= self.is_exterior(cur);
                cur = self.face_succ(cur);
                if cur == seed {
                    break;
                }
            }
            // Rotate so the smallest id leads.
            if let Some(at) = ids.iter().enumerate().min_by_key(|(_, id)| **id).map(|(i, _)| i) {
                ids.rotate_left(at);
            }
            loops.push((ids, exterior));
        }
        loops.sort_by_key(|(ids, _)| ids.first().copied().unwrap_or(0));
        let exterior_faces = loops
            .iter()
            .enumerate()
            .filter_map(|(i, (_, ext))| ext.then_some(i))
            .collect();
        GraphSummary {
            nodes: self.node_count(),
            faces: loops.len(),
            face_loops: loops.into_iter().map(|(ids, _)| ids).collect(),
            exterior_faces,
        }
    }

    /// Pretty-printed JSON of [`Graph::summary`], for debugging sessions.
    ///
    /// # Errors
    ///
    /// Passes through the serializer error, which for this data shape does
    /// not occur in practice.
    pub fn dump_face_loops(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.summary())
    }
}
