// maturity-core/src/domain/graph/dag.rs

use crate::domain::error::DomainError;
use std::collections::{BTreeMap, BTreeSet, VecDeque};

pub struct GraphSolver;

impl GraphSolver {
    /// Layered topological sort of a prerequisite map (node -> nodes it
    /// depends on). Layer N depends only on layers 0..N-1; nodes inside a
    /// layer are in lexical order. Prerequisites that never appear as a key
    /// are still nodes (with no prerequisites of their own).
    pub fn layers(
        prerequisites: &BTreeMap<String, Vec<String>>,
    ) -> Result<Vec<Vec<String>>, DomainError> {
        let mut in_degree: BTreeMap<&str, usize> = BTreeMap::new();
        let mut dependents: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();

        // 1. Every mentioned node, keys and prerequisites alike
        for (node, prereqs) in prerequisites {
            in_degree.entry(node.as_str()).or_insert(0);
            for prereq in prereqs {
                in_degree.entry(prereq.as_str()).or_insert(0);
            }
        }

        // 2. Edges point from prerequisite to dependent; duplicates collapse
        for (node, prereqs) in prerequisites {
            for prereq in prereqs {
                if dependents
                    .entry(prereq.as_str())
                    .or_default()
                    .insert(node.as_str())
                {
                    *in_degree.entry(node.as_str()).or_insert(0) += 1;
                }
            }
        }

        // 3. Kahn, one layer per pass
        let mut queue: VecDeque<&str> = in_degree
            .iter()
            .filter(|&(_, &degree)| degree == 0)
            .map(|(&name, _)| name)
            .collect();
        let mut layers: Vec<Vec<String>> = Vec::new();
        let mut resolved = 0;

        while !queue.is_empty() {
            let layer_size = queue.len();
            let mut current_layer = Vec::with_capacity(layer_size);
            let mut next: BTreeSet<&str> = BTreeSet::new();

            for _ in 0..layer_size {
                let Some(current) = queue.pop_front() else {
                    break;
                };
                current_layer.push(current.to_string());
                resolved += 1;

                for &dependent in dependents.get(current).into_iter().flatten() {
                    if let Some(degree) = in_degree.get_mut(dependent) {
                        *degree -= 1;
                        if *degree == 0 {
                            next.insert(dependent);
                        }
                    }
                }
            }
            queue.extend(next);
            layers.push(current_layer);
        }

        // 4. Whatever is left sits on a cycle
        if resolved != in_degree.len() {
            let stuck: Vec<&str> = in_degree
                .iter()
                .filter(|&(_, &degree)| degree > 0)
                .map(|(&name, _)| name)
                .collect();
            return Err(DomainError::CircularDependency(stuck.join(", ")));
        }

        Ok(layers)
    }
}
