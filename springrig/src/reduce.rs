use crate::Scene;
use std::collections::HashSet;

/// Keeps only the topmost members of `nodes` with respect to the
/// ancestor/descendant relation, preserving input order.
///
/// A candidate is dropped when any of its ancestors is also a candidate, so
/// every surviving node anchors one independent limb or strand.
pub fn reduce_to_roots(scene: &Scene, nodes: &[usize]) -> Vec<usize> {
    let members: HashSet<usize> = nodes.iter().copied().collect();
    nodes
        .iter()
        .copied()
        .filter(|&node| {
            let mut current = scene.parent(node);
            while let Some(ancestor) = current {
                if members.contains(&ancestor) {
                    return false;
                }
                current = scene.parent(ancestor);
            }
            true
        })
        .collect()
}
