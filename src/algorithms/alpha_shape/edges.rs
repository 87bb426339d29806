use std::collections::BTreeSet;

use crate::data::{Edge, Triangle};
use crate::AlphaScalar;

/// $O(t \log t)$ The distinct undirected edges of a set of triangles, in
/// order of first appearance.
pub fn unique_edges<T>(triangles: &[Triangle<T>]) -> Vec<Edge<T>>
where
  T: AlphaScalar,
{
  let mut seen = BTreeSet::new();
  triangles
    .iter()
    .flat_map(|tri| tri.edges())
    .filter(|edge| seen.insert(edge.key()))
    .collect()
}
