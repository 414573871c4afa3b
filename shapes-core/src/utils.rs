use crate::Scalar;

/// Returns edges sorted from the shortest to the longest.
#[inline]
pub(crate) fn sorted_edges(mut edges: [Scalar; 3]) -> [Scalar; 3] {
    edges.sort_by(|a, b| a.total_cmp(b));
    edges
}

/// Sum of edges, accumulated from the shortest one so every permutation gives the same bits.
#[inline]
pub(crate) fn edges_sum(edges: [Scalar; 3]) -> Scalar {
    let [x, y, z] = sorted_edges(edges);
    x + y + z
}

#[inline]
pub(crate) fn edge_pairs([a, b, c]: [Scalar; 3]) -> [(Scalar, Scalar); 3] {
    [(a, b), (a, c), (b, c)]
}

/// Inclusive triangle inequality in its perimeter form: `2 * (x + y) >= a + b + c` for every pair.
/// Degenerate triples pass, non-finite ones never do.
///
/// Sorted `z - (x - y)` must also stay non-negative when computed the way [`heron_area`] does,
/// otherwise rounding could let a triple through whose area radicand is negative.
pub(crate) fn are_edges_consistent(edges: [Scalar; 3]) -> bool {
    if edges.iter().any(|e| !e.is_finite()) {
        return false;
    }
    // sorted sum instead of `a + b + c`, may differ from it in the last bit
    let perimeter = edges_sum(edges);
    if !perimeter.is_finite() {
        return false;
    }
    let [z, y, x] = sorted_edges(edges);
    edge_pairs(edges)
        .iter()
        .all(|(p, q)| 2.0 * (p + q) >= perimeter)
        && z - (x - y) >= 0.0
}

/// Heron's formula in Kahan's arrangement.
///
/// ```plain
/// x >= y >= z
/// area = sqrt((x + (y + z)) * (z - (x - y)) * (z + (x - y)) * (x + (y - z))) / 4
/// ```
/// Parentheses matter: they keep near-degenerate triples from cancelling out.
pub(crate) fn heron_area(edges: [Scalar; 3]) -> Scalar {
    let [z, y, x] = sorted_edges(edges);
    ((x + (y + z)) * (z - (x - y)) * (z + (x - y)) * (x + (y - z))).sqrt() * 0.25
}
