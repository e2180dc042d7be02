//! Threshold cutting and forest flattening.
//!
//! Cutting severs every link whose distance exceeds the cutoff, promoting the
//! pixel to a tree root. Flattening then resolves each pixel to its ultimate
//! root by pointer doubling: `next[p] = cur[cur[p]]`, repeated until the array
//! stops changing. Every iteration reads the previous buffer and writes a
//! fresh one; the buffers are never aliased, so the result cannot depend on
//! pixel visitation order.
//!
//! The pre-cut parent graph is acyclic (edges point toward strictly higher
//! density), so the fixed point is reached in O(log depth) iterations. The
//! loop nevertheless carries a hard iteration bound as a safety valve.

use crate::image::{FloatMap, IndexMap};
use log::debug;

/// Reset `parents[p] = p` for every pixel whose link distance exceeds `tau`.
///
/// Local maxima carry infinite distances, so they are severed by any finite
/// `tau` while already being their own parent; the returned count covers only
/// links that actually pointed elsewhere.
pub fn cut_links(parents: &mut IndexMap, distances: &FloatMap, tau: f64) -> usize {
    let mut cut = 0usize;
    for (i, parent) in parents.data.iter_mut().enumerate() {
        if distances.data[i] > tau {
            if *parent != i {
                cut += 1;
            }
            *parent = i;
        }
    }
    debug!("cutter: severed {cut} links above tau={tau}");
    cut
}

/// Result of [`flatten_forest`]: root labels plus the iteration count.
#[derive(Clone, Debug)]
pub struct FlattenOutcome {
    /// Per-pixel flat index of the tree root.
    pub labels: IndexMap,
    /// Pointer-doubling iterations performed, including the one that
    /// confirmed the fixed point.
    pub iterations: usize,
}

/// Resolve every pixel to its tree root by iterated pointer doubling.
pub fn flatten_forest(parents: &IndexMap) -> FlattenOutcome {
    let n = parents.data.len();
    let mut cur = parents.data.clone();
    let mut iterations = 0usize;
    // acyclicity guarantees convergence; n + 1 is an unreachable backstop
    for _ in 0..=n {
        let next = double_step(&cur);
        iterations += 1;
        let done = next == cur;
        cur = next;
        if done {
            break;
        }
    }
    debug!("flattener: converged after {iterations} iterations");
    FlattenOutcome {
        labels: IndexMap {
            w: parents.w,
            h: parents.h,
            stride: parents.stride,
            data: cur,
        },
        iterations,
    }
}

#[cfg(not(feature = "parallel"))]
fn double_step(cur: &[usize]) -> Vec<usize> {
    cur.iter().map(|&p| cur[p]).collect()
}

#[cfg(feature = "parallel")]
fn double_step(cur: &[usize]) -> Vec<usize> {
    use rayon::prelude::*;

    cur.par_iter().map(|&p| cur[p]).collect()
}

/// Number of distinct roots in a flattened label field.
pub fn count_segments(labels: &IndexMap) -> usize {
    let mut roots = labels.data.clone();
    roots.sort_unstable();
    roots.dedup();
    roots.len()
}
