//! Recursive random partitioning of one subsample.

use rand::Rng;

use super::tree::{IsolationTree, Node};

/// Builds a single tree from rows of a shared, read-only batch.
///
/// The random source is injected so each tree can own an independent,
/// reproducible stream.
pub struct TreeBuilder<'a, R: Rng> {
    rows: &'a [&'a [f64]],
    num_features: usize,
    max_depth: usize,
    rng: R,
    candidates: Vec<(usize, f64, f64)>,
}

impl<'a, R: Rng> TreeBuilder<'a, R> {
    pub fn new(rows: &'a [&'a [f64]], num_features: usize, max_depth: usize, rng: R) -> Self {
        Self {
            rows,
            num_features,
            max_depth,
            rng,
            candidates: Vec::with_capacity(num_features),
        }
    }

    /// Build a tree over `sample`, a list of row indices. The slice is
    /// reordered in place while partitioning.
    pub fn build(mut self, sample: &mut [usize]) -> IsolationTree {
        let root = self.grow(sample, 0);
        IsolationTree::new(root)
    }

    fn grow(&mut self, points: &mut [usize], depth: usize) -> Node {
        if points.len() <= 1 || depth >= self.max_depth {
            return Node::leaf(points.len());
        }

        // Only features that still vary inside this partition are eligible.
        self.candidates.clear();
        for feature in 0..self.num_features {
            let (lo, hi) = points.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &p| {
                let v = self.rows[p][feature];
                (lo.min(v), hi.max(v))
            });
            if lo < hi {
                self.candidates.push((feature, lo, hi));
            }
        }
        if self.candidates.is_empty() {
            return Node::leaf(points.len());
        }

        let (feature_index, lo, hi) = self.candidates[self.rng.gen_range(0..self.candidates.len())];
        let threshold = draw_threshold(&mut self.rng, lo, hi);

        let split = partition(points, |p| self.rows[p][feature_index] < threshold);
        let (left_points, right_points) = points.split_at_mut(split);

        let left = self.grow(left_points, depth + 1);
        let right = self.grow(right_points, depth + 1);

        Node::Internal {
            feature_index,
            threshold,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

/// Uniform in `[lo, hi)` for any finite `lo < hi`. Interpolates instead of
/// computing `hi - lo`, which overflows for spans wider than `f64::MAX`.
fn draw_threshold<R: Rng>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    let u: f64 = rng.gen();
    let t = lo * (1.0 - u) + hi * u;
    if t >= lo && t < hi {
        t
    } else {
        lo
    }
}

/// Move every element satisfying `goes_left` to the front; return how many did.
fn partition(points: &mut [usize], mut goes_left: impl FnMut(usize) -> bool) -> usize {
    let mut split = 0;
    for i in 0..points.len() {
        if goes_left(points[i]) {
            points.swap(i, split);
            split += 1;
        }
    }
    split
}
