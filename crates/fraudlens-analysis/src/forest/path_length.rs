//! Expected path lengths of unsuccessful BST searches.

use fraudlens_core::constants::EULER_MASCHERONI;

/// Harmonic number approximation `H(i) ≈ ln(i) + γ`.
pub fn harmonic(i: f64) -> f64 {
    i.ln() + EULER_MASCHERONI
}

/// `c(n)`: average path length of an unsorted BST over `n` points.
/// `c(0) = c(1) = 0`.
pub fn average_path_length(n: usize) -> f64 {
    if n <= 1 {
        return 0.0;
    }
    let n = n as f64;
    2.0 * harmonic(n - 1.0) - 2.0 * (n - 1.0) / n
}

/// `ceil(log2(ψ))`; zero for ψ ≤ 1.
pub fn max_depth_for(subsample_size: usize) -> usize {
    if subsample_size <= 1 {
        return 0;
    }
    (subsample_size as f64).log2().ceil() as usize
}
