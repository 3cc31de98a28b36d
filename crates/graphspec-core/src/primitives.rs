//! # Innate Primitives
//!
//! Size guards and classification thresholds for the inference engine.
//!
//! Guards are part of observable behaviour: above a guard the corresponding
//! computer returns its abstention variant (`unconstrained`) instead of
//! running. Other implementations must use the same values for their results
//! to agree.

// =============================================================================
// EXPONENTIAL SEARCH GUARDS
// =============================================================================

/// Maximum vertex count for Hamiltonian and traceable backtracking.
pub const BACKTRACKING_MAX_VERTICES: usize = 10;

/// Maximum vertex count for the exact self-complementarity search.
pub const SELF_COMPLEMENTARY_MAX_VERTICES: usize = 8;

/// Maximum vertex count for the vertex-transitivity orbit search.
pub const VERTEX_TRANSITIVE_MAX_VERTICES: usize = 6;

/// Maximum number of non-probe pairs enumerated as fill-in candidates.
///
/// 10 pairs = 1024 completions.
pub const PROBE_MAX_PAIRS: usize = 10;

/// Maximum vertex count for probe recognition without a designated partition.
pub const PROBE_UNPARTITIONED_MAX_VERTICES: usize = 6;

// =============================================================================
// POLYNOMIAL SEARCH GUARDS
// =============================================================================

/// Maximum vertex count for materialising the complement graph.
pub const COMPLEMENT_MAX_VERTICES: usize = 512;

/// Maximum vertex count for induced small-pattern searches (P5, bull, gem, ...).
pub const INDUCED_SEARCH_MAX_VERTICES: usize = 256;

/// Maximum vertex count for the hole (induced cycle >= 5) search.
pub const HOLE_SEARCH_MAX_VERTICES: usize = 128;

/// Maximum vertex count for the asteroidal-triple search.
pub const AT_FREE_MAX_VERTICES: usize = 200;

/// Maximum vertex count for the Γ-implication (comparability) check.
///
/// The implication pass is cubic on dense graphs.
pub const COMPARABILITY_MAX_VERTICES: usize = 128;

/// Maximum vertex count for the neighbour-triple claw scan.
pub const CLAW_SEARCH_MAX_VERTICES: usize = 256;

/// Maximum vertex count for the two-clique neighbourhood cover check used by
/// the line-graph and quasi-line axes.
pub const NEIGHBOURHOOD_COVER_MAX_VERTICES: usize = 256;

/// Maximum vertex count for the isolated-hole circular-arc certificate.
pub const ISOLATED_HOLE_MAX_VERTICES: usize = 128;

/// Maximum vertex count for the cograph decomposition.
pub const COGRAPH_MAX_VERTICES: usize = 2048;

/// Maximum vertex count for the strongly-regular parameter check.
pub const STRONGLY_REGULAR_MAX_VERTICES: usize = 512;

/// Maximum vertex count for the median (modular graph) check.
pub const MODULAR_MAX_VERTICES: usize = 40;

/// Maximum vertex count for all-pairs BFS in the small-world estimate.
pub const SMALL_WORLD_MAX_VERTICES: usize = 2000;

// =============================================================================
// CLASSIFICATION THRESHOLDS
// =============================================================================

/// Edge ratio at or below which a simple undirected graph is sparse.
pub const SPARSE_RATIO: f64 = 0.10;

/// Edge ratio at or above which a simple undirected graph is dense.
pub const DENSE_RATIO: f64 = 0.90;

/// Minimum vertex count for a scale-free estimate.
pub const SCALE_FREE_MIN_VERTICES: usize = 10;

/// Minimum number of distinct positive degrees for a scale-free estimate.
pub const SCALE_FREE_MIN_DISTINCT_DEGREES: usize = 3;

/// Lower bound of the accepted power-law exponent.
pub const SCALE_FREE_MIN_EXPONENT: f64 = 2.0;

/// Upper bound of the accepted power-law exponent.
pub const SCALE_FREE_MAX_EXPONENT: f64 = 3.5;

/// Minimum vertex count for the small-world comparison.
pub const SMALL_WORLD_MIN_VERTICES: usize = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_guards_are_fixed() {
        assert_eq!(BACKTRACKING_MAX_VERTICES, 10);
        assert_eq!(SELF_COMPLEMENTARY_MAX_VERTICES, 8);
        assert_eq!(VERTEX_TRANSITIVE_MAX_VERTICES, 6);
    }

    #[test]
    fn guards_fit_bitmask_search() {
        // Backtracking and automorphism searches use u32 visited masks.
        assert!(BACKTRACKING_MAX_VERTICES < 32);
        assert!(SELF_COMPLEMENTARY_MAX_VERTICES < 32);
        assert!(PROBE_UNPARTITIONED_MAX_VERTICES < 32);
    }
}
