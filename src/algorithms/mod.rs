/// Soft clustering via maximal-neighbor graph transformation.
pub mod maxmax;

/// The trivial baseline that puts every node into a single cluster.
pub mod together;

/// Sense-aware clustering with the local-global Watset meta-algorithm.
pub mod watset;
