use super::Graph;
use crate::{Error, ErrorKind};
use std::fmt::Display;
use std::hash::Hash;

impl<T> Graph<T>
where
    T: Eq + Clone + Hash + Display + Send + Sync,
{
    /// Returns an `Err` if the `graph` is a directed graph.
    pub fn ensure_undirected(&self) -> Result<(), Error> {
        if self.specs.directed {
            return Err(Error {
                kind: ErrorKind::InvalidGraph,
                message: "This algorithm requires an undirected graph.".to_string(),
            });
        }
        Ok(())
    }

    /// Returns an `Err` if any of the `graph`'s edge weights is NaN or negative.
    pub fn ensure_weights_valid(&self) -> Result<(), Error> {
        for edge in &self.edges_vec {
            if edge.weight.is_nan() || edge.weight < 0.0 {
                return Err(Error {
                    kind: ErrorKind::InvalidGraph,
                    message: format!(
                        "Edge ({}, {}) has an invalid weight: {}. \
                        Weights must be non-negative and not NaN.",
                        edge.u, edge.v, edge.weight
                    ),
                });
            }
        }
        Ok(())
    }

    /// Returns an `Err` if any of the `graph`'s edges is a self-loop.
    pub fn ensure_no_self_loops(&self) -> Result<(), Error> {
        for edge in &self.edges_vec {
            if edge.u == edge.v {
                return Err(Error {
                    kind: ErrorKind::InvalidGraph,
                    message: format!(
                        "Edge ({}, {}) is a self-loop; this algorithm does not accept them.",
                        edge.u, edge.v
                    ),
                });
            }
        }
        Ok(())
    }
}
