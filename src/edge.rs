#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Debug, Display};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/**
Represents a graph edge as (`u`, `v`) with a `weight`.

An edge created without a weight carries `f64::NAN`, meaning "weight not
specified". Equality and hashing consider only (`u`, `v`).
**/
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Edge<T> {
    pub u: T,
    pub v: T,
    pub weight: f64,
}

impl<T> Edge<T> {
    /**
    Creates a new `Edge` with an unspecified (`f64::NAN`) weight.

    ```
    use watset::Edge;
    let edge = Edge::new("n1", "n2");
    assert!(edge.weight.is_nan());
    ```
    **/
    pub fn new(u: T, v: T) -> Arc<Edge<T>> {
        Arc::new(Edge {
            u,
            v,
            weight: f64::NAN,
        })
    }

    /**
    Creates a (`u`, `v`) `Edge` with the given `weight`.

    ```
    use watset::Edge;
    let edges = vec![
        Edge::with_weight("n1", "n2", 1.0),
        Edge::with_weight("n2", "n3", 2.0),
    ];
    ```
    **/
    pub fn with_weight(u: T, v: T, weight: f64) -> Arc<Edge<T>> {
        Arc::new(Edge { u, v, weight })
    }

    /**
    Reverses the edge. (u, v) -> (v, u)
    ```
    use watset::Edge;
    let edge1 = Edge { u: "n2", v: "n1", weight: 1.0 };
    let edge2 = edge1.reversed();
    // edge2 is ("n1", "n2")
    ```
    **/
    pub fn reversed(self: Edge<T>) -> Edge<T> {
        Edge {
            u: self.v,
            v: self.u,
            ..self
        }
    }

    /**
    Returns the endpoint opposite to `vertex`.

    ```
    use watset::Edge;
    let edge = Edge::with_weight("n1", "n2", 1.0);
    assert_eq!(edge.opposite(&"n1"), &"n2");
    ```
    **/
    pub fn opposite(&self, vertex: &T) -> &T
    where
        T: PartialEq,
    {
        match &self.u == vertex {
            true => &self.v,
            false => &self.u,
        }
    }
}

impl<T: PartialEq> PartialEq for Edge<T> {
    fn eq(&self, other: &Self) -> bool {
        self.u == other.u && self.v == other.v
    }
}

impl<T: Eq> Eq for Edge<T> {}

impl<T: Debug> fmt::Debug for Edge<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Edge")
            .field("u", &self.u)
            .field("v", &self.v)
            .field("weight", &self.weight)
            .finish()
    }
}

impl<T: Display> fmt::Display for Edge<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.u, self.v)
    }
}

impl<T: Hash> Hash for Edge<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.u.hash(state);
        self.v.hash(state);
    }
}
