#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/**
Behavior knobs for a [Graph](./struct.Graph.html).

The graphs this crate clusters are simple undirected similarity graphs over
items, so `undirected` is the baseline: one edge per item pair, no
self-loops, and strict errors for anything unexpected. The remaining knobs
exist for the graphs the algorithms derive themselves: MaxMax builds a
directed maximal-neighbor graph that silently ignores repeated insertions
(`EdgeDedupeStrategy::KeepFirst`), and Watset assembles its sense graph
with `EdgeDedupeStrategy::KeepLast`, where writing an edge that already
exists overwrites its weight.

# Example: an undirected similarity graph built straight from an edge list

```
use watset::GraphSpecs;
let specs = GraphSpecs::undirected_create_missing();
```

# Example: last-write-wins weights, as used for the sense graph

```
use watset::{EdgeDedupeStrategy, GraphSpecs};
let specs = GraphSpecs {
    edge_dedupe_strategy: EdgeDedupeStrategy::KeepLast,
    ..GraphSpecs::undirected()
};
```
*/
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GraphSpecs {
    /// `true` for a directed graph, `false` for an undirected one.
    pub directed: bool,
    /// What to do when an edge is added between a pair of nodes that is
    /// already connected.
    pub edge_dedupe_strategy: EdgeDedupeStrategy,
    /// What to do when a new edge mentions a node the graph doesn't have.
    pub missing_node_strategy: MissingNodeStrategy,
    /// What to do with an edge that starts and ends on the same node.
    pub self_loop_strategy: SelfLoopStrategy,
}

/**
What happens when an edge is added between a pair of nodes that is already
connected.

`Error`: refuse the duplicate.

`KeepFirst`: keep the existing edge and silently discard the new one.

`KeepLast`: replace the existing edge, overwriting its weight. This is the
builder semantics the sense graph relies on: when both endpoints of an item
edge contribute the same sense-level edge, the later write wins.
*/
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EdgeDedupeStrategy {
    Error,
    KeepFirst,
    KeepLast,
}

/**
What happens when a new edge mentions a node the graph doesn't have.

`Create`: add the missing node on the fly.

`Error`: refuse the edge.
*/
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MissingNodeStrategy {
    Create,
    Error,
}

/**
What happens with an edge that starts and ends on the same node. Similarity
graphs relate distinct items, so self-loops are refused by default; `Drop`
discards them silently, and `Allow` stores them.
*/
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SelfLoopStrategy {
    Allow,
    Drop,
    Error,
}

impl GraphSpecs {
    /**
    The baseline specs for the undirected similarity graphs this crate
    clusters: simple edges, no self-loops, and errors on duplicate edges or
    unknown nodes.

    # Examples

    ```
    use watset::GraphSpecs;
    let specs = GraphSpecs::undirected();
    assert!(!specs.directed);
    ```
    */
    pub fn undirected() -> GraphSpecs {
        GraphSpecs {
            directed: false,
            edge_dedupe_strategy: EdgeDedupeStrategy::Error,
            missing_node_strategy: MissingNodeStrategy::Error,
            self_loop_strategy: SelfLoopStrategy::Error,
        }
    }

    /**
    Like [undirected](#method.undirected), but nodes mentioned by a new
    edge are created on the fly. The usual choice when building a graph
    straight from a weighted edge list.

    # Examples

    ```
    use watset::GraphSpecs;
    let specs = GraphSpecs::undirected_create_missing();
    ```
    */
    pub fn undirected_create_missing() -> GraphSpecs {
        GraphSpecs {
            missing_node_strategy: MissingNodeStrategy::Create,
            ..GraphSpecs::undirected()
        }
    }

    /**
    The baseline specs for directed graphs, such as the maximal-neighbor
    graph MaxMax derives. As strict as [undirected](#method.undirected).

    # Examples

    ```
    use watset::GraphSpecs;
    let specs = GraphSpecs::directed();
    assert!(specs.directed);
    ```
    */
    pub fn directed() -> GraphSpecs {
        GraphSpecs {
            directed: true,
            ..GraphSpecs::undirected()
        }
    }
}
