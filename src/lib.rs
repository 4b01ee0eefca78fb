#[doc = include_str!("../README.md")]
#[macro_use]
extern crate doc_comment;
doc_comment!(include_str!("../README.md"));

mod edge;
pub use edge::Edge;

mod error;
pub use error::{Error, ErrorKind};

pub mod ext;

mod graph;
pub use graph::Graph;

pub mod algorithms;

mod clustering;
pub use clustering::{get_clustering, ClusteringAlgorithm, ClusteringProvider};

mod graph_specs;
pub use graph_specs::{EdgeDedupeStrategy, GraphSpecs, MissingNodeStrategy, SelfLoopStrategy};

mod sense;
pub use sense::{Context, Sense, SenseInventory};

mod similarity;
pub use similarity::{cosine_similarity, ContextSimilarity};
