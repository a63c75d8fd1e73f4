//! 图核心模块
//!
//! 包含节点注册表、邻接存储、方向策略、边权类型和算法结果类型

pub mod direction;
#[allow(clippy::module_inception)]
pub mod graph;
pub mod registry;
pub mod types;
pub mod weight;

pub use direction::{Directed, Direction, Undirected};
pub use graph::{DiGraph, Graph, UnGraph};
pub use registry::NodeRegistry;
pub use types::{EdgeRecord, FullEdge, MinimumSpanningTree, NodePair, ShortestPaths, Traversal};
pub use weight::{Measure, Weight};
