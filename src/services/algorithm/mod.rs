//! 算法模块
//!
//! 包含图相关算法实现。每个算法是一个无状态的结构体，
//! 同时在 `Graph` 上提供同名的便捷方法。

pub mod bellman_ford;
pub mod bfs;
pub mod cycle_detection;
pub mod dfs;
pub mod dijkstra;
pub mod minimum_spanning_tree;
pub mod shortest_path;
pub mod strongly_connected_components;
pub mod topological_sort;
mod union_find;

// 重新导出常用算法结构体
pub use bellman_ford::BellmanFord;
pub use bfs::Bfs;
pub use cycle_detection::CycleDetection;
pub use dfs::Dfs;
pub use dijkstra::Dijkstra;
pub use minimum_spanning_tree::{Kruskal, Prim};
pub use shortest_path::{UnweightedShortestPath, WeightedShortestPath};
pub use strongly_connected_components::StronglyConnectedComponents;
pub use topological_sort::TopologicalSort;
