//! 拓扑排序算法模块
//!
//! 基于DFS时间戳的拓扑排序：按离开时间严格递减排列节点即得到逆后序

use std::fmt::Debug;
use std::hash::Hash;

use crate::graph::{Directed, Graph};
use crate::services::algorithm::cycle_detection::timestamps;

/// 拓扑排序算法结构体
pub struct TopologicalSort;

impl TopologicalSort {
    /// 对有向图做拓扑排序；图中有环时返回空序列
    pub fn sort<N, E>(graph: &Graph<N, E, Directed>) -> Vec<N>
    where
        N: Clone + Eq + Hash + Debug,
    {
        let Some(ts) = timestamps(graph.adjacency()) else {
            log::debug!("图中存在环，无法进行拓扑排序");
            return Vec::new();
        };

        let mut order: Vec<usize> = (0..graph.node_count()).collect();
        debug_assert!(order.iter().all(|&i| ts.entry[i] < ts.exit[i]));
        // 离开时间唯一，无需额外的平局规则
        order.sort_unstable_by(|&a, &b| ts.exit[b].cmp(&ts.exit[a]));

        let labels = graph.labels();
        order.into_iter().map(|i| labels[i].clone()).collect()
    }

    /// 入度为 0 的节点
    pub fn source_nodes<N, E>(graph: &Graph<N, E, Directed>) -> Vec<N>
    where
        N: Clone + Eq + Hash + Debug,
    {
        let mut in_degree = vec![0usize; graph.node_count()];
        for records in graph.adjacency() {
            for record in records {
                in_degree[record.to] += 1;
            }
        }

        graph
            .labels()
            .iter()
            .zip(in_degree)
            .filter(|(_, degree)| *degree == 0)
            .map(|(label, _)| label.clone())
            .collect()
    }

    /// 出度为 0 的节点
    pub fn sink_nodes<N, E>(graph: &Graph<N, E, Directed>) -> Vec<N>
    where
        N: Clone + Eq + Hash + Debug,
    {
        graph
            .labels()
            .iter()
            .zip(graph.adjacency())
            .filter(|(_, records)| records.is_empty())
            .map(|(label, _)| label.clone())
            .collect()
    }
}

impl<N, E> Graph<N, E, Directed>
where
    N: Clone + Eq + Hash + Debug,
{
    /// 拓扑排序；有环时返回空序列
    pub fn topo_sort(&self) -> Vec<N> {
        TopologicalSort::sort(self)
    }
}
