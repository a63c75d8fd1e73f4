//! 图算法结果类型
//!
//! 包含遍历记录、节点对距离、生成树和最短路径结果等共享数据结构

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::graph::weight::Measure;

/// 邻接表中的一条边记录
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeRecord<E> {
    /// 目标节点下标
    pub to: usize,
    /// 插入序号，无向边的两条镜像记录共享同一序号
    pub id: usize,
    /// 边负载（无权图为 `()`）
    pub payload: E,
}

/// 遍历记录：节点、父节点、到起点的距离
///
/// 起点的记录以自身作为父节点，距离为 0
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Traversal<N> {
    pub node: N,
    pub parent: N,
    pub distance: usize,
}

/// 节点对之间的最短距离
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodePair<N, D> {
    pub from: N,
    pub to: N,
    pub distance: D,
}

/// 带端点标签的完整边
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullEdge<N, E> {
    pub u: N,
    pub v: N,
    pub edge: E,
}

/// 最小生成树（非连通图上为生成森林）
#[derive(Debug, Clone, PartialEq)]
pub struct MinimumSpanningTree<N, E, A> {
    pub total_weight: A,
    pub edges: Vec<FullEdge<N, E>>,
}

impl<N, E, A> MinimumSpanningTree<N, E, A> {
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// 单源最短路径结果
#[derive(Debug, Clone)]
pub struct ShortestPaths<N: Clone + Eq + Hash, A> {
    pub source: N,
    /// 起点到每个节点的距离；不可达节点保留 `Measure::infinity()`
    pub distances: HashMap<N, A>,
    /// 前驱节点，用于重建路径
    pub predecessors: HashMap<N, N>,
    /// 是否存在从起点可达的负权环
    pub has_negative_cycle: bool,
}

impl<N: Clone + Eq + Hash + Debug, A: Measure> ShortestPaths<N, A> {
    /// 由基于下标的距离/前驱数组构造结果
    pub(crate) fn from_indices(
        labels: &[N],
        source: usize,
        distances: &[A],
        predecessors: &[Option<usize>],
        has_negative_cycle: bool,
    ) -> Self {
        let distances = labels
            .iter()
            .zip(distances)
            .map(|(label, &d)| (label.clone(), d))
            .collect();
        let predecessors = predecessors
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.map(|p| (labels[i].clone(), labels[p].clone())))
            .collect();

        Self {
            source: labels[source].clone(),
            distances,
            predecessors,
            has_negative_cycle,
        }
    }

    pub fn is_negative_cycle(&self) -> bool {
        self.has_negative_cycle
    }

    /// 到目标节点的距离；标签不在图中时返回 `None`
    pub fn distance_to(&self, target: &N) -> Option<A> {
        self.distances.get(target).copied()
    }

    pub fn is_reachable(&self, target: &N) -> bool {
        self.distance_to(target).is_some_and(|d| !d.is_infinite())
    }

    /// 重建从起点到目标节点的路径
    pub fn reconstruct_path(&self, target: &N) -> Option<Vec<N>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target.clone()];
        let mut current = target;

        while let Some(predecessor) = self.predecessors.get(current) {
            // 负权环会让前驱链成环
            if path.contains(predecessor) || path.len() > self.distances.len() {
                return None;
            }
            path.push(predecessor.clone());
            current = predecessor;
        }

        if *current != self.source {
            return None;
        }

        path.reverse();
        Some(path)
    }
}
