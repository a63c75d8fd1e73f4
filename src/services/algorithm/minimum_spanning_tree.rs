//! 最小生成树算法模块
//!
//! Kruskal（排序 + 并查集）与 Prim（二叉堆扩展切割边），仅用于无向图

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::core::error::GraphResult;
use crate::graph::{FullEdge, Graph, Measure, MinimumSpanningTree, Undirected, Weight};
use crate::services::algorithm::dijkstra::DistanceNode;
use crate::services::algorithm::union_find::UnionFind;

/// Kruskal算法结构体
pub struct Kruskal;

impl Kruskal {
    /// 计算最小生成森林
    ///
    /// 每条逻辑边只收集一次，按权重升序排序（同权时按插入顺序），
    /// 端点尚未连通时接受该边。复杂度 O(e log e)。
    pub fn mst<N, E, W, F>(
        graph: &Graph<N, E, Undirected>,
        weight_of: F,
    ) -> GraphResult<MinimumSpanningTree<N, E, W::Accum>>
    where
        N: Clone + Eq + Hash + Debug,
        E: Clone,
        W: Weight,
        F: Fn(&E) -> W,
    {
        let adjacency = graph.adjacency();
        let labels = graph.labels();

        // (权重, 插入序号, 起点, 邻接表位置)
        let mut candidates = Vec::with_capacity(graph.edge_count());
        for (from, records) in adjacency.iter().enumerate() {
            for (slot, record) in records.iter().enumerate() {
                if from <= record.to {
                    candidates.push((weight_of(&record.payload).widen()?, record.id, from, slot));
                }
            }
        }
        candidates.sort_by(|a, b| {
            a.0.partial_cmp(&b.0)
                .unwrap_or(Ordering::Equal)
                .then(a.1.cmp(&b.1))
        });

        let mut dsu = UnionFind::new(graph.node_count());
        let mut total_weight = <W::Accum as Measure>::zero();
        let mut edges = Vec::new();

        for (weight, _, from, slot) in candidates {
            let record = &adjacency[from][slot];
            if dsu.connected(from, record.to) {
                continue;
            }
            dsu.union(from, record.to);
            total_weight = total_weight.combine(weight)?;
            edges.push(FullEdge {
                u: labels[from].clone(),
                v: labels[record.to].clone(),
                edge: record.payload.clone(),
            });
        }

        log::debug!(
            "Kruskal: 接受 {} 条边, 总权重 {:?}",
            edges.len(),
            total_weight
        );
        Ok(MinimumSpanningTree {
            total_weight,
            edges,
        })
    }
}

/// Prim算法结构体
pub struct Prim;

impl Prim {
    /// 从 `start` 开始扩展最小生成树，只覆盖起点所在的连通分量
    pub fn mst_from<N, E, W, F>(
        graph: &Graph<N, E, Undirected>,
        start: &N,
        weight_of: F,
    ) -> GraphResult<MinimumSpanningTree<N, E, W::Accum>>
    where
        N: Clone + Eq + Hash + Debug,
        E: Clone,
        W: Weight,
        F: Fn(&E) -> W,
    {
        let start = graph.index_of(start)?;
        Self::grow(graph, start, &weight_of)
    }

    /// 从下标 0 的节点开始；空图返回空树
    pub fn mst<N, E, W, F>(
        graph: &Graph<N, E, Undirected>,
        weight_of: F,
    ) -> GraphResult<MinimumSpanningTree<N, E, W::Accum>>
    where
        N: Clone + Eq + Hash + Debug,
        E: Clone,
        W: Weight,
        F: Fn(&E) -> W,
    {
        if graph.is_empty() {
            return Ok(MinimumSpanningTree {
                total_weight: <W::Accum as Measure>::zero(),
                edges: Vec::new(),
            });
        }
        Self::grow(graph, 0, &weight_of)
    }

    fn grow<N, E, W, F>(
        graph: &Graph<N, E, Undirected>,
        start: usize,
        weight_of: &F,
    ) -> GraphResult<MinimumSpanningTree<N, E, W::Accum>>
    where
        N: Clone + Eq + Hash + Debug,
        E: Clone,
        W: Weight,
        F: Fn(&E) -> W,
    {
        let adjacency = graph.adjacency();
        let labels = graph.labels();
        let mut in_tree = vec![false; graph.node_count()];
        let mut frontier = BinaryHeap::new();
        let mut total_weight = <W::Accum as Measure>::zero();
        let mut edges = Vec::new();

        in_tree[start] = true;
        for (slot, record) in adjacency[start].iter().enumerate() {
            frontier.push(DistanceNode::via(
                weight_of(&record.payload).widen()?,
                record.to,
                start,
                slot,
            ));
        }

        while let Some(candidate) = frontier.pop() {
            let node = candidate.node;
            if in_tree[node] {
                continue;
            }
            let Some((from, slot)) = candidate.via else {
                continue;
            };

            in_tree[node] = true;
            total_weight = total_weight.combine(candidate.distance)?;
            edges.push(FullEdge {
                u: labels[from].clone(),
                v: labels[node].clone(),
                edge: adjacency[from][slot].payload.clone(),
            });

            for (slot, record) in adjacency[node].iter().enumerate() {
                if !in_tree[record.to] {
                    frontier.push(DistanceNode::via(
                        weight_of(&record.payload).widen()?,
                        record.to,
                        node,
                        slot,
                    ));
                }
            }
        }

        log::debug!(
            "Prim: 从 {:?} 出发, 接受 {} 条边, 总权重 {:?}",
            labels[start],
            edges.len(),
            total_weight
        );
        Ok(MinimumSpanningTree {
            total_weight,
            edges,
        })
    }
}

impl<N, E> Graph<N, E, Undirected>
where
    N: Clone + Eq + Hash + Debug,
    E: Clone,
{
    /// Kruskal 最小生成森林
    pub fn kruskal_mst<W, F>(&self, weight_of: F) -> GraphResult<MinimumSpanningTree<N, E, W::Accum>>
    where
        W: Weight,
        F: Fn(&E) -> W,
    {
        Kruskal::mst(self, weight_of)
    }

    /// Prim 最小生成树，从第一个加入的节点出发
    pub fn prim_mst<W, F>(&self, weight_of: F) -> GraphResult<MinimumSpanningTree<N, E, W::Accum>>
    where
        W: Weight,
        F: Fn(&E) -> W,
    {
        Prim::mst(self, weight_of)
    }

    /// Prim 最小生成树，从指定节点出发
    pub fn prim_mst_from<W, F>(
        &self,
        start: &N,
        weight_of: F,
    ) -> GraphResult<MinimumSpanningTree<N, E, W::Accum>>
    where
        W: Weight,
        F: Fn(&E) -> W,
    {
        Prim::mst_from(self, start, weight_of)
    }
}
