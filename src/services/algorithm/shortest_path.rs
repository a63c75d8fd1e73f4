//! 最短路径算法模块
//!
//! 无权图用 BFS（每条边长度为 1），带权图根据是否存在负权边
//! 在 Dijkstra 与 Bellman-Ford 之间选择。

use std::fmt::Debug;
use std::hash::Hash;

use crate::core::error::{GraphError, GraphResult};
use crate::graph::{Direction, Graph, Measure, NodePair, ShortestPaths, Traversal, Weight};
use crate::services::algorithm::bellman_ford::bellman_ford_indices;
use crate::services::algorithm::bfs::bfs_indices;
use crate::services::algorithm::dijkstra::dijkstra_indices;

/// 无权最短路径算法结构体
pub struct UnweightedShortestPath;

impl UnweightedShortestPath {
    /// 单源最短路径，每个可达节点一条记录
    pub fn single_source<N, D>(graph: &Graph<N, (), D>, source: &N) -> GraphResult<Vec<Traversal<N>>>
    where
        N: Clone + Eq + Hash + Debug,
        D: Direction,
    {
        let src = graph.index_of(source)?;
        let labels = graph.labels();

        Ok(bfs_indices(graph.adjacency(), src, None)
            .into_iter()
            .map(|(node, parent, distance)| Traversal {
                node: labels[node].clone(),
                parent: labels[parent].clone(),
                distance,
            })
            .collect())
    }

    /// 所有点对最短路径，包含 `(x, x, 0)`
    pub fn all_pairs<N, D>(graph: &Graph<N, (), D>) -> Vec<NodePair<N, usize>>
    where
        N: Clone + Eq + Hash + Debug,
        D: Direction,
    {
        let labels = graph.labels();
        let mut pairs = Vec::new();

        for src in 0..graph.node_count() {
            for (node, _, distance) in bfs_indices(graph.adjacency(), src, None) {
                pairs.push(NodePair {
                    from: labels[src].clone(),
                    to: labels[node].clone(),
                    distance,
                });
            }
        }

        log::debug!("无权全源最短路径: {} 个可达点对", pairs.len());
        pairs
    }
}

/// 带权最短路径算法结构体
pub struct WeightedShortestPath;

impl WeightedShortestPath {
    /// 单源最短路径：全部权重非负时用 Dijkstra，否则用 Bellman-Ford
    pub fn single_source<N, E, D, W, F>(
        graph: &Graph<N, E, D>,
        source: &N,
        weight_of: F,
    ) -> GraphResult<ShortestPaths<N, W::Accum>>
    where
        N: Clone + Eq + Hash + Debug,
        D: Direction,
        W: Weight,
        F: Fn(&E) -> W,
    {
        let src = graph.index_of(source)?;
        let adjacency = graph.weighted_adjacency(&weight_of)?;

        let (distances, predecessors, has_negative_cycle) = if has_negative_weight(&adjacency) {
            log::debug!("存在负权边，使用 Bellman-Ford");
            bellman_ford_indices(adjacency.len(), &flatten(&adjacency), src)?
        } else {
            let (distances, predecessors) = dijkstra_indices(&adjacency, src)?;
            (distances, predecessors, false)
        };

        Ok(ShortestPaths::from_indices(
            graph.labels(),
            src,
            &distances,
            &predecessors,
            has_negative_cycle,
        ))
    }

    /// 所有可达点对的最短距离
    ///
    /// 任一起点可达负权环时返回 `GraphError::NegativeCycle`。
    pub fn all_pairs<N, E, D, W, F>(
        graph: &Graph<N, E, D>,
        weight_of: F,
    ) -> GraphResult<Vec<NodePair<N, W::Accum>>>
    where
        N: Clone + Eq + Hash + Debug,
        D: Direction,
        W: Weight,
        F: Fn(&E) -> W,
    {
        let adjacency = graph.weighted_adjacency(&weight_of)?;
        let edges = has_negative_weight(&adjacency).then(|| flatten(&adjacency));
        let labels = graph.labels();
        let mut pairs = Vec::new();

        for src in 0..graph.node_count() {
            let distances = match &edges {
                Some(edges) => {
                    let (distances, _, has_negative_cycle) =
                        bellman_ford_indices(adjacency.len(), edges, src)?;
                    if has_negative_cycle {
                        log::warn!("从 {:?} 可达负权环，放弃全源最短路径", labels[src]);
                        return Err(GraphError::NegativeCycle);
                    }
                    distances
                }
                None => dijkstra_indices(&adjacency, src)?.0,
            };

            for (node, distance) in distances.into_iter().enumerate() {
                if !distance.is_infinite() {
                    pairs.push(NodePair {
                        from: labels[src].clone(),
                        to: labels[node].clone(),
                        distance,
                    });
                }
            }
        }

        Ok(pairs)
    }
}

fn has_negative_weight<A: Measure>(adjacency: &[Vec<(usize, A)>]) -> bool {
    adjacency
        .iter()
        .flatten()
        .any(|(_, weight)| weight.is_negative())
}

fn flatten<A: Measure>(adjacency: &[Vec<(usize, A)>]) -> Vec<(usize, usize, A)> {
    adjacency
        .iter()
        .enumerate()
        .flat_map(|(from, edges)| edges.iter().map(move |&(to, weight)| (from, to, weight)))
        .collect()
}

impl<N, D> Graph<N, (), D>
where
    N: Clone + Eq + Hash + Debug,
    D: Direction,
{
    /// 无权单源最短路径（BFS）
    pub fn single_source_shortest_path(&self, source: &N) -> GraphResult<Vec<Traversal<N>>> {
        UnweightedShortestPath::single_source(self, source)
    }

    /// 无权全源最短路径，O(n·(n + e))
    pub fn all_pairs_shortest_path(&self) -> Vec<NodePair<N, usize>> {
        UnweightedShortestPath::all_pairs(self)
    }
}

impl<N, E, D> Graph<N, E, D>
where
    N: Clone + Eq + Hash + Debug,
    D: Direction,
{
    pub fn weighted_shortest_paths<W, F>(
        &self,
        source: &N,
        weight_of: F,
    ) -> GraphResult<ShortestPaths<N, W::Accum>>
    where
        W: Weight,
        F: Fn(&E) -> W,
    {
        WeightedShortestPath::single_source(self, source, weight_of)
    }

    pub fn weighted_all_pairs_shortest_paths<W, F>(
        &self,
        weight_of: F,
    ) -> GraphResult<Vec<NodePair<N, W::Accum>>>
    where
        W: Weight,
        F: Fn(&E) -> W,
    {
        WeightedShortestPath::all_pairs(self, weight_of)
    }
}
