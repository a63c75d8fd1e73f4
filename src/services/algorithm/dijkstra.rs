//! Dijkstra算法模块
//!
//! 非负权图的单源最短路径。调用前会校验所有边权，发现负权边时返回
//! `GraphError::NegativeWeight`，而不是给出错误的距离。

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::core::error::{GraphError, GraphResult};
use crate::graph::{Direction, Graph, Measure, ShortestPaths, Weight};

/// 节点距离结构体，用于优先队列（最小堆）
///
/// `via` 记录到达该节点所经过的 `(起点下标, 邻接表位置)`，Prim 用它取回边负载。
#[derive(Debug, Clone)]
pub(crate) struct DistanceNode<A> {
    pub(crate) distance: A,
    pub(crate) node: usize,
    pub(crate) via: Option<(usize, usize)>,
}

impl<A: Measure> DistanceNode<A> {
    pub(crate) fn new(distance: A, node: usize) -> Self {
        Self {
            distance,
            node,
            via: None,
        }
    }

    pub(crate) fn via(distance: A, node: usize, from: usize, slot: usize) -> Self {
        Self {
            distance,
            node,
            via: Some((from, slot)),
        }
    }
}

impl<A: Measure> Eq for DistanceNode<A> {}

impl<A: Measure> PartialEq for DistanceNode<A> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<A: Measure> Ord for DistanceNode<A> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .partial_cmp(&self.distance)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl<A: Measure> PartialOrd for DistanceNode<A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra算法结构体
pub struct Dijkstra;

impl Dijkstra {
    /// 计算从起点到所有节点的最短距离
    pub fn shortest_paths<N, E, D, W, F>(
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
        Self::ensure_non_negative(graph.labels(), &adjacency)?;

        let (distances, predecessors) = dijkstra_indices(&adjacency, src)?;
        Ok(ShortestPaths::from_indices(
            graph.labels(),
            src,
            &distances,
            &predecessors,
            false,
        ))
    }

    fn ensure_non_negative<N: Debug, A: Measure>(
        labels: &[N],
        adjacency: &[Vec<(usize, A)>],
    ) -> GraphResult<()> {
        for (from, edges) in adjacency.iter().enumerate() {
            if let Some(&(to, weight)) = edges.iter().find(|(_, w)| w.is_negative()) {
                log::warn!(
                    "Dijkstra 拒绝负权边 {:?} -> {:?} ({:?})",
                    labels[from],
                    labels[to],
                    weight
                );
                return Err(GraphError::negative_weight(&labels[from], &labels[to]));
            }
        }
        Ok(())
    }
}

/// 基于下标的 Dijkstra，要求所有权重非负；路径长度溢出时立即失败
pub(crate) fn dijkstra_indices<A: Measure>(
    adjacency: &[Vec<(usize, A)>],
    src: usize,
) -> GraphResult<(Vec<A>, Vec<Option<usize>>)> {
    let n = adjacency.len();
    let mut distances = vec![A::infinity(); n];
    let mut predecessors = vec![None; n];
    let mut settled = vec![false; n];
    let mut to_visit = BinaryHeap::new();

    distances[src] = A::zero();
    to_visit.push(DistanceNode::new(A::zero(), src));

    while let Some(DistanceNode { distance, node, .. }) = to_visit.pop() {
        if settled[node] {
            continue;
        }
        settled[node] = true;

        for &(next, weight) in &adjacency[node] {
            let candidate = distance.combine(weight)?;
            if candidate < distances[next] {
                distances[next] = candidate;
                predecessors[next] = Some(node);
                to_visit.push(DistanceNode::new(candidate, next));
            }
        }
    }

    Ok((distances, predecessors))
}

impl<N, E, D> Graph<N, E, D>
where
    N: Clone + Eq + Hash + Debug,
    D: Direction,
{
    /// Dijkstra 单源最短路径，要求所有边权非负
    pub fn dijkstra<W, F>(&self, source: &N, weight_of: F) -> GraphResult<ShortestPaths<N, W::Accum>>
    where
        W: Weight,
        F: Fn(&E) -> W,
    {
        Dijkstra::shortest_paths(self, source, weight_of)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{DiGraph, UnGraph};

    fn create_graph() -> DiGraph<char, u32> {
        // A->B 4, A->C 2, B->C 1, B->D 5, C->D 8
        let mut graph = DiGraph::new();
        graph.add_nodes(['A', 'B', 'C', 'D', 'E']);
        for (u, v, w) in [
            ('A', 'B', 4),
            ('A', 'C', 2),
            ('B', 'C', 1),
            ('B', 'D', 5),
            ('C', 'D', 8),
        ] {
            graph
                .add_weighted_edge(&u, &v, w)
                .expect("Edge insertion should succeed in test");
        }
        graph
    }

    #[test]
    fn test_shortest_distances() {
        let graph = create_graph();
        let result = graph.dijkstra(&'A', |w: &u32| *w).expect("Dijkstra should succeed in test");

        assert_eq!(result.distance_to(&'A'), Some(0));
        assert_eq!(result.distance_to(&'B'), Some(4));
        assert_eq!(result.distance_to(&'C'), Some(2));
        assert_eq!(result.distance_to(&'D'), Some(9));
        assert_eq!(result.distance_to(&'E'), Some(i64::MAX));
        assert!(!result.is_reachable(&'E'));
        assert!(!result.is_negative_cycle());
    }

    #[test]
    fn test_reconstruct_path() {
        let graph = create_graph();
        let result = graph.dijkstra(&'A', |w: &u32| *w).expect("Dijkstra should succeed in test");
        assert_eq!(result.reconstruct_path(&'D'), Some(vec!['A', 'B', 'D']));
        assert_eq!(result.reconstruct_path(&'E'), None);
    }

    #[test]
    fn test_negative_weight_rejected() {
        let mut graph: DiGraph<i32, i32> = DiGraph::new();
        graph.add_nodes([1, 2, 3]);
        graph.add_weighted_edge(&1, &2, 3).expect("Edge insertion should succeed in test");
        graph.add_weighted_edge(&3, &2, -1).expect("Edge insertion should succeed in test");

        let err = graph
            .dijkstra(&1, |w: &i32| *w)
            .expect_err("Negative weight should fail in test");
        assert_eq!(
            err,
            GraphError::NegativeWeight {
                from: "3".to_string(),
                to: "2".to_string()
            }
        );
    }

    #[test]
    fn test_undirected_float_weights() {
        let mut graph: UnGraph<&str, f64> = UnGraph::new();
        graph.add_nodes(["x", "y", "z"]);
        graph.add_weighted_edge(&"x", &"y", 1.5).expect("Edge insertion should succeed in test");
        graph.add_weighted_edge(&"z", &"y", 0.5).expect("Edge insertion should succeed in test");
        graph.add_weighted_edge(&"x", &"z", 3.0).expect("Edge insertion should succeed in test");

        let result = graph.dijkstra(&"z", |w: &f64| *w).expect("Dijkstra should succeed in test");
        assert_eq!(result.distance_to(&"x"), Some(2.0));
        assert_eq!(result.reconstruct_path(&"x"), Some(vec!["z", "y", "x"]));
    }

    #[test]
    fn test_unknown_source() {
        let graph = create_graph();
        assert!(graph.dijkstra(&'Z', |w: &u32| *w).is_err());
    }

    #[test]
    fn test_path_sum_overflow_is_error() {
        let mut graph: DiGraph<u8, i64> = DiGraph::new();
        graph.add_nodes([0, 1, 2]);
        graph
            .add_weighted_edge(&0, &1, i64::MAX - 1)
            .expect("Edge insertion should succeed in test");
        graph.add_weighted_edge(&1, &2, 5).expect("Edge insertion should succeed in test");

        let err = graph
            .dijkstra(&0, |w: &i64| *w)
            .expect_err("Overflowing path should fail in test");
        assert!(matches!(err, GraphError::WeightOverflow(_)));

        // 不经过溢出路径的起点仍然正常
        let from_one = graph.dijkstra(&1, |w: &i64| *w).expect("Dijkstra should succeed in test");
        assert_eq!(from_one.distance_to(&2), Some(5));
    }

    #[test]
    fn test_heap_order_is_min_first() {
        let mut heap = BinaryHeap::new();
        heap.push(DistanceNode::new(5i64, 0));
        heap.push(DistanceNode::new(1i64, 1));
        heap.push(DistanceNode::new(3i64, 2));
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|d| d.node)).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }
}
