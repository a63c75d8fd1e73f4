//! Bellman-Ford算法模块
//!
//! 包含Bellman-Ford最短路径算法实现
//! 支持负权边，可检测负权环

use std::fmt::Debug;
use std::hash::Hash;

use crate::core::error::GraphResult;
use crate::graph::{Direction, Graph, Measure, ShortestPaths, Weight};

/// Bellman-Ford算法结构体
pub struct BellmanFord;

impl BellmanFord {
    /// 执行Bellman-Ford算法
    ///
    /// # 参数
    /// - `graph`: 任意方向的图，允许负权边
    /// - `source`: 起始节点
    /// - `weight_of`: 从边负载取出权重
    ///
    /// # 返回
    /// 距离、前驱节点以及是否存在从起点可达的负权环
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
        let edges = graph.weighted_edges(&weight_of)?;
        let (distances, predecessors, has_negative_cycle) =
            bellman_ford_indices(graph.node_count(), &edges, src)?;

        if has_negative_cycle {
            log::debug!("Bellman-Ford: 从 {:?} 可达负权环", source);
        }
        Ok(ShortestPaths::from_indices(
            graph.labels(),
            src,
            &distances,
            &predecessors,
            has_negative_cycle,
        ))
    }

    /// 检测整张图是否存在负权环
    ///
    /// 相当于加一个到所有节点距离为 0 的虚拟起点，因此不要求环从某个节点可达。
    pub fn has_negative_cycle<N, E, D, W, F>(graph: &Graph<N, E, D>, weight_of: F) -> GraphResult<bool>
    where
        N: Clone + Eq + Hash + Debug,
        D: Direction,
        W: Weight,
        F: Fn(&E) -> W,
    {
        let edges = graph.weighted_edges(&weight_of)?;
        Ok(last_relaxed_from_zero(graph.node_count(), &edges)?.is_some())
    }

    /// 查找负权环（如果存在），按边的方向返回环上的节点
    pub fn find_negative_cycle<N, E, D, W, F>(
        graph: &Graph<N, E, D>,
        weight_of: F,
    ) -> GraphResult<Option<Vec<N>>>
    where
        N: Clone + Eq + Hash + Debug,
        D: Direction,
        W: Weight,
        F: Fn(&E) -> W,
    {
        let n = graph.node_count();
        let edges = graph.weighted_edges(&weight_of)?;
        let Some((last, predecessors)) = last_relaxed_from_zero(n, &edges)? else {
            return Ok(None);
        };

        // 回溯n步，确保进入环
        let mut current = last;
        for _ in 0..n {
            match predecessors[current] {
                Some(pred) => current = pred,
                None => break,
            }
        }

        let cycle_start = current;
        let mut cycle = vec![cycle_start];
        while let Some(pred) = predecessors[current] {
            if pred == cycle_start || cycle.len() > n {
                break;
            }
            cycle.push(pred);
            current = pred;
        }
        cycle.reverse();

        let labels = graph.labels();
        log::debug!("找到负权环, 长度 {}", cycle.len());
        Ok(Some(cycle.into_iter().map(|i| labels[i].clone()).collect()))
    }
}

/// 对所有边做一轮松弛，返回最后一个被更新的节点
fn relax_round<A: Measure>(
    edges: &[(usize, usize, A)],
    distances: &mut [A],
    predecessors: &mut [Option<usize>],
) -> GraphResult<Option<usize>> {
    let mut last_updated = None;
    for &(u, v, weight) in edges {
        if distances[u].is_infinite() {
            continue;
        }
        let candidate = distances[u].combine(weight)?;
        if candidate < distances[v] {
            distances[v] = candidate;
            predecessors[v] = Some(u);
            last_updated = Some(v);
        }
    }
    Ok(last_updated)
}

/// 基于下标的 Bellman-Ford：n-1 轮松弛（稳定即提前结束），再多做一轮判断负权环
pub(crate) fn bellman_ford_indices<A: Measure>(
    n: usize,
    edges: &[(usize, usize, A)],
    src: usize,
) -> GraphResult<(Vec<A>, Vec<Option<usize>>, bool)> {
    let mut distances = vec![A::infinity(); n];
    let mut predecessors = vec![None; n];
    distances[src] = A::zero();

    for _ in 0..n.saturating_sub(1) {
        if relax_round(edges, &mut distances, &mut predecessors)?.is_none() {
            break;
        }
    }

    let mut has_negative_cycle = false;
    for &(u, v, weight) in edges {
        if !distances[u].is_infinite() && distances[u].combine(weight)? < distances[v] {
            has_negative_cycle = true;
            break;
        }
    }

    Ok((distances, predecessors, has_negative_cycle))
}

/// 所有距离初始化为 0 后做 n 轮松弛；第 n 轮仍有更新说明存在负权环
fn last_relaxed_from_zero<A: Measure>(
    n: usize,
    edges: &[(usize, usize, A)],
) -> GraphResult<Option<(usize, Vec<Option<usize>>)>> {
    let mut distances = vec![A::zero(); n];
    let mut predecessors = vec![None; n];

    let mut last_updated = None;
    for _ in 0..n {
        last_updated = relax_round(edges, &mut distances, &mut predecessors)?;
        if last_updated.is_none() {
            return Ok(None);
        }
    }
    Ok(last_updated.map(|node| (node, predecessors)))
}

impl<N, E, D> Graph<N, E, D>
where
    N: Clone + Eq + Hash + Debug,
    D: Direction,
{
    /// Bellman-Ford 单源最短路径，允许负权边
    pub fn bellman_ford<W, F>(&self, source: &N, weight_of: F) -> GraphResult<ShortestPaths<N, W::Accum>>
    where
        W: Weight,
        F: Fn(&E) -> W,
    {
        BellmanFord::shortest_paths(self, source, weight_of)
    }

    /// 图中任意位置是否存在负权环
    pub fn has_negative_cycle<W, F>(&self, weight_of: F) -> GraphResult<bool>
    where
        W: Weight,
        F: Fn(&E) -> W,
    {
        BellmanFord::has_negative_cycle(self, weight_of)
    }

    pub fn find_negative_cycle<W, F>(&self, weight_of: F) -> GraphResult<Option<Vec<N>>>
    where
        W: Weight,
        F: Fn(&E) -> W,
    {
        BellmanFord::find_negative_cycle(self, weight_of)
    }
}
