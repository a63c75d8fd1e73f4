//! 强连通分量算法模块
//!
//! Kosaraju 两趟算法：
//! 1. 在原图上DFS，得到完成顺序
//! 2. 一次性构建转置邻接表（O(n + e)）
//! 3. 按完成时间从晚到早在转置图上DFS，每棵新的DFS树是一个强连通分量

use std::fmt::Debug;
use std::hash::Hash;

use crate::core::error::GraphResult;
use crate::graph::{Directed, EdgeRecord, Graph};
use crate::services::algorithm::dfs::postorder;

/// 强连通分量算法结构体
pub struct StronglyConnectedComponents;

impl StronglyConnectedComponents {
    /// 查找所有强连通分量，每个分量内部无序，所有分量恰好划分全部节点
    pub fn find<N, E>(graph: &Graph<N, E, Directed>) -> Vec<Vec<N>>
    where
        N: Clone + Eq + Hash + Debug,
    {
        let labels = graph.labels();
        let components = kosaraju(graph.adjacency());
        log::debug!(
            "强连通分量: {} 个节点, {} 个分量",
            labels.len(),
            components.len()
        );

        components
            .into_iter()
            .map(|component| component.into_iter().map(|i| labels[i].clone()).collect())
            .collect()
    }

    pub fn count<N, E>(graph: &Graph<N, E, Directed>) -> usize
    where
        N: Clone + Eq + Hash + Debug,
    {
        kosaraju(graph.adjacency()).len()
    }

    /// 查找包含指定节点的强连通分量
    pub fn find_component_of<N, E>(graph: &Graph<N, E, Directed>, node: &N) -> GraphResult<Vec<N>>
    where
        N: Clone + Eq + Hash + Debug,
    {
        let target = graph.index_of(node)?;
        let labels = graph.labels();
        let component = kosaraju(graph.adjacency())
            .into_iter()
            .find(|component| component.contains(&target))
            .unwrap_or_else(|| vec![target]);

        Ok(component.into_iter().map(|i| labels[i].clone()).collect())
    }

    /// 图是否强连通（恰好一个分量）
    pub fn is_strongly_connected<N, E>(graph: &Graph<N, E, Directed>) -> bool
    where
        N: Clone + Eq + Hash + Debug,
    {
        Self::count(graph) == 1
    }
}

/// 基于下标的 Kosaraju 算法
fn kosaraju<E>(adjacency: &[Vec<EdgeRecord<E>>]) -> Vec<Vec<usize>> {
    let n = adjacency.len();

    // 第一趟：原图上的完成顺序
    let mut visited = vec![false; n];
    let mut finish_order = Vec::with_capacity(n);
    for root in 0..n {
        postorder(root, &mut visited, &mut finish_order, |node, pos| {
            adjacency[node].get(pos).map(|record| record.to)
        });
    }

    let transpose = transpose(adjacency);

    // 第二趟：按完成时间从晚到早遍历转置图
    let mut visited = vec![false; n];
    let mut components = Vec::new();
    for &root in finish_order.iter().rev() {
        if visited[root] {
            continue;
        }
        let mut component = Vec::new();
        postorder(root, &mut visited, &mut component, |node, pos| {
            transpose[node].get(pos).copied()
        });
        components.push(component);
    }

    components
}

fn transpose<E>(adjacency: &[Vec<EdgeRecord<E>>]) -> Vec<Vec<usize>> {
    let mut reversed = vec![Vec::new(); adjacency.len()];
    for (from, records) in adjacency.iter().enumerate() {
        for record in records {
            reversed[record.to].push(from);
        }
    }
    reversed
}

impl<N, E> Graph<N, E, Directed>
where
    N: Clone + Eq + Hash + Debug,
{
    /// 强连通分量分解（Kosaraju）
    pub fn scc(&self) -> Vec<Vec<N>> {
        StronglyConnectedComponents::find(self)
    }

    pub fn scc_count(&self) -> usize {
        StronglyConnectedComponents::count(self)
    }

    pub fn is_strongly_connected(&self) -> bool {
        StronglyConnectedComponents::is_strongly_connected(self)
    }

    /// 包含 `node` 的强连通分量
    pub fn component_of(&self, node: &N) -> GraphResult<Vec<N>> {
        StronglyConnectedComponents::find_component_of(self, node)
    }
}
