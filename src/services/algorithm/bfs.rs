//! BFS算法模块
//!
//! 广度优先遍历，支持深度上限

use std::collections::VecDeque;
use std::fmt::Debug;
use std::hash::Hash;

use crate::core::error::GraphResult;
use crate::graph::{Direction, EdgeRecord, Graph, Traversal};

/// BFS算法结构体
pub struct Bfs;

impl Bfs {
    /// 从起点广度优先遍历，返回按访问顺序排列的遍历记录
    ///
    /// 距离为 `d` 的节点仅在 `d < max_depth` 时扩展邻居，
    /// 因此 `Some(1)` 只返回起点及其直接邻居，`None` 表示不限深度。
    pub fn traverse<N, E, D>(
        graph: &Graph<N, E, D>,
        source: &N,
        max_depth: Option<usize>,
    ) -> GraphResult<Vec<Traversal<N>>>
    where
        N: Clone + Eq + Hash + Debug,
        D: Direction,
    {
        let src = graph.index_of(source)?;
        let labels = graph.labels();

        let records = bfs_indices(graph.adjacency(), src, max_depth)
            .into_iter()
            .map(|(node, parent, distance)| Traversal {
                node: labels[node].clone(),
                parent: labels[parent].clone(),
                distance,
            })
            .collect::<Vec<_>>();

        log::debug!(
            "BFS: 从 {:?} 出发, 深度上限 {:?}, 访问 {} 个节点",
            source,
            max_depth,
            records.len()
        );
        Ok(records)
    }
}

/// 基于下标的BFS，返回 `(节点, 父节点, 距离)`，起点以自身为父节点
pub(crate) fn bfs_indices<E>(
    adjacency: &[Vec<EdgeRecord<E>>],
    src: usize,
    max_depth: Option<usize>,
) -> Vec<(usize, usize, usize)> {
    let mut visited = vec![false; adjacency.len()];
    let mut distance = vec![0usize; adjacency.len()];
    let mut queue = VecDeque::new();
    let mut order = vec![(src, src, 0)];

    visited[src] = true;
    queue.push_back(src);

    while let Some(current) = queue.pop_front() {
        if max_depth.is_some_and(|limit| distance[current] >= limit) {
            continue;
        }

        for record in &adjacency[current] {
            let next = record.to;
            if !visited[next] {
                visited[next] = true;
                distance[next] = distance[current] + 1;
                order.push((next, current, distance[next]));
                queue.push_back(next);
            }
        }
    }

    order
}

impl<N, E, D> Graph<N, E, D>
where
    N: Clone + Eq + Hash + Debug,
    D: Direction,
{
    /// 广度优先遍历，`max_depth` 为 `None` 时不限深度
    pub fn bfs(&self, source: &N, max_depth: Option<usize>) -> GraphResult<Vec<Traversal<N>>> {
        Bfs::traverse(self, source, max_depth)
    }

    /// 使用图配置中的默认深度上限进行广度优先遍历
    pub fn bfs_default(&self, source: &N) -> GraphResult<Vec<Traversal<N>>> {
        Bfs::traverse(self, source, self.default_max_depth())
    }
}
