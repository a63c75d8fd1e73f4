//! DFS算法模块
//!
//! 深度优先遍历。所有基于DFS的分析（环检测、拓扑排序、强连通分量）都使用
//! 显式栈保存 `(节点, 下一个待访问邻居的位置)` 帧，不依赖递归。

use std::fmt::Debug;
use std::hash::Hash;

use crate::core::error::GraphResult;
use crate::graph::{Direction, Graph, Traversal};

/// DFS栈帧
#[derive(Debug, Clone, Copy)]
pub(crate) struct Frame {
    pub(crate) node: usize,
    pub(crate) next: usize,
}

impl Frame {
    pub(crate) fn new(node: usize) -> Self {
        Self { node, next: 0 }
    }
}

/// DFS算法结构体
pub struct Dfs;

impl Dfs {
    /// 从起点深度优先遍历（先序），返回按访问顺序排列的遍历记录
    ///
    /// 距离为节点在DFS树中的深度（不是最短距离），深度为 `d` 的节点仅在
    /// `d < max_depth` 时扩展。节点第一次被访问时即确定深度，之后不会因为
    /// 更短的路径重新访问，因此有深度上限时结果可能少于同上限的BFS：
    /// 0→1→2、0→2、2→3 且上限为 2 时，2 在深度 2 被访问，3 不会出现。
    /// 需要"上限内所有可达节点"时使用 BFS。
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
        let adjacency = graph.adjacency();

        let mut visited = vec![false; adjacency.len()];
        let mut depth = vec![0usize; adjacency.len()];
        let mut records = vec![Traversal {
            node: source.clone(),
            parent: source.clone(),
            distance: 0,
        }];

        visited[src] = true;
        let mut stack = vec![Frame::new(src)];

        while let Some(frame) = stack.last_mut() {
            let current = frame.node;
            let expandable = max_depth.map_or(true, |limit| depth[current] < limit);

            match adjacency[current].get(frame.next) {
                Some(record) if expandable => {
                    frame.next += 1;
                    let next = record.to;
                    if !visited[next] {
                        visited[next] = true;
                        depth[next] = depth[current] + 1;
                        records.push(Traversal {
                            node: labels[next].clone(),
                            parent: labels[current].clone(),
                            distance: depth[next],
                        });
                        stack.push(Frame::new(next));
                    }
                }
                _ => {
                    stack.pop();
                }
            }
        }

        Ok(records)
    }
}

/// 从 `start` 开始的迭代式DFS，按完成顺序（后序）把节点追加到 `finished`
///
/// `neighbor(node, pos)` 返回 `node` 的第 `pos` 个邻居，越界时返回 `None`。
pub(crate) fn postorder<F>(start: usize, visited: &mut [bool], finished: &mut Vec<usize>, neighbor: F)
where
    F: Fn(usize, usize) -> Option<usize>,
{
    if visited[start] {
        return;
    }
    visited[start] = true;
    let mut stack = vec![Frame::new(start)];

    while let Some(frame) = stack.last_mut() {
        match neighbor(frame.node, frame.next) {
            Some(next) => {
                frame.next += 1;
                if !visited[next] {
                    visited[next] = true;
                    stack.push(Frame::new(next));
                }
            }
            None => {
                finished.push(frame.node);
                stack.pop();
            }
        }
    }
}

impl<N, E, D> Graph<N, E, D>
where
    N: Clone + Eq + Hash + Debug,
    D: Direction,
{
    /// 深度优先遍历，`max_depth` 为 `None` 时不限深度
    pub fn dfs(&self, source: &N, max_depth: Option<usize>) -> GraphResult<Vec<Traversal<N>>> {
        Dfs::traverse(self, source, max_depth)
    }

    /// 使用图配置中的默认深度上限进行深度优先遍历
    pub fn dfs_default(&self, source: &N) -> GraphResult<Vec<Traversal<N>>> {
        Dfs::traverse(self, source, self.default_max_depth())
    }
}
