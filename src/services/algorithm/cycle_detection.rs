//! 环检测算法模块
//!
//! 有向图的三色标记法（白/灰/黑）环检测。同一趟DFS同时记录进入/离开时间戳，
//! 供拓扑排序复用。

use std::fmt::Debug;
use std::hash::Hash;

use crate::graph::{Directed, EdgeRecord, Graph};
use crate::services::algorithm::dfs::Frame;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

/// DFS时间戳
#[derive(Debug, Clone)]
pub(crate) struct Timestamps {
    pub(crate) entry: Vec<usize>,
    pub(crate) exit: Vec<usize>,
}

/// 环检测算法结构体
pub struct CycleDetection;

impl CycleDetection {
    /// 有向图是否包含环
    pub fn has_cycle_directed<N, E>(graph: &Graph<N, E, Directed>) -> bool
    where
        N: Clone + Eq + Hash + Debug,
    {
        timestamps(graph.adjacency()).is_none()
    }
}

/// 对所有连通块做三色DFS，记录每个节点的进入/离开时间
///
/// 遇到指向灰色节点的回边时立即返回 `None`。
pub(crate) fn timestamps<E>(adjacency: &[Vec<EdgeRecord<E>>]) -> Option<Timestamps> {
    let n = adjacency.len();
    let mut color = vec![Color::White; n];
    let mut entry = vec![0usize; n];
    let mut exit = vec![0usize; n];
    let mut clock = 0usize;

    for root in 0..n {
        if color[root] != Color::White {
            continue;
        }

        clock += 1;
        entry[root] = clock;
        color[root] = Color::Gray;
        let mut stack = vec![Frame::new(root)];

        while let Some(frame) = stack.last_mut() {
            match adjacency[frame.node].get(frame.next) {
                Some(record) => {
                    frame.next += 1;
                    let next = record.to;
                    match color[next] {
                        Color::White => {
                            clock += 1;
                            entry[next] = clock;
                            color[next] = Color::Gray;
                            stack.push(Frame::new(next));
                        }
                        Color::Gray => {
                            log::debug!("检测到回边: #{} -> #{}", frame.node, next);
                            return None;
                        }
                        Color::Black => {}
                    }
                }
                None => {
                    clock += 1;
                    exit[frame.node] = clock;
                    color[frame.node] = Color::Black;
                    stack.pop();
                }
            }
        }
    }

    Some(Timestamps { entry, exit })
}

impl<N, E> Graph<N, E, Directed>
where
    N: Clone + Eq + Hash + Debug,
{
    /// 是否为有向无环图
    pub fn is_dag(&self) -> bool {
        !CycleDetection::has_cycle_directed(self)
    }
}
