//! 图的方向策略
//!
//! 方向在编译期通过类型参数选择，有向图专属的分析（环检测、拓扑排序、强连通分量）
//! 只在 `Graph<_, _, Directed>` 上提供，最小生成树只在 `Graph<_, _, Undirected>` 上提供。

use std::fmt::Debug;

/// 方向策略 trait
pub trait Direction: Debug + Copy + Default + Send + Sync + 'static {
    /// 是否为有向图
    const DIRECTED: bool;
}

/// 有向图标记
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Directed;

/// 无向图标记：每条逻辑边同时出现在两个端点的邻接表中，但只计数一次
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Undirected;

impl Direction for Directed {
    const DIRECTED: bool = true;
}

impl Direction for Undirected {
    const DIRECTED: bool = false;
}
