//! 图的核心结构
//!
//! `Graph<N, E, D>` 持有节点注册表和邻接表。`N` 为节点标签，`E` 为边负载
//! （无权图为 `()`），`D` 为方向策略（`Directed` / `Undirected`）。
//!
//! 节点只会单调地加入，下标保持稳定；所有算法都以只读方式访问注册表和邻接表，
//! 每次调用自行分配访问标记、时间戳、堆等局部状态。

use std::fmt::Debug;
use std::hash::Hash;
use std::marker::PhantomData;

use crate::config::GraphConfig;
use crate::core::error::GraphResult;
use crate::graph::direction::{Directed, Direction, Undirected};
use crate::graph::registry::NodeRegistry;
use crate::graph::types::EdgeRecord;
use crate::graph::weight::Weight;

/// 泛型图
#[derive(Debug, Clone)]
pub struct Graph<N, E = (), D = Directed> {
    registry: NodeRegistry<N>,
    adjacency: Vec<Vec<EdgeRecord<E>>>,
    edge_count: usize,
    next_edge_id: usize,
    default_max_depth: Option<usize>,
    _direction: PhantomData<D>,
}

/// 有向图
pub type DiGraph<N, E = ()> = Graph<N, E, Directed>;

/// 无向图
pub type UnGraph<N, E = ()> = Graph<N, E, Undirected>;

impl<N, E, D> Default for Graph<N, E, D> {
    fn default() -> Self {
        Self {
            registry: NodeRegistry::default(),
            adjacency: Vec::new(),
            edge_count: 0,
            next_edge_id: 0,
            default_max_depth: None,
            _direction: PhantomData,
        }
    }
}

impl<N, E, D> Graph<N, E, D>
where
    N: Clone + Eq + Hash + Debug,
    D: Direction,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// 预分配节点容量，仅作为提示，超出后自动增长
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            registry: NodeRegistry::with_capacity(capacity),
            adjacency: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    pub fn from_config(config: &GraphConfig) -> Self {
        let mut graph = Self::with_capacity(config.initial_capacity);
        graph.default_max_depth = config.default_max_depth;
        graph
    }

    pub fn is_directed(&self) -> bool {
        D::DIRECTED
    }

    pub fn node_count(&self) -> usize {
        self.registry.len()
    }

    /// 逻辑边数量，无向边只计一次
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// `bfs_default` / `dfs_default` 使用的深度上限
    pub fn default_max_depth(&self) -> Option<usize> {
        self.default_max_depth
    }

    pub fn set_default_max_depth(&mut self, max_depth: Option<usize>) {
        self.default_max_depth = max_depth;
    }

    /// 添加节点并返回其下标；重复添加同一标签不会改变节点数
    pub fn add_node(&mut self, label: N) -> usize {
        let (idx, inserted) = self.registry.insert(label);
        if inserted {
            self.adjacency.push(Vec::new());
            log::trace!("添加节点 #{}: {:?}", idx, self.registry.labels()[idx]);
        }
        idx
    }

    /// 按顺序批量添加节点，顺序决定新标签的下标
    pub fn add_nodes<I>(&mut self, labels: I)
    where
        I: IntoIterator<Item = N>,
    {
        for label in labels {
            self.add_node(label);
        }
    }

    pub fn index_of(&self, label: &N) -> GraphResult<usize> {
        self.registry.index_of(label)
    }

    pub fn contains_node(&self, label: &N) -> bool {
        self.registry.contains(label)
    }

    pub fn label_of(&self, idx: usize) -> Option<&N> {
        self.registry.label(idx)
    }

    /// 按下标顺序迭代所有节点
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.registry.labels().iter()
    }

    /// 添加一条带负载的边，两个端点都必须已存在
    ///
    /// 每次调用都使边数加 1，即使同一对节点之间已经有边。
    /// 失败时图保持不变。
    pub fn add_weighted_edge(&mut self, u: &N, v: &N, payload: E) -> GraphResult<()>
    where
        E: Clone,
    {
        let from = self.registry.index_of(u)?;
        let to = self.registry.index_of(v)?;
        let id = self.next_edge_id;

        if !D::DIRECTED && from != to {
            self.adjacency[to].push(EdgeRecord {
                to: from,
                id,
                payload: payload.clone(),
            });
        }
        self.adjacency[from].push(EdgeRecord { to, id, payload });
        self.edge_count += 1;
        self.next_edge_id += 1;

        log::trace!("添加边: {:?} -> {:?}", u, v);
        Ok(())
    }

    /// 节点的出边（无向图为全部关联边）
    pub fn neighbors(&self, label: &N) -> GraphResult<impl Iterator<Item = (&N, &E)>> {
        let idx = self.registry.index_of(label)?;
        let labels = self.registry.labels();
        Ok(self.adjacency[idx]
            .iter()
            .map(move |record| (&labels[record.to], &record.payload)))
    }

    /// 查找 `u -> v` 上第一条边的负载
    pub fn edge(&self, u: &N, v: &N) -> GraphResult<Option<&E>> {
        let from = self.registry.index_of(u)?;
        let to = self.registry.index_of(v)?;
        Ok(self.adjacency[from]
            .iter()
            .find(|record| record.to == to)
            .map(|record| &record.payload))
    }

    pub fn has_edge(&self, u: &N, v: &N) -> bool {
        matches!(self.edge(u, v), Ok(Some(_)))
    }

    /// 删除 `u -> v` 之间的所有边（无向图同时删除镜像记录），返回删除的逻辑边数
    pub fn remove_edge(&mut self, u: &N, v: &N) -> GraphResult<usize> {
        let from = self.registry.index_of(u)?;
        let to = self.registry.index_of(v)?;

        let before = self.adjacency[from].len();
        self.adjacency[from].retain(|record| record.to != to);
        let removed = before - self.adjacency[from].len();

        if !D::DIRECTED && from != to {
            self.adjacency[to].retain(|record| record.to != from);
        }
        self.edge_count = self.edge_count.saturating_sub(removed);

        log::trace!("删除边: {:?} -> {:?}, 共 {} 条", u, v, removed);
        Ok(removed)
    }

    pub(crate) fn labels(&self) -> &[N] {
        self.registry.labels()
    }

    pub(crate) fn adjacency(&self) -> &[Vec<EdgeRecord<E>>] {
        &self.adjacency
    }

    /// 用调用方提供的权重函数构造带累加权重的邻接表
    pub(crate) fn weighted_adjacency<W, F>(
        &self,
        weight_of: &F,
    ) -> GraphResult<Vec<Vec<(usize, W::Accum)>>>
    where
        W: Weight,
        F: Fn(&E) -> W,
    {
        self.adjacency
            .iter()
            .map(|records| {
                records
                    .iter()
                    .map(|record| Ok((record.to, weight_of(&record.payload).widen()?)))
                    .collect::<GraphResult<Vec<_>>>()
            })
            .collect()
    }

    /// 所有存储的有向边记录 `(from, to, weight)`，无向边会以两个方向各出现一次
    pub(crate) fn weighted_edges<W, F>(&self, weight_of: &F) -> GraphResult<Vec<(usize, usize, W::Accum)>>
    where
        W: Weight,
        F: Fn(&E) -> W,
    {
        let mut edges = Vec::new();
        for (from, records) in self.adjacency.iter().enumerate() {
            for record in records {
                edges.push((from, record.to, weight_of(&record.payload).widen()?));
            }
        }
        Ok(edges)
    }
}

impl<N, D> Graph<N, (), D>
where
    N: Clone + Eq + Hash + Debug,
    D: Direction,
{
    /// 添加一条无权边
    pub fn add_edge(&mut self, u: &N, v: &N) -> GraphResult<()> {
        self.add_weighted_edge(u, v, ())
    }
}
