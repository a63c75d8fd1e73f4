//! 节点注册表
//!
//! 维护节点标签与稠密下标之间的双向映射。下标按首次插入的顺序从 0 开始分配，
//! 在图的整个生命周期内保持不变。

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::core::error::{GraphError, GraphResult};

/// 节点标签 <-> 下标 的双向映射
///
/// 标签按值（`Eq + Hash`）比较，而不是按存储地址。插入后修改标签会破坏查找，
/// 这由调用方负责避免。
#[derive(Debug, Clone)]
pub struct NodeRegistry<N> {
    index: HashMap<N, usize>,
    labels: Vec<N>,
}

impl<N> Default for NodeRegistry<N> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            labels: Vec::new(),
        }
    }
}

impl<N: Clone + Eq + Hash + Debug> NodeRegistry<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index: HashMap::with_capacity(capacity),
            labels: Vec::with_capacity(capacity),
        }
    }

    /// 注册节点，返回 `(下标, 是否为新节点)`
    pub fn insert(&mut self, label: N) -> (usize, bool) {
        if let Some(&idx) = self.index.get(&label) {
            return (idx, false);
        }
        let idx = self.labels.len();
        self.labels.push(label.clone());
        self.index.insert(label, idx);
        (idx, true)
    }

    pub fn get(&self, label: &N) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// 查找下标，不存在时返回 `GraphError::UnknownNode`
    pub fn index_of(&self, label: &N) -> GraphResult<usize> {
        self.get(label).ok_or_else(|| GraphError::unknown_node(label))
    }

    pub fn contains(&self, label: &N) -> bool {
        self.index.contains_key(label)
    }

    pub fn label(&self, idx: usize) -> Option<&N> {
        self.labels.get(idx)
    }

    /// 按下标顺序排列的全部标签
    pub fn labels(&self) -> &[N] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
