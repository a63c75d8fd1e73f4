//! 统一错误处理 for GraphCore
//!
//! ## 设计理念
//!
//! 1. **结构性错误立即返回**：未知节点、无效权重、Dijkstra 遇到负权边，
//!    都会作为 `GraphError` 通过 `?` 传播给调用方
//! 2. **正常结果不算错误**：有环图的拓扑排序返回空序列，
//!    Bellman-Ford 的负权环通过结果上的标志位查询
//! 3. **统一接口**：`GraphResult<T>` 提供统一的返回类型

use std::fmt::Debug;

use thiserror::Error;

/// 图操作错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// 引用了从未通过 `add_node`/`add_nodes` 添加的节点
    #[error("节点不存在: {0}")]
    UnknownNode(String),

    /// 权重值无法无损地放入整数或浮点累加器
    #[error("无效的权重类型: {0}")]
    InvalidWeightType(String),

    #[error("Dijkstra 不支持负权边: {from} -> {to}")]
    NegativeWeight { from: String, to: String },

    #[error("图中存在可达的负权环")]
    NegativeCycle,

    /// 路径或生成树的权重之和超出累加器范围
    #[error("权重累加溢出: {0}")]
    WeightOverflow(String),
}

/// 图操作结果类型
pub type GraphResult<T> = Result<T, GraphError>;

impl GraphError {
    pub fn unknown_node<N: Debug + ?Sized>(label: &N) -> Self {
        GraphError::UnknownNode(format!("{:?}", label))
    }

    pub fn negative_weight<N: Debug + ?Sized>(from: &N, to: &N) -> Self {
        GraphError::NegativeWeight {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }

    /// 是否与边权相关（权重类型或负权）
    pub fn is_weight_error(&self) -> bool {
        matches!(
            self,
            GraphError::InvalidWeightType(_)
                | GraphError::NegativeWeight { .. }
                | GraphError::NegativeCycle
                | GraphError::WeightOverflow(_)
        )
    }
}
