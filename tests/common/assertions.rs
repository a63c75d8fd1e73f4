//! 自定义断言辅助模块
//!
//! 提供测试中的常用断言函数

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use graphcore::DiGraph;

/// 断言结果成功，返回内部值
pub fn assert_ok<T, E: Debug>(result: Result<T, E>) -> T {
    result.expect("操作应该成功")
}

/// 断言结果失败并匹配错误消息
pub fn assert_err_with<T: Debug, E: std::fmt::Display>(result: Result<T, E>, expected_msg: &str) {
    let err = result.expect_err("操作应该失败");
    let err_str = err.to_string();
    assert!(
        err_str.contains(expected_msg),
        "错误消息应包含 '{}', 实际是 '{}'",
        expected_msg,
        err_str
    );
}

/// 断言集合包含指定数量的元素
pub fn assert_count<T>(collection: &[T], expected: usize, item_name: &str) {
    assert_eq!(
        collection.len(),
        expected,
        "{}数量不匹配: 期望 {}, 实际 {}",
        item_name,
        expected,
        collection.len()
    );
}

/// 断言序列是合法的拓扑序：包含每个节点恰好一次，且每条边的起点排在终点之前
pub fn assert_topological_order<N, E>(graph: &DiGraph<N, E>, order: &[N])
where
    N: Clone + Eq + Hash + Debug,
{
    assert_count(order, graph.node_count(), "拓扑序节点");
    let position = |label: &N| {
        order
            .iter()
            .position(|n| n == label)
            .expect("节点应该出现在拓扑序中")
    };

    for u in graph.nodes() {
        for (v, _) in assert_ok(graph.neighbors(u)) {
            assert!(
                position(u) < position(v),
                "边 {:?} -> {:?} 违反拓扑序",
                u,
                v
            );
        }
    }
}

/// 断言若干分量恰好划分全部节点
pub fn assert_partition<N>(components: &[Vec<N>], nodes: &[N])
where
    N: Clone + Eq + Hash + Debug,
{
    let mut seen = HashSet::new();
    for component in components {
        assert!(!component.is_empty(), "分量不应为空");
        for node in component {
            assert!(seen.insert(node.clone()), "节点 {:?} 出现在多个分量中", node);
        }
    }
    let expected: HashSet<N> = nodes.iter().cloned().collect();
    assert_eq!(seen, expected);
}
