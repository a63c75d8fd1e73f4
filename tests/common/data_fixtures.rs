//! 测试数据夹具
//!
//! 教科书中的经典图，以及可复现的随机图

use graphcore::{DiGraph, UnGraph};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 9 节点无向带权图（算法导论 MST 一章），最小生成树总权重为 37
pub fn cormen_graph() -> UnGraph<char, i32> {
    let mut graph = UnGraph::new();
    graph.add_nodes('a'..='i');
    for (u, v, w) in [
        ('a', 'b', 4),
        ('a', 'h', 8),
        ('b', 'h', 11),
        ('b', 'c', 8),
        ('c', 'd', 7),
        ('c', 'f', 4),
        ('c', 'i', 2),
        ('d', 'e', 9),
        ('d', 'f', 14),
        ('e', 'f', 10),
        ('f', 'g', 2),
        ('g', 'h', 1),
        ('g', 'i', 6),
        ('h', 'i', 7),
    ] {
        graph
            .add_weighted_edge(&u, &v, w)
            .expect("Edge insertion should succeed in test");
    }
    graph
}

/// 6 节点有向图（Gabow 路径强连通分量示例）：
/// 强连通分量为 {1}、{3}、{2, 4, 5, 6}
pub fn gabow_graph() -> DiGraph<i32> {
    let mut graph = DiGraph::new();
    graph.add_nodes(1..=6);
    for (u, v) in [
        (1, 2),
        (1, 3),
        (2, 3),
        (2, 4),
        (4, 3),
        (4, 5),
        (5, 2),
        (5, 6),
        (6, 4),
        (6, 3),
    ] {
        graph
            .add_edge(&u, &v)
            .expect("Edge insertion should succeed in test");
    }
    graph
}

/// 随机无向图，权重在 `[1, max_weight]` 内
pub fn random_undirected(seed: u64, nodes: usize, edges: usize, max_weight: u32) -> UnGraph<usize, u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = UnGraph::with_capacity(nodes);
    graph.add_nodes(0..nodes);
    for _ in 0..edges {
        let u = rng.gen_range(0..nodes);
        let v = rng.gen_range(0..nodes);
        let w = rng.gen_range(1..=max_weight);
        graph
            .add_weighted_edge(&u, &v, w)
            .expect("Edge insertion should succeed in test");
    }
    graph
}

/// 随机有向图，权重在 `[0, max_weight]` 内
pub fn random_directed(seed: u64, nodes: usize, edges: usize, max_weight: i64) -> DiGraph<usize, i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = DiGraph::with_capacity(nodes);
    graph.add_nodes(0..nodes);
    for _ in 0..edges {
        let u = rng.gen_range(0..nodes);
        let v = rng.gen_range(0..nodes);
        let w = rng.gen_range(0..=max_weight);
        graph
            .add_weighted_edge(&u, &v, w)
            .expect("Edge insertion should succeed in test");
    }
    graph
}

/// 随机有向无环图：只添加从小下标指向大下标的边
pub fn random_dag(seed: u64, nodes: usize, edges: usize) -> DiGraph<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = DiGraph::new();
    graph.add_nodes(0..nodes);
    for _ in 0..edges {
        let u = rng.gen_range(0..nodes);
        let v = rng.gen_range(0..nodes);
        if u != v {
            let (from, to) = (u.min(v), u.max(v));
            graph
                .add_edge(&from, &to)
                .expect("Edge insertion should succeed in test");
        }
    }
    graph
}
