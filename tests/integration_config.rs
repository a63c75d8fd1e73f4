//! 配置与日志集成测试
//!
//! 测试范围:
//! - config - TOML 加载/保存
//! - Graph::from_config - 默认深度上限
//! - utils::logging - 文件日志初始化与关闭
//!
//! 全局日志器在同一进程内共享，本文件的测试全部串行执行

mod common;

use common::assertions::{assert_count, assert_ok};
use graphcore::config::Config;
use graphcore::utils::logging;
use graphcore::DiGraph;
use serial_test::serial;

#[test]
#[serial]
fn test_graph_from_loaded_config() {
    let dir = tempfile::tempdir().expect("Failed to create temporary dir");
    let path = dir.path().join("graphcore.toml");
    std::fs::write(
        &path,
        "[graph]\ninitial_capacity = 16\ndefault_max_depth = 1\n\n[log]\nlevel = \"debug\"\n",
    )
    .expect("Failed to write config in test");

    let config = Config::load(&path).expect("Failed to load config in test");
    assert_eq!(config.log.level, "debug");
    assert_eq!(config.log.max_files, 5);

    let mut graph: DiGraph<&str> = DiGraph::from_config(&config.graph);
    assert_eq!(graph.default_max_depth(), Some(1));
    graph.add_nodes(["root", "child", "grandchild"]);
    assert_ok(graph.add_edge(&"root", &"child"));
    assert_ok(graph.add_edge(&"child", &"grandchild"));

    assert_count(&assert_ok(graph.bfs_default(&"root")), 2, "BFS 节点");
    assert_count(&assert_ok(graph.dfs_default(&"root")), 2, "DFS 节点");

    graph.set_default_max_depth(None);
    assert_count(&assert_ok(graph.bfs_default(&"root")), 3, "BFS 节点");
}

#[test]
#[serial]
fn test_config_save_round_trip() {
    let dir = tempfile::tempdir().expect("Failed to create temporary dir");
    let path = dir.path().join("saved.toml");

    let mut config = Config::default();
    config.graph.initial_capacity = 1024;
    config.log.file = "analysis".to_string();
    config.save(&path).expect("Failed to save config in test");

    let loaded = Config::load(&path).expect("Failed to load config in test");
    assert_eq!(loaded, config);
    assert_eq!(loaded.graph.default_max_depth, None);
}

#[test]
#[serial]
fn test_logging_captures_algorithm_output() {
    let dir = tempfile::tempdir().expect("Failed to create temporary dir");
    let mut config = Config::default();
    config.log.level = "debug".to_string();
    config.log.dir = dir.path().to_string_lossy().into_owned();

    logging::init(&config.log).expect("Failed to init logging in test");
    assert!(logging::is_initialized());

    let mut graph: DiGraph<u8> = DiGraph::new();
    graph.add_nodes([1, 2, 3]);
    assert_ok(graph.add_edge(&1, &2));
    assert_ok(graph.add_edge(&2, &1));
    assert_eq!(graph.scc().len(), 2);
    assert!(graph.topo_sort().is_empty());

    logging::shutdown();
    assert!(!logging::is_initialized());
    // 关闭后算法的日志输出不再进入已停止的写线程
    assert_eq!(log::max_level(), log::LevelFilter::Off);
    assert_eq!(graph.scc().len(), 2);

    let content: String = std::fs::read_dir(dir.path())
        .expect("Log dir should be readable in test")
        .filter_map(Result::ok)
        .filter_map(|entry| std::fs::read_to_string(entry.path()).ok())
        .collect();
    assert!(content.contains("强连通分量"));
}
