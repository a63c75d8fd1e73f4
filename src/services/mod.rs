//! 服务层模块
//!
//! 构建在图存储之上的算法

pub mod algorithm;

pub use algorithm::*;
