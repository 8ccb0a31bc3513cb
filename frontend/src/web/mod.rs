//! 浏览器能力封装
//!
//! 存储与定时器以端口（trait）形式暴露，浏览器实现与测试实现并列。

pub mod route;
pub mod router;
mod storage;
mod timer;

pub use storage::{BrowserStorage, KeyValueStore, MemoryStorage};
pub use timer::{BrowserLatency, Latency, ManualLatency};
