// API 数据传输对象模块
// 包含所有与服务端交互的数据结构

pub mod dashboard;
pub mod detail;
pub mod segment;
pub mod user;

// 重新导出常用类型
pub use dashboard::*;
pub use detail::*;
pub use segment::*;
pub use user::*;
