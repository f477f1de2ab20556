/// 存储后端实现

// 进程内存储
pub mod memory;

// JSON 文件存储
pub mod file;

// Redis 存储
pub mod redis_store;

pub use self::file::FileStore;
pub use self::memory::MemoryStore;
pub use self::redis_store::RedisStore;
