/// 存放访问令牌的键
pub const TOKEN_KEY: &str = "nh_token";

/// 存放用户信息（JSON）的键
pub const USER_KEY: &str = "nh_user";

/// Redis 中会话键的前缀，便于多个客户端共用一个库
const REDIS_SESSION_PREFIX: &str = "nh:session:";

/// 生成 Redis 中实际使用的键
pub fn redis_key(key: &str) -> String {
    format!("{}{}", REDIS_SESSION_PREFIX, key)
}
