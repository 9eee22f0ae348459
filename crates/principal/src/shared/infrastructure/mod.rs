pub mod in_memory;
pub mod jwt;
pub mod redis_role_cache;

pub use jwt::TokenCodec;
pub use redis_role_cache::RedisRoleCache;
