pub mod role_cache;
pub mod role_lookup;
pub mod token_store;
pub mod user_repository;

pub use role_cache::InMemoryRoleCache;
pub use role_lookup::InMemoryRoleLookup;
pub use token_store::InMemoryTokenStore;
pub use user_repository::InMemoryUserRepository;
