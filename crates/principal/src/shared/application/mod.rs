pub mod role_cache;
pub mod role_lookup;
pub mod token_store;
pub mod user_repository;

pub use role_cache::RoleCache;
pub use role_lookup::RoleLookup;
pub use token_store::{NewTokenRecord, TokenStore};
pub use user_repository::UserRepository;

#[cfg(test)]
pub use role_cache::MockRoleCache;
#[cfg(test)]
pub use role_lookup::MockRoleLookup;
#[cfg(test)]
pub use token_store::MockTokenStore;
#[cfg(test)]
pub use user_repository::MockUserRepository;
