pub mod error;
pub mod ids;
pub mod pagination;
pub mod principal;
