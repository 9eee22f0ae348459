//! Role cache and principal/token service (C7, C8 — `spec.md` §4.7/§4.8).
//!
//! ## Module structure
//!
//! - `domain` — `User`/`PasswordHash`, the token pair/record shapes, JWT
//!   claims.
//! - `shared::application` — `UserRepository`, `TokenStore`, `RoleCache`,
//!   `RoleLookup` ports.
//! - `shared::infrastructure` — in-memory adapters, the Redis-backed role
//!   cache, and the `jsonwebtoken`-based access/refresh codec.
//! - `features` — `password_login` (`execPasswordLogin`), `token_refresh`
//!   (`refreshToken`), `sign_out` (`signOut`), and `user_verify_email` (the
//!   one command this bounded context exposes on the CQRS bus, `spec.md`
//!   §6's `UserVerifyEmail`).
//!
//! `execPasswordLogin`/`refreshToken`/`signOut` are not CQRS commands in
//! `spec.md` §6's external-interface list — they are direct service
//! operations the way the teacher's own `crates/iam/src/features/login`
//! handler is a plain async function, not a bus dispatch target.

pub mod domain;
pub mod events;
pub mod features;
pub mod shared;

pub use domain::{Claims, PasswordHash, RequestContext, TokenPair, TokenRecord, TokenStatus, User};
pub use shared::application::{NewTokenRecord, RoleCache, RoleLookup, TokenStore, UserRepository};
pub use shared::infrastructure::TokenCodec;
