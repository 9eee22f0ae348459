//! Port the principal service uses to learn a user's role codes on login
//! (`spec.md` §4.8: "populates the role cache"). `spec.md` does not fix
//! where role codes come from; in this workspace the composition root
//! backs this port with the `g`-relation rows `policies::RuleStore` already
//! owns (`RoleRelationDto{childSubject: uid, parentRole, domain}`), kept as
//! a separate port here so `principal` never depends on `policies`
//! directly (`SPEC_FULL.md` §2's workspace layout table).

use std::collections::HashSet;

use async_trait::async_trait;
use kernel::ApiError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoleLookup: Send + Sync {
    async fn roles_for(&self, uid: i64, domain: &str) -> Result<HashSet<String>, ApiError>;
}
