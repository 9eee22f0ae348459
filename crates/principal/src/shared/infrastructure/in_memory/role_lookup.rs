//! Static in-memory `RoleLookup`, good enough for the composition root's
//! default wiring and for feature tests that don't want to stand up
//! `policies::RuleStore` g-rows just to exercise login.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use kernel::ApiError;

use crate::shared::application::RoleLookup;

#[derive(Default)]
pub struct InMemoryRoleLookup {
    roles: Mutex<HashMap<(i64, String), HashSet<String>>>,
}

impl InMemoryRoleLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, uid: i64, domain: impl Into<String>, roles: HashSet<String>) {
        self.roles.lock().unwrap().insert((uid, domain.into()), roles);
    }
}

#[async_trait]
impl RoleLookup for InMemoryRoleLookup {
    async fn roles_for(&self, uid: i64, domain: &str) -> Result<HashSet<String>, ApiError> {
        Ok(self.roles.lock().unwrap().get(&(uid, domain.to_string())).cloned().unwrap_or_default())
    }
}
