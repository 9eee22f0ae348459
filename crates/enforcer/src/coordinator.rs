//! `CasbinReloadCoordinator`: the one place that touches `casbin::Enforcer`
//! directly.
//!
//! Algorithm (`spec.md` §4.6):
//! 1. Fetch the active model text from the model-config store.
//! 2. If present, parse a fresh `DefaultModel` from it — a parse failure
//!    aborts the reload before anything is touched, so the previously
//!    installed model survives.
//! 3. Build a brand-new `Enforcer` against that model and load every `p`/`g`
//!    row from the rule store into it.
//! 4. Swap the new enforcer in under a short write-lock critical section.
//!    If no active model exists, rebuild the policy set in place against
//!    whatever model is already installed instead (step 2/3 are skipped).
//!
//! A `tokio::sync::Mutex` serializes concurrent `reload()` callers end to
//! end (`spec.md` §5: "concurrent callers block until the in-flight reload
//! completes"); the `tokio::sync::RwLock` around the installed enforcer is
//! only ever held briefly, so enforcement reads are never blocked behind a
//! slow rebuild — they observe either the pre- or post-reload enforcer,
//! never a torn mixture.

use std::sync::Arc;

use async_trait::async_trait;
use casbin::{CoreApi, DefaultModel, Enforcer, MemoryAdapter, MgmtApi, RbacApi};
use kernel::ReloadCoordinator;
use policies::domain::PType;
use policies::shared::application::{ModelConfigStore, RuleStore};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, error, info, warn};

use crate::error::EnforcerError;

pub struct CasbinReloadCoordinator<MS, RS> {
    model_store: Arc<MS>,
    rule_store: Arc<RS>,
    enforcer: RwLock<Option<Enforcer>>,
    reload_lock: Mutex<()>,
}

impl<MS, RS> CasbinReloadCoordinator<MS, RS>
where
    MS: ModelConfigStore,
    RS: RuleStore,
{
    pub fn new(model_store: Arc<MS>, rule_store: Arc<RS>) -> Self {
        Self { model_store, rule_store, enforcer: RwLock::new(None), reload_lock: Mutex::new(()) }
    }

    /// `enforce(sub, obj, act, dom)` from the enforcer contract in `spec.md`
    /// §6. Request arity has to match whatever model is currently loaded —
    /// scenario S1's model has no domain slot at all, S5's does — so this
    /// tries the 4-argument request first and falls back to 3 if the loaded
    /// model rejects it, rather than the caller needing to know which shape
    /// is installed.
    pub async fn enforce(&self, sub: &str, obj: &str, act: &str, dom: &str) -> Result<bool, EnforcerError> {
        let guard = self.enforcer.read().await;
        let enforcer = guard.as_ref().ok_or(EnforcerError::NotLoaded)?;

        match enforcer.enforce(vec![sub, obj, act, dom]) {
            Ok(allowed) => Ok(allowed),
            Err(_) => enforcer
                .enforce(vec![sub, obj, act])
                .map_err(|e| EnforcerError::Build(e.to_string())),
        }
    }

    pub async fn is_loaded(&self) -> bool {
        self.enforcer.read().await.is_some()
    }

    async fn try_reload(&self) -> Result<(), EnforcerError> {
        let active = self.model_store.get_active().await?;

        match active {
            Some(version) => {
                let model = DefaultModel::from_str(&version.content)
                    .await
                    .map_err(|e| EnforcerError::ModelParse(e.to_string()))?;

                let mut fresh = Enforcer::new(model, MemoryAdapter::default())
                    .await
                    .map_err(|e| EnforcerError::Build(e.to_string()))?;
                self.load_rules(&mut fresh).await?;

                let mut guard = self.enforcer.write().await;
                *guard = Some(fresh);
                debug!(version_id = %version.id, version = version.version, "enforcer model swapped");
            }
            None => {
                let mut guard = self.enforcer.write().await;
                match guard.as_mut() {
                    Some(enforcer) => {
                        enforcer
                            .clear_policy()
                            .await
                            .map_err(|e| EnforcerError::PolicyLoad(e.to_string()))?;
                        Self::load_rules_into(enforcer, &self.rule_store).await?;
                        debug!("enforcer policy set reloaded against existing model");
                    }
                    None => {
                        debug!("no active model and no model previously installed, nothing to reload");
                    }
                }
            }
        }

        Ok(())
    }

    async fn load_rules(&self, enforcer: &mut Enforcer) -> Result<(), EnforcerError> {
        Self::load_rules_into(enforcer, &self.rule_store).await
    }

    async fn load_rules_into(enforcer: &mut Enforcer, rule_store: &Arc<RS>) -> Result<(), EnforcerError> {
        let policies = rule_store.all_by_ptype(PType::P).await?;
        let policy_rows: Vec<Vec<String>> = policies.iter().map(row_to_params).collect();
        if !policy_rows.is_empty() {
            enforcer
                .add_policies(policy_rows)
                .await
                .map_err(|e| EnforcerError::PolicyLoad(e.to_string()))?;
        }

        let relations = rule_store.all_by_ptype(PType::G).await?;
        let relation_rows: Vec<Vec<String>> = relations.iter().map(row_to_params).collect();
        if !relation_rows.is_empty() {
            enforcer
                .add_grouping_policies(relation_rows)
                .await
                .map_err(|e| EnforcerError::PolicyLoad(e.to_string()))?;
        }

        enforcer.build_role_links().map_err(|e| EnforcerError::PolicyLoad(e.to_string()))?;
        Ok(())
    }
}

/// Flattens a rule row's `v0..v5` into the trimmed positional parameter list
/// Casbin's `add_policies`/`add_grouping_policies` expect: trailing `None`
/// slots are dropped, but an absent slot followed by a populated one is kept
/// as `""` so positions still line up with the model's definition.
fn row_to_params(rule: &policies::domain::RuleTuple) -> Vec<String> {
    let slots = [&rule.v0, &rule.v1, &rule.v2, &rule.v3, &rule.v4, &rule.v5];
    let last_populated = slots.iter().rposition(|s| s.is_some());
    match last_populated {
        None => Vec::new(),
        Some(last) => slots[..=last].iter().map(|s| s.clone().unwrap_or_default()).collect(),
    }
}

#[async_trait]
impl<MS, RS> ReloadCoordinator for CasbinReloadCoordinator<MS, RS>
where
    MS: ModelConfigStore,
    RS: RuleStore,
{
    async fn reload(&self) -> bool {
        let _guard = self.reload_lock.lock().await;
        match self.try_reload().await {
            Ok(()) => true,
            Err(e) => {
                error!(error = %e, "enforcer reload failed, keeping previously installed enforcer");
                warn!("store commit already happened; this reload is retryable on the next mutation");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::ModelVersionId;
    use policies::domain::{ModelConfigVersion, NewRuleTuple};
    use policies::shared::infrastructure::in_memory::{InMemoryModelConfigStore, InMemoryRuleStore};

    const MODEL_NO_DOMAIN: &str = r#"
[request_definition]
r = sub, obj, act

[policy_definition]
p = sub, obj, act

[policy_effect]
e = some(where (p.eft == allow))

[matchers]
m = r.sub == p.sub && r.obj == p.obj && r.act == p.act
"#;

    const MODEL_WITH_DOMAIN: &str = r#"
[request_definition]
r = sub, obj, act, dom

[policy_definition]
p = sub, obj, act, dom

[role_definition]
g = _, _, _

[policy_effect]
e = some(where (p.eft == allow))

[matchers]
m = g(r.sub, p.sub, r.dom) && r.obj == p.obj && r.act == p.act && r.dom == p.dom
"#;

    async fn seed_active_model(model_store: &InMemoryModelConfigStore, content: &str) {
        let id = model_store.next_id();
        model_store
            .insert_draft(ModelConfigVersion::new_draft(id, 1, content, "", "u1"))
            .await
            .unwrap();
        model_store.set_active_version(id).await.unwrap();
    }

    #[tokio::test]
    async fn enforces_true_for_a_matching_policy_and_false_otherwise() {
        let model_store = Arc::new(InMemoryModelConfigStore::new());
        let rule_store = Arc::new(InMemoryRuleStore::new());
        seed_active_model(&model_store, MODEL_NO_DOMAIN).await;

        rule_store
            .insert(NewRuleTuple {
                ptype: PType::P,
                v0: Some("admin".into()),
                v1: Some("/api/users".into()),
                v2: Some("GET".into()),
                v3: None,
                v4: None,
                v5: None,
            })
            .await
            .unwrap();

        let coordinator = CasbinReloadCoordinator::new(model_store, rule_store);
        assert!(coordinator.reload().await);

        assert!(coordinator.enforce("admin", "/api/users", "GET", "").await.unwrap());
        assert!(!coordinator.enforce("admin", "/api/users", "POST", "").await.unwrap());
    }

    #[tokio::test]
    async fn role_inheritance_is_scoped_to_its_domain() {
        let model_store = Arc::new(InMemoryModelConfigStore::new());
        let rule_store = Arc::new(InMemoryRuleStore::new());
        seed_active_model(&model_store, MODEL_WITH_DOMAIN).await;

        rule_store
            .insert(NewRuleTuple {
                ptype: PType::P,
                v0: Some("admin".into()),
                v1: Some("/api/users".into()),
                v2: Some("GET".into()),
                v3: Some("acme".into()),
                v4: None,
                v5: None,
            })
            .await
            .unwrap();
        rule_store
            .insert(NewRuleTuple {
                ptype: PType::G,
                v0: Some("u42".into()),
                v1: Some("admin".into()),
                v2: Some("acme".into()),
                v3: None,
                v4: None,
                v5: None,
            })
            .await
            .unwrap();

        let coordinator = CasbinReloadCoordinator::new(model_store, rule_store);
        assert!(coordinator.reload().await);

        assert!(coordinator.enforce("u42", "/api/users", "GET", "acme").await.unwrap());
        assert!(!coordinator.enforce("u42", "/api/users", "GET", "other").await.unwrap());
    }

    #[tokio::test]
    async fn invalid_model_text_is_caught_and_reported_as_false() {
        let model_store = Arc::new(InMemoryModelConfigStore::new());
        let rule_store = Arc::new(InMemoryRuleStore::new());
        seed_active_model(&model_store, "[request_definition]\n[policy_definition]\n[matchers]\nm = ???\n").await;

        let coordinator = CasbinReloadCoordinator::new(model_store, rule_store);
        assert!(!coordinator.reload().await);
        assert!(!coordinator.is_loaded().await);
    }

    #[tokio::test]
    async fn a_failed_reload_leaves_the_previous_enforcer_installed() {
        let model_store = Arc::new(InMemoryModelConfigStore::new());
        let rule_store = Arc::new(InMemoryRuleStore::new());
        seed_active_model(&model_store, MODEL_NO_DOMAIN).await;
        rule_store
            .insert(NewRuleTuple {
                ptype: PType::P,
                v0: Some("admin".into()),
                v1: Some("/api/users".into()),
                v2: Some("GET".into()),
                v3: None,
                v4: None,
                v5: None,
            })
            .await
            .unwrap();

        let coordinator = CasbinReloadCoordinator::new(model_store.clone(), rule_store);
        assert!(coordinator.reload().await);
        assert!(coordinator.is_loaded().await);
        assert!(coordinator.enforce("admin", "/api/users", "GET", "").await.unwrap());

        let bad_id = model_store.next_id();
        model_store
            .insert_draft(ModelConfigVersion::new_draft(bad_id, 2, "garbage", "", "u1"))
            .await
            .unwrap();
        model_store.set_active_version(bad_id).await.unwrap();

        assert!(!coordinator.reload().await);
        assert!(coordinator.is_loaded().await);
        assert!(coordinator.enforce("admin", "/api/users", "GET", "").await.unwrap());
    }

    #[tokio::test]
    async fn reload_with_no_active_model_keeps_enforcer_unloaded() {
        let model_store = Arc::new(InMemoryModelConfigStore::new());
        let rule_store = Arc::new(InMemoryRuleStore::new());

        let coordinator = CasbinReloadCoordinator::new(model_store, rule_store);
        assert!(coordinator.reload().await);
        assert!(!coordinator.is_loaded().await);

        let err = coordinator.enforce("a", "b", "c", "").await.unwrap_err();
        assert!(matches!(err, EnforcerError::NotLoaded));
    }
}
