//! Composition root: the one place concrete adapters are instantiated and
//! wired into use cases, which are then registered with the CQRS bus
//! (`spec.md` §4.9) and bundled into `AppState`. Mirrors the shape of the
//! teacher's `bootstrap::bootstrap` / `composition_root::CompositionRoot`
//! (infrastructure first, then use cases, then bus registration) without
//! the Axum/HTTP layer, which `spec.md` §1 keeps out of scope.

use std::sync::Arc;
use std::time::Duration;

use cqrs::{CommandBus, EventOutbox, InMemoryEventOutbox, OutboxRecorder, QueryBus};
use enforcer::CasbinReloadCoordinator;
use kernel::{EventBus, InMemoryEventBus};
use policies::shared::infrastructure::in_memory::{InMemoryModelConfigStore, InMemoryRuleStore};
use principal::shared::infrastructure::in_memory::{
    InMemoryRoleCache, InMemoryRoleLookup, InMemoryTokenStore, InMemoryUserRepository,
};
use principal::shared::infrastructure::TokenCodec;
use redis::aio::ConnectionManager;
use tracing::info;

use crate::config::Config;
use crate::role_cache_backend::RoleCacheBackend;

pub type Events = InMemoryEventBus;
pub type RuleStoreAdapter = InMemoryRuleStore;
pub type ModelStoreAdapter = InMemoryModelConfigStore;
pub type Reload = CasbinReloadCoordinator<ModelStoreAdapter, RuleStoreAdapter>;
pub type UserRepositoryAdapter = InMemoryUserRepository;
pub type TokenStoreAdapter = InMemoryTokenStore;
pub type RoleLookupAdapter = InMemoryRoleLookup;

pub type PasswordLogin = principal::features::password_login::PasswordLoginUseCase<
    UserRepositoryAdapter,
    TokenStoreAdapter,
    RoleCacheBackend,
    RoleLookupAdapter,
    Events,
>;
pub type TokenRefresh = principal::features::token_refresh::TokenRefreshUseCase<TokenStoreAdapter, Events>;
pub type SignOut = principal::features::sign_out::SignOutUseCase<TokenStoreAdapter, RoleCacheBackend, Events>;

/// Everything the black-box scenario tests (and, eventually, an HTTP layer)
/// need: the CQRS buses for the ten `spec.md` §6 commands/queries, the
/// outbox, and the three principal operations that aren't bus commands
/// (`execPasswordLogin`/`refreshToken`/`signOut`).
pub struct AppState {
    pub command_bus: Arc<CommandBus>,
    pub query_bus: Arc<QueryBus>,
    pub events: Arc<Events>,
    pub outbox: Arc<InMemoryEventOutbox>,
    pub reload: Arc<Reload>,
    pub user_repository: Arc<UserRepositoryAdapter>,
    pub role_lookup: Arc<RoleLookupAdapter>,
    pub password_login: Arc<PasswordLogin>,
    pub token_refresh: Arc<TokenRefresh>,
    pub sign_out: Arc<SignOut>,
}

async fn build_role_cache(config: &Config) -> anyhow::Result<RoleCacheBackend> {
    match config.runtime.role_cache_backend.as_str() {
        "redis" => {
            let url = config
                .runtime
                .redis_url
                .as_ref()
                .ok_or_else(|| anyhow::anyhow!("redis backend selected without IAM_RUNTIME_REDIS_URL"))?;
            let client = redis::Client::open(url.as_str())?;
            let connection = ConnectionManager::new(client).await?;
            Ok(RoleCacheBackend::Redis(
                principal::shared::infrastructure::RedisRoleCache::new(connection, config.role_cache.key_prefix.clone()),
            ))
        }
        _ => Ok(RoleCacheBackend::InMemory(InMemoryRoleCache::new())),
    }
}

pub async fn bootstrap(config: &Config) -> anyhow::Result<AppState> {
    info!("initializing infrastructure adapters");
    let events = Arc::new(InMemoryEventBus::with_capacity(config.runtime.event_channel_capacity));
    let outbox: Arc<InMemoryEventOutbox> = Arc::new(InMemoryEventOutbox::new());

    let rule_store = Arc::new(InMemoryRuleStore::new());
    let model_store = Arc::new(InMemoryModelConfigStore::new());
    let reload = Arc::new(CasbinReloadCoordinator::new(model_store.clone(), rule_store.clone()));

    let user_repository = Arc::new(InMemoryUserRepository::new());
    let token_store = Arc::new(InMemoryTokenStore::new());
    let role_lookup = Arc::new(InMemoryRoleLookup::new());
    let role_cache = Arc::new(build_role_cache(config).await?);

    let access_codec = Arc::new(TokenCodec::new(config.token.jwt_access_secret.as_bytes()));
    let refresh_codec = Arc::new(TokenCodec::new(config.token.jwt_refresh_secret.as_bytes()));
    let access_ttl = Duration::from_secs(config.token.jwt_access_ttl_seconds as u64);
    let refresh_ttl = Duration::from_secs(config.token.jwt_refresh_ttl_seconds as u64);

    info!("subscribing event outbox recorders");
    subscribe_outbox_recorders(&events, outbox.clone()).await?;

    info!("instantiating use cases");
    let command_bus = Arc::new(CommandBus::new());
    let query_bus = Arc::new(QueryBus::new());

    register_policy_handlers(&command_bus, &query_bus, rule_store.clone(), model_store.clone(), events.clone(), reload.clone());

    let user_verify_email = Arc::new(principal::features::user_verify_email::UserVerifyEmailUseCase::new(
        user_repository.clone(),
        events.clone(),
    ));
    command_bus.register::<principal::features::user_verify_email::UserVerifyEmailCommand, _>(user_verify_email);

    let password_login = Arc::new(PasswordLogin::new(
        user_repository.clone(),
        token_store.clone(),
        role_cache.clone(),
        role_lookup.clone(),
        events.clone(),
        access_codec.clone(),
        refresh_codec.clone(),
        access_ttl,
        refresh_ttl,
    ));
    let token_refresh = Arc::new(TokenRefresh::new(
        token_store.clone(),
        events.clone(),
        access_codec,
        refresh_codec,
        access_ttl,
        refresh_ttl,
    ));
    let sign_out = Arc::new(SignOut::new(token_store.clone(), role_cache, events.clone()));

    ensure_all_registered(&command_bus, &query_bus);

    info!("composition root ready");
    Ok(AppState {
        command_bus,
        query_bus,
        events,
        outbox,
        reload,
        user_repository,
        role_lookup,
        password_login,
        token_refresh,
        sign_out,
    })
}

fn register_policy_handlers(
    command_bus: &Arc<CommandBus>,
    query_bus: &Arc<QueryBus>,
    rule_store: Arc<RuleStoreAdapter>,
    model_store: Arc<ModelStoreAdapter>,
    events: Arc<Events>,
    reload: Arc<Reload>,
) {
    use policies::features::*;

    let id_generator = Arc::new(model_draft_create::SequentialModelVersionIdGenerator::new());
    command_bus.register::<model_draft_create::ModelDraftCreateCommand, _>(Arc::new(
        model_draft_create::ModelDraftCreateUseCase::new(id_generator, model_store.clone(), events.clone()),
    ));
    command_bus.register::<model_draft_update::ModelDraftUpdateCommand, _>(Arc::new(
        model_draft_update::ModelDraftUpdateUseCase::new(model_store.clone()),
    ));
    command_bus.register::<model_publish::ModelPublishCommand, _>(Arc::new(model_publish::ModelPublishUseCase::new(
        model_store.clone(),
        events.clone(),
        reload.clone(),
    )));
    command_bus.register::<model_rollback::ModelRollbackCommand, _>(Arc::new(model_rollback::ModelRollbackUseCase::new(
        model_store.clone(),
        events.clone(),
        reload.clone(),
    )));
    command_bus.register::<policy_create::PolicyCreateCommand, _>(Arc::new(policy_create::PolicyCreateUseCase::new(
        rule_store.clone(),
        events.clone(),
        reload.clone(),
    )));
    command_bus.register::<policy_delete::PolicyDeleteCommand, _>(Arc::new(policy_delete::PolicyDeleteUseCase::new(
        rule_store.clone(),
        events.clone(),
        reload.clone(),
    )));
    command_bus.register::<policy_batch::PolicyBatchCommand, _>(Arc::new(policy_batch::PolicyBatchUseCase::new(
        rule_store.clone(),
        events.clone(),
        reload.clone(),
    )));
    command_bus.register::<relation_create::RelationCreateCommand, _>(Arc::new(
        relation_create::RelationCreateUseCase::new(rule_store.clone(), events.clone(), reload.clone()),
    ));
    command_bus.register::<relation_delete::RelationDeleteCommand, _>(Arc::new(
        relation_delete::RelationDeleteUseCase::new(rule_store.clone(), events.clone(), reload),
    ));

    query_bus.register::<page_policies::PagePoliciesQuery, _>(Arc::new(page_policies::PagePoliciesUseCase::new(
        rule_store.clone(),
    )));
    query_bus.register::<page_relations::PageRelationsQuery, _>(Arc::new(page_relations::PageRelationsUseCase::new(
        rule_store,
    )));
    query_bus.register::<page_model_versions::PageModelVersionsQuery, _>(Arc::new(
        page_model_versions::PageModelVersionsUseCase::new(model_store.clone()),
    ));
    query_bus.register::<model_version_detail::ModelVersionDetailQuery, _>(Arc::new(
        model_version_detail::ModelVersionDetailUseCase::new(model_store.clone()),
    ));
    query_bus.register::<model_version_diff::ModelVersionDiffQuery, _>(Arc::new(
        model_version_diff::ModelVersionDiffUseCase::new(model_store),
    ));
}

fn ensure_all_registered(command_bus: &CommandBus, query_bus: &QueryBus) {
    use policies::features::*;

    command_bus.ensure_registered::<model_draft_create::ModelDraftCreateCommand>();
    command_bus.ensure_registered::<model_draft_update::ModelDraftUpdateCommand>();
    command_bus.ensure_registered::<model_publish::ModelPublishCommand>();
    command_bus.ensure_registered::<model_rollback::ModelRollbackCommand>();
    command_bus.ensure_registered::<policy_create::PolicyCreateCommand>();
    command_bus.ensure_registered::<policy_delete::PolicyDeleteCommand>();
    command_bus.ensure_registered::<policy_batch::PolicyBatchCommand>();
    command_bus.ensure_registered::<relation_create::RelationCreateCommand>();
    command_bus.ensure_registered::<relation_delete::RelationDeleteCommand>();
    command_bus.ensure_registered::<principal::features::user_verify_email::UserVerifyEmailCommand>();

    query_bus.ensure_registered::<page_policies::PagePoliciesQuery>();
    query_bus.ensure_registered::<page_relations::PageRelationsQuery>();
    query_bus.ensure_registered::<page_model_versions::PageModelVersionsQuery>();
    query_bus.ensure_registered::<model_version_detail::ModelVersionDetailQuery>();
    query_bus.ensure_registered::<model_version_diff::ModelVersionDiffQuery>();
}

/// One `OutboxRecorder` subscription per domain event type this workspace
/// publishes (`spec.md` §4.10: the outbox is "one subscriber among possibly
/// several").
async fn subscribe_outbox_recorders(events: &Arc<Events>, outbox: Arc<InMemoryEventOutbox>) -> anyhow::Result<()> {
    let outbox: Arc<dyn EventOutbox> = outbox;

    events
        .subscribe::<policies::events::ModelVersionDrafted, _>(Arc::new(OutboxRecorder::new(
            "model_config_version",
            outbox.clone(),
        )))
        .await?;
    events
        .subscribe::<policies::events::ModelVersionPublished, _>(Arc::new(OutboxRecorder::new(
            "model_config_version",
            outbox.clone(),
        )))
        .await?;
    events
        .subscribe::<policies::events::ModelVersionRolledBack, _>(Arc::new(OutboxRecorder::new(
            "model_config_version",
            outbox.clone(),
        )))
        .await?;
    events
        .subscribe::<policies::events::PolicyRuleChanged, _>(Arc::new(OutboxRecorder::new("policy_rule", outbox.clone())))
        .await?;
    events
        .subscribe::<policies::events::PolicyBatchApplied, _>(Arc::new(OutboxRecorder::new("policy_rule", outbox.clone())))
        .await?;
    events
        .subscribe::<policies::events::RoleRelationChanged, _>(Arc::new(OutboxRecorder::new(
            "role_relation",
            outbox.clone(),
        )))
        .await?;
    events
        .subscribe::<principal::events::UserLoggedIn, _>(Arc::new(OutboxRecorder::new("user", outbox.clone())))
        .await?;
    events
        .subscribe::<principal::events::TokenGenerated, _>(Arc::new(OutboxRecorder::new("token", outbox.clone())))
        .await?;
    events
        .subscribe::<principal::events::RefreshTokenUsed, _>(Arc::new(OutboxRecorder::new("token", outbox.clone())))
        .await?;
    events
        .subscribe::<principal::events::UserSignedOut, _>(Arc::new(OutboxRecorder::new("user", outbox.clone())))
        .await?;
    events
        .subscribe::<principal::events::UserEmailVerified, _>(Arc::new(OutboxRecorder::new("user", outbox)))
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bootstrap_registers_every_command_and_query() {
        let config = Config::default();
        let state = bootstrap(&config).await.expect("bootstrap should succeed with defaults");
        // no model version has been published yet, so the enforcer has
        // nothing loaded; ensure_all_registered inside bootstrap() already
        // panicked if any handler were missing.
        assert!(!state.reload.is_loaded().await);
    }

    #[tokio::test]
    async fn bootstrap_wires_a_working_password_login_round_trip() {
        use principal::domain::RequestContext;
        use principal::features::password_login::dto::PasswordLoginRequest;

        let config = Config::default();
        let state = bootstrap(&config).await.unwrap();
        state.user_repository.seed(principal::domain::User {
            uid: 1,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            phone_number: "555-0100".to_string(),
            domain: "default".to_string(),
            password_hash: principal::domain::PasswordHash::of_plaintext("secret"),
            enabled: true,
            email_verified: true,
        });
        state.role_lookup.seed(1, "default", std::collections::HashSet::from(["admin".to_string()]));

        let pair = state
            .password_login
            .handle(PasswordLoginRequest {
                identifier: "alice".to_string(),
                password: "secret".to_string(),
                context: RequestContext::default(),
            })
            .await
            .unwrap();
        assert!(!pair.access_token.is_empty());
        assert_ne!(pair.access_token, pair.refresh_token);
    }
}
