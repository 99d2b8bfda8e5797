//! ServerBuilder for fluent API to build HTTP servers

use super::entity_registry::EntityRegistry;
use super::exposure::RestExposure;
use super::handlers::RouteContext;
use super::host::ServerHost;
use crate::config::ServiceConfig;
use crate::core::module::Module;
use crate::core::{AuthProvider, IdGenerator, StaticTokenAuth, UuidGenerator};
use anyhow::{Result, anyhow};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for creating HTTP servers with auto-registered routes
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_config(config)
///     .register_module(RestaurantModule::new(stores))
///     .build()?;
/// ```
pub struct ServerBuilder {
    config: ServiceConfig,
    auth: Option<Arc<dyn AuthProvider>>,
    ids: Arc<dyn IdGenerator>,
    modules: Vec<Arc<dyn Module>>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            config: ServiceConfig::default(),
            auth: None,
            ids: Arc::new(UuidGenerator),
            modules: Vec::new(),
        }
    }

    /// Use this configuration instead of the defaults
    pub fn with_config(mut self, config: ServiceConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the auth provider
    ///
    /// Without this call, a `StaticTokenAuth` built from `auth.token` in the
    /// configuration guards the record routes.
    pub fn with_auth_provider(mut self, provider: impl AuthProvider + 'static) -> Self {
        self.auth = Some(Arc::new(provider));
        self
    }

    /// Replace the identifier generator (UUID v4 by default)
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Arc::new(ids);
        self
    }

    /// Register a module
    ///
    /// Its record routes are registered when the host is built.
    pub fn register_module(mut self, module: impl Module + 'static) -> Self {
        tracing::debug!(
            module = module.name(),
            resources = ?module.resource_names(),
            "registering module"
        );
        self.modules.push(Arc::new(module));
        self
    }

    /// Build the host
    ///
    /// Registers the routes of every module against the shared route
    /// context and resolves the auth provider.
    pub fn build_host(self) -> Result<ServerHost> {
        if self.modules.is_empty() {
            return Err(anyhow!(
                "At least one module is required. Call .register_module()"
            ));
        }

        let context = RouteContext {
            ids: self.ids,
            max_limit: self.config.pagination.max_limit,
        };

        let mut entity_registry = EntityRegistry::new();
        for module in &self.modules {
            module.register_entities(&context, &mut entity_registry);
        }

        let auth = self
            .auth
            .unwrap_or_else(|| Arc::new(StaticTokenAuth::new(self.config.auth.token.clone())));

        Ok(ServerHost::new(entity_registry, auth))
    }

    /// Build the final REST router
    pub fn build(self) -> Result<Router> {
        let host = Arc::new(self.build_host()?);
        RestExposure::build_router(host)
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to `server.bind` from the configuration
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    ///
    /// # Example
    ///
    /// ```ignore
    /// ServerBuilder::new()
    ///     .with_config(config)
    ///     .register_module(module)
    ///     .serve().await?;
    /// ```
    pub async fn serve(self) -> Result<()> {
        let addr = self.config.server.bind.clone();
        let app = self.build()?;
        let listener = TcpListener::bind(&addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NoAuthProvider;
    use crate::entities::RestaurantModule;
    use crate::storage::RestaurantStores;

    /// A module registering nothing
    struct EmptyModule;

    impl Module for EmptyModule {
        fn name(&self) -> &str {
            "empty"
        }

        fn resource_names(&self) -> Vec<&str> {
            vec![]
        }

        fn register_entities(&self, _context: &RouteContext, _registry: &mut EntityRegistry) {}
    }

    fn restaurant_module() -> RestaurantModule {
        RestaurantModule::new(RestaurantStores::in_memory())
    }

    #[test]
    fn test_build_without_module_fails() {
        let result = ServerBuilder::new().build_host();
        assert!(result.is_err());
    }

    #[test]
    fn test_build_host_registers_module_routes() {
        let host = ServerBuilder::new()
            .register_module(restaurant_module())
            .build_host()
            .expect("host should build");
        assert_eq!(host.resource_names().len(), 7);
        assert!(host.is_ready());
    }

    #[test]
    fn test_build_with_module_without_records_fails() {
        let result = ServerBuilder::new().register_module(EmptyModule).build();
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_configured_token_guards_host() {
        use axum::http::{HeaderMap, HeaderValue, header};

        let mut config = ServiceConfig::default();
        config.auth.token = "letmein".to_string();

        let host = ServerBuilder::new()
            .with_config(config)
            .register_module(restaurant_module())
            .build_host()
            .unwrap();

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("letmein"));
        assert!(host.auth.authorize(&headers).await.is_ok());

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("secureToken"));
        assert!(host.auth.authorize(&headers).await.is_err());
    }

    #[test]
    fn test_fluent_chaining_full_pipeline() {
        let result = ServerBuilder::new()
            .with_auth_provider(NoAuthProvider)
            .with_id_generator(UuidGenerator)
            .register_module(restaurant_module())
            .build();
        assert!(result.is_ok(), "full fluent pipeline should succeed");
    }
}
