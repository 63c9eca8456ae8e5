use crate::config::Config;

/// Shared application state injected into route handlers via Axum extractors.
/// The extraction engine is stateless, so the state carries only config.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}
