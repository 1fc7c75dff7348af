use thiserror::Error;

/// Unified result type for the gridscope crate.
pub type Result<T> = std::result::Result<T, ScopeError>;

/// Errors surfaced by the scope registry.
///
/// Stylesheet assembly itself is total and raises nothing; failures only
/// arise when tracking the scope ids of live instances.
#[derive(Debug, Error)]
pub enum ScopeError {
    #[error("scope `{0}` is already registered")]
    Collision(String),
    #[error("scope `{0}` not found")]
    NotFound(String),
}
