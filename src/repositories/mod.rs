//! Data sources backing the registry resolver.
//!
//! Two repositories feed the resolver's precedence chain:
//!
//! - `static_store`: compiled-in production and test-network tables, the
//!   highest-precedence ground truth
//! - `overrides`: an optional operator-supplied document loaded once at
//!   first access, never overriding a compiled-in entry
//!
//! The third source, the remote fallback, lives in `services::remote`
//! because it involves network I/O and caching policy rather than plain
//! data access.

mod error;
mod overrides;
mod static_store;

pub use error::RepositoryError;
pub use overrides::OverrideRepository;
pub use static_store::StaticTableStore;
