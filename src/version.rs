// Service identity, resolved from Cargo.toml at build time

/// Package name (reported by GET /version).
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Package version (reported by GET /version).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
