/// fraudlens version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Euler–Mascheroni constant, used to approximate harmonic numbers.
pub const EULER_MASCHERONI: f64 = 0.5772156649;

/// Name under which a record's own entity id is addressable as a field.
pub const ENTITY_FIELD: &str = "entity";

/// Project config file name looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "fraudlens.toml";

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "FRAUDLENS_";
