//! Store configuration.
//!
//! # Responsibility
//! - Decide how new item ids are derived.
//! - Resolve configuration from process environment.
//!
//! # Invariants
//! - Config parsing never panics; bad input is a human-readable error.

/// Environment variable selecting the id policy.
pub const ID_POLICY_ENV: &str = "TODONOTE_ID_POLICY";

/// How `TodoStore::add` derives a new item id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdPolicy {
    /// Counter that only moves forward; ids are never reused.
    #[default]
    Sequential,
    /// Id equals the item count at creation time. Ids collide after
    /// deletions; kept for parity with the shipped app.
    StoreSize,
}

impl IdPolicy {
    /// Parses `sequential|store_size` (case-insensitive, `-` accepted).
    pub fn parse(raw: &str) -> Result<Self, String> {
        match raw.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "sequential" => Ok(Self::Sequential),
            "store_size" => Ok(Self::StoreSize),
            other => Err(format!(
                "unsupported id policy `{other}`; expected sequential|store_size"
            )),
        }
    }

    /// Stable lowercase label used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::StoreSize => "store_size",
        }
    }
}

/// Configuration for an in-memory todo store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreConfig {
    pub id_policy: IdPolicy,
}

impl StoreConfig {
    /// Reads config from `TODONOTE_ID_POLICY`.
    ///
    /// Unset or blank values fall back to defaults.
    ///
    /// # Errors
    /// - Returns an error when the variable holds an unsupported policy.
    pub fn from_env() -> Result<Self, String> {
        Self::from_env_value(std::env::var(ID_POLICY_ENV).ok().as_deref())
    }

    fn from_env_value(raw: Option<&str>) -> Result<Self, String> {
        let id_policy = match raw.map(str::trim) {
            None | Some("") => IdPolicy::default(),
            Some(value) => IdPolicy::parse(value)?,
        };
        Ok(Self { id_policy })
    }
}
