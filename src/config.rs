//! Library configuration.

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV: &str = "CHOCOLATESHOP_LOG";

/// Filter used when nothing is configured.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Configuration read when the host loads the library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeConfig {
    /// Tracing filter directive, e.g. `"chocolateshop=debug"`.
    pub log_filter: String,
}

impl Default for NativeConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl NativeConfig {
    /// Build a configuration from the process environment.
    ///
    /// Android apps can set `CHOCOLATESHOP_LOG` with `android.system.Os.setenv`
    /// before `System.loadLibrary`; otherwise the default filter applies.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(filter) = lookup(LOG_ENV) {
            let filter = filter.trim();
            if !filter.is_empty() {
                cfg.log_filter = filter.to_string();
            }
        }
        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = NativeConfig::default();
        assert_eq!(cfg.log_filter, "warn");
    }

    #[test]
    fn test_lookup_overrides_filter() {
        let cfg = NativeConfig::from_lookup(|key| {
            (key == LOG_ENV).then(|| " chocolateshop=trace ".to_string())
        });
        assert_eq!(cfg.log_filter, "chocolateshop=trace");
    }

    #[test]
    fn test_blank_lookup_keeps_default() {
        let cfg = NativeConfig::from_lookup(|_| Some("   ".to_string()));
        assert_eq!(cfg, NativeConfig::default());

        let cfg = NativeConfig::from_lookup(|_| None);
        assert_eq!(cfg, NativeConfig::default());
    }
}
