/// Runtime settings. Every field is optional in the environment; the defaults
/// give the plain interactive behaviour.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Fixed seed for exam selection, for reproducible exams
    pub rng_seed: Option<u64>,
    /// tracing filter used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rng_seed: None,
            log_filter: "warn".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();
        Self {
            rng_seed: lookup("PROFESSOR_ASSISTANT_SEED").and_then(|v| v.trim().parse().ok()),
            log_filter: lookup("PROFESSOR_ASSISTANT_LOG").unwrap_or(default.log_filter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        assert_eq!(config_from(&[]), Config::default());
    }

    #[test]
    fn reads_seed_and_log_filter() {
        let config = config_from(&[
            ("PROFESSOR_ASSISTANT_SEED", "42"),
            ("PROFESSOR_ASSISTANT_LOG", "professor_assistant=debug"),
        ]);
        assert_eq!(config.rng_seed, Some(42));
        assert_eq!(config.log_filter, "professor_assistant=debug");
    }

    #[test]
    fn unparsable_seed_falls_back_to_entropy() {
        let config = config_from(&[("PROFESSOR_ASSISTANT_SEED", "forty-two")]);
        assert_eq!(config.rng_seed, None);
    }
}
