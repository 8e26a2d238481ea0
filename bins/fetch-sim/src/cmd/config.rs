use std::time::Duration;

use clap::Args;
use serde::Deserialize;

use recfetch_api::roster::Roster;
use recfetch_engine::LatencyModel;

use super::error::SimError;

// ═══════════════════════════════════════════════════════════════
//  Config file (TOML)
// ═══════════════════════════════════════════════════════════════

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    pub delay_ms: Option<u64>,
    pub jitter_ms: Option<u64>,
    pub seed: Option<i64>,
    pub ids: Option<Vec<u64>>,
    #[serde(default)]
    pub records: Vec<RecordEntry>,
}

/// `[[records]]` entry — overrides the built-in roster when present.
#[derive(Debug, Deserialize)]
pub struct RecordEntry {
    pub id: u64,
    pub name: String,
}

pub fn load_config(path: &str) -> Result<Config, SimError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| SimError::Config(format!("cannot read config {path}: {e}")))?;
    toml::from_str(&content).map_err(|e| SimError::Config(format!("bad config {path}: {e}")))
}

// ═══════════════════════════════════════════════════════════════
//  CLI args
// ═══════════════════════════════════════════════════════════════

#[derive(Args, Clone, Debug)]
pub struct SimArgs {
    /// Path to config.toml
    #[arg(long, default_value = "config.toml", env = "FETCH_SIM_CONFIG")]
    pub config: String,

    /// Simulated fetch latency in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Extra uniform latency in [0, N] ms (0 = fixed delay)
    #[arg(long)]
    pub jitter_ms: Option<u64>,

    /// Seed for the jitter PRNG (0 = current time)
    #[arg(long)]
    pub seed: Option<i64>,

    /// Ids to fetch; the first one drives the sequential task
    #[arg(long, value_delimiter = ',')]
    pub ids: Option<Vec<u64>>,
}

// ═══════════════════════════════════════════════════════════════
//  Effective — merged config
// ═══════════════════════════════════════════════════════════════

/// Final configuration after merge: config.toml < env/CLI.
pub struct Effective {
    pub delay: Duration,
    pub jitter: Duration,
    pub seed: i64,
    pub ids: Vec<u64>,
    pub roster: Roster,
}

impl Effective {
    pub fn new(args: &SimArgs) -> Result<Self, SimError> {
        let cfg = match load_config(&args.config) {
            Ok(c) => c,
            Err(e) => {
                if std::path::Path::new(&args.config).exists() {
                    return Err(e);
                }
                Config::default()
            }
        };

        let ids = args
            .ids
            .clone()
            .or(cfg.ids)
            .unwrap_or_else(|| vec![1, 2, 3]);
        if ids.is_empty() {
            return Err(SimError::Config("at least one id required".into()));
        }

        let roster = if cfg.records.is_empty() {
            Roster::default()
        } else {
            cfg.records
                .into_iter()
                .map(|r| (r.id, r.name))
                .collect()
        };

        Ok(Self {
            delay: Duration::from_millis(
                args.delay_ms
                    .or(cfg.delay_ms)
                    .unwrap_or(LatencyModel::DEFAULT_DELAY_MS),
            ),
            jitter: Duration::from_millis(args.jitter_ms.or(cfg.jitter_ms).unwrap_or(0)),
            seed: args.seed.or(cfg.seed).unwrap_or(0),
            ids,
            roster,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_without_config_file() -> SimArgs {
        SimArgs {
            config: "/nonexistent/config.toml".into(),
            delay_ms: None,
            jitter_ms: None,
            seed: None,
            ids: None,
        }
    }

    #[test]
    fn defaults_when_no_config_file() {
        let eff = Effective::new(&args_without_config_file()).unwrap();
        assert_eq!(eff.delay, Duration::from_millis(1500));
        assert_eq!(eff.jitter, Duration::ZERO);
        assert_eq!(eff.ids, vec![1, 2, 3]);
        assert!(eff.roster.contains(1));
    }

    #[test]
    fn cli_overrides_defaults() {
        let mut args = args_without_config_file();
        args.delay_ms = Some(50);
        args.ids = Some(vec![2]);
        let eff = Effective::new(&args).unwrap();
        assert_eq!(eff.delay, Duration::from_millis(50));
        assert_eq!(eff.ids, vec![2]);
    }

    #[test]
    fn empty_id_list_is_rejected() {
        let mut args = args_without_config_file();
        args.ids = Some(Vec::new());
        assert!(Effective::new(&args).is_err());
    }

    #[test]
    fn config_records_replace_builtin_roster() {
        let cfg: Config = toml::from_str(
            r#"
            delay_ms = 200

            [[records]]
            id = 10
            name = "Lucius Fox"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.delay_ms, Some(200));
        let roster: Roster = cfg
            .records
            .into_iter()
            .map(|r| (r.id, r.name))
            .collect();
        assert_eq!(roster.resolve(10).unwrap().name, "Lucius Fox");
        assert!(!roster.contains(1));
    }
}
