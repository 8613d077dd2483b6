use clap::{Parser, ValueEnum};
use flavorscope_core::domain::common::{
    ChallengeConfig, DEFAULT_MOOD_THRESHOLD, FlavorscopeConfig, SpeechConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "flavorscope", about = "Flavor compatibility and recommendation API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub log: LogArgs,

    #[command(flatten)]
    pub engine: EngineArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix for every route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-format", env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, clap::Args)]
pub struct EngineArgs {
    /// Fixes challenge draws for reproducible runs.
    #[arg(long = "challenge-seed", env = "CHALLENGE_SEED")]
    pub challenge_seed: Option<u64>,

    #[arg(long = "mood-threshold", env = "MOOD_THRESHOLD", default_value_t = DEFAULT_MOOD_THRESHOLD)]
    pub mood_threshold: f32,
}

impl From<Args> for FlavorscopeConfig {
    fn from(args: Args) -> Self {
        FlavorscopeConfig {
            challenge: ChallengeConfig {
                seed: args.engine.challenge_seed,
            },
            speech: SpeechConfig {
                mood_threshold: args.engine.mood_threshold,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["flavorscope"]);
        assert_eq!(args.server.port, 3333);
        assert_eq!(args.server.root_path, "");
        assert_eq!(args.log.format, LogFormat::Pretty);

        let config = FlavorscopeConfig::from(args);
        assert_eq!(config.challenge.seed, None);
        assert_eq!(config.speech.mood_threshold, DEFAULT_MOOD_THRESHOLD);
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::parse_from([
            "flavorscope",
            "--server-root-path",
            "/api",
            "--allowed-origins",
            "http://a.test,http://b.test",
            "--challenge-seed",
            "9",
            "--mood-threshold",
            "1.5",
            "--log-format",
            "json",
        ]);
        assert_eq!(args.server.allowed_origins, vec!["http://a.test", "http://b.test"]);
        assert_eq!(args.log.format, LogFormat::Json);

        let config = FlavorscopeConfig::from(args);
        assert_eq!(config.challenge.seed, Some(9));
        assert_eq!(config.speech.mood_threshold, 1.5);
    }
}
