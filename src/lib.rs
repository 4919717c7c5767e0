//! Gridstake - a trustless two-player tic-tac-toe engine with escrowed stakes
//!
//! Gridstake arbitrates staked tic-tac-toe matches without a central referee:
//! - A registry of active games with exactly-two-player enrollment
//! - Per-move legality checks and strict turn alternation
//! - Win and draw detection over rows, columns and diagonals
//! - An escrow that disburses each game's pot exactly once
//! - Timeout forfeiture measured against a shared commit clock
//!
//! The hosting execution environment serializes mutating calls per game,
//! authenticates caller identities, and executes the payouts the engine
//! returns. The engine itself never blocks: every call either completes
//! fully or fails without touching any state.

pub mod clock;
pub mod config;
pub mod error;
pub mod escrow;
pub mod events;
pub mod game;
pub mod registry;

// Re-export commonly used types for convenience
pub use error::{GameError, GameResult};

pub use clock::{CommitClock, ManualClock, SystemClock};
pub use config::{ConfigError, EventSettings, GameSettings, GridstakeConfig};
pub use escrow::{Payout, StakeEscrow};
pub use events::{
    BroadcastNotifier, EndType, GameConcluded, GameCreated, GameEvent, GameJoined, MovePlayed,
    Notifier, NullNotifier,
};
pub use game::{Board, BoardOutcome, Game, GameId, GameStatus, LineKind, PlayerId, Seat, Symbol};
pub use registry::{GameRegistry, PlayOutcome, Settlement};

/// Logging configuration and initialization
pub mod logging {
    use std::env;
    use tracing::Level;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    /// Logging output format
    #[derive(Debug, Clone)]
    pub enum LogFormat {
        Human,
        Json,
    }

    /// Logging configuration
    #[derive(Debug, Clone)]
    pub struct LoggingConfig {
        pub level: Level,
        pub format: LogFormat,
    }

    impl Default for LoggingConfig {
        fn default() -> Self {
            Self {
                level: Level::INFO,
                format: LogFormat::Human,
            }
        }
    }

    /// Initialize structured logging with the given configuration
    pub fn init_logging(
        config: LoggingConfig,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let env_filter = EnvFilter::builder()
            .with_default_directive(config.level.into())
            .from_env_lossy()
            .add_directive("gridstake=trace".parse()?);

        let registry = tracing_subscriber::registry().with(env_filter);

        match config.format {
            LogFormat::Human => {
                let fmt_layer = fmt::layer().with_target(true);
                registry.with(fmt_layer).init();
            }
            LogFormat::Json => {
                let fmt_layer = fmt::layer()
                    .json()
                    .with_target(true)
                    .with_span_events(fmt::format::FmtSpan::CLOSE);
                registry.with(fmt_layer).init();
            }
        }

        Ok(())
    }

    /// Initialize logging with environment-based configuration
    pub fn init_from_env() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let level = env::var("GRIDSTAKE_LOG_LEVEL")
            .unwrap_or_else(|_| "info".to_string())
            .parse::<Level>()
            .unwrap_or(Level::INFO);

        let format = match env::var("GRIDSTAKE_LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            _ => LogFormat::Human,
        };

        init_logging(LoggingConfig { level, format })
    }
}
