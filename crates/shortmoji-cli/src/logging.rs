use stderrlog::Timestamp;

/// Logging setup arg group.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence log messages.
    #[clap(short, long, global = true)]
    pub quiet: bool,

    /// Turn debugging information on (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Enable timestamped logging.
    #[clap(long, global = true)]
    pub ts: bool,
}

impl LogArgs {
    /// The stderrlog verbosity; `default` applies when no `-v` was given.
    fn verbosity(
        &self,
        default: u8,
    ) -> stderrlog::LogLevelNum {
        let level = if self.verbose > 0 {
            self.verbose.saturating_add(1)
        } else {
            default
        };

        match level {
            0 => stderrlog::LogLevelNum::Off,
            1 => stderrlog::LogLevelNum::Error,
            2 => stderrlog::LogLevelNum::Warn,
            3 => stderrlog::LogLevelNum::Info,
            4 => stderrlog::LogLevelNum::Debug,
            _ => stderrlog::LogLevelNum::Trace,
        }
    }

    /// Install the stderr logger.
    pub fn setup_logging(
        &self,
        default: u8,
    ) -> Result<(), Box<dyn std::error::Error>> {
        stderrlog::new()
            .modules(["shortmoji", "shortmoji_cli"])
            .quiet(self.quiet)
            .verbosity(self.verbosity(default))
            .timestamp(if self.ts {
                Timestamp::Second
            } else {
                Timestamp::Off
            })
            .init()?;

        Ok(())
    }
}
