use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use cost_core::LookupPolicy;

/// Top-level CLI parser for the `equicost` binary.
#[derive(Debug, Parser)]
#[command(name = "equicost", version, about = "Equicost - process equipment purchased-cost estimates")]
pub struct Cli {
    /// Omit to start the interactive menu
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format for results: text or json
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Reject material, tray, drive and exchanger keys that are not in a factor table
    #[arg(long, global = true)]
    pub strict: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    pub fn lookup_policy(&self) -> LookupPolicy {
        if self.strict {
            LookupPolicy::Strict
        } else {
            LookupPolicy::Permissive
        }
    }
}

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Price an equipment item or a whole estimate from JSON
    Eval {
        /// JSON file, or `-` for stdin
        path: PathBuf,
    },
    /// Print every factor table
    Tables,
    /// Print the correlation reference as Markdown
    Equations,
}

/// Output mode for results.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::*;

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_interactive() {
        let cli = Cli::try_parse_from(["equicost"]).expect("cli should parse");
        assert!(cli.command.is_none());
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.lookup_policy(), LookupPolicy::Permissive);
    }

    #[test]
    fn eval_with_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["equicost", "eval", "plant.json", "--format", "json", "--strict"])
            .expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.lookup_policy(), LookupPolicy::Strict);
        assert!(matches!(cli.command, Some(Commands::Eval { ref path }) if path.to_str() == Some("plant.json")));
    }

    #[test]
    fn eval_accepts_stdin_dash() {
        let cli = Cli::try_parse_from(["equicost", "eval", "-"]).expect("cli should parse");
        assert!(matches!(cli.command, Some(Commands::Eval { ref path }) if path.to_str() == Some("-")));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        assert!(Cli::try_parse_from(["equicost", "--quiet", "--verbose", "tables"]).is_err());
    }

    #[test]
    fn format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["equicost", "--format", "xml", "tables"]).is_err());
    }
}
