use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `bsn` binary.
#[derive(Debug, Parser)]
#[command(name = "bsn", version, about = "Basin - farm irrigation monitoring toolbox")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Color mode for rendered output: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            color: self.color,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "bsn",
            "--format",
            "table",
            "--limit",
            "10",
            "--verbose",
            "overview",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Overview));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["bsn", "overview", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Overview));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["bsn", "--format", "xml", "overview"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn output_format_accepts_all_supported_values() {
        for value in ["json", "table", "raw"] {
            let cli = Cli::try_parse_from(["bsn", "--format", value, "overview"])
                .expect("cli should parse");
            assert!(matches!(cli.command, Commands::Overview));
        }
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli =
            Cli::try_parse_from(["bsn", "--limit", "3", "overview"]).expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.limit, Some(3));
    }

    #[test]
    fn field_note_parses_with_optional_notes() {
        let cli = Cli::try_parse_from([
            "bsn",
            "field",
            "note",
            "--zone",
            "Z3",
            "--condition",
            "dry",
        ])
        .expect("cli should parse");
        assert!(matches!(cli.command, Commands::Field { .. }));
    }

    #[test]
    fn report_submit_requires_all_fields() {
        let parsed = Cli::try_parse_from(["bsn", "report", "submit", "--zone", "A1"]);
        assert!(parsed.is_err());
    }
}
