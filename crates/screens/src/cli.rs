use clap::{ArgAction, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "jira-screens",
    version,
    about = "Show how Jira create and edit screens render"
)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'o', value_enum, global = true, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// When to colorize output
    #[arg(long, value_enum, global = true, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a TOML config file
    #[arg(long, env = "JIRA_SCREENS_CONFIG", global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Jira site URL (overrides config file)
    #[arg(long, env = "JIRA_URL", global = true)]
    pub url: Option<String>,

    /// Account email (overrides config file)
    #[arg(long, env = "JIRA_EMAIL", global = true)]
    pub email: Option<String>,

    /// API token (overrides config file)
    #[arg(long, env = "JIRA_TOKEN", global = true, hide_env_values = true)]
    pub token: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(long, short = 'v', action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(ValueEnum, Clone, Debug, Copy, Default)]
pub enum ColorChoice {
    /// Colorize output if stdout is a terminal
    #[default]
    Auto,
    /// Always colorize output
    Always,
    /// Never colorize output
    Never,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the create screens of every issue type in a project
    #[command(visible_alias = "c")]
    Create {
        /// Project key (e.g., PROJ)
        project: String,
        /// Only show this issue type (name or ID)
        #[arg(long, short = 't')]
        issue_type: Option<String>,
    },
    /// Render the edit screen of an existing issue
    #[command(visible_alias = "e")]
    Edit {
        /// Issue key (e.g., PROJ-123)
        issue: String,
    },
    /// Show the epic fields and issue link types of the site
    Site,
    /// Classify a field schema without contacting Jira
    Classify {
        /// Built-in field identifier (e.g., "duedate")
        #[arg(long, conflicts_with = "custom", required_unless_present = "custom")]
        system: Option<String>,
        /// Custom field type (e.g., "com.atlassian.jira.plugin.system.customfieldtypes:select")
        #[arg(long)]
        custom: Option<String>,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Generate shell completions and write to stdout
    pub fn generate_completions(shell: Shell) {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "jira-screens", &mut std::io::stdout());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags_for_create() {
        let cli = Cli::parse_from([
            "jira-screens",
            "--format",
            "json",
            "--url",
            "https://example.atlassian.net",
            "--email",
            "me@example.com",
            "-vv",
            "create",
            "PROJ",
            "--issue-type",
            "Bug",
        ]);

        assert!(matches!(cli.format, OutputFormat::Json));
        assert_eq!(cli.url.as_deref(), Some("https://example.atlassian.net"));
        assert_eq!(cli.email.as_deref(), Some("me@example.com"));
        assert_eq!(cli.verbose, 2);

        match cli.command {
            Commands::Create {
                project,
                issue_type,
            } => {
                assert_eq!(project, "PROJ");
                assert_eq!(issue_type.as_deref(), Some("Bug"));
            }
            _ => panic!("expected create command"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["jira-screens", "edit", "PROJ-1", "-o", "json"]);
        assert!(matches!(cli.format, OutputFormat::Json));
        assert!(matches!(cli.command, Commands::Edit { ref issue } if issue == "PROJ-1"));
    }

    #[test]
    fn classify_needs_exactly_one_identifier() {
        assert!(Cli::try_parse_from(["jira-screens", "classify"]).is_err());
        assert!(Cli::try_parse_from([
            "jira-screens",
            "classify",
            "--system",
            "duedate",
            "--custom",
            "x"
        ])
        .is_err());
        assert!(Cli::try_parse_from(["jira-screens", "classify", "--custom", "x"]).is_ok());
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
