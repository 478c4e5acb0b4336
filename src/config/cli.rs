use clap::Parser;

/// Command-line switches. The run itself is configured through
/// `GRADLE_PATH` and `GITHUB_REPOSITORY`.
#[derive(Debug, Clone, Parser)]
#[command(name = "plugin-catalog")]
#[command(about = "Extract Gradle plugin declarations as catalog entities (JSON on stdout)")]
pub struct CliArgs {
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Write diagnostics as JSON lines on stderr")]
    pub json_logs: bool,
}
