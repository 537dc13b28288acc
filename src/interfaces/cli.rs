use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "st")]
#[command(about = "Translate text with automatic, confidence-gated language detection.")]
#[command(version)]
pub struct Cli {
    /// Target language code (defaults to `default_target` in the config)
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// Source language code, used for history and offline cache keys
    #[arg(short = 'f', long = "from", default_value = "auto")]
    pub from: String,

    /// Answer from the offline cache only
    #[arg(long)]
    pub offline: bool,

    /// Don't record the result in history or the offline cache
    #[arg(short = 'n', long)]
    pub nocache: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Choose color theme
    #[arg(short = 'T', long)]
    pub theme: Option<String>,

    /// Run the HTTP endpoint
    #[arg(long)]
    pub serve: bool,

    /// Address to bind when serving (overrides the config)
    #[arg(long, requires = "serve")]
    pub bind: Option<String>,

    /// Show translation history
    #[arg(long)]
    pub history: bool,

    /// Clear translation history
    #[arg(long)]
    pub clear_history: bool,

    /// Generate config sample
    #[arg(long)]
    pub generate_config: bool,

    /// Edit configuration file
    #[arg(long)]
    pub edit_config: bool,

    /// Show status
    #[arg(long)]
    pub status: bool,

    /// Text to translate (may contain HTML)
    #[arg(num_args = 1..)]
    pub text: Vec<String>,
}
