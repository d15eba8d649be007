use clap::{CommandFactory, Parser, Subcommand};

mod commands;
mod config;
mod context;
mod format;

/// hubtag - Docker Hub tag resolver
///
/// A CLI tool for querying the Docker Hub tag-listing API, resolving which
/// tags share the `latest` digest, and reshaping saved tag data.
#[derive(Parser, Debug)]
#[command(name = "hubtag")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Verbose output (can be repeated: -v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Control colored output: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    color: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve which tags currently share the `latest` digest
    Resolve {
        /// Repository, e.g. "telegraf" or "acme/app"
        repository: String,
        /// Number of tag records to request
        #[arg(short, long)]
        page_size: Option<u32>,
        /// Output format: pretty, json, yaml
        #[arg(short, long, default_value = "pretty")]
        format: String,
        /// Send a fixed User-Agent header
        #[arg(long, conflicts_with = "spoof")]
        user_agent: Option<String>,
        /// Send a random browser User-Agent header
        #[arg(long)]
        spoof: bool,
    },
    /// List tag records for a repository
    Tags {
        /// Repository, e.g. "telegraf" or "acme/app"
        repository: String,
        /// Number of tag records to request
        #[arg(short, long)]
        page_size: Option<u32>,
        /// Output format: pretty, json, yaml
        #[arg(short, long, default_value = "pretty")]
        format: String,
        /// Show only tag names
        #[arg(short, long)]
        quiet: bool,
        /// Only show tags whose digest equals this value
        #[arg(long)]
        digest: Option<String>,
    },
    /// Render a saved {"tags": [...]} file as comma-separated base:tag pairs
    Csv {
        /// Path to the JSON tag file
        file: std::path::PathBuf,
        /// Base image name, e.g. "acme/telegraf"
        base_name: String,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Display version information
    Version,
    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Write a default config file if none exists
    Init,
    /// Print the whole config, or a single dotted key
    Get {
        /// Configuration key to get (e.g. hub.page_size)
        key: Option<String>,
        /// Output format: pretty, json, yaml
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },
    /// Set a configuration value
    Set {
        /// Configuration key to set (e.g. hub.page_size)
        key: String,
        /// Value to set
        value: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Build context with precedence: defaults > config file > env vars > CLI flags
    let ctx = context::AppContext::build(
        format::ColorChoice::from(cli.color.as_str()),
        context::VerbosityLevel::from_count(cli.verbose),
    );

    match cli.command {
        Commands::Resolve {
            repository,
            page_size,
            format: fmt,
            user_agent,
            spoof,
        } => {
            let fmt = format::OutputFormat::from(fmt.as_str());
            commands::resolve::handle_resolve(
                &ctx,
                &repository,
                page_size,
                fmt,
                user_agent.as_deref(),
                spoof,
            )
            .await;
        }
        Commands::Tags {
            repository,
            page_size,
            format: fmt,
            quiet,
            digest,
        } => {
            let fmt = format::OutputFormat::from(fmt.as_str());
            commands::tags::handle_tags(&ctx, &repository, page_size, fmt, quiet, digest.as_deref())
                .await;
        }
        Commands::Csv { file, base_name } => {
            commands::csv::handle_csv(&ctx, &file, &base_name);
        }
        Commands::Config { command } => match command {
            ConfigCommands::Init => commands::config::handle_init(&ctx),
            ConfigCommands::Get { key, format: fmt } => {
                let fmt = format::OutputFormat::from(fmt.as_str());
                commands::config::handle_get(&ctx, key.as_deref(), fmt);
            }
            ConfigCommands::Set { key, value } => {
                commands::config::handle_set(&ctx, &key, &value);
            }
        },
        Commands::Version => {
            commands::version::print_version();
        }
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let bin_name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
        }
    }
}
