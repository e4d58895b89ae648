use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use xcprompt_core::Settings;

mod cmd;
mod output;

/// xcprompt - Turn natural-language prompts into xcodebuild commands
#[derive(Parser)]
#[command(name = "xcprompt")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a YAML settings file
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan a full workflow from a prompt, with step descriptions
    Plan {
        /// Natural-language prompt, e.g. "build the release version"
        prompt: String,

        /// Directory to check for dependency manifests
        #[arg(long, default_value = ".")]
        dir: PathBuf,

        /// Feed each planned command through the (stubbed) runner
        #[arg(long)]
        run: bool,
    },

    /// Generate a starter Xcode project from an app description
    Generate {
        /// Natural-language app description, e.g. "a simple counter app"
        prompt: String,

        /// Directory to create the project in (default: settings output dir)
        #[arg(long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// UI framework: swiftui or uikit
        #[arg(long, default_value = "swiftui")]
        ui_framework: String,

        /// List the files without writing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Map a prompt to bare commands with the simple keyword matcher
    Quick {
        /// Natural-language prompt
        prompt: String,
    },

    /// Detect dependency managers and Xcode projects in a directory
    Deps {
        /// Directory to inspect
        #[arg(default_value = ".")]
        dir: PathBuf,
    },

    /// List default devices for a platform
    Devices {
        /// Platform name (ios, macos, watchos, tvos, visionos)
        platform: Option<String>,
    },

    /// Analyze build timings and suggest optimizations
    Analyze {
        /// Total build time in seconds
        #[arg(long)]
        total: f64,

        /// Compilation time in seconds
        #[arg(long)]
        compilation: f64,

        /// Linking time in seconds
        #[arg(long, default_value_t = 0.0)]
        linking: f64,

        /// Code-signing time in seconds
        #[arg(long, default_value_t = 0.0)]
        signing: f64,

        /// Parallelization efficiency in [0, 1]
        #[arg(long, default_value_t = 1.0)]
        efficiency: f64,

        /// Build type for the optimized-settings table
        #[arg(long, default_value = "debug")]
        build_type: String,
    },

    /// Lint a command string for common problems
    Validate {
        /// The command to check
        command: String,
    },

    /// Print signing flags for a team or identity/profile pair
    Signing {
        /// Team ID for automatic signing
        #[arg(long, conflicts_with_all = ["identity", "profile"])]
        team_id: Option<String>,

        /// Identity name for manual signing
        #[arg(long, requires = "profile")]
        identity: Option<String>,

        /// Provisioning profile name for manual signing
        #[arg(long, requires = "identity")]
        profile: Option<String>,
    },

    /// Render an ExportOptions.plist
    ExportOptions {
        /// Export method: app-store, ad-hoc, development, enterprise,
        /// validation
        #[arg(long, default_value = "development")]
        method: String,

        /// Team ID to embed
        #[arg(long)]
        team_id: Option<String>,
    },

    /// Compute, verify, or write a SHA-256 checksum for a file
    Checksum {
        /// File to hash
        file: PathBuf,

        /// Expected hex digest to verify against
        #[arg(long, conflicts_with = "check_file")]
        verify: Option<String>,

        /// A .sha256 file to verify against
        #[arg(long)]
        check_file: Option<PathBuf>,

        /// Write a .sha256 file next to the input
        #[arg(long, conflicts_with_all = ["verify", "check_file"])]
        write: bool,
    },

    /// Create a detached GPG signature for a file
    Sign {
        /// File to sign
        file: PathBuf,

        /// Signature output path (default: <file>.asc)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Key ID to sign with
        #[arg(long)]
        key_id: Option<String>,
    },

    /// Verify a detached GPG signature
    VerifySig {
        /// Signed file
        file: PathBuf,

        /// Detached signature (.asc or .sig)
        signature: PathBuf,

        /// Public key file to import first
        #[arg(long)]
        public_key: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .without_time()
        .init();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Plan { prompt, dir, run } => {
            cmd::cmd_plan(&prompt, &dir, &settings, run, cli.verbose)
        }
        Commands::Generate {
            prompt,
            output,
            ui_framework,
            dry_run,
        } => cmd::cmd_generate(
            &prompt,
            output.as_deref(),
            &ui_framework,
            dry_run,
            &settings,
            cli.verbose,
        ),
        Commands::Quick { prompt } => cmd::cmd_quick(&prompt),
        Commands::Deps { dir } => cmd::cmd_deps(&dir),
        Commands::Devices { platform } => cmd::cmd_devices(platform.as_deref()),
        Commands::Analyze {
            total,
            compilation,
            linking,
            signing,
            efficiency,
            build_type,
        } => cmd::cmd_analyze(total, compilation, linking, signing, efficiency, &build_type),
        Commands::Validate { command } => cmd::cmd_validate(&command),
        Commands::Signing {
            team_id,
            identity,
            profile,
        } => cmd::cmd_signing(team_id.as_deref(), identity.as_deref(), profile.as_deref()),
        Commands::ExportOptions { method, team_id } => {
            cmd::cmd_export_options(&method, team_id)
        }
        Commands::Checksum {
            file,
            verify,
            check_file,
            write,
        } => cmd::cmd_checksum(&file, verify.as_deref(), check_file.as_deref(), write),
        Commands::Sign {
            file,
            output,
            key_id,
        } => cmd::cmd_sign(&file, output.as_deref(), key_id.as_deref()),
        Commands::VerifySig {
            file,
            signature,
            public_key,
        } => cmd::cmd_verify_sig(&file, &signature, public_key.as_deref()),
    }
}
