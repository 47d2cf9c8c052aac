//! CLI command definitions, routing, and tracing setup.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use docdex_core::{IndexConfig, IndexResult, ProgressReporter};
use docdex_shared::{AppConfig, Category, init_config, load_config};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// docdex — cross-referenced markdown indexes for tutorial corpora.
#[derive(Parser)]
#[command(
    name = "docdex",
    version,
    about = "Generate cross-referenced markdown index pages from tutorial sections and a component catalog.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Scan the tutorial sections and write the index pages.
    Generate {
        /// Root directory containing the section directories.
        #[arg(long)]
        root: Option<String>,

        /// Section directory to scan (repeatable; overrides config).
        #[arg(long = "section")]
        sections: Vec<String>,

        /// Path to the component catalog JSON.
        #[arg(long)]
        catalog: Option<String>,

        /// Output directory (deleted and recreated on every run).
        #[arg(short, long)]
        out: Option<String>,
    },

    /// Parse the catalog and print per-category counts without writing.
    Check {
        /// Path to the component catalog JSON.
        #[arg(long)]
        catalog: Option<String>,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "docdex=info",
        1 => "docdex=debug",
        _ => "docdex=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt().with_env_filter(env_filter).with_target(false).init();
        }
        LogFormat::Json => {
            fmt().json().with_env_filter(env_filter).init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Generate {
            root,
            sections,
            catalog,
            out,
        } => {
            cmd_generate(
                root.as_deref(),
                &sections,
                catalog.as_deref(),
                out.as_deref(),
            )
            .await
        }
        Command::Check { catalog } => cmd_check(catalog.as_deref()).await,
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init().await,
            ConfigAction::Show => cmd_config_show().await,
        },
    }
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

/// Resolve a flag against the config defaults: flag wins, then config.
fn resolve_flag(flag: Option<&str>, config_value: &str) -> String {
    flag.map(String::from)
        .unwrap_or_else(|| config_value.to_string())
}

async fn cmd_generate(
    root: Option<&str>,
    sections: &[String],
    catalog: Option<&str>,
    out: Option<&str>,
) -> Result<()> {
    let config = load_config()?;

    let docs_root = PathBuf::from(resolve_flag(root, &config.defaults.docs_root));
    let section_dirs = if sections.is_empty() {
        config.defaults.section_dirs.clone()
    } else {
        sections.to_vec()
    };
    let catalog_file = docs_root.join(resolve_flag(catalog, &config.defaults.catalog_file));
    let output_dir = docs_root.join(resolve_flag(out, &config.defaults.output_dir));

    let index_config = IndexConfig {
        docs_root,
        section_dirs,
        catalog_file,
        output_dir,
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
    };

    info!(
        root = %index_config.docs_root.display(),
        sections = index_config.section_dirs.len(),
        "generating index"
    );

    let reporter = CliProgress::new();
    let result = docdex_core::run_index(&index_config, &reporter).await?;

    // Print summary
    println!();
    println!("  Index generated successfully!");
    println!("  Components: {}", result.component_count);
    println!("  Documents:  {}", result.document_count);
    println!("  References: {}", result.reference_count);
    println!("  Pages:      {}", result.page_count);
    println!("  Path:       {}", result.output_dir.display());
    println!("  Time:       {:.1}s", result.elapsed.as_secs_f64());
    println!();

    Ok(())
}

async fn cmd_check(catalog: Option<&str>) -> Result<()> {
    let config = load_config()?;
    let docs_root = PathBuf::from(&config.defaults.docs_root);
    let catalog_file = docs_root.join(resolve_flag(catalog, &config.defaults.catalog_file));

    let catalog = docdex_catalog::load_catalog(&catalog_file)?;

    let count = |cat: Category| catalog.iter().filter(|c| c.category == cat).count();
    let deprecated = catalog.iter().filter(|c| c.deprecated).count();

    println!();
    println!("  Catalog: {}", catalog_file.display());
    println!("  Components:        {}", catalog.len());
    println!("  Pipeable:          {}", count(Category::Pipeable));
    println!("  Creation:          {}", count(Category::Creation));
    println!("  Functions:         {}", count(Category::Function));
    println!("  Subjects:          {}", count(Category::Subject));
    println!("  Other classes:     {}", count(Category::OtherClass));
    println!("  Schedulers:        {}", count(Category::Scheduler));
    println!("  Observable consts: {}", count(Category::ObservableConst));
    println!("  Other consts:      {}", count(Category::OtherConst));
    println!("  Interfaces:        {}", count(Category::Interface));
    println!("  Deprecated:        {deprecated}");
    println!();

    Ok(())
}

async fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

async fn cmd_config_show() -> Result<()> {
    let config: AppConfig = load_config()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// CLI progress reporter using an indicatif spinner.
struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap()
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { spinner }
    }
}

impl ProgressReporter for CliProgress {
    fn phase(&self, name: &str) {
        self.spinner.set_message(name.to_string());
    }

    fn done(&self, _result: &IndexResult) {
        self.spinner.finish_and_clear();
    }
}
