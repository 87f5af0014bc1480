use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use kidash_panels::{LoaderConfig, Locator, PanelLoader, dangling_references, references};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "kidash-panels")]
#[command(about = "Kibana panel loader", long_about = None)]
struct Cli {
    /// Directory that filesystem panel names are resolved against.
    #[arg(long, global = true, env = "KIDASH_BASE_DIR", default_value = ".")]
    base_dir: PathBuf,

    /// Index that saved objects are addressed to.
    #[arg(long, global = true, env = "KIDASH_INDEX", default_value = ".kibana")]
    index: String,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a panel and write its enriched elements as JSON.
    Load {
        name: String,

        #[arg(short = 'o', long)]
        out: Option<PathBuf>,

        /// Single-line output instead of pretty-printed.
        #[arg(long)]
        compact: bool,
    },
    /// Print the references between the panel's saved objects.
    Deps { name: String },
    /// List the bundled panel definitions.
    List,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = LoaderConfig::default()
        .with_base_dir(cli.base_dir)
        .with_target_collection(cli.index);
    let loader = PanelLoader::new(config);

    match cli.cmd {
        Commands::Load { name, out, compact } => {
            let (loaded, elements) = loader
                .load(&name)
                .with_context(|| format!("load panel {}", name))?;

            let json = if compact {
                serde_json::to_string(&elements)?
            } else {
                serde_json::to_string_pretty(&elements)?
            };

            match out {
                Some(path) => {
                    std::fs::write(&path, json)
                        .with_context(|| format!("write {}", path.display()))?;
                    println!(
                        "Wrote {} elements of panel {} ({}) to {}",
                        elements.len(),
                        loaded.panel.id,
                        loaded.provenance,
                        path.display()
                    );
                }
                None => println!("{}", json),
            }
        }
        Commands::Deps { name } => {
            let (_, elements) = loader
                .load(&name)
                .with_context(|| format!("load panel {}", name))?;

            let dangling = dangling_references(&elements);
            for r in references(&elements) {
                let mark = if dangling.contains(&r) { "  (missing)" } else { "" };
                println!(
                    "{}:{} -> {}:{}{}",
                    r.source_type, r.source_id, r.target_type, r.target_id, mark
                );
            }
        }
        Commands::List => {
            for name in Locator::bundled_names() {
                println!("{}", name);
            }
        }
    }

    Ok(())
}
