//! CLI for the crux-ranks rank store.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use crux_ranks_core::config::{self, CruxRanksConfig};
use std::path::PathBuf;

use commands::{run_completions, run_import, run_path, run_show, run_url};

/// Top-level CLI for crux-ranks.
#[derive(Debug, Parser)]
#[command(name = "crux-ranks")]
#[command(about = "crux-ranks: sharded CrUX domain rank store and URL resolver", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the rank record URL of each domain.
    Url {
        /// Domains to resolve (hashed as given, no normalization).
        #[arg(required = true)]
        domains: Vec<String>,
        /// Override the configured base URL (only scheme and host are used).
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,
    },

    /// Print the SHA-1 and sharded record path of a domain.
    Path {
        domain: String,
    },

    /// Import a month of ranks from a JSON Lines file into the local store.
    Import {
        /// JSON Lines file with `host`, `global_rank`, `local_rank` per line.
        input: PathBuf,
        /// CrUX month of the data, e.g. 202409.
        #[arg(long, value_name = "YYYYMM")]
        yyyymm: u32,
        /// Import even if the store already holds this month or a later one.
        #[arg(long)]
        force: bool,
        /// Store root (defaults to config `data_dir`, then XDG data dir).
        #[arg(long, value_name = "DIR")]
        data_dir: Option<PathBuf>,
    },

    /// Show the stored rank record of a domain.
    Show {
        domain: String,
        /// Store root (defaults to config `data_dir`, then XDG data dir).
        #[arg(long, value_name = "DIR")]
        data_dir: Option<PathBuf>,
    },

    /// Print a shell completion script.
    Completions {
        shell: Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        cli.command.dispatch().await
    }

    pub async fn dispatch(self) -> Result<()> {
        // Config is only loaded by commands that read it, so a broken
        // config.toml does not block `path`, `completions` or `url --base-url`.
        match self {
            CliCommand::Url { domains, base_url } => {
                let base_url = match base_url {
                    Some(base_url) => base_url,
                    None => load_config()?.base_url,
                };
                run_url(&base_url, &domains).await?;
            }
            CliCommand::Path { domain } => run_path(&domain),
            CliCommand::Import {
                input,
                yyyymm,
                force,
                data_dir,
            } => {
                let cfg = with_data_dir(load_config()?, data_dir);
                run_import(&cfg, &input, yyyymm, force)?;
            }
            CliCommand::Show { domain, data_dir } => {
                let cfg = with_data_dir(load_config()?, data_dir);
                run_show(&cfg, &domain)?;
            }
            CliCommand::Completions { shell } => run_completions::<Cli>(shell),
        }

        Ok(())
    }
}

fn load_config() -> Result<CruxRanksConfig> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

/// `--data-dir` wins over the configured store root.
fn with_data_dir(mut cfg: CruxRanksConfig, data_dir: Option<PathBuf>) -> CruxRanksConfig {
    if data_dir.is_some() {
        cfg.data_dir = data_dir;
    }
    cfg
}

#[cfg(test)]
mod tests;
