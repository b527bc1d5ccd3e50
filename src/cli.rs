use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;

use crate::commands::PageOptions;
use crate::views::SearchField;
use crate::views::catalog::{self, INDICATORS};

#[derive(Parser)]
#[command(name = "censo")]
#[command(about = "Query the school census data service")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format shared by every command
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    pub json: bool,
}

/// Arguments shared by the paginated commands
#[derive(Args, Debug, Clone)]
pub struct PageArgs {
    /// Page to show (default: 1)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Browse pages interactively (n: next, p: previous, number: jump, q: quit)
    #[arg(short, long)]
    pub interactive: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl PageArgs {
    fn split(self) -> (PageOptions, OutputOptions) {
        (
            PageOptions {
                page: self.page,
                interactive: self.interactive,
            },
            OutputOptions { json: self.json },
        )
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List schools offering a course
    Curso {
        /// Course name (e.g. "Técnico em Informática")
        nome: String,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Search schools by city or by school name
    #[command(visible_alias = "busca")]
    Filtrada {
        /// Search term
        termo: String,

        /// Field the term applies to
        #[arg(long = "por", value_enum, default_value_t = SearchField::Municipio)]
        campo: SearchField,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Schools in a city matching an infrastructure indicator
    Cidade {
        /// City name
        cidade: String,

        /// Indicator name (see `censo parametros`)
        #[arg(long, value_parser = parse_indicator)]
        param: String,

        /// Indicator value: true/false for in_* indicators, a whole number for qt_*
        #[arg(long)]
        value: String,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Per-city counts in a state for an infrastructure indicator
    Estado {
        /// Two-letter state code (case-insensitive)
        #[arg(value_parser = parse_uf)]
        uf: String,

        /// Indicator name (see `censo parametros`)
        #[arg(long, value_parser = parse_indicator)]
        param: String,

        /// Indicator value: true/false for in_* indicators, a whole number for qt_*
        #[arg(long)]
        value: String,

        #[command(flatten)]
        page: PageArgs,
    },

    /// National summary report
    Geral {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the infrastructure indicators
    Parametros {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the state codes
    Estados {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for [possible values: bash, zsh, fish, powershell, elvish]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set a configuration value
    Set {
        /// Configuration key (api_url, timeout, page_size)
        key: String,
        /// Value to set
        value: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Get a configuration value
    Get {
        /// Configuration key (api_url, timeout, page_size)
        key: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print path to the config file
    Path {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    /// Execute the command, dispatching to the appropriate handler.
    pub async fn run(self) -> crate::error::Result<()> {
        use crate::commands::{
            cmd_cidade, cmd_config_get, cmd_config_path, cmd_config_set, cmd_config_show,
            cmd_curso, cmd_estado, cmd_estados, cmd_filtrada, cmd_geral, cmd_parametros,
        };

        match self {
            Commands::Curso { nome, page } => {
                let (options, output) = page.split();
                cmd_curso(&nome, options, output).await
            }
            Commands::Filtrada { termo, campo, page } => {
                let (options, output) = page.split();
                cmd_filtrada(campo, &termo, options, output).await
            }
            Commands::Cidade {
                cidade,
                param,
                value,
                page,
            } => {
                let (options, output) = page.split();
                cmd_cidade(&cidade, &param, &value, options, output).await
            }
            Commands::Estado {
                uf,
                param,
                value,
                page,
            } => {
                let (options, output) = page.split();
                cmd_estado(&uf, &param, &value, options, output).await
            }

            Commands::Geral { json } => cmd_geral(OutputOptions { json }).await,
            Commands::Parametros { json } => cmd_parametros(OutputOptions { json }),
            Commands::Estados { json } => cmd_estados(OutputOptions { json }),

            Commands::Config { action } => match action {
                ConfigAction::Show { json } => cmd_config_show(OutputOptions { json }),
                ConfigAction::Set { key, value, json } => {
                    cmd_config_set(&key, &value, OutputOptions { json })
                }
                ConfigAction::Get { key, json } => cmd_config_get(&key, OutputOptions { json }),
                ConfigAction::Path { json } => cmd_config_path(OutputOptions { json }),
            },

            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

fn parse_indicator(s: &str) -> Result<String, String> {
    match catalog::indicator(s) {
        Some(indicator) => Ok(indicator.name.to_string()),
        None => Err(format!(
            "Invalid parameter. Must be one of: {}",
            INDICATORS
                .iter()
                .map(|i| i.name)
                .collect::<Vec<_>>()
                .join(", ")
        )),
    }
}

fn parse_uf(s: &str) -> Result<String, String> {
    catalog::estado(s)
        .map(|e| e.sigla.to_string())
        .ok_or_else(|| format!("Invalid state '{s}'. Run `censo estados` for the valid codes"))
}

pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "censo", &mut io::stdout());
}
