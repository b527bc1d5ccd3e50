mod config;
mod page;
mod reference;
mod report;
mod search;

pub use config::{cmd_config_get, cmd_config_path, cmd_config_set, cmd_config_show};
pub use page::PageOptions;
pub use reference::{cmd_estados, cmd_parametros};
pub use report::{cmd_cidade, cmd_estado, cmd_geral};
pub use search::{cmd_curso, cmd_filtrada};

use serde_json::Value;

use crate::cli::OutputOptions;
use crate::config::Config;
use crate::error::Result;
use crate::fetch::HttpTransport;

/// Result of a command, printable as text or JSON
pub struct CommandOutput {
    json: Value,
    text: Option<String>,
}

impl CommandOutput {
    pub fn new(json: Value) -> Self {
        Self { json, text: None }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn print(self, output: OutputOptions) -> Result<()> {
        if output.json {
            println!("{}", serde_json::to_string_pretty(&self.json)?);
            return Ok(());
        }

        match self.text {
            Some(text) => println!("{text}"),
            None => println!("{}", serde_json::to_string_pretty(&self.json)?),
        }
        Ok(())
    }
}

/// Load the config and open a transport to the service it points at
pub(crate) fn connect() -> Result<(Config, HttpTransport)> {
    let config = Config::load()?;
    let transport = HttpTransport::from_config(&config)?;
    tracing::debug!("using census service at {}", config.api_url());
    Ok((config, transport))
}
