//! Static reference listings. These never touch the network.

use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use crate::cli::OutputOptions;
use crate::display::render_table;
use crate::error::Result;
use crate::views::{ESTADOS, INDICATORS};

/// List the infrastructure indicators accepted by `cidade` and `estado`
pub fn cmd_parametros(output: OutputOptions) -> Result<()> {
    let text = format!(
        "{}\n\n{}",
        "Parâmetros de infraestrutura".cyan().bold(),
        render_table(INDICATORS)
    );

    CommandOutput::new(json!(INDICATORS))
        .with_text(text)
        .print(output)
}

pub fn cmd_estados(output: OutputOptions) -> Result<()> {
    let text = format!("{}\n\n{}", "Estados".cyan().bold(), render_table(ESTADOS));

    CommandOutput::new(json!(ESTADOS)).with_text(text).print(output)
}
