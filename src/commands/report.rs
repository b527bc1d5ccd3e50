//! Infrastructure reports by city and by state, plus the national summary.

use super::page::{PageOptions, run_session};
use super::{CommandOutput, connect};
use crate::cli::OutputOptions;
use crate::display::format_relatorio_geral;
use crate::error::{CensoError, Result};
use crate::fetch::FetchState;
use crate::views::catalog::{estado, label_for};
use crate::views::geral::fetch_relatorio_geral;
use crate::views::{cidade_view, estado_view};

/// Schools in a city matching one infrastructure indicator
pub async fn cmd_cidade(
    cidade: &str,
    param: &str,
    value: &str,
    options: PageOptions,
    output: OutputOptions,
) -> Result<()> {
    let (config, transport) = connect()?;
    let mut view = cidade_view(transport, config.page_size)?;
    view.set_filter("cidade", cidade)?;
    view.set_filter(param, value)?;

    let title = format!("Escolas de {cidade}: {} = {value}", label_for(param));
    run_session(&mut view, &title, options, output).await
}

/// Per-city counts in a state for one infrastructure indicator
pub async fn cmd_estado(
    uf: &str,
    param: &str,
    value: &str,
    options: PageOptions,
    output: OutputOptions,
) -> Result<()> {
    let estado = estado(uf).ok_or_else(|| CensoError::InvalidValue {
        name: "uf".to_string(),
        value: uf.to_string(),
        expected: "a two-letter state code",
    })?;

    let (config, transport) = connect()?;
    let mut view = estado_view(transport, config.page_size)?;
    view.set_filter("uf", estado.sigla)?;
    view.set_filter(param, value)?;

    let title = format!("Municípios de {}: {} = {value}", estado.nome, label_for(param));
    run_session(&mut view, &title, options, output).await
}

pub async fn cmd_geral(output: OutputOptions) -> Result<()> {
    let (_, transport) = connect()?;

    match fetch_relatorio_geral(&transport).await {
        FetchState::Success(report) => CommandOutput::new(serde_json::to_value(&report)?)
            .with_text(format_relatorio_geral(&report))
            .print(output),
        FetchState::Failed(message) => Err(CensoError::FetchFailed(message)),
        FetchState::Idle | FetchState::Loading => Ok(()),
    }
}
