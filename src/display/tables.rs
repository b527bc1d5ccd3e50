//! Table rendering for view rows.

use serde_json::Value;
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::views::catalog::INDICATORS;
use crate::views::{Estado, EscolaResumo, Indicator, InfraestruturaEscola, MunicipioContagem};

/// A row that knows how to lay itself out as table cells
pub trait Tabular {
    fn headers() -> Vec<String>;
    fn cells(&self) -> Vec<String>;
}

/// Render rows with a header line using the modern box style
pub fn render_table<R: Tabular>(rows: &[R]) -> String {
    let mut builder = Builder::default();
    builder.push_record(R::headers());
    for row in rows {
        builder.push_record(row.cells());
    }

    let mut table = builder.build();
    table.with(Style::modern());
    table.to_string()
}

/// Render label/value pairs as a two-column table
pub fn render_pairs(header: (&str, &str), pairs: &[(String, String)]) -> String {
    let mut builder = Builder::default();
    builder.push_record([header.0.to_string(), header.1.to_string()]);
    for (label, value) in pairs {
        builder.push_record([label.clone(), value.clone()]);
    }

    let mut table = builder.build();
    table.with(Style::modern());
    table.to_string()
}

/// Format an infrastructure cell: booleans become marks, missing becomes `-`
pub fn format_cell(value: Option<&Value>) -> String {
    match value {
        Some(Value::Bool(true)) => "✅".to_string(),
        Some(Value::Bool(false)) => "❌".to_string(),
        Some(Value::Null) | None => "-".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

impl Tabular for EscolaResumo {
    fn headers() -> Vec<String> {
        ["Escola", "UF", "Município", "Matrículas"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.no_entidade.clone(),
            or_dash(self.sg_uf.as_deref()),
            or_dash(self.no_municipio.as_deref()),
            or_dash(self.qt_mat_bas),
        ]
    }
}

impl Tabular for InfraestruturaEscola {
    fn headers() -> Vec<String> {
        std::iter::once("Nome da Escola".to_string())
            .chain(INDICATORS.iter().map(|i| i.label.to_string()))
            .collect()
    }

    fn cells(&self) -> Vec<String> {
        std::iter::once(self.no_entidade.clone())
            .chain(INDICATORS.iter().map(|i| format_cell(self.campo(i.name))))
            .collect()
    }
}

impl Tabular for MunicipioContagem {
    fn headers() -> Vec<String> {
        vec!["Município".to_string(), "Total de Escolas".to_string()]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.municipio.clone(), self.total_registros.to_string()]
    }
}

impl Tabular for Indicator {
    fn headers() -> Vec<String> {
        vec!["Parâmetro".to_string(), "Tipo".to_string(), "Descrição".to_string()]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.name.to_string(), self.kind.to_string(), self.label.to_string()]
    }
}

impl Tabular for Estado {
    fn headers() -> Vec<String> {
        vec!["UF".to_string(), "Estado".to_string()]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.sigla.to_string(), self.nome.to_string()]
    }
}
