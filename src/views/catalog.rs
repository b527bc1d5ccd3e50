//! Static reference tables shared by the census views.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::query::ParameterKind;

/// An infrastructure indicator that can be used as a report filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Indicator {
    pub name: &'static str,
    pub kind: ParameterKind,
    pub label: &'static str,
}

pub const INDICATORS: &[Indicator] = &[
    Indicator {
        name: "in_internet",
        kind: ParameterKind::Boolean,
        label: "Possui Internet",
    },
    Indicator {
        name: "in_biblioteca",
        kind: ParameterKind::Boolean,
        label: "Possui Biblioteca",
    },
    Indicator {
        name: "in_laboratorio_informatica",
        kind: ParameterKind::Boolean,
        label: "Possui Lab. de Informática",
    },
    Indicator {
        name: "in_laboratorio_ciencias",
        kind: ParameterKind::Boolean,
        label: "Possui Lab. de Ciências",
    },
    Indicator {
        name: "in_quadra_esportes",
        kind: ParameterKind::Boolean,
        label: "Possui Quadra de Esportes",
    },
    Indicator {
        name: "in_acessibilidade_rampas",
        kind: ParameterKind::Boolean,
        label: "Possui Acessibilidade (Rampas)",
    },
    Indicator {
        name: "qt_desktop_aluno",
        kind: ParameterKind::Integer,
        label: "Qtd. Desktops por Aluno",
    },
    Indicator {
        name: "qt_salas_utilizadas",
        kind: ParameterKind::Integer,
        label: "Qtd. Salas Utilizadas",
    },
];

/// Brazilian federative unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Estado {
    pub sigla: &'static str,
    pub nome: &'static str,
}

pub const ESTADOS: &[Estado] = &[
    Estado { sigla: "AC", nome: "Acre" },
    Estado { sigla: "AL", nome: "Alagoas" },
    Estado { sigla: "AP", nome: "Amapá" },
    Estado { sigla: "AM", nome: "Amazonas" },
    Estado { sigla: "BA", nome: "Bahia" },
    Estado { sigla: "CE", nome: "Ceará" },
    Estado { sigla: "DF", nome: "Distrito Federal" },
    Estado { sigla: "ES", nome: "Espírito Santo" },
    Estado { sigla: "GO", nome: "Goiás" },
    Estado { sigla: "MA", nome: "Maranhão" },
    Estado { sigla: "MT", nome: "Mato Grosso" },
    Estado { sigla: "MS", nome: "Mato Grosso do Sul" },
    Estado { sigla: "MG", nome: "Minas Gerais" },
    Estado { sigla: "PA", nome: "Pará" },
    Estado { sigla: "PB", nome: "Paraíba" },
    Estado { sigla: "PR", nome: "Paraná" },
    Estado { sigla: "PE", nome: "Pernambuco" },
    Estado { sigla: "PI", nome: "Piauí" },
    Estado { sigla: "RJ", nome: "Rio de Janeiro" },
    Estado { sigla: "RN", nome: "Rio Grande do Norte" },
    Estado { sigla: "RS", nome: "Rio Grande do Sul" },
    Estado { sigla: "RO", nome: "Rondônia" },
    Estado { sigla: "RR", nome: "Roraima" },
    Estado { sigla: "SC", nome: "Santa Catarina" },
    Estado { sigla: "SP", nome: "São Paulo" },
    Estado { sigla: "SE", nome: "Sergipe" },
    Estado { sigla: "TO", nome: "Tocantins" },
];

static ESTADOS_POR_SIGLA: Lazy<HashMap<&'static str, &'static Estado>> =
    Lazy::new(|| ESTADOS.iter().map(|e| (e.sigla, e)).collect());

static INDICATORS_BY_NAME: Lazy<HashMap<&'static str, &'static Indicator>> =
    Lazy::new(|| INDICATORS.iter().map(|i| (i.name, i)).collect());

/// Look up a state by its two-letter code (case-insensitive)
pub fn estado(sigla: &str) -> Option<&'static Estado> {
    ESTADOS_POR_SIGLA
        .get(sigla.trim().to_ascii_uppercase().as_str())
        .copied()
}

pub fn indicator(name: &str) -> Option<&'static Indicator> {
    INDICATORS_BY_NAME.get(name).copied()
}

/// Column label for a record field, falling back to the raw name
pub fn label_for(name: &str) -> &str {
    indicator(name).map(|i| i.label).unwrap_or(name)
}
