//! Row shapes returned by the census service.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// School summary returned by the course and name/city searches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EscolaResumo {
    #[serde(default)]
    pub co_entidade: Option<i64>,
    pub no_entidade: String,
    #[serde(default)]
    pub sg_uf: Option<String>,
    #[serde(default)]
    pub no_municipio: Option<String>,
    /// Basic-education enrollment count
    #[serde(default)]
    pub qt_mat_bas: Option<i64>,
}

/// A school with its infrastructure columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfraestruturaEscola {
    pub no_entidade: String,
    #[serde(flatten)]
    pub campos: BTreeMap<String, Value>,
}

impl InfraestruturaEscola {
    pub fn campo(&self, name: &str) -> Option<&Value> {
        self.campos.get(name)
    }
}

/// Per-city count of schools matching an infrastructure filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MunicipioContagem {
    pub municipio: String,
    pub total_registros: u64,
}
