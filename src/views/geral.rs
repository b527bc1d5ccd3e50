//! Nation-wide summary report. Not paginated: one request, one typed payload.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CensoError, Result};
use crate::fetch::{FetchController, FetchState, Transport};
use crate::query::Request;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatorioGeral {
    pub resumo_geral: ResumoGeral,
    #[serde(default)]
    pub escolas_por_uf: Vec<EscolasPorUf>,
    #[serde(default)]
    pub matriculas_por_modalidade: Vec<MatriculasPorModalidade>,
    #[serde(default)]
    pub infraestrutura_percentuais: InfraestruturaPercentuais,
    #[serde(default)]
    pub escolas_por_dependencia: Vec<EscolasPorDependencia>,
    #[serde(default)]
    pub escolas_por_localizacao: Vec<EscolasPorLocalizacao>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumoGeral {
    pub total_escolas: u64,
    pub total_infraestruturas: u64,
    pub total_ofertas_modalidade: u64,
    pub total_cursos_tecnicos: u64,
    pub total_relacoes_escola_curso: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscolasPorUf {
    pub uf: String,
    pub total_escolas: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatriculasPorModalidade {
    #[serde(default)]
    pub modalidade: Value,
    pub modalidade_nome: String,
    pub total_matriculas: u64,
}

/// Shares in percent (0 to 100), as sent by the service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InfraestruturaPercentuais {
    pub com_internet: f64,
    pub com_biblioteca: f64,
    pub com_laboratorio_informatica: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EscolasPorDependencia {
    #[serde(default)]
    pub tipo_dependencia: Value,
    pub dependencia_nome: String,
    pub total_escolas: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EscolasPorLocalizacao {
    #[serde(default)]
    pub tipo_localizacao: Value,
    pub localizacao_nome: String,
    pub total_escolas: u64,
}

impl RelatorioGeral {
    pub fn request() -> Request {
        Request::get(&["relatorios", "geral"])
    }

    pub fn from_payload(payload: Value) -> Result<Self> {
        serde_json::from_value(payload)
            .map_err(|e| CensoError::MalformedResponse(format!("relatório geral: {e}")))
    }

    pub fn total_matriculas(&self) -> u64 {
        self.matriculas_por_modalidade
            .iter()
            .map(|m| m.total_matriculas)
            .sum()
    }
}

/// Fetch the summary report through its own controller
pub async fn fetch_relatorio_geral<T: Transport>(transport: &T) -> FetchState<RelatorioGeral> {
    let mut fetch = FetchController::new();
    fetch
        .execute(transport, &RelatorioGeral::request(), RelatorioGeral::from_payload)
        .await;
    fetch.state().clone()
}
