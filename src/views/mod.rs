//! The census views and the controllers behind them.
//!
//! Each view is a [`ViewController`] instantiated with its own schema, route
//! layout and record type. Views never share state.

pub mod catalog;
pub mod controller;
pub mod geral;
pub mod records;

use crate::error::Result;
use crate::fetch::Transport;
use crate::projector::JsonProjector;
use crate::query::{ParameterDescriptor, ParameterKind, ParameterSchema, RouteLayout, SelectorParams};

pub use catalog::{ESTADOS, Estado, INDICATORS, Indicator};
pub use controller::ViewController;
pub use records::{EscolaResumo, InfraestruturaEscola, MunicipioContagem};

/// Controller type for each paginated view
pub type CursoView<T> = ViewController<JsonProjector<EscolaResumo>, T>;
pub type FiltradaView<T> = ViewController<JsonProjector<EscolaResumo>, T>;
pub type CidadeView<T> = ViewController<JsonProjector<InfraestruturaEscola>, T>;
pub type EstadoView<T> = ViewController<JsonProjector<MunicipioContagem>, T>;

const INDICATOR_SELECTOR: SelectorParams = SelectorParams {
    name_param: "paran",
    value_param: "value",
};

pub const CURSO_LAYOUT: RouteLayout = RouteLayout::Segments {
    prefix: &["escolas", "curso"],
};

pub const FILTRADA_LAYOUT: RouteLayout = RouteLayout::Segments {
    prefix: &["escolas", "filter"],
};

pub const CIDADE_LAYOUT: RouteLayout = RouteLayout::Query {
    prefix: &["relatorios", "infraestrutura_das_escolas_por_municipio", ""],
    selector: Some(INDICATOR_SELECTOR),
};

pub const ESTADO_LAYOUT: RouteLayout = RouteLayout::Query {
    prefix: &["relatorios", "infraestrutura_das_escolas_por_estado", ""],
    selector: Some(INDICATOR_SELECTOR),
};

/// Which column a name search applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SearchField {
    #[default]
    Municipio,
    Escola,
}

impl SearchField {
    pub fn parameter(self) -> &'static str {
        match self {
            SearchField::Municipio => "no_municipio",
            SearchField::Escola => "no_entidade",
        }
    }
}

pub fn curso_schema() -> Result<ParameterSchema> {
    ParameterSchema::new(vec![ParameterDescriptor::required(
        "nome_curso",
        ParameterKind::Text,
        "Nome do Curso",
    )])
}

pub fn filtrada_schema() -> Result<ParameterSchema> {
    ParameterSchema::new(vec![
        ParameterDescriptor::choice("no_municipio", ParameterKind::Text, "Nome do Município"),
        ParameterDescriptor::choice("no_entidade", ParameterKind::Text, "Nome da Escola"),
    ])
}

fn indicator_schema(place: ParameterDescriptor) -> Result<ParameterSchema> {
    let mut descriptors = vec![place];
    descriptors.extend(
        INDICATORS
            .iter()
            .map(|i| ParameterDescriptor::choice(i.name, i.kind, i.label)),
    );
    ParameterSchema::new(descriptors)
}

pub fn cidade_schema() -> Result<ParameterSchema> {
    indicator_schema(ParameterDescriptor::required(
        "cidade",
        ParameterKind::Text,
        "Cidade",
    ))
}

pub fn estado_schema() -> Result<ParameterSchema> {
    indicator_schema(ParameterDescriptor::required("uf", ParameterKind::Text, "Estado"))
}

pub fn curso_view<T: Transport>(transport: T, page_size: u32) -> Result<CursoView<T>> {
    Ok(ViewController::new(
        curso_schema()?,
        CURSO_LAYOUT,
        JsonProjector::new("data"),
        transport,
        page_size,
    ))
}

pub fn filtrada_view<T: Transport>(transport: T, page_size: u32) -> Result<FiltradaView<T>> {
    Ok(ViewController::new(
        filtrada_schema()?,
        FILTRADA_LAYOUT,
        JsonProjector::new("data"),
        transport,
        page_size,
    ))
}

pub fn cidade_view<T: Transport>(transport: T, page_size: u32) -> Result<CidadeView<T>> {
    Ok(ViewController::new(
        cidade_schema()?,
        CIDADE_LAYOUT,
        JsonProjector::new("dados"),
        transport,
        page_size,
    ))
}

pub fn estado_view<T: Transport>(transport: T, page_size: u32) -> Result<EstadoView<T>> {
    Ok(ViewController::new(
        estado_schema()?,
        ESTADO_LAYOUT,
        JsonProjector::new("municipios"),
        transport,
        page_size,
    ))
}
