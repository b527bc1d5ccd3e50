use super::page::{PageOptions, run_session};
use super::connect;
use crate::cli::OutputOptions;
use crate::error::Result;
use crate::views::{SearchField, curso_view, filtrada_view};

/// List schools offering a course
pub async fn cmd_curso(nome_curso: &str, options: PageOptions, output: OutputOptions) -> Result<()> {
    let (config, transport) = connect()?;
    let mut view = curso_view(transport, config.page_size)?;
    view.set_filter("nome_curso", nome_curso)?;

    let title = format!("Escolas com o curso \"{nome_curso}\"");
    run_session(&mut view, &title, options, output).await
}

/// Search schools by city or by school name
pub async fn cmd_filtrada(
    field: SearchField,
    termo: &str,
    options: PageOptions,
    output: OutputOptions,
) -> Result<()> {
    let (config, transport) = connect()?;
    let mut view = filtrada_view(transport, config.page_size)?;
    view.set_filter(field.parameter(), termo)?;

    let title = match field {
        SearchField::Municipio => format!("Escolas no município \"{termo}\""),
        SearchField::Escola => format!("Escolas com nome \"{termo}\""),
    };
    run_session(&mut view, &title, options, output).await
}
