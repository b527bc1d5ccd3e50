use owo_colors::OwoColorize;

use crate::fetch::PageInfo;
use crate::projector::ResultSet;
use crate::views::geral::RelatorioGeral;

pub mod chart;
pub mod tables;

pub use chart::{format_percentage_chart, percentage_bar};
pub use tables::{Tabular, format_cell, render_pairs, render_table};

/// Section heading
pub fn format_heading(title: &str) -> String {
    format!("{}", title.cyan().bold())
}

/// "Página x / y" footer with navigation hints
pub fn format_page_footer(info: PageInfo, has_previous: bool, has_next: bool) -> String {
    let previous = if has_previous {
        "[p] anterior".to_string()
    } else {
        "[p] anterior".dimmed().to_string()
    };
    let next = if has_next {
        "[n] próxima".to_string()
    } else {
        "[n] próxima".dimmed().to_string()
    };

    format!(
        "{}   {}   {}",
        previous,
        format!("Página {} / {}", info.current_page, info.total_pages).bold(),
        next
    )
}

/// Render one page of a paginated view
///
/// The chart is drawn only when `chart` is set, which callers restrict to the
/// first page of a result that carries a statistic.
pub fn format_result_page<R: Tabular>(
    title: &str,
    results: &ResultSet<R>,
    chart: Option<f64>,
    info: PageInfo,
    has_previous: bool,
    has_next: bool,
) -> String {
    let mut output = format!("{}\n\n", format_heading(title));

    if results.rows.is_empty() {
        output.push_str(&format!("{}\n", "Nenhum resultado encontrado.".dimmed()));
        return output;
    }

    if let Some(share) = chart {
        output.push_str(&format_percentage_chart(share));
        output.push('\n');
    }

    output.push_str(&render_table(&results.rows));
    output.push_str("\n\n");
    output.push_str(&format_page_footer(info, has_previous, has_next));
    output
}

/// Render the nation-wide summary report
pub fn format_relatorio_geral(report: &RelatorioGeral) -> String {
    let mut output = format!(
        "{}\n\n",
        format_heading("Relatório Geral da Educação no Brasil")
    );

    let resumo = &report.resumo_geral;
    let summary = [
        ("Total de Escolas", resumo.total_escolas),
        ("Total de Infraestruturas", resumo.total_infraestruturas),
        ("Ofertas por Modalidade", resumo.total_ofertas_modalidade),
        ("Cursos Técnicos", resumo.total_cursos_tecnicos),
        ("Relações Escola-Curso", resumo.total_relacoes_escola_curso),
        ("Total de Matrículas", report.total_matriculas()),
    ]
    .into_iter()
    .map(|(label, value)| (label.to_string(), value.to_string()))
    .collect::<Vec<_>>();
    push_section(&mut output, "Resumo Geral", ("Indicador", "Total"), &summary);

    let por_uf = report
        .escolas_por_uf
        .iter()
        .map(|u| (u.uf.clone(), u.total_escolas.to_string()))
        .collect::<Vec<_>>();
    push_section(&mut output, "Total de Escolas por UF", ("UF", "Escolas"), &por_uf);

    let modalidades = report
        .matriculas_por_modalidade
        .iter()
        .map(|m| (m.modalidade_nome.clone(), m.total_matriculas.to_string()))
        .collect::<Vec<_>>();
    push_section(
        &mut output,
        "Matrículas por Modalidade",
        ("Modalidade", "Matrículas"),
        &modalidades,
    );

    let infra = &report.infraestrutura_percentuais;
    let percentuais = [
        ("Com Internet", infra.com_internet),
        ("Com Biblioteca", infra.com_biblioteca),
        ("Com Laboratório de Informática", infra.com_laboratorio_informatica),
    ]
    .into_iter()
    .map(|(label, pct)| (label.to_string(), format!("{pct}%")))
    .collect::<Vec<_>>();
    push_section(
        &mut output,
        "Infraestrutura Escolar",
        ("Recurso", "Percentual"),
        &percentuais,
    );

    let dependencias = report
        .escolas_por_dependencia
        .iter()
        .map(|d| (d.dependencia_nome.clone(), d.total_escolas.to_string()))
        .collect::<Vec<_>>();
    push_section(
        &mut output,
        "Escolas por Dependência Administrativa",
        ("Dependência", "Escolas"),
        &dependencias,
    );

    let localizacoes = report
        .escolas_por_localizacao
        .iter()
        .map(|l| (l.localizacao_nome.clone(), l.total_escolas.to_string()))
        .collect::<Vec<_>>();
    push_section(
        &mut output,
        "Escolas por Localização",
        ("Localização", "Escolas"),
        &localizacoes,
    );

    output.trim_end().to_string()
}

fn push_section(output: &mut String, title: &str, header: (&str, &str), pairs: &[(String, String)]) {
    if pairs.is_empty() {
        return;
    }
    output.push_str(&format!("{}\n", title.bold()));
    output.push_str(&render_pairs(header, pairs));
    output.push_str("\n\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::MunicipioContagem;
    use crate::views::geral::ResumoGeral;

    fn page(rows: Vec<MunicipioContagem>, statistic: Option<f64>) -> ResultSet<MunicipioContagem> {
        ResultSet { rows, statistic }
    }

    #[test]
    fn test_empty_page_message() {
        let output = format_result_page(
            "Relatório",
            &page(vec![], None),
            None,
            PageInfo::default(),
            false,
            false,
        );
        assert!(output.contains("Nenhum resultado encontrado"));
        assert!(!output.contains("Página"));
    }

    #[test]
    fn test_chart_only_when_requested() {
        let rows = vec![MunicipioContagem {
            municipio: "Olinda".to_string(),
            total_registros: 3,
        }];

        let with_chart = format_result_page(
            "Relatório",
            &page(rows.clone(), Some(0.25)),
            Some(0.25),
            PageInfo::default(),
            false,
            false,
        );
        assert!(with_chart.contains("25%"));

        let without_chart = format_result_page(
            "Relatório",
            &page(rows, Some(0.25)),
            None,
            PageInfo {
                current_page: 2,
                total_pages: 2,
            },
            true,
            false,
        );
        assert!(!without_chart.contains("Escolas que atendem"));
        assert!(without_chart.contains("Página 2 / 2"));
    }

    #[test]
    fn test_relatorio_geral_skips_empty_sections() {
        let report = RelatorioGeral {
            resumo_geral: ResumoGeral {
                total_escolas: 10,
                ..Default::default()
            },
            escolas_por_uf: vec![],
            matriculas_por_modalidade: vec![],
            infraestrutura_percentuais: Default::default(),
            escolas_por_dependencia: vec![],
            escolas_por_localizacao: vec![],
        };
        let output = format_relatorio_geral(&report);
        assert!(output.contains("Resumo Geral"));
        assert!(output.contains("Infraestrutura Escolar"));
        assert!(!output.contains("Total de Escolas por UF"));
    }
}
