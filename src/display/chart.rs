use owo_colors::OwoColorize;

const BAR_WIDTH: usize = 20;
const CHART_TITLE: &str = "Escolas que atendem ao filtro";

/// Plain-text percentage bar, e.g. `[█████░░░░░] 50%`
pub fn percentage_bar(share: f64, width: usize) -> String {
    let share = share.clamp(0.0, 1.0);
    let filled = ((share * width as f64).round() as usize).min(width);
    format!(
        "[{}{}] {:.0}%",
        "█".repeat(filled),
        "░".repeat(width - filled),
        share * 100.0
    )
}

/// Chart block shown above the first page of a report
pub fn format_percentage_chart(share: f64) -> String {
    let remainder = (1.0 - share.clamp(0.0, 1.0)) * 100.0;
    format!(
        "{}\n{}  {}\n",
        CHART_TITLE.bold(),
        percentage_bar(share, BAR_WIDTH).green(),
        format!("(demais: {remainder:.0}%)").dimmed()
    )
}
