//! Page session shared by the paginated commands.
//!
//! A session submits the view's query, optionally jumps to a start page, and
//! prints the result. In interactive mode it then reads navigation commands
//! from stdin until `q` or end of input.

use owo_colors::OwoColorize;
use serde::Serialize;
use serde_json::json;
use tokio::io::{AsyncBufReadExt, BufReader};

use super::CommandOutput;
use crate::cli::OutputOptions;
use crate::display::{Tabular, format_result_page};
use crate::error::{CensoError, Result};
use crate::fetch::{FetchState, Transport};
use crate::projector::ResultProjector;
use crate::views::ViewController;

/// How a paginated command walks its pages
#[derive(Debug, Clone, Copy)]
pub struct PageOptions {
    /// Page to show after the first fetch
    pub page: u32,
    /// Keep reading n/p/q commands after the first page
    pub interactive: bool,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            page: 1,
            interactive: false,
        }
    }
}

enum Navigation {
    Next,
    Previous,
    Jump(u32),
    Quit,
}

fn parse_navigation(input: &str) -> Option<Navigation> {
    match input {
        "n" | "next" => Some(Navigation::Next),
        "p" | "prev" => Some(Navigation::Previous),
        "q" | "quit" | "sair" => Some(Navigation::Quit),
        other => other.parse().ok().map(Navigation::Jump),
    }
}

pub(crate) async fn run_session<P, T>(
    view: &mut ViewController<P, T>,
    title: &str,
    options: PageOptions,
    output: OutputOptions,
) -> Result<()>
where
    P: ResultProjector,
    P::Record: Tabular + Serialize,
    T: Transport,
{
    view.submit().await?;

    if options.page > 1
        && view.fetch_state().success().is_some()
        && !view.jump_to(options.page).await
    {
        eprintln!(
            "{} page {} is outside 1-{}, showing page 1",
            "Warning:".yellow(),
            options.page,
            view.page_info().total_pages
        );
    }

    if !options.interactive {
        return print_page(view, title, output);
    }

    if let Err(e) = print_page(view, title, output) {
        eprintln!("{}", e.red());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        eprint!(
            "{} ",
            "[n] próxima  [p] anterior  [número] ir para  [q] sair >".dimmed()
        );
        let Some(line) = lines.next_line().await? else {
            break;
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let moved = match parse_navigation(input) {
            Some(Navigation::Quit) => break,
            Some(Navigation::Next) => view.next_page().await,
            Some(Navigation::Previous) => view.previous_page().await,
            Some(Navigation::Jump(page)) => view.jump_to(page).await,
            None => {
                eprintln!("unknown command '{input}'");
                continue;
            }
        };

        if !moved {
            eprintln!("{}", "Nenhuma página nessa direção.".yellow());
            continue;
        }
        if let Err(e) = print_page(view, title, output) {
            eprintln!("{}", e.red());
        }
    }

    Ok(())
}

fn print_page<P, T>(view: &ViewController<P, T>, title: &str, output: OutputOptions) -> Result<()>
where
    P: ResultProjector,
    P::Record: Tabular + Serialize,
    T: Transport,
{
    let page = match view.fetch_state() {
        FetchState::Success(page) => page,
        FetchState::Failed(message) => return Err(CensoError::FetchFailed(message.clone())),
        FetchState::Idle | FetchState::Loading => return Ok(()),
    };

    let info = view.page_info();
    let chart = view.chart_statistic();

    let json_output = json!({
        "page": info.current_page,
        "total_pages": info.total_pages,
        "has_next": view.has_next(),
        "has_previous": view.has_previous(),
        "statistic": chart,
        "rows": page.results.rows,
    });
    let text_output = format_result_page(
        title,
        &page.results,
        chart,
        info,
        view.has_previous(),
        view.has_next(),
    );

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(output)
}
