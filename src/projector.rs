//! Mapping raw service payloads into typed view rows.
//!
//! Every successful page is projected from scratch; rows from previous pages
//! are never merged in.

use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{CensoError, Result};

const TOTAL_PAGES_KEYS: &[&str] = &["total_pages", "total_paginas"];
const CURRENT_PAGE_KEYS: &[&str] = &["pagina_atual", "page"];
const STATISTIC_KEYS: &[&str] = &["porcentagem", "percentage"];

/// Rows of one page plus the optional percentage reported with them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultSet<R> {
    pub rows: Vec<R>,
    /// Share in `[0, 1]`. `None` means the service did not compute one,
    /// which is not the same as zero percent.
    pub statistic: Option<f64>,
}

impl<R> Default for ResultSet<R> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            statistic: None,
        }
    }
}

/// Pagination hints found in a payload
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PageBounds {
    pub current_page: Option<u32>,
    pub total_pages: Option<u32>,
}

/// A projected page ready to be stored as a fetch result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectedPage<R> {
    pub results: ResultSet<R>,
    pub bounds: PageBounds,
}

/// View-specific mapping from payload to rows
pub trait ResultProjector {
    type Record;

    fn project(&self, payload: &Value) -> Result<ResultSet<Self::Record>>;

    fn page_bounds(&self, payload: &Value) -> PageBounds {
        PageBounds {
            current_page: first_u32(payload, CURRENT_PAGE_KEYS),
            total_pages: first_u32(payload, TOTAL_PAGES_KEYS),
        }
    }

    fn project_page(&self, payload: &Value) -> Result<ProjectedPage<Self::Record>> {
        Ok(ProjectedPage {
            results: self.project(payload)?,
            bounds: self.page_bounds(payload),
        })
    }
}

/// Projector that deserializes the array stored under `rows_key`
#[derive(Debug)]
pub struct JsonProjector<R> {
    rows_key: &'static str,
    _record: PhantomData<fn() -> R>,
}

impl<R> Clone for JsonProjector<R> {
    fn clone(&self) -> Self {
        Self::new(self.rows_key)
    }
}

impl<R> JsonProjector<R> {
    pub fn new(rows_key: &'static str) -> Self {
        Self {
            rows_key,
            _record: PhantomData,
        }
    }
}

impl<R: DeserializeOwned> ResultProjector for JsonProjector<R> {
    type Record = R;

    fn project(&self, payload: &Value) -> Result<ResultSet<R>> {
        let rows = match payload.get(self.rows_key) {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    R::deserialize(item).map_err(|e| {
                        CensoError::MalformedResponse(format!("{}[{i}]: {e}", self.rows_key))
                    })
                })
                .collect::<Result<Vec<R>>>()?,
            Some(other) => {
                return Err(CensoError::MalformedResponse(format!(
                    "expected '{}' to be a list, found {}",
                    self.rows_key,
                    json_type(other)
                )));
            }
        };

        Ok(ResultSet {
            rows,
            statistic: extract_statistic(payload),
        })
    }
}

/// Read the percentage, treating anything outside `[0, 1]` as not computed
pub fn extract_statistic(payload: &Value) -> Option<f64> {
    let value = STATISTIC_KEYS
        .iter()
        .find_map(|key| payload.get(*key).and_then(Value::as_f64))?;
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Some(value)
    } else {
        tracing::warn!("ignoring out-of-range percentage {value}");
        None
    }
}

fn first_u32(payload: &Value, keys: &[&str]) -> Option<u32> {
    keys.iter()
        .find_map(|key| payload.get(*key).and_then(Value::as_u64))
        .map(|n| u32::try_from(n).unwrap_or(u32::MAX))
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
