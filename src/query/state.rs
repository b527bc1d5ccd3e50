//! Pending filter edits and the frozen snapshot they produce on submit.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use super::schema::{ParameterSchema, ParameterValue, Presence};
use crate::error::{CensoError, Result};

/// Frozen, validated query used to build exactly one request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuerySnapshot {
    filters: HashMap<String, ParameterValue>,
    page: u32,
    page_size: u32,
}

impl QuerySnapshot {
    pub fn filter(&self, name: &str) -> Option<&ParameterValue> {
        self.filters.get(name)
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }
}

/// Filter values being edited by the user plus the last submitted snapshot
#[derive(Debug, Clone)]
pub struct QueryState {
    schema: Arc<ParameterSchema>,
    pending: HashMap<String, String>,
    active: Option<QuerySnapshot>,
    page_size: u32,
}

impl QueryState {
    pub fn new(schema: Arc<ParameterSchema>, page_size: u32) -> Self {
        Self {
            schema,
            pending: HashMap::new(),
            active: None,
            page_size: page_size.max(1),
        }
    }

    /// Update a pending value. The active snapshot is not affected.
    ///
    /// Setting a member of a choice group deselects the other members, the
    /// way a radio button does.
    pub fn set_filter(&mut self, name: &str, raw: impl Into<String>) -> Result<()> {
        let descriptor = self.schema.describe(name)?;
        if descriptor.presence == Presence::Choice {
            let others: Vec<String> = self
                .schema
                .choices()
                .filter(|d| d.name != name)
                .map(|d| d.name.clone())
                .collect();
            for other in others {
                self.pending.remove(&other);
            }
        }
        self.pending.insert(name.to_string(), raw.into());
        Ok(())
    }

    pub fn pending(&self, name: &str) -> Option<&str> {
        self.pending.get(name).map(String::as_str)
    }

    /// Validate and freeze the pending values into a new page-1 snapshot.
    ///
    /// On any error the previously active snapshot is left in place.
    pub fn submit(&mut self) -> Result<QuerySnapshot> {
        let missing = self.missing_filters();
        if !missing.is_empty() {
            return Err(CensoError::IncompleteQuery(missing.join(", ")));
        }

        let mut filters = HashMap::new();
        for descriptor in self.schema.descriptors() {
            let Some(raw) = self.pending.get(&descriptor.name) else {
                continue;
            };
            if raw.trim().is_empty() {
                continue;
            }
            let value = self.schema.coerce(&descriptor.name, raw)?;
            filters.insert(descriptor.name.clone(), value);
        }

        let snapshot = QuerySnapshot {
            filters,
            page: 1,
            page_size: self.page_size,
        };
        self.active = Some(snapshot.clone());
        Ok(snapshot)
    }

    /// Copy of the active snapshot pointed at another page
    pub fn with_page(&self, page: u32) -> Option<QuerySnapshot> {
        self.active.as_ref().map(|active| QuerySnapshot {
            page: page.max(1),
            ..active.clone()
        })
    }

    pub fn active(&self) -> Option<&QuerySnapshot> {
        self.active.as_ref()
    }

    fn is_filled(&self, name: &str) -> bool {
        self.pending.get(name).is_some_and(|v| !v.trim().is_empty())
    }

    fn missing_filters(&self) -> Vec<String> {
        let mut missing: Vec<String> = self
            .schema
            .descriptors()
            .filter(|d| d.presence == Presence::Required && !self.is_filled(&d.name))
            .map(|d| d.name.clone())
            .collect();

        if self.schema.has_choices() && !self.schema.choices().any(|d| self.is_filled(&d.name)) {
            let names: Vec<&str> = self.schema.choices().map(|d| d.name.as_str()).collect();
            missing.push(format!("one of {}", names.join("|")));
        }

        missing
    }
}
