//! Pure mapping from a [`QuerySnapshot`] to a request descriptor.

use std::sync::Arc;

use serde::Serialize;

use super::schema::{ParameterSchema, Presence};
use super::state::QuerySnapshot;

/// Query parameters that carry the selected choice filter as a name/value pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorParams {
    pub name_param: &'static str,
    pub value_param: &'static str,
}

/// How a view lays out its request on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteLayout {
    /// `<prefix>/<values...>/<page>/<page_size>`
    Segments { prefix: &'static [&'static str] },
    /// `<prefix>?name=value&...&page=<page>&limit=<page_size>`
    Query {
        prefix: &'static [&'static str],
        selector: Option<SelectorParams>,
    },
}

/// Transport-independent request descriptor
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Request {
    /// Unencoded path segments relative to the service base URL
    pub segments: Vec<String>,
    pub query: Vec<(String, String)>,
}

impl Request {
    pub fn get(segments: &[&str]) -> Self {
        Self {
            segments: segments.iter().map(|s| s.to_string()).collect(),
            query: Vec::new(),
        }
    }

    pub fn path(&self) -> String {
        self.segments.join("/")
    }

    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Builds requests for one view
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    schema: Arc<ParameterSchema>,
    layout: RouteLayout,
}

impl RequestBuilder {
    pub fn new(schema: Arc<ParameterSchema>, layout: RouteLayout) -> Self {
        Self { schema, layout }
    }

    /// Map a snapshot to a request. Filters follow schema declaration order.
    pub fn build(&self, snapshot: &QuerySnapshot) -> Request {
        let present = self.schema.descriptors().filter_map(|d| {
            snapshot
                .filter(&d.name)
                .map(|value| (d.name.as_str(), d.presence, value.to_string()))
        });

        match self.layout {
            RouteLayout::Segments { prefix } => {
                let mut segments: Vec<String> = prefix.iter().map(|s| s.to_string()).collect();
                for (name, presence, value) in present {
                    if presence == Presence::Choice {
                        segments.push(name.to_string());
                    }
                    segments.push(value);
                }
                segments.push(snapshot.page().to_string());
                segments.push(snapshot.page_size().to_string());
                Request {
                    segments,
                    query: Vec::new(),
                }
            }
            RouteLayout::Query { prefix, selector } => {
                let mut query = Vec::new();
                for (name, presence, value) in present {
                    match (presence, selector) {
                        (Presence::Choice, Some(sel)) => {
                            query.push((sel.name_param.to_string(), name.to_string()));
                            query.push((sel.value_param.to_string(), value));
                        }
                        _ => query.push((name.to_string(), value)),
                    }
                }
                query.push(("page".to_string(), snapshot.page().to_string()));
                query.push(("limit".to_string(), snapshot.page_size().to_string()));
                Request {
                    segments: prefix.iter().map(|s| s.to_string()).collect(),
                    query,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::schema::{ParameterDescriptor, ParameterKind};
    use crate::query::state::QueryState;

    const FILTER_PREFIX: &[&str] = &["escolas", "filter"];
    const CITY_PREFIX: &[&str] = &["relatorios", "infraestrutura_das_escolas_por_municipio", ""];

    fn filtrada_schema() -> Arc<ParameterSchema> {
        Arc::new(
            ParameterSchema::new(vec![
                ParameterDescriptor::choice("no_municipio", ParameterKind::Text, "Município"),
                ParameterDescriptor::choice("no_entidade", ParameterKind::Text, "Escola"),
            ])
            .unwrap(),
        )
    }

    fn city_schema() -> Arc<ParameterSchema> {
        Arc::new(
            ParameterSchema::new(vec![
                ParameterDescriptor::required("cidade", ParameterKind::Text, "Cidade"),
                ParameterDescriptor::choice("in_biblioteca", ParameterKind::Boolean, "Biblioteca"),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn test_segments_layout_with_choice() {
        let schema = filtrada_schema();
        let mut state = QueryState::new(schema.clone(), 10);
        state.set_filter("no_municipio", "Curitiba").unwrap();
        let snapshot = state.submit().unwrap();

        let builder = RequestBuilder::new(schema, RouteLayout::Segments { prefix: FILTER_PREFIX });
        let request = builder.build(&snapshot);
        assert_eq!(request.path(), "escolas/filter/no_municipio/Curitiba/1/10");
        assert!(request.query.is_empty());
    }

    #[test]
    fn test_segments_layout_follows_page() {
        let schema = filtrada_schema();
        let mut state = QueryState::new(schema.clone(), 25);
        state.set_filter("no_entidade", "Colégio Estadual").unwrap();
        state.submit().unwrap();

        let builder = RequestBuilder::new(schema, RouteLayout::Segments { prefix: FILTER_PREFIX });
        let request = builder.build(&state.with_page(3).unwrap());
        assert_eq!(
            request.segments,
            vec!["escolas", "filter", "no_entidade", "Colégio Estadual", "3", "25"]
        );
    }

    #[test]
    fn test_query_layout_with_selector() {
        let schema = city_schema();
        let mut state = QueryState::new(schema.clone(), 10);
        state.set_filter("in_biblioteca", "false").unwrap();
        state.set_filter("cidade", "Recife").unwrap();
        let snapshot = state.submit().unwrap();

        let builder = RequestBuilder::new(
            schema,
            RouteLayout::Query {
                prefix: CITY_PREFIX,
                selector: Some(SelectorParams {
                    name_param: "paran",
                    value_param: "value",
                }),
            },
        );
        let request = builder.build(&snapshot);
        assert_eq!(
            request.path(),
            "relatorios/infraestrutura_das_escolas_por_municipio/"
        );
        let pairs: Vec<(&str, &str)> = request
            .query
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("cidade", "Recife"),
                ("paran", "in_biblioteca"),
                ("value", "false"),
                ("page", "1"),
                ("limit", "10"),
            ]
        );
        assert_eq!(request.query_param("paran"), Some("in_biblioteca"));
    }

    #[test]
    fn test_query_layout_without_selector_uses_names() {
        let schema = city_schema();
        let mut state = QueryState::new(schema.clone(), 5);
        state.set_filter("cidade", "Natal").unwrap();
        state.set_filter("in_biblioteca", "true").unwrap();
        let snapshot = state.submit().unwrap();

        let builder = RequestBuilder::new(
            schema,
            RouteLayout::Query {
                prefix: &["escolas"],
                selector: None,
            },
        );
        let request = builder.build(&snapshot);
        assert_eq!(request.query_param("in_biblioteca"), Some("true"));
        assert_eq!(request.query_param("limit"), Some("5"));
    }

    #[test]
    fn test_build_is_deterministic() {
        let schema = city_schema();
        let mut state = QueryState::new(schema.clone(), 10);
        state.set_filter("cidade", "Recife").unwrap();
        state.set_filter("in_biblioteca", "true").unwrap();
        let snapshot = state.submit().unwrap();

        let builder = RequestBuilder::new(
            schema,
            RouteLayout::Query {
                prefix: CITY_PREFIX,
                selector: None,
            },
        );
        let first = builder.build(&snapshot);
        for _ in 0..10 {
            assert_eq!(builder.build(&snapshot), first);
            assert_eq!(builder.build(&snapshot.clone()), first);
        }
    }
}
