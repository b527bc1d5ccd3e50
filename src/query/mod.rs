//! Typed query parameters for the census views.
//!
//! This module covers everything that happens before a request leaves the
//! process: declaring filter fields, collecting user edits, freezing them into
//! a snapshot, and turning that snapshot into a request descriptor.

pub mod request;
pub mod schema;
pub mod state;

pub use request::{Request, RequestBuilder, RouteLayout, SelectorParams};
pub use schema::{ParameterDescriptor, ParameterKind, ParameterSchema, ParameterValue, Presence};
pub use state::{QuerySnapshot, QueryState};
