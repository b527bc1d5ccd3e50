pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod fetch;
pub mod projector;
pub mod query;
pub mod views;

pub use config::Config;
pub use error::{CensoError, Result};
pub use fetch::{FetchController, FetchState, HttpTransport, PageInfo, Transport};
pub use projector::{JsonProjector, ResultProjector, ResultSet};
pub use query::{ParameterDescriptor, ParameterKind, ParameterSchema, ParameterValue, Presence};
pub use views::ViewController;
