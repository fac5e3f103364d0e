//! Client for the NextBus public XML feed.
//!
//! [`NextbusClient`] issues one GET per feed command and decodes the XML
//! envelope into the records in [`model`].

pub mod client;
pub mod command;
pub mod config;
pub mod error;
pub mod fetch;
pub mod model;
pub mod options;
pub mod output;
pub mod parser;
pub mod request;

pub use client::NextbusClient;
pub use command::Command;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{NextbusError, Result};
pub use options::{DEFAULT_SINCE_TIME, MultiStopOption, RouteConfigOption, VehicleLocationOption};
