//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` defines the transport seam and error taxonomy, `client` attaches
//! credentials and classifies responses, `api` names every endpoint,
//! `boundary` turns failures into session teardown or user notices, and
//! `types` defines the wire schema.

pub mod api;
pub mod boundary;
pub mod client;
pub mod http;
#[cfg(test)]
pub(crate) mod mock_transport;
pub mod types;
