//! Talks to an EC2-compatible instance metadata service.

mod client;
mod transport;

pub use client::{Client, DEFAULT_ENDPOINT, MetadataRecord, to_pretty_json};
pub use transport::{HttpTransport, TextResponse, Transport};
