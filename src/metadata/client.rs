use super::transport::{HttpTransport, Transport};
use crate::Result;
use ohno::IntoAppError;
use serde::Serialize;
use serde_json::Value;
use url::Url;

const LOG_TARGET: &str = "  metadata";

/// Base URL of the EC2-compatible instance metadata service.
pub const DEFAULT_ENDPOINT: &str = "http://169.254.169.254/latest/meta-data";

/// Flat record of metadata keys to fetched values, kept in service listing order.
pub type MetadataRecord = serde_json::Map<String, Value>;

/// Client for an instance metadata service.
///
/// Requests are issued one at a time; the record for a discovery run is built
/// incrementally, one entry per listed key. Request targets are formed by
/// appending the key directly to the base URL, the way the service's listing
/// format expects.
#[derive(Debug, Clone)]
pub struct Client<T = HttpTransport> {
    transport: T,
    base_url: String,
}

impl Client {
    /// Create a client over a real HTTP transport.
    ///
    /// `endpoint` overrides the default metadata service URL; it must parse as a
    /// valid URL.
    pub fn new(endpoint: Option<&str>) -> Result<Self> {
        Self::with_transport(HttpTransport::new()?, endpoint)
    }
}

impl<T: Transport> Client<T> {
    /// Create a client over a caller-supplied transport.
    pub fn with_transport(transport: T, endpoint: Option<&str>) -> Result<Self> {
        let base_url = match endpoint {
            Some(endpoint) => {
                _ = Url::parse(endpoint).into_app_err("invalid metadata endpoint URL")?;
                endpoint.to_string()
            }
            None => DEFAULT_ENDPOINT.to_string(),
        };

        Ok(Self { transport, base_url })
    }

    /// Fetch a single metadata key.
    ///
    /// Returns a one-entry record on HTTP 200, or an error record for any other
    /// status. Transport-level failures propagate as errors.
    pub async fn fetch_key(&self, key: &str) -> Result<MetadataRecord> {
        let key_url = format!("{}{key}", self.base_url);
        log::info!(target: LOG_TARGET, "Fetching metadata key '{key}'");

        let response = self.transport.get(&key_url).await?;

        let mut record = MetadataRecord::new();
        if response.is_ok() {
            _ = record.insert(key.to_string(), Value::String(response.body));
        } else {
            log::info!(target: LOG_TARGET, "Metadata service returned status {} for key '{key}'", response.status);
            _ = record.insert(
                "error".to_string(),
                Value::String(format!("Failed to retrieve metadata for key: {key}")),
            );
        }

        Ok(record)
    }

    /// List the available top-level metadata keys, then fetch each one in turn.
    ///
    /// Keys whose fetch fails at the network level are recorded as `"Unavailable"`.
    /// Keys answered with a non-200 status are left out of the record entirely.
    /// If the initial listing request is answered with a non-200 status, the
    /// returned record holds a single error entry instead.
    pub async fn discover(&self) -> Result<MetadataRecord> {
        log::info!(target: LOG_TARGET, "Listing metadata keys");

        let response = self.transport.get(&self.base_url).await?;

        let mut record = MetadataRecord::new();
        if !response.is_ok() {
            log::info!(target: LOG_TARGET, "Metadata service returned status {} for key listing", response.status);
            _ = record.insert("error".to_string(), Value::String("Failed to retrieve metadata".to_string()));
            return Ok(record);
        }

        // The listing is split without trimming, so a trailing newline from the
        // service yields a literal empty-string key.
        for key in response.body.split('\n') {
            let key_url = format!("{}{key}", self.base_url);

            match self.transport.get(&key_url).await {
                Ok(key_response) if key_response.is_ok() => {
                    _ = record.insert(key.to_string(), Value::String(key_response.body));
                }
                Ok(key_response) => {
                    // A non-200 answer leaves no entry behind, unlike a transport
                    // failure which records "Unavailable".
                    log::debug!(target: LOG_TARGET, "Skipping key '{key}': status {}", key_response.status);
                }
                Err(e) => {
                    log::debug!(target: LOG_TARGET, "Could not fetch key '{key}': {e}");
                    _ = record.insert(key.to_string(), Value::String("Unavailable".to_string()));
                }
            }
        }

        log::info!(target: LOG_TARGET, "Retrieved {} metadata entries", record.len());

        Ok(record)
    }
}

/// Render a metadata record as 4-space-indented JSON.
pub fn to_pretty_json(record: &MetadataRecord) -> Result<String> {
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut out = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);

    record.serialize(&mut ser).into_app_err("unable to serialize metadata record")?;

    String::from_utf8(out).into_app_err("serialized record was not valid UTF-8")
}
