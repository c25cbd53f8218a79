// JSON-RPC transport for the Event Master device.
//
// Every call is one HTTP POST to the device endpoint carrying a
// JSON-RPC 2.0 request. The device wraps results in its own envelope:
// `{"result": {"success": <code>, "response": <payload>}}`. This module
// strips that envelope; callers see typed payloads or an `Error`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

#[derive(Debug, Serialize)]
struct Request<'a, P: Serialize> {
    jsonrpc: &'static str,
    method: &'a str,
    params: P,
    /// The device echoes ids back as strings.
    id: String,
}

#[derive(Debug, serde::Deserialize)]
struct Envelope {
    result: RpcResult,
}

#[derive(Debug, serde::Deserialize)]
struct RpcResult {
    /// 0 means success; anything else is a device status code.
    success: i64,
    #[serde(default)]
    response: Value,
}

/// Raw JSON-RPC client: one request, one response, no retries.
///
/// Holds the sequence counter used for request ids. Cancellation and
/// timeout are entirely the transport's concern; a timed-out call
/// surfaces as [`Error::Timeout`].
pub struct RpcClient {
    http: reqwest::Client,
    url: Url,
    seq: AtomicU64,
    timeout: Duration,
}

impl RpcClient {
    /// Create a client for the given endpoint from a `TransportConfig`.
    pub fn new(url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        Ok(Self {
            http: transport.build_client()?,
            url,
            seq: AtomicU64::new(0),
            timeout: transport.timeout,
        })
    }

    /// The device endpoint URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Send one request and decode the unwrapped response payload.
    pub async fn invoke<P, R>(&self, method: &str, params: P) -> Result<R, Error>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let seq = self.seq.fetch_add(1, Ordering::Relaxed);
        let request = Request {
            jsonrpc: "2.0",
            method,
            params,
            id: seq.to_string(),
        };

        debug!(method, seq, "rpc call");

        let resp = self
            .http
            .post(self.url.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let resp = resp.error_for_status().map_err(Error::Transport)?;

        // The call timeout also covers reading the body.
        let body = resp.text().await.map_err(|e| self.map_transport_error(e))?;

        let envelope: Envelope =
            serde_json::from_str(&body).map_err(|e| Error::Deserialization {
                message: e.to_string(),
                body: body.clone(),
            })?;

        if envelope.result.success != 0 {
            return Err(Error::Device {
                method: method.to_owned(),
                code: envelope.result.success,
            });
        }

        serde_json::from_value(envelope.result.response).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body,
        })
    }

    fn map_transport_error(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Timeout {
                timeout_secs: self.timeout.as_secs(),
            }
        } else {
            Error::Transport(err)
        }
    }
}
