//! Heartbeats sub-client — order book and venue liveness.

use crate::client::StockfighterClient;
use crate::domain::heartbeat::Heartbeat;
use crate::error::HttpError;
use crate::http::Payload;

pub struct Heartbeats<'a> {
    pub(crate) client: &'a StockfighterClient,
}

impl<'a> Heartbeats<'a> {
    /// Check that the order book API is up.
    ///
    /// Always resolves: transport, status and payload failures all collapse
    /// to [`Heartbeat::dead`]. A reachable API may still answer `ok: false`
    /// with a diagnostic in `error`.
    pub async fn check(&self) -> Heartbeat {
        into_heartbeat(self.client.http.heartbeat().await, "order book")
    }

    /// Check that a single venue is up. Same contract as [`Self::check`].
    pub async fn venue(&self, venue: &str) -> Heartbeat {
        into_heartbeat(self.client.http.venue_heartbeat(venue).await, venue)
    }
}

fn into_heartbeat(result: Result<Payload, HttpError>, target: &str) -> Heartbeat {
    match result {
        Ok(payload) => Heartbeat::decode(payload.as_value()).unwrap_or_else(|| {
            tracing::warn!(target_api = target, "Undecodable heartbeat");
            Heartbeat::dead()
        }),
        Err(e) => {
            tracing::warn!(target_api = target, error = %e, "Heartbeat failed");
            Heartbeat::dead()
        }
    }
}
