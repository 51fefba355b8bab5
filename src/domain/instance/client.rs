//! Instances sub-client — polling, stopping, restarting and resuming level
//! instances.

use crate::client::StockfighterClient;
use crate::domain::heartbeat::Heartbeat;
use crate::domain::instance::InstanceStatus;
use crate::domain::level::Level;
use crate::error::SdkError;
use crate::shared::InstanceId;

pub struct Instances<'a> {
    pub(crate) client: &'a StockfighterClient,
}

impl<'a> Instances<'a> {
    /// Poll the status of an instance.
    ///
    /// Read-only and safe to call repeatedly. Failures are logged and reported
    /// as `None`; an occasional missed poll is expected.
    pub async fn status(&self, instance: InstanceId) -> Option<InstanceStatus> {
        match self.fetch_status(instance).await {
            Ok(status) => Some(status),
            Err(e) => {
                tracing::warn!(%instance, error = %e, "Instance status unavailable");
                None
            }
        }
    }

    /// Stop an instance. Returns whether the game master acknowledged it.
    ///
    /// Best effort: failures are logged and reported as `false`.
    pub async fn stop(&self, instance: InstanceId) -> bool {
        let heartbeat = match self.client.http.stop_instance(instance).await {
            Ok(payload) => Heartbeat::decode(payload.as_value()).unwrap_or_else(Heartbeat::dead),
            Err(e) => {
                tracing::warn!(%instance, error = %e, "Stop request failed");
                return false;
            }
        };

        if !heartbeat.ok {
            tracing::warn!(%instance, error = %heartbeat.error, "Stop not acknowledged");
        }
        heartbeat.ok
    }

    /// Restart an instance from its first trading day.
    pub async fn restart(&self, instance: InstanceId) -> Result<Level, SdkError> {
        let payload = self
            .client
            .http
            .restart_instance(instance)
            .await?
            .into_success()?;
        Ok(Level::from_value(payload.as_value())?)
    }

    /// Resume a previously stopped instance.
    pub async fn resume(&self, instance: InstanceId) -> Result<Level, SdkError> {
        let payload = self
            .client
            .http
            .resume_instance(instance)
            .await?
            .into_success()?;
        Ok(Level::from_value(payload.as_value())?)
    }

    async fn fetch_status(&self, instance: InstanceId) -> Result<InstanceStatus, SdkError> {
        let payload = self
            .client
            .http
            .instance_status(instance)
            .await?
            .into_success()?;
        Ok(InstanceStatus::from_value(payload.as_value())?)
    }
}
