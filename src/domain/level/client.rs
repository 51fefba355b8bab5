//! Levels sub-client — starting levels on the game master.

use crate::client::StockfighterClient;
use crate::domain::level::{Level, LevelName};
use crate::error::SdkError;

pub struct Levels<'a> {
    pub(crate) client: &'a StockfighterClient,
}

impl<'a> Levels<'a> {
    /// Start a new instance of `level`.
    ///
    /// Not idempotent: every call provisions a fresh instance. Any failure is
    /// returned, since without the instance id the session cannot be managed.
    pub async fn start(&self, level: LevelName) -> Result<Level, SdkError> {
        let payload = self.client.http.start_level(level).await?.into_success()?;
        let level = Level::from_value(payload.as_value())?;

        tracing::debug!(
            instance = %level.instance_id,
            account = %level.account,
            "Level started"
        );
        Ok(level)
    }
}
