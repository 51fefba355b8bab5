//! Conversion: InstanceStatusResponse → InstanceStatus (TryFrom + validation).

use super::wire::InstanceStatusResponse;
use super::{InstanceState, InstanceStatus};
use crate::domain::DecodeError;
use chrono::Utc;

impl TryFrom<InstanceStatusResponse> for InstanceStatus {
    type Error = DecodeError;

    fn try_from(source: InstanceStatusResponse) -> Result<Self, Self::Error> {
        if !source.ok {
            return Err(DecodeError::NotOk(source.error.unwrap_or_default()));
        }
        let state = InstanceState::parse(&source.state)
            .ok_or_else(|| DecodeError::UnknownState(source.state.clone()))?;

        Ok(InstanceStatus {
            total_days: source.details.end_of_the_world_day,
            trading_day: source.details.trading_day,
            done: source.done,
            instance_id: source.id,
            state,
            observed_at: Utc::now(),
        })
    }
}
