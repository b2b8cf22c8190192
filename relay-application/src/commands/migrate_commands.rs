use tracing::debug;

use crate::{AppError, AppState};
use relay_domain::{AdvancementEvent, EventEnvelope, LegacyAdvancement, RecordKind};

/// Converts one retired advancement line into a canonical envelope.
pub fn migrate_legacy_advancement(state: &AppState, raw: &[u8]) -> Result<Vec<u8>, AppError> {
    let result = convert(raw);
    match &result {
        Ok(event) => {
            debug!("migrated advancement '{}' for {}", event.advancement(), event.username());
            state.metrics.record_accepted(RecordKind::AdvancementEvent);
        }
        Err(err) => state.metrics.record_rejection(err),
    }
    Ok(EventEnvelope::new(result?).encode())
}

fn convert(raw: &[u8]) -> Result<AdvancementEvent, AppError> {
    let legacy = LegacyAdvancement::decode(raw)?;
    Ok(AdvancementEvent::from_legacy(legacy)?)
}
