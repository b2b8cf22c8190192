use tracing::debug;

use crate::{AppError, AppState};
use relay_domain::{BridgeEvent, EventEnvelope};

pub fn process_payload(state: &AppState, raw: &[u8]) -> Result<EventEnvelope, AppError> {
    let result = decode_checked(state, raw);
    match &result {
        Ok(envelope) => {
            debug!(
                "accepted {} from server {} at {}",
                envelope.event.kind(),
                envelope.event.server(),
                envelope.event.timestamp()
            );
            state.metrics.record_accepted(envelope.event.kind());
        }
        Err(err) => {
            if let Some(violation) = err.validation() {
                debug!("rejected invalid {} payload", violation.kind());
            }
            state.metrics.record_rejection(err);
        }
    }
    result
}

pub fn canonicalize_payload(state: &AppState, raw: &[u8]) -> Result<Vec<u8>, AppError> {
    let envelope = process_payload(state, raw)?;
    Ok(envelope.encode())
}

fn decode_checked(state: &AppState, raw: &[u8]) -> Result<EventEnvelope, AppError> {
    let limit = state.config.max_payload_bytes;
    if raw.len() as u64 > limit {
        return Err(AppError::BadRequest(format!(
            "payload is {} bytes, limit is {}",
            raw.len(),
            limit
        )));
    }
    let envelope = EventEnvelope::decode(raw)?;
    authorize_server(&state.config.allowed_servers, &envelope.event)?;
    Ok(envelope)
}

fn authorize_server(allowed_servers: &[String], event: &BridgeEvent) -> Result<(), AppError> {
    if allowed_servers.is_empty() {
        return Ok(());
    }
    let server = event.server();
    if allowed_servers.iter().any(|allowed| allowed == server) {
        Ok(())
    } else {
        Err(AppError::Unauthorized(server.to_string()))
    }
}
