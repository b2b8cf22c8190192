use std::sync::atomic::{AtomicU64, Ordering};

use relay_domain::{DecodeError, RecordKind};

use crate::AppError;

#[derive(Debug, Default)]
pub struct Metrics {
    accepted: [AtomicU64; RecordKind::COUNT],
    rejected_oversized: AtomicU64,
    rejected_unauthorized: AtomicU64,
    rejected_decode: AtomicU64,
    rejected_validation: AtomicU64,
}

impl Metrics {
    pub fn record_accepted(&self, kind: RecordKind) {
        self.accepted[kind.index()].fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejection(&self, err: &AppError) {
        let counter = match err {
            AppError::BadRequest(_) => &self.rejected_oversized,
            AppError::Unauthorized(_) => &self.rejected_unauthorized,
            AppError::Validation(_) | AppError::Decode(DecodeError::Invalid(_)) => {
                &self.rejected_validation
            }
            AppError::Decode(_) => &self.rejected_decode,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn accepted(&self, kind: RecordKind) -> u64 {
        self.accepted[kind.index()].load(Ordering::Relaxed)
    }

    pub fn accepted_total(&self) -> u64 {
        self.accepted
            .iter()
            .map(|counter| counter.load(Ordering::Relaxed))
            .sum()
    }

    pub fn rejected_total(&self) -> u64 {
        [
            &self.rejected_oversized,
            &self.rejected_unauthorized,
            &self.rejected_decode,
            &self.rejected_validation,
        ]
        .iter()
        .map(|counter| counter.load(Ordering::Relaxed))
        .sum()
    }

    pub fn render_summary(&self) -> String {
        let mut out = format!(
            "accepted {} rejected {}\n",
            self.accepted_total(),
            self.rejected_total()
        );
        for kind in RecordKind::ALL {
            let count = self.accepted(kind);
            if count > 0 {
                out.push_str(&format!("  {} {}\n", kind.as_str(), count));
            }
        }
        out.push_str(&format!(
            "  oversized {}\n  unauthorized {}\n  undecodable {}\n  invalid {}\n",
            self.rejected_oversized.load(Ordering::Relaxed),
            self.rejected_unauthorized.load(Ordering::Relaxed),
            self.rejected_decode.load(Ordering::Relaxed),
            self.rejected_validation.load(Ordering::Relaxed),
        ));
        out
    }
}
