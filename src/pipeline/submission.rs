use crate::models::lead_models::{DispatchVerdict, RawLead, SubmissionOutcome, SubmissionRecord};
use crate::pipeline::analytics::EventSink;
use crate::pipeline::dispatch::{DispatchCoordinator, DispatchError, DispatchReport};
use crate::pipeline::fallback::FallbackLog;
use crate::pipeline::feedback::{self, PresentationPort};
use crate::pipeline::validator;

/// Seam between the submission walk and the real coordinator, so the walk
/// is testable without network access.
#[allow(async_fn_in_trait)]
pub trait LeadDispatcher {
    async fn dispatch(&self, record: &SubmissionRecord) -> Result<DispatchReport, DispatchError>;
}

impl LeadDispatcher for DispatchCoordinator {
    async fn dispatch(&self, record: &SubmissionRecord) -> Result<DispatchReport, DispatchError> {
        DispatchCoordinator::dispatch(self, record).await
    }
}

/// One full submission walk:
/// Idle → Validating → {Rejected | Dispatching} → {Succeeded | Fallback-Saved | Error-Shown}.
///
/// Owns its record for the duration of the walk; nothing is shared across
/// submissions except the fallback log. The submit control is disabled for
/// the span of the dispatch join, which is the only suspension point.
pub async fn process<D: LeadDispatcher>(
    dispatcher: &D,
    fallback: &FallbackLog,
    sink: &dyn EventSink,
    port: &mut dyn PresentationPort,
    raw: RawLead,
) -> SubmissionOutcome {
    let record = match validator::validate(&raw) {
        Ok(record) => record,
        Err(failure) => {
            tracing::info!("submission rejected: {}", failure);
            let outcome = SubmissionOutcome::Rejected(failure);
            feedback::present(&outcome, port);
            return outcome;
        }
    };

    port.set_submit_enabled(false);

    let outcome = match dispatcher.dispatch(&record).await {
        Ok(report) => match report.verdict() {
            DispatchVerdict::Success => {
                sink.record("Form", "Submit", "Success");
                SubmissionOutcome::Delivered
            }
            DispatchVerdict::Failure => {
                // No channel confirmed anything; keep the lead locally so it
                // is never silently discarded.
                fallback.append(&record);
                SubmissionOutcome::SavedLocally
            }
        },
        Err(e) => {
            tracing::error!("dispatch attempt failed: {}", e);
            fallback.append(&record);
            sink.record("Form", "Submit", "Error");
            SubmissionOutcome::DispatchFailed
        }
    };

    feedback::present(&outcome, port);
    port.set_submit_enabled(true);
    outcome
}
