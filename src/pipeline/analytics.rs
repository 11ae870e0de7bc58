#[cfg(test)]
use mockall::automock;

/// Narrow sink for the discrete page/pipeline events. Everything that wants
/// to emit an event depends on this and never on a concrete vendor.
#[cfg_attr(test, automock)]
pub trait EventSink: Send + Sync {
    fn record(&self, category: &str, action: &str, label: &str);
}

/// Default sink: structured log lines. A GA/GTM forwarder would slot in
/// behind the same trait.
pub struct TracingSink;

impl EventSink for TracingSink {
    fn record(&self, category: &str, action: &str, label: &str) {
        tracing::info!(category, action, label, "analytics event");
    }
}
