use crate::domain::ports::{Notifier, Severity};

/// Sends notices to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&mut self, message: &str, severity: Severity) {
        match severity {
            Severity::Info => tracing::info!("{}", message),
            Severity::Error => tracing::error!("{}", message),
        }
    }
}

/// Keeps every notice, for callers that render them later.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    notices: Vec<(Severity, String)>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> &[(Severity, String)] {
        &self.notices
    }

    pub fn messages(&self, severity: Severity) -> Vec<&str> {
        self.notices
            .iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, m)| m.as_str())
            .collect()
    }

    pub fn drain(&mut self) -> Vec<(Severity, String)> {
        std::mem::take(&mut self.notices)
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, message: &str, severity: Severity) {
        tracing::trace!("notice ({:?}): {}", severity, message);
        self.notices.push((severity, message.to_string()));
    }
}
