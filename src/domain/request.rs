//! Request lifecycle shared by every flow.

/// Lifecycle of the request a flow is responsible for.
///
/// `Idle -> Pending -> (Succeeded | Failed)`; from either terminal state a new
/// request re-enters `Pending`. There is no cancelled state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

impl RequestStatus {
    pub fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }

    /// The triggering control is enabled in every state except `Pending`.
    pub fn control_enabled(self) -> bool {
        !self.is_pending()
    }

    /// Picks the control label for the current state.
    pub fn label(self, idle: &'static str, pending: &'static str) -> &'static str {
        if self.is_pending() { pending } else { idle }
    }
}

/// Monotonic token identifying the request context a response belongs to.
///
/// A flow bumps its generation whenever its context changes (new request,
/// reset, different slug). Responses tagged with an older generation are
/// discarded instead of committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Generation(u64);

impl Generation {
    /// Advances to a new context and returns it.
    pub fn advance(&mut self) -> Generation {
        self.0 = self.0.wrapping_add(1);
        *self
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(RequestStatus::default(), RequestStatus::Idle);
    }

    #[test]
    fn test_only_pending_disables_control() {
        assert!(RequestStatus::Idle.control_enabled());
        assert!(!RequestStatus::Pending.control_enabled());
        assert!(RequestStatus::Succeeded.control_enabled());
        assert!(RequestStatus::Failed.control_enabled());
    }

    #[test]
    fn test_label() {
        assert_eq!(RequestStatus::Pending.label("Generate", "Generating..."), "Generating...");
        assert_eq!(RequestStatus::Failed.label("Generate", "Generating..."), "Generate");
    }

    #[test]
    fn test_generation_advances() {
        let mut generation = Generation::default();
        let first = generation.advance();
        let second = generation.advance();
        assert!(second > first);
        assert_eq!(generation, second);
        assert_eq!(second.value(), 2);
    }
}
