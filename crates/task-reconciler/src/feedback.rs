//! Save button feedback states.

use crate::strings::WidgetStrings;

/// Delay before a "saved" label reverts
pub const SAVED_RESET_MS: u32 = 2000;
/// Delay before an error label reverts
pub const FAILED_RESET_MS: u32 = 3000;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SaveFeedback {
    #[default]
    Idle,
    Saving,
    Saved,
    Failed(String),
}

impl SaveFeedback {
    /// Feedback for a completed request
    pub fn from_result(result: Result<(), String>) -> Self {
        match result {
            Ok(()) => SaveFeedback::Saved,
            Err(message) => SaveFeedback::Failed(message),
        }
    }

    /// The button is disabled while its request is outstanding.
    pub fn is_busy(&self) -> bool {
        matches!(self, SaveFeedback::Saving)
    }

    /// Text shown on the button. An empty failure message falls back to the
    /// generic save error.
    pub fn label(&self, strings: &WidgetStrings, idle_label: &str) -> String {
        match self {
            SaveFeedback::Idle => idle_label.to_string(),
            SaveFeedback::Saving => strings.saving.clone(),
            SaveFeedback::Saved => strings.saved.clone(),
            SaveFeedback::Failed(message) if message.trim().is_empty() => strings.save_error.clone(),
            SaveFeedback::Failed(message) => message.clone(),
        }
    }

    /// How long this state stays on screen before reverting to `Idle`
    pub fn reset_after_ms(&self) -> Option<u32> {
        match self {
            SaveFeedback::Saved => Some(SAVED_RESET_MS),
            SaveFeedback::Failed(_) => Some(FAILED_RESET_MS),
            SaveFeedback::Idle | SaveFeedback::Saving => None,
        }
    }
}

/// Handle for one displayed feedback state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackTicket(u64);

/// Feedback currently on a button. Every new state supersedes the delayed
/// reset scheduled for the previous one, even when the states are equal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackSlot {
    current: SaveFeedback,
    generation: u64,
}

impl FeedbackSlot {
    pub fn current(&self) -> &SaveFeedback {
        &self.current
    }

    pub fn show(&mut self, feedback: SaveFeedback) -> FeedbackTicket {
        self.current = feedback;
        self.generation += 1;
        FeedbackTicket(self.generation)
    }

    /// Revert to `Idle` if `ticket` is still the state on display.
    pub fn expire(&mut self, ticket: FeedbackTicket) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.current = SaveFeedback::Idle;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        let strings = WidgetStrings::default();
        assert_eq!(SaveFeedback::Idle.label(&strings, "Save Notes"), "Save Notes");
        assert_eq!(SaveFeedback::Saving.label(&strings, "Save Notes"), strings.saving);
        assert_eq!(SaveFeedback::Saved.label(&strings, "Save Notes"), strings.saved);
        assert_eq!(
            SaveFeedback::Failed("Invalid user or data".into()).label(&strings, "Save Notes"),
            "Invalid user or data"
        );
        assert_eq!(
            SaveFeedback::Failed(String::new()).label(&strings, "Save Notes"),
            strings.save_error
        );
    }

    #[test]
    fn test_busy_and_reset() {
        assert!(SaveFeedback::Saving.is_busy());
        assert!(!SaveFeedback::Saved.is_busy());
        assert_eq!(SaveFeedback::Saved.reset_after_ms(), Some(SAVED_RESET_MS));
        assert_eq!(SaveFeedback::from_result(Err("x".into())).reset_after_ms(), Some(FAILED_RESET_MS));
        assert_eq!(SaveFeedback::Saving.reset_after_ms(), None);
    }

    #[test]
    fn test_stale_reset_keeps_newer_equal_state() {
        let mut slot = FeedbackSlot::default();
        let first = slot.show(SaveFeedback::Saved);
        slot.show(SaveFeedback::Saving);
        let second = slot.show(SaveFeedback::Saved);

        assert!(!slot.expire(first));
        assert_eq!(slot.current(), &SaveFeedback::Saved);
        assert!(slot.expire(second));
        assert_eq!(slot.current(), &SaveFeedback::Idle);
    }
}
