//! Notes Auto-save
//!
//! Blur on the notes field schedules a save after a quiet period. Each new
//! blur supersedes the pending one, and a due save only goes out when the
//! field differs from the last text recorded as saved.

/// Quiet period between the last blur and the auto-save
pub const AUTOSAVE_QUIET_MS: u32 = 1000;

/// Handle for one scheduled auto-save
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutosaveTicket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotesAutosave {
    value: String,
    last_saved: String,
    generation: u64,
}

impl NotesAutosave {
    /// Start from the text that was loaded from storage.
    pub fn new(saved: impl Into<String>) -> Self {
        let saved = saved.into();
        Self {
            value: saved.clone(),
            last_saved: saved,
            generation: 0,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn last_saved(&self) -> &str {
        &self.last_saved
    }

    pub fn is_dirty(&self) -> bool {
        self.value != self.last_saved
    }

    /// Called on blur. Invalidates any earlier ticket.
    pub fn schedule(&mut self) -> AutosaveTicket {
        self.generation += 1;
        AutosaveTicket(self.generation)
    }

    /// Text to save once the quiet period for `ticket` has elapsed, if any.
    pub fn take_due(&self, ticket: AutosaveTicket) -> Option<String> {
        if ticket.0 != self.generation || !self.is_dirty() {
            return None;
        }
        Some(self.value.clone())
    }

    /// Remember the text that the back end acknowledged.
    pub fn record_saved(&mut self, text: impl Into<String>) {
        self.last_saved = text.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unchanged_notes_do_not_autosave() {
        let mut notes = NotesAutosave::new("hello");
        let ticket = notes.schedule();
        assert_eq!(notes.take_due(ticket), None);
    }

    #[test]
    fn test_changed_notes_autosave() {
        let mut notes = NotesAutosave::new("hello");
        notes.set_value("hello world");
        let ticket = notes.schedule();
        assert_eq!(notes.take_due(ticket).as_deref(), Some("hello world"));
    }

    #[test]
    fn test_blurs_within_quiet_period_coalesce() {
        let mut notes = NotesAutosave::new("");
        notes.set_value("a");
        let first = notes.schedule();
        notes.set_value("ab");
        let second = notes.schedule();

        assert_eq!(notes.take_due(first), None);
        assert_eq!(notes.take_due(second).as_deref(), Some("ab"));
    }

    #[test]
    fn test_recorded_save_suppresses_redundant_write() {
        let mut notes = NotesAutosave::new("");
        notes.set_value("draft");
        notes.record_saved("draft");
        assert!(!notes.is_dirty());

        let ticket = notes.schedule();
        assert_eq!(notes.take_due(ticket), None);
    }

    #[test]
    fn test_value_compared_at_end_of_quiet_period() {
        let mut notes = NotesAutosave::new("x");
        notes.set_value("y");
        let ticket = notes.schedule();
        // Typed back to the saved text before the timer fired.
        notes.set_value("x");
        assert_eq!(notes.take_due(ticket), None);
    }
}
