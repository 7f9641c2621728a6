//! Task Reconciler
//!
//! Host-independent core of the widget's client side. The rendered rows are
//! the only copy of the task list; every mutation rebuilds the canonical
//! list from them, applies one change and hands back the next view plus the
//! full list to persist.

mod escape;
mod feedback;
mod notes;
mod strings;
mod task;
mod view;

pub use escape::escape_html;
pub use feedback::{FeedbackSlot, FeedbackTicket, SaveFeedback, FAILED_RESET_MS, SAVED_RESET_MS};
pub use notes::{AutosaveTicket, NotesAutosave, AUTOSAVE_QUIET_MS};
pub use strings::WidgetStrings;
pub use task::{Task, TaskSummary};
pub use view::{reconstruct, RowKey, RowText, Step, TaskAction, TaskListView, TaskRow};
