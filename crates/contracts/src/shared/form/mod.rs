//! Form plumbing shared by every details page: collected field errors,
//! validation context, raw-input parsing and the submission state machine.

mod context;
mod date_window;
mod field_errors;
mod optimistic;
mod parse;
mod submit_state;

pub use context::{FormContext, FormMode};
pub use date_window::{validate_date_window, END_BEFORE_START_MESSAGE, START_IN_PAST_MESSAGE};
pub use field_errors::FieldErrors;
pub use optimistic::PendingRemoval;
pub use parse::{parse_decimal, parse_integer};
pub use submit_state::SubmitState;
