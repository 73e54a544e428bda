//! Rule-based travel assistant
//!
//! `responder` picks a canned answer for a line of text; `session` keeps the
//! conversation log and paces the assistant's replies.

pub mod responder;
pub mod session;

pub use responder::{classify, select_response, Topic, FALLBACK, GREETING};
pub use session::{ChatSession, SessionState};
