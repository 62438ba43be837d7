//! Interactive console session: collects inputs field by field, re-prompting
//! on bad input, then renders the result and offers another round.

mod prompt;

pub use prompt::{Session, SessionError};

/// Printed when the operator declines another calculation
pub const FAREWELL_MESSAGE: &str = "Thank you! Good luck!";

/// Printed when input closes in the middle of a session
pub const INTERRUPTED_MESSAGE: &str = "Session interrupted by user.";
