//! .
//!
//! Errors only arise while setting up a [`Worker`](crate::worker::Worker) or parsing a
//! [`ShapeType`](crate::shape::ShapeType). Shape operations themselves are total.

pub use anyhow::{Error, Result};

/// Formats the whole cause chain of `error`, one entry per line, and echoes it to stderr.
pub fn display(error: &Error) -> String {
  let mut msg = "Error:\n".to_string();
  error
    .chain()
    .enumerate()
    .for_each(|(index, error)| msg.push_str(&format!("└> {} - {}\n", index, error)));

  eprint!("{}", msg);
  msg
}
