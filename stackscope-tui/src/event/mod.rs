//! Event layer
//!
//! Translates raw terminal input into messages. Stateless: it reads
//! the model to decide routing but never mutates it.

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
