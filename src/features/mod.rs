//! Sample features built on the store.
//!
//! - `counter` - a counter driven through the dependency boundary, plus a
//!   text field whose length is derived through a binding
//! - `content` - a parent screen embedding the counter's state and a flag
//!   for presenting it

pub mod content;
pub mod counter;
