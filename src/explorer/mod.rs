//! Explorer session module

mod session;

pub use session::*;
