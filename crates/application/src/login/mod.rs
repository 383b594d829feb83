//! Sign-in flow orchestration.

mod flow;

pub use flow::{LoginError, LoginFlow};
