//! Common imports for integration tests.
#![allow(unused_imports, reason = "not every test crate uses every re-export")]

pub use assert_cmd::{Command, prelude::*};
pub use predicates::prelude::*;
pub use rstest::{fixture, rstest};

#[path = "../common/mod.rs"]
mod common;
pub use common::*;
