pub use arrayvec::{self, ArrayVec};
pub use derive_more;
pub use itertools::*;
pub use thiserror::{self, Error};

pub use logging::{self, prelude::*, slog_value_display};

// misc imports that annoyingly get resolved to other pub exports of std/core
// https://github.com/intellij-rust/intellij-rust/issues/5654
pub use std::fmt::{Debug, Display, Formatter, Result as FmtResult};

pub type BoxedResult<T> = Result<T, Box<dyn std::error::Error>>;

pub mod sized_iter;
