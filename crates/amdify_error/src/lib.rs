use std::{borrow::Cow, path::PathBuf};

mod error;
pub use error::*;
mod error_kind;
pub use error_kind::*;
mod errors;
pub use errors::*;
mod utils;
pub use utils::*;

pub type Result<T> = std::result::Result<T, Error>;
pub type StaticStr = Cow<'static, str>;
pub use anyhow;
pub use anyhow::format_err;

scoped_tls::scoped_thread_local!(static CWD: PathBuf);
