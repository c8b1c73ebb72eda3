mod name_helpers;
pub use name_helpers::*;
mod uid;
pub use uid::*;
mod to_amd;
pub use to_amd::*;
