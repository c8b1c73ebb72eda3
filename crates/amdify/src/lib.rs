mod transform_options;
mod transformer;
pub use {
  amdify_common::Loader,
  amdify_error::{Error, ErrorKind, Errors, Result},
  transform_options::TransformOptions,
  transformer::{TransformOutput, Transformer},
};
