use std::{
  path::{Path, PathBuf},
  process::ExitCode,
};

use amdify::{Error, Errors, Loader, Result, TransformOptions, Transformer};
use clap::Parser;
use rayon::prelude::*;

/// Rewrite ES module `import`/`export` into AMD `define(...)` calls.
#[derive(Parser, Debug)]
#[command(name = "amdify", version)]
struct Cli {
  /// Files to transform.
  #[arg(required = true)]
  files: Vec<PathBuf>,

  /// Write each output to `<DIR>/<file name>` instead of stdout.
  #[arg(short, long, value_name = "DIR")]
  out_dir: Option<PathBuf>,

  /// Parse every file as JSX.
  #[arg(long)]
  jsx: bool,

  /// Drop comments from the output.
  #[arg(long)]
  no_comments: bool,

  /// JSON file with transform options.
  #[arg(long, value_name = "FILE")]
  config: Option<PathBuf>,
}

impl Cli {
  fn transform_options(&self) -> Result<TransformOptions> {
    let mut options = match &self.config {
      Some(path) => {
        let content = std::fs::read_to_string(path)
          .map_err(|e| Error::io_error(e).context(format!("Reading {}", path.display())))?;
        serde_json::from_str(&content).map_err(|e| {
          Error::from(amdify_error::anyhow::Error::from(e))
            .context(format!("Parsing {}", path.display()))
        })?
      }
      None => TransformOptions::default(),
    };
    if self.jsx {
      options.loader = Some(Loader::Jsx);
    }
    if self.no_comments {
      options.preserve_comments = false;
    }
    Ok(options)
  }
}

fn main() -> ExitCode {
  amdify_tracing::enable_tracing_on_demand();
  let cli = Cli::parse();
  let cwd = std::env::current_dir().unwrap_or_default();

  match run(&cli) {
    Ok(()) => ExitCode::SUCCESS,
    Err(errors) => {
      for error in errors.iter() {
        report(error, &cwd);
      }
      ExitCode::FAILURE
    }
  }
}

fn run(cli: &Cli) -> std::result::Result<(), Errors> {
  let transformer = Transformer::new(cli.transform_options()?);
  if let Some(out_dir) = &cli.out_dir {
    std::fs::create_dir_all(out_dir)
      .map_err(|e| Error::io_error(e).context(format!("Creating {}", out_dir.display())))?;
  }

  let results = cli
    .files
    .par_iter()
    .map(|file| {
      let output = transformer.transform_file(file)?;
      match &cli.out_dir {
        Some(out_dir) => write_output(out_dir, file, &output.code).map(|_| None),
        None => Ok(Some(output.code)),
      }
    })
    .collect::<Vec<_>>();

  let mut errors = vec![];
  for result in results {
    match result {
      Ok(Some(code)) => println!("{code}"),
      Ok(None) => {}
      Err(error) => errors.push(error),
    }
  }
  match Errors::from_vec(errors) {
    Some(errors) => Err(errors),
    None => Ok(()),
  }
}

fn write_output(out_dir: &Path, file: &Path, code: &str) -> Result<()> {
  let file_name = file
    .file_name()
    .ok_or_else(|| Error::panic(format!("{} is not a file", file.display())))?;
  let dest = out_dir.join(file_name);
  tracing::debug!("writing {}", dest.display());
  std::fs::write(&dest, code)
    .map_err(|e| Error::io_error(e).context(format!("Writing {}", dest.display())))
}

fn report(error: &Error, cwd: &Path) {
  for ctx in error.contexts().iter().rev() {
    eprintln!("{}: {}", ansi_term::Color::Yellow.paint("context"), ctx);
  }
  eprintln!(
    "{}[{}]: {}",
    ansi_term::Color::Red.bold().paint("error"),
    error.kind.code(),
    error.kind.to_readable_string(cwd)
  );
}

#[cfg(test)]
mod tests {
  use clap::CommandFactory;

  use super::*;

  #[test]
  fn verify_cli() {
    Cli::command().debug_assert();
  }

  #[test]
  fn flags_override_defaults() {
    let cli = Cli::parse_from(["amdify", "--jsx", "--no-comments", "a.js", "b.js"]);
    assert_eq!(cli.files, [PathBuf::from("a.js"), PathBuf::from("b.js")]);
    let options = cli.transform_options().unwrap();
    assert_eq!(options.loader, Some(Loader::Jsx));
    assert!(!options.preserve_comments);
  }

  #[test]
  fn files_are_required() {
    assert!(Cli::try_parse_from(["amdify"]).is_err());
  }
}
