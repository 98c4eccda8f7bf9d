use std::{
  fs,
  io::{self, Read, Write},
  path::Path,
};

use color_eyre::eyre::{Context, Result, bail};
use log::{LevelFilter, debug, info};
use mdfy::{
  cli::{Cli, Commands},
  document,
};
use mdfy_config::Config;
use mdfy_core::{MdTable, Mdfier};

fn main() -> Result<()> {
  color_eyre::install()?;

  // Parse command line arguments
  let cli = Cli::parse_args();

  // Initialize logging first so we can log during command handling
  env_logger::Builder::new()
    .filter_level(if cli.verbose {
      LevelFilter::Debug
    } else {
      LevelFilter::Info
    })
    .write_style(env_logger::WriteStyle::Always)
    .init();

  let Cli {
    command,
    config_files,
    config_overrides,
    ..
  } = cli;
  let load_config = || Config::load(&config_files, &config_overrides);

  match command {
    Commands::Init {
      output,
      format,
      force,
    } => init(&output, &format, force),
    Commands::Style { text } => {
      let formatter = load_config()?.text_formatter();
      let mut stdout = io::stdout().lock();
      for line in text {
        writeln!(stdout, "{}", formatter.format(&line))?;
      }
      Ok(())
    },
    Commands::Table {
      input,
      transpose,
      precision,
      header,
      row_labels,
      output,
    } => {
      let json = read_json(&input)?;
      let mut table = MdTable::from_json(json)
        .wrap_err_with(|| format!("Invalid table input: {}", input.display()))?
        .with_transpose(transpose);
      if !header.is_empty() {
        table = table.with_header(header);
      }
      if !row_labels.is_empty() {
        table = table.with_row_labels(row_labels);
      }
      if let Some(precision) = precision {
        table = table.with_precision(precision);
      }
      let config = load_config()?;
      let table = config.apply_table_defaults(table);

      emit(&config, output.as_deref(), table)
    },
    Commands::Render { input, output } => {
      let source = read_input(&input)?;
      let node = document::parse(&source).wrap_err_with(|| {
        format!("Invalid document description: {}", input.display())
      })?;
      let config = load_config()?;
      let content = node.into_content(&config)?;

      emit(&config, output.as_deref(), content)
    },
  }
}

/// Write the default configuration file.
fn init(output: &Path, format: &str, force: bool) -> Result<()> {
  // Check if file already exists and that we're not forcing overwrite
  if output.exists() && !force {
    bail!(
      "Configuration file already exists: {}. Use --force to overwrite.",
      output.display()
    );
  }

  if let Some(parent) = output.parent()
    && !parent.as_os_str().is_empty()
    && !parent.exists()
  {
    fs::create_dir_all(parent).wrap_err_with(|| {
      format!("Failed to create directory: {}", parent.display())
    })?;
    info!("Created directory: {}", parent.display());
  }

  Config::generate_default_config(format, output).wrap_err_with(|| {
    format!("Failed to generate configuration file: {}", output.display())
  })?;

  info!("Configuration file created successfully. Edit it to customize mdfy.");
  Ok(())
}

/// Write `content` to `output`, or print it when no output file is given.
fn emit(
  config: &Config,
  output: Option<&Path>,
  content: impl Into<mdfy_core::Content>,
) -> Result<()> {
  if let Some(output) = output {
    config
      .mdfier(output)?
      .write(content)
      .wrap_err_with(|| format!("Failed to write {}", output.display()))?;
    info!("Wrote {}", output.display());
  } else {
    let markdown = Mdfier::stringify(content)?;
    writeln!(io::stdout().lock(), "{markdown}")?;
  }
  Ok(())
}

fn read_input(input: &Path) -> Result<String> {
  if input == Path::new("-") {
    debug!("Reading input from stdin");
    let mut source = String::new();
    io::stdin().read_to_string(&mut source)?;
    Ok(source)
  } else {
    fs::read_to_string(input)
      .wrap_err_with(|| format!("Failed to read {}", input.display()))
  }
}

fn read_json(input: &Path) -> Result<serde_json::Value> {
  let source = read_input(input)?;
  serde_json::from_str(&source)
    .wrap_err_with(|| format!("Invalid JSON in {}", input.display()))
}
