use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use clap::builder::PossibleValuesParser;
use formwright::export_schema;
use formwright_builder_ratatui::{BuilderConfig, FormBuilder};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "formwright")]
#[command(about = "Build, preview, publish and take forms in the terminal")]
struct Cli {
    /// Title shown at the top of the screen
    #[arg(long, default_value = "Form Builder")]
    title: String,

    /// Name written into published forms
    #[arg(long)]
    form_name: Option<String>,

    /// Load the starting fields from a schema file
    #[arg(long, value_name = "FILE", conflicts_with = "example")]
    schema: Option<PathBuf>,

    /// Start from one of the bundled example forms
    #[arg(long, value_parser = PossibleValuesParser::new(example_forms::NAMES))]
    example: Option<String>,

    /// Where to write the log; the terminal is taken by the UI
    #[arg(long, value_name = "FILE", default_value = "formwright.log")]
    log_file: PathBuf,

    /// Print the schema of the starting fields and exit
    #[arg(long)]
    export: bool,
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "formwright=info".into()),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_file)?;

    let mut config = BuilderConfig::new().with_title(cli.title);
    if let Some(name) = cli.form_name {
        config = config.with_form_name(name);
    }
    if let Some(path) = cli.schema {
        config = config.with_schema(path);
    }
    if let Some(name) = cli.example {
        let fields = example_forms::by_name(&name)
            .with_context(|| format!("unknown example form '{name}'"))?;
        config = config.with_fields(fields);
    }

    let builder = FormBuilder::with_config(config);

    if cli.export {
        let state = builder.initial_state()?;
        println!("{}", export_schema(state.fields())?);
        return Ok(());
    }

    let state = builder.run()?;
    tracing::info!(fields = state.fields().len(), "exiting");
    Ok(())
}
