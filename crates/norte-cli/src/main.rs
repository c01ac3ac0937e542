//! Command-line front end: prompt in, project out.
//!
//! `norte "CRUD de produtos" --stack react` writes `produtos-react.zip` to
//! the working directory; `--out` unpacks the tree into a directory instead,
//! and `--spec-only` prints the interpreted spec as JSON without emitting.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use norte_codegen::{emitter_for, project_slug};
use norte_core::{Stack, Theme};
use norte_interpreter::build_spec_from_prompt;

#[derive(Debug, Parser)]
#[command(name = "norte", version, about = "Gera telas a partir de um prompt em português")]
struct Args {
    /// Prompt text, e.g. "CRUD de produtos"
    prompt: String,

    /// Target stack
    #[arg(long, value_enum, default_value_t = StackArg::React)]
    stack: StackArg,

    /// Theme variant
    #[arg(long, value_enum, default_value_t = ThemeArg::Norte)]
    theme: ThemeArg,

    /// Print the interpreted spec as JSON and exit without emitting files
    #[arg(long)]
    spec_only: bool,

    /// Write the project tree into this directory instead of a ZIP bundle
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum StackArg {
    React,
    Vue,
    Bootstrap,
    Angular,
}

impl From<StackArg> for Stack {
    fn from(value: StackArg) -> Self {
        match value {
            StackArg::React => Stack::React,
            StackArg::Vue => Stack::Vue,
            StackArg::Bootstrap => Stack::Bootstrap,
            StackArg::Angular => Stack::Angular,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum ThemeArg {
    Norte,
    Minimal,
}

impl From<ThemeArg> for Theme {
    fn from(value: ThemeArg) -> Self {
        match value {
            ThemeArg::Norte => Theme::Norte,
            ThemeArg::Minimal => Theme::Minimal,
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("emission failed: {0}")]
    Emit(#[from] norte_codegen::EmitError),

    #[error("export failed: {0}")]
    Export(#[from] norte_export::ExportError),

    #[error("serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

fn main() -> ExitCode {
    env_logger::init();
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("norte: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let stack = Stack::from(args.stack);
    let mut spec = build_spec_from_prompt(&args.prompt, stack);
    spec.theme = Theme::from(args.theme);
    log::info!(
        "interpreted prompt as {:?} screen for entity {:?}",
        spec.screen_type,
        spec.entity
    );

    if args.spec_only {
        println!("{}", serde_json::to_string_pretty(&spec)?);
        return Ok(());
    }

    let project = emitter_for(stack).emit(&spec)?;
    for path in project.paths() {
        log::debug!("emitted {path}");
    }

    let slug = project_slug(&spec);
    let bundle_name = format!("{slug}-{stack}");
    match args.out {
        Some(dir) => {
            norte_export::write_to_dir(&project, &dir)?;
            println!("{} arquivos gravados em {}", project.len(), dir.display());
        }
        None => {
            let bytes = norte_export::archive(&project, &bundle_name)?;
            let zip_path = PathBuf::from(format!("{bundle_name}.zip"));
            std::fs::write(&zip_path, bytes)?;
            println!("{} arquivos empacotados em {}", project.len(), zip_path.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_select_react_and_norte() {
        let args = Args::parse_from(["norte", "CRUD de produtos"]);
        assert!(matches!(args.stack, StackArg::React));
        assert!(matches!(args.theme, ThemeArg::Norte));
        assert!(!args.spec_only);
        assert!(args.out.is_none());
    }

    #[test]
    fn flags_parse() {
        let args = Args::parse_from([
            "norte",
            "tela de login",
            "--stack",
            "angular",
            "--theme",
            "minimal",
            "--spec-only",
        ]);
        assert!(matches!(args.stack, StackArg::Angular));
        assert!(matches!(args.theme, ThemeArg::Minimal));
        assert!(args.spec_only);
    }
}
