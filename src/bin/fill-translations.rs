use std::process::ExitCode;

use clap::Parser;

use locale_tools::services::{discover, prompt::StdinSupplier, reconcile};

/// Percorre o diretório corrente atrás de catálogos `locales/*.json` e pede
/// interativamente as traduções que faltam, persistindo a cada key.
#[derive(Debug, Parser)]
#[command(
    name = "fill-translations",
    version,
    about = "Prompt for missing catalog translations and persist them"
)]
struct Cli {}

fn main() -> ExitCode {
    let _cli = Cli::parse();

    let root = match std::env::current_dir() {
        Ok(d) => d,
        Err(e) => {
            eprintln!("[fill] cannot resolve current directory: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut projects = match discover::find_projects(&root) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("[fill] {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut supplier = StdinSupplier::new();
    let mut keys = 0usize;
    let mut applied = 0usize;

    for project in &mut projects {
        match reconcile::reconcile_project(project, &mut supplier) {
            Ok(report) => {
                keys += report.keys_prompted;
                applied += report.overrides_applied;
            }
            Err(e) => {
                eprintln!("[fill] {}: {e}", project.display_name());
                return ExitCode::FAILURE;
            }
        }
    }

    if applied > 0 {
        eprintln!("[fill] {applied} translation(s) saved across {keys} key(s)");
    }

    ExitCode::SUCCESS
}
