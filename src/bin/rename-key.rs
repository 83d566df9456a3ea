use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use locale_tools::services::rename::{self, PnpmExtractor};

/// Renomeia um key nos catálogos de um projeto preservando as traduções já
/// feitas (recuperadas pelo texto fonte depois da re-extração).
#[derive(Debug, Parser)]
#[command(
    name = "rename-key",
    version,
    about = "Rename a catalog key across all languages of a project"
)]
struct Cli {
    /// Diretório do projeto, relativo ao diretório corrente
    project: Option<String>,

    /// Trecho atual do key
    from: Option<String>,

    /// Trecho novo do key
    to: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // validação manual: mantém as mensagens e o exit 1 dos scripts que os
    // fluxos de build já esperam (clap sozinho sairia com 2)
    let Some(project) = cli.project else {
        eprintln!("Project is required");
        return ExitCode::from(1);
    };
    let (Some(from), Some(to)) = (cli.from, cli.to) else {
        eprintln!("Both keys are required");
        return ExitCode::from(1);
    };

    let project_dir = PathBuf::from(&project);

    match rename::rename_key(&project_dir, &from, &to, &PnpmExtractor) {
        Ok(report) => {
            eprintln!(
                "[rename] {} file(s) updated, {} key(s) renamed, {} translation(s) recovered",
                report.files, report.keys_renamed, report.backfilled
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("[rename] {e}");
            ExitCode::FAILURE
        }
    }
}
