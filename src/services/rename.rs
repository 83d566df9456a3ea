use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::Error;
use crate::model::catalog::Catalog;
use crate::services::{backfill, discover, store};

/// O passo de re-extração que regenera os catálogos vivos com a key nova.
/// Capability separada para os testes não dependerem de pnpm.
pub trait Extractor {
    fn extract(&self, project: &str) -> Result<(), Error>;
}

/// Extração de produção: `pnpm extract <nome>` no diretório corrente.
pub struct PnpmExtractor;

impl Extractor for PnpmExtractor {
    fn extract(&self, project: &str) -> Result<(), Error> {
        let status = Command::new("pnpm")
            .arg("extract")
            .arg(project)
            .status()
            .map_err(|e| Error::Extract {
                project: project.to_string(),
                reason: e.to_string(),
            })?;

        if !status.success() {
            return Err(Error::Extract {
                project: project.to_string(),
                reason: format!("exit status {status}"),
            });
        }

        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct RenameReport {
    pub files: usize,
    pub keys_renamed: usize,
    pub backfilled: usize,
}

/// Renomeia `from` -> `to` dentro dos keys de todos os catálogos do projeto.
///
/// 1. Backups `<lang>.bak.json` com os keys já renomeados (rename
///    estrutural: os valores nunca são tocados).
/// 2. Re-extração regenera os catálogos vivos. Falha aborta aqui; os
///    backups ficam em disco para recuperação manual.
/// 3. Back-fill: entrada regenerada sem tradução recebe a tradução da
///    primeira entrada do backup com o mesmo texto fonte.
/// 4. Persiste cada catálogo e apaga o backup.
pub fn rename_key<E: Extractor>(
    project_dir: &Path,
    from: &str,
    to: &str,
    extractor: &E,
) -> Result<RenameReport, Error> {
    let projects = discover::find_projects(project_dir)?;
    let mut report = RenameReport::default();

    let mut files: Vec<PathBuf> = Vec::new();
    for project in &projects {
        for file in project.catalogs.values() {
            let (renamed, count) = rename_keys_in(&file.entries, from, to);
            report.keys_renamed += count;
            store::save(&backup_path(&file.path), &renamed)?;
            files.push(file.path.clone());
        }
    }
    report.files = files.len();

    extractor.extract(&project_name(project_dir))?;

    for path in &files {
        let bak = backup_path(path);
        let mut entries = store::load(path)?;
        let backup = store::load(&bak)?;

        report.backfilled += backfill::fill_from_backup(&mut entries, &backup);

        store::save(path, &entries)?;
        fs::remove_file(&bak).map_err(|e| Error::Write {
            path: bak.clone(),
            source: e,
        })?;
    }

    Ok(report)
}

/// Rename estrutural: só o key muda (primeira ocorrência do trecho),
/// entrada e ordem ficam como estavam.
fn rename_keys_in(entries: &Catalog, from: &str, to: &str) -> (Catalog, usize) {
    let mut out = Catalog::new();
    let mut count = 0usize;

    for (key, entry) in entries {
        if key.contains(from) {
            out.insert(key.replacen(from, to, 1), entry.clone());
            count += 1;
        } else {
            out.insert(key.clone(), entry.clone());
        }
    }

    (out, count)
}

pub fn backup_path(path: &Path) -> PathBuf {
    let mut p = path.to_path_buf();
    let stem = match path.file_stem().and_then(|s| s.to_str()) {
        Some(s) => s.to_string(),
        None => "catalog".to_string(),
    };
    p.set_file_name(format!("{stem}.bak.json"));
    p
}

fn project_name(dir: &Path) -> String {
    dir.file_name()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_string()
}
