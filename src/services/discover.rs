use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::model::catalog::CatalogFile;
use crate::model::project::Project;
use crate::services::store;

pub const LOCALES_DIR: &str = "locales";

/// Arquivo agregado do lingui: vive junto dos catálogos mas não é um idioma.
pub const AGGREGATE_FILE: &str = "messages.json";

const BACKUP_SUFFIX: &str = ".bak.json";

/// Varre `root` atrás de `locales/*.json` e agrupa por diretório `locales`
/// (um projeto = um diretório). Ordem de retorno determinística.
pub fn find_projects(root: &Path) -> Result<Vec<Project>, Error> {
    let mut files: Vec<PathBuf> = Vec::new();
    walk(root, &mut files)?;
    files.sort();

    let mut grouped: BTreeMap<PathBuf, Project> = BTreeMap::new();

    for file in files {
        let dir = match file.parent() {
            Some(d) => d.to_path_buf(),
            None => continue,
        };
        let lang = match file.file_stem().and_then(|s| s.to_str()) {
            Some(s) => s.to_string(),
            None => continue,
        };

        let entries = store::load(&file)?;

        grouped
            .entry(dir.clone())
            .or_insert_with(|| Project::new(dir))
            .catalogs
            .insert(
                lang.clone(),
                CatalogFile {
                    lang,
                    path: file,
                    entries,
                },
            );
    }

    Ok(grouped.into_values().collect())
}

fn walk(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), Error> {
    let read = fs::read_dir(dir).map_err(|e| Error::Read {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry in read {
        let entry = entry.map_err(|e| Error::Read {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();

        if path.is_dir() {
            let name = path.file_name().and_then(|s| s.to_str()).unwrap_or("");
            // node_modules e diretórios ocultos ficam de fora, como no glob
            if name == "node_modules" || name.starts_with('.') {
                continue;
            }
            walk(&path, out)?;
        } else if is_catalog_file(&path) {
            out.push(path);
        }
    }

    Ok(())
}

fn is_catalog_file(path: &Path) -> bool {
    let name = match path.file_name().and_then(|s| s.to_str()) {
        Some(n) => n,
        None => return false,
    };

    if !name.ends_with(".json") || name == AGGREGATE_FILE || name.ends_with(BACKUP_SUFFIX) {
        return false;
    }

    path.parent()
        .and_then(|p| p.file_name())
        .and_then(|s| s.to_str())
        == Some(LOCALES_DIR)
}
