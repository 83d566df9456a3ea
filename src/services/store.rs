use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::model::catalog::Catalog;

pub fn load(path: &Path) -> Result<Catalog, Error> {
    let data = fs::read_to_string(path).map_err(|e| Error::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&data).map_err(|e| Error::Json {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Grava o catálogo como o lingui grava: indentação de 2 espaços e
/// newline no final.
pub fn save(path: &Path, catalog: &Catalog) -> Result<(), Error> {
    let mut json = serde_json::to_string_pretty(catalog).map_err(|e| Error::Json {
        path: path.to_path_buf(),
        source: e,
    })?;
    json.push('\n');

    write_atomic(path, json.as_bytes())
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), Error> {
    let tmp = tmp_path(path);

    if let Some(parent) = tmp.parent() {
        fs::create_dir_all(parent).map_err(|e| write_err(path, e))?;
    }

    fs::write(&tmp, bytes).map_err(|e| write_err(&tmp, e))?;

    // remove antes do rename: em Windows rename não sobrescreve
    if path.exists() {
        fs::remove_file(path).map_err(|e| write_err(path, e))?;
    }

    fs::rename(&tmp, path).map_err(|e| write_err(path, e))?;

    Ok(())
}

fn write_err(path: &Path, source: std::io::Error) -> Error {
    Error::Write {
        path: path.to_path_buf(),
        source,
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut p = path.to_path_buf();
    let file_name = match path.file_name().and_then(|s| s.to_str()) {
        Some(n) => n.to_string(),
        None => "catalog".to_string(),
    };
    p.set_file_name(format!("{file_name}.tmp"));
    p
}
