use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::model::catalog::CatalogFile;

/// Um diretório `locales` descoberto, com um catálogo por idioma.
/// BTreeMap: os idiomas iteram em ordem alfabética, sem depender de hash.
#[derive(Debug, Clone)]
pub struct Project {
    pub dir: PathBuf,
    pub catalogs: BTreeMap<String, CatalogFile>,
}

impl Project {
    pub fn new(dir: PathBuf) -> Self {
        Project {
            dir,
            catalogs: BTreeMap::new(),
        }
    }

    pub fn display_name(&self) -> String {
        self.dir.to_string_lossy().to_string()
    }
}
