use std::path::PathBuf;

use indexmap::IndexMap;

use crate::model::entry::MessageEntry;

/// Catálogo de um idioma: key -> entrada, na ordem do arquivo.
/// IndexMap para não embaralhar arquivos que passam por diff humano.
pub type Catalog = IndexMap<String, MessageEntry>;

/// Um catálogo carregado junto com a identidade dele em disco.
#[derive(Debug, Clone)]
pub struct CatalogFile {
    pub lang: String,
    pub path: PathBuf,
    pub entries: Catalog,
}
