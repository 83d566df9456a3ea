use crate::model::catalog::Catalog;
use crate::model::entry::MessageEntry;

/// Primeira entrada do backup com o mesmo texto fonte.
/// Texto fonte vazio nunca casa: não é evidência de nada.
pub fn exact_match<'a>(backup: &'a Catalog, message: &str) -> Option<&'a MessageEntry> {
    if message.trim().is_empty() {
        return None;
    }

    backup.values().find(|e| e.message == message)
}

/// Recupera traduções do backup para toda entrada ainda sem tradução,
/// casando pelo texto fonte. Retorna quantas entradas foram preenchidas.
pub fn fill_from_backup(entries: &mut Catalog, backup: &Catalog) -> usize {
    let mut filled = 0usize;

    for entry in entries.values_mut() {
        if entry.has_translation() {
            continue;
        }

        if let Some(previous) = exact_match(backup, &entry.message) {
            if previous.has_translation() {
                entry.translation = previous.translation.clone();
                filled += 1;
            }
        }
    }

    filled
}
