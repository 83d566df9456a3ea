use indexmap::IndexMap;

use crate::error::Error;
use crate::model::entry::MessageEntry;
use crate::model::project::Project;
use crate::services::store;

/// Tradução pendente, ainda não aplicada ao catálogo.
#[derive(Debug, Clone)]
pub struct Override {
    pub key: String,
    pub lang: String,
    pub translation: String,
}

/// Quem fornece as traduções que faltam. Em produção é o terminal
/// (prompt::StdinSupplier); nos testes, uma sequência pré-definida.
pub trait TranslationSupplier {
    /// Contexto de um key antes dos pedidos: texto fonte e o que já existe.
    fn begin_key(&mut self, key: &str, message: &str, translated: &[(String, String)]);

    /// Pede a tradução de um idioma faltante. None ou vazio = continua
    /// faltando, nenhum override é criado.
    fn supply(&mut self, lang: &str) -> Option<String>;

    fn end_key(&mut self);
}

#[derive(Debug, Default)]
pub struct ReconcileReport {
    pub keys_prompted: usize,
    pub overrides_applied: usize,
}

/// Passa por todos os keys do projeto pedindo as traduções que faltam.
///
/// Checkpoint por key: depois de cada key que recebeu pelo menos um
/// override, o projeto inteiro é persistido. Uma sessão interativa
/// abortada no meio mantém em disco tudo que já foi respondido.
pub fn reconcile_project<S: TranslationSupplier>(
    project: &mut Project,
    supplier: &mut S,
) -> Result<ReconcileReport, Error> {
    let messages = collect_messages(project)?;
    let mut report = ReconcileReport::default();

    for (key, message) in &messages {
        let mut translated: Vec<(String, String)> = Vec::new();
        let mut missing: Vec<String> = Vec::new();

        for (lang, file) in &project.catalogs {
            match file.entries.get(key) {
                Some(e) if e.has_translation() => {
                    translated.push((lang.clone(), e.translation.clone()));
                }
                // entrada vazia ou key ausente do catálogo: falta igual
                _ => missing.push(lang.clone()),
            }
        }

        if missing.is_empty() {
            continue;
        }

        report.keys_prompted += 1;
        supplier.begin_key(key, message, &translated);

        let mut overrides: Vec<Override> = Vec::new();
        for lang in &missing {
            match supplier.supply(lang) {
                Some(t) if !t.trim().is_empty() => overrides.push(Override {
                    key: key.clone(),
                    lang: lang.clone(),
                    translation: t,
                }),
                _ => {}
            }
        }

        supplier.end_key();

        if overrides.is_empty() {
            continue;
        }

        for ov in &overrides {
            apply_override(project, ov, message);
        }
        report.overrides_applied += overrides.len();

        for file in project.catalogs.values() {
            store::save(&file.path, &file.entries)?;
        }
    }

    Ok(report)
}

fn apply_override(project: &mut Project, ov: &Override, message: &str) {
    if let Some(file) = project.catalogs.get_mut(&ov.lang) {
        let entry = file
            .entries
            .entry(ov.key.clone())
            .or_insert_with(|| MessageEntry::new(message));
        entry.translation = ov.translation.clone();
    }
}

/// key -> texto fonte, na ordem em que os keys aparecem nos catálogos.
/// Idiomas discordando do texto fonte de um key é erro, não last-writer-wins.
fn collect_messages(project: &Project) -> Result<IndexMap<String, String>, Error> {
    let mut messages: IndexMap<String, String> = IndexMap::new();
    let mut seen_in: IndexMap<String, String> = IndexMap::new();

    for (lang, file) in &project.catalogs {
        for (key, entry) in &file.entries {
            match messages.get(key) {
                None => {
                    messages.insert(key.clone(), entry.message.clone());
                    seen_in.insert(key.clone(), lang.clone());
                }
                Some(existing) if existing != &entry.message => {
                    return Err(Error::MessageConflict {
                        key: key.clone(),
                        lang_a: seen_in[key].clone(),
                        message_a: existing.clone(),
                        lang_b: lang.clone(),
                        message_b: entry.message.clone(),
                    });
                }
                Some(_) => {}
            }
        }
    }

    Ok(messages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::fs;
    use std::path::Path;

    use crate::model::catalog::Catalog;
    use crate::services::discover;

    struct Scripted {
        answers: VecDeque<Option<String>>,
        prompted_keys: Vec<String>,
        prompted_langs: Vec<String>,
    }

    impl Scripted {
        fn new<I: IntoIterator<Item = Option<&'static str>>>(answers: I) -> Self {
            Scripted {
                answers: answers
                    .into_iter()
                    .map(|a| a.map(|s| s.to_string()))
                    .collect(),
                prompted_keys: Vec::new(),
                prompted_langs: Vec::new(),
            }
        }
    }

    impl TranslationSupplier for Scripted {
        fn begin_key(&mut self, key: &str, _message: &str, _translated: &[(String, String)]) {
            self.prompted_keys.push(key.to_string());
        }

        fn supply(&mut self, lang: &str) -> Option<String> {
            self.prompted_langs.push(lang.to_string());
            self.answers.pop_front().flatten()
        }

        fn end_key(&mut self) {}
    }

    fn entry(message: &str, translation: &str) -> MessageEntry {
        MessageEntry {
            translation: translation.to_string(),
            ..MessageEntry::new(message)
        }
    }

    fn write_lang(dir: &Path, lang: &str, entries: &[(&str, MessageEntry)]) {
        let mut catalog = Catalog::new();
        for (key, e) in entries {
            catalog.insert(key.to_string(), e.clone());
        }
        store::save(&dir.join(format!("{lang}.json")), &catalog).unwrap();
    }

    fn load_project(root: &Path) -> Project {
        let mut projects = discover::find_projects(root).unwrap();
        assert_eq!(projects.len(), 1);
        projects.remove(0)
    }

    fn setup(root: &Path) -> std::path::PathBuf {
        let locales = root.join("web/locales");
        fs::create_dir_all(&locales).unwrap();
        locales
    }

    #[test]
    fn fully_translated_keys_are_skipped_without_writes() {
        let tmp = tempfile::tempdir().unwrap();
        let locales = setup(tmp.path());
        write_lang(&locales, "en", &[("k1", entry("Hello", "Hello"))]);
        write_lang(&locales, "pt", &[("k1", entry("Hello", "Olá"))]);

        let before_en = fs::read_to_string(locales.join("en.json")).unwrap();
        let before_pt = fs::read_to_string(locales.join("pt.json")).unwrap();

        let mut project = load_project(tmp.path());
        let mut supplier = Scripted::new([]);
        let report = reconcile_project(&mut project, &mut supplier).unwrap();

        assert_eq!(report.keys_prompted, 0);
        assert!(supplier.prompted_keys.is_empty());
        assert_eq!(fs::read_to_string(locales.join("en.json")).unwrap(), before_en);
        assert_eq!(fs::read_to_string(locales.join("pt.json")).unwrap(), before_pt);
    }

    #[test]
    fn supplied_translations_are_persisted_per_language() {
        let tmp = tempfile::tempdir().unwrap();
        let locales = setup(tmp.path());
        write_lang(&locales, "en", &[("k1", entry("Hello", "Hello"))]);
        write_lang(&locales, "es", &[("k1", entry("Hello", ""))]);
        write_lang(&locales, "pt", &[("k1", entry("Hello", ""))]);

        let mut project = load_project(tmp.path());
        let mut supplier = Scripted::new([Some("Hola"), Some("Olá")]);
        let report = reconcile_project(&mut project, &mut supplier).unwrap();

        assert_eq!(report.overrides_applied, 2);
        assert_eq!(supplier.prompted_langs, ["es", "pt"]);

        let es = store::load(&locales.join("es.json")).unwrap();
        let pt = store::load(&locales.join("pt.json")).unwrap();
        let en = store::load(&locales.join("en.json")).unwrap();
        assert_eq!(es["k1"].translation, "Hola");
        assert_eq!(pt["k1"].translation, "Olá");
        assert_eq!(en["k1"].translation, "Hello");
    }

    #[test]
    fn empty_answer_leaves_translation_missing_and_writes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let locales = setup(tmp.path());
        write_lang(&locales, "en", &[("k1", entry("Hello", "Hello"))]);
        write_lang(&locales, "pt", &[("k1", entry("Hello", ""))]);

        let before = fs::read_to_string(locales.join("pt.json")).unwrap();

        let mut project = load_project(tmp.path());
        let mut supplier = Scripted::new([None]);
        let report = reconcile_project(&mut project, &mut supplier).unwrap();

        assert_eq!(report.keys_prompted, 1);
        assert_eq!(report.overrides_applied, 0);
        assert_eq!(fs::read_to_string(locales.join("pt.json")).unwrap(), before);
    }

    #[test]
    fn second_run_after_filling_everything_prompts_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let locales = setup(tmp.path());
        write_lang(&locales, "en", &[("k1", entry("Hello", "Hello"))]);
        write_lang(&locales, "pt", &[("k1", entry("Hello", ""))]);

        let mut project = load_project(tmp.path());
        let mut supplier = Scripted::new([Some("Olá")]);
        reconcile_project(&mut project, &mut supplier).unwrap();

        // segunda passada, recarregando do disco
        let mut project = load_project(tmp.path());
        let mut supplier = Scripted::new([]);
        let report = reconcile_project(&mut project, &mut supplier).unwrap();

        assert_eq!(report.keys_prompted, 0);
        assert!(supplier.prompted_langs.is_empty());
    }

    #[test]
    fn key_absent_from_one_language_counts_as_missing() {
        let tmp = tempfile::tempdir().unwrap();
        let locales = setup(tmp.path());
        write_lang(&locales, "en", &[("k1", entry("Hello", "Hello"))]);
        write_lang(&locales, "pt", &[]);

        let mut project = load_project(tmp.path());
        let mut supplier = Scripted::new([Some("Olá")]);
        reconcile_project(&mut project, &mut supplier).unwrap();

        let pt = store::load(&locales.join("pt.json")).unwrap();
        assert_eq!(pt["k1"].message, "Hello");
        assert_eq!(pt["k1"].translation, "Olá");
    }

    #[test]
    fn conflicting_source_messages_fail_loudly() {
        let tmp = tempfile::tempdir().unwrap();
        let locales = setup(tmp.path());
        write_lang(&locales, "en", &[("k1", entry("Hello", "Hello"))]);
        write_lang(&locales, "pt", &[("k1", entry("Goodbye", ""))]);

        let mut project = load_project(tmp.path());
        let mut supplier = Scripted::new([Some("Olá")]);
        let err = reconcile_project(&mut project, &mut supplier).unwrap_err();

        assert!(matches!(err, Error::MessageConflict { ref key, .. } if key == "k1"));
        assert!(supplier.prompted_keys.is_empty());
    }
}
