use std::io::{self, BufRead, Write};

use crate::services::reconcile::TranslationSupplier;

/// Supplier interativo: mostra o contexto do key no stdout, lê uma linha do
/// stdin por idioma faltante e limpa a tela entre um key e o próximo.
pub struct StdinSupplier {
    clear_screen: bool,
}

impl StdinSupplier {
    pub fn new() -> Self {
        StdinSupplier { clear_screen: true }
    }
}

impl Default for StdinSupplier {
    fn default() -> Self {
        StdinSupplier::new()
    }
}

impl TranslationSupplier for StdinSupplier {
    fn begin_key(&mut self, key: &str, message: &str, translated: &[(String, String)]) {
        println!("[{key}] {message}");
        for (lang, translation) in translated {
            println!("  {lang}: {translation}");
        }
    }

    fn supply(&mut self, lang: &str) -> Option<String> {
        print!("Enter translation for [{lang}]: ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            // EOF: o operador fechou a entrada, trata como resposta vazia
            Ok(0) => None,
            Ok(_) => {
                let answer = line.trim_end_matches(['\r', '\n']).to_string();
                if answer.is_empty() {
                    None
                } else {
                    Some(answer)
                }
            }
            Err(_) => None,
        }
    }

    fn end_key(&mut self) {
        if self.clear_screen {
            print!("\x1b[2J\x1b[1;1H");
            let _ = io::stdout().flush();
        }
    }
}
