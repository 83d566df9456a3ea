use serde::{Deserialize, Serialize};

/// Uma entrada de catálogo no formato lingui: o texto fonte é o mesmo em
/// todos os idiomas, só a tradução varia.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct MessageEntry {
    #[serde(default)]
    pub translation: String,

    #[serde(default)]
    pub message: String,

    #[serde(default)]
    pub comments: Vec<String>,
}

impl MessageEntry {
    pub fn new(message: impl Into<String>) -> Self {
        MessageEntry {
            translation: String::new(),
            message: message.into(),
            comments: Vec::new(),
        }
    }

    /// Tradução "real": não vazia depois de trim.
    pub fn has_translation(&self) -> bool {
        !self.translation.trim().is_empty()
    }
}
