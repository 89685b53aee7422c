use std::collections::HashMap;

/// Placeholder translation service behind the multi-language premium
/// endpoint. Substitutes a handful of common support phrases from a
/// static table and leaves everything else untouched; constructed once
/// in startup and passed as app data, never a global.
#[derive(Debug, Clone)]
pub struct Translator {
    phrases: HashMap<&'static str, Vec<(&'static str, &'static str)>>,
}

impl Translator {
    pub fn new() -> Self {
        // longer keys first, so "returns" is not mangled by the "return" substitution
        let mut phrases: HashMap<&'static str, Vec<(&'static str, &'static str)>> = HashMap::new();
        phrases.insert(
            "es",
            vec![
                ("returns", "devoluciones"),
                ("return", "devolución"),
                ("shipping", "envío"),
                ("support", "soporte"),
                ("hello", "hola"),
            ],
        );
        phrases.insert(
            "fr",
            vec![
                ("returns", "retours"),
                ("return", "retour"),
                ("shipping", "livraison"),
                ("support", "assistance"),
                ("hello", "bonjour"),
            ],
        );
        phrases.insert(
            "de",
            vec![
                ("returns", "Rückgaben"),
                ("return", "Rückgabe"),
                ("shipping", "Versand"),
                ("support", "Support"),
                ("hello", "hallo"),
            ],
        );

        Self { phrases }
    }

    pub fn supports(&self, language: &str) -> bool {
        self.phrases.contains_key(language)
    }

    pub fn translate(&self, text: &str, language: &str) -> Option<String> {
        let table = self.phrases.get(language)?;
        let mut translated = text.to_string();
        for (from, to) in table {
            translated = translated.replace(from, to);
        }
        Some(translated)
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}
