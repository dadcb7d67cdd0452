//! Bilingual text lookup
//!
//! Two language packs (English, Burmese) are bundled at build time as JSON
//! and parsed once when the `Translator` is constructed. Lookups follow a
//! fixed fallback chain: active language, then English, then the raw key.
//! The language is always an explicit parameter; there is no process-wide
//! language state.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const PACK_EN: &str = include_str!("../locales/en.json");
const PACK_MY: &str = include_str!("../locales/my.json");

/// Supported content languages. Burmese is the application default,
/// English is the fallback for missing keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    En,
    My,
}

impl Lang {
    pub const DEFAULT: Lang = Lang::My;
    pub const FALLBACK: Lang = Lang::En;

    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::My => "my",
        }
    }

    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "en" => Some(Lang::En),
            "my" => Some(Lang::My),
            _ => None,
        }
    }
}

// Unknown codes take the default language instead of failing the request.
impl<'de> Deserialize<'de> for Lang {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        Ok(Lang::from_code(&code).unwrap_or(Lang::DEFAULT))
    }
}

impl Default for Lang {
    fn default() -> Self {
        Lang::DEFAULT
    }
}

/// Key → string tables for every bundled language.
#[derive(Debug)]
pub struct Translator {
    packs: HashMap<Lang, HashMap<String, String>>,
}

impl Translator {
    /// Parse the bundled language packs. Fails only if a bundled pack is
    /// not valid JSON, which would be a packaging defect.
    pub fn load() -> Result<Self, serde_json::Error> {
        let mut packs = HashMap::new();
        packs.insert(Lang::En, serde_json::from_str(PACK_EN)?);
        packs.insert(Lang::My, serde_json::from_str(PACK_MY)?);
        Ok(Self { packs })
    }

    /// Look up `key` in `lang`, falling back to English, then to the key
    /// itself. Total: a missing key is never an error.
    pub fn translate<'a>(&'a self, lang: Lang, key: &'a str) -> &'a str {
        self.lookup(lang, key)
            .or_else(|| self.lookup(Lang::FALLBACK, key))
            .unwrap_or(key)
    }

    fn lookup(&self, lang: Lang, key: &str) -> Option<&str> {
        self.packs
            .get(&lang)
            .and_then(|pack| pack.get(key))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_parse_and_share_core_keys() {
        let translator = Translator::load().unwrap();
        for lang in [Lang::En, Lang::My] {
            assert_ne!(translator.translate(lang, "title"), "title");
            assert_ne!(
                translator.translate(lang, "placeholder_symptoms"),
                "placeholder_symptoms"
            );
        }
    }

    #[test]
    fn active_language_wins() {
        let translator = Translator::load().unwrap();
        assert_eq!(translator.translate(Lang::En, "tag_nutrition"), "Nutrition");
        assert_eq!(translator.translate(Lang::My, "tag_nutrition"), "အာဟာရ");
    }

    #[test]
    fn missing_burmese_key_falls_back_to_english() {
        let translator = Translator::load().unwrap();
        // "example_title" is only present in the English pack.
        assert_eq!(translator.translate(Lang::My, "example_title"), "Examples");
    }

    #[test]
    fn unknown_key_returns_the_key_itself() {
        let translator = Translator::load().unwrap();
        assert_eq!(
            translator.translate(Lang::My, "no_such_key_anywhere"),
            "no_such_key_anywhere"
        );
    }

    #[test]
    fn lang_deserializes_from_lowercase_codes() {
        let en: Lang = serde_json::from_str("\"en\"").unwrap();
        let my: Lang = serde_json::from_str("\"my\"").unwrap();
        assert_eq!(en, Lang::En);
        assert_eq!(my, Lang::My);
    }

    #[test]
    fn unknown_language_code_takes_the_default() {
        let lang: Lang = serde_json::from_str("\"de\"").unwrap();
        assert_eq!(lang, Lang::DEFAULT);
    }
}
