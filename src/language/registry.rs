use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use indexmap::IndexMap;

use crate::config::CustomLanguageConfig;
use crate::error::{Result, ScanError};

use super::LanguageRules;
use super::builtin;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    pub name: String,
    /// Extra ids accepted by lookup (`cpp` for C++, `sh` for Shell).
    pub aliases: Vec<String>,
    pub extensions: Vec<String>,
    /// Exact file names without a useful extension (`Makefile`, `Dockerfile`).
    pub filenames: Vec<String>,
    pub rules: LanguageRules,
}

impl Language {
    #[must_use]
    pub fn new(name: &str, extensions: &[&str], rules: LanguageRules) -> Self {
        Self {
            name: name.to_string(),
            aliases: Vec::new(),
            extensions: extensions.iter().map(ToString::to_string).collect(),
            filenames: Vec::new(),
            rules,
        }
    }

    #[must_use]
    pub fn with_aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases = aliases.iter().map(ToString::to_string).collect();
        self
    }

    #[must_use]
    pub fn with_filenames(mut self, filenames: &[&str]) -> Self {
        self.filenames = filenames.iter().map(ToString::to_string).collect();
        self
    }
}

/// Lookup table from language ids, aliases and extensions to rules.
///
/// Ids are matched case-insensitively. Registering a language whose name is
/// already present replaces the earlier entry.
#[derive(Debug, Clone, Default)]
pub struct LanguageRegistry {
    languages: Vec<Language>,
    ids: HashMap<String, usize>,
    extensions: HashMap<String, usize>,
    filenames: HashMap<String, usize>,
}

static BUILTIN: LazyLock<LanguageRegistry> = LazyLock::new(|| {
    let mut registry = LanguageRegistry::new();
    for language in builtin::languages() {
        registry.register(language);
    }
    registry
});

/// Rules for `language_id` from the built-in table.
///
/// # Errors
/// Returns [`ScanError::UnknownLanguage`] if no built-in language matches.
pub fn rules_for(language_id: &str) -> Result<&'static LanguageRules> {
    LanguageRegistry::builtin().rules_for(language_id)
}

impl LanguageRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide built-in table, initialized on first use.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    pub fn register(&mut self, language: Language) {
        let key = language.name.to_lowercase();
        let idx = if let Some(&existing) = self.ids.get(&key) {
            self.unindex(existing);
            self.languages[existing] = language;
            existing
        } else {
            self.languages.push(language);
            self.languages.len() - 1
        };
        self.index(idx);
    }

    fn index(&mut self, idx: usize) {
        let language = &self.languages[idx];
        self.ids.insert(language.name.to_lowercase(), idx);
        for alias in &language.aliases {
            self.ids.insert(alias.to_lowercase(), idx);
        }
        for ext in &language.extensions {
            self.extensions.insert(ext.to_lowercase(), idx);
        }
        for name in &language.filenames {
            self.filenames.insert(name.clone(), idx);
        }
    }

    fn unindex(&mut self, idx: usize) {
        self.ids.retain(|_, &mut i| i != idx);
        self.extensions.retain(|_, &mut i| i != idx);
        self.filenames.retain(|_, &mut i| i != idx);
    }

    /// Find a language by name, alias or extension (case-insensitive).
    #[must_use]
    pub fn get(&self, language_id: &str) -> Option<&Language> {
        let key = language_id.trim().trim_start_matches('.').to_lowercase();
        self.ids
            .get(&key)
            .or_else(|| self.extensions.get(&key))
            .map(|&idx| &self.languages[idx])
    }

    /// # Errors
    /// Returns [`ScanError::UnknownLanguage`] if no language matches `language_id`.
    pub fn rules_for(&self, language_id: &str) -> Result<&LanguageRules> {
        self.get(language_id)
            .map(|lang| &lang.rules)
            .ok_or_else(|| ScanError::UnknownLanguage(language_id.to_string()))
    }

    #[must_use]
    pub fn get_by_extension(&self, ext: &str) -> Option<&Language> {
        self.extensions
            .get(&ext.to_lowercase())
            .map(|&idx| &self.languages[idx])
    }

    /// Detect the language of a file from its name, then its extension.
    #[must_use]
    pub fn detect(&self, path: &Path) -> Option<&Language> {
        let by_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| self.filenames.get(name))
            .map(|&idx| &self.languages[idx]);

        by_name.or_else(|| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .and_then(|ext| self.get_by_extension(ext))
        })
    }

    #[must_use]
    pub fn all(&self) -> &[Language] {
        &self.languages
    }

    /// Every extension the registry knows, sorted.
    #[must_use]
    pub fn extensions(&self) -> Vec<String> {
        let mut extensions: Vec<String> = self.extensions.keys().cloned().collect();
        extensions.sort();
        extensions
    }

    /// Built-in table extended with languages from configuration.
    ///
    /// # Errors
    /// Returns [`ScanError::InvalidLanguageDefinition`] if a custom entry is malformed.
    pub fn with_custom_languages(custom: &IndexMap<String, CustomLanguageConfig>) -> Result<Self> {
        let mut registry = Self::builtin().clone();

        for (name, config) in custom {
            let rules = config.to_rules(name)?;
            let language = Language {
                name: name.clone(),
                aliases: Vec::new(),
                extensions: config.extensions.clone(),
                filenames: Vec::new(),
                rules,
            };
            registry.register(language);
        }

        Ok(registry)
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
