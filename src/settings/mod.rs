//! Password generation settings.

mod file;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pass::{Class, Request};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("cannot encode settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub length: usize,
    pub unique_chars: bool,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub punctuation: bool,
    pub include: String,
    pub exclude: String,
    pub number_of_passwords: usize,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, SettingsError> {
        file::load(&file::get_path())
    }

    pub fn save_to_file(&self) -> Result<(), SettingsError> {
        file::save(self, &file::get_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        file::save(self, path)
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        file::load(path)
    }

    pub fn path() -> PathBuf {
        file::get_path()
    }

    /// Enabled classes in canonical order.
    pub fn classes(&self) -> Vec<Class> {
        Class::ALL
            .into_iter()
            .filter(|class| self.has_class(*class))
            .collect()
    }

    pub fn has_class(&self, class: Class) -> bool {
        match class {
            Class::Lowercase => self.lowercase,
            Class::Uppercase => self.uppercase,
            Class::Digits => self.digits,
            Class::Punctuation => self.punctuation,
        }
    }

    pub fn set_classes(&mut self, classes: &[Class]) {
        self.lowercase = classes.contains(&Class::Lowercase);
        self.uppercase = classes.contains(&Class::Uppercase);
        self.digits = classes.contains(&Class::Digits);
        self.punctuation = classes.contains(&Class::Punctuation);
    }

    pub fn request(&self) -> Request {
        Request {
            length: self.length,
            unique_chars: self.unique_chars,
            classes: self.classes(),
            include: self.include.clone(),
            exclude: self.exclude.clone(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: 16,
            unique_chars: false,
            lowercase: true,
            uppercase: true,
            digits: true,
            punctuation: true,
            include: String::new(),
            exclude: String::new(),
            number_of_passwords: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_every_class() {
        let settings = Settings::default();
        assert_eq!(settings.classes(), Class::ALL.to_vec());
        assert_eq!(settings.request().charset().len(), 94);
    }

    #[test]
    fn set_classes_replaces_selection() {
        let mut settings = Settings::default();
        settings.set_classes(&[Class::Digits]);
        assert_eq!(settings.classes(), vec![Class::Digits]);
        assert!(!settings.lowercase);
    }
}
