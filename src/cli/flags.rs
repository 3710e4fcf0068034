use clap::Parser;

use safepass::pass::Class;

#[derive(Parser, Debug, Default)]
#[clap(author, version, about, long_about = None)]
pub struct CliFlags {
    /// Password length
    #[clap(short = 'l', long = "length")]
    pub length: Option<usize>,
    /// Number of passwords to generate
    #[clap(short = 'n', long = "number")]
    pub number: Option<usize>,
    /// Don't repeat characters
    #[clap(short = 'u', long = "unique")]
    pub unique: bool,
    /// Include lowercase letters (abcd...)
    #[clap(short = 'a', long = "lowercase")]
    pub lowercase: bool,
    /// Include uppercase letters (ABCD...)
    #[clap(short = 'A', long = "uppercase")]
    pub uppercase: bool,
    /// Include digits (0123...)
    #[clap(short = 'd', long = "digits")]
    pub digits: bool,
    /// Include punctuation characters (~!@#...)
    #[clap(short = 'p', long = "punctuation")]
    pub punctuation: bool,
    /// Include custom characters
    #[clap(short = 'i', long = "include", value_name = "CHARS")]
    pub include: Option<String>,
    /// Exclude custom characters
    #[clap(short = 'x', long = "exclude", value_name = "CHARS")]
    pub exclude: Option<String>,
    /// Copy to the clipboard instead of printing
    #[clap(short = 'b', long = "board")]
    pub clipboard: bool,
    /// Suppress the strength meter and warnings
    #[clap(short = 'q', long = "quiet")]
    pub quiet: bool,
    /// Save the effective options as defaults
    #[clap(long = "save")]
    pub save: bool,
    /// Ignore saved settings
    #[clap(long = "defaults", conflicts_with = "save")]
    pub default: bool,
}

impl CliFlags {
    /// Classes named on the command line, in canonical order.
    pub fn classes(&self) -> Vec<Class> {
        Class::ALL
            .into_iter()
            .filter(|class| match class {
                Class::Lowercase => self.lowercase,
                Class::Uppercase => self.uppercase,
                Class::Digits => self.digits,
                Class::Punctuation => self.punctuation,
            })
            .collect()
    }

    /// True when the command line chooses the charset itself.
    pub fn has_charset_args(&self) -> bool {
        !self.classes().is_empty() || self.include.is_some()
    }
}
