//! CLI context - bundles settings, flags, and clipboard state.

use std::io::{self, Write};
use std::path::PathBuf;

use copypasta::{ClipboardContext, ClipboardProvider};
use tracing::debug;
use zeroize::Zeroize;

use safepass::pass::{self, Generated};
use safepass::settings::Settings;

use super::{CliFlags, prompts, quiet};

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub clipboard: Option<ClipboardContext>,
    pub flags: CliFlags,
    save_path: PathBuf,
}

impl Context {
    pub fn new(flags: CliFlags) -> Self {
        quiet::set(flags.quiet);

        let saved = if flags.default {
            Settings::default()
        } else {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {e}"));
                Settings::default()
            })
        };

        let mut ctx = Self {
            settings: saved,
            clipboard: None,
            flags,
            save_path: Settings::path(),
        };
        ctx.apply_flags();
        ctx
    }

    /// Run CLI. Validation failures come back as errors for the caller to report.
    pub fn run(&mut self) -> Result<(), safepass::Error> {
        quiet::set(self.flags.quiet);
        self.open_clipboard();

        let count = self.settings.number_of_passwords.max(1);
        let request = self.settings.request();
        debug!(?request, count, "generating");

        let generated = (0..count)
            .map(|_| pass::create(&request))
            .collect::<Result<Vec<_>, _>>()?;

        // Only options that produced a password are worth remembering.
        self.handle_save();
        self.output(&generated);
        Ok(())
    }

    /// Apply CLI flags on top of the loaded settings.
    fn apply_flags(&mut self) {
        if let Some(len) = self.flags.length {
            self.settings.length = len;
        }
        if let Some(num) = self.flags.number {
            self.settings.number_of_passwords = num;
        }
        if self.flags.unique {
            self.settings.unique_chars = true;
        }

        // Naming any class or custom chars replaces the saved selection.
        if self.flags.has_charset_args() {
            self.settings.set_classes(&self.flags.classes());
            self.settings.include = self.flags.include.clone().unwrap_or_default();
        }
        if let Some(ref exclude) = self.flags.exclude {
            self.settings.exclude = exclude.clone();
        }
    }

    fn handle_save(&self) {
        if !self.flags.save {
            return;
        }
        match self.settings.save_to(&self.save_path) {
            Ok(()) => prompts::settings_saved(&self.save_path.display().to_string()),
            Err(e) => prompts::warn(&format!("Failed to save settings: {e}")),
        }
    }

    fn open_clipboard(&mut self) {
        if !self.flags.clipboard {
            return;
        }
        match ClipboardContext::new() {
            Ok(c) => self.clipboard = Some(c),
            Err(e) => {
                debug!(error = %e, "clipboard unavailable");
                prompts::warn("Clipboard unavailable, printing to terminal instead.");
            }
        }
    }

    fn output(&mut self, generated: &[Generated]) {
        if let Some(ctx) = self.clipboard.as_mut() {
            let mut passwords = generated
                .iter()
                .map(|g| g.password.as_str())
                .collect::<Vec<_>>()
                .join("\n");
            match ctx.set_contents(passwords.clone()) {
                Ok(()) => prompts::clipboard_copied(generated.len()),
                Err(e) => prompts::clipboard_error(&e.to_string()),
            }
            passwords.zeroize();
        } else {
            let stdout = io::stdout();
            if let Err(e) = pass::output::write_passwords(&mut stdout.lock(), generated) {
                prompts::error(&format!("Failed to write passwords: {e}"));
                return;
            }
        }

        if !quiet::enabled() {
            self.print_meters(generated);
        }
    }

    fn print_meters(&self, generated: &[Generated]) {
        let color = quiet::stderr_is_terminal();
        let stderr = io::stderr();
        let mut err = stderr.lock();
        for g in generated {
            if pass::output::write_meter(&mut err, g, color).is_err() {
                break;
            }
        }
        let _ = err.flush();
    }
}
