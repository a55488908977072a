//! CLI context: bundles flags, settings and per-run output targets.

use chrono::Local;
use copypasta::{ClipboardContext, ClipboardProvider};
use tracing::{debug, info};
use zeroize::Zeroize;

use persopass::entropy::Source;
use persopass::pass::{self, FormInput, GeneratorConfig, output};
use persopass::settings::{self, Settings};
use persopass::{Error, Result};

use super::{Args, prompts};

const DEFAULT_OUTPUT_FILE: &str = "persopass.txt";

pub struct Context {
    pub settings: Settings,
    output_file: Option<String>,
    clipboard: Option<ClipboardContext>,
    args: Args,
}

impl Context {
    pub fn new(args: Args) -> Self {
        prompts::set_quiet(args.quiet);

        let settings = Settings::load_from_file().unwrap_or_else(|e| {
            prompts::warn(&format!("Failed to load settings: {e}"));
            Settings::default()
        });

        Self {
            settings,
            output_file: None,
            clipboard: None,
            args,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        self.apply_flags()?;
        self.handle_save()?;

        let config = self.form().validate(Local::now().date_naive())?;
        self.generate_output(&config)
    }

    fn source(&self) -> Source {
        self.args.source(self.settings.urandom)
    }

    /// Flags override the saved defaults.
    fn apply_flags(&mut self) -> Result<()> {
        if let Some(length) = self.args.length {
            self.settings.pass_length = length;
        }
        if let Some(strength) = self.args.strength {
            self.settings.strength = strength;
        }
        if let Some(number) = self.args.number {
            self.settings.number_of_passwords = number;
        }
        if self.args.urandom {
            self.settings.urandom = true;
        } else if self.args.no_urandom {
            self.settings.urandom = false;
        }

        self.output_file = self.args.output.as_deref().map(output_path);

        if self.args.clipboard {
            match ClipboardContext::new() {
                Ok(ctx) => self.clipboard = Some(ctx),
                Err(e) => {
                    if !prompts::clipboard_fallback_prompt() {
                        return Err(Error::Clipboard(e.to_string()));
                    }
                    prompts::warn("Clipboard unavailable, printing instead");
                }
            }
        }
        Ok(())
    }

    fn handle_save(&mut self) -> Result<()> {
        if !self.args.save {
            return Ok(());
        }
        self.settings.save_to_file()?;
        prompts::settings_saved(&settings::default_path().display().to_string());
        Ok(())
    }

    fn form(&self) -> FormInput {
        let field = |value: &Option<String>| value.clone().unwrap_or_default();
        FormInput {
            first_name: field(&self.args.first_name),
            last_name: field(&self.args.last_name),
            birth_date: field(&self.args.birth_date),
            lucky_number: field(&self.args.lucky_number),
            length: self.settings.pass_length.to_string(),
            strength: self.settings.strength.to_string(),
        }
    }

    /// Generate passwords and send them to the clipboard, a file or stdout.
    pub fn generate_output(&mut self, config: &GeneratorConfig) -> Result<()> {
        let count = self.settings.number_of_passwords;
        let source = self.source();
        let mut rng = source.into_rng();

        info!(
            source = source.name(),
            count,
            length = config.length(),
            strength = %config.strength(),
            "generating passwords"
        );

        let mut passwords = if self.args.explain {
            (0..count)
                .map(|_| {
                    let mut composition = pass::compose(config, rng.as_mut());
                    prompts::explain(&composition.fragments, &composition.shuffled);
                    std::mem::take(&mut composition.password)
                })
                .collect()
        } else {
            pass::generate_batch(config, count, rng.as_mut())
        };

        let result = self.emit(&passwords);
        passwords.zeroize();
        result
    }

    fn emit(&mut self, passwords: &[String]) -> Result<()> {
        if let Some(ctx) = self.clipboard.as_mut() {
            let mut joined = passwords.join("\n");
            let copied = ctx.set_contents(joined.clone());
            joined.zeroize();
            return match copied {
                Ok(()) => {
                    if let Ok(mut retrieved) = ctx.get_contents() {
                        retrieved.zeroize();
                    }
                    prompts::clipboard_copied(passwords.len());
                    Ok(())
                }
                Err(e) => Err(Error::Clipboard(e.to_string())),
            };
        }

        if let Some(ref file) = self.output_file {
            let path = std::path::Path::new(file);
            output::append_to_file(path, passwords)?;
            let full_path = std::fs::canonicalize(path)
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| file.clone());
            prompts::passwords_written(passwords.len(), &full_path);
            return Ok(());
        }

        debug!(count = passwords.len(), "writing to stdout");
        output::write_batch(passwords, std::io::stdout().lock())?;
        Ok(())
    }
}

/// `.` and trailing `/` name a directory; anything else gets a `.txt` suffix.
fn output_path(path: &str) -> String {
    if path == "." {
        DEFAULT_OUTPUT_FILE.to_string()
    } else if path.ends_with('/') {
        format!("{path}{DEFAULT_OUTPUT_FILE}")
    } else if !path.ends_with(".txt") {
        format!("{path}.txt")
    } else {
        path.to_string()
    }
}
