use chrono::Local;
use copypasta::{ClipboardContext, ClipboardProvider};
use rand::RngCore;
use tracing::{debug, warn};
use zeroize::Zeroize;

use persopass::Result;
use persopass::pass::{FormInput, GeneratorConfig, Strength, generate};
use persopass::settings::Settings;

use super::input::{Accept, read_choice, read_field};
use super::text::{print_form_header, print_result, result_prompt, strength_prompt};
use crate::cli::Args;
use crate::terminal::{clear, print_error, print_success, reset_terminal};

/// Fill the form, show a password, repeat until the user quits.
pub fn run(args: &Args) -> Result<()> {
    reset_terminal();

    let settings = Settings::load_from_file().unwrap_or_else(|e| {
        warn!(error = %e, "failed to load settings, using defaults");
        Settings::default()
    });

    let mut form = FormInput {
        length: args.length.unwrap_or(settings.pass_length).to_string(),
        strength: args.strength.unwrap_or(settings.strength).to_string(),
        ..Default::default()
    };
    let source = args.source(settings.urandom);
    let mut rng = source.into_rng();
    let mut clipboard: Option<ClipboardContext> = None;
    let mut error: Option<String> = None;

    loop {
        clear();
        print_form_header(source.name());
        if let Some(msg) = error.take() {
            print_error(&format!("\u{26a0}\u{fe0f} {msg}"));
            println!();
        }

        if !fill(&mut form) {
            break;
        }

        let config = match form.validate(Local::now().date_naive()) {
            Ok(config) => config,
            Err(e) => {
                debug!(error = %e, "form rejected");
                error = Some(e.to_string());
                continue;
            }
        };

        if !show_result(&config, rng.as_mut(), &mut clipboard) {
            break;
        }
    }

    clear();
    Ok(())
}

/// Prompt for every field. `false` when the user backs out.
fn fill(form: &mut FormInput) -> bool {
    let fields: [(&str, &mut String, Accept); 5] = [
        ("First name", &mut form.first_name, Accept::Any),
        ("Last name", &mut form.last_name, Accept::Any),
        ("Birth date", &mut form.birth_date, Accept::Date),
        ("Lucky number", &mut form.lucky_number, Accept::Digits),
        ("Length", &mut form.length, Accept::Digits),
    ];

    for (prompt, value, accept) in fields {
        match read_field(prompt, value.as_str(), accept) {
            Some(entered) => *value = entered,
            None => return false,
        }
    }

    let current = form.strength.parse::<Strength>().unwrap_or_default();
    let position = Strength::ALL.iter().position(|&s| s == current).unwrap_or(0);
    let default = char::from(b'1' + position as u8);

    let Some(choice) = read_choice(&strength_prompt(position + 1), "123", default) else {
        return false;
    };
    let index = choice.to_digit(10).map_or(0, |d| d as usize - 1);
    form.strength = Strength::ALL[index].to_string();
    true
}

/// Show generated passwords. `true` to edit the form again, `false` to quit.
fn show_result(
    config: &GeneratorConfig,
    rng: &mut dyn RngCore,
    clipboard: &mut Option<ClipboardContext>,
) -> bool {
    let mut password = generate(config, rng);
    let mut status: Option<std::result::Result<String, String>> = None;

    let edit = loop {
        clear();
        print_result(&password, config);
        match status.take() {
            Some(Ok(msg)) => print_success(&msg),
            Some(Err(msg)) => print_error(&msg),
            None => {}
        }

        match read_choice(result_prompt(), "rceq", 'r') {
            Some('r') => {
                password.zeroize();
                password = generate(config, rng);
            }
            Some('c') => status = Some(copy(clipboard, &password)),
            Some('e') => break true,
            _ => break false,
        }
    };

    password.zeroize();
    edit
}

fn copy(
    clipboard: &mut Option<ClipboardContext>,
    password: &str,
) -> std::result::Result<String, String> {
    if clipboard.is_none() {
        let ctx = ClipboardContext::new()
            .map_err(|e| format!("\u{26a0}\u{fe0f} Clipboard unavailable: {e}"))?;
        *clipboard = Some(ctx);
    }
    let Some(ctx) = clipboard.as_mut() else {
        return Err("\u{26a0}\u{fe0f} Clipboard unavailable".to_string());
    };

    ctx.set_contents(password.to_string())
        .map(|()| "\u{2705} Password copied successfully!".to_string())
        .map_err(|e| format!("\u{26a0}\u{fe0f} Clipboard error: {e}"))
}
