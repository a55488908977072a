use persopass::pass::{GeneratorConfig, MAX_LENGTH, MIN_LENGTH};

use crate::terminal::{
    BOLD, DIM, RESET, box_bottom, box_line, box_line_center, box_top, print_rule,
};

pub fn print_form_header(source: &str) {
    box_top("persopass");
    box_line_center("Build a password from your details");
    print_rule();
    box_line("[Enter] Accept field  [Esc] Quit  [Ctrl+U] Clear");
    box_line(&format!(
        "{DIM}Birth date: YYYY-MM-DD or DD-MM-YYYY{RESET}"
    ));
    box_line(&format!(
        "{DIM}Length: {MIN_LENGTH}-{MAX_LENGTH} \u{2022} Randomness: {source}{RESET}"
    ));
    box_bottom();
    println!();
}

pub fn print_result(password: &str, config: &GeneratorConfig) {
    box_top("Password");
    box_line("");
    box_line_center(&format!("{BOLD}{password}{RESET}"));
    box_line("");
    print_rule();
    box_line(&format!(
        "Length: {} \u{2022} Strength: {}",
        config.length(),
        config.strength()
    ));
    box_bottom();
    println!();
}

pub fn strength_prompt(current: usize) -> String {
    format!("Strength  1) Normal  2) Medium  3) Strong [{current}]:")
}

pub fn result_prompt() -> &'static str {
    "[Enter/r] Regenerate  [c] Copy  [e] Edit  [q] Quit:"
}
