use firecat::config::ConfigWarning;

use crate::ui::theme::{colors, icon, icons, icons_ascii, paint};

pub fn print_config_warnings(warnings: &[ConfigWarning]) {
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("⚠ Unknown config key '{}' in {}:{}", w.key, w.file.display(), line);
        } else {
            eprintln!("⚠ Unknown config key '{}' in {}", w.key, w.file.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}

/// One-line error rendering for the terminal
pub fn format_error(err: &anyhow::Error, color: bool, unicode: bool) -> String {
    format!(
        "{} {}",
        paint(color, icon(unicode, icons::ERROR, icons_ascii::ERROR), colors::ERROR),
        err
    )
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "message": err.to_string(),
        });
        println!("{}", output);
        return;
    }

    let caps = crate::ui::terminal::detect_capabilities();
    if caps.is_ci && std::env::var("GITHUB_ACTIONS").is_ok() {
        println!("::error title=firecat::{}", err);
    }

    eprintln!(
        "{}",
        format_error(err, caps.supports_color, caps.supports_unicode)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_error_plain() {
        let err = anyhow::anyhow!("entry module not found: src/main.js");
        assert_eq!(
            format_error(&err, false, false),
            "[FAIL] entry module not found: src/main.js"
        );
    }
}
