use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Placeholder pattern: `{{ env.VAR }}` or `{{ env.VAR | default("fallback") }}`
fn placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"\{\{\s*env\.([A-Za-z0-9_]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#)
            .expect("must be valid regex")
    })
}

/// Expand `{{ env.VAR }}` placeholders in a raw TOML string
///
/// An unset variable is an error unless the placeholder carries a
/// `default("…")` clause. TOML comment lines pass through unexpanded so a
/// commented-out credential line does not fail the load.
pub fn expand_env(input: &str) -> Result<String, String> {
    let mut failure: Option<String> = None;

    let expanded = input
        .lines()
        .map(|line| {
            if line.trim_start().starts_with('#') {
                return line.to_owned();
            }

            placeholder()
                .replace_all(line, |caps: &Captures<'_>| {
                    let var = &caps[1];
                    match std::env::var(var) {
                        Ok(value) => value,
                        Err(_) => match caps.get(2) {
                            Some(default) => default.as_str().to_owned(),
                            None => {
                                failure.get_or_insert_with(|| {
                                    format!("environment variable not found: `{var}`")
                                });
                                String::new()
                            }
                        },
                    }
                })
                .into_owned()
        })
        .collect::<Vec<_>>()
        .join("\n");

    if let Some(error) = failure {
        return Err(error);
    }

    // lines() drops a trailing newline
    if input.ends_with('\n') {
        return Ok(expanded + "\n");
    }

    Ok(expanded)
}
