//! Line prompts on top of dialoguer.

use anyhow::Result;
use dialoguer::Input;

/// Read a line of text. Empty input is allowed.
pub fn text(prompt: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(format!("  {}", prompt))
        .allow_empty(true)
        .interact_text()?;
    Ok(input)
}

/// Read a line and parse it, returning `None` when it does not parse.
pub fn parsed<T: std::str::FromStr>(prompt: &str) -> Result<Option<T>> {
    Ok(text(prompt)?.trim().parse().ok())
}
