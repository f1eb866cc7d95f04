//! Prompt construction.
//!
//! The system prompt is either a provider-supplied template rendered with
//! the call arguments, or a fixed instruction when the provider configures
//! none. The user prompt always has the same fixed shape.

/// System prompt used when the provider configures no template.
pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are a professional, authentic machine translation engine.";

/// Render `{{name}}` placeholders in a template.
///
/// Placeholders with no matching value are left in place.
pub fn render_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut rendered = template.to_string();
    for (name, value) in values {
        rendered = rendered.replace(&format!("{{{{{name}}}}}"), value);
    }
    rendered
}

/// Build the system prompt for one call.
pub fn system_prompt(
    template: Option<&str>,
    source_language: &str,
    target_language: &str,
    text: &str,
) -> String {
    match template {
        Some(template) => render_template(
            template,
            &[
                ("sourceLanguage", source_language),
                ("targetLanguage", target_language),
                ("content", text),
            ],
        ),
        None => DEFAULT_SYSTEM_PROMPT.to_string(),
    }
}

/// Build the fixed-format user prompt for one call.
pub fn user_prompt(text: &str, source_language: &str, target_language: &str) -> String {
    format!(
        "Translate the following text from {source_language} to {target_language}: \"{text}\". Don't say anything else."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_substitutes_all_placeholders() {
        let rendered = system_prompt(
            Some("Translate from {{sourceLanguage}} to {{targetLanguage}}: {{content}}"),
            "English",
            "French",
            "Hello",
        );
        assert_eq!(rendered, "Translate from English to French: Hello");
    }

    #[test]
    fn repeated_placeholders_are_all_replaced() {
        let rendered = render_template("{{a}} and {{a}}", &[("a", "x")]);
        assert_eq!(rendered, "x and x");
    }

    #[test]
    fn missing_template_yields_the_fixed_instruction() {
        assert_eq!(
            system_prompt(None, "English", "French", "Hello"),
            DEFAULT_SYSTEM_PROMPT
        );
    }

    #[test]
    fn user_prompt_has_the_fixed_shape() {
        assert_eq!(
            user_prompt("Hello", "English", "French"),
            "Translate the following text from English to French: \"Hello\". Don't say anything else."
        );
    }
}
