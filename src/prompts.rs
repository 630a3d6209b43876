pub const EDIT_NAMED_CAREER: &str = include_str!("../data/prompts/edit_named_career.txt");
pub const EDIT_AUTO_CAREER: &str = include_str!("../data/prompts/edit_auto_career.txt");

/// Replace `{{key}}` placeholders in a template string.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        result = result.replace(&format!("{{{{{}}}}}", key), value);
    }
    result
}
