/// Turns a color token from the options into something SVG can paint with.
pub trait ColorResolver {
    fn resolve(&self, token: Option<&str>) -> String;
}

/// Palette tokens such as `red.6` become `var(--clock-color-red-6)`; anything else is
/// already a CSS color and passes through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeColors;

impl ColorResolver for ThemeColors {
    fn resolve(&self, token: Option<&str>) -> String {
        let token = match token.map(str::trim) {
            Some(token) if !token.is_empty() => token,
            _ => return "currentColor".to_string(),
        };
        match token.split_once('.') {
            Some((name, shade))
                if !name.is_empty()
                    && name.chars().all(|c| c.is_ascii_alphabetic() || c == '-')
                    && !shade.is_empty()
                    && shade.chars().all(|c| c.is_ascii_digit()) =>
            {
                format!("var(--clock-color-{name}-{shade})")
            }
            _ => token.to_string(),
        }
    }
}
