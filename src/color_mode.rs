/// Light/dark theme selector shared by the toggle control and everything
/// whose presentation depends on it. Lives in a reactive signal owned by the
/// page root for the session; never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    /// The only transition: Light becomes Dark, Dark becomes Light.
    pub fn toggle(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }

    /// Class applied to the page root; the stylesheet flips its variables
    /// off of this.
    pub fn css_class(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }

    /// Glyph shown on the toggle button for the current mode.
    pub fn icon(self) -> &'static str {
        match self {
            ColorMode::Light => "☀",
            ColorMode::Dark => "☾",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_light() {
        assert_eq!(ColorMode::default(), ColorMode::Light);
    }

    #[test]
    fn test_toggle_flips_both_ways() {
        assert_eq!(ColorMode::Light.toggle(), ColorMode::Dark);
        assert_eq!(ColorMode::Dark.toggle(), ColorMode::Light);
    }

    #[test]
    fn test_double_toggle_is_identity() {
        for mode in [ColorMode::Light, ColorMode::Dark] {
            assert_eq!(mode.toggle().toggle(), mode);
        }
    }
}
