// File: crates/series-core/src/palette.rs
// Summary: Dark/Light color-hint presets for built-in series descriptors.
// Colors are opaque strings to this crate; the renderer interprets them.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub secondary_main: &'static str,
    pub secondary_600: &'static str,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            secondary_main: "#ffe3a3", // secondary 300
            secondary_600: "#cca752",
        }
    }

    pub fn light() -> Self {
        // light mode inverts the secondary ramp
        Self {
            name: "light",
            secondary_main: "#cca752",
            secondary_600: "#ffda85",
        }
    }

    /// Find a palette by its `name`, falling back to dark.
    pub fn find(name: &str) -> Self {
        presets()
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .unwrap_or_else(Self::dark)
    }
}

impl Default for Palette {
    fn default() -> Self { Self::dark() }
}

/// Return a list of built-in palette presets.
pub fn presets() -> Vec<Palette> {
    vec![Palette::dark(), Palette::light()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_is_case_insensitive_with_fallback() {
        assert_eq!(Palette::find("LIGHT").name, "light");
        assert_eq!(Palette::find("solarized").name, "dark");
    }
}
