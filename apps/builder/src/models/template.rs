use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The three supported layouts. Persisted as a bare lowercase string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    #[default]
    Classic,
    Modern,
    Minimal,
}

impl TemplateId {
    #[cfg(test)]
    pub const ALL: [TemplateId; 3] = [TemplateId::Classic, TemplateId::Modern, TemplateId::Minimal];

    pub fn as_str(self) -> &'static str {
        match self {
            TemplateId::Classic => "classic",
            TemplateId::Modern => "modern",
            TemplateId::Minimal => "minimal",
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown template '{0}' (expected classic, modern or minimal)")]
pub struct UnknownTemplate(pub String);

impl FromStr for TemplateId {
    type Err = UnknownTemplate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "classic" => Ok(TemplateId::Classic),
            "modern" => Ok(TemplateId::Modern),
            "minimal" => Ok(TemplateId::Minimal),
            other => Err(UnknownTemplate(other.to_string())),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Accent color
// ────────────────────────────────────────────────────────────────────────────

/// Named presets offered by the theme picker, in picker order.
pub const ACCENT_PRESETS: &[(&str, &str)] = &[
    ("Teal", "hsl(168, 60%, 40%)"),
    ("Navy", "hsl(220, 60%, 35%)"),
    ("Burgundy", "hsl(345, 60%, 35%)"),
    ("Forest", "hsl(150, 50%, 30%)"),
    ("Charcoal", "hsl(0, 0%, 25%)"),
];

pub const DEFAULT_ACCENT: &str = "hsl(168, 60%, 40%)";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccentColorError {
    #[error("accent color cannot be empty")]
    Empty,
    #[error("accent color '{0}' contains characters not allowed in a CSS color")]
    ForbiddenCharacter(String),
}

/// A CSS color string. Any color syntax is accepted as long as it cannot
/// break out of a style declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccentColor(String);

impl AccentColor {
    pub fn parse(raw: &str) -> Result<Self, AccentColorError> {
        let value = raw.trim();
        if value.is_empty() {
            return Err(AccentColorError::Empty);
        }
        if value.chars().any(|c| matches!(c, ';' | '{' | '}' | '<' | '>')) {
            return Err(AccentColorError::ForbiddenCharacter(value.to_string()));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Preset name when this color is one of the picker swatches.
    pub fn preset_name(&self) -> Option<&'static str> {
        ACCENT_PRESETS
            .iter()
            .find(|(_, value)| *value == self.0)
            .map(|(name, _)| *name)
    }
}

impl Default for AccentColor {
    fn default() -> Self {
        Self(DEFAULT_ACCENT.to_string())
    }
}

impl fmt::Display for AccentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for AccentColor {
    type Error = AccentColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        AccentColor::parse(&value)
    }
}

impl From<AccentColor> for String {
    fn from(color: AccentColor) -> Self {
        color.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_round_trips_through_str() {
        for id in TemplateId::ALL {
            assert_eq!(id.as_str().parse::<TemplateId>().unwrap(), id);
        }
    }

    #[test]
    fn test_unknown_template_is_rejected() {
        let err = "brutalist".parse::<TemplateId>().unwrap_err();
        assert_eq!(err, UnknownTemplate("brutalist".to_string()));
        assert!("".parse::<TemplateId>().is_err());
        assert!("Modern".parse::<TemplateId>().is_err());
    }

    #[test]
    fn test_accent_accepts_any_css_color() {
        assert_eq!(AccentColor::parse(" #112233 ").unwrap().as_str(), "#112233");
        assert!(AccentColor::parse("rebeccapurple").is_ok());
    }

    #[test]
    fn test_accent_rejects_empty_and_injection() {
        assert_eq!(AccentColor::parse("  "), Err(AccentColorError::Empty));
        assert!(matches!(
            AccentColor::parse("red; background: url(x)"),
            Err(AccentColorError::ForbiddenCharacter(_))
        ));
    }

    #[test]
    fn test_default_accent_is_teal_preset() {
        assert_eq!(AccentColor::default().preset_name(), Some("Teal"));
        assert_eq!(AccentColor::parse("hsl(220, 60%, 35%)").unwrap().preset_name(), Some("Navy"));
    }
}
