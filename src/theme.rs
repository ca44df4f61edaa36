use std::{fmt, str::FromStr};

const DARK: &str = "dark";
const LIGHT: &str = "light";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// the token stored in the theme cookie
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => LIGHT,
            Theme::Dark => DARK,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// the page is dark exactly when the marker class is present on the body
    pub fn from_dark_class(present: bool) -> Self {
        if present {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownTheme(pub String);

impl fmt::Display for UnknownTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown theme {:?}", self.0)
    }
}

impl std::error::Error for UnknownTheme {}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            DARK => Ok(Theme::Dark),
            LIGHT => Ok(Theme::Light),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Theme;

    #[test]
    fn tokens() {
        assert_eq!(Theme::Dark.as_str(), "dark");
        assert_eq!(Theme::Light.to_string(), "light");
    }

    #[test]
    fn toggled_is_an_involution() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_ne!(theme.toggled(), theme);
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn class_presence() {
        assert_eq!(Theme::from_dark_class(true), Theme::Dark);
        assert_eq!(Theme::from_dark_class(false), Theme::Light);
    }

    #[test]
    fn parse() {
        assert_eq!("dark".parse(), Ok(Theme::Dark));
        assert_eq!("light".parse(), Ok(Theme::Light));
        assert!("Dark".parse::<Theme>().is_err());
        assert!("".parse::<Theme>().is_err());
    }
}
