use std::{fmt, str::FromStr};

use crate::{config::CookieConfig, theme::Theme};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SameSite {
    Lax,
    Strict,
    None,
}

impl SameSite {
    pub fn as_str(self) -> &'static str {
        match self {
            SameSite::Lax => "Lax",
            SameSite::Strict => "Strict",
            SameSite::None => "None",
        }
    }
}

impl FromStr for SameSite {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lax" => Ok(SameSite::Lax),
            "strict" => Ok(SameSite::Strict),
            "none" => Ok(SameSite::None),
            _ => Err(()),
        }
    }
}

/// A single `document.cookie` assignment carrying the theme token
pub struct ThemeCookie<'a> {
    config: &'a CookieConfig,
    value: Theme,
}

impl<'a> ThemeCookie<'a> {
    pub fn new(config: &'a CookieConfig, value: Theme) -> Self {
        Self { config, value }
    }
}

impl fmt::Display for ThemeCookie<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}={}; path={}; max-age={}",
            self.config.name, self.value, self.config.path, self.config.max_age
        )?;

        if let Some(same_site) = self.config.same_site {
            write!(f, "; SameSite={}", same_site.as_str())?;
        }

        // browsers drop SameSite=None cookies that are not Secure
        if self.config.secure || self.config.same_site == Some(SameSite::None) {
            f.write_str("; Secure")?;
        }

        Ok(())
    }
}

/// find the theme stored under `name` in a `document.cookie` style string,
/// values other than the two theme tokens are ignored
pub fn read_theme(cookies: &str, name: &str) -> Option<Theme> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .and_then(|(_, value)| value.trim().parse().ok())
}
