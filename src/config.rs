use std::str::FromStr;

use crate::{cookie::SameSite, WEEK_SECONDS};

pub const CONTROL_ID: &str = "themeToggle";
pub const DARK_CLASS: &str = "dark-mode";
pub const COOKIE_NAME: &str = "theme";
pub const COOKIE_PATH: &str = "/";

const CLASS_ATTR: &str = "data-theme-class";
const COOKIE_ATTR: &str = "data-theme-cookie";
const PATH_ATTR: &str = "data-theme-path";
const MAX_AGE_ATTR: &str = "data-theme-max-age";
const SAME_SITE_ATTR: &str = "data-theme-same-site";
const SECURE_ATTR: &str = "data-theme-secure";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CookieConfig {
    pub name: String,
    pub path: String,
    pub max_age: u32,
    pub same_site: Option<SameSite>,
    pub secure: bool,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: COOKIE_NAME.to_string(),
            path: COOKIE_PATH.to_string(),
            max_age: WEEK_SECONDS,
            same_site: None,
            secure: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleConfig {
    pub control_id: String,
    pub dark_class: String,
    pub cookie: CookieConfig,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            control_id: CONTROL_ID.to_string(),
            dark_class: DARK_CLASS.to_string(),
            cookie: CookieConfig::default(),
        }
    }
}

/// parse an optional attribute value or return the default
fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

/// empty attribute values count as absent
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// values that end up verbatim in the cookie string must not carry separators
fn cookie_token(value: Option<String>) -> Option<String> {
    value.filter(|v| {
        !v.is_empty() && !v.contains(|c: char| c == ';' || c == '=' || c.is_whitespace())
    })
}

impl ToggleConfig {
    /// Build a configuration from the `data-theme-*` attributes of the control
    /// element, `lookup` returns the raw attribute value if it is set.
    pub fn from_attributes(control_id: &str, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = CookieConfig::default();

        Self {
            control_id: control_id.to_string(),
            dark_class: non_empty(lookup(CLASS_ATTR)).unwrap_or_else(|| DARK_CLASS.to_string()),
            cookie: CookieConfig {
                name: cookie_token(lookup(COOKIE_ATTR)).unwrap_or(defaults.name),
                path: cookie_token(lookup(PATH_ATTR)).unwrap_or(defaults.path),
                max_age: parse_or(lookup(MAX_AGE_ATTR), defaults.max_age),
                same_site: lookup(SAME_SITE_ATTR).and_then(|v| v.trim().parse().ok()),
                secure: parse_or(lookup(SECURE_ATTR).map(|v| v.to_ascii_lowercase()), false),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{ToggleConfig, CONTROL_ID};
    use crate::cookie::SameSite;

    fn lookup(attributes: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let attributes: HashMap<String, String> = attributes
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        move |name| attributes.get(name).cloned()
    }

    #[test]
    fn no_attributes_yields_defaults() {
        let config = ToggleConfig::from_attributes(CONTROL_ID, lookup(&[]));

        assert_eq!(config, ToggleConfig::default());
    }

    #[test]
    fn attributes_override_defaults() {
        let config = ToggleConfig::from_attributes(
            "switch",
            lookup(&[
                ("data-theme-class", "night"),
                ("data-theme-cookie", "colors"),
                ("data-theme-path", "/app"),
                ("data-theme-max-age", "3600"),
                ("data-theme-same-site", "strict"),
                ("data-theme-secure", "TRUE"),
            ]),
        );

        assert_eq!(config.control_id, "switch");
        assert_eq!(config.dark_class, "night");
        assert_eq!(config.cookie.name, "colors");
        assert_eq!(config.cookie.path, "/app");
        assert_eq!(config.cookie.max_age, 3600);
        assert_eq!(config.cookie.same_site, Some(SameSite::Strict));
        assert!(config.cookie.secure);
    }

    #[test]
    fn unparsable_attributes_fall_back() {
        let config = ToggleConfig::from_attributes(
            CONTROL_ID,
            lookup(&[
                ("data-theme-class", " "),
                ("data-theme-max-age", "a week"),
                ("data-theme-same-site", "sometimes"),
                ("data-theme-secure", "yes"),
            ]),
        );

        assert_eq!(config, ToggleConfig::default());
    }

    #[test]
    fn cookie_name_and_path_cannot_inject_attributes() {
        for (name, path) in [
            ("theme; Domain=evil.example", "/; Secure"),
            ("theme=x", "/a b"),
            ("", "/\t"),
        ] {
            let config = ToggleConfig::from_attributes(
                CONTROL_ID,
                lookup(&[("data-theme-cookie", name), ("data-theme-path", path)]),
            );

            assert_eq!(config.cookie.name, "theme");
            assert_eq!(config.cookie.path, "/");
        }
    }
}
