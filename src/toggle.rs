use crate::{config::ToggleConfig, cookie::ThemeCookie, error::Result, theme::Theme};

/// The root visual container whose marker class selects the theme
pub trait ThemeTarget {
    fn has_class(&self, class: &str) -> Result<bool>;
    fn add_class(&self, class: &str) -> Result<()>;
    fn remove_class(&self, class: &str) -> Result<()>;
}

/// Client side cookie storage, takes a complete `document.cookie` assignment
pub trait CookieStore {
    fn write(&self, cookie: &str) -> Result<()>;
}

/// Holds the current theme explicitly. The marker class is assumed to be
/// owned by the toggle: changes made to it by other scripts after construction
/// are not seen, the next click applies the flipped held theme.
pub struct ThemeToggle<T, S> {
    config: ToggleConfig,
    target: T,
    store: S,
    theme: Theme,
}

impl<T: ThemeTarget, S: CookieStore> ThemeToggle<T, S> {
    /// The starting theme is whatever the page markup rendered, read once here
    pub fn new(config: ToggleConfig, target: T, store: S) -> Result<Self> {
        let theme = Theme::from_dark_class(target.has_class(&config.dark_class)?);

        Ok(Self {
            config,
            target,
            store,
            theme,
        })
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// flip the theme, update the body class and persist the new token
    pub fn toggle(&mut self) -> Result<Theme> {
        let next = self.theme.toggled();

        match next {
            Theme::Dark => self.target.add_class(&self.config.dark_class)?,
            Theme::Light => self.target.remove_class(&self.config.dark_class)?,
        }
        self.theme = next;

        // cookie write is the last step
        let cookie = ThemeCookie::new(&self.config.cookie, next);
        self.store.write(&cookie.to_string())?;

        Ok(next)
    }
}
