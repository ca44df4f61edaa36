//! Dark mode toggle for server rendered pages.
//!
//! Once the page is parsed, a click handler is attached to the `#themeToggle`
//! control. Every click flips the `dark-mode` class on the body and stores the
//! resulting theme in the `theme` cookie, so the server can render the same
//! theme on the next request.

mod config;
mod cookie;
mod dom;
mod error;
mod theme;
mod toggle;

/// one week, the lifetime of the theme cookie
pub const WEEK_SECONDS: u32 = 60 * 60 * 24 * 7;

pub use config::{CookieConfig, ToggleConfig, CONTROL_ID, COOKIE_NAME, DARK_CLASS};
pub use cookie::{read_theme, SameSite, ThemeCookie};
pub use dom::{document, install, install_control, on_ready, BodyClasses, DocumentCookies};
pub use error::{Error, Result};
pub use theme::{Theme, UnknownTheme};
pub use toggle::{CookieStore, ThemeTarget, ThemeToggle};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    let result = document().and_then(|document| {
        on_ready(&document, |document| {
            if let Err(e) = install(document) {
                gloo_console::error!(format!("theme toggle error {e}"));
            }
        })
    });

    if let Err(e) = result {
        gloo_console::error!(format!("theme toggle error {e}"));
    }
}
