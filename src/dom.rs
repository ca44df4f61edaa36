use gloo_console::{debug, error, info};
use wasm_bindgen::{prelude::Closure, JsCast};
use web_sys::{Document, Event, HtmlDocument, HtmlElement};

use crate::{
    config::{ToggleConfig, CONTROL_ID},
    cookie::read_theme,
    error::{Error, Result},
    toggle::{CookieStore, ThemeTarget, ThemeToggle},
};

const CLICK: &str = "click";
const DOM_CONTENT_LOADED: &str = "DOMContentLoaded";
const LOADING: &str = "loading";

/// `document.body.classList`
pub struct BodyClasses(HtmlElement);

impl BodyClasses {
    pub fn new(document: &Document) -> Result<Self> {
        document.body().map(Self).ok_or(Error::NoBody)
    }
}

impl ThemeTarget for BodyClasses {
    fn has_class(&self, class: &str) -> Result<bool> {
        Ok(self.0.class_list().contains(class))
    }

    fn add_class(&self, class: &str) -> Result<()> {
        Ok(self.0.class_list().add_1(class)?)
    }

    fn remove_class(&self, class: &str) -> Result<()> {
        Ok(self.0.class_list().remove_1(class)?)
    }
}

/// `document.cookie`
pub struct DocumentCookies(HtmlDocument);

impl DocumentCookies {
    pub fn new(document: &Document) -> Result<Self> {
        let html = document
            .clone()
            .dyn_into::<HtmlDocument>()
            .map_err(|_| Error::Js("document is not an html document".to_string()))?;

        Ok(Self(html))
    }

    pub fn read(&self) -> Result<String> {
        Ok(self.0.cookie()?)
    }
}

impl CookieStore for DocumentCookies {
    fn write(&self, cookie: &str) -> Result<()> {
        Ok(self.0.set_cookie(cookie)?)
    }
}

/// Attach the toggle handler to the control with the default id.
/// Returns `false` without touching the page when the control is missing.
pub fn install(document: &Document) -> Result<bool> {
    install_control(document, CONTROL_ID)
}

pub fn install_control(document: &Document, control_id: &str) -> Result<bool> {
    let Some(control) = document.get_element_by_id(control_id) else {
        debug!(format!("no #{control_id} element, theme toggle disabled"));
        return Ok(false);
    };

    let config = ToggleConfig::from_attributes(control_id, |name| control.get_attribute(name));
    let cookies = DocumentCookies::new(document)?;

    if let Ok(stored) = cookies.read() {
        if let Some(theme) = read_theme(&stored, &config.cookie.name) {
            debug!(format!("stored theme {theme}"));
        }
    }

    let mut toggle = ThemeToggle::new(config, BodyClasses::new(document)?, cookies)?;

    let on_click = Closure::<dyn FnMut(Event)>::new(move |_: Event| match toggle.toggle() {
        Ok(theme) => debug!(format!("theme set to {theme}")),
        Err(e) => error!(format!("could not toggle theme: {e}")),
    });

    control.add_event_listener_with_callback(CLICK, on_click.as_ref().unchecked_ref())?;
    // the listener lives as long as the page
    on_click.forget();

    info!(format!("theme toggle attached to #{control_id}"));

    Ok(true)
}

/// the document of the global window
pub fn document() -> Result<Document> {
    web_sys::window()
        .ok_or(Error::NoWindow)?
        .document()
        .ok_or(Error::NoDocument)
}

/// `interactive` and `complete` both mean the markup has been parsed
fn is_parsed(ready_state: &str) -> bool {
    ready_state != LOADING
}

/// Run `f` once the document has been parsed
pub fn on_ready(document: &Document, f: impl FnOnce(&Document) + 'static) -> Result<()> {
    if is_parsed(&document.ready_state()) {
        f(document);
        return Ok(());
    }

    let doc = document.clone();
    let callback = Closure::once_into_js(move |_: Event| f(&doc));
    document.add_event_listener_with_callback(DOM_CONTENT_LOADED, callback.unchecked_ref())?;

    Ok(())
}
