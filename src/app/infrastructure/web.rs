//! Browser bindings for wasm32 builds with the `web` feature.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Storage};

use super::error::{AppError, Result};
use super::page::PageBinding;
use super::storage::KeyValueStore;
use crate::app::domain::Theme;
use crate::app::services::pipeline::{apply_system_fonts, resolve_system_fonts};
use crate::app::services::stylesheet::StylesheetOptions;
use crate::app::services::theme_store::ThemeStore;

fn js_error(context: &str, err: JsValue) -> String {
    format!("{}: {:?}", context, err)
}

/// `window.localStorage`
pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    /// None when there is no window or storage is disabled (private mode,
    /// sandboxed iframes)
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok()??;
        Some(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| AppError::Storage(js_error("localStorage.setItem", e)))
    }
}

/// The live `document`
pub struct DocumentPage {
    document: Document,
}

impl DocumentPage {
    pub fn open() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }
}

impl PageBinding for DocumentPage {
    fn set_root_attribute(&mut self, name: &str, value: &str) -> Result<()> {
        let root = self
            .document
            .document_element()
            .ok_or_else(|| AppError::Page("document has no root element".to_string()))?;
        root.set_attribute(name, value)
            .map_err(|e| AppError::Page(js_error("setAttribute", e)))
    }

    fn inject_stylesheet(&mut self, id: &str, css: &str) -> Result<()> {
        if let Some(existing) = self.document.get_element_by_id(id) {
            existing.set_text_content(Some(css));
            return Ok(());
        }
        let head = self
            .document
            .head()
            .ok_or_else(|| AppError::Page("document has no <head>".to_string()))?;
        let style = self
            .document
            .create_element("style")
            .map_err(|e| AppError::Page(js_error("createElement", e)))?;
        style.set_id(id);
        style.set_text_content(Some(css));
        head.append_child(&style)
            .map_err(|e| AppError::Page(js_error("appendChild", e)))?;
        Ok(())
    }
}

/// `navigator.userAgent` and `navigator.platform`; empty strings when unavailable
pub fn browser_signals() -> (String, String) {
    let Some(navigator) = web_sys::window().map(|w| w.navigator()) else {
        return (String::new(), String::new());
    };
    (
        navigator.user_agent().unwrap_or_default(),
        navigator.platform().unwrap_or_default(),
    )
}

/// Detect the visitor's system, register its fonts on the page and return
/// the detected system identifier.
#[wasm_bindgen(js_name = installSystemFonts)]
pub fn install_system_fonts() -> String {
    let (user_agent, platform) = browser_signals();
    let report = resolve_system_fonts(&user_agent, &platform, &StylesheetOptions::default());
    if let Some(mut page) = DocumentPage::open() {
        if let Err(e) = apply_system_fonts(&mut page, &report) {
            tracing::warn!("Failed to install system fonts: {}", e);
        }
    }
    report.system.as_str().to_string()
}

/// Theme store wired to `localStorage` and the document root
pub fn browser_theme_store() -> ThemeStore {
    let storage = LocalStorage::open().map(|s| Box::new(s) as Box<dyn KeyValueStore>);
    let page = DocumentPage::open().map(|p| Box::new(p) as Box<dyn PageBinding>);
    ThemeStore::new(Theme::default(), storage, page)
}

thread_local! {
    static BROWSER_THEME: std::cell::RefCell<Option<ThemeStore>> = const { std::cell::RefCell::new(None) };
}

fn with_browser_theme<R>(f: impl FnOnce(&mut ThemeStore) -> R) -> R {
    BROWSER_THEME.with(|cell| {
        let mut slot = cell.borrow_mut();
        let store = slot.get_or_insert_with(browser_theme_store);
        f(store)
    })
}

/// Current theme identifier
#[wasm_bindgen(js_name = currentTheme)]
pub fn current_theme() -> String {
    with_browser_theme(|store| store.get().as_str().to_string())
}

/// Switch theme; unknown names are rejected with a JS error
#[wasm_bindgen(js_name = setTheme)]
pub fn set_theme(name: &str) -> std::result::Result<(), JsValue> {
    with_browser_theme(|store| store.set_by_name(name))
        .map(|_| ())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
