//! Current theme, persisted and mirrored onto the page.
//!
//! Both collaborators are optional. Without storage the theme lives only in
//! memory; without a page nothing is mirrored. Collaborator failures are
//! logged and never surface to the caller.

use crate::app::domain::{THEME_ATTRIBUTE, THEME_STORAGE_KEY, Theme};
use crate::app::infrastructure::error::Result;
use crate::app::infrastructure::page::PageBinding;
use crate::app::infrastructure::storage::KeyValueStore;

/// Handle returned by [`ThemeStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(Theme)>;

pub struct ThemeStore {
    current: Theme,
    storage: Option<Box<dyn KeyValueStore>>,
    page: Option<Box<dyn PageBinding>>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl ThemeStore {
    /// Restore the persisted theme if it is valid, otherwise use `default`,
    /// and mirror the result onto the page.
    pub fn new(
        default: Theme,
        storage: Option<Box<dyn KeyValueStore>>,
        page: Option<Box<dyn PageBinding>>,
    ) -> Self {
        let current = storage
            .as_ref()
            .and_then(|s| s.get(THEME_STORAGE_KEY))
            .and_then(|saved| match saved.parse::<Theme>() {
                Ok(theme) => Some(theme),
                Err(e) => {
                    tracing::warn!("Ignoring persisted theme: {}", e);
                    None
                }
            })
            .unwrap_or(default);

        let mut store = Self {
            current,
            storage,
            page,
            subscribers: Vec::new(),
            next_subscription: 0,
        };
        store.mirror();
        store
    }

    /// Store with no storage and no page
    pub fn in_memory(default: Theme) -> Self {
        Self::new(default, None, None)
    }

    pub fn get(&self) -> Theme {
        self.current
    }

    pub fn set(&mut self, theme: Theme) {
        if let Some(storage) = self.storage.as_mut() {
            if let Err(e) = storage.set(THEME_STORAGE_KEY, theme.as_str()) {
                tracing::warn!("Failed to persist theme '{}': {}", theme, e);
            }
        }
        self.current = theme;
        self.mirror();
        tracing::info!(theme = theme.as_str(), "theme changed");
        self.notify();
    }

    /// Set by identifier. Unknown names are rejected and leave the store
    /// untouched.
    pub fn set_by_name(&mut self, name: &str) -> Result<Theme> {
        let theme = name.parse::<Theme>()?;
        self.set(theme);
        Ok(theme)
    }

    pub fn update(&mut self, f: impl FnOnce(Theme) -> Theme) {
        let next = f(self.current);
        self.set(next);
    }

    /// Register a callback. It runs immediately with the current theme and
    /// again after every change.
    pub fn subscribe(&mut self, mut callback: impl FnMut(Theme) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        callback(self.current);
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Returns false if the subscription was already gone
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn mirror(&mut self) {
        if let Some(page) = self.page.as_mut() {
            if let Err(e) = page.set_root_attribute(THEME_ATTRIBUTE, self.current.as_str()) {
                tracing::warn!("Failed to mirror theme onto page: {}", e);
            }
        }
    }

    fn notify(&mut self) {
        let theme = self.current;
        for (_, callback) in self.subscribers.iter_mut() {
            callback(theme);
        }
    }
}
