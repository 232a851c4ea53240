//! The page URL query string as an explicit key-value store.
//!
//! Components that persist state in the URL receive a [`QueryStore`] instead of
//! reaching for `window.location` themselves. In the browser that is
//! [`BrowserQueryStore`]; tests use an in-memory store.

use std::borrow::Cow;
#[cfg(test)]
use std::{cell::RefCell, rc::Rc};

use wasm_bindgen::JsValue;
use web_sys::window;

/// Read/replace access to the current query string (`?a=1&b=2` form).
pub trait QueryStore {
    /// Current search string, including the leading `?` when non-empty.
    fn search(&self) -> String;

    /// Replaces the search string of the current history entry.
    ///
    /// Never pushes a new entry: back navigation leaves the page instead of
    /// stepping through filter changes.
    fn replace_search(&self, search: &str);
}

/// Ordered list of decoded query parameters.
///
/// Order of keys is preserved across `set`/`remove`, so rewriting a few keys
/// leaves the rest of the URL as the user (or another component) left it.
/// Segments that were never changed are written back exactly as they were read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: Vec<Param>,
}

#[derive(Debug, Clone, Eq)]
struct Param {
    key: String,
    value: String,
    /// Original `key=value` text; `None` once the value was set.
    raw: Option<String>,
}

impl PartialEq for Param {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.value == other.value
    }
}

impl Param {
    fn encoded(&self) -> String {
        match &self.raw {
            Some(raw) => raw.clone(),
            None => format!(
                "{}={}",
                urlencoding::encode(&self.key),
                urlencoding::encode(&self.value)
            ),
        }
    }
}

impl QueryParams {
    pub fn parse(search: &str) -> Self {
        let params = search
            .trim_start_matches('?')
            .split('&')
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
                Param {
                    key: decode_component(key),
                    value: decode_component(value),
                    raw: Some(segment.to_string()),
                }
            })
            .collect();
        Self { params }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|p| p.key == key)
            .map(|p| p.value.as_str())
    }

    /// Sets `key`, keeping the position of its first occurrence.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.params.iter().position(|p| p.key == key) {
            Some(index) => {
                let param = &mut self.params[index];
                if param.value != value {
                    param.value = value;
                    param.raw = None;
                }
                let mut seen = 0usize;
                self.params.retain(|p| {
                    if p.key != key {
                        return true;
                    }
                    seen += 1;
                    seen == 1
                });
            }
            None => self.params.push(Param {
                key: key.to_string(),
                value,
                raw: None,
            }),
        }
    }

    pub fn remove(&mut self, key: &str) {
        self.params.retain(|p| p.key != key);
    }

    /// Sets `key` to `value`, or removes it when `value` is `None`.
    pub fn set_or_remove(&mut self, key: &str, value: Option<&str>) {
        match value {
            Some(v) => self.set(key, v),
            None => self.remove(key),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Encodes back to a search string: `?a=1&b=2`, or `""` when empty.
    pub fn to_search(&self) -> String {
        if self.params.is_empty() {
            return String::new();
        }
        let encoded: Vec<String> = self.params.iter().map(Param::encoded).collect();
        format!("?{}", encoded.join("&"))
    }
}

/// Query store backed by `window.location` and `window.history`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserQueryStore;

impl QueryStore for BrowserQueryStore {
    fn search(&self) -> String {
        window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default()
    }

    fn replace_search(&self, search: &str) {
        let Some(w) = window() else {
            return;
        };
        let location = w.location();
        let path = location.pathname().unwrap_or_default();
        let hash = location.hash().unwrap_or_default();
        let new_url = format!("{}{}{}", path, search, hash);

        match w.history() {
            Ok(history) => {
                if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(&new_url)) {
                    log::warn!("replaceState failed for {}: {:?}", new_url, e);
                }
            }
            Err(e) => log::warn!("window.history unavailable: {:?}", e),
        }
    }
}

/// In-memory query store. Clones share the same underlying URL.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryQueryStore {
    search: Rc<RefCell<String>>,
    replacements: Rc<RefCell<usize>>,
}

#[cfg(test)]
impl MemoryQueryStore {
    pub fn new(search: &str) -> Self {
        Self {
            search: Rc::new(RefCell::new(search.to_string())),
            replacements: Rc::new(RefCell::new(0)),
        }
    }

    /// Number of times the search string has been replaced.
    pub fn replacements(&self) -> usize {
        *self.replacements.borrow()
    }
}

#[cfg(test)]
impl QueryStore for MemoryQueryStore {
    fn search(&self) -> String {
        self.search.borrow().clone()
    }

    fn replace_search(&self, search: &str) {
        *self.search.borrow_mut() = search.to_string();
        *self.replacements.borrow_mut() += 1;
    }
}
