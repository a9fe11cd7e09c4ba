//! Per-tab visit history kept in `sessionStorage`.

use crate::error::{Result, SiteError};
use crate::playback::VisitContext;

pub const DIRECT_NAVIGATION_KEY: &str = "isDirectNavigation";
pub const VISITED_HOME_KEY: &str = "hasVisitedHome";
pub const VIDEO_PLAYED_ONCE_KEY: &str = "hasVideoPlayedOnce";

const TRUE: &str = "true";

/// String-flag storage. Only the literal `"true"` counts as set.
pub trait FlagStore {
    fn get_flag(&self, key: &str) -> bool;
    fn set_flag(&self, key: &str) -> Result<()>;
    fn remove_flag(&self, key: &str) -> Result<()>;
}

/// [`FlagStore`] backed by the browser's `sessionStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionFlagStore;

/// Attempts to get the browser's sessionStorage.
///
/// Returns `None` outside a browser, or when storage is blocked (sandboxed
/// iframes, some private browsing modes).
fn get_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok()?
}

impl FlagStore for SessionFlagStore {
    fn get_flag(&self, key: &str) -> bool {
        get_storage()
            .and_then(|s| s.get_item(key).ok().flatten())
            .is_some_and(|v| v == TRUE)
    }

    fn set_flag(&self, key: &str) -> Result<()> {
        let storage = get_storage().ok_or(SiteError::StorageUnavailable)?;
        storage.set_item(key, TRUE).map_err(SiteError::storage)
    }

    fn remove_flag(&self, key: &str) -> Result<()> {
        let storage = get_storage().ok_or(SiteError::StorageUnavailable)?;
        storage.remove_item(key).map_err(SiteError::storage)
    }
}

/// Log a failed write. Losing a flag only costs the visitor a replayed intro.
fn warn_on_error(key: &str, result: Result<()>) {
    match result {
        Ok(()) => {}
        // Expected in locked-down browsers, not worth the noise
        Err(SiteError::StorageUnavailable) => {}
        Err(e) => log::warn!("ZON: could not update {}: {}", key, e),
    }
}

/// Read the visit history and consume the direct-navigation marker.
///
/// The marker is one-shot: a later fresh load of the same tab must not look
/// like an in-app return.
pub fn take_visit_context(store: &impl FlagStore, mobile: bool) -> VisitContext {
    let ctx = VisitContext {
        direct_navigation: store.get_flag(DIRECT_NAVIGATION_KEY),
        visited_before: store.get_flag(VISITED_HOME_KEY),
        played_once: store.get_flag(VIDEO_PLAYED_ONCE_KEY),
        mobile,
    };
    warn_on_error(DIRECT_NAVIGATION_KEY, store.remove_flag(DIRECT_NAVIGATION_KEY));
    log::debug!("visit context {:?}", ctx);
    ctx
}

pub fn mark_visited_home(store: &impl FlagStore) {
    warn_on_error(VISITED_HOME_KEY, store.set_flag(VISITED_HOME_KEY));
}

pub fn mark_video_played_once(store: &impl FlagStore) {
    warn_on_error(VIDEO_PLAYED_ONCE_KEY, store.set_flag(VIDEO_PLAYED_ONCE_KEY));
}

/// Called by in-app links that lead back to the landing page.
pub fn mark_direct_navigation(store: &impl FlagStore) {
    warn_on_error(DIRECT_NAVIGATION_KEY, store.set_flag(DIRECT_NAVIGATION_KEY));
}

#[cfg(test)]
pub(crate) mod memory {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-memory stand-in for `sessionStorage`.
    #[derive(Default)]
    pub struct MemoryFlagStore {
        items: RefCell<HashMap<String, String>>,
    }

    impl MemoryFlagStore {
        pub fn with(pairs: &[(&str, &str)]) -> Self {
            let store = Self::default();
            for (k, v) in pairs {
                store.items.borrow_mut().insert(k.to_string(), v.to_string());
            }
            store
        }

        pub fn raw(&self, key: &str) -> Option<String> {
            self.items.borrow().get(key).cloned()
        }
    }

    impl FlagStore for MemoryFlagStore {
        fn get_flag(&self, key: &str) -> bool {
            self.items.borrow().get(key).is_some_and(|v| v == TRUE)
        }

        fn set_flag(&self, key: &str) -> Result<()> {
            self.items.borrow_mut().insert(key.to_string(), TRUE.to_string());
            Ok(())
        }

        fn remove_flag(&self, key: &str) -> Result<()> {
            self.items.borrow_mut().remove(key);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::memory::MemoryFlagStore;
    use super::*;

    #[test]
    fn test_empty_store_is_first_visit() {
        let store = MemoryFlagStore::default();
        let ctx = take_visit_context(&store, false);
        assert_eq!(ctx, VisitContext::default());
    }

    #[test]
    fn test_reads_all_flags() {
        let store = MemoryFlagStore::with(&[
            (DIRECT_NAVIGATION_KEY, "true"),
            (VISITED_HOME_KEY, "true"),
            (VIDEO_PLAYED_ONCE_KEY, "true"),
        ]);
        let ctx = take_visit_context(&store, true);
        assert!(ctx.direct_navigation && ctx.visited_before && ctx.played_once && ctx.mobile);
    }

    #[test]
    fn test_only_literal_true_counts() {
        let store = MemoryFlagStore::with(&[
            (DIRECT_NAVIGATION_KEY, "TRUE"),
            (VISITED_HOME_KEY, "1"),
            (VIDEO_PLAYED_ONCE_KEY, ""),
        ]);
        assert_eq!(take_visit_context(&store, false), VisitContext::default());
    }

    #[test]
    fn test_direct_navigation_is_consumed_on_read() {
        let store = MemoryFlagStore::with(&[
            (DIRECT_NAVIGATION_KEY, "true"),
            (VISITED_HOME_KEY, "true"),
        ]);
        assert!(take_visit_context(&store, false).direct_navigation);
        assert_eq!(store.raw(DIRECT_NAVIGATION_KEY), None);
        // Visit history survives
        assert_eq!(store.raw(VISITED_HOME_KEY).as_deref(), Some("true"));

        let again = take_visit_context(&store, false);
        assert!(!again.direct_navigation);
        assert!(again.visited_before);
    }

    #[test]
    fn test_markers_write_true() {
        let store = MemoryFlagStore::default();
        mark_visited_home(&store);
        mark_video_played_once(&store);
        mark_direct_navigation(&store);
        let ctx = take_visit_context(&store, false);
        assert!(ctx.direct_navigation && ctx.visited_before && ctx.played_once);
    }
}
