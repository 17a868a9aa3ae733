//! Dark theme preference.
//!
//! The choice is stored in `localStorage` under its own key (separate from
//! the credential keys, which belong to the session store) and applied as a
//! `.dark` class on `<html>`. Falls back to the system color scheme when no
//! preference has been recorded. Browser-only; inert elsewhere.

#[cfg(feature = "hydrate")]
const THEME_KEY: &str = "chadbot_dark";

/// Read the stored preference (or the system one) and apply it.
/// Returns the resulting flag so callers can seed their UI state.
pub fn init() -> bool {
    let dark = stored_preference();
    apply(dark);
    dark
}

/// Flip the theme, persist the new preference, and apply it.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(THEME_KEY, if next { "true" } else { "false" });
        }
    }
    next
}

fn stored_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(val)) = storage.get_item(THEME_KEY) {
                return val == "true";
            }
        }
        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

fn apply(dark: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let classes = el.class_list();
            if dark {
                let _ = classes.add_1("dark");
            } else {
                let _ = classes.remove_1("dark");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = dark;
    }
}
