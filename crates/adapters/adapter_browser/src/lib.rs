//! # uiprefs-adapter-browser
//!
//! Browser adapter: implements the `uiprefs-app` ports over `web-sys` and
//! exports the entry points the page calls.
//!
//! ```html
//! <head>
//!   <script>
//!     document.documentElement.setAttribute(
//!       "data-theme", localStorage.getItem("theme") || "dark");
//!   </script>
//!   <script type="module">
//!     import init, { initialize, toggleTheme, toggleSidebar } from "./uiprefs.js";
//!     await init();
//!     initialize();
//!     window.toggleTheme = toggleTheme;
//!     window.toggleSidebar = toggleSidebar;
//!   </script>
//! </head>
//! ```
//!
//! Module scripts are deferred and the wasm module loads asynchronously, so
//! `initialize` cannot run before the first paint. Pages that must not flash
//! the wrong theme keep the blocking inline script above, which sets the
//! root attribute from the same storage key before anything is drawn;
//! `initialize` then re-applies the same value.
//!
//! `initialize` defers control updates to `DOMContentLoaded`, or runs them
//! immediately when the document is already parsed.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Once;

use uiprefs_app::config::ControllerConfig;
use uiprefs_app::event_bus::{LocalEventBus, SubscriptionId};
use uiprefs_app::fallback_store::FallbackStore;
use uiprefs_app::services::preference_controller::PreferenceController;
use uiprefs_domain::event::PreferenceChanged;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

pub mod dom;
pub mod error;
pub mod storage;

use dom::WebDocument;
use error::BrowserError;
use storage::LocalStorage;

type BrowserController =
    PreferenceController<WebDocument, FallbackStore<LocalStorage>, Rc<LocalEventBus>>;

thread_local! {
    static CONTROLLER: RefCell<Option<BrowserController>> = const { RefCell::new(None) };
    static EVENT_BUS: Rc<LocalEventBus> = Rc::new(LocalEventBus::new());
}

/// Restore the stored preferences and wire the ready-time control update.
///
/// `config_json` overrides storage keys and element ids; omit it for the
/// stock dashboard markup. Calling again replaces the previous controller.
///
/// # Errors
///
/// Fails on invalid configuration or outside a window with a document.
/// Storage problems never fail: preferences then live in memory.
#[wasm_bindgen]
pub fn initialize(config_json: Option<String>) -> Result<(), JsValue> {
    install_hooks();

    let config = match config_json.as_deref() {
        Some(json) => ControllerConfig::from_json(json),
        None => Ok(ControllerConfig::default()),
    }
    .map_err(|err| JsValue::from_str(&err.to_string()))?;

    let window = web_sys::window().ok_or(BrowserError::NoWindow)?;
    let document = window.document().ok_or(BrowserError::NoDocument)?;
    let store = match LocalStorage::from_window(&window) {
        Ok(storage) => FallbackStore::new(storage),
        Err(err) => {
            tracing::warn!(error = %err, "preferences will not survive a reload");
            FallbackStore::memory_only()
        }
    };

    let bus = EVENT_BUS.with(Rc::clone);
    let mut controller =
        PreferenceController::new(WebDocument::new(document.clone()), store, bus, config);
    controller.initialize();

    let installed = CONTROLLER.with(|slot| match slot.try_borrow_mut() {
        Ok(mut slot) => {
            *slot = Some(controller);
            true
        }
        Err(_) => false,
    });
    if !installed {
        return Err(JsValue::from_str(
            "initialize called while a preference update is running",
        ));
    }

    schedule_ready(&document)?;
    Ok(())
}

/// Flip between dark and light.
#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() {
    with_controller("toggleTheme", |controller| {
        controller.toggle_theme();
    });
}

/// Collapse or expand the dashboard sidebar.
#[wasm_bindgen(js_name = toggleSidebar)]
pub fn toggle_sidebar() {
    with_controller("toggleSidebar", |controller| {
        controller.toggle_sidebar();
    });
}

/// Call `callback` with `{ kind, value }` whenever a preference changes.
///
/// Returns an id for [`off_preference_changed`]. Callbacks may be
/// registered before `initialize`.
#[wasm_bindgen(js_name = onPreferenceChanged)]
pub fn on_preference_changed(callback: js_sys::Function) -> u32 {
    EVENT_BUS
        .with(|bus| bus.subscribe(move |change| notify(&callback, change)))
        .as_raw()
}

/// Remove a callback registered with [`on_preference_changed`].
#[wasm_bindgen(js_name = offPreferenceChanged)]
pub fn off_preference_changed(id: u32) -> bool {
    EVENT_BUS.with(|bus| bus.unsubscribe(SubscriptionId::from_raw(id)))
}

fn install_hooks() {
    static HOOKS: Once = Once::new();
    HOOKS.call_once(|| {
        console_error_panic_hook::set_once();
        let level = if cfg!(debug_assertions) {
            log::Level::Debug
        } else {
            log::Level::Info
        };
        // The host page may already own the global logger.
        let _ = console_log::init_with_level(level);
    });
}

fn schedule_ready(document: &web_sys::Document) -> Result<(), BrowserError> {
    if document.ready_state() != "loading" {
        run_on_ready();
        return Ok(());
    }
    let callback = Closure::once_into_js(run_on_ready);
    document
        .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
        .map_err(|err| BrowserError::js(&err))
}

fn run_on_ready() {
    with_controller("onReady", |controller| controller.on_ready());
}

fn with_controller<R>(
    operation: &str,
    f: impl FnOnce(&mut BrowserController) -> R,
) -> Option<R> {
    CONTROLLER.with(|slot| {
        let Ok(mut slot) = slot.try_borrow_mut() else {
            // A change callback re-entered the controller.
            tracing::warn!(operation, "preference update already running, call ignored");
            return None;
        };
        match slot.as_mut() {
            Some(controller) => Some(f(controller)),
            None => {
                tracing::warn!(operation, "called before initialize, ignored");
                None
            }
        }
    })
}

fn notify(callback: &js_sys::Function, change: &PreferenceChanged) {
    let payload = match serde_json::to_string(change) {
        Ok(json) => js_sys::JSON::parse(&json).unwrap_or_else(|_| JsValue::from_str(&json)),
        Err(err) => {
            tracing::warn!(error = %err, "failed to encode preference change");
            return;
        }
    };
    if let Err(err) = callback.call1(&JsValue::NULL, &payload) {
        tracing::warn!(error = ?err, "preference change callback threw");
    }
}
