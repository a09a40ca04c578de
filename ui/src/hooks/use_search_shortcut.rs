//=============================================================================
// File: src/hooks/use_search_shortcut.rs
//=============================================================================

// Global "/" keyboard shortcut that moves focus to a search box.
//
// The listener is a scoped resource: `ShortcutListener` registers it when
// created and removes it when dropped. The hook creates one at mount and
// drops it at unmount.

use std::rc::Rc;

use dioxus::prelude::*;
use futures::StreamExt;
use serde::Deserialize;

#[cfg(target_arch = "wasm32")]
use self::wasm32::ShortcutListener;

#[cfg(all(not(target_arch = "wasm32"), feature = "dioxus-desktop"))]
use self::desktop::ShortcutListener;

#[cfg(all(not(target_arch = "wasm32"), not(feature = "dioxus-desktop")))]
use self::fallback::ShortcutListener;

/// A key release as seen by the global listener.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KeyStroke {
    /// Physical key code, e.g. `Slash`.
    pub code: String,
    /// Tag name of the element the event came from, if it was an element.
    pub target_tag: Option<String>,
    /// Whether the originating element is `contenteditable`.
    #[serde(default)]
    pub editable: bool,
}

impl KeyStroke {
    /// `/` outside of any element that consumes typed text.
    pub fn is_search_shortcut(&self) -> bool {
        if self.code != "Slash" || self.editable {
            return false;
        }
        let tag = self.target_tag.as_deref().unwrap_or_default();
        !["INPUT", "TEXTAREA", "SELECT"]
            .iter()
            .any(|editable_tag| tag.eq_ignore_ascii_case(editable_tag))
    }
}

/// Focuses `target` whenever "/" is released anywhere in the page.
///
/// Failures (no mounted target, focus rejected, listener unavailable) are
/// logged and otherwise ignored.
pub fn use_search_shortcut(target: Signal<Option<Rc<MountedData>>>) {
    let focus = use_coroutine(move |mut rx: UnboundedReceiver<KeyStroke>| async move {
        while let Some(stroke) = rx.next().await {
            if !stroke.is_search_shortcut() {
                continue;
            }
            let Some(element) = (*target.peek()).clone() else {
                dioxus_logger::tracing::debug!("search shortcut: no search input mounted");
                continue;
            };
            if let Err(e) = element.set_focus(true).await {
                dioxus_logger::tracing::debug!("search shortcut: focus failed: {:?}", e);
            }
        }
    });

    let mut listener = use_signal(|| ShortcutListener::subscribe(focus.tx()));

    use_on_unmount(move || {
        // dropping the listener unregisters it
        drop(listener.take());
    });
}

/// # WebAssembly (WASM) Implementation
/// Registers a `keyup` listener on the browser window through `web_sys`.
#[cfg(target_arch = "wasm32")]
mod wasm32 {
    use futures::channel::mpsc::UnboundedSender;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    use super::KeyStroke;

    pub struct ShortcutListener {
        window: web_sys::Window,
        callback: Closure<dyn FnMut(web_sys::KeyboardEvent)>,
    }

    impl ShortcutListener {
        pub fn subscribe(tx: UnboundedSender<KeyStroke>) -> Option<Self> {
            let window = web_sys::window()?;

            let callback = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
                move |event: web_sys::KeyboardEvent| {
                    let target = event
                        .target()
                        .and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok());
                    let stroke = KeyStroke {
                        code: event.code(),
                        target_tag: target.as_ref().map(|el| el.tag_name()),
                        editable: target.as_ref().is_some_and(|el| el.is_content_editable()),
                    };
                    // receiver is gone once the view unmounts
                    let _ = tx.unbounded_send(stroke);
                },
            );

            if let Err(e) = window
                .add_event_listener_with_callback("keyup", callback.as_ref().unchecked_ref())
            {
                dioxus_logger::tracing::debug!("search shortcut: listener not registered: {:?}", e);
                return None;
            }

            Some(Self { window, callback })
        }
    }

    impl Drop for ShortcutListener {
        fn drop(&mut self) {
            let _ = self
                .window
                .remove_event_listener_with_callback("keyup", self.callback.as_ref().unchecked_ref());
        }
    }
}

/// # Desktop Implementation
/// Registers the listener inside the webview with `document::eval` and
/// streams key releases back over the eval channel.
#[cfg(all(not(target_arch = "wasm32"), feature = "dioxus-desktop"))]
mod desktop {
    use dioxus::prelude::*;
    use futures::channel::mpsc::UnboundedSender;

    use super::KeyStroke;

    const SUBSCRIBE_JS: &str = r#"
        const handler = (e) => {
            try {
                const el = e.target instanceof HTMLElement ? e.target : null;
                dioxus.send({
                    code: e.code,
                    target_tag: el ? el.tagName : null,
                    editable: el ? el.isContentEditable : false,
                });
            } catch (_) {}
        };
        window.__searchShortcutHandler = handler;
        window.addEventListener("keyup", handler);
    "#;

    const UNSUBSCRIBE_JS: &str = r#"
        if (window.__searchShortcutHandler) {
            window.removeEventListener("keyup", window.__searchShortcutHandler);
            delete window.__searchShortcutHandler;
        }
    "#;

    pub struct ShortcutListener {
        task: Task,
    }

    impl ShortcutListener {
        pub fn subscribe(tx: UnboundedSender<KeyStroke>) -> Option<Self> {
            let mut eval = document::eval(SUBSCRIBE_JS);
            let task = spawn(async move {
                while let Ok(stroke) = eval.recv::<KeyStroke>().await {
                    if tx.unbounded_send(stroke).is_err() {
                        break;
                    }
                }
            });
            Some(Self { task })
        }
    }

    impl Drop for ShortcutListener {
        fn drop(&mut self) {
            self.task.cancel();
            let _ = document::eval(UNSUBSCRIBE_JS);
        }
    }
}

/// # Fallback/Server Implementation
/// No page to listen on.
#[cfg(all(not(target_arch = "wasm32"), not(feature = "dioxus-desktop")))]
mod fallback {
    use futures::channel::mpsc::UnboundedSender;

    use super::KeyStroke;

    pub struct ShortcutListener;

    impl ShortcutListener {
        pub fn subscribe(_tx: UnboundedSender<KeyStroke>) -> Option<Self> {
            None
        }
    }
}
