//! Notification State
//!
//! Owns the page's single notification list. The list lives in memory and
//! is rendered into one lazily created `.flash-container`; nothing is read
//! back from the DOM.

use gloo_timers::callback::Timeout;
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;

use calificaciones::{
    DismissPolicy, Notification, NotificationCenter, NotificationId, NotificationKind, Notifier,
};

use crate::components::NotificationList;
use crate::dom;

/// Pending fade and removal for one notification. Dropping it cancels both.
pub struct DismissTimers {
    _fade: Timeout,
    _remove: Timeout,
}

/// Handle to the page's notification list
#[derive(Clone)]
pub struct NotificationService {
    center: Rc<RefCell<NotificationCenter<DismissTimers>>>,
    list: RwSignal<Vec<Notification>>,
    policy: DismissPolicy,
}

thread_local! {
    static SERVICE: RefCell<Option<NotificationService>> = const { RefCell::new(None) };
}

/// The page's notification service, mounting its container on first use
pub fn notifications() -> NotificationService {
    SERVICE.with(|cell| {
        cell.borrow_mut()
            .get_or_insert_with(|| {
                let service = NotificationService {
                    center: Rc::new(RefCell::new(NotificationCenter::new())),
                    list: create_rw_signal(Vec::new()),
                    policy: DismissPolicy::NOTIFICATION,
                };
                service.mount();
                service
            })
            .clone()
    })
}

impl NotificationService {
    /// Show a notification that dismisses itself after the policy delay
    pub fn show(&self, message: &str, kind: NotificationKind) -> NotificationId {
        let id = self.center.borrow_mut().push(kind, message);

        let fade_service = self.clone();
        let fade = Timeout::new(self.policy.fade_at_ms(), move || {
            fade_service.center.borrow_mut().begin_fade(id);
            fade_service.refresh();
        });

        let remove_service = self.clone();
        let remove = Timeout::new(self.policy.remove_at_ms(), move || {
            let taken = remove_service.center.borrow_mut().take(id);
            remove_service.refresh();

            // This callback belongs to the handle; free it once we have returned
            if let Some((_, Some(timers))) = taken {
                spawn_local(async move { drop(timers) });
            }
        });

        // A fresh id always exists, so the handle is never handed back
        let _ = self.center.borrow_mut().attach_timer(
            id,
            DismissTimers {
                _fade: fade,
                _remove: remove,
            },
        );
        self.refresh();
        id
    }

    /// Remove one notification now, cancelling its timers
    pub fn close(&self, id: NotificationId) {
        let closed = self.center.borrow_mut().close(id);
        if closed.is_some() {
            self.refresh();
        }
    }

    /// Remove every notification now, without fading
    pub fn dismiss_all(&self) {
        let removed = self.center.borrow_mut().dismiss_all();
        if !removed.is_empty() {
            self.refresh();
        }
    }

    pub fn len(&self) -> usize {
        self.center.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.center.borrow().is_empty()
    }

    fn refresh(&self) {
        let snapshot = self.center.borrow().snapshot();
        self.list.set(snapshot);
    }

    fn mount(&self) {
        let container = match flash_container() {
            Ok(container) => container,
            Err(e) => {
                web_sys::console::error_2(&"Notification container unavailable:".into(), &e);
                return;
            }
        };

        let list = self.list;
        let service = self.clone();
        let on_close = Callback::new(move |id: NotificationId| service.close(id));

        mount_to(container, move || {
            view! { <NotificationList list=list on_close=on_close /> }
        });
    }
}

impl Notifier for NotificationService {
    fn notify(&self, kind: NotificationKind, message: &str) {
        self.show(message, kind);
    }
}

/// The page's `.flash-container`, created under `<body>` when the markup has none
fn flash_container() -> Result<web_sys::HtmlElement, wasm_bindgen::JsValue> {
    let document = dom::document()?;

    if let Some(existing) = document.query_selector(".flash-container")? {
        return existing.dyn_into::<web_sys::HtmlElement>().map_err(Into::into);
    }

    let container = document.create_element("div")?;
    container.set_class_name("flash-container");
    document
        .body()
        .ok_or_else(|| wasm_bindgen::JsValue::from_str("no body"))?
        .append_child(&container)?;

    container.dyn_into::<web_sys::HtmlElement>().map_err(Into::into)
}
