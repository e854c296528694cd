//! Notification List Component
//!
//! Renders the in-memory notification list. Items fade by switching their
//! opacity; removal happens when the list drops them.

use leptos::*;

use calificaciones::{Notification, NotificationId};

/// All live notifications, oldest first
#[component]
pub fn NotificationList(
    list: RwSignal<Vec<Notification>>,
    on_close: Callback<NotificationId>,
) -> impl IntoView {
    view! {
        <For
            each=move || list.get()
            key=|notification| notification.id
            children=move |notification| view! {
                <NotificationItem notification=notification list=list on_close=on_close />
            }
        />
    }
}

#[component]
fn NotificationItem(
    notification: Notification,
    list: RwSignal<Vec<Notification>>,
    on_close: Callback<NotificationId>,
) -> impl IntoView {
    let id = notification.id;

    // Phase changes keep the same key, so follow it reactively
    let fading = move || {
        list.with(|items| items.iter().any(|n| n.id == id && n.is_fading()))
    };

    view! {
        <div
            class=notification.kind.css_class()
            data-notification-id=id.value().to_string()
            style:opacity=move || if fading() { "0" } else { "1" }
        >
            <span class="flash-icon">{notification.kind.icon()}</span>
            <span class="flash-text">{notification.message}</span>
            <button class="flash-close" on:click=move |_| on_close.call(id)>
                "×"
            </button>
        </div>
    }
}
