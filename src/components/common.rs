use dioxus::prelude::*;
use crate::state::{NotificationType, UI_STATE};

#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div { class: "flex items-center justify-center p-4",
            div { class: "animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600" }
        }
    }
}

#[component]
pub fn Card(children: Element, #[props(default = "".to_string())] class: String) -> Element {
    rsx! {
        div { class: "bg-white rounded-lg shadow-md p-4 {class}",
            {children}
        }
    }
}

#[component]
pub fn StatsCard(
    title: String,
    value: String,
    icon: String,
    color: String,
    #[props(default = None)]
    trend: Option<String>,
) -> Element {
    let bg_color = match color.as_str() {
        "blue" => "bg-blue-100 text-blue-600",
        "green" => "bg-green-100 text-green-600",
        "orange" => "bg-orange-100 text-orange-600",
        "red" => "bg-red-100 text-red-600",
        _ => "bg-gray-100 text-gray-600",
    };

    rsx! {
        Card {
            div { class: "flex items-center justify-between",
                div {
                    p { class: "text-sm text-gray-500", "{title}" }
                    p { class: "text-2xl font-bold", "{value}" }
                    if let Some(trend) = trend {
                        p { class: "text-xs text-gray-400 mt-1", "{trend}" }
                    }
                }
                div { class: "w-12 h-12 rounded-full flex items-center justify-center text-2xl {bg_color}",
                    "{icon}"
                }
            }
        }
    }
}

#[component]
pub fn Notification() -> Element {
    let notification = UI_STATE.read().notification.clone();

    // Auto-dismiss notification after 4 seconds
    use_effect(move || {
        if UI_STATE.read().notification.is_some() {
            spawn(async move {
                #[cfg(target_arch = "wasm32")]
                {
                    gloo_timers::future::TimeoutFuture::new(4000).await;
                }
                #[cfg(not(target_arch = "wasm32"))]
                {
                    tokio::time::sleep(std::time::Duration::from_millis(4000)).await;
                }
                crate::state::clear_notification();
            });
        }
    });

    if let Some(notif) = notification {
        let color_class = notif.notification_type.color_class();
        let icon = match notif.notification_type {
            NotificationType::Success => "\u{2705}",
            NotificationType::Error => "\u{274C}",
            NotificationType::Warning => "\u{26A0}",
            NotificationType::Info => "\u{2139}",
        };
        rsx! {
            div {
                class: "fixed top-4 right-4 z-50 {color_class} text-white px-6 py-4 rounded-lg shadow-xl max-w-sm animate-slide-in",
                div { class: "flex items-start gap-3",
                    span { class: "text-xl flex-shrink-0", "{icon}" }
                    div { class: "flex-1",
                        p { class: "font-medium", "{notif.message}" }
                    }
                    button {
                        class: "ml-2 text-white hover:text-gray-200 flex-shrink-0",
                        onclick: move |_| {
                            crate::state::clear_notification();
                        },
                        "\u{2715}"
                    }
                }
            }
        }
    } else {
        rsx! {}
    }
}
