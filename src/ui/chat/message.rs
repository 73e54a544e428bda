//! Message bubble

use crate::types::message::Message;
use dioxus::prelude::*;

#[component]
pub fn MessageBubble(message: Message) -> Element {
    let is_user = message.is_user();
    let row_style = if is_user {
        "display: flex; flex-direction: row-reverse; align-items: flex-start; gap: 8px;"
    } else {
        "display: flex; flex-direction: row; align-items: flex-start; gap: 8px;"
    };
    let avatar = if is_user { "🧑" } else { "🤖" };
    let time = message.display_time();

    rsx! {
        div {
            style: "{row_style}",
            div {
                style: "width: 32px; height: 32px; border-radius: 999px; display: flex; align-items: center; justify-content: center; background: var(--border);",
                "{avatar}"
            }
            div {
                class: if is_user { "chat-bubble user" } else { "chat-bubble" },
                p { style: "margin: 0; font-size: 14px;", "{message.text}" }
                p { style: "margin: 4px 0 0; font-size: 11px; opacity: 0.7;", "{time}" }
            }
        }
    }
}
