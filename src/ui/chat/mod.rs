//! Chat interface components
//!
//! Overlay window that renders the session log and forwards input to it.

pub mod input;
pub mod message;

use crate::app::AppState;
use dioxus::prelude::*;
use input::ChatInput;
use message::MessageBubble;

#[component]
pub fn ChatWindow() -> Element {
    let app_state = use_context::<AppState>();
    let chat = app_state.chat.clone();
    let mut messages = use_signal(|| chat.messages());

    // Re-render whenever the session appends, including replies that land
    // after the window was closed and reopened.
    {
        let chat = chat.clone();
        use_future(move || {
            let chat = chat.clone();
            async move {
                let mut revisions = chat.subscribe();
                messages.set(chat.messages());
                while revisions.changed().await.is_ok() {
                    messages.set(chat.messages());
                }
            }
        });
    }

    let handle_send = {
        let chat = chat.clone();
        move |text: String| {
            chat.submit(text);
        }
    };

    let close_state = app_state.clone();

    rsx! {
        div {
            class: "chat-overlay",

            div {
                class: "card",
                style: "width: 100%; max-width: 440px; height: 600px; display: flex; flex-direction: column; padding: 0;",

                // Header
                div {
                    style: "display: flex; align-items: center; justify-content: space-between; padding: 16px; background: var(--primary); color: white; border-radius: 14px 14px 0 0;",
                    h3 { style: "margin: 0; font-size: 16px;", "🤖 Udupi Travel Assistant" }
                    button {
                        class: "btn",
                        style: "background: transparent; color: white; padding: 4px 8px;",
                        title: "Close",
                        onclick: move |_| close_state.close_chat(),
                        "✕"
                    }
                }

                // Messages
                div {
                    style: "flex: 1; overflow-y: auto; padding: 16px; display: flex; flex-direction: column; gap: 16px;",
                    for message in messages() {
                        MessageBubble { key: "{message.id}", message: message.clone() }
                    }
                }

                ChatInput { on_send: handle_send }
            }
        }
    }
}
