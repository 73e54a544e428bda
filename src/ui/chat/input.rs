//! Chat input component

use dioxus::prelude::*;

#[component]
pub fn ChatInput(on_send: EventHandler<String>) -> Element {
    let mut text = use_signal(String::new);

    // Blank text never leaves the box; the session would drop it anyway.
    let mut send = move || {
        if !text().trim().is_empty() {
            on_send.call(text());
            text.set(String::new());
        }
    };

    let handle_keydown = move |evt: KeyboardEvent| {
        if evt.key() == Key::Enter && !evt.modifiers().contains(Modifiers::SHIFT) {
            evt.prevent_default();
            send();
        }
    };

    let can_send = !text().trim().is_empty();

    rsx! {
        div {
            style: "padding: 16px; border-top: 1px solid var(--border); display: flex; gap: 8px;",

            input {
                style: "flex: 1; padding: 10px 14px; border-radius: 999px; border: 1px solid var(--border); font-size: 15px;",
                placeholder: "Ask me anything about Udupi...",
                value: "{text}",
                oninput: move |evt| text.set(evt.value()),
                onkeydown: handle_keydown,
            }
            button {
                class: "btn btn-primary",
                style: "padding: 10px 16px;",
                disabled: !can_send,
                title: "Send (Enter)",
                onclick: move |_| send(),
                "➤"
            }
        }
    }
}
