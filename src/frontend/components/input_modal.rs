//! Modal dialog for editing a block of text.

use crate::backend::utils::css::ResourceLoader;
use crate::frontend::services::EditBuffer;
use dioxus::prelude::*;

const TEXTAREA_ID: &str = "input-modal-textarea";

/// Edits `value` in a local buffer. Nothing reaches the caller until
/// "Save", which calls `on_save` with the buffer and then `on_close`.
/// "Cancel", Escape and a backdrop click only call `on_close`.
#[component]
pub fn InputModal(
    is_open: bool,
    #[props(into)] value: String,
    on_close: EventHandler<()>,
    on_save: EventHandler<String>,
    #[props(into, default = "Enter input".to_string())] title: String,
    #[props(into, default)] placeholder: String,
) -> Element {
    let mut buffer = use_signal(EditBuffer::default);

    // Opening, closing or a new value from the caller drops the draft
    use_effect(use_reactive((&is_open, &value), move |_| {
        buffer.write().reset();
    }));

    if !is_open {
        return rsx! {};
    }

    let text = buffer.read().text(&value).to_string();

    let handle_input = {
        let value = value.clone();
        move |e: Event<FormData>| {
            buffer.write().edit(&value, e.value());
        }
    };

    let handle_key_down = {
        let value = value.clone();
        move |e: Event<KeyboardData>| match e.key() {
            Key::Escape => cancel_edit(&mut buffer.write(), || on_close.call(())),
            Key::Enter if e.modifiers().ctrl() || e.modifiers().meta() => {
                e.prevent_default();
                save_edit(
                    &buffer.peek(),
                    &value,
                    |text| on_save.call(text),
                    || on_close.call(()),
                );
            }
            _ => {}
        }
    };

    let handle_save = {
        let value = value.clone();
        move |e: Event<MouseData>| {
            e.stop_propagation();
            save_edit(
                &buffer.peek(),
                &value,
                |text| on_save.call(text),
                || on_close.call(()),
            );
        }
    };

    let handle_mounted = move |element: Event<MountedData>| {
        spawn(async move {
            if let Err(e) = element.set_focus(true).await {
                log::debug!("Failed to focus input modal: {e:?}");
            }
            let select = format!("document.getElementById('{TEXTAREA_ID}')?.select();");
            if let Err(e) = document::eval(&select).await {
                log::debug!("Failed to select input modal text: {e:?}");
            }
        });
    };

    rsx! {
        style { dangerous_inner_html: ResourceLoader::get_css("input_modal") }

        div {
            class: "input-modal-backdrop",
            onclick: move |_| cancel_edit(&mut buffer.write(), || on_close.call(())),

            div {
                class: "input-modal",
                onclick: |e| e.stop_propagation(),

                h2 {
                    class: "input-modal-title",
                    "{title}"
                }

                textarea {
                    id: TEXTAREA_ID,
                    class: "input-modal-textarea",
                    value: "{text}",
                    placeholder: "{placeholder}",
                    oninput: handle_input,
                    onkeydown: handle_key_down,
                    onmounted: handle_mounted,
                }

                div {
                    class: "input-modal-hint",
                    "Ctrl+Enter to save, Esc to cancel"
                }

                div {
                    class: "input-modal-actions",
                    button {
                        class: "input-modal-btn cancel",
                        onclick: move |e: Event<MouseData>| {
                            e.stop_propagation();
                            cancel_edit(&mut buffer.write(), || on_close.call(()));
                        },
                        "Cancel"
                    }
                    button {
                        class: "input-modal-btn save",
                        onclick: handle_save,
                        "Save"
                    }
                }
            }
        }
    }
}

/// Drops the draft and tells the caller to close. `on_save` is not involved.
fn cancel_edit(buffer: &mut EditBuffer, on_close: impl FnOnce()) {
    buffer.cancel();
    on_close();
}

/// Hands the buffer to `on_save`, then asks the caller to close.
fn save_edit(
    buffer: &EditBuffer,
    value: &str,
    on_save: impl FnOnce(String),
    on_close: impl FnOnce(),
) {
    on_save(buffer.commit(value));
    on_close();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Clone, Copy)]
    struct Open(bool);

    #[component]
    fn ModalHarness() -> Element {
        let Open(is_open) = use_context::<Open>();
        rsx! {
            InputModal {
                is_open: is_open,
                value: "hello",
                title: "Edit note",
                on_close: move |_| {},
                on_save: move |_: String| {},
            }
        }
    }

    fn render(is_open: bool) -> String {
        let mut dom = VirtualDom::new(ModalHarness).with_root_context(Open(is_open));
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn closed_modal_renders_nothing() {
        let html = render(false);
        assert!(!html.contains("input-modal"), "{html}");
        assert!(!html.contains("hello"), "{html}");
    }

    #[test]
    fn first_open_frame_shows_the_value() {
        let html = render(true);
        assert!(html.contains(r#"class="input-modal-textarea""#), "{html}");
        assert!(html.contains("Edit note"), "{html}");
        assert!(html.contains("hello"), "{html}");
    }

    #[test]
    fn save_reports_edited_text_once_then_closes() {
        let calls = RefCell::new(Vec::new());
        let mut buffer = EditBuffer::default();
        buffer.edit("hello", "world");

        save_edit(
            &buffer,
            "hello",
            |text| calls.borrow_mut().push(format!("save:{text}")),
            || calls.borrow_mut().push("close".to_string()),
        );

        assert_eq!(calls.into_inner(), vec!["save:world", "close"]);
    }

    #[test]
    fn cancel_only_closes() {
        let calls = RefCell::new(Vec::new());
        let mut buffer = EditBuffer::default();

        cancel_edit(&mut buffer, || calls.borrow_mut().push("close"));

        assert_eq!(calls.into_inner(), vec!["close"]);
        assert_eq!(buffer.text("hello"), "hello");
    }

    #[test]
    fn reopening_shows_latest_value_not_discarded_edit() {
        let mut buffer = EditBuffer::default();
        buffer.edit("hello", "draft that gets thrown away");
        cancel_edit(&mut buffer, || {});

        // Closing and reopening both reset the draft
        buffer.reset();
        assert_eq!(buffer.text("latest"), "latest");

        buffer.edit("latest", "kept only until next reset");
        buffer.reset();
        assert_eq!(buffer.text("latest"), "latest");
    }
}
