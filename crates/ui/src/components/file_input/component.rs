use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdUpload, LdX};
use dioxus_free_icons::Icon;

use crate::attrs::merge_attributes;
use crate::components::button::{Button, ButtonVariant};
use crate::id::use_field_ids;

/// Lifecycle of the picked file.
///
/// The upload itself happens outside this crate; the parent drives the
/// status through these states and back to `Empty` on remove or cancel.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FileInputStatus {
    #[default]
    Empty,
    Uploading {
        name: String,
    },
    Uploaded {
        name: String,
        size: Option<String>,
    },
}

impl FileInputStatus {
    pub fn class(&self) -> &'static str {
        match self {
            FileInputStatus::Empty => "empty",
            FileInputStatus::Uploading { .. } => "uploading",
            FileInputStatus::Uploaded { .. } => "uploaded",
        }
    }
}

/// The styled trigger for a file picker.
///
/// A plain themed button; [`FileInput`] points it at the hidden native
/// input. Disabled cuts activation entirely.
#[component]
pub fn FileInputButton(
    #[props(default = false)] disabled: bool,
    #[props(default)] on_activate: Option<EventHandler<()>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "file-input-button", None, false)];
    let merged = merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            r#type: "button",
            disabled,
            onclick: move |_| {
                if disabled {
                    return;
                }
                if let Some(handler) = &on_activate {
                    handler.call(());
                }
            },
            ..merged,
            Icon::<LdUpload> { icon: LdUpload, width: 14, height: 14 }
            {children}
        }
    }
}

/// A file picker: hidden native input, styled trigger, status display.
///
/// Picking a file fires `on_change` with the file name. The cancel control
/// shows while uploading and fires `on_cancel`; the remove control shows
/// once uploaded and fires `on_remove`. Disabled suppresses the trigger and
/// the native input.
#[component]
pub fn FileInput(
    #[props(default)] status: FileInputStatus,
    #[props(default = false)] disabled: bool,
    #[props(default)] id: Option<String>,
    #[props(default)] on_change: Option<EventHandler<String>>,
    #[props(default)] on_remove: Option<EventHandler<()>>,
    #[props(default)] on_cancel: Option<EventHandler<()>>,
) -> Element {
    let ids = use_field_ids(id);
    let native_id = ids.field.clone();
    let trigger_target = native_id.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "file-input", "data-status": status.class(),
            input {
                id: native_id.clone(),
                r#type: "file",
                class: "file-input-native",
                disabled,
                onchange: move |evt: FormEvent| {
                    let files = evt.files();
                    if let Some(file) = files.first() {
                        let name = file.name();
                        tracing::debug!(%name, "file picked");
                        if let Some(handler) = &on_change {
                            handler.call(name);
                        }
                    }
                },
            }
            FileInputButton {
                disabled,
                on_activate: move |_| {
                    document::eval(&format!(
                        "document.getElementById('{trigger_target}').click();"
                    ));
                },
                "Choose file"
            }
            if status == FileInputStatus::Empty {
                span { class: "file-input-status", "No file selected" }
            }
            if let FileInputStatus::Uploading { name } = &status {
                span { class: "file-input-status",
                    span { class: "file-input-spinner", aria_hidden: "true" }
                    "Uploading {name}"
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    aria_label: "Cancel upload",
                    onclick: move |_| {
                        if let Some(handler) = &on_cancel {
                            handler.call(());
                        }
                    },
                    Icon::<LdX> { icon: LdX, width: 14, height: 14 }
                }
            }
            if let FileInputStatus::Uploaded { name, size } = &status {
                span { class: "file-input-status",
                    "{name}"
                    if let Some(size) = size {
                        span { class: "file-input-size", "({size})" }
                    }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    aria_label: "Remove file",
                    onclick: move |_| {
                        if let Some(handler) = &on_remove {
                            handler.call(());
                        }
                    },
                    Icon::<LdX> { icon: LdX, width: 14, height: 14 }
                }
            }
        }
    }
}
