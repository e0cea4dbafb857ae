//! Drag/drop upload widget: file selection, analysis trigger, result panel.
//!
//! The transition logic lives in [`UploadState`]; this component owns the
//! browser pieces: the live `web_sys::File` handle, object URLs for image
//! previews, the multipart upload, and the clipboard.

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::state::history::format_weight_kg;
#[cfg(feature = "hydrate")]
use crate::state::upload::SelectedFile;
use crate::state::upload::{UploadState, field_display, field_label};

/// How long the "Copied!" acknowledgment stays up.
#[cfg(feature = "hydrate")]
const COPIED_RESET_MS: u32 = 2000;

/// The upload widget.
#[component]
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn Extractor() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let upload = RwSignal::new(UploadState::default());
    let input_ref = NodeRef::<leptos::html::Input>::new();

    #[cfg(feature = "hydrate")]
    let raw_file = StoredValue::new_local(None::<web_sys::File>);
    #[cfg(feature = "hydrate")]
    let copy_seq = StoredValue::new(0u32);

    // Shared acceptance path for picker and drop. Unsupported types are
    // silently ignored by the state machine.
    #[cfg(feature = "hydrate")]
    let accept_file = move |file: web_sys::File| {
        let meta = SelectedFile {
            name: file.name(),
            mime: file.type_(),
            size: file.size(),
        };
        let handle = file.clone();
        let mut accepted = false;
        upload.update(|u| {
            accepted = u.select(meta, || {
                web_sys::Url::create_object_url_with_blob(&handle).ok()
            });
        });
        if accepted {
            raw_file.set_value(Some(file));
        }
    };

    let on_browse = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(input) = input_ref.get() {
                input.click();
            }
        }
    };

    let on_change = move |_ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(file) = input_ref
                .get()
                .and_then(|input| input.files())
                .and_then(|list| list.get(0))
            {
                accept_file(file);
            }
        }
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            if let Some(file) = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|list| list.get(0))
            {
                accept_file(file);
            }
        }
    };

    let on_dragover = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
    };

    let on_clear = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        upload.update(UploadState::clear);
        #[cfg(feature = "hydrate")]
        {
            raw_file.set_value(None);
            if let Some(input) = input_ref.get() {
                input.set_value("");
            }
        }
    };

    let on_extract = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let mut started = false;
            upload.update(|u| started = u.begin());
            if !started {
                return;
            }
            let Some(file) = raw_file.get_value() else {
                upload.update(|u| u.fail("No file selected.".to_owned()));
                return;
            };
            leptos::task::spawn_local(async move {
                match api.analyze_drawing(&file).await {
                    Ok(result) => upload.update(|u| u.finish(result)),
                    Err(err) => {
                        log::warn!("analysis failed: {err}");
                        upload.update(|u| u.fail(err.to_string()));
                    }
                }
            });
        }
    };

    let on_copy = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let Some(text) = upload.with_untracked(|u| u.result.as_ref().map(|r| r.full_text()))
            else {
                return;
            };
            let seq = copy_seq.get_value() + 1;
            copy_seq.set_value(seq);
            leptos::task::spawn_local(async move {
                if let Some(window) = web_sys::window() {
                    let clipboard = window.navigator().clipboard();
                    let _ =
                        wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text)).await;
                }
                upload.update(|u| u.set_copied(true));
                gloo_timers::future::TimeoutFuture::new(COPIED_RESET_MS).await;
                // A newer copy restarts the countdown; only the latest one
                // may revert the flag.
                if copy_seq.get_value() == seq {
                    upload.update(|u| u.set_copied(false));
                }
            });
        }
    };

    let filename = move || upload.with(|u| u.file.as_ref().map(|f| f.name.clone()));
    let weight_text = move || {
        upload.with(|u| {
            u.result
                .as_ref()
                .and_then(|r| r.weight_kg())
                .map_or_else(|| "0.000".to_owned(), format_weight_kg)
        })
    };

    view! {
        <div class="extractor">
            <div
                class="extractor__dropzone"
                on:click=on_browse
                on:drop=on_drop
                on:dragover=on_dragover
            >
                <input
                    node_ref=input_ref
                    type="file"
                    class="extractor__input"
                    accept="image/*,.pdf,application/pdf"
                    on:change=on_change
                />
                <Show
                    when=move || upload.with(|u| u.file.is_some())
                    fallback=|| {
                        view! {
                            <div class="extractor__empty">
                                <span class="extractor__upload-icon">"\u{2b06}"</span>
                                <p class="extractor__headline">
                                    "Drop your drawing here or click to browse"
                                </p>
                                <p class="extractor__hint">
                                    "Supports JPG, PNG, GIF, and PDF up to 10MB"
                                </p>
                            </div>
                        }
                    }
                >
                    <div class="extractor__selected">
                        {move || {
                            upload
                                .with(|u| match &u.preview {
                                    Some(url) => {
                                        view! {
                                            <img
                                                class="extractor__preview"
                                                src=url.clone()
                                                alt="Preview"
                                            />
                                        }
                                            .into_any()
                                    }
                                    None => {
                                        view! {
                                            <div class="extractor__pdf-placeholder">
                                                <span class="extractor__pdf-badge">"PDF"</span>
                                                <span class="extractor__pdf-name">{filename}</span>
                                            </div>
                                        }
                                            .into_any()
                                    }
                                })
                        }}
                        <button class="extractor__remove" on:click=on_clear title="Remove file">
                            "\u{2715}"
                        </button>
                        <p class="extractor__filename">{filename}</p>
                    </div>
                </Show>
            </div>

            <Show when=move || upload.with(|u| u.file.is_some() && u.text.is_empty())>
                <button
                    class="btn btn--primary extractor__extract"
                    disabled=move || upload.with(|u| u.processing)
                    on:click=on_extract
                >
                    {move || {
                        if upload.with(|u| u.processing) { "Processing..." } else { "Extract Text" }
                    }}
                </button>
            </Show>

            <Show when=move || upload.with(|u| u.error.is_some())>
                <div class="banner banner--error">
                    {move || upload.with(|u| u.error.clone().unwrap_or_default())}
                </div>
            </Show>

            <Show when=move || upload.with(|u| u.result.is_some())>
                <div class="result">
                    <div class="result__weight-card">
                        <p class="result__weight-label">"Estimated Weight"</p>
                        <h2 class="result__weight-value">
                            {weight_text} <span class="result__weight-unit">"kg"</span>
                        </h2>
                        <p class="result__weight-note">"Processed by the analysis workflow"</p>
                    </div>

                    <div class="result__details">
                        <div class="result__details-header">
                            <h3>"Extracted Dimensions"</h3>
                            <button class="btn result__copy" on:click=on_copy>
                                {move || {
                                    if upload.with(|u| u.copied) { "Copied!" } else { "Copy" }
                                }}
                            </button>
                        </div>

                        {move || {
                            upload
                                .with(|u| {
                                    u.result
                                        .as_ref()
                                        .and_then(|r| r.extracted_fields().cloned())
                                })
                                .map(|fields| {
                                    view! {
                                        <div class="result__grid">
                                            {fields
                                                .iter()
                                                .map(|(key, value)| {
                                                    view! {
                                                        <div class="result__field">
                                                            <p class="result__field-key">{field_label(key)}</p>
                                                            <p class="result__field-value">{field_display(value)}</p>
                                                        </div>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                })
                        }}

                        {move || {
                            upload
                                .with(|u| {
                                    u.result
                                        .as_ref()
                                        .and_then(|r| r.calculation_details().cloned())
                                })
                                .map(|details| {
                                    view! {
                                        <div class="result__calc">
                                            <h4>"Calculation Details"</h4>
                                            <div class="result__calc-grid">
                                                {details
                                                    .iter()
                                                    .map(|(key, value)| {
                                                        view! {
                                                            <div class="result__calc-row">
                                                                <span class="result__calc-key">
                                                                    {format!("{}:", field_label(key))}
                                                                </span>
                                                                <span class="result__calc-value">
                                                                    {field_display(value)}
                                                                </span>
                                                            </div>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </div>
                                        </div>
                                    }
                                })
                        }}

                        <button class="btn extractor__reset" on:click=on_clear>
                            "Process Another Image"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
