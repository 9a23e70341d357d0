//! Landing view: file intake entry point.
//!
//! Offers a picker button (directory-scoped) and a drag-and-drop zone.
//! Either path collects a flat file list, stores it in the navigation
//! seed together with a client-name suggestion, and moves to the
//! upload view.

use leptos::ev::{DragEvent, Event};
use leptos::*;
use leptos_router::use_navigate;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::services::files::{flatten, folder_name, list_files, read_drop};
use crate::types::UploadSeed;

#[component]
pub fn LandingPage() -> impl IntoView {
    let seed = expect_context::<RwSignal<Option<UploadSeed>>>();
    let navigate = use_navigate();
    let (is_dragging, set_is_dragging) = create_signal(false);

    // Shared tail of both intake paths.
    let go_to_upload = move |files: Vec<web_sys::File>| {
        if files.is_empty() {
            return;
        }
        log::info!("Collected {} file(s), moving to upload form", files.len());
        let client_name = folder_name(&files);
        seed.set(Some(UploadSeed { client_name, files }));
    };

    let nav = navigate.clone();
    let on_files_picked = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(list) = input.files() else { return };
        let files = list_files(&list);
        if files.is_empty() {
            return;
        }
        go_to_upload(files);
        nav("/upload", Default::default());
    };

    let nav = navigate.clone();
    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(false);
        // Entries must be captured before the handler returns.
        let items = read_drop(&ev);
        let nav = nav.clone();
        spawn_local(async move {
            let files = flatten(items).await;
            if files.is_empty() {
                return;
            }
            go_to_upload(files);
            nav("/upload", Default::default());
        });
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(true);
    };

    let on_drag_leave = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(false);
    };

    let trigger_file_input = move |_| {
        if let Some(window) = web_sys::window() {
            if let Some(document) = window.document() {
                if let Some(input) = document.get_element_by_id("fileInput") {
                    if let Some(html_input) = input.dyn_ref::<HtmlInputElement>() {
                        html_input.click();
                    }
                }
            }
        }
    };

    view! {
        <div class="landing">
            <div class="hero">
                <h1>
                    "From unstructured invoices to GST-ready data"
                    <span class="hero-accent">" - powered by AI."</span>
                </h1>
                <p class="subtitle">
                    "Upload invoices, extract GST-ready data, detect mismatches, "
                    "and protect ITC - all in one platform."
                </p>
            </div>

            <div class="intake">
                <button class="intake-button" on:click=trigger_file_input>
                    "Start Processing Invoices"
                </button>
                <input
                    type="file"
                    id="fileInput"
                    multiple
                    webkitdirectory="true"
                    directory="true"
                    style="display:none"
                    on:change=on_files_picked
                />
                <p class="intake-hint">"Supports all file types. No size limits."</p>

                <div
                    class="dropzone"
                    class:dragging=move || is_dragging.get()
                    on:dragover=on_drag_over
                    on:dragleave=on_drag_leave
                    on:drop=on_drop
                >
                    <p class="dropzone-title">
                        {move || if is_dragging.get() {
                            "Drop files here"
                        } else {
                            "Drag & drop files or folders here"
                        }}
                    </p>
                    <p class="dropzone-hint">"or click the button above to browse"</p>
                </div>
            </div>
        </div>
    }
}
