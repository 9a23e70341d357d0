//! Upload view: the submission form.
//!
//! Owns the form state (client name, tax month, pending files) and the
//! submission workflow. Exactly one submission may be in flight; the
//! phase guard enforces that even for programmatic submits, the
//! disabled button is just the visible half.

use gloo_timers::future::TimeoutFuture;
use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_router::use_navigate;

use crate::config::REDIRECT_DELAY_MS;
use crate::services::upload::{upload_documents, validate};
use crate::types::{UploadPhase, UploadSeed};

/// Remove one item by position, preserving the order of the rest.
pub(crate) fn remove_at<T>(items: &mut Vec<T>, index: usize) {
    if index < items.len() {
        items.remove(index);
    }
}

#[component]
pub fn UploadPage() -> impl IntoView {
    view! {
        <main class="upload-page">
            <h1>"Upload GST Documents"</h1>
            <p class="subtitle">"Upload invoice files for a specific client and tax period."</p>
            <UploadForm/>
        </main>
    }
}

#[component]
pub fn UploadForm() -> impl IntoView {
    let seed = expect_context::<RwSignal<Option<UploadSeed>>>();
    let navigate = use_navigate();

    // Drain the navigation seed exactly once, at mount.
    let initial = seed.get_untracked().unwrap_or_default();
    seed.set(None);

    let (client_name, set_client_name) =
        create_signal(initial.client_name.clone().unwrap_or_default());
    let (month, set_month) = create_signal(String::new());
    let (files, set_files) = create_signal(initial.files);
    let (phase, set_phase) = create_signal(UploadPhase::Idle);
    let (error, set_error) = create_signal(None::<String>);

    let is_submitting = move || !phase.get().can_submit();

    let remove_file = move |index: usize| {
        set_files.update(|files| remove_at(files, index));
    };

    let nav = navigate.clone();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        // One submission at a time, enforced here and not only by the
        // disabled control.
        if !phase.get_untracked().can_submit() {
            return;
        }

        let name = client_name.get_untracked();
        let period = month.get_untracked();
        let pending = files.get_untracked();

        if let Err(e) = validate(&name, &period, pending.len()) {
            set_error.set(Some(e.to_string()));
            return;
        }

        set_error.set(None);
        set_phase.set(UploadPhase::Submitting);

        let nav = nav.clone();
        spawn_local(async move {
            log::info!(
                "Uploading {} file(s) for client {} ({})",
                pending.len(),
                name,
                period
            );
            match upload_documents(&name, &period, &pending).await {
                Ok(receipt) => {
                    log::info!("Upload accepted: {} file(s)", receipt.file_count);
                    set_client_name.set(String::new());
                    set_month.set(String::new());
                    set_files.set(Vec::new());
                    set_phase.set(UploadPhase::Succeeded(receipt));

                    TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                    nav("/", Default::default());
                }
                Err(e) => {
                    log::error!("Upload failed: {}", e);
                    set_error.set(Some(e.to_string()));
                    set_phase.set(UploadPhase::Failed);
                }
            }
        });
    };

    let nav = navigate.clone();
    let on_cancel = move |_| {
        nav("/", Default::default());
    };

    view! {
        <div class="upload-form-card">
            <form on:submit=on_submit>
                <div class="form-field">
                    <label for="clientName">"Client Name *"</label>
                    <input
                        type="text"
                        id="clientName"
                        placeholder="e.g., ABC_Enterprises"
                        prop:value=move || client_name.get()
                        on:input=move |ev| set_client_name.set(event_target_value(&ev))
                        disabled=is_submitting
                    />
                    <p class="field-hint">"Use underscores instead of spaces"</p>
                </div>

                <div class="form-field">
                    <label for="taxMonth">"Tax Period (Month) *"</label>
                    <input
                        type="month"
                        id="taxMonth"
                        prop:value=move || month.get()
                        on:input=move |ev| set_month.set(event_target_value(&ev))
                        disabled=is_submitting
                    />
                    <p class="field-hint">"Format: YYYY-MM"</p>
                </div>

                <Show when=move || !files.get().is_empty() fallback=|| view! {}>
                    <div class="form-field">
                        <label>
                            "Selected Files (" {move || files.get().len()} ") *"
                        </label>
                        <ul class="file-list">
                            <For
                                each=move || files.get().into_iter().enumerate()
                                key=|(idx, _)| *idx
                                children=move |(idx, file)| {
                                    view! {
                                        <li class="file-list-item">
                                            <span class="file-name">{file.name()}</span>
                                            <button
                                                type="button"
                                                class="file-remove"
                                                on:click=move |_| remove_file(idx)
                                                disabled=is_submitting
                                            >
                                                "Remove"
                                            </button>
                                        </li>
                                    }
                                }
                            />
                        </ul>
                        <p class="field-hint">
                            {move || files.get().len()} " file(s) ready to process"
                        </p>
                    </div>
                </Show>

                <Show when=move || error.get().is_some() fallback=|| view! {}>
                    <div class="form-error">
                        {move || error.get().unwrap_or_default()}
                    </div>
                </Show>

                {move || match phase.get() {
                    UploadPhase::Succeeded(receipt) => view! {
                        <div class="form-success">
                            <p class="form-success-message">{receipt.message.clone()}</p>
                            <p>{receipt.file_count} " file(s) uploaded successfully"</p>
                            <p class="field-hint">"Redirecting to home page..."</p>
                        </div>
                    }
                    .into_view(),
                    _ => ().into_view(),
                }}

                <div class="form-actions">
                    <button
                        type="button"
                        class="btn btn-secondary"
                        on:click=on_cancel
                        disabled=is_submitting
                    >
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled=move || {
                            client_name.get().is_empty()
                                || month.get().is_empty()
                                || files.get().is_empty()
                                || is_submitting()
                        }
                    >
                        {move || if is_submitting() { "Uploading..." } else { "Process Documents" }}
                    </button>
                </div>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_at_preserves_relative_order() {
        let mut items = vec!["a", "b", "c", "d"];
        remove_at(&mut items, 1);
        assert_eq!(items, vec!["a", "c", "d"]);
    }

    #[test]
    fn remove_at_first_and_last() {
        let mut items = vec![1, 2, 3];
        remove_at(&mut items, 0);
        assert_eq!(items, vec![2, 3]);
        remove_at(&mut items, 1);
        assert_eq!(items, vec![2]);
    }

    #[test]
    fn remove_at_out_of_range_is_a_no_op() {
        let mut items = vec![1, 2, 3];
        remove_at(&mut items, 3);
        assert_eq!(items, vec![1, 2, 3]);
    }
}
