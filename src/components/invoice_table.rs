//! Editable table of extracted invoice rows.
//!
//! Renders an externally supplied row collection against the fixed
//! column set and supports inline editing of one cell at a time.
//! Committed edits are handed back wholesale through `on_update`; the
//! table keeps no durable copy of its own.

use leptos::ev::KeyboardEvent;
use leptos::*;

use crate::types::{ColumnKey, InvoiceRow, COLUMNS};

/// Write one edited cell into the collection.
///
/// Returns `false` (and leaves the collection untouched) when the row
/// index is out of range.
pub fn commit_edit(rows: &mut [InvoiceRow], row: usize, key: ColumnKey, value: String) -> bool {
    match rows.get_mut(row) {
        Some(r) => {
            r.set_value(key, value);
            true
        }
        None => false,
    }
}

/// Editing state of one table instance: at most one cell at a time.
///
/// Enter and blur both route through [`EditState::commit`]; the active-cell
/// check makes the second of the pair a no-op, so the update callback can
/// fire at most once per edit. Escape routes through [`EditState::cancel`],
/// which drops the pending text without touching the rows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditState {
    active: Option<(usize, ColumnKey)>,
    pending: String,
}

impl EditState {
    /// Enter edit mode on a cell, seeding the pending text with its
    /// current value. Any previously active cell is abandoned.
    pub fn begin(&mut self, row: usize, key: ColumnKey, current: String) {
        self.active = Some((row, key));
        self.pending = current;
    }

    /// Whether this exact cell is in edit mode.
    pub fn is_editing(&self, row: usize, key: ColumnKey) -> bool {
        self.active == Some((row, key))
    }

    /// Text typed so far for the active cell.
    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// Replace the pending text.
    pub fn set_pending(&mut self, value: String) {
        self.pending = value;
    }

    /// Leave edit mode without committing. The rows stay untouched and
    /// no callback should fire.
    pub fn cancel(&mut self) {
        self.active = None;
        self.pending.clear();
    }

    /// Commit the pending text into `rows` if this cell is the active
    /// one, leaving edit mode. Returns whether a commit happened (and
    /// therefore whether the update callback should fire); a repeated
    /// commit for the same cell, like the blur that follows Enter,
    /// returns `false`.
    pub fn commit(&mut self, rows: &mut [InvoiceRow], row: usize, key: ColumnKey) -> bool {
        if !self.is_editing(row, key) {
            return false;
        }
        let value = std::mem::take(&mut self.pending);
        self.active = None;
        commit_edit(rows, row, key, value);
        true
    }
}

#[component]
pub fn InvoiceTable(
    /// Row collection supplied by the parent.
    #[prop(into)]
    rows: Signal<Vec<InvoiceRow>>,
    /// Whether cells may be edited at all.
    #[prop(optional)]
    editable: bool,
    /// Invoked with the full updated collection on every committed edit.
    #[prop(optional, into)]
    on_update: Option<Callback<Vec<InvoiceRow>>>,
) -> impl IntoView {
    // Local working copy, resynced whenever the parent supplies new rows.
    let (data, set_data) = create_signal(rows.get_untracked());
    create_effect(move |_| set_data.set(rows.get()));

    let edit = create_rw_signal(EditState::default());

    let begin_edit = move |row_idx: usize, key: ColumnKey| {
        if !editable {
            return;
        }
        let current = data.with_untracked(|d| {
            d.get(row_idx)
                .and_then(|r| r.value(key).map(str::to_string))
                .unwrap_or_default()
        });
        edit.update(|e| e.begin(row_idx, key, current));
    };

    let commit = move |row_idx: usize, key: ColumnKey| {
        // Enter commits and exits edit mode, which also fires the input's
        // blur; the active-cell check keeps that from committing twice.
        if edit.with_untracked(|e| !e.is_editing(row_idx, key)) {
            return;
        }
        set_data.update(|rows| {
            edit.update(|e| {
                e.commit(rows, row_idx, key);
            });
        });
        if let Some(cb) = on_update {
            cb.call(data.get_untracked());
        }
    };

    view! {
        <div class="invoice-table-wrap">
            <Show
                when=move || !data.get().is_empty()
                fallback=|| view! {
                    <div class="invoice-table-empty">"No invoice data available"</div>
                }
            >
                <table class="invoice-table">
                    <thead>
                        <tr>
                            {COLUMNS
                                .iter()
                                .map(|key| view! { <th>{key.label()}</th> })
                                .collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || (0..data.with(|d| d.len()))
                            key=|idx| *idx
                            children=move |row_idx| {
                                let row_class = move || {
                                    data.with(|d| {
                                        d.get(row_idx)
                                            .map(|r| r.highlight().css_class())
                                            .unwrap_or_default()
                                    })
                                };
                                view! {
                                    <tr class=row_class>
                                        {COLUMNS
                                            .iter()
                                            .map(|&key| {
                                                let is_editing = move || {
                                                    edit.with(|e| e.is_editing(row_idx, key))
                                                };
                                                let cell_text = move || {
                                                    data.with(|d| {
                                                        d.get(row_idx)
                                                            .map(|r| r.display_value(key))
                                                            .unwrap_or_default()
                                                    })
                                                };
                                                let cell_error = move || {
                                                    data.with(|d| {
                                                        d.get(row_idx)
                                                            .map(|r| {
                                                                r.value(key) == Some("ERROR")
                                                                    || r.is_error()
                                                            })
                                                            .unwrap_or(false)
                                                    })
                                                };
                                                view! {
                                                    <td on:click=move |_| begin_edit(row_idx, key)>
                                                        {move || if is_editing() {
                                                            let input_ref =
                                                                create_node_ref::<html::Input>();
                                                            input_ref.on_load(|el| {
                                                                let _ = el.focus();
                                                            });
                                                            view! {
                                                                <input
                                                                    type="text"
                                                                    class="cell-input"
                                                                    node_ref=input_ref
                                                                    prop:value=move || {
                                                                        edit.with(|e| e.pending().to_string())
                                                                    }
                                                                    on:input=move |ev| {
                                                                        edit.update(|e| {
                                                                            e.set_pending(
                                                                                event_target_value(&ev),
                                                                            )
                                                                        })
                                                                    }
                                                                    on:keydown=move |ev: KeyboardEvent| {
                                                                        match ev.key().as_str() {
                                                                            "Enter" => commit(row_idx, key),
                                                                            "Escape" => {
                                                                                edit.update(|e| e.cancel())
                                                                            }
                                                                            _ => {}
                                                                        }
                                                                    }
                                                                    on:blur=move |_| commit(row_idx, key)
                                                                />
                                                            }
                                                            .into_view()
                                                        } else {
                                                            view! {
                                                                <span class=(
                                                                    "cell-error",
                                                                    cell_error,
                                                                )>{cell_text()}</span>
                                                            }
                                                            .into_view()
                                                        }}
                                                    </td>
                                                }
                                            })
                                            .collect_view()}
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>

            <Show
                when=move || editable && !data.get().is_empty()
                fallback=|| view! {}
            >
                <div class="invoice-table-hint">
                    "Click on any cell to edit. Press Enter to save or Escape to cancel."
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<InvoiceRow> {
        (0..3)
            .map(|i| InvoiceRow {
                file: Some(format!("inv_{:03}.pdf", i)),
                invoice_number: Some(format!("INV-{:03}", i)),
                amount: Some("100".to_string()),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn commit_updates_only_the_target_cell() {
        let mut rows = sample_rows();
        let before = rows.clone();

        assert!(commit_edit(&mut rows, 2, ColumnKey::Amount, "500".to_string()));

        assert_eq!(rows[2].amount.as_deref(), Some("500"));
        assert_eq!(rows[0], before[0]);
        assert_eq!(rows[1], before[1]);
        let expected = InvoiceRow {
            amount: Some("500".to_string()),
            ..before[2].clone()
        };
        assert_eq!(rows[2], expected);
    }

    #[test]
    fn commit_out_of_range_is_a_no_op() {
        let mut rows = sample_rows();
        let before = rows.clone();
        assert!(!commit_edit(&mut rows, 7, ColumnKey::Total, "1".to_string()));
        assert_eq!(rows, before);
    }

    #[test]
    fn commit_can_fill_a_previously_missing_field() {
        let mut rows = vec![InvoiceRow::default()];
        assert_eq!(rows[0].display_value(ColumnKey::Gstin), "-");
        assert!(commit_edit(
            &mut rows,
            0,
            ColumnKey::Gstin,
            "27AAPFU0939F1ZV".to_string()
        ));
        assert_eq!(rows[0].display_value(ColumnKey::Gstin), "27AAPFU0939F1ZV");
    }

    #[test]
    fn escape_discards_pending_value_and_fires_no_callback() {
        let mut rows = sample_rows();
        let before = rows.clone();
        let mut edit = EditState::default();

        edit.begin(1, ColumnKey::Amount, "100".to_string());
        edit.set_pending("999".to_string());
        edit.cancel();

        assert_eq!(rows, before);
        assert!(!edit.is_editing(1, ColumnKey::Amount));
        // After Escape a stray blur must not commit either.
        assert!(!edit.commit(&mut rows, 1, ColumnKey::Amount));
        assert_eq!(rows, before);
    }

    #[test]
    fn blur_after_enter_commits_exactly_once() {
        let mut rows = sample_rows();
        let mut edit = EditState::default();

        edit.begin(2, ColumnKey::Amount, "100".to_string());
        edit.set_pending("500".to_string());

        // Enter commits and fires the callback.
        assert!(edit.commit(&mut rows, 2, ColumnKey::Amount));
        assert_eq!(rows[2].amount.as_deref(), Some("500"));

        // The blur that follows Enter finds no active cell and must not
        // commit or fire a second callback.
        let after_enter = rows.clone();
        assert!(!edit.commit(&mut rows, 2, ColumnKey::Amount));
        assert_eq!(rows, after_enter);
    }

    #[test]
    fn beginning_a_new_cell_abandons_the_previous_one() {
        let mut rows = sample_rows();
        let mut edit = EditState::default();

        edit.begin(0, ColumnKey::Tax, "18".to_string());
        edit.begin(1, ColumnKey::Total, "1180".to_string());

        assert!(!edit.is_editing(0, ColumnKey::Tax));
        assert!(edit.is_editing(1, ColumnKey::Total));
        // A commit aimed at the abandoned cell is a no-op.
        assert!(!edit.commit(&mut rows, 0, ColumnKey::Tax));
        assert_eq!(rows[0].tax, None);
    }
}
