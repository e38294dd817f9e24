//! Edit-mode toggle and export buttons for the board page.

use leptos::prelude::*;

/// Control strip: edit-mode checkbox plus CSV/JSON export buttons.
/// Everything is disabled while the board has no data.
#[component]
pub fn EditControls(
    editing: RwSignal<bool>,
    has_data: Signal<bool>,
    on_export_csv: Callback<()>,
    on_export_json: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="edit-controls">
            <label class="edit-controls__toggle">
                <input
                    type="checkbox"
                    prop:checked=move || editing.get()
                    disabled=move || !has_data.get()
                    on:change=move |_| editing.update(|e| *e = !*e)
                />
                "Edit Mode"
            </label>
            <div class="edit-controls__exports">
                <button
                    class="btn"
                    disabled=move || !has_data.get()
                    on:click=move |_| on_export_csv.run(())
                >
                    "Export CSV"
                </button>
                <button
                    class="btn"
                    disabled=move || !has_data.get()
                    on:click=move |_| on_export_json.run(())
                >
                    "Export JSON"
                </button>
            </div>
        </div>
    }
}
