//! Board page: view, edit, and export the generated board.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::board_display::BoardDisplay;
use crate::components::edit_controls::EditControls;
use crate::components::toast::show_toast;
use crate::state::board::{BoardState, recolor_group, rename_group, rename_property};
use crate::state::toast::ToastState;
use crate::util::{download, export};

/// Board page: loading spinner, error panel, or the editable grid with
/// export controls, depending on the generation state.
#[component]
pub fn BoardPage() -> impl IntoView {
    let state = expect_context::<RwSignal<BoardState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let editing = RwSignal::new(false);

    // Direct loads and cleared state have nothing to show; go back to the
    // theme form.
    let redirect = use_navigate();
    Effect::new(move || {
        let s = state.get();
        if !s.loading && s.board.is_none() && s.error.is_none() {
            redirect("/", NavigateOptions::default());
        }
    });

    let navigate = use_navigate();
    let on_go_home = Callback::new(move |()| {
        state.update(BoardState::clear);
        editing.set(false);
        navigate("/", NavigateOptions::default());
    });

    let on_rename = Callback::new(move |(group_id, name): (String, String)| {
        state.update(|s| {
            if let Some(board) = s.board.as_ref() {
                s.board = Some(rename_group(board, &group_id, &name));
            }
        });
    });

    let on_recolor = Callback::new(move |(group_id, color): (String, String)| {
        state.update(|s| {
            if let Some(board) = s.board.as_ref() {
                s.board = Some(recolor_group(board, &group_id, &color));
            }
        });
    });

    let on_rename_property =
        Callback::new(move |(group_id, property_id, name): (String, String, String)| {
            state.update(|s| {
                if let Some(board) = s.board.as_ref() {
                    s.board = Some(rename_property(board, &group_id, &property_id, &name));
                }
            });
        });

    let on_export_csv = Callback::new(move |()| {
        let s = state.get();
        let Some(board) = s.board else { return };
        if board.is_empty() {
            return;
        }
        let theme = s.theme.unwrap_or_default();
        let csv = export::to_csv(&board);
        download::save_text_file(&export::csv_filename(&theme), export::CSV_MIME, &csv);
        show_toast(toasts, "Exported to CSV", "Your Monopoly board has been exported.");
    });

    let on_export_json = Callback::new(move |()| {
        let s = state.get();
        let Some(board) = s.board else { return };
        if board.is_empty() {
            return;
        }
        let theme = s.theme.unwrap_or_default();
        match export::to_json(&board) {
            Ok(json) => {
                download::save_text_file(&export::json_filename(&theme), export::JSON_MIME, &json);
                show_toast(toasts, "Exported to JSON", "Your Monopoly board has been exported.");
            }
            Err(err) => show_toast(toasts, "Export Failed", &err.to_string()),
        }
    });

    let has_data = Signal::derive(move || {
        state.get().board.as_ref().is_some_and(|board| !board.is_empty())
    });

    view! {
        <div class="board-page">
            {move || {
                let s = state.get();
                if s.loading {
                    let theme = s.theme.unwrap_or_else(|| "selected theme".to_owned());
                    return view! {
                        <div class="board-page__loading">
                            <div class="spinner"></div>
                            <p>{format!("Generating your Monopoly board for theme: {theme}...")}</p>
                        </div>
                    }
                    .into_any();
                }
                if let Some(message) = s.error {
                    return view! {
                        <div class="board-page__error">
                            <header class="board-page__header">
                                <h1>"Board Error"</h1>
                                <button class="btn" on:click=move |_| on_go_home.run(())>
                                    "New Theme"
                                </button>
                            </header>
                            <div class="alert alert--destructive">
                                <h2>"Error Generating Board"</h2>
                                <p>{message}</p>
                            </div>
                        </div>
                    }
                    .into_any();
                }
                let Some(board) = s.board else {
                    // The redirect effect is about to fire; render a brief
                    // placeholder instead of a stale board.
                    return view! {
                        <div class="board-page__missing">
                            <p>"No board data found. Please generate properties first."</p>
                            <button class="btn btn--primary" on:click=move |_| on_go_home.run(())>
                                "Start New Theme"
                            </button>
                        </div>
                    }
                    .into_any();
                };
                let theme = s.theme.unwrap_or_default();
                let empty = board.is_empty();
                view! {
                    <header class="board-page__header">
                        <div>
                            <h1>
                                "Monopoly Board: "
                                <span class="board-page__theme">{theme.clone()}</span>
                            </h1>
                            <p class="board-page__subtitle">
                                "View, edit, and export your generated properties."
                            </p>
                        </div>
                        <button class="btn" on:click=move |_| on_go_home.run(())>
                            "New Theme"
                        </button>
                    </header>

                    <EditControls
                        editing=editing
                        has_data=has_data
                        on_export_csv=on_export_csv
                        on_export_json=on_export_json
                    />

                    <BoardDisplay
                        board=board
                        editing=editing.get()
                        on_rename=on_rename
                        on_recolor=on_recolor
                        on_rename_property=on_rename_property
                    />

                    {empty
                        .then(|| {
                            view! {
                                <div class="board-page__empty-note">
                                    <p>
                                        {format!(
                                            "The model generated an empty list of properties for \"{theme}\".",
                                        )}
                                    </p>
                                    <p>"You can start a new theme above."</p>
                                </div>
                            }
                        })}
                }
                .into_any()
            }}
        </div>
    }
}
