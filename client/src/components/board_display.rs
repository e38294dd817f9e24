//! Grid of group cards for the current board.

use leptos::prelude::*;

use crate::components::group_card::GroupCard;
use crate::state::board::Board;

/// Board grid, or a placeholder when the board has no groups.
#[component]
pub fn BoardDisplay(
    board: Board,
    editing: bool,
    on_rename: Callback<(String, String)>,
    on_recolor: Callback<(String, String)>,
    on_rename_property: Callback<(String, String, String)>,
) -> impl IntoView {
    if board.is_empty() {
        return view! {
            <div class="board-display__empty">
                <p>"No properties generated yet."</p>
                <p class="board-display__hint">
                    "Enter a theme and click \"Generate Properties\"."
                </p>
            </div>
        }
        .into_any();
    }

    view! {
        <div class="board-display">
            {board
                .into_iter()
                .map(|group| {
                    view! {
                        <GroupCard
                            group=group
                            editing=editing
                            on_rename=on_rename
                            on_recolor=on_recolor
                            on_rename_property=on_rename_property
                        />
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
    .into_any()
}
