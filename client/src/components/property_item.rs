//! A single property row inside a group card.

use leptos::prelude::*;

use crate::state::board::Property;

/// One property: plain text normally, an input committing on change while
/// edit mode is active.
#[component]
pub fn PropertyItem(
    property: Property,
    group_id: String,
    group_color: String,
    editing: bool,
    on_rename: Callback<(String, String, String)>,
) -> impl IntoView {
    let border_style = format!("border-left: 4px solid {group_color}");

    let body = if editing {
        let gid = group_id.clone();
        let pid = property.id.clone();
        view! {
            <input
                class="property-item__input"
                type="text"
                prop:value=property.name.clone()
                on:change=move |ev| {
                    on_rename.run((gid.clone(), pid.clone(), event_target_value(&ev)));
                }
            />
        }
        .into_any()
    } else {
        view! { <p class="property-item__name">{property.name.clone()}</p> }.into_any()
    };

    view! { <div class="property-item" style=border_style>{body}</div> }
}
