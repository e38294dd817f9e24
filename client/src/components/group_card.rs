//! Card showing one property group with its color and properties.
//!
//! The color editor validates before committing: a value that is not a
//! CSS color reverts the input to the group's current color instead of
//! reaching the store.

use leptos::prelude::*;

use crate::components::property_item::PropertyItem;
use crate::state::board::PropertyGroup;
use crate::util::color::is_valid_css_color;

/// One group card: colored header with the group name, then its
/// properties. Edit mode swaps the name and color for inputs.
#[component]
pub fn GroupCard(
    group: PropertyGroup,
    editing: bool,
    on_rename: Callback<(String, String)>,
    on_recolor: Callback<(String, String)>,
    on_rename_property: Callback<(String, String, String)>,
) -> impl IntoView {
    let group_id = group.id.clone();
    let group_name = group.name.clone();
    let group_color = group.color.clone();

    let header_style = format!("border-bottom: 3px solid {group_color}");
    let swatch_style = format!("background-color: {group_color}");

    let name_view = if editing {
        let id = group_id.clone();
        view! {
            <input
                class="group-card__name-input"
                type="text"
                prop:value=group_name.clone()
                on:change=move |ev| on_rename.run((id.clone(), event_target_value(&ev)))
            />
        }
        .into_any()
    } else {
        view! {
            <h2 class="group-card__title">
                <span class="group-card__swatch" style=swatch_style></span>
                {group_name.clone()}
            </h2>
        }
        .into_any()
    };

    // Draft tracks keystrokes so an invalid commit can visibly snap back.
    let color_draft = RwSignal::new(group_color.clone());
    let color_view = editing.then(|| {
        let id = group_id.clone();
        let current = group_color.clone();
        view! {
            <input
                class="group-card__color-input"
                type="text"
                placeholder="e.g. #FF0000 or blue"
                prop:value=move || color_draft.get()
                on:input=move |ev| color_draft.set(event_target_value(&ev))
                on:change=move |_| {
                    let value = color_draft.get();
                    if value == current {
                        return;
                    }
                    if is_valid_css_color(&value) {
                        on_recolor.run((id.clone(), value));
                    } else {
                        color_draft.set(current.clone());
                    }
                }
            />
        }
    });

    let items = group
        .properties
        .iter()
        .map(|property| {
            view! {
                <PropertyItem
                    property=property.clone()
                    group_id=group.id.clone()
                    group_color=group.color.clone()
                    editing=editing
                    on_rename=on_rename_property
                />
            }
        })
        .collect::<Vec<_>>();
    let empty_notice = group
        .properties
        .is_empty()
        .then(|| view! { <p class="group-card__empty">"No properties in this group."</p> });

    view! {
        <div class="group-card">
            <div class="group-card__header" style=header_style>
                {name_view}
                {color_view}
            </div>
            <div class="group-card__body">
                {items}
                {empty_notice}
            </div>
        </div>
    }
}
