//! Theme page: the entry form that kicks off generation.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::components::toast::show_toast;
use crate::state::board::BoardState;
use crate::state::toast::ToastState;
#[cfg(feature = "hydrate")]
use crate::util::grouping::build_board;

const MIN_THEME_CHARS: usize = 2;
const THEME_TOO_SHORT: &str = "Theme must be at least 2 characters.";

/// Theme page: a single text field plus a submit button. While a request
/// is in flight the button is disabled, so at most one generation call is
/// outstanding at a time.
#[component]
pub fn ThemePage() -> impl IntoView {
    let state = expect_context::<RwSignal<BoardState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let theme_input = RwSignal::new(String::new());
    let validation = RwSignal::new(None::<&'static str>);
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let submit = Callback::new(move |()| {
        let theme = theme_input.get().trim().to_owned();
        if theme.chars().count() < MIN_THEME_CHARS {
            validation.set(Some(THEME_TOO_SHORT));
            return;
        }
        validation.set(None);
        if state.get().loading {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            state.update(|s| {
                s.set_loading(true);
                s.set_error(None);
            });
            leptos::task::spawn_local(async move {
                match crate::net::api::generate_properties(&theme).await {
                    Ok(properties) => {
                        let board = build_board(&properties);
                        if board.is_empty() {
                            show_toast(
                                toasts,
                                "Properties Generated",
                                "The model returned an empty list. Try a different theme or be more specific.",
                            );
                        } else {
                            show_toast(
                                toasts,
                                "Properties Generated!",
                                &format!("Successfully generated properties for the theme: {theme}."),
                            );
                        }
                        state.update(|s| {
                            s.replace(board, theme.clone());
                            s.set_loading(false);
                        });
                        navigate("/board", NavigateOptions::default());
                    }
                    Err(message) => {
                        show_toast(toasts, "Error Generating Properties", &message);
                        state.update(|s| {
                            s.set_error(Some(format!("Failed to generate properties: {message}")));
                            s.set_loading(false);
                        });
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (theme, toasts);
        }
    });

    let loading = move || state.get().loading;

    view! {
        <div class="theme-page">
            <header class="theme-page__header">
                <h1>"Monopoly Mapper"</h1>
                <p>"Generate and customize Monopoly board properties for any theme!"</p>
            </header>

            <section class="theme-page__form">
                <label class="theme-page__label" for="theme">
                    "Monopoly Theme"
                </label>
                <input
                    id="theme"
                    class="theme-page__input"
                    type="text"
                    placeholder="e.g., Kansas City, Ancient Rome, Space Exploration"
                    prop:value=move || theme_input.get()
                    on:input=move |ev| theme_input.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit.run(());
                        }
                    }
                />
                {move || {
                    validation.get().map(|message| view! { <p class="theme-page__validation">{message}</p> })
                }}
                <button class="btn btn--primary" disabled=loading on:click=move |_| submit.run(())>
                    {move || if loading() { "Generating..." } else { "Generate Properties" }}
                </button>
            </section>

            {move || {
                state
                    .get()
                    .error
                    .map(|message| {
                        view! {
                            <div class="theme-page__error">
                                <h2>"Error"</h2>
                                <p>{message}</p>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
