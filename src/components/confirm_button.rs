//! Confirm Button Component
//!
//! Inline action button with confirm/cancel step.

use leptos::prelude::*;

/// Inline confirmation button
///
/// Shows the action label initially. When clicked, shows the prompt with ✓/✗ buttons.
///
/// # Arguments
/// * `label` - Text of the initial button
/// * `prompt` - Question shown while confirming
/// * `disabled` - Disables the initial button (e.g. while a request is in flight)
/// * `on_confirm` - Callback to execute when user confirms
#[component]
pub fn ConfirmButton(
    #[prop(into)] label: Signal<String>,
    #[prop(into)] prompt: Signal<String>,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show when=move || !confirming.get()>
            <button
                class="action-btn"
                disabled=move || disabled.get()
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_confirming.set(true);
                }
            >
                {move || label.get()}
            </button>
        </Show>
        <Show when=move || confirming.get()>
            <span class="action-confirm">
                <span class="action-confirm-text">{move || prompt.get()}</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
