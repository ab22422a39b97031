use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::shared::icons::icon;

/// Search box with debounce and a clear button. Every keystroke updates
/// the local input immediately; the filter state only changes after the
/// debounce window so the list is not re-filtered per character.
#[component]
pub fn SearchInput(
    /// Current filter value (for the clear button state)
    #[prop(into)]
    value: Signal<String>,
    /// Callback invoked with the debounced search term
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Local state for the input (ahead of the debounce)
    let (input_value, set_input_value) = signal(String::new());

    let debounce_timeout = StoredValue::new(None::<i32>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        if let Some(timeout_id) = debounce_timeout.get_value() {
            if let Some(w) = web_sys::window() {
                w.clear_timeout_with_handle(timeout_id);
            }
        }

        let window = match web_sys::window() {
            Some(w) => w,
            None => return,
        };
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            on_change.run(new_value.clone());
        }) as Box<dyn Fn()>);

        if let Ok(timeout_id) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref::<js_sys::Function>(),
            300,
        ) {
            debounce_timeout.set_value(Some(timeout_id));
        }
        closure.forget();
    };

    let clear_filter = move |_| {
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    handle_input_change(val);
                }
            />
            {move || (!value.get().is_empty() || !input_value.get().is_empty()).then(|| {
                view! {
                    <button class="search-input__clear" title="Clear" on:click=clear_filter>
                        {icon("x")}
                    </button>
                }
            })}
        </div>
    }
}
