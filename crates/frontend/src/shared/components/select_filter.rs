use leptos::prelude::*;

/// Dropdown for one categorical filter dimension. The caller supplies
/// `(value, label)` pairs including the leading `"all"` sentinel entry.
#[component]
pub fn SelectFilter(
    /// Currently selected value
    #[prop(into)]
    value: Signal<String>,
    /// Callback invoked with the newly selected value
    #[prop(into)]
    on_change: Callback<String>,
    /// Options as `(value, label)` pairs
    options: Vec<(String, String)>,
) -> impl IntoView {
    view! {
        <select
            class="select-filter"
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            {options
                .into_iter()
                .map(|(opt_value, opt_label)| {
                    let attr_value = opt_value.clone();
                    view! {
                        <option
                            value=attr_value
                            prop:selected=move || value.get() == opt_value
                        >
                            {opt_label}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}
