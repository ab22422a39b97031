use leptos::prelude::*;

use crate::shared::icons::icon;

/// Placeholder shown when a list renders zero rows, either because the
/// source is empty or because the active filter excluded everything.
#[component]
pub fn EmptyState(
    /// Icon name from the shared icon set
    #[prop(into)]
    icon_name: String,
    /// Message, e.g. "No Players Found"
    #[prop(into)]
    message: String,
    /// Optional call-to-action content
    children: Children,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state__icon">{icon(&icon_name)}</div>
            <div class="empty-state__message">{message}</div>
            <div class="empty-state__actions">{children()}</div>
        </div>
    }
}
