use leptos::prelude::*;

use crate::layout::Shell;
use crate::routes::Nav;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use crate::shared::toast::{ToastHost, ToastService};

#[component]
pub fn App() -> impl IntoView {
    // App-wide services, reachable from any screen via context.
    provide_context(Nav::new());
    provide_context(ModalStackService::new());
    provide_context(ToastService::new());

    view! {
        <Shell />
        <ModalHost />
        <ToastHost />
    }
}
