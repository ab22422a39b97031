use leptos::prelude::*;

use crate::routes::{Nav, Page};
use crate::shared::icons::icon;

#[component]
pub fn Sidebar() -> impl IntoView {
    let nav = use_context::<Nav>().expect("Nav not found in context");

    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">"Clubdesk"</div>
            <ul class="sidebar__menu">
                {Page::all()
                    .iter()
                    .copied()
                    .map(|page| {
                        view! {
                            <li>
                                <button
                                    class="sidebar__item"
                                    class:sidebar__item--active=move || nav.active.get() == page
                                    on:click=move |_| nav.open(page)
                                >
                                    {icon(page.icon())}
                                    <span>{page.title()}</span>
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
