pub mod sidebar;

use leptos::prelude::*;

use crate::routes::AppRoutes;
use sidebar::Sidebar;

/// Main application shell.
///
/// ```text
/// +-----------+------------------------------+
/// |  Sidebar  |         Content              |
/// +-----------+------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <div class="app-body">
                <Sidebar />
                <div class="app-main">
                    <AppRoutes />
                </div>
            </div>
        </div>
    }
}
