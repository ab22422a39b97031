use contracts::domain::common::Entity;
use contracts::domain::guardian::aggregate::{
    email_contacts_count, emergency_contacts_count, phone_contacts_count, Guardian,
};
use contracts::shared::listview::{filter_records, ListFilter, MetricScope, Selection};
use contracts::shared::summary::SummaryMeta;
use leptos::prelude::*;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

use crate::domain::guardian::model;
use crate::domain::guardian::ui::details::GuardianDetails;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;

#[component]
pub fn GuardiansList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let (items, set_items) = signal::<Vec<Guardian>>(Vec::new());
    let filter = RwSignal::new(ListFilter::new());
    let selection = RwSignal::new(Selection::<i32>::None);

    let fetch = move || {
        spawn_local(async move {
            let fresh = model::load().await;
            let was_open = selection.get_untracked().is_open();
            selection.update(|sel| sel.retain_existing(|id| fresh.iter().any(|g| g.id == *id)));
            if was_open && !selection.get_untracked().is_open() {
                modal_stack.clear();
            }
            set_items.set(fresh);
        });
    };
    fetch();

    let visible = Memo::new(move |_| filter_records(&items.get(), &filter.get()));

    let open_viewer = move |id: i32| {
        selection.update(|sel| sel.view(id));
        modal_stack.push_with_on_close(
            move |handle| {
                let guardian = items
                    .get_untracked()
                    .into_iter()
                    .find(|g| g.id == id);
                match guardian {
                    Some(guardian) => {
                        let on_close = Rc::new({
                            let handle = handle.clone();
                            move |_| handle.close()
                        });
                        view! { <GuardianDetails guardian=guardian on_close=on_close /> }
                            .into_any()
                    }
                    None => ().into_any(),
                }
            },
            move || selection.update(|sel| sel.close()),
        );
    };

    let email_meta = SummaryMeta::count(
        "guardians-email",
        "Email Contacts",
        "mail",
        MetricScope::Global,
    );
    let phone_meta = SummaryMeta::count(
        "guardians-phone",
        "Phone Contacts",
        "phone",
        MetricScope::Global,
    );
    let emergency_meta = SummaryMeta::count(
        "guardians-emergency",
        "Emergency Contacts",
        "warning",
        MetricScope::Global,
    );
    let shown_meta = SummaryMeta::count(
        "guardians-shown",
        "Shown",
        "guardians",
        MetricScope::Visible,
    );

    view! {
        <div class="list-page guardians-page">
            <PageHeader title="Guardians" subtitle="Parent and guardian directory">
                <button class="btn btn-secondary" on:click=move |_| fetch()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            <div class="stat-row">
                <StatCard
                    meta=email_meta
                    value=Signal::derive(move || email_contacts_count(&items.get()) as f64)
                />
                <StatCard
                    meta=phone_meta
                    value=Signal::derive(move || phone_contacts_count(&items.get()) as f64)
                />
                <StatCard
                    meta=emergency_meta
                    value=Signal::derive(move || emergency_contacts_count(&items.get()) as f64)
                />
                <StatCard
                    meta=shown_meta
                    value=Signal::derive(move || visible.get().len() as f64)
                />
            </div>

            <div class="list-toolbar">
                <SearchInput
                    value=Signal::derive(move || filter.get().search)
                    on_change=Callback::new(move |term: String| {
                        filter.update(|f| f.set_search(&term));
                    })
                    placeholder="Search by name or email..."
                />
            </div>

            <Show
                when=move || !visible.get().is_empty()
                fallback=move || {
                    view! {
                        <EmptyState icon_name="guardians" message=Guardian::empty_message()>
                            {()}
                        </EmptyState>
                    }
                }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Relationship"</th>
                            <th>"Email"</th>
                            <th>"Phone"</th>
                            <th>"Emergency"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || visible.get()
                            key=|g| g.id
                            children=move |guardian: Guardian| {
                                let id = guardian.id;
                                view! {
                                    <tr>
                                        <td>{guardian.full_name()}</td>
                                        <td>{guardian.relationship.clone()}</td>
                                        <td>{guardian.email.clone().unwrap_or_else(|| "-".to_string())}</td>
                                        <td>{guardian.phone.clone().unwrap_or_else(|| "-".to_string())}</td>
                                        <td>{if guardian.is_emergency_contact { "Yes" } else { "-" }}</td>
                                        <td>
                                            <button
                                                class="btn btn-link"
                                                on:click=move |_| open_viewer(id)
                                            >
                                                "View"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
