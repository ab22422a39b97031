use contracts::domain::common::Entity;
use contracts::domain::volunteer::aggregate::{Volunteer, VolunteerStatus};
use contracts::shared::listview::{count_where, filter_records, sum_where, ListFilter, MetricScope, ALL};
use contracts::shared::summary::{SummaryMeta, ValueFormat};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::volunteer::model;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::select_filter::SelectFilter;
use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::icon;

fn status_options() -> Vec<(String, String)> {
    let mut options = vec![(ALL.to_string(), "All Statuses".to_string())];
    options.extend(
        VolunteerStatus::all()
            .iter()
            .map(|s| (s.as_str().to_string(), s.label().to_string())),
    );
    options
}

#[component]
pub fn VolunteersList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Volunteer>>(Vec::new());
    let filter = RwSignal::new(ListFilter::new().with_facet("status"));

    let fetch = move || {
        spawn_local(async move {
            set_items.set(model::load().await);
        });
    };
    fetch();

    let visible = Memo::new(move |_| filter_records(&items.get(), &filter.get()));

    let active_meta = SummaryMeta::count(
        "volunteers-active",
        "Active Volunteers",
        "volunteers",
        MetricScope::Global,
    );
    let hours_meta = SummaryMeta {
        id: "volunteers-hours",
        label: "Hours Logged",
        icon: "check",
        format: ValueFormat::Number { decimals: 1 },
        scope: MetricScope::Global,
    };
    let shown_meta = SummaryMeta::count("volunteers-shown", "Shown", "search", MetricScope::Visible);

    view! {
        <div class="list-page volunteers-page">
            <PageHeader title="Volunteers" subtitle="Helpers and their skills">
                <button class="btn btn-secondary" on:click=move |_| fetch()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            <div class="stat-row">
                <StatCard
                    meta=active_meta
                    value=Signal::derive(move || {
                        count_where(&items.get(), |v| v.status == VolunteerStatus::Active) as f64
                    })
                />
                <StatCard
                    meta=hours_meta
                    value=Signal::derive(move || {
                        sum_where(&items.get(), |_| true, |v| v.hours_logged)
                    })
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
                    placeholder="Search by name, email or skill..."
                />
                <SelectFilter
                    value=Signal::derive(move || {
                        filter.get().facet("status").unwrap_or(ALL).to_string()
                    })
                    on_change=Callback::new(move |value: String| {
                        filter.update(|f| f.set_facet("status", &value));
                    })
                    options=status_options()
                />
            </div>

            <Show
                when=move || !visible.get().is_empty()
                fallback=move || {
                    view! {
                        <EmptyState icon_name="volunteers" message=Volunteer::empty_message()>
                            {()}
                        </EmptyState>
                    }
                }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Skills"</th>
                            <th>"Status"</th>
                            <th>"Hours"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || visible.get()
                            key=|v| v.id
                            children=move |volunteer: Volunteer| {
                                let status_class = format!(
                                    "status-pill status-pill--{}",
                                    volunteer.status.as_str()
                                );
                                view! {
                                    <tr>
                                        <td>{volunteer.name.clone()}</td>
                                        <td>
                                            {volunteer
                                                .email
                                                .clone()
                                                .unwrap_or_else(|| "-".to_string())}
                                        </td>
                                        <td>{volunteer.skills.join(", ")}</td>
                                        <td>
                                            <span class=status_class>
                                                {volunteer.status.label()}
                                            </span>
                                        </td>
                                        <td>{format!("{:.1}", volunteer.hours_logged)}</td>
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
