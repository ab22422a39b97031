use contracts::domain::common::Entity;
use contracts::domain::facility::aggregate::{Facility, FacilityStatus};
use contracts::shared::listview::{count_where, filter_records, ListFilter, MetricScope, ALL};
use contracts::shared::summary::SummaryMeta;
use leptos::prelude::*;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

use crate::domain::facility::model;
use crate::domain::facility::ui::details::FacilityDetails;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::select_filter::SelectFilter;
use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::toast::ToastService;

fn type_options() -> Vec<(String, String)> {
    vec![
        (ALL.to_string(), "All Types".to_string()),
        ("field".to_string(), "Field".to_string()),
        ("court".to_string(), "Court".to_string()),
        ("pool".to_string(), "Pool".to_string()),
        ("gym".to_string(), "Gym".to_string()),
    ]
}

fn status_options() -> Vec<(String, String)> {
    vec![
        (ALL.to_string(), "All Statuses".to_string()),
        ("available".to_string(), "Available".to_string()),
        ("booked".to_string(), "Booked".to_string()),
        ("maintenance".to_string(), "Maintenance".to_string()),
    ]
}

#[component]
pub fn FacilitiesList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let (items, set_items) = signal::<Vec<Facility>>(Vec::new());
    let filter = RwSignal::new(ListFilter::new().with_facet("type").with_facet("status"));

    let fetch = move || {
        spawn_local(async move {
            set_items.set(model::load().await);
        });
    };
    fetch();

    let visible = Memo::new(move |_| filter_records(&items.get(), &filter.get()));

    let open_create = move || {
        modal_stack.push(move |handle| {
            let on_saved = Rc::new({
                let handle = handle.clone();
                move |_| {
                    handle.close();
                    toasts.success("Facility created", "The facility has been added.");
                    fetch();
                }
            });
            let on_cancel = Rc::new({
                let handle = handle.clone();
                move |_| handle.close()
            });
            view! { <FacilityDetails on_saved=on_saved on_cancel=on_cancel /> }.into_any()
        });
    };

    let total_meta = SummaryMeta::count(
        "facilities-total",
        "Total Facilities",
        "facilities",
        MetricScope::Global,
    );
    let available_meta = SummaryMeta::count(
        "facilities-available",
        "Available",
        "check",
        MetricScope::Global,
    );
    let shown_meta = SummaryMeta::count(
        "facilities-shown",
        "Shown",
        "search",
        MetricScope::Visible,
    );

    view! {
        <div class="list-page facilities-page">
            <PageHeader title="Facilities" subtitle="Venues and bookings">
                <button class="btn btn-secondary" on:click=move |_| fetch()>
                    {icon("refresh")}
                    "Refresh"
                </button>
                <button class="btn btn-primary" on:click=move |_| open_create()>
                    {icon("plus")}
                    "Add Facility"
                </button>
            </PageHeader>

            <div class="stat-row">
                <StatCard
                    meta=total_meta
                    value=Signal::derive(move || items.get().len() as f64)
                />
                <StatCard
                    meta=available_meta
                    value=Signal::derive(move || {
                        count_where(&items.get(), |f| f.status == FacilityStatus::Available) as f64
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
                    placeholder="Search by name, type or location..."
                />
                <SelectFilter
                    value=Signal::derive(move || {
                        filter.get().facet("type").unwrap_or(ALL).to_string()
                    })
                    on_change=Callback::new(move |value: String| {
                        filter.update(|f| f.set_facet("type", &value));
                    })
                    options=type_options()
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
                        <EmptyState icon_name="facilities" message=Facility::empty_message()>
                            <button class="btn btn-primary" on:click=move |_| open_create()>
                                {icon("plus")}
                                "Add Facility"
                            </button>
                        </EmptyState>
                    }
                }
            >
                <div class="card-grid">
                    <For
                        each=move || visible.get()
                        key=|f| f.id
                        children=move |facility: Facility| {
                            let status_class =
                                format!("status-pill status-pill--{}", facility.status.as_str());
                            view! {
                                <div class="facility-card">
                                    <div class="facility-card__header">
                                        <h4>{facility.name.clone()}</h4>
                                        <span class=status_class>{facility.status.label()}</span>
                                    </div>
                                    <div class="facility-card__meta">
                                        <span class="facility-card__type">
                                            {facility.facility_type.clone()}
                                        </span>
                                        {facility
                                            .location
                                            .clone()
                                            .map(|l| view! { <span>{l}</span> })}
                                    </div>
                                    <div class="facility-card__details">
                                        {facility
                                            .capacity
                                            .map(|c| view! {
                                                <span>{format!("Capacity: {c}")}</span>
                                            })}
                                        {facility
                                            .hourly_rate
                                            .map(|r| view! {
                                                <span>{format!("${r:.2}/hr")}</span>
                                            })}
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
