use contracts::domain::common::Entity;
use contracts::domain::equipment::aggregate::Equipment;
use contracts::domain::team::aggregate::Sport;
use contracts::shared::listview::{count_where, filter_records, ListFilter, MetricScope, ALL};
use contracts::shared::summary::SummaryMeta;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::equipment::model;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::select_filter::SelectFilter;
use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::icon;

fn sport_options() -> Vec<(String, String)> {
    let mut options = vec![(ALL.to_string(), "All Sports".to_string())];
    options.extend(
        Sport::all()
            .iter()
            .map(|s| (s.as_str().to_string(), s.label().to_string())),
    );
    options
}

#[component]
pub fn EquipmentList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Equipment>>(Vec::new());
    let filter = RwSignal::new(ListFilter::new().with_facet("sport"));

    let fetch = move || {
        spawn_local(async move {
            set_items.set(model::load().await);
        });
    };
    fetch();

    let visible = Memo::new(move |_| filter_records(&items.get(), &filter.get()));

    let items_meta = SummaryMeta::count(
        "equipment-items",
        "Inventory Lines",
        "equipment",
        MetricScope::Global,
    );
    let low_meta = SummaryMeta::count(
        "equipment-low",
        "Low Stock",
        "warning",
        MetricScope::Global,
    );
    let shown_meta = SummaryMeta::count("equipment-shown", "Shown", "search", MetricScope::Visible);

    view! {
        <div class="list-page equipment-page">
            <PageHeader title="Equipment" subtitle="Inventory and checkouts">
                <button class="btn btn-secondary" on:click=move |_| fetch()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            <div class="stat-row">
                <StatCard
                    meta=items_meta
                    value=Signal::derive(move || items.get().len() as f64)
                />
                <StatCard
                    meta=low_meta
                    value=Signal::derive(move || {
                        count_where(&items.get(), |e| e.is_low_stock()) as f64
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
                    placeholder="Search by name, type or brand..."
                />
                <SelectFilter
                    value=Signal::derive(move || {
                        filter.get().facet("sport").unwrap_or(ALL).to_string()
                    })
                    on_change=Callback::new(move |value: String| {
                        filter.update(|f| f.set_facet("sport", &value));
                    })
                    options=sport_options()
                />
            </div>

            <Show
                when=move || !visible.get().is_empty()
                fallback=move || {
                    view! {
                        <EmptyState icon_name="equipment" message=Equipment::empty_message()>
                            {()}
                        </EmptyState>
                    }
                }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Item"</th>
                            <th>"Type"</th>
                            <th>"Brand"</th>
                            <th>"Sport"</th>
                            <th>"Available"</th>
                            <th>"In Stock"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || visible.get()
                            key=|e| e.id
                            children=move |equipment: Equipment| {
                                let stock = equipment.stock_percent();
                                let stock_class = if equipment.is_low_stock() {
                                    "stock-bar stock-bar--low"
                                } else {
                                    "stock-bar"
                                };
                                view! {
                                    <tr>
                                        <td>{equipment.name.clone()}</td>
                                        <td>{equipment.equipment_type.clone()}</td>
                                        <td>
                                            {equipment
                                                .brand
                                                .clone()
                                                .unwrap_or_else(|| "-".to_string())}
                                        </td>
                                        <td>{equipment.sport.clone()}</td>
                                        <td>
                                            {format!(
                                                "{} / {}",
                                                equipment.available(),
                                                equipment.quantity
                                            )}
                                        </td>
                                        <td>
                                            <div class=stock_class>
                                                <div
                                                    class="stock-bar__fill"
                                                    style=format!("width: {stock}%")
                                                ></div>
                                            </div>
                                            <span class="stock-bar__label">
                                                {format!("{stock}%")}
                                            </span>
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
