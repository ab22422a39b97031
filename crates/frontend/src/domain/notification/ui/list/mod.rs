use contracts::domain::common::Entity;
use contracts::domain::notification::aggregate::{unread_count, Notification, NotificationType};
use contracts::shared::listview::{filter_records, ListFilter, MetricScope, ALL};
use contracts::shared::summary::{SummaryMeta, SummaryStatus};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::notification::model;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::select_filter::SelectFilter;
use crate::shared::components::stat_card::StatCard;
use crate::shared::date_utils::format_timestamp;
use crate::shared::icons::icon;

fn read_options() -> Vec<(String, String)> {
    vec![
        (ALL.to_string(), "All".to_string()),
        ("unread".to_string(), "Unread".to_string()),
        ("read".to_string(), "Read".to_string()),
    ]
}

fn type_options() -> Vec<(String, String)> {
    let mut options = vec![(ALL.to_string(), "All Types".to_string())];
    options.extend(
        NotificationType::all()
            .iter()
            .map(|t| (t.as_str().to_string(), t.label().to_string())),
    );
    options
}

#[component]
pub fn NotificationsList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Notification>>(Vec::new());
    let filter = RwSignal::new(ListFilter::new().with_facet("status").with_facet("type"));

    let fetch = move || {
        spawn_local(async move {
            set_items.set(model::load().await);
        });
    };
    fetch();

    let visible = Memo::new(move |_| filter_records(&items.get(), &filter.get()));

    // The badge count ignores the filter.
    let unread_meta = SummaryMeta::count(
        "notifications-unread",
        "Unread",
        "bell",
        MetricScope::Global,
    );
    let shown_meta = SummaryMeta::count(
        "notifications-shown",
        "Shown",
        "search",
        MetricScope::Visible,
    );

    view! {
        <div class="list-page notifications-page">
            <PageHeader title="Notifications" subtitle="Announcements and alerts">
                <button class="btn btn-secondary" on:click=move |_| fetch()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            <div class="stat-row">
                <StatCard
                    meta=unread_meta
                    value=Signal::derive(move || unread_count(&items.get()) as f64)
                    status=Signal::derive(move || {
                        if unread_count(&items.get()) > 0 {
                            SummaryStatus::Warning
                        } else {
                            SummaryStatus::Neutral
                        }
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
                    placeholder="Search by title or message..."
                />
                <SelectFilter
                    value=Signal::derive(move || {
                        filter.get().facet("status").unwrap_or(ALL).to_string()
                    })
                    on_change=Callback::new(move |value: String| {
                        filter.update(|f| f.set_facet("status", &value));
                    })
                    options=read_options()
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
            </div>

            <Show
                when=move || !visible.get().is_empty()
                fallback=move || {
                    view! {
                        <EmptyState icon_name="inbox" message=Notification::empty_message()>
                            {()}
                        </EmptyState>
                    }
                }
            >
                <div class="notification-feed">
                    <For
                        each=move || visible.get()
                        key=|n| n.id
                        children=move |notification: Notification| {
                            let card_class = if notification.is_read {
                                "notification-card notification-card--read"
                            } else {
                                "notification-card notification-card--unread"
                            };
                            let kind_class = format!(
                                "status-pill status-pill--{}",
                                notification.kind.as_str()
                            );
                            view! {
                                <div class=card_class>
                                    <div class="notification-card__header">
                                        <span class=kind_class>{notification.kind.label()}</span>
                                        <h4>{notification.title.clone()}</h4>
                                        {notification
                                            .is_urgent
                                            .then(|| view! {
                                                <span class="badge badge--warning">"Urgent"</span>
                                            })}
                                    </div>
                                    <p class="notification-card__message">
                                        {notification.message.clone()}
                                    </p>
                                    <span class="notification-card__time">
                                        {format_timestamp(notification.created_at)}
                                    </span>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
