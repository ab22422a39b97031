use contracts::domain::common::Entity;
use contracts::domain::payment::aggregate::{
    overdue_amount, pending_amount, total_revenue, Payment, PaymentStatus,
};
use contracts::shared::listview::{average, filter_records, ListFilter, MetricScope, ALL};
use contracts::shared::summary::{SummaryMeta, SummaryStatus};
use leptos::prelude::*;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

use crate::domain::payment::model;
use crate::domain::payment::ui::details::PaymentDetails;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::select_filter::SelectFilter;
use crate::shared::components::stat_card::StatCard;
use crate::shared::date_utils::format_naive_date;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::toast::ToastService;

fn status_options() -> Vec<(String, String)> {
    let mut options = vec![(ALL.to_string(), "All Statuses".to_string())];
    options.extend(
        PaymentStatus::all()
            .iter()
            .map(|s| (s.as_str().to_string(), s.label().to_string())),
    );
    options
}

#[component]
pub fn PaymentsList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let (items, set_items) = signal::<Vec<Payment>>(Vec::new());
    let filter = RwSignal::new(ListFilter::new().with_facet("status"));

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
                    toasts.success("Payment created", "The payment request has been recorded.");
                    fetch();
                }
            });
            let on_cancel = Rc::new({
                let handle = handle.clone();
                move |_| handle.close()
            });
            view! { <PaymentDetails on_saved=on_saved on_cancel=on_cancel /> }.into_any()
        });
    };

    // Money totals are global by policy: narrowing the list must not
    // shrink "Total Revenue".
    let revenue_meta = SummaryMeta::money(
        "payments-revenue",
        "Total Revenue",
        "payments",
        MetricScope::Global,
    );
    let pending_meta = SummaryMeta::money(
        "payments-pending",
        "Pending",
        "payments",
        MetricScope::Global,
    );
    let overdue_meta = SummaryMeta::money(
        "payments-overdue",
        "Overdue",
        "warning",
        MetricScope::Global,
    );
    let average_meta = SummaryMeta::money(
        "payments-average",
        "Average Payment",
        "payments",
        MetricScope::Global,
    );

    view! {
        <div class="list-page payments-page">
            <PageHeader title="Payments" subtitle="Fees and dues tracking">
                <button class="btn btn-secondary" on:click=move |_| fetch()>
                    {icon("refresh")}
                    "Refresh"
                </button>
                <button class="btn btn-primary" on:click=move |_| open_create()>
                    {icon("plus")}
                    "New Payment"
                </button>
            </PageHeader>

            <div class="stat-row">
                <StatCard
                    meta=revenue_meta
                    value=Signal::derive(move || total_revenue(&items.get()))
                    status=Signal::derive(|| SummaryStatus::Good)
                />
                <StatCard
                    meta=pending_meta
                    value=Signal::derive(move || pending_amount(&items.get()))
                    status=Signal::derive(|| SummaryStatus::Warning)
                />
                <StatCard
                    meta=overdue_meta
                    value=Signal::derive(move || overdue_amount(&items.get()))
                    status=Signal::derive(move || {
                        if overdue_amount(&items.get()) > 0.0 {
                            SummaryStatus::Bad
                        } else {
                            SummaryStatus::Neutral
                        }
                    })
                />
                <StatCard
                    meta=average_meta
                    value=Signal::derive(move || average(&items.get(), |p| p.amount))
                />
            </div>

            <div class="list-toolbar">
                <SearchInput
                    value=Signal::derive(move || filter.get().search)
                    on_change=Callback::new(move |term: String| {
                        filter.update(|f| f.set_search(&term));
                    })
                    placeholder="Search by description or player..."
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
                        <EmptyState icon_name="payments" message=Payment::empty_message()>
                            <button class="btn btn-primary" on:click=move |_| open_create()>
                                {icon("plus")}
                                "New Payment"
                            </button>
                        </EmptyState>
                    }
                }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Player"</th>
                            <th>"Team"</th>
                            <th>"Description"</th>
                            <th>"Amount"</th>
                            <th>"Due Date"</th>
                            <th>"Status"</th>
                            <th>"Paid"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || visible.get()
                            key=|p| p.id
                            children=move |payment: Payment| {
                                let status_class =
                                    format!("status-pill status-pill--{}", payment.status.as_str());
                                view! {
                                    <tr>
                                        <td>{payment.player_name.clone()}</td>
                                        <td>
                                            {payment
                                                .team_name
                                                .clone()
                                                .unwrap_or_else(|| "-".to_string())}
                                        </td>
                                        <td>{payment.description.clone()}</td>
                                        <td class="amount">{format!("${:.2}", payment.amount)}</td>
                                        <td>{format_naive_date(payment.due_date)}</td>
                                        <td>
                                            <span class=status_class>{payment.status.label()}</span>
                                        </td>
                                        <td>
                                            {payment
                                                .paid_date
                                                .map(format_naive_date)
                                                .unwrap_or_else(|| "-".to_string())}
                                            {payment
                                                .method
                                                .map(|m| format!(" ({})", m.label()))
                                                .unwrap_or_default()}
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
