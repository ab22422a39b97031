//! League overview: global counts across every collection. No filters
//! here, so every metric is `Global` by construction.

use contracts::domain::notification::aggregate::{unread_count, Notification};
use contracts::domain::payment::aggregate::{overdue_amount, pending_amount, Payment};
use contracts::domain::player::aggregate::Player;
use contracts::domain::team::aggregate::Team;
use contracts::shared::listview::MetricScope;
use contracts::shared::summary::{SummaryMeta, SummaryStatus};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::{notification, payment, player, team};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::icon;

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let (teams, set_teams) = signal::<Vec<Team>>(Vec::new());
    let (players, set_players) = signal::<Vec<Player>>(Vec::new());
    let (payments, set_payments) = signal::<Vec<Payment>>(Vec::new());
    let (notifications, set_notifications) = signal::<Vec<Notification>>(Vec::new());

    let fetch = move || {
        spawn_local(async move { set_teams.set(team::model::load().await) });
        spawn_local(async move { set_players.set(player::model::load().await) });
        spawn_local(async move { set_payments.set(payment::model::load().await) });
        spawn_local(async move { set_notifications.set(notification::model::load().await) });
    };
    fetch();

    let teams_meta = SummaryMeta::count(
        "overview-teams",
        "Total Teams",
        "dashboard",
        MetricScope::Global,
    );
    let players_meta = SummaryMeta::count(
        "overview-players",
        "Total Players",
        "players",
        MetricScope::Global,
    );
    let outstanding_meta = SummaryMeta::money(
        "overview-outstanding",
        "Outstanding Balance",
        "payments",
        MetricScope::Global,
    );
    let unread_meta = SummaryMeta::count(
        "overview-unread",
        "Unread Notifications",
        "bell",
        MetricScope::Global,
    );

    let outstanding =
        Signal::derive(move || pending_amount(&payments.get()) + overdue_amount(&payments.get()));

    view! {
        <div class="dashboard-page">
            <PageHeader title="Dashboard" subtitle="League at a glance">
                <button class="btn btn-secondary" on:click=move |_| fetch()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            <div class="stat-row stat-row--dashboard">
                <StatCard
                    meta=teams_meta
                    value=Signal::derive(move || teams.get().len() as f64)
                />
                <StatCard
                    meta=players_meta
                    value=Signal::derive(move || players.get().len() as f64)
                />
                <StatCard
                    meta=outstanding_meta
                    value=outstanding
                    status=Signal::derive(move || {
                        if outstanding.get() > 0.0 {
                            SummaryStatus::Warning
                        } else {
                            SummaryStatus::Good
                        }
                    })
                />
                <StatCard
                    meta=unread_meta
                    value=Signal::derive(move || unread_count(&notifications.get()) as f64)
                />
            </div>

            <div class="dashboard-teams">
                <h3>"Teams"</h3>
                <div class="card-grid">
                    <For
                        each=move || teams.get()
                        key=|t| t.id
                        children=move |team: Team| {
                            let roster_size = Memo::new(move |_| {
                                players
                                    .get()
                                    .iter()
                                    .filter(|p| p.team_id == Some(team.id))
                                    .count()
                            });
                            view! {
                                <div class="team-card">
                                    <div class="team-card__header">
                                        <h4>{team.name.clone()}</h4>
                                        <span class="team-card__sport">{team.sport.label()}</span>
                                    </div>
                                    <div class="team-card__meta">
                                        {team
                                            .category
                                            .clone()
                                            .map(|c| view! { <span class="badge">{c}</span> })}
                                        <span>
                                            {move || format!(
                                                "{} / {} players",
                                                roster_size.get(),
                                                team.max_players
                                            )}
                                        </span>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>
            </div>
        </div>
    }
}
