use contracts::domain::common::Entity;
use contracts::domain::player::aggregate::Player;
use contracts::domain::team::aggregate::Team;
use contracts::shared::listview::{count_where, filter_records, ListFilter, MetricScope, Selection, ALL};
use contracts::shared::summary::SummaryMeta;
use leptos::prelude::*;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

use crate::domain::player::model;
use crate::domain::player::ui::details::PlayerDetails;
use crate::domain::team;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::select_filter::SelectFilter;
use crate::shared::components::stat_card::StatCard;
use crate::shared::date_utils::format_naive_date;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::toast::ToastService;

#[component]
pub fn PlayersList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let (items, set_items) = signal::<Vec<Player>>(Vec::new());
    let (teams, set_teams) = signal::<Vec<Team>>(Vec::new());
    let filter = RwSignal::new(ListFilter::new().with_facet("team"));
    let selection = RwSignal::new(Selection::<i32>::None);

    let fetch = move || {
        spawn_local(async move {
            let fresh = model::load().await;
            let was_open = selection.get_untracked().is_open();
            selection.update(|sel| sel.retain_existing(|id| fresh.iter().any(|p| p.id == *id)));
            if was_open && !selection.get_untracked().is_open() {
                modal_stack.clear();
            }
            set_items.set(fresh);
        });
    };
    fetch();
    spawn_local(async move {
        set_teams.set(team::model::load().await);
    });

    let visible = Memo::new(move |_| filter_records(&items.get(), &filter.get()));

    let team_name = move |team_id: Option<i32>| -> String {
        team_id
            .and_then(|id| teams.get().into_iter().find(|t| t.id == id))
            .map(|t| t.name)
            .unwrap_or_else(|| "-".to_string())
    };

    let open_editor = move |existing: Option<Player>| {
        let editing_id = existing.as_ref().map(|p| p.id);
        if let Some(id) = editing_id {
            selection.update(|sel| sel.edit(id));
        }

        let builder = move |handle: crate::shared::modal_stack::ModalHandle| {
            let on_saved = Rc::new({
                let handle = handle.clone();
                move |_| {
                    handle.close();
                    toasts.success("Player saved", "The roster has been updated.");
                    fetch();
                }
            });
            let on_cancel = Rc::new({
                let handle = handle.clone();
                move |_| handle.close()
            });
            view! {
                <PlayerDetails
                    existing=existing.clone()
                    teams=teams.get_untracked()
                    on_saved=on_saved
                    on_cancel=on_cancel
                />
            }
            .into_any()
        };

        if editing_id.is_some() {
            modal_stack.push_with_on_close(builder, move || {
                selection.update(|sel| sel.close());
            });
        } else {
            modal_stack.push(builder);
        }
    };

    let total_meta = SummaryMeta::count(
        "players-total",
        "Total Players",
        "players",
        MetricScope::Global,
    );
    let captains_meta =
        SummaryMeta::count("players-captains", "Captains", "check", MetricScope::Global);
    let shown_meta = SummaryMeta::count("players-shown", "Shown", "search", MetricScope::Visible);

    view! {
        <div class="list-page players-page">
            <PageHeader title="Players" subtitle="Roster management">
                <button class="btn btn-secondary" on:click=move |_| fetch()>
                    {icon("refresh")}
                    "Refresh"
                </button>
                <button class="btn btn-primary" on:click=move |_| open_editor(None)>
                    {icon("plus")}
                    "Add Player"
                </button>
            </PageHeader>

            <div class="stat-row">
                <StatCard
                    meta=total_meta
                    value=Signal::derive(move || items.get().len() as f64)
                />
                <StatCard
                    meta=captains_meta
                    value=Signal::derive(move || {
                        count_where(&items.get(), |p| p.is_captain()) as f64
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
                    placeholder="Search by name or jersey number..."
                />
                {move || {
                    let mut options = vec![(ALL.to_string(), "All Teams".to_string())];
                    options.extend(
                        teams.get().into_iter().map(|t| (t.id.to_string(), t.name)),
                    );
                    view! {
                        <SelectFilter
                            value=Signal::derive(move || {
                                filter.get().facet("team").unwrap_or(ALL).to_string()
                            })
                            on_change=Callback::new(move |value: String| {
                                filter.update(|f| f.set_facet("team", &value));
                            })
                            options=options
                        />
                    }
                }}
            </div>

            <Show
                when=move || !visible.get().is_empty()
                fallback=move || {
                    view! {
                        <EmptyState icon_name="players" message=Player::empty_message()>
                            <button class="btn btn-primary" on:click=move |_| open_editor(None)>
                                {icon("plus")}
                                "Add Player"
                            </button>
                        </EmptyState>
                    }
                }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"#"</th>
                            <th>"Name"</th>
                            <th>"Position"</th>
                            <th>"Team"</th>
                            <th>"Date of Birth"</th>
                            <th>"Guardians"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || visible.get()
                            key=|p| p.id
                            children=move |player: Player| {
                                let row = player.clone();
                                view! {
                                    <tr>
                                        <td>
                                            {row
                                                .jersey_number
                                                .map(|n| n.to_string())
                                                .unwrap_or_else(|| "-".to_string())}
                                        </td>
                                        <td>
                                            {row.full_name()}
                                            {row
                                                .is_captain()
                                                .then(|| view! { <span class="badge">"C"</span> })}
                                        </td>
                                        <td>{row.position.clone().unwrap_or_else(|| "-".to_string())}</td>
                                        <td>{team_name(row.team_id)}</td>
                                        <td>
                                            {row
                                                .date_of_birth
                                                .map(format_naive_date)
                                                .unwrap_or_else(|| "-".to_string())}
                                        </td>
                                        <td>
                                            {row
                                                .guardians
                                                .iter()
                                                .map(|g| g.full_name())
                                                .collect::<Vec<_>>()
                                                .join(", ")}
                                        </td>
                                        <td>
                                            <button
                                                class="btn btn-link"
                                                on:click=move |_| open_editor(Some(player.clone()))
                                            >
                                                "Edit"
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
