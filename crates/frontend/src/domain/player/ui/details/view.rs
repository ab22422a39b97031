use chrono::NaiveDate;
use contracts::domain::player::aggregate::Player;
use contracts::domain::team::aggregate::Team;
use leptos::prelude::*;
use std::rc::Rc;

use super::view_model::PlayerDetailsViewModel;
use crate::shared::icons::icon;

#[component]
pub fn PlayerDetails(
    existing: Option<Player>,
    teams: Vec<Team>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = PlayerDetailsViewModel::new(existing.as_ref());
    let is_edit = vm.is_edit_mode();
    let vm_clone = vm.clone();

    view! {
        <div class="details-container player-details">
            <div class="details-header">
                <h3>{if is_edit { "Edit Player" } else { "Add Player" }}</h3>
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! { <div class="form-error">{e}</div> })
            }

            <div class="details-form">
                <div class="form-row">
                    <div class="form-group">
                        <label for="first_name">"First Name"</label>
                        <input
                            type="text"
                            id="first_name"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().first_name
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    vm.form.update(|f| f.first_name = event_target_value(&ev));
                                }
                            }
                            placeholder="First name"
                        />
                    </div>
                    <div class="form-group">
                        <label for="last_name">"Last Name"</label>
                        <input
                            type="text"
                            id="last_name"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().last_name
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    vm.form.update(|f| f.last_name = event_target_value(&ev));
                                }
                            }
                            placeholder="Last name"
                        />
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="jersey_number">"Jersey Number"</label>
                        <input
                            type="number"
                            id="jersey_number"
                            min="0"
                            max="99"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || {
                                    vm.form
                                        .get()
                                        .jersey_number
                                        .map(|n| n.to_string())
                                        .unwrap_or_default()
                                }
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    let value = event_target_value(&ev);
                                    vm.form.update(|f| f.jersey_number = value.parse().ok());
                                }
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label for="position">"Position"</label>
                        <input
                            type="text"
                            id="position"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().position.clone().unwrap_or_default()
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    let value = event_target_value(&ev);
                                    vm.form.update(|f| {
                                        f.position = if value.is_empty() { None } else { Some(value) };
                                    });
                                }
                            }
                            placeholder="Forward, Captain, ..."
                        />
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="team">"Team"</label>
                        <select
                            id="team"
                            on:change={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    let value = event_target_value(&ev);
                                    vm.form.update(|f| f.team_id = value.parse().ok());
                                }
                            }
                        >
                            <option value="">"No team"</option>
                            {teams
                                .iter()
                                .map(|team| {
                                    let team_id = team.id;
                                    let vm = vm_clone.clone();
                                    view! {
                                        <option
                                            value=team_id.to_string()
                                            prop:selected=move || {
                                                vm.form.get().team_id == Some(team_id)
                                            }
                                        >
                                            {team.name.clone()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="date_of_birth">"Date of Birth"</label>
                        <input
                            type="date"
                            id="date_of_birth"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || {
                                    vm.form
                                        .get()
                                        .date_of_birth
                                        .map(|d| d.format("%Y-%m-%d").to_string())
                                        .unwrap_or_default()
                                }
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    let value = event_target_value(&ev);
                                    vm.form.update(|f| {
                                        f.date_of_birth =
                                            NaiveDate::parse_from_str(&value, "%Y-%m-%d").ok();
                                    });
                                }
                            }
                        />
                    </div>
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    disabled={
                        let vm = vm_clone.clone();
                        move || vm.saving.get()
                    }
                    on:click={
                        let vm = vm_clone.clone();
                        let on_saved = on_saved.clone();
                        move |_| vm.save_command(on_saved.clone())
                    }
                >
                    {icon("save")}
                    {if is_edit { "Save" } else { "Create" }}
                </button>
                <button class="btn btn-secondary" on:click=move |_| (on_cancel)(())>
                    {icon("x")}
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
