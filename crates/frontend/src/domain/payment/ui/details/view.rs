use chrono::NaiveDate;
use leptos::prelude::*;
use std::rc::Rc;

use super::view_model::PaymentDetailsViewModel;
use crate::shared::icons::icon;

#[component]
pub fn PaymentDetails(on_saved: Rc<dyn Fn(())>, on_cancel: Rc<dyn Fn(())>) -> impl IntoView {
    let vm = PaymentDetailsViewModel::new();
    let vm_clone = vm.clone();

    view! {
        <div class="details-container payment-details">
            <div class="details-header">
                <h3>"New Payment Request"</h3>
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! { <div class="form-error">{e}</div> })
            }

            <div class="details-form">
                <div class="form-group">
                    <label for="player_name">"Player"</label>
                    <input
                        type="text"
                        id="player_name"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().player_name
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.player_name = event_target_value(&ev));
                            }
                        }
                        placeholder="Player name"
                    />
                </div>

                <div class="form-group">
                    <label for="team_name">"Team"</label>
                    <input
                        type="text"
                        id="team_name"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().team_name.clone().unwrap_or_default()
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| {
                                    f.team_name = if value.is_empty() { None } else { Some(value) };
                                });
                            }
                        }
                        placeholder="Team name (optional)"
                    />
                </div>

                <div class="form-group">
                    <label for="description">"Description"</label>
                    <input
                        type="text"
                        id="description"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().description
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.description = event_target_value(&ev));
                            }
                        }
                        placeholder="Monthly Registration Fee"
                    />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="amount">"Amount"</label>
                        <input
                            type="number"
                            id="amount"
                            min="0"
                            step="0.01"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().amount.to_string()
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    let value = event_target_value(&ev);
                                    vm.form.update(|f| {
                                        f.amount = value.parse().unwrap_or(0.0);
                                    });
                                }
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label for="due_date">"Due Date"</label>
                        <input
                            type="date"
                            id="due_date"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || {
                                    vm.form
                                        .get()
                                        .due_date
                                        .map(|d| d.format("%Y-%m-%d").to_string())
                                        .unwrap_or_default()
                                }
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    let value = event_target_value(&ev);
                                    vm.form.update(|f| {
                                        f.due_date =
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
                    "Create"
                </button>
                <button class="btn btn-secondary" on:click=move |_| (on_cancel)(())>
                    {icon("x")}
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
