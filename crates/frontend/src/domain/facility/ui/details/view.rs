use leptos::prelude::*;
use std::rc::Rc;

use super::view_model::FacilityDetailsViewModel;
use crate::shared::icons::icon;

const FACILITY_TYPES: &[(&str, &str)] = &[
    ("field", "Field"),
    ("court", "Court"),
    ("pool", "Pool"),
    ("gym", "Gym"),
];

#[component]
pub fn FacilityDetails(on_saved: Rc<dyn Fn(())>, on_cancel: Rc<dyn Fn(())>) -> impl IntoView {
    let vm = FacilityDetailsViewModel::new();
    let vm_clone = vm.clone();

    view! {
        <div class="details-container facility-details">
            <div class="details-header">
                <h3>"New Facility"</h3>
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! { <div class="form-error">{e}</div> })
            }

            <div class="details-form">
                <div class="form-group">
                    <label for="name">"Name"</label>
                    <input
                        type="text"
                        id="name"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().name
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.name = event_target_value(&ev));
                            }
                        }
                        placeholder="Main Soccer Field"
                    />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="facility_type">"Type"</label>
                        <select
                            id="facility_type"
                            on:change={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    vm.form.update(|f| f.facility_type = event_target_value(&ev));
                                }
                            }
                        >
                            {FACILITY_TYPES
                                .iter()
                                .map(|(value, label)| {
                                    let vm = vm_clone.clone();
                                    let value = *value;
                                    view! {
                                        <option
                                            value=value
                                            prop:selected=move || {
                                                vm.form.get().facility_type == value
                                            }
                                        >
                                            {*label}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="location">"Location"</label>
                        <input
                            type="text"
                            id="location"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().location.clone().unwrap_or_default()
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    let value = event_target_value(&ev);
                                    vm.form.update(|f| {
                                        f.location =
                                            if value.is_empty() { None } else { Some(value) };
                                    });
                                }
                            }
                            placeholder="123 Sports Complex Dr"
                        />
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="capacity">"Capacity"</label>
                        <input
                            type="number"
                            id="capacity"
                            min="0"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || {
                                    vm.form
                                        .get()
                                        .capacity
                                        .map(|c| c.to_string())
                                        .unwrap_or_default()
                                }
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    let value = event_target_value(&ev);
                                    vm.form.update(|f| f.capacity = value.parse().ok());
                                }
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label for="hourly_rate">"Hourly Rate"</label>
                        <input
                            type="number"
                            id="hourly_rate"
                            min="0"
                            step="0.01"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || {
                                    vm.form
                                        .get()
                                        .hourly_rate
                                        .map(|r| r.to_string())
                                        .unwrap_or_default()
                                }
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    let value = event_target_value(&ev);
                                    vm.form.update(|f| f.hourly_rate = value.parse().ok());
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
