use contracts::domain::guardian::aggregate::Guardian;
use leptos::prelude::*;
use std::rc::Rc;

use crate::shared::icons::icon;

#[component]
pub fn GuardianDetails(guardian: Guardian, on_close: Rc<dyn Fn(())>) -> impl IntoView {
    let dash = || "-".to_string();

    view! {
        <div class="details-container guardian-details">
            <div class="details-header">
                <h3>{guardian.full_name()}</h3>
                {guardian
                    .is_emergency_contact
                    .then(|| view! { <span class="badge badge--warning">"Emergency Contact"</span> })}
            </div>

            <div class="details-form">
                <div class="form-group">
                    <label>"Relationship"</label>
                    <div class="form-readonly">{guardian.relationship.clone()}</div>
                </div>
                <div class="form-group">
                    <label>{icon("mail")} "Email"</label>
                    <div class="form-readonly">{guardian.email.clone().unwrap_or_else(dash)}</div>
                </div>
                <div class="form-group">
                    <label>{icon("phone")} "Phone"</label>
                    <div class="form-readonly">{guardian.phone.clone().unwrap_or_else(dash)}</div>
                </div>
                <div class="form-group">
                    <label>"Work Phone"</label>
                    <div class="form-readonly">{guardian.work_phone.clone().unwrap_or_else(dash)}</div>
                </div>
                <div class="form-group">
                    <label>"Address"</label>
                    <div class="form-readonly">{guardian.address.clone().unwrap_or_else(dash)}</div>
                </div>
                <div class="form-group">
                    <label>"Occupation"</label>
                    <div class="form-readonly">{guardian.occupation.clone().unwrap_or_else(dash)}</div>
                </div>
            </div>

            <div class="details-actions">
                <button class="btn btn-secondary" on:click=move |_| (on_close)(())>
                    {icon("x")}
                    "Close"
                </button>
            </div>
        </div>
    }
}
