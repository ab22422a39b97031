use contracts::domain::player::aggregate::{Player, PlayerDto};
use contracts::shared::listview::try_submit;
use leptos::prelude::*;
use std::rc::Rc;

use crate::domain::player::model;

/// ViewModel for the player create/edit form.
#[derive(Clone)]
pub struct PlayerDetailsViewModel {
    pub form: RwSignal<PlayerDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    editing_id: Option<i32>,
}

impl PlayerDetailsViewModel {
    /// A `Some` player prefills the form and switches to edit mode.
    pub fn new(existing: Option<&Player>) -> Self {
        let form = match existing {
            Some(p) => PlayerDto {
                first_name: p.first_name.clone(),
                last_name: p.last_name.clone(),
                jersey_number: p.jersey_number,
                position: p.position.clone(),
                team_id: p.team_id,
                date_of_birth: p.date_of_birth,
            },
            None => PlayerDto::default(),
        };
        Self {
            form: RwSignal::new(form),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            editing_id: existing.map(|p| p.id),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Validate, then create or update. On a validation failure the form
    /// signal is untouched so entered fields survive for retry.
    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        if self.saving.get_untracked() {
            return;
        }

        let current = self.form.get_untracked();
        let editing_id = self.editing_id;
        let error = self.error;
        let saving = self.saving;

        let outcome = try_submit(&current, |dto| {
            error.set(None);
            saving.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let result = match editing_id {
                    Some(id) => model::update(id, &dto).await.map(|_| ()),
                    None => model::create(&dto).await.map(|_| ()),
                };
                saving.set(false);
                match result {
                    Ok(()) => (on_saved)(()),
                    Err(e) => error.set(Some(e)),
                }
            });
        });

        if let Err(e) = outcome {
            error.set(Some(e.to_string()));
        }
    }
}
