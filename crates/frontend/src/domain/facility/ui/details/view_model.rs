use contracts::domain::facility::aggregate::FacilityDto;
use contracts::shared::listview::try_submit;
use leptos::prelude::*;
use std::rc::Rc;

use crate::domain::facility::model;

#[derive(Clone)]
pub struct FacilityDetailsViewModel {
    pub form: RwSignal<FacilityDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl FacilityDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(FacilityDto {
                facility_type: "field".to_string(),
                ..Default::default()
            }),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        if self.saving.get_untracked() {
            return;
        }

        let current = self.form.get_untracked();
        let error = self.error;
        let saving = self.saving;

        let outcome = try_submit(&current, |dto| {
            error.set(None);
            saving.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let result = model::create(&dto).await;
                saving.set(false);
                match result {
                    Ok(_) => (on_saved)(()),
                    Err(e) => error.set(Some(e)),
                }
            });
        });

        if let Err(e) = outcome {
            error.set(Some(e.to_string()));
        }
    }
}

impl Default for FacilityDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
