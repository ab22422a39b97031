use leptos::prelude::*;

use crate::dashboards::overview::OverviewDashboard;
use crate::domain::equipment::ui::list::EquipmentList;
use crate::domain::facility::ui::list::FacilitiesList;
use crate::domain::guardian::ui::list::GuardiansList;
use crate::domain::notification::ui::list::NotificationsList;
use crate::domain::payment::ui::list::PaymentsList;
use crate::domain::player::ui::list::PlayersList;
use crate::domain::volunteer::ui::list::VolunteersList;

/// Top-level screens. Navigation is a plain enum: the app has no deep
/// links and no URL state in scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Players,
    Payments,
    Facilities,
    Guardians,
    Volunteers,
    Notifications,
    Equipment,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Players => "Players",
            Page::Payments => "Payments",
            Page::Facilities => "Facilities",
            Page::Guardians => "Guardians",
            Page::Volunteers => "Volunteers",
            Page::Notifications => "Notifications",
            Page::Equipment => "Equipment",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Players => "players",
            Page::Payments => "payments",
            Page::Facilities => "facilities",
            Page::Guardians => "guardians",
            Page::Volunteers => "volunteers",
            Page::Notifications => "bell",
            Page::Equipment => "equipment",
        }
    }

    pub fn all() -> &'static [Page] {
        &[
            Page::Dashboard,
            Page::Players,
            Page::Payments,
            Page::Facilities,
            Page::Guardians,
            Page::Volunteers,
            Page::Notifications,
            Page::Equipment,
        ]
    }
}

/// Navigation service: the currently active page.
#[derive(Clone, Copy)]
pub struct Nav {
    pub active: RwSignal<Page>,
}

impl Nav {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Page::Dashboard),
        }
    }

    pub fn open(&self, page: Page) {
        self.active.set(page);
    }
}

impl Default for Nav {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let nav = use_context::<Nav>().expect("Nav not found in context");

    move || match nav.active.get() {
        Page::Dashboard => view! { <OverviewDashboard /> }.into_any(),
        Page::Players => view! { <PlayersList /> }.into_any(),
        Page::Payments => view! { <PaymentsList /> }.into_any(),
        Page::Facilities => view! { <FacilitiesList /> }.into_any(),
        Page::Guardians => view! { <GuardiansList /> }.into_any(),
        Page::Volunteers => view! { <VolunteersList /> }.into_any(),
        Page::Notifications => view! { <NotificationsList /> }.into_any(),
        Page::Equipment => view! { <EquipmentList /> }.into_any(),
    }
}
