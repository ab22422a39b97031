//! Player details UI module.
//!
//! Simplified MVVM pattern:
//! - view_model.rs: form state, validation gate, save command
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::PlayerDetails;
pub use view_model::PlayerDetailsViewModel;
