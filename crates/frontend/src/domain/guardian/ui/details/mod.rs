//! Guardian details dialog.
//!
//! Read-only: guardians are managed through the player form, the
//! directory only surfaces contact information.

mod view;

pub use view::GuardianDetails;
