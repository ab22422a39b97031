//! Payment request dialog (create only; settlement happens elsewhere).

mod view;
mod view_model;

pub use view::PaymentDetails;
pub use view_model::PaymentDetailsViewModel;
