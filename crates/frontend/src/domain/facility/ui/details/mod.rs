mod view;
mod view_model;

pub use view::FacilityDetails;
pub use view_model::FacilityDetailsViewModel;
