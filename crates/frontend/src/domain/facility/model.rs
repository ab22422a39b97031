use contracts::domain::facility::aggregate::{Facility, FacilityDto};

use crate::shared::data;

use super::sample;

pub async fn load() -> Vec<Facility> {
    data::load_or_fallback(data::fetch_list::<Facility>(), sample::facilities).await
}

pub async fn create(dto: &FacilityDto) -> Result<Facility, String> {
    data::create_record(dto).await
}
