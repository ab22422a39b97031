use contracts::domain::volunteer::aggregate::Volunteer;

use crate::shared::data;

use super::sample;

pub async fn load() -> Vec<Volunteer> {
    data::load_or_fallback(data::fetch_list::<Volunteer>(), sample::volunteers).await
}
