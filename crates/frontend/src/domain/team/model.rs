use contracts::domain::team::aggregate::Team;

use crate::shared::data;

use super::sample;

pub async fn load() -> Vec<Team> {
    data::load_or_fallback(data::fetch_list::<Team>(), sample::teams).await
}
