use contracts::domain::guardian::aggregate::Guardian;

use crate::shared::data;

use super::sample;

pub async fn load() -> Vec<Guardian> {
    data::load_or_fallback(data::fetch_list::<Guardian>(), sample::guardians).await
}
