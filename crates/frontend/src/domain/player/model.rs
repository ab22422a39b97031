use contracts::domain::player::aggregate::{Player, PlayerDto};

use crate::shared::data;

use super::sample;

pub async fn load() -> Vec<Player> {
    data::load_or_fallback(data::fetch_list::<Player>(), sample::players).await
}

pub async fn create(dto: &PlayerDto) -> Result<Player, String> {
    data::create_record(dto).await
}

pub async fn update(id: i32, dto: &PlayerDto) -> Result<Player, String> {
    data::update_record(id, dto).await
}
