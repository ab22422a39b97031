use contracts::domain::payment::aggregate::{Payment, PaymentDto};

use crate::shared::data;

use super::sample;

pub async fn load() -> Vec<Payment> {
    data::load_or_fallback(data::fetch_list::<Payment>(), sample::payments).await
}

pub async fn create(dto: &PaymentDto) -> Result<Payment, String> {
    data::create_record(dto).await
}
