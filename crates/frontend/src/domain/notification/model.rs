use contracts::domain::notification::aggregate::Notification;

use crate::shared::data;

use super::sample;

pub async fn load() -> Vec<Notification> {
    data::load_or_fallback(data::fetch_list::<Notification>(), sample::notifications).await
}
