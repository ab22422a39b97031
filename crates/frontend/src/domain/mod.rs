pub mod equipment;
pub mod facility;
pub mod guardian;
pub mod notification;
pub mod payment;
pub mod player;
pub mod team;
pub mod volunteer;
