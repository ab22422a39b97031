pub mod empty_state;
pub mod page_header;
pub mod search_input;
pub mod select_filter;
pub mod stat_card;
