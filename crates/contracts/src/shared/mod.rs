pub mod listview;
pub mod summary;
