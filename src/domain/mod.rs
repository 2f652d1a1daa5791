pub mod criteria;
pub mod inquiry;
pub mod listing;
pub mod scene;
pub mod section;
