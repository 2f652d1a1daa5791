mod contact;
mod home;
mod properties;
mod property_detail;
mod viewer;

pub use contact::{contact_page, inquiry_sent_page, tour_scheduled_page};
pub use home::home_page;
pub use properties::properties_page;
pub use property_detail::property_detail_page;
pub use viewer::viewer_page;
