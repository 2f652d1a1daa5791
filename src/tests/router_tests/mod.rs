mod contact_tests;
mod listing_tests;
mod viewer_tests;
