pub mod apply_form;
pub mod housing_location_card;
pub mod login_form;
pub mod navigation_bar;
pub mod search_bar;
