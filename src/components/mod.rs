pub mod filter_bar;
pub mod review_form;
pub mod reviews_list;
pub mod star_rating;
pub mod stats_panel;
pub mod toast;
