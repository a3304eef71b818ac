pub mod listing_header;
pub mod review_filter;
pub mod review_form;
pub mod reviews_list;
pub mod stats_panel;
