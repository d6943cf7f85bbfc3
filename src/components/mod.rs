pub mod comment_input;
pub mod detail_template;
pub mod keyword_review;
pub mod perfume_list;
pub mod photo_input;
pub mod review_form;
pub mod star_rating;
pub mod style_picker;
