pub mod card_animated;
pub mod date_range_picker;
pub mod stat_card;
pub mod table;
