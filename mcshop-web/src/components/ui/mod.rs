pub mod add_item_dialog;
pub mod cart_sheet;
pub mod catalog_filter;
pub mod item_card;
pub mod rarity_badge;
