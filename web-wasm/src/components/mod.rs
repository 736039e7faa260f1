//! UIコンポーネント

pub mod capture_button;
pub mod card_deck;
pub mod detail_overlay;
