pub mod avatar;
pub mod badge;
pub mod card;
pub mod icon;
