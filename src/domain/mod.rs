pub mod category;
pub mod favorite;
pub mod lead;
pub mod listing;
pub mod logic;
pub mod publish;
pub mod search;
