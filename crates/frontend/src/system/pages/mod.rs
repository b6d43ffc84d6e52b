pub mod login;
pub mod select_account;
pub mod select_sector;
