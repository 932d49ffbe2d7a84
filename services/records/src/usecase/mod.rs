pub mod account;
pub mod marks;
pub mod recipe;
pub mod report_card;
pub mod student;
