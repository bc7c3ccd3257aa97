pub mod birthdays;
pub mod dashboard;
