pub mod award;
pub mod document;
pub mod training;
pub mod upcoming;
pub mod volunteer;
