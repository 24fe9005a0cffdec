pub mod generate;
pub mod page;
