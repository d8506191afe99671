pub mod contact;
pub mod page;
