pub mod condition;
pub mod definition;
pub mod response;
pub mod result;
