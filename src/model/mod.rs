pub mod defaults;
pub mod department;
pub mod employee;
pub mod leave;
pub mod user;
