pub mod prelude;

pub mod student;
