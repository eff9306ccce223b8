pub mod students;
