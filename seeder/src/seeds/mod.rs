pub mod course;
pub mod enrollment;
pub mod grade;
pub mod professor;
pub mod student;
