pub mod m202508070001_create_professors;
pub mod m202508070002_create_students;
pub mod m202508070003_create_courses;
pub mod m202508070004_create_enrollments;
pub mod m202508070005_create_grades;
