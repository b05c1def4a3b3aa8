use crate::seed::{Seeder, run_seeder};
use crate::seeds::{
    course::CourseSeeder, enrollment::EnrollmentSeeder, grade::GradeSeeder,
    professor::ProfessorSeeder, student::StudentSeeder,
};

mod seed;
mod seeds;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let db = db::connect().await;

    // Foreign-key dependency order: people first, then courses, then the
    // rows that reference them.
    for (seeder, name) in [
        (
            Box::new(ProfessorSeeder) as Box<dyn Seeder + Send + Sync>,
            "Professor",
        ),
        (Box::new(StudentSeeder), "Student"),
        (Box::new(CourseSeeder), "Course"),
        (Box::new(EnrollmentSeeder), "Enrollment"),
        (Box::new(GradeSeeder), "Grade"),
    ] {
        run_seeder(&*seeder, name, &db).await;
    }
}
