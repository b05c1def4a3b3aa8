use crate::seed::Seeder;
use db::models::course::Entity as CourseEntity;
use db::models::enrollment::Model;
use db::models::student::Entity as StudentEntity;
use sea_orm::{DatabaseConnection, EntityTrait};

pub struct EnrollmentSeeder;

#[async_trait::async_trait]
impl Seeder for EnrollmentSeeder {
    async fn seed(&self, db: &DatabaseConnection) {
        let students = StudentEntity::find()
            .all(db)
            .await
            .expect("students must be seeded before enrollments");
        let courses = CourseEntity::find()
            .all(db)
            .await
            .expect("courses must be seeded before enrollments");

        // Each student takes a couple of randomly chosen courses. Duplicate
        // pairs are fine; the schema allows them.
        for student in &students {
            for _ in 0..2 {
                let course = &courses[fastrand::usize(..courses.len())];
                let _ = Model::create(db, student.student_id, course.course_id).await;
            }
        }
    }
}
