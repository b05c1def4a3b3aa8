use crate::seed::Seeder;
use db::models::course::Model;
use db::models::professor::Entity as ProfessorEntity;
use sea_orm::{DatabaseConnection, EntityTrait};

pub struct CourseSeeder;

const COURSE_NAMES: &[&str] = &[
    "Algorithms",
    "Databases",
    "Operating Systems",
    "Linear Algebra",
    "Software Engineering",
    "Computer Networks",
];

#[async_trait::async_trait]
impl Seeder for CourseSeeder {
    async fn seed(&self, db: &DatabaseConnection) {
        let professors = ProfessorEntity::find()
            .all(db)
            .await
            .expect("professors must be seeded before courses");

        for course_name in COURSE_NAMES {
            let professor = &professors[fastrand::usize(..professors.len())];
            let _ = Model::create(db, course_name, professor.professor_id).await;
        }
    }
}
