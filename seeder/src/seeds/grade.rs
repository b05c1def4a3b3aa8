use crate::seed::Seeder;
use db::models::enrollment::Entity as EnrollmentEntity;
use db::models::grade::Model;
use sea_orm::{DatabaseConnection, EntityTrait};

pub struct GradeSeeder;

#[async_trait::async_trait]
impl Seeder for GradeSeeder {
    async fn seed(&self, db: &DatabaseConnection) {
        let enrollments = EnrollmentEntity::find()
            .all(db)
            .await
            .expect("enrollments must be seeded before grades");

        // Grade roughly two thirds of enrollments, leaving the rest ungraded
        // so the average-grades report has courses to omit.
        for enrollment in &enrollments {
            if fastrand::u8(..3) > 0 {
                let grade = fastrand::u8(40..=100) as f64;
                let _ = Model::create(db, enrollment.enrollment_id, grade).await;
            }
        }
    }
}
