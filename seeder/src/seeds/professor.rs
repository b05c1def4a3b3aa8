use crate::seed::Seeder;
use db::models::professor::Model;
use fake::{Fake, faker::name::en::NameWithTitle};
use sea_orm::DatabaseConnection;

pub struct ProfessorSeeder;

#[async_trait::async_trait]
impl Seeder for ProfessorSeeder {
    async fn seed(&self, db: &DatabaseConnection) {
        // Fixed professor so local requests have a known id 1
        let _ = Model::create(db, "Dr. A").await;

        // Random professors
        for _ in 0..5 {
            let name: String = NameWithTitle().fake();
            let _ = Model::create(db, &name).await;
        }
    }
}
