use crate::seed::Seeder;
use db::models::student::Model;
use fake::{Fake, faker::name::en::Name};
use sea_orm::DatabaseConnection;

pub struct StudentSeeder;

#[async_trait::async_trait]
impl Seeder for StudentSeeder {
    async fn seed(&self, db: &DatabaseConnection) {
        for _ in 0..20 {
            let name: String = Name().fake();
            let _ = Model::create(db, &name).await;
        }
    }
}
