use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202508070001_create_professors::Migration),
            Box::new(migrations::m202508070002_create_students::Migration),
            Box::new(migrations::m202508070003_create_courses::Migration),
            Box::new(migrations::m202508070004_create_enrollments::Migration),
            Box::new(migrations::m202508070005_create_grades::Migration),
        ]
    }
}
