use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202508070005_create_grades"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    // Grades append: an enrollment may accumulate several grade rows, so
    // enrollment_id is deliberately not unique here.
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("grades"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("grade_id")).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Alias::new("enrollment_id")).integer().not_null())
                    .col(ColumnDef::new(Alias::new("grade")).double().not_null())
                    .col(ColumnDef::new(Alias::new("created_at")).timestamp().not_null().default(Expr::cust("CURRENT_TIMESTAMP")))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("grades"), Alias::new("enrollment_id"))
                            .to(Alias::new("enrollments"), Alias::new("enrollment_id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("grades")).to_owned())
            .await
    }
}
