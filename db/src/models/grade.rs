use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, ConnectionTrait, Set};

/// Represents one grade row in the `grades` table.
///
/// Grades are append-only: assigning again for the same enrollment adds
/// another row rather than updating the previous one.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, serde::Serialize)]
#[sea_orm(table_name = "grades")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub grade_id: i64,
    pub enrollment_id: i64,
    /// Numeric value in [0, 100]; range-checked by the caller before insert.
    pub grade: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::enrollment::Entity",
        from = "Column::EnrollmentId",
        to = "super::enrollment::Column::EnrollmentId"
    )]
    Enrollment,
}

impl Related<super::enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Appends a new grade row tied to the given enrollment.
    ///
    /// # Errors
    ///
    /// Returns a `DbErr` if the insert fails.
    pub async fn create<C>(db: &C, enrollment_id: i64, grade: f64) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        ActiveModel {
            enrollment_id: Set(enrollment_id),
            grade: Set(grade),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(db)
        .await
    }
}
