use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, JoinType, PaginatorTrait, QueryFilter,
    QuerySelect, Set,
};

/// Represents one enrollment attempt in the `enrollments` table.
///
/// One row per attempt: enrolling the same student in the same course twice
/// yields two rows with distinct ids.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, serde::Serialize)]
#[sea_orm(table_name = "enrollments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub enrollment_id: i64,
    pub student_id: i64,
    pub course_id: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::StudentId"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::CourseId"
    )]
    Course,
    #[sea_orm(has_many = "super::grade::Entity")]
    Grades,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::grade::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Grades.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Inserts one enrollment row for the given student/course pair.
    ///
    /// The pair is taken verbatim; whether the ids refer to real rows is the
    /// store's concern (foreign keys, if enforced).
    ///
    /// # Returns
    ///
    /// The newly created enrollment, including its generated `enrollment_id`.
    ///
    /// # Errors
    ///
    /// Returns a `DbErr` if the insert fails (e.g. a foreign-key violation).
    pub async fn create<C>(db: &C, student_id: i64, course_id: i64) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        ActiveModel {
            student_id: Set(student_id),
            course_id: Set(course_id),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    /// Checks whether the given professor is the professor of record for the
    /// course tied to the given enrollment.
    ///
    /// Zero matching rows means either the enrollment does not exist or the
    /// course belongs to someone else; callers treat both the same way.
    pub async fn is_taught_by<C>(db: &C, enrollment_id: i64, professor_id: i64) -> Result<bool, DbErr>
    where
        C: ConnectionTrait,
    {
        let matches = Entity::find()
            .filter(Column::EnrollmentId.eq(enrollment_id))
            .join(JoinType::InnerJoin, Relation::Course.def())
            .filter(super::course::Column::ProfessorId.eq(professor_id))
            .count(db)
            .await?;

        Ok(matches > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{course, professor, student};
    use crate::test_utils::setup_test_db;

    async fn seed_enrollment(db: &sea_orm::DatabaseConnection) -> (professor::Model, Model) {
        let prof = professor::Model::create(db, "Dr. A").await.unwrap();
        let course = course::Model::create(db, "Algorithms", prof.professor_id)
            .await
            .unwrap();
        let stud = student::Model::create(db, "Sam").await.unwrap();
        let enr = Model::create(db, stud.student_id, course.course_id)
            .await
            .unwrap();
        (prof, enr)
    }

    #[tokio::test]
    async fn create_assigns_fresh_ids() {
        let db = setup_test_db().await;
        let (_, first) = seed_enrollment(&db).await;
        assert_eq!(first.enrollment_id, 1);

        // Same pair again: a second row, not a conflict.
        let second = Model::create(&db, first.student_id, first.course_id)
            .await
            .unwrap();
        assert_eq!(second.enrollment_id, 2);
    }

    #[tokio::test]
    async fn is_taught_by_matches_professor_of_record() {
        let db = setup_test_db().await;
        let (prof, enr) = seed_enrollment(&db).await;

        assert!(
            Model::is_taught_by(&db, enr.enrollment_id, prof.professor_id)
                .await
                .unwrap()
        );

        let other = professor::Model::create(&db, "Dr. B").await.unwrap();
        assert!(
            !Model::is_taught_by(&db, enr.enrollment_id, other.professor_id)
                .await
                .unwrap()
        );

        // Unknown enrollment looks the same as a wrong professor.
        assert!(!Model::is_taught_by(&db, 999, prof.professor_id).await.unwrap());
    }
}
