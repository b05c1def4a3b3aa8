use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{ActiveModelTrait, ConnectionTrait, FromQueryResult, JoinType, QuerySelect, Set};

/// Represents a course in the `courses` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, serde::Serialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub course_id: i64,
    pub course_name: String,
    /// Professor of record; only this professor may grade the course's enrollments.
    pub professor_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::professor::Entity",
        from = "Column::ProfessorId",
        to = "super::professor::Column::ProfessorId"
    )]
    Professor,
    #[sea_orm(has_many = "super::enrollment::Entity")]
    Enrollments,
}

impl Related<super::professor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Professor.def()
    }
}

impl Related<super::enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// One row of the course listing: a course name with its professor's name.
#[derive(Debug, Clone, PartialEq, FromQueryResult, serde::Serialize)]
pub struct CourseWithProfessor {
    pub course_name: String,
    pub professor_name: String,
}

/// One row of the average-grades report.
#[derive(Debug, Clone, PartialEq, FromQueryResult, serde::Serialize)]
pub struct CourseAverageGrade {
    pub course_name: String,
    pub average_grade: f64,
}

impl Model {
    /// Creates a new course record taught by the given professor.
    ///
    /// # Errors
    ///
    /// Returns a `DbErr` if the insert fails (e.g. unknown professor id when
    /// the store enforces the foreign key).
    pub async fn create<C>(db: &C, course_name: &str, professor_id: i64) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let now = Utc::now();
        ActiveModel {
            course_name: Set(course_name.to_string()),
            professor_id: Set(professor_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    /// Lists every course together with the name of the professor teaching it.
    ///
    /// Result order is whatever the store returns; callers get zero or more
    /// rows and no pagination.
    pub async fn with_professors<C>(db: &C) -> Result<Vec<CourseWithProfessor>, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find()
            .select_only()
            .column(Column::CourseName)
            .column_as(super::professor::Column::Name, "professor_name")
            .join(JoinType::InnerJoin, Relation::Professor.def())
            .into_model::<CourseWithProfessor>()
            .all(db)
            .await
    }

    /// Computes the arithmetic mean grade per course.
    ///
    /// Courses without any graded enrollment produce no row at all (inner
    /// joins), not a null average. Duplicate grade rows for one enrollment
    /// all count toward the mean.
    pub async fn average_grades<C>(db: &C) -> Result<Vec<CourseAverageGrade>, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find()
            .select_only()
            .column(Column::CourseName)
            .column_as(
                Expr::expr(Func::avg(Expr::col((
                    super::grade::Entity,
                    super::grade::Column::Grade,
                )))),
                "average_grade",
            )
            .join(JoinType::InnerJoin, Relation::Enrollments.def())
            .join(
                JoinType::InnerJoin,
                super::enrollment::Relation::Grades.def(),
            )
            .group_by(Column::CourseName)
            .into_model::<CourseAverageGrade>()
            .all(db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{enrollment, grade, professor, student};
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn with_professors_joins_names() {
        let db = setup_test_db().await;

        let prof = professor::Model::create(&db, "Dr. A").await.unwrap();
        Model::create(&db, "Algorithms", prof.professor_id)
            .await
            .unwrap();

        let rows = Model::with_professors(&db).await.unwrap();
        assert_eq!(
            rows,
            vec![CourseWithProfessor {
                course_name: "Algorithms".into(),
                professor_name: "Dr. A".into(),
            }]
        );
    }

    #[tokio::test]
    async fn with_professors_empty_store_returns_no_rows() {
        let db = setup_test_db().await;
        assert!(Model::with_professors(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn average_grades_means_per_course_and_omits_ungraded() {
        let db = setup_test_db().await;

        let prof = professor::Model::create(&db, "Dr. A").await.unwrap();
        let graded = Model::create(&db, "Algorithms", prof.professor_id)
            .await
            .unwrap();
        let ungraded = Model::create(&db, "Databases", prof.professor_id)
            .await
            .unwrap();
        let stud = student::Model::create(&db, "Sam").await.unwrap();

        let enr = enrollment::Model::create(&db, stud.student_id, graded.course_id)
            .await
            .unwrap();
        enrollment::Model::create(&db, stud.student_id, ungraded.course_id)
            .await
            .unwrap();

        grade::Model::create(&db, enr.enrollment_id, 80.0)
            .await
            .unwrap();
        grade::Model::create(&db, enr.enrollment_id, 100.0)
            .await
            .unwrap();

        let report = Model::average_grades(&db).await.unwrap();
        assert_eq!(
            report,
            vec![CourseAverageGrade {
                course_name: "Algorithms".into(),
                average_grade: 90.0,
            }]
        );
    }
}
