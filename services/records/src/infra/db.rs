use std::collections::HashMap;

use anyhow::Context as _;
use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, FromQueryResult, JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, SqlErr, sea_query::Expr,
};

use campus_core::sea_ext::{as_text, lower_like};
use campus_domain::pagination::{Page, PageRequest};
use campus_domain::search::SearchTerm;
use campus_records_schema::{
    accounts, departments, receipes, report_cards, student_ids, students, subject_marks, subjects,
};

use crate::domain::repository::{
    AccountRepository, MarksRepository, RecipeRepository, ReportCardRepository, StudentRepository,
};
use crate::domain::types::{
    Account, NewAccount, Recipe, RecipeFields, ReportCard, StudentRow, SubjectMark,
};
use crate::error::RecordsError;

// ── Account repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAccountRepository {
    pub db: DatabaseConnection,
}

impl AccountRepository for DbAccountRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, RecordsError> {
        let model = accounts::Entity::find()
            .filter(accounts::Column::Username.eq(username))
            .one(&self.db)
            .await
            .context("find account by username")?;
        Ok(model.map(account_from_model))
    }

    async fn create(&self, account: &NewAccount) -> Result<Account, RecordsError> {
        let result = accounts::ActiveModel {
            username: Set(account.username.clone()),
            password: Set(account.password_hash.clone()),
            first_name: Set(account.first_name.clone()),
            last_name: Set(account.last_name.clone()),
            date_joined: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await;
        match result {
            Ok(model) => Ok(account_from_model(model)),
            // Lost a race with a concurrent registration of the same name.
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(RecordsError::UsernameTaken)
            }
            Err(e) => Err(anyhow::Error::new(e).context("create account").into()),
        }
    }
}

fn account_from_model(model: accounts::Model) -> Account {
    Account {
        id: model.id,
        username: model.username,
        password_hash: model.password,
        first_name: model.first_name,
        last_name: model.last_name,
    }
}

// ── Recipe repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRecipeRepository {
    pub db: DatabaseConnection,
}

impl RecipeRepository for DbRecipeRepository {
    async fn list(&self, search: Option<&SearchTerm>) -> Result<Vec<Recipe>, RecordsError> {
        let mut query = receipes::Entity::find();
        if let Some(term) = search {
            query = query.filter(lower_like(
                Expr::col(receipes::Column::ReceipeName),
                &term.like_pattern(),
            ));
        }
        let models = query
            .order_by_asc(receipes::Column::Id)
            .all(&self.db)
            .await
            .context("list recipes")?;
        Ok(models.into_iter().map(recipe_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Recipe>, RecordsError> {
        let model = receipes::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find recipe by id")?;
        Ok(model.map(recipe_from_model))
    }

    async fn create(&self, fields: &RecipeFields) -> Result<Recipe, RecordsError> {
        let model = receipes::ActiveModel {
            receipe_name: Set(fields.name.clone()),
            receipe_description: Set(fields.description.clone()),
            receipe_image: Set(fields.image.clone()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create recipe")?;
        Ok(recipe_from_model(model))
    }

    async fn update(&self, id: i32, fields: &RecipeFields) -> Result<bool, RecordsError> {
        let mut am = receipes::ActiveModel {
            id: Set(id),
            receipe_name: Set(fields.name.clone()),
            receipe_description: Set(fields.description.clone()),
            ..Default::default()
        };
        if let Some(ref image) = fields.image {
            am.receipe_image = Set(Some(image.clone()));
        }
        match am.update(&self.db).await {
            Ok(_) => Ok(true),
            Err(DbErr::RecordNotUpdated) => Ok(false),
            Err(e) => Err(anyhow::Error::new(e).context("update recipe").into()),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool, RecordsError> {
        let result = receipes::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete recipe")?;
        Ok(result.rows_affected > 0)
    }
}

fn recipe_from_model(model: receipes::Model) -> Recipe {
    Recipe {
        id: model.id,
        name: model.receipe_name,
        description: model.receipe_description,
        image: model.receipe_image,
    }
}

// ── Student repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbStudentRepository {
    pub db: DatabaseConnection,
}

#[derive(Debug, FromQueryResult)]
struct StudentQueryRow {
    id: i32,
    name: String,
    email: String,
    age: i32,
    department: String,
    student_code: String,
}

impl StudentRepository for DbStudentRepository {
    async fn search(
        &self,
        search: Option<&SearchTerm>,
        page: PageRequest,
    ) -> Result<Page<StudentRow>, RecordsError> {
        let mut query = students::Entity::find()
            .join(JoinType::InnerJoin, students::Relation::Department.def())
            .join(JoinType::InnerJoin, students::Relation::StudentId.def());
        if let Some(term) = search {
            let pattern = term.like_pattern();
            query = query.filter(
                Condition::any()
                    .add(lower_like(
                        Expr::col((students::Entity, students::Column::Name)),
                        &pattern,
                    ))
                    .add(lower_like(
                        Expr::col((student_ids::Entity, student_ids::Column::Code)),
                        &pattern,
                    ))
                    .add(lower_like(
                        Expr::col((departments::Entity, departments::Column::Name)),
                        &pattern,
                    ))
                    .add(lower_like(
                        as_text(Expr::col((students::Entity, students::Column::Age))),
                        &pattern,
                    ))
                    .add(lower_like(
                        Expr::col((students::Entity, students::Column::Email)),
                        &pattern,
                    )),
            );
        }

        let total = query
            .clone()
            .count(&self.db)
            .await
            .context("count students")?;
        let window = page.resolve(total);

        let rows = query
            .select_only()
            .column(students::Column::Id)
            .column(students::Column::Name)
            .column(students::Column::Email)
            .column(students::Column::Age)
            .column_as(departments::Column::Name, "department")
            .column_as(student_ids::Column::Code, "student_code")
            .order_by_asc(students::Column::Id)
            .offset(window.offset())
            .limit(window.limit())
            .into_model::<StudentQueryRow>()
            .all(&self.db)
            .await
            .context("search students")?;

        let items = rows
            .into_iter()
            .map(|r| StudentRow {
                id: r.id,
                name: r.name,
                student_code: r.student_code,
                department: r.department,
                email: r.email,
                age: r.age,
            })
            .collect();
        Ok(Page::new(items, window, total))
    }
}

// ── Marks repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbMarksRepository {
    pub db: DatabaseConnection,
}

#[derive(Debug, FromQueryResult)]
struct MarkQueryRow {
    subject: String,
    marks: i32,
}

fn marks_of(code: &str) -> sea_orm::Select<subject_marks::Entity> {
    subject_marks::Entity::find()
        .join(JoinType::InnerJoin, subject_marks::Relation::Student.def())
        .join(JoinType::InnerJoin, students::Relation::StudentId.def())
        .filter(student_ids::Column::Code.eq(code))
}

impl MarksRepository for DbMarksRepository {
    async fn student_name(&self, code: &str) -> Result<Option<String>, RecordsError> {
        let student = students::Entity::find()
            .join(JoinType::InnerJoin, students::Relation::StudentId.def())
            .filter(student_ids::Column::Code.eq(code))
            .one(&self.db)
            .await
            .context("find student by code")?;
        Ok(student.map(|s| s.name))
    }

    async fn list_marks(&self, code: &str) -> Result<Vec<SubjectMark>, RecordsError> {
        let rows = marks_of(code)
            .join(JoinType::InnerJoin, subject_marks::Relation::Subject.def())
            .select_only()
            .column_as(subjects::Column::Name, "subject")
            .column(subject_marks::Column::Marks)
            .order_by_asc(subject_marks::Column::Id)
            .into_model::<MarkQueryRow>()
            .all(&self.db)
            .await
            .context("list marks")?;
        Ok(rows
            .into_iter()
            .map(|r| SubjectMark {
                subject: r.subject,
                marks: r.marks,
            })
            .collect())
    }

    async fn total_marks(&self, code: &str) -> Result<i64, RecordsError> {
        let total = marks_of(code)
            .select_only()
            .column_as(subject_marks::Column::Marks.sum(), "total")
            .into_tuple::<Option<i64>>()
            .one(&self.db)
            .await
            .context("sum marks")?;
        Ok(total.flatten().unwrap_or(0))
    }
}

// ── Report card repository ───────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbReportCardRepository {
    pub db: DatabaseConnection,
}

#[derive(Debug, FromQueryResult)]
struct CardQueryRow {
    id: i32,
    student_id: i32,
    student_rank: i32,
    generated_on: NaiveDate,
    student_name: String,
    student_code: String,
}

impl ReportCardRepository for DbReportCardRepository {
    async fn list(&self) -> Result<Vec<ReportCard>, RecordsError> {
        let rows = report_cards::Entity::find()
            .join(JoinType::InnerJoin, report_cards::Relation::Student.def())
            .join(JoinType::InnerJoin, students::Relation::StudentId.def())
            .select_only()
            .column(report_cards::Column::Id)
            .column(report_cards::Column::StudentId)
            .column(report_cards::Column::StudentRank)
            .column(report_cards::Column::GeneratedOn)
            .column_as(students::Column::Name, "student_name")
            .column_as(student_ids::Column::Code, "student_code")
            .order_by_asc(report_cards::Column::StudentRank)
            .order_by_asc(report_cards::Column::Id)
            .into_model::<CardQueryRow>()
            .all(&self.db)
            .await
            .context("list report cards")?;

        let ids: Vec<i32> = rows.iter().map(|r| r.student_id).collect();
        let totals: HashMap<i32, i64> = if ids.is_empty() {
            HashMap::new()
        } else {
            subject_marks::Entity::find()
                .select_only()
                .column(subject_marks::Column::StudentId)
                .column_as(subject_marks::Column::Marks.sum(), "total")
                .filter(subject_marks::Column::StudentId.is_in(ids))
                .group_by(subject_marks::Column::StudentId)
                .into_tuple::<(i32, Option<i64>)>()
                .all(&self.db)
                .await
                .context("sum marks per student")?
                .into_iter()
                .map(|(id, total)| (id, total.unwrap_or(0)))
                .collect()
        };

        Ok(rows
            .into_iter()
            .map(|r| ReportCard {
                id: r.id,
                total_marks: totals.get(&r.student_id).copied().unwrap_or(0),
                student_id: r.student_id,
                student_name: r.student_name,
                student_code: r.student_code,
                stored_rank: r.student_rank,
                generated_on: r.generated_on,
            })
            .collect())
    }
}
