use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub department_id: i32,
    #[sea_orm(unique)]
    pub student_code_id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub age: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::departments::Entity",
        from = "Column::DepartmentId",
        to = "super::departments::Column::Id"
    )]
    Department,
    #[sea_orm(
        belongs_to = "super::student_ids::Entity",
        from = "Column::StudentCodeId",
        to = "super::student_ids::Column::Id"
    )]
    StudentId,
    #[sea_orm(has_many = "super::subject_marks::Entity")]
    SubjectMarks,
    #[sea_orm(has_many = "super::report_cards::Entity")]
    ReportCard,
}

impl Related<super::departments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl Related<super::student_ids::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentId.def()
    }
}

impl Related<super::subject_marks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SubjectMarks.def()
    }
}

impl Related<super::report_cards::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReportCard.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
