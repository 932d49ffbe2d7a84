use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "subjects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::subject_marks::Entity")]
    SubjectMarks,
}

impl Related<super::subject_marks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SubjectMarks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
