use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "receipes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub receipe_name: String,
    #[sea_orm(column_type = "Text")]
    pub receipe_description: String,
    /// Path relative to the media root.
    pub receipe_image: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
