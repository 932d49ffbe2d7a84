use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Receipes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Receipes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Receipes::ReceipeName).string().not_null())
                    .col(
                        ColumnDef::new(Receipes::ReceipeDescription)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Receipes::ReceipeImage).string())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Receipes::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Receipes {
    Table,
    Id,
    ReceipeName,
    ReceipeDescription,
    ReceipeImage,
}
