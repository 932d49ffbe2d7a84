use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CustomUsers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CustomUsers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CustomUsers::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(CustomUsers::Username).string().not_null())
                    .col(ColumnDef::new(CustomUsers::Password).string().not_null())
                    .col(
                        ColumnDef::new(CustomUsers::FirstName)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(CustomUsers::LastName)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(CustomUsers::UserType)
                            .small_integer()
                            .not_null()
                            .default(1),
                    )
                    .col(ColumnDef::new(CustomUsers::ProfilePic).string())
                    .col(
                        ColumnDef::new(CustomUsers::DateJoined)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CustomUsers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum CustomUsers {
    Table,
    Id,
    Email,
    Username,
    Password,
    FirstName,
    LastName,
    UserType,
    ProfilePic,
    DateJoined,
}
