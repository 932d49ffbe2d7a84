use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ReportCards::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ReportCards::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ReportCards::StudentId).integer().not_null())
                    .col(ColumnDef::new(ReportCards::StudentRank).integer().not_null())
                    .col(
                        ColumnDef::new(ReportCards::GeneratedOn)
                            .date()
                            .not_null()
                            .default(Expr::current_date()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ReportCards::Table, ReportCards::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ReportCards::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ReportCards {
    Table,
    Id,
    StudentId,
    StudentRank,
    GeneratedOn,
}

#[derive(Iden)]
enum Students {
    Table,
    Id,
}
