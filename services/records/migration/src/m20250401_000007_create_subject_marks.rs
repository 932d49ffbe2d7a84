use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SubjectMarks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SubjectMarks::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SubjectMarks::StudentId).integer().not_null())
                    .col(ColumnDef::new(SubjectMarks::SubjectId).integer().not_null())
                    .col(ColumnDef::new(SubjectMarks::Marks).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(SubjectMarks::Table, SubjectMarks::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(SubjectMarks::Table, SubjectMarks::SubjectId)
                            .to(Subjects::Table, Subjects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_subject_marks_student_id")
                    .table(SubjectMarks::Table)
                    .col(SubjectMarks::StudentId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SubjectMarks::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum SubjectMarks {
    Table,
    Id,
    StudentId,
    SubjectId,
    Marks,
}

#[derive(Iden)]
enum Students {
    Table,
    Id,
}

#[derive(Iden)]
enum Subjects {
    Table,
    Id,
}
