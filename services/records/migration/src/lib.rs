use sea_orm_migration::prelude::*;

mod m20250401_000001_create_accounts;
mod m20250401_000002_create_receipes;
mod m20250401_000003_create_departments;
mod m20250401_000004_create_student_ids;
mod m20250401_000005_create_students;
mod m20250401_000006_create_subjects;
mod m20250401_000007_create_subject_marks;
mod m20250401_000008_create_report_cards;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250401_000001_create_accounts::Migration),
            Box::new(m20250401_000002_create_receipes::Migration),
            Box::new(m20250401_000003_create_departments::Migration),
            Box::new(m20250401_000004_create_student_ids::Migration),
            Box::new(m20250401_000005_create_students::Migration),
            Box::new(m20250401_000006_create_subjects::Migration),
            Box::new(m20250401_000007_create_subject_marks::Migration),
            Box::new(m20250401_000008_create_report_cards::Migration),
        ]
    }
}
