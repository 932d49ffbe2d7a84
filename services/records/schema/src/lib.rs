pub mod accounts;
pub mod departments;
pub mod receipes;
pub mod report_cards;
pub mod student_ids;
pub mod students;
pub mod subject_marks;
pub mod subjects;
