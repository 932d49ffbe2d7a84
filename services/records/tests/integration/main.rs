mod marks_test;
mod recipe_test;
mod report_card_test;
mod router_test;
mod student_test;
