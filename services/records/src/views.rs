//! HTML pages rendered by the records handlers.

use std::fmt::Write as _;

use axum::response::Html;
use serde::Serialize;

use campus_core::flash::FlashMessage;
use campus_core::html::{escape, page, path_segment};
use campus_domain::pagination::Page;

use crate::domain::types::{MarkSheet, RankedReportCard, Recipe, StudentRow};

const NAV: &str = r#"<nav><a href="/">Home</a> | <a href="/receipes/">Receipes</a> | <a href="/students/">Students</a> | <a href="/report-cards/">Report cards</a> | <a href="/logout/">Logout</a></nav>"#;

pub fn home_page(flashes: &[FlashMessage]) -> Html<String> {
    let body = format!(
        r#"{NAV}
<h1>Welcome</h1>
<ul>
<li><a href="/receipes/">Share a receipe</a></li>
<li><a href="/students/">Browse students</a></li>
<li><a href="/report-cards/">Report cards</a></li>
<li><a href="/login/">Login</a> or <a href="/register/">register</a></li>
</ul>"#
    );
    page("Home", flashes, &body)
}

pub fn login_page(flashes: &[FlashMessage]) -> Html<String> {
    page(
        "Login",
        flashes,
        r#"<h1>Login</h1>
<form method="post" action="/login/">
<label>Username <input type="text" name="username" required></label>
<label>Password <input type="password" name="password" required></label>
<button type="submit">Login</button>
</form>
<p>No account? <a href="/register/">Register</a></p>"#,
    )
}

pub fn register_page(flashes: &[FlashMessage]) -> Html<String> {
    page(
        "Register",
        flashes,
        r#"<h1>Register</h1>
<form method="post" action="/register/">
<label>First name <input type="text" name="first_name"></label>
<label>Last name <input type="text" name="last_name"></label>
<label>Username <input type="text" name="username" required></label>
<label>Password <input type="password" name="password" required></label>
<button type="submit">Register</button>
</form>
<p>Already registered? <a href="/login/">Login</a></p>"#,
    )
}

fn recipe_form(action: &str, recipe: Option<&Recipe>, submit: &str) -> String {
    let (name, description) = recipe
        .map(|r| (escape(&r.name), escape(&r.description)))
        .unwrap_or_default();
    format!(
        r#"<form method="post" action="{action}" enctype="multipart/form-data">
<label>Receipe name <input type="text" name="receipe_name" value="{name}" required></label>
<label>Receipe description <textarea name="receipe_description">{description}</textarea></label>
<label>Receipe image <input type="file" name="receipe_image" accept="image/*"></label>
<button type="submit">{submit}</button>
</form>"#,
        action = escape(action),
    )
}

fn recipe_image(recipe: &Recipe) -> String {
    match recipe.image {
        Some(ref path) => format!(
            r#"<img src="/media/{}" alt="{}" width="120">"#,
            escape(path),
            escape(&recipe.name)
        ),
        None => String::new(),
    }
}

pub fn recipes_page(
    recipes: &[Recipe],
    search: Option<&str>,
    flashes: &[FlashMessage],
) -> Html<String> {
    let mut rows = String::new();
    for (n, recipe) in recipes.iter().enumerate() {
        let _ = writeln!(
            rows,
            r#"<tr data-id="{id}"><td>{n}</td><td>{name}</td><td>{description}</td><td>{image}</td><td><a href="/update-receipe/{id}">Update</a> <a href="/delete-receipe/{id}">Delete</a></td></tr>"#,
            id = recipe.id,
            n = n + 1,
            name = escape(&recipe.name),
            description = escape(&recipe.description),
            image = recipe_image(recipe),
        );
    }
    if recipes.is_empty() {
        rows.push_str(r#"<tr><td colspan="5" class="empty">No receipes found</td></tr>"#);
    }
    let body = format!(
        r#"{NAV}
<h1>Add receipe</h1>
{form}
<form method="get" action="/receipes/">
<input type="search" name="search" value="{search}" placeholder="Search receipes">
<button type="submit">Search</button>
</form>
<table class="receipes">
<thead><tr><th>#</th><th>Name</th><th>Description</th><th>Image</th><th>Actions</th></tr></thead>
<tbody>
{rows}
</tbody>
</table>"#,
        form = recipe_form("/receipes/", None, "Add receipe"),
        search = escape(search.unwrap_or_default()),
    );
    page("Receipes", flashes, &body)
}

pub fn edit_recipe_page(recipe: &Recipe, flashes: &[FlashMessage]) -> Html<String> {
    let body = format!(
        r#"{NAV}
<h1>Update receipe</h1>
{image}
{form}"#,
        image = recipe_image(recipe),
        form = recipe_form(
            &format!("/update-receipe/{}", recipe.id),
            Some(recipe),
            "Update receipe"
        ),
    );
    page("Update receipe", flashes, &body)
}

#[derive(Serialize)]
struct StudentsLink<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    search: Option<&'a str>,
    page: u64,
}

fn students_link(search: Option<&str>, page: u64) -> String {
    serde_qs::to_string(&StudentsLink { search, page })
        .map(|qs| format!("/students/?{}", escape(&qs)))
        .unwrap_or_else(|_| format!("/students/?page={page}"))
}

pub fn students_page(
    students: &Page<StudentRow>,
    search: Option<&str>,
    flashes: &[FlashMessage],
) -> Html<String> {
    let mut rows = String::new();
    for s in &students.items {
        let _ = writeln!(
            rows,
            r#"<tr data-id="{id}"><td><a href="/see_marks/{code_path}">{code}</a></td><td>{name}</td><td>{department}</td><td>{email}</td><td>{age}</td></tr>"#,
            id = s.id,
            code_path = path_segment(&s.student_code),
            code = escape(&s.student_code),
            name = escape(&s.name),
            department = escape(&s.department),
            email = escape(&s.email),
            age = s.age,
        );
    }
    if students.items.is_empty() {
        rows.push_str(r#"<tr><td colspan="5" class="empty">No students found</td></tr>"#);
    }

    let mut pager = String::new();
    if students.has_previous() {
        let _ = write!(
            pager,
            r#"<a href="{}">first</a> <a href="{}">previous</a> "#,
            students_link(search, 1),
            students_link(search, students.number - 1),
        );
    }
    let _ = write!(
        pager,
        r#"<span class="current">Page {} of {}</span>"#,
        students.number, students.num_pages
    );
    if students.has_next() {
        let _ = write!(
            pager,
            r#" <a href="{}">next</a> <a href="{}">last</a>"#,
            students_link(search, students.number + 1),
            students_link(search, students.num_pages),
        );
    }

    let body = format!(
        r#"{NAV}
<h1>Students</h1>
<form method="get" action="/students/">
<input type="search" name="search" value="{search}" placeholder="Name, id, department, age or email">
<button type="submit">Search</button>
</form>
<table class="students" data-total="{total}">
<thead><tr><th>Student id</th><th>Name</th><th>Department</th><th>Email</th><th>Age</th></tr></thead>
<tbody>
{rows}
</tbody>
</table>
<div class="pagination">{pager}</div>"#,
        search = escape(search.unwrap_or_default()),
        total = students.total,
    );
    page("Students", flashes, &body)
}

pub fn marks_page(sheet: &MarkSheet) -> Html<String> {
    let heading = match sheet.student_name {
        Some(ref name) => format!("{} ({})", escape(name), escape(&sheet.student_code)),
        None => escape(&sheet.student_code),
    };
    let mut rows = String::new();
    for (n, mark) in sheet.marks.iter().enumerate() {
        let _ = writeln!(
            rows,
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            n + 1,
            escape(&mark.subject),
            mark.marks
        );
    }
    if sheet.marks.is_empty() {
        rows.push_str(r#"<tr><td colspan="3" class="empty">No marks recorded</td></tr>"#);
    }
    let body = format!(
        r#"{NAV}
<h1>Marks of {heading}</h1>
<table class="marks">
<thead><tr><th>#</th><th>Subject</th><th>Marks</th></tr></thead>
<tbody>
{rows}
</tbody>
<tfoot><tr><th colspan="2">Total</th><td data-total="{total}">{total}</td></tr></tfoot>
</table>"#,
        total = sheet.total,
    );
    page("Marks", &[], &body)
}

pub fn report_cards_page(cards: &[RankedReportCard], flashes: &[FlashMessage]) -> Html<String> {
    let mut rows = String::new();
    for r in cards {
        let flag = if r.rank_mismatch() {
            format!(
                r#" <span class="rank-mismatch" title="totals imply rank {0}">(expected {0})</span>"#,
                r.implied_rank
            )
        } else {
            String::new()
        };
        let _ = writeln!(
            rows,
            r#"<tr data-id="{id}"><td>{name}</td><td>{code}</td><td>{rank}{flag}</td><td>{total}</td><td>{date}</td></tr>"#,
            id = r.card.id,
            name = escape(&r.card.student_name),
            code = escape(&r.card.student_code),
            rank = r.card.stored_rank,
            total = r.card.total_marks,
            date = r.card.generated_on.format("%Y-%m-%d"),
        );
    }
    if cards.is_empty() {
        rows.push_str(r#"<tr><td colspan="5" class="empty">No report cards</td></tr>"#);
    }
    let body = format!(
        r#"{NAV}
<h1>Report cards</h1>
<table class="report-cards">
<thead><tr><th>Student</th><th>Student id</th><th>Rank</th><th>Total marks</th><th>Generated</th></tr></thead>
<tbody>
{rows}
</tbody>
</table>"#
    );
    page("Report cards", flashes, &body)
}
