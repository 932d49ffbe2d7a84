//! HTML pages rendered by the school handlers.

use axum::response::Html;

use campus_core::flash::FlashMessage;
use campus_core::html::{escape, page};

use crate::domain::types::{HodSummary, SchoolUser};

const NAV: &str = r#"<nav><a href="/profile">Profile</a> | <a href="/dologout">Logout</a></nav>"#;

pub fn login_page(flashes: &[FlashMessage]) -> Html<String> {
    page(
        "Login",
        flashes,
        r#"<h1>Sign in</h1>
<form method="post" action="/dologin">
<label>Email <input type="email" name="email" required></label>
<label>Password <input type="password" name="password" required></label>
<button type="submit">Login</button>
</form>"#,
    )
}

pub fn staff_panel() -> Html<String> {
    page("Staff", &[], &format!("{NAV}\n<h1>This is STAFF Panel</h1>"))
}

pub fn student_panel() -> Html<String> {
    page("Student", &[], &format!("{NAV}\n<h1>This is STUDENT Panel</h1>"))
}

pub fn profile_page(user: &SchoolUser, flashes: &[FlashMessage]) -> Html<String> {
    let picture = match user.profile_pic {
        Some(ref path) => format!(
            r#"<img class="profile-pic" src="/media/{}" alt="profile picture" width="120">"#,
            escape(path)
        ),
        None => String::new(),
    };
    let body = format!(
        r#"{NAV}
<h1>Profile</h1>
{picture}
<form method="post" action="/profile/update" enctype="multipart/form-data">
<label>Profile picture <input type="file" name="profile_pic" accept="image/*"></label>
<label>First name <input type="text" name="first_name" value="{first_name}"></label>
<label>Last name <input type="text" name="last_name" value="{last_name}"></label>
<label>Email <input type="email" value="{email}" readonly></label>
<label>Username <input type="text" value="{username}" readonly></label>
<label>Password <input type="password" name="password" placeholder="Leave blank to keep the current password"></label>
<button type="submit">Update profile</button>
</form>"#,
        first_name = escape(&user.first_name),
        last_name = escape(&user.last_name),
        email = escape(&user.email),
        username = escape(&user.username),
    );
    page("Profile", flashes, &body)
}

pub fn hod_home_page(summary: &HodSummary, flashes: &[FlashMessage]) -> Html<String> {
    let body = format!(
        r#"{NAV}
<h1>Welcome, {name}</h1>
<ul class="stats">
<li>Staff: <span data-stat="staff">{staff}</span></li>
<li>Students: <span data-stat="students">{students}</span></li>
</ul>"#,
        name = escape(&summary.hod.full_name()),
        staff = summary.staff_count,
        students = summary.student_count,
    );
    page("HOD Home", flashes, &body)
}
