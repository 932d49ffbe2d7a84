use campus_records::domain::types::StudentRow;
use campus_records::usecase::student::{SearchStudentsInput, SearchStudentsUseCase};

use crate::helpers::{MockStudentRepo, student};

fn roster(n: i32) -> Vec<StudentRow> {
    (1..=n)
        .map(|id| {
            let department = if id % 2 == 0 { "Civil" } else { "Mechanical" };
            student(id, &format!("Student {id}"), department, 18 + id % 5)
        })
        .collect()
}

fn input(search: Option<&str>, page: Option<&str>) -> SearchStudentsInput {
    SearchStudentsInput {
        search: search.map(str::to_owned),
        page: page.map(str::to_owned),
    }
}

#[tokio::test]
async fn should_paginate_by_ten() {
    let uc = SearchStudentsUseCase {
        repo: MockStudentRepo {
            students: roster(25),
        },
    };

    let first = uc.execute(input(None, None)).await.unwrap();
    let last = uc.execute(input(None, Some("3"))).await.unwrap();

    assert_eq!(first.num_pages, 3);
    assert_eq!(first.items.len(), 10);
    assert_eq!(first.items[0].id, 1);
    assert_eq!(last.items.len(), 5);
    assert_eq!(last.items[0].id, 21);
}

#[tokio::test]
async fn should_clamp_out_of_range_pages() {
    let uc = SearchStudentsUseCase {
        repo: MockStudentRepo {
            students: roster(25),
        },
    };

    for (raw, expected) in [("abc", 1), ("0", 1), ("-4", 1), ("99", 3)] {
        let page = uc.execute(input(None, Some(raw))).await.unwrap();
        assert_eq!(page.number, expected, "page={raw}");
    }
}

#[tokio::test]
async fn should_return_single_empty_page_without_matches() {
    let uc = SearchStudentsUseCase {
        repo: MockStudentRepo {
            students: roster(5),
        },
    };

    let page = uc.execute(input(Some("zzz"), Some("4"))).await.unwrap();

    assert!(page.items.is_empty());
    assert_eq!(page.number, 1);
    assert_eq!(page.num_pages, 1);
    assert_eq!(page.total, 0);
}

#[tokio::test]
async fn should_match_any_of_the_five_fields() {
    let students = vec![
        student(1, "Anita Desai", "Civil", 19),
        student(2, "Bala Murugan", "Electrical", 21),
        student(3, "Chitra Nair", "Mechanical", 23),
    ];
    let uc = SearchStudentsUseCase {
        repo: MockStudentRepo { students },
    };

    let cases = [
        ("anita", vec![1]),
        ("stu-0002", vec![2]),
        ("MECH", vec![3]),
        ("21", vec![2]),
        ("chitra.nair@", vec![3]),
    ];
    for (term, expected) in cases {
        let page = uc.execute(input(Some(term), None)).await.unwrap();
        let ids: Vec<i32> = page.items.iter().map(|s| s.id).collect();
        assert_eq!(ids, expected, "search={term}");
    }
}
