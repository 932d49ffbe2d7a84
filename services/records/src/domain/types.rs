use chrono::NaiveDate;

/// A site account, authenticated by username.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
}

/// Fields of an account about to be created.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub id: i32,
    pub name: String,
    pub description: String,
    /// Path relative to the media root.
    pub image: Option<String>,
}

/// Values written by a recipe create or update. On update a `None` image
/// keeps the stored one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeFields {
    pub name: String,
    pub description: String,
    pub image: Option<String>,
}

/// One line of the student roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRow {
    pub id: i32,
    pub name: String,
    pub student_code: String,
    pub department: String,
    pub email: String,
    pub age: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectMark {
    pub subject: String,
    pub marks: i32,
}

/// Marks sheet of one student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkSheet {
    pub student_code: String,
    /// `None` when no student has the code.
    pub student_name: Option<String>,
    pub marks: Vec<SubjectMark>,
    pub total: i64,
}

/// A stored report card with its student's summed marks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportCard {
    pub id: i32,
    pub student_id: i32,
    pub student_name: String,
    pub student_code: String,
    pub stored_rank: i32,
    pub total_marks: i64,
    pub generated_on: NaiveDate,
}

/// A report card next to the rank its total implies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedReportCard {
    pub card: ReportCard,
    /// Dense rank by total, highest total is 1.
    pub implied_rank: i32,
}

impl RankedReportCard {
    pub fn rank_mismatch(&self) -> bool {
        self.card.stored_rank != self.implied_rank
    }
}

/// Attach the dense rank implied by `total_marks` to every card, keeping order.
pub fn rank_by_total(cards: Vec<ReportCard>) -> Vec<RankedReportCard> {
    let mut totals: Vec<i64> = cards.iter().map(|c| c.total_marks).collect();
    totals.sort_unstable_by(|a, b| b.cmp(a));
    totals.dedup();
    cards
        .into_iter()
        .map(|card| {
            let position = totals
                .iter()
                .position(|&t| t == card.total_marks)
                .unwrap_or(0);
            RankedReportCard {
                implied_rank: position as i32 + 1,
                card,
            }
        })
        .collect()
}
