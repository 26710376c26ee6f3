// Reporting period columns derived from spent_on

use chrono::NaiveDate;
use redmine_schema::db::models::{NewTimeEntry, ReportingPeriod};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn period_uses_iso_week_with_calendar_year() {
    // Sunday 2021-01-03 still belongs to ISO week 53 of 2020
    assert_eq!(
        ReportingPeriod::of(date(2021, 1, 3)),
        ReportingPeriod { year: 2021, month: 1, week: 53 }
    );
    assert_eq!(
        ReportingPeriod::of(date(2021, 1, 4)),
        ReportingPeriod { year: 2021, month: 1, week: 1 }
    );
}

#[test]
fn period_at_year_end_can_be_week_one() {
    // Monday 2024-12-30 starts ISO week 1 of 2025
    assert_eq!(
        ReportingPeriod::of(date(2024, 12, 30)),
        ReportingPeriod { year: 2024, month: 12, week: 1 }
    );
}

#[test]
fn new_time_entry_fills_period_and_author() {
    let now = date(2023, 6, 15).and_hms_opt(12, 0, 0).unwrap();
    let entry = NewTimeEntry::new(7, 3, 9, 1.5, date(2023, 6, 14), now)
        .for_issue(42)
        .with_comments("review");

    assert_eq!(entry.project_id, 7);
    assert_eq!(entry.user_id, 3);
    assert_eq!(entry.author_id, Some(3));
    assert_eq!(entry.activity_id, 9);
    assert_eq!(entry.issue_id, Some(42));
    assert_eq!(entry.comments.as_deref(), Some("review"));
    assert_eq!((entry.tyear, entry.tmonth, entry.tweek), (2023, 6, 24));
    assert_eq!(entry.created_on, now);
    assert_eq!(entry.updated_on, now);
}
