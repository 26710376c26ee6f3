use chrono::{Datelike, NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::time_entries)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TimeEntry {
    pub id: i32,
    pub project_id: i32,
    pub author_id: Option<i32>,
    pub user_id: i32,
    pub issue_id: Option<i32>,
    pub hours: f64,
    pub comments: Option<String>,
    pub activity_id: i32,
    pub spent_on: NaiveDate,
    pub tyear: i32,
    pub tmonth: i32,
    pub tweek: i32,
    pub created_on: NaiveDateTime,
    pub updated_on: NaiveDateTime,
}

impl TimeEntry {
    pub fn period(&self) -> ReportingPeriod {
        ReportingPeriod {
            year: self.tyear,
            month: self.tmonth,
            week: self.tweek,
        }
    }
}

/// The denormalized `tyear`/`tmonth`/`tweek` columns. The year is the
/// calendar year of `spent_on`, the week its ISO-8601 week number, so the
/// first days of January can carry week 52 or 53.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingPeriod {
    pub year: i32,
    pub month: i32,
    pub week: i32,
}

impl ReportingPeriod {
    pub fn of(spent_on: NaiveDate) -> Self {
        Self {
            year: spent_on.year(),
            month: spent_on.month() as i32,
            week: spent_on.iso_week().week() as i32,
        }
    }
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::time_entries)]
pub struct NewTimeEntry {
    pub project_id: i32,
    pub author_id: Option<i32>,
    pub user_id: i32,
    pub issue_id: Option<i32>,
    pub hours: f64,
    pub comments: Option<String>,
    pub activity_id: i32,
    pub spent_on: NaiveDate,
    pub tyear: i32,
    pub tmonth: i32,
    pub tweek: i32,
    pub created_on: NaiveDateTime,
    pub updated_on: NaiveDateTime,
}

impl NewTimeEntry {
    /// Builds an entry with the reporting period derived from `spent_on`.
    /// `author_id` defaults to the user the time is logged for.
    pub fn new(
        project_id: i32,
        user_id: i32,
        activity_id: i32,
        hours: f64,
        spent_on: NaiveDate,
        now: NaiveDateTime,
    ) -> Self {
        let period = ReportingPeriod::of(spent_on);
        Self {
            project_id,
            author_id: Some(user_id),
            user_id,
            issue_id: None,
            hours,
            comments: None,
            activity_id,
            spent_on,
            tyear: period.year,
            tmonth: period.month,
            tweek: period.week,
            created_on: now,
            updated_on: now,
        }
    }

    pub fn for_issue(mut self, issue_id: i32) -> Self {
        self.issue_id = Some(issue_id);
        self
    }

    pub fn with_comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = Some(comments.into());
        self
    }
}
