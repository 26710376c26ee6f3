use diesel::prelude::*;

use crate::db::models::time_entry::{NewTimeEntry, ReportingPeriod, TimeEntry};
use crate::db::repositories::record_repo;
use crate::error::AppResult;

record_repo!(TimeEntryRepo, time_entries, TimeEntry, NewTimeEntry);

impl TimeEntryRepo {
    pub fn list_by_issue(conn: &mut PgConnection, target_issue_id: i32) -> AppResult<Vec<TimeEntry>> {
        use crate::schema::time_entries::dsl::*;
        let rows = time_entries
            .filter(issue_id.eq(target_issue_id))
            .order((spent_on.asc(), id.asc()))
            .select(TimeEntry::as_select())
            .load(conn)?;
        Ok(rows)
    }

    pub fn list_by_project(
        conn: &mut PgConnection,
        target_project_id: i32,
    ) -> AppResult<Vec<TimeEntry>> {
        use crate::schema::time_entries::dsl::*;
        let rows = time_entries
            .filter(project_id.eq(target_project_id))
            .order((spent_on.asc(), id.asc()))
            .select(TimeEntry::as_select())
            .load(conn)?;
        Ok(rows)
    }

    /// Entries booked in one reporting week, matched on the stored
    /// `tyear`/`tmonth`/`tweek` columns.
    pub fn list_by_period(
        conn: &mut PgConnection,
        period: ReportingPeriod,
    ) -> AppResult<Vec<TimeEntry>> {
        use crate::schema::time_entries::dsl::*;
        let rows = time_entries
            .filter(tyear.eq(period.year))
            .filter(tmonth.eq(period.month))
            .filter(tweek.eq(period.week))
            .order((spent_on.asc(), id.asc()))
            .select(TimeEntry::as_select())
            .load(conn)?;
        Ok(rows)
    }

    pub fn total_hours_for_issue(conn: &mut PgConnection, target_issue_id: i32) -> AppResult<f64> {
        use crate::schema::time_entries::dsl::*;
        let total: Option<f64> = time_entries
            .filter(issue_id.eq(target_issue_id))
            .select(diesel::dsl::sum(hours))
            .first(conn)?;
        Ok(total.unwrap_or(0.0))
    }
}
