use diesel::prelude::*;

use crate::db::enums::EnumerationKind;
use crate::db::models::issue::{
    Checklist, Enumeration, Issue, IssueCategory, IssueRelation, IssueStatus, NewChecklist,
    NewEnumeration, NewIssue, NewIssueCategory, NewIssueRelation, NewIssueStatus, NewTracker,
    NewWorkflow, Tracker, Workflow,
};
use crate::db::repositories::record_repo;
use crate::db::tree::{self, NestedSetBounds, Numbering, TreeNode};
use crate::error::{AppError, AppResult};

record_repo!(IssueRepo, issues, Issue, NewIssue);
record_repo!(IssueStatusRepo, issue_statuses, IssueStatus, NewIssueStatus);
record_repo!(TrackerRepo, trackers, Tracker, NewTracker);
record_repo!(IssueCategoryRepo, issue_categories, IssueCategory, NewIssueCategory);
record_repo!(IssueRelationRepo, issue_relations, IssueRelation, NewIssueRelation);
record_repo!(ChecklistRepo, checklists, Checklist, NewChecklist);
record_repo!(WorkflowRepo, workflows, Workflow, NewWorkflow);
record_repo!(EnumerationRepo, enumerations, Enumeration, NewEnumeration);

impl IssueRepo {
    pub fn list_by_project(conn: &mut PgConnection, target_project_id: i32) -> AppResult<Vec<Issue>> {
        use crate::schema::issues::dsl::*;
        let rows = issues
            .filter(project_id.eq(target_project_id))
            .order(id.asc())
            .select(Issue::as_select())
            .load(conn)?;
        Ok(rows)
    }

    pub fn list_by_assignee(conn: &mut PgConnection, principal_id: i32) -> AppResult<Vec<Issue>> {
        use crate::schema::issues::dsl::*;
        let rows = issues
            .filter(assigned_to_id.eq(principal_id))
            .order(id.asc())
            .select(Issue::as_select())
            .load(conn)?;
        Ok(rows)
    }

    pub fn children(conn: &mut PgConnection, target_id: i32) -> AppResult<Vec<Issue>> {
        use crate::schema::issues::dsl::*;
        let rows = issues
            .filter(parent_id.eq(target_id))
            .order(id.asc())
            .select(Issue::as_select())
            .load(conn)?;
        Ok(rows)
    }

    /// Ancestors of an issue, parent first and root last.
    pub fn ancestors(conn: &mut PgConnection, target_id: i32) -> AppResult<Vec<Issue>> {
        let start = Self::get(conn, target_id)?;
        tree::parent_chain(&start, |pid| Self::get(conn, pid))
    }

    /// The issue and its descendants in pre-order, read from the stored
    /// per-root bounds.
    pub fn subtree(conn: &mut PgConnection, target_id: i32) -> AppResult<Vec<Issue>> {
        use crate::schema::issues::dsl::*;
        let start = Self::get(conn, target_id)?;
        let bounds = start.bounds().ok_or_else(|| {
            AppError::hierarchy(format!("issue {} has no nested-set bounds", target_id))
        })?;
        let rows = issues
            .filter(root_id.eq(bounds.root_id))
            .filter(lft.ge(bounds.lft))
            .filter(rgt.le(bounds.rgt))
            .order(lft.asc())
            .select(Issue::as_select())
            .load(conn)?;
        Ok(rows)
    }

    /// Recomputes `root_id`/`lft`/`rgt` for every issue from `parent_id`.
    /// Each root starts at 1; siblings are ordered by id.
    pub fn rebuild_tree(conn: &mut PgConnection) -> AppResult<Vec<NestedSetBounds>> {
        use crate::schema::issues::dsl::*;
        conn.transaction::<_, AppError, _>(|conn| {
            let rows: Vec<(i32, Option<i32>)> = issues.select((id, parent_id)).load(conn)?;
            let nodes: Vec<TreeNode<i32>> = rows
                .into_iter()
                .map(|(node_id, parent)| TreeNode {
                    id: node_id,
                    parent_id: parent,
                    sort_key: node_id,
                })
                .collect();

            let bounds = tree::compute_bounds(&nodes, Numbering::PerRoot)?;
            for b in &bounds {
                diesel::update(issues.find(b.id))
                    .set((root_id.eq(b.root_id), lft.eq(b.lft), rgt.eq(b.rgt)))
                    .execute(conn)?;
            }
            tracing::info!(issues = bounds.len(), "rebuilt issue trees");
            Ok(bounds)
        })
    }
}

impl IssueStatusRepo {
    pub fn list_ordered(conn: &mut PgConnection) -> AppResult<Vec<IssueStatus>> {
        use crate::schema::issue_statuses::dsl::*;
        let rows = issue_statuses
            .order((position.asc(), id.asc()))
            .select(IssueStatus::as_select())
            .load(conn)?;
        Ok(rows)
    }
}

impl IssueCategoryRepo {
    pub fn list_by_project(
        conn: &mut PgConnection,
        target_project_id: i32,
    ) -> AppResult<Vec<IssueCategory>> {
        use crate::schema::issue_categories::dsl::*;
        let rows = issue_categories
            .filter(project_id.eq(target_project_id))
            .order(name.asc())
            .select(IssueCategory::as_select())
            .load(conn)?;
        Ok(rows)
    }
}

impl IssueRelationRepo {
    /// The relation stored for an ordered (from, to) pair, if any.
    pub fn find_by_pair(
        conn: &mut PgConnection,
        from_id: i32,
        to_id: i32,
    ) -> AppResult<Option<IssueRelation>> {
        use crate::schema::issue_relations::dsl::*;
        let relation = issue_relations
            .filter(issue_from_id.eq(from_id))
            .filter(issue_to_id.eq(to_id))
            .select(IssueRelation::as_select())
            .first(conn)
            .optional()?;
        Ok(relation)
    }

    pub fn relations_from(conn: &mut PgConnection, from_id: i32) -> AppResult<Vec<IssueRelation>> {
        use crate::schema::issue_relations::dsl::*;
        let rows = issue_relations
            .filter(issue_from_id.eq(from_id))
            .order(id.asc())
            .select(IssueRelation::as_select())
            .load(conn)?;
        Ok(rows)
    }

    pub fn relations_to(conn: &mut PgConnection, to_id: i32) -> AppResult<Vec<IssueRelation>> {
        use crate::schema::issue_relations::dsl::*;
        let rows = issue_relations
            .filter(issue_to_id.eq(to_id))
            .order(id.asc())
            .select(IssueRelation::as_select())
            .load(conn)?;
        Ok(rows)
    }
}

impl ChecklistRepo {
    pub fn list_by_issue(conn: &mut PgConnection, target_issue_id: i32) -> AppResult<Vec<Checklist>> {
        use crate::schema::checklists::dsl::*;
        let rows = checklists
            .filter(issue_id.eq(target_issue_id))
            .order((position.asc(), id.asc()))
            .select(Checklist::as_select())
            .load(conn)?;
        Ok(rows)
    }
}

impl WorkflowRepo {
    /// Status transitions allowed for a tracker and role, from one status.
    pub fn transitions(
        conn: &mut PgConnection,
        target_tracker_id: i32,
        target_role_id: i32,
        from_status_id: i32,
    ) -> AppResult<Vec<Workflow>> {
        use crate::schema::workflows::dsl::*;
        let rows = workflows
            .filter(tracker_id.eq(target_tracker_id))
            .filter(role_id.eq(target_role_id))
            .filter(old_status_id.eq(from_status_id))
            .filter(type_.eq(Workflow::TYPE_TRANSITION))
            .order(new_status_id.asc())
            .select(Workflow::as_select())
            .load(conn)?;
        Ok(rows)
    }
}

impl EnumerationRepo {
    pub fn list_by_kind(
        conn: &mut PgConnection,
        kind: EnumerationKind,
    ) -> AppResult<Vec<Enumeration>> {
        use crate::schema::enumerations::dsl::*;
        let rows = enumerations
            .filter(type_.eq(kind.as_str()))
            .order((position.asc(), id.asc()))
            .select(Enumeration::as_select())
            .load(conn)?;
        Ok(rows)
    }

    /// The default value of a kind among system-wide rows.
    pub fn default_of_kind(
        conn: &mut PgConnection,
        kind: EnumerationKind,
    ) -> AppResult<Option<Enumeration>> {
        use crate::schema::enumerations::dsl::*;
        let found = enumerations
            .filter(type_.eq(kind.as_str()))
            .filter(project_id.is_null())
            .filter(is_default.eq(true))
            .order(id.asc())
            .select(Enumeration::as_select())
            .first(conn)
            .optional()?;
        Ok(found)
    }

    pub fn children(conn: &mut PgConnection, target_id: i32) -> AppResult<Vec<Enumeration>> {
        use crate::schema::enumerations::dsl::*;
        let rows = enumerations
            .filter(parent_id.eq(target_id))
            .order(id.asc())
            .select(Enumeration::as_select())
            .load(conn)?;
        Ok(rows)
    }

    pub fn ancestors(conn: &mut PgConnection, target_id: i32) -> AppResult<Vec<Enumeration>> {
        let start = Self::get(conn, target_id)?;
        tree::parent_chain(&start, |pid| Self::get(conn, pid))
    }
}
