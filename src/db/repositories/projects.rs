use diesel::prelude::*;

use crate::db::models::project::{
    Document, EnabledModule, NewDocument, NewEnabledModule, NewNews, NewProject,
    NewProjectTracker, NewQueryRole, NewSavedQuery, NewVersion, News, Project, ProjectTracker,
    QueryRole, SavedQuery, Version,
};
use crate::db::repositories::record_repo;
use crate::db::tree::{self, NestedSetBounds, Numbering, TreeNode};
use crate::error::{AppError, AppResult};

record_repo!(ProjectRepo, projects, Project, NewProject);
record_repo!(ProjectTrackerRepo, projects_trackers, ProjectTracker, NewProjectTracker);
record_repo!(EnabledModuleRepo, enabled_modules, EnabledModule, NewEnabledModule);
record_repo!(VersionRepo, versions, Version, NewVersion);
record_repo!(SavedQueryRepo, queries, SavedQuery, NewSavedQuery);
record_repo!(QueryRoleRepo, queries_roles, QueryRole, NewQueryRole);
record_repo!(NewsRepo, news, News, NewNews);
record_repo!(DocumentRepo, documents, Document, NewDocument);

diesel::define_sql_function!(fn lower(x: diesel::sql_types::Text) -> diesel::sql_types::Text);

impl ProjectRepo {
    pub fn find_by_identifier(
        conn: &mut PgConnection,
        target_identifier: &str,
    ) -> AppResult<Option<Project>> {
        use crate::schema::projects::dsl::*;
        let project = projects
            .filter(identifier.eq(target_identifier))
            .select(Project::as_select())
            .first(conn)
            .optional()?;
        Ok(project)
    }

    pub fn roots(conn: &mut PgConnection) -> AppResult<Vec<Project>> {
        use crate::schema::projects::dsl::*;
        let rows = projects
            .filter(parent_id.is_null())
            .order((lower(name).asc(), id.asc()))
            .select(Project::as_select())
            .load(conn)?;
        Ok(rows)
    }

    pub fn children(conn: &mut PgConnection, target_id: i32) -> AppResult<Vec<Project>> {
        use crate::schema::projects::dsl::*;
        let rows = projects
            .filter(parent_id.eq(target_id))
            .order((lower(name).asc(), id.asc()))
            .select(Project::as_select())
            .load(conn)?;
        Ok(rows)
    }

    /// Ancestors of a project, parent first and root last.
    pub fn ancestors(conn: &mut PgConnection, target_id: i32) -> AppResult<Vec<Project>> {
        let start = Self::get(conn, target_id)?;
        tree::parent_chain(&start, |pid| Self::get(conn, pid))
    }

    /// The project and all of its descendants in pre-order. Reads the stored
    /// bounds, so it reflects the last `rebuild_tree`.
    pub fn subtree(conn: &mut PgConnection, target_id: i32) -> AppResult<Vec<Project>> {
        use crate::schema::projects::dsl::*;
        let start = Self::get(conn, target_id)?;
        let bounds = start.bounds().ok_or_else(|| {
            AppError::hierarchy(format!("project {} has no nested-set bounds", target_id))
        })?;
        let rows = projects
            .filter(lft.ge(bounds.lft))
            .filter(rgt.le(bounds.rgt))
            .order(lft.asc())
            .select(Project::as_select())
            .load(conn)?;
        Ok(rows)
    }

    /// Every project in stored tree order, unnumbered rows last.
    pub fn list_in_tree_order(conn: &mut PgConnection) -> AppResult<Vec<Project>> {
        use crate::schema::projects::dsl::*;
        let rows = projects
            .order((lft.asc().nulls_last(), id.asc()))
            .select(Project::as_select())
            .load(conn)?;
        Ok(rows)
    }

    /// Recomputes `lft`/`rgt` for every project from `parent_id`. Siblings are
    /// ordered by case-insensitive name.
    pub fn rebuild_tree(conn: &mut PgConnection) -> AppResult<Vec<NestedSetBounds>> {
        use crate::schema::projects::dsl::*;
        conn.transaction::<_, AppError, _>(|conn| {
            let rows: Vec<(i32, Option<i32>, String)> =
                projects.select((id, parent_id, name)).load(conn)?;
            let nodes: Vec<TreeNode<String>> = rows
                .into_iter()
                .map(|(node_id, parent, node_name)| TreeNode {
                    id: node_id,
                    parent_id: parent,
                    sort_key: node_name.to_lowercase(),
                })
                .collect();

            let bounds = tree::compute_bounds(&nodes, Numbering::Continuous)?;
            for b in &bounds {
                diesel::update(projects.find(b.id))
                    .set((lft.eq(b.lft), rgt.eq(b.rgt)))
                    .execute(conn)?;
            }
            tracing::info!(projects = bounds.len(), "rebuilt project tree");
            Ok(bounds)
        })
    }
}

impl ProjectTrackerRepo {
    pub fn trackers_of(
        conn: &mut PgConnection,
        target_project_id: i32,
    ) -> AppResult<Vec<crate::db::models::Tracker>> {
        use crate::schema::{projects_trackers, trackers};
        let rows = projects_trackers::table
            .inner_join(trackers::table)
            .filter(projects_trackers::project_id.eq(target_project_id))
            .order((trackers::position.asc(), trackers::id.asc()))
            .select(crate::db::models::Tracker::as_select())
            .load(conn)?;
        Ok(rows)
    }
}

impl EnabledModuleRepo {
    pub fn names_for_project(conn: &mut PgConnection, target_project_id: i32) -> AppResult<Vec<String>> {
        use crate::schema::enabled_modules::dsl::*;
        let rows = enabled_modules
            .filter(project_id.eq(target_project_id))
            .order(name.asc())
            .select(name)
            .load(conn)?;
        Ok(rows)
    }
}

impl VersionRepo {
    pub fn list_by_project(conn: &mut PgConnection, target_project_id: i32) -> AppResult<Vec<Version>> {
        use crate::schema::versions::dsl::*;
        let rows = versions
            .filter(project_id.eq(target_project_id))
            .order((effective_date.asc().nulls_last(), name.asc()))
            .select(Version::as_select())
            .load(conn)?;
        Ok(rows)
    }
}

impl SavedQueryRepo {
    pub fn list_by_project(
        conn: &mut PgConnection,
        target_project_id: i32,
    ) -> AppResult<Vec<SavedQuery>> {
        use crate::schema::queries::dsl::*;
        let rows = queries
            .filter(project_id.eq(target_project_id))
            .order(name.asc())
            .select(SavedQuery::as_select())
            .load(conn)?;
        Ok(rows)
    }
}

impl NewsRepo {
    pub fn list_by_project(conn: &mut PgConnection, target_project_id: i32) -> AppResult<Vec<News>> {
        use crate::schema::news::dsl::*;
        let rows = news
            .filter(project_id.eq(target_project_id))
            .order((created_on.desc(), id.desc()))
            .select(News::as_select())
            .load(conn)?;
        Ok(rows)
    }
}

impl DocumentRepo {
    pub fn list_by_project(conn: &mut PgConnection, target_project_id: i32) -> AppResult<Vec<Document>> {
        use crate::schema::documents::dsl::*;
        let rows = documents
            .filter(project_id.eq(target_project_id))
            .order(title.asc())
            .select(Document::as_select())
            .load(conn)?;
        Ok(rows)
    }
}
