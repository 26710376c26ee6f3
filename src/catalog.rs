//! Static description of every mapped table: column names, Postgres types
//! and nullability in declaration order, plus the restrict-on-delete
//! references and uniqueness constraints between tables. Kept in step with
//! `schema` and used by `db::inspect` to compare a live database against the
//! mapping.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColumnType {
    Int4,
    Int8,
    Float8,
    Bool,
    Text,
    /// Character varying with its declared maximum length.
    Varchar(u32),
    Timestamp,
    Date,
    Bytea,
}

impl ColumnType {
    /// The `data_type` Postgres reports in `information_schema.columns`.
    pub fn information_schema_name(&self) -> &'static str {
        match self {
            ColumnType::Int4 => "integer",
            ColumnType::Int8 => "bigint",
            ColumnType::Float8 => "double precision",
            ColumnType::Bool => "boolean",
            ColumnType::Text => "text",
            ColumnType::Varchar(_) => "character varying",
            ColumnType::Timestamp => "timestamp without time zone",
            ColumnType::Date => "date",
            ColumnType::Bytea => "bytea",
        }
    }

    pub fn max_length(&self) -> Option<u32> {
        match self {
            ColumnType::Varchar(len) => Some(*len),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub column_type: ColumnType,
    pub nullable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableSpec {
    pub name: &'static str,
    pub columns: &'static [ColumnSpec],
}

impl TableSpec {
    pub fn column(&self, name: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|c| c.name == name)
    }
}

const fn req(name: &'static str, column_type: ColumnType) -> ColumnSpec {
    ColumnSpec {
        name,
        column_type,
        nullable: false,
    }
}

const fn opt(name: &'static str, column_type: ColumnType) -> ColumnSpec {
    ColumnSpec {
        name,
        column_type,
        nullable: true,
    }
}

/// A column holding the id of a row in `references`. Deleting the referenced
/// row is rejected while this column points at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ForeignKeySpec {
    pub table: &'static str,
    pub column: &'static str,
    pub references: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UniqueSpec {
    pub table: &'static str,
    pub columns: &'static [&'static str],
}

const fn fk(table: &'static str, column: &'static str, references: &'static str) -> ForeignKeySpec {
    ForeignKeySpec {
        table,
        column,
        references,
    }
}

pub fn foreign_keys() -> &'static [ForeignKeySpec] {
    FOREIGN_KEYS
}

/// References pointing at `table`, i.e. what blocks deleting one of its rows.
pub fn referencing(table: &str) -> impl Iterator<Item = &'static ForeignKeySpec> + '_ {
    FOREIGN_KEYS.iter().filter(move |f| f.references == table)
}

pub fn unique_keys() -> &'static [UniqueSpec] {
    UNIQUE_KEYS
}

pub fn tables() -> &'static [TableSpec] {
    TABLES
}

pub fn table(name: &str) -> Option<&'static TableSpec> {
    TABLES.iter().find(|t| t.name == name)
}

/// Tables ordered by name.
static TABLES: &[TableSpec] = &[
    TableSpec {
        name: "attachments",
        columns: &[
            req("id", ColumnType::Int4),
            opt("container_id", ColumnType::Int4),
            opt("container_type", ColumnType::Varchar(30)),
            req("filename", ColumnType::Varchar(1024)),
            req("disk_filename", ColumnType::Varchar(1024)),
            req("filesize", ColumnType::Int8),
            opt("content_type", ColumnType::Varchar(1024)),
            req("digest", ColumnType::Varchar(64)),
            req("downloads", ColumnType::Int4),
            req("author_id", ColumnType::Int4),
            opt("created_on", ColumnType::Timestamp),
            opt("description", ColumnType::Varchar(1024)),
            opt("disk_directory", ColumnType::Varchar(1024)),
        ],
    },
    TableSpec {
        name: "auth_sources",
        columns: &[
            req("id", ColumnType::Int4),
            req("type", ColumnType::Varchar(30)),
            req("name", ColumnType::Varchar(60)),
            opt("host", ColumnType::Varchar(60)),
            opt("port", ColumnType::Int4),
            opt("account", ColumnType::Varchar(1024)),
            opt("account_password", ColumnType::Varchar(1024)),
            opt("base_dn", ColumnType::Varchar(255)),
            opt("attr_login", ColumnType::Varchar(30)),
            opt("attr_firstname", ColumnType::Varchar(30)),
            opt("attr_lastname", ColumnType::Varchar(30)),
            opt("attr_mail", ColumnType::Varchar(30)),
            req("onthefly_register", ColumnType::Bool),
            req("tls", ColumnType::Bool),
            opt("filter", ColumnType::Text),
            opt("timeout", ColumnType::Int4),
        ],
    },
    TableSpec {
        name: "boards",
        columns: &[
            req("id", ColumnType::Int4),
            req("project_id", ColumnType::Int4),
            req("name", ColumnType::Varchar(1024)),
            opt("description", ColumnType::Varchar(1024)),
            opt("position", ColumnType::Int4),
            req("topics_count", ColumnType::Int4),
            req("messages_count", ColumnType::Int4),
            opt("last_message_id", ColumnType::Int4),
            opt("parent_id", ColumnType::Int4),
        ],
    },
    TableSpec {
        name: "changes",
        columns: &[
            req("id", ColumnType::Int4),
            req("changeset_id", ColumnType::Int4),
            req("action", ColumnType::Varchar(1)),
            req("path", ColumnType::Text),
            opt("from_path", ColumnType::Text),
            opt("from_revision", ColumnType::Varchar(1024)),
            opt("revision", ColumnType::Varchar(1024)),
            opt("branch", ColumnType::Varchar(1024)),
        ],
    },
    TableSpec {
        name: "changeset_parents",
        columns: &[
            req("id", ColumnType::Int4),
            req("changeset_id", ColumnType::Int4),
            req("parent_id", ColumnType::Int4),
        ],
    },
    TableSpec {
        name: "changesets",
        columns: &[
            req("id", ColumnType::Int4),
            req("repository_id", ColumnType::Int4),
            req("revision", ColumnType::Varchar(255)),
            opt("committer", ColumnType::Varchar(1024)),
            req("committed_on", ColumnType::Timestamp),
            opt("comments", ColumnType::Text),
            opt("commit_date", ColumnType::Date),
            opt("scmid", ColumnType::Varchar(1024)),
            opt("user_id", ColumnType::Int4),
        ],
    },
    TableSpec {
        name: "changesets_issues",
        columns: &[
            req("id", ColumnType::Int4),
            req("changeset_id", ColumnType::Int4),
            req("issue_id", ColumnType::Int4),
        ],
    },
    TableSpec {
        name: "checklists",
        columns: &[
            req("id", ColumnType::Int4),
            req("is_done", ColumnType::Bool),
            opt("subject", ColumnType::Varchar(255)),
            req("position", ColumnType::Int4),
            req("issue_id", ColumnType::Int4),
            opt("created_at", ColumnType::Timestamp),
            opt("updated_at", ColumnType::Timestamp),
            req("is_section", ColumnType::Bool),
        ],
    },
    TableSpec {
        name: "comments",
        columns: &[
            req("id", ColumnType::Int4),
            req("commented_type", ColumnType::Varchar(30)),
            req("commented_id", ColumnType::Int4),
            req("author_id", ColumnType::Int4),
            opt("content", ColumnType::Text),
            req("created_on", ColumnType::Timestamp),
            req("updated_on", ColumnType::Timestamp),
        ],
    },
    TableSpec {
        name: "custom_field_enumerations",
        columns: &[
            req("id", ColumnType::Int4),
            req("custom_field_id", ColumnType::Int4),
            req("name", ColumnType::Varchar(1024)),
            req("active", ColumnType::Bool),
            req("position", ColumnType::Int4),
        ],
    },
    TableSpec {
        name: "custom_fields",
        columns: &[
            req("id", ColumnType::Int4),
            req("type", ColumnType::Varchar(30)),
            req("name", ColumnType::Varchar(30)),
            req("field_format", ColumnType::Varchar(30)),
            opt("possible_values", ColumnType::Text),
            opt("regexp", ColumnType::Varchar(1024)),
            opt("min_length", ColumnType::Int4),
            opt("max_length", ColumnType::Int4),
            req("is_required", ColumnType::Bool),
            req("is_for_all", ColumnType::Bool),
            req("is_filter", ColumnType::Bool),
            opt("position", ColumnType::Int4),
            opt("searchable", ColumnType::Bool),
            opt("default_value", ColumnType::Text),
            opt("editable", ColumnType::Bool),
            req("visible", ColumnType::Bool),
            opt("multiple", ColumnType::Bool),
            opt("format_store", ColumnType::Text),
            opt("description", ColumnType::Text),
        ],
    },
    TableSpec {
        name: "custom_fields_projects",
        columns: &[
            req("id", ColumnType::Int4),
            req("custom_field_id", ColumnType::Int4),
            req("project_id", ColumnType::Int4),
        ],
    },
    TableSpec {
        name: "custom_fields_roles",
        columns: &[
            req("id", ColumnType::Int4),
            req("custom_field_id", ColumnType::Int4),
            req("role_id", ColumnType::Int4),
        ],
    },
    TableSpec {
        name: "custom_fields_trackers",
        columns: &[
            req("id", ColumnType::Int4),
            req("custom_field_id", ColumnType::Int4),
            req("tracker_id", ColumnType::Int4),
        ],
    },
    TableSpec {
        name: "custom_values",
        columns: &[
            req("id", ColumnType::Int4),
            req("customized_type", ColumnType::Varchar(30)),
            req("customized_id", ColumnType::Int4),
            req("custom_field_id", ColumnType::Int4),
            opt("value", ColumnType::Text),
        ],
    },
    TableSpec {
        name: "documents",
        columns: &[
            req("id", ColumnType::Int4),
            req("project_id", ColumnType::Int4),
            req("category_id", ColumnType::Int4),
            req("title", ColumnType::Varchar(1024)),
            opt("description", ColumnType::Text),
            opt("created_on", ColumnType::Timestamp),
        ],
    },
    TableSpec {
        name: "email_addresses",
        columns: &[
            req("id", ColumnType::Int4),
            req("user_id", ColumnType::Int4),
            req("address", ColumnType::Varchar(1024)),
            req("is_default", ColumnType::Bool),
            req("notify", ColumnType::Bool),
            req("created_on", ColumnType::Timestamp),
            req("updated_on", ColumnType::Timestamp),
        ],
    },
    TableSpec {
        name: "enabled_modules",
        columns: &[
            req("id", ColumnType::Int4),
            opt("project_id", ColumnType::Int4),
            req("name", ColumnType::Varchar(1024)),
        ],
    },
    TableSpec {
        name: "enumerations",
        columns: &[
            req("id", ColumnType::Int4),
            req("name", ColumnType::Varchar(30)),
            opt("position", ColumnType::Int4),
            req("is_default", ColumnType::Bool),
            opt("type", ColumnType::Varchar(17)),
            req("active", ColumnType::Bool),
            opt("project_id", ColumnType::Int4),
            opt("parent_id", ColumnType::Int4),
            opt("position_name", ColumnType::Varchar(30)),
        ],
    },
    TableSpec {
        name: "groups_users",
        columns: &[
            req("id", ColumnType::Int4),
            req("group_id", ColumnType::Int4),
            req("user_id", ColumnType::Int4),
        ],
    },
    TableSpec {
        name: "import_items",
        columns: &[
            req("id", ColumnType::Int4),
            req("import_id", ColumnType::Int4),
            req("position", ColumnType::Int4),
            opt("obj_id", ColumnType::Int4),
            opt("message", ColumnType::Text),
        ],
    },
    TableSpec {
        name: "imports",
        columns: &[
            req("id", ColumnType::Int4),
            opt("type", ColumnType::Varchar(1024)),
            req("user_id", ColumnType::Int4),
            opt("filename", ColumnType::Varchar(1024)),
            opt("settings", ColumnType::Text),
            opt("total_items", ColumnType::Int4),
            req("finished", ColumnType::Bool),
            req("created_at", ColumnType::Timestamp),
            req("updated_at", ColumnType::Timestamp),
        ],
    },
    TableSpec {
        name: "issue_categories",
        columns: &[
            req("id", ColumnType::Int4),
            req("project_id", ColumnType::Int4),
            req("name", ColumnType::Varchar(60)),
            opt("assigned_to_id", ColumnType::Int4),
        ],
    },
    TableSpec {
        name: "issue_relations",
        columns: &[
            req("id", ColumnType::Int4),
            req("issue_from_id", ColumnType::Int4),
            req("issue_to_id", ColumnType::Int4),
            req("relation_type", ColumnType::Varchar(1024)),
            opt("delay", ColumnType::Int4),
        ],
    },
    TableSpec {
        name: "issue_statuses",
        columns: &[
            req("id", ColumnType::Int4),
            req("name", ColumnType::Varchar(30)),
            req("is_closed", ColumnType::Bool),
            opt("position", ColumnType::Int4),
            opt("default_done_ratio", ColumnType::Int4),
        ],
    },
    TableSpec {
        name: "issues",
        columns: &[
            req("id", ColumnType::Int4),
            req("tracker_id", ColumnType::Int4),
            req("project_id", ColumnType::Int4),
            req("subject", ColumnType::Varchar(1024)),
            opt("description", ColumnType::Text),
            opt("due_date", ColumnType::Date),
            opt("category_id", ColumnType::Int4),
            req("status_id", ColumnType::Int4),
            opt("assigned_to_id", ColumnType::Int4),
            req("priority_id", ColumnType::Int4),
            opt("fixed_version_id", ColumnType::Int4),
            req("author_id", ColumnType::Int4),
            req("lock_version", ColumnType::Int4),
            opt("created_on", ColumnType::Timestamp),
            opt("updated_on", ColumnType::Timestamp),
            opt("start_date", ColumnType::Date),
            req("done_ratio", ColumnType::Int4),
            opt("estimated_hours", ColumnType::Float8),
            opt("parent_id", ColumnType::Int4),
            opt("root_id", ColumnType::Int4),
            opt("lft", ColumnType::Int4),
            opt("rgt", ColumnType::Int4),
            req("is_private", ColumnType::Bool),
            opt("closed_on", ColumnType::Timestamp),
        ],
    },
    TableSpec {
        name: "journal_details",
        columns: &[
            req("id", ColumnType::Int4),
            req("journal_id", ColumnType::Int4),
            req("property", ColumnType::Varchar(30)),
            req("prop_key", ColumnType::Varchar(30)),
            opt("old_value", ColumnType::Text),
            opt("value", ColumnType::Text),
        ],
    },
    TableSpec {
        name: "journals",
        columns: &[
            req("id", ColumnType::Int4),
            req("journalized_id", ColumnType::Int4),
            req("journalized_type", ColumnType::Varchar(30)),
            req("user_id", ColumnType::Int4),
            opt("notes", ColumnType::Text),
            req("created_on", ColumnType::Timestamp),
            req("private_notes", ColumnType::Bool),
        ],
    },
    TableSpec {
        name: "member_roles",
        columns: &[
            req("id", ColumnType::Int4),
            req("member_id", ColumnType::Int4),
            req("role_id", ColumnType::Int4),
            opt("inherited_from", ColumnType::Int4),
        ],
    },
    TableSpec {
        name: "members",
        columns: &[
            req("id", ColumnType::Int4),
            req("user_id", ColumnType::Int4),
            req("project_id", ColumnType::Int4),
            opt("created_on", ColumnType::Timestamp),
            req("mail_notification", ColumnType::Bool),
        ],
    },
    TableSpec {
        name: "messages",
        columns: &[
            req("id", ColumnType::Int4),
            req("board_id", ColumnType::Int4),
            opt("parent_id", ColumnType::Int4),
            req("subject", ColumnType::Varchar(1024)),
            opt("content", ColumnType::Text),
            opt("author_id", ColumnType::Int4),
            req("replies_count", ColumnType::Int4),
            opt("last_reply_id", ColumnType::Int4),
            req("created_on", ColumnType::Timestamp),
            req("updated_on", ColumnType::Timestamp),
            opt("locked", ColumnType::Bool),
            opt("sticky", ColumnType::Int4),
        ],
    },
    TableSpec {
        name: "news",
        columns: &[
            req("id", ColumnType::Int4),
            opt("project_id", ColumnType::Int4),
            req("title", ColumnType::Varchar(60)),
            opt("summary", ColumnType::Varchar(255)),
            opt("description", ColumnType::Text),
            req("author_id", ColumnType::Int4),
            opt("created_on", ColumnType::Timestamp),
            req("comments_count", ColumnType::Int4),
        ],
    },
    TableSpec {
        name: "open_id_authentication_associations",
        columns: &[
            req("id", ColumnType::Int4),
            opt("issued", ColumnType::Int4),
            opt("lifetime", ColumnType::Int4),
            opt("handle", ColumnType::Varchar(1024)),
            opt("assoc_type", ColumnType::Varchar(1024)),
            opt("server_url", ColumnType::Bytea),
            opt("secret", ColumnType::Bytea),
        ],
    },
    TableSpec {
        name: "open_id_authentication_nonces",
        columns: &[
            req("id", ColumnType::Int4),
            req("timestamp", ColumnType::Int4),
            opt("server_url", ColumnType::Varchar(1024)),
            req("salt", ColumnType::Varchar(1024)),
        ],
    },
    TableSpec {
        name: "projects",
        columns: &[
            req("id", ColumnType::Int4),
            req("name", ColumnType::Varchar(1024)),
            opt("description", ColumnType::Text),
            opt("homepage", ColumnType::Varchar(1024)),
            req("is_public", ColumnType::Bool),
            opt("parent_id", ColumnType::Int4),
            opt("created_on", ColumnType::Timestamp),
            opt("updated_on", ColumnType::Timestamp),
            opt("identifier", ColumnType::Varchar(1024)),
            req("status", ColumnType::Int4),
            opt("lft", ColumnType::Int4),
            opt("rgt", ColumnType::Int4),
            req("inherit_members", ColumnType::Bool),
            opt("default_version_id", ColumnType::Int4),
            opt("default_assigned_to_id", ColumnType::Int4),
        ],
    },
    TableSpec {
        name: "projects_trackers",
        columns: &[
            req("id", ColumnType::Int4),
            req("project_id", ColumnType::Int4),
            req("tracker_id", ColumnType::Int4),
        ],
    },
    TableSpec {
        name: "queries",
        columns: &[
            req("id", ColumnType::Int4),
            opt("project_id", ColumnType::Int4),
            req("name", ColumnType::Varchar(1024)),
            opt("filters", ColumnType::Text),
            req("user_id", ColumnType::Int4),
            opt("column_names", ColumnType::Text),
            opt("sort_criteria", ColumnType::Text),
            opt("group_by", ColumnType::Varchar(1024)),
            opt("type", ColumnType::Varchar(1024)),
            opt("visibility", ColumnType::Int4),
            opt("options", ColumnType::Text),
        ],
    },
    TableSpec {
        name: "queries_roles",
        columns: &[
            req("id", ColumnType::Int4),
            req("query_id", ColumnType::Int4),
            req("role_id", ColumnType::Int4),
        ],
    },
    TableSpec {
        name: "repositories",
        columns: &[
            req("id", ColumnType::Int4),
            req("project_id", ColumnType::Int4),
            req("url", ColumnType::Varchar(1024)),
            opt("login", ColumnType::Varchar(60)),
            opt("password", ColumnType::Varchar(1024)),
            opt("root_url", ColumnType::Varchar(255)),
            opt("type", ColumnType::Varchar(1024)),
            opt("path_encoding", ColumnType::Varchar(64)),
            opt("log_encoding", ColumnType::Varchar(64)),
            opt("extra_info", ColumnType::Text),
            opt("identifier", ColumnType::Varchar(1024)),
            opt("is_default", ColumnType::Bool),
            opt("created_on", ColumnType::Timestamp),
        ],
    },
    TableSpec {
        name: "roles",
        columns: &[
            req("id", ColumnType::Int4),
            req("name", ColumnType::Varchar(255)),
            opt("position", ColumnType::Int4),
            opt("assignable", ColumnType::Bool),
            req("builtin", ColumnType::Int4),
            opt("permissions", ColumnType::Text),
            req("issues_visibility", ColumnType::Varchar(30)),
            req("users_visibility", ColumnType::Varchar(30)),
            req("time_entries_visibility", ColumnType::Varchar(30)),
            req("all_roles_managed", ColumnType::Bool),
            opt("settings", ColumnType::Text),
        ],
    },
    TableSpec {
        name: "roles_managed_roles",
        columns: &[
            req("id", ColumnType::Int4),
            req("role_id", ColumnType::Int4),
            req("managed_role_id", ColumnType::Int4),
        ],
    },
    TableSpec {
        name: "schema_migrations",
        columns: &[
            req("id", ColumnType::Int4),
            req("version", ColumnType::Varchar(255)),
        ],
    },
    TableSpec {
        name: "settings",
        columns: &[
            req("id", ColumnType::Int4),
            req("name", ColumnType::Varchar(255)),
            opt("value", ColumnType::Text),
            opt("updated_on", ColumnType::Timestamp),
        ],
    },
    TableSpec {
        name: "time_entries",
        columns: &[
            req("id", ColumnType::Int4),
            req("project_id", ColumnType::Int4),
            opt("author_id", ColumnType::Int4),
            req("user_id", ColumnType::Int4),
            opt("issue_id", ColumnType::Int4),
            req("hours", ColumnType::Float8),
            opt("comments", ColumnType::Varchar(1024)),
            req("activity_id", ColumnType::Int4),
            req("spent_on", ColumnType::Date),
            req("tyear", ColumnType::Int4),
            req("tmonth", ColumnType::Int4),
            req("tweek", ColumnType::Int4),
            req("created_on", ColumnType::Timestamp),
            req("updated_on", ColumnType::Timestamp),
        ],
    },
    TableSpec {
        name: "tokens",
        columns: &[
            req("id", ColumnType::Int4),
            req("user_id", ColumnType::Int4),
            req("action", ColumnType::Varchar(30)),
            req("value", ColumnType::Varchar(40)),
            req("created_on", ColumnType::Timestamp),
            opt("updated_on", ColumnType::Timestamp),
        ],
    },
    TableSpec {
        name: "trackers",
        columns: &[
            req("id", ColumnType::Int4),
            req("name", ColumnType::Varchar(30)),
            opt("description", ColumnType::Text),
            req("is_in_chlog", ColumnType::Bool),
            opt("position", ColumnType::Int4),
            req("is_in_roadmap", ColumnType::Bool),
            opt("fields_bits", ColumnType::Int4),
            opt("default_status_id", ColumnType::Int4),
        ],
    },
    TableSpec {
        name: "user_preferences",
        columns: &[
            req("id", ColumnType::Int4),
            req("user_id", ColumnType::Int4),
            opt("others", ColumnType::Text),
            opt("hide_mail", ColumnType::Bool),
            opt("time_zone", ColumnType::Varchar(1024)),
        ],
    },
    TableSpec {
        name: "users",
        columns: &[
            req("id", ColumnType::Int4),
            req("login", ColumnType::Varchar(1024)),
            req("hashed_password", ColumnType::Varchar(40)),
            req("firstname", ColumnType::Varchar(30)),
            req("lastname", ColumnType::Varchar(255)),
            req("admin", ColumnType::Bool),
            req("status", ColumnType::Int4),
            opt("last_login_on", ColumnType::Timestamp),
            opt("language", ColumnType::Varchar(5)),
            opt("auth_source_id", ColumnType::Int4),
            opt("created_on", ColumnType::Timestamp),
            opt("updated_on", ColumnType::Timestamp),
            opt("type", ColumnType::Varchar(1024)),
            opt("identity_url", ColumnType::Varchar(1024)),
            req("mail_notification", ColumnType::Varchar(1024)),
            opt("salt", ColumnType::Varchar(64)),
            req("must_change_passwd", ColumnType::Bool),
            opt("passwd_changed_on", ColumnType::Timestamp),
        ],
    },
    TableSpec {
        name: "versions",
        columns: &[
            req("id", ColumnType::Int4),
            req("project_id", ColumnType::Int4),
            req("name", ColumnType::Varchar(1024)),
            opt("description", ColumnType::Varchar(1024)),
            opt("effective_date", ColumnType::Date),
            opt("created_on", ColumnType::Timestamp),
            opt("updated_on", ColumnType::Timestamp),
            opt("wiki_page_title", ColumnType::Varchar(1024)),
            opt("status", ColumnType::Varchar(1024)),
            req("sharing", ColumnType::Varchar(1024)),
        ],
    },
    TableSpec {
        name: "watchers",
        columns: &[
            req("id", ColumnType::Int4),
            req("watchable_type", ColumnType::Varchar(1024)),
            req("watchable_id", ColumnType::Int4),
            opt("user_id", ColumnType::Int4),
        ],
    },
    TableSpec {
        name: "wiki_content_versions",
        columns: &[
            req("id", ColumnType::Int4),
            req("wiki_content_id", ColumnType::Int4),
            req("page_id", ColumnType::Int4),
            opt("author_id", ColumnType::Int4),
            opt("data", ColumnType::Bytea),
            opt("compression", ColumnType::Varchar(6)),
            opt("comments", ColumnType::Varchar(1024)),
            req("updated_on", ColumnType::Timestamp),
            req("version", ColumnType::Int4),
        ],
    },
    TableSpec {
        name: "wiki_contents",
        columns: &[
            req("id", ColumnType::Int4),
            req("page_id", ColumnType::Int4),
            opt("author_id", ColumnType::Int4),
            opt("text", ColumnType::Text),
            opt("comments", ColumnType::Varchar(1024)),
            req("updated_on", ColumnType::Timestamp),
            req("version", ColumnType::Int4),
        ],
    },
    TableSpec {
        name: "wiki_pages",
        columns: &[
            req("id", ColumnType::Int4),
            req("wiki_id", ColumnType::Int4),
            req("title", ColumnType::Varchar(255)),
            req("created_on", ColumnType::Timestamp),
            req("protected", ColumnType::Bool),
            opt("parent_id", ColumnType::Int4),
        ],
    },
    TableSpec {
        name: "wiki_redirects",
        columns: &[
            req("id", ColumnType::Int4),
            req("wiki_id", ColumnType::Int4),
            opt("title", ColumnType::Varchar(1024)),
            opt("redirects_to", ColumnType::Varchar(1024)),
            req("created_on", ColumnType::Timestamp),
            req("redirects_to_wiki_id", ColumnType::Int4),
        ],
    },
    TableSpec {
        name: "wikis",
        columns: &[
            req("id", ColumnType::Int4),
            req("project_id", ColumnType::Int4),
            req("start_page", ColumnType::Varchar(255)),
            req("status", ColumnType::Int4),
        ],
    },
    TableSpec {
        name: "workflows",
        columns: &[
            req("id", ColumnType::Int4),
            req("tracker_id", ColumnType::Int4),
            req("old_status_id", ColumnType::Int4),
            req("new_status_id", ColumnType::Int4),
            req("role_id", ColumnType::Int4),
            req("assignee", ColumnType::Bool),
            req("author", ColumnType::Bool),
            opt("type", ColumnType::Varchar(30)),
            opt("field_name", ColumnType::Varchar(30)),
            opt("rule", ColumnType::Varchar(30)),
        ],
    },
];

/// Restrict-on-delete references: (table, column) -> referenced table's `id`.
static FOREIGN_KEYS: &[ForeignKeySpec] = &[
    fk("attachments", "author_id", "users"),
    fk("boards", "project_id", "projects"),
    fk("boards", "last_message_id", "messages"),
    fk("boards", "parent_id", "boards"),
    fk("changes", "changeset_id", "changesets"),
    fk("changeset_parents", "changeset_id", "changesets"),
    fk("changesets", "repository_id", "repositories"),
    fk("changesets", "user_id", "users"),
    fk("changesets_issues", "changeset_id", "changesets"),
    fk("changesets_issues", "issue_id", "issues"),
    fk("checklists", "issue_id", "issues"),
    fk("comments", "author_id", "users"),
    fk("custom_field_enumerations", "custom_field_id", "custom_fields"),
    fk("custom_fields_projects", "custom_field_id", "custom_fields"),
    fk("custom_fields_projects", "project_id", "projects"),
    fk("custom_fields_roles", "custom_field_id", "custom_fields"),
    fk("custom_fields_roles", "role_id", "roles"),
    fk("custom_fields_trackers", "custom_field_id", "custom_fields"),
    fk("custom_fields_trackers", "tracker_id", "trackers"),
    fk("custom_values", "custom_field_id", "custom_fields"),
    fk("documents", "project_id", "projects"),
    fk("documents", "category_id", "issue_categories"),
    fk("email_addresses", "user_id", "users"),
    fk("enabled_modules", "project_id", "projects"),
    fk("enumerations", "project_id", "projects"),
    fk("enumerations", "parent_id", "enumerations"),
    fk("groups_users", "group_id", "users"),
    fk("groups_users", "user_id", "users"),
    fk("import_items", "import_id", "imports"),
    fk("imports", "user_id", "users"),
    fk("issue_categories", "project_id", "projects"),
    fk("issue_categories", "assigned_to_id", "users"),
    fk("issue_relations", "issue_from_id", "issues"),
    fk("issue_relations", "issue_to_id", "issues"),
    fk("issues", "tracker_id", "trackers"),
    fk("issues", "project_id", "projects"),
    fk("issues", "category_id", "issue_categories"),
    fk("issues", "status_id", "issue_statuses"),
    fk("issues", "assigned_to_id", "users"),
    fk("issues", "priority_id", "enumerations"),
    fk("issues", "fixed_version_id", "versions"),
    fk("issues", "author_id", "users"),
    fk("issues", "parent_id", "issues"),
    fk("issues", "root_id", "issues"),
    fk("journal_details", "journal_id", "journals"),
    fk("journals", "user_id", "users"),
    fk("member_roles", "member_id", "members"),
    fk("member_roles", "role_id", "roles"),
    fk("members", "user_id", "users"),
    fk("members", "project_id", "projects"),
    fk("messages", "board_id", "boards"),
    fk("messages", "parent_id", "messages"),
    fk("messages", "author_id", "users"),
    fk("messages", "last_reply_id", "messages"),
    fk("news", "project_id", "projects"),
    fk("news", "author_id", "users"),
    fk("projects", "parent_id", "projects"),
    fk("projects", "default_version_id", "versions"),
    fk("projects", "default_assigned_to_id", "users"),
    fk("projects_trackers", "project_id", "projects"),
    fk("projects_trackers", "tracker_id", "trackers"),
    fk("queries", "project_id", "projects"),
    fk("queries", "user_id", "users"),
    fk("queries_roles", "query_id", "queries"),
    fk("queries_roles", "role_id", "roles"),
    fk("repositories", "project_id", "projects"),
    fk("roles_managed_roles", "role_id", "roles"),
    fk("roles_managed_roles", "managed_role_id", "roles"),
    fk("time_entries", "project_id", "projects"),
    fk("time_entries", "author_id", "users"),
    fk("time_entries", "user_id", "users"),
    fk("time_entries", "issue_id", "issues"),
    fk("time_entries", "activity_id", "enumerations"),
    fk("tokens", "user_id", "users"),
    fk("trackers", "default_status_id", "issue_statuses"),
    fk("user_preferences", "user_id", "users"),
    fk("users", "auth_source_id", "auth_sources"),
    fk("versions", "project_id", "projects"),
    fk("watchers", "user_id", "users"),
    fk("wiki_content_versions", "wiki_content_id", "wiki_contents"),
    fk("wiki_content_versions", "page_id", "wiki_pages"),
    fk("wiki_content_versions", "author_id", "users"),
    fk("wiki_contents", "page_id", "wiki_pages"),
    fk("wiki_contents", "author_id", "users"),
    fk("wiki_pages", "wiki_id", "wikis"),
    fk("wiki_pages", "parent_id", "wiki_pages"),
    fk("wiki_redirects", "wiki_id", "wikis"),
    fk("wiki_redirects", "redirects_to_wiki_id", "wikis"),
    fk("wikis", "project_id", "projects"),
    fk("workflows", "tracker_id", "trackers"),
    fk("workflows", "old_status_id", "issue_statuses"),
    fk("workflows", "new_status_id", "issue_statuses"),
    fk("workflows", "role_id", "roles"),
];

static UNIQUE_KEYS: &[UniqueSpec] = &[
    UniqueSpec {
        table: "changesets",
        columns: &["repository_id", "revision"],
    },
    UniqueSpec {
        table: "changesets_issues",
        columns: &["changeset_id", "issue_id"],
    },
    UniqueSpec {
        table: "custom_fields_projects",
        columns: &["custom_field_id", "project_id"],
    },
    UniqueSpec {
        table: "custom_fields_roles",
        columns: &["custom_field_id", "role_id"],
    },
    UniqueSpec {
        table: "custom_fields_trackers",
        columns: &["custom_field_id", "tracker_id"],
    },
    UniqueSpec {
        table: "email_addresses",
        columns: &["address"],
    },
    UniqueSpec {
        table: "groups_users",
        columns: &["group_id", "user_id"],
    },
    UniqueSpec {
        table: "issue_relations",
        columns: &["issue_from_id", "issue_to_id"],
    },
    UniqueSpec {
        table: "members",
        columns: &["user_id", "project_id"],
    },
    UniqueSpec {
        table: "projects_trackers",
        columns: &["project_id", "tracker_id"],
    },
    UniqueSpec {
        table: "queries_roles",
        columns: &["query_id", "role_id"],
    },
    UniqueSpec {
        table: "roles_managed_roles",
        columns: &["role_id", "managed_role_id"],
    },
    UniqueSpec {
        table: "schema_migrations",
        columns: &["version"],
    },
    UniqueSpec {
        table: "tokens",
        columns: &["value"],
    },
];
