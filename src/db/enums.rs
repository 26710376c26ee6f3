use diesel::backend::Backend;
use diesel::deserialize::{self, FromSql};
use diesel::pg::Pg;
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::Text;
use diesel::{AsExpression, FromSqlRow};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;

/// Declares a `Text`-backed tag enum.
///
/// None of these columns carry a check constraint, so reading never fails:
/// tags outside the listed ones land in `Other` and are written back verbatim.
macro_rules! text_tag_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $tag:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, AsExpression, FromSqlRow)]
        #[diesel(sql_type = Text)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            Other(String),
        }

        impl $name {
            /// Every tag this crate names, in declaration order.
            pub const KNOWN: &'static [$name] = &[$($name::$variant,)+];

            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $tag,)+
                    $name::Other(tag) => tag,
                }
            }

            pub fn is_known(&self) -> bool {
                !matches!(self, $name::Other(_))
            }
        }

        impl From<&str> for $name {
            fn from(tag: &str) -> Self {
                match tag {
                    $($tag => $name::$variant,)+
                    other => $name::Other(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(tag: String) -> Self {
                $name::from(tag.as_str())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromSql<Text, Pg> for $name {
            fn from_sql(bytes: <Pg as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
                let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
                Ok($name::from(s))
            }
        }

        impl ToSql<Text, Pg> for $name {
            fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
                out.write_all(self.as_str().as_bytes())?;
                Ok(IsNull::No)
            }
        }
    };
}

text_tag_enum! {
    /// Type tag of a polymorphic reference (`journalized_type`, `commented_type`,
    /// `watchable_type`, `customized_type`, `container_type`).
    pub enum EntityKind {
        Issue => "Issue",
        Project => "Project",
        News => "News",
        Document => "Document",
        Message => "Message",
        Board => "Board",
        Wiki => "Wiki",
        WikiPage => "WikiPage",
        WikiContent => "WikiContent",
        Version => "Version",
        TimeEntry => "TimeEntry",
        Changeset => "Changeset",
        Journal => "Journal",
        Enumeration => "Enumeration",
        Principal => "Principal",
        User => "User",
        Group => "Group",
    }
}

text_tag_enum! {
    /// `custom_fields.type`: which kind of record a custom field applies to.
    ///
    /// Plugins add their own `*CustomField` types.
    pub enum CustomFieldType {
        IssueCustomField => "IssueCustomField",
        TimeEntryCustomField => "TimeEntryCustomField",
        ProjectCustomField => "ProjectCustomField",
        VersionCustomField => "VersionCustomField",
        DocumentCustomField => "DocumentCustomField",
        UserCustomField => "UserCustomField",
        GroupCustomField => "GroupCustomField",
        TimeEntryActivityCustomField => "TimeEntryActivityCustomField",
        IssuePriorityCustomField => "IssuePriorityCustomField",
        DocumentCategoryCustomField => "DocumentCategoryCustomField",
    }
}

impl CustomFieldType {
    /// Tag used in `custom_values.customized_type` for values of this field.
    ///
    /// An unknown `FooCustomField` customizes `Foo`. `None` when the tag has no
    /// `CustomField` suffix to strip.
    pub fn customized_kind(&self) -> Option<EntityKind> {
        let kind = match self {
            CustomFieldType::IssueCustomField => EntityKind::Issue,
            CustomFieldType::TimeEntryCustomField => EntityKind::TimeEntry,
            CustomFieldType::ProjectCustomField => EntityKind::Project,
            CustomFieldType::VersionCustomField => EntityKind::Version,
            CustomFieldType::DocumentCustomField => EntityKind::Document,
            CustomFieldType::UserCustomField | CustomFieldType::GroupCustomField => {
                EntityKind::Principal
            }
            CustomFieldType::TimeEntryActivityCustomField
            | CustomFieldType::IssuePriorityCustomField
            | CustomFieldType::DocumentCategoryCustomField => EntityKind::Enumeration,
            CustomFieldType::Other(tag) => match tag.strip_suffix("CustomField") {
                Some(prefix) if !prefix.is_empty() => EntityKind::from(prefix),
                _ => return None,
            },
        };
        Some(kind)
    }
}

text_tag_enum! {
    /// `custom_fields.field_format`.
    pub enum FieldFormat {
        Bool => "bool",
        Date => "date",
        Int => "int",
        Link => "link",
        List => "list",
        Enumeration => "enumeration",
        Float => "float",
        String => "string",
        Text => "text",
        User => "user",
        Version => "version",
    }
}

impl FieldFormat {
    /// Display label used by Redmine's admin screens. Unknown formats show
    /// their stored tag.
    pub fn label(&self) -> &str {
        match self {
            FieldFormat::Bool => "Boolean",
            FieldFormat::Date => "Date",
            FieldFormat::Int => "Integer",
            FieldFormat::Link => "Link",
            FieldFormat::List => "List",
            FieldFormat::Enumeration => "Key/value list",
            FieldFormat::Float => "Float",
            FieldFormat::String => "Text",
            FieldFormat::Text => "Long text",
            FieldFormat::User => "User",
            FieldFormat::Version => "Version",
            FieldFormat::Other(tag) => tag,
        }
    }
}

text_tag_enum! {
    /// `enumerations.type`.
    pub enum EnumerationKind {
        DocumentCategory => "DocumentCategory",
        IssuePriority => "IssuePriority",
        TimeEntryActivity => "TimeEntryActivity",
    }
}

text_tag_enum! {
    /// `issue_relations.relation_type`.
    pub enum RelationType {
        Relates => "relates",
        Duplicates => "duplicates",
        Duplicated => "duplicated",
        Blocks => "blocks",
        Blocked => "blocked",
        Precedes => "precedes",
        Follows => "follows",
        CopiedTo => "copied_to",
        CopiedFrom => "copied_from",
    }
}

text_tag_enum! {
    /// `versions.sharing`: which projects besides the owner may use a version.
    pub enum VersionSharing {
        None => "none",
        Descendants => "descendants",
        Hierarchy => "hierarchy",
        Tree => "tree",
        System => "system",
    }
}
