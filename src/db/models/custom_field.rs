use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::db::enums::{CustomFieldType, EntityKind, FieldFormat};
use crate::db::models::polymorphic::PolymorphicRef;

// Custom field definitions. `searchable`, `editable` and `multiple` are
// nullable upstream; None means the flag was never set, not false.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::custom_fields)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CustomField {
    pub id: i32,
    pub type_: CustomFieldType,
    pub name: String,
    pub field_format: FieldFormat,
    pub possible_values: Option<String>,
    pub regexp: Option<String>,
    pub min_length: Option<i32>,
    pub max_length: Option<i32>,
    pub is_required: bool,
    pub is_for_all: bool,
    pub is_filter: bool,
    pub position: Option<i32>,
    pub searchable: Option<bool>,
    pub default_value: Option<String>,
    pub editable: Option<bool>,
    pub visible: bool,
    pub multiple: Option<bool>,
    pub format_store: Option<String>,
    pub description: Option<String>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::custom_fields)]
pub struct NewCustomField {
    pub type_: CustomFieldType,
    pub name: String,
    pub field_format: FieldFormat,
    pub possible_values: Option<String>,
    pub regexp: Option<String>,
    pub min_length: Option<i32>,
    pub max_length: Option<i32>,
    pub is_required: bool,
    pub is_for_all: bool,
    pub is_filter: bool,
    pub position: Option<i32>,
    pub searchable: Option<bool>,
    pub default_value: Option<String>,
    pub editable: Option<bool>,
    pub visible: bool,
    pub multiple: Option<bool>,
    pub format_store: Option<String>,
    pub description: Option<String>,
}

impl NewCustomField {
    pub fn new(type_: CustomFieldType, name: impl Into<String>, field_format: FieldFormat) -> Self {
        Self {
            type_,
            name: name.into(),
            field_format,
            possible_values: None,
            regexp: None,
            min_length: None,
            max_length: None,
            is_required: false,
            is_for_all: false,
            is_filter: false,
            position: None,
            searchable: None,
            default_value: None,
            editable: None,
            visible: true,
            multiple: None,
            format_store: None,
            description: None,
        }
    }
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::custom_field_enumerations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CustomFieldEnumeration {
    pub id: i32,
    pub custom_field_id: i32,
    pub name: String,
    pub active: bool,
    pub position: i32,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::custom_field_enumerations)]
pub struct NewCustomFieldEnumeration {
    pub custom_field_id: i32,
    pub name: String,
    pub active: bool,
    pub position: i32,
}

// Applicability join tables
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::custom_fields_projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CustomFieldProject {
    pub id: i32,
    pub custom_field_id: i32,
    pub project_id: i32,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::custom_fields_projects)]
pub struct NewCustomFieldProject {
    pub custom_field_id: i32,
    pub project_id: i32,
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::custom_fields_roles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CustomFieldRole {
    pub id: i32,
    pub custom_field_id: i32,
    pub role_id: i32,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::custom_fields_roles)]
pub struct NewCustomFieldRole {
    pub custom_field_id: i32,
    pub role_id: i32,
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::custom_fields_trackers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CustomFieldTracker {
    pub id: i32,
    pub custom_field_id: i32,
    pub tracker_id: i32,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::custom_fields_trackers)]
pub struct NewCustomFieldTracker {
    pub custom_field_id: i32,
    pub tracker_id: i32,
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::custom_values)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CustomValue {
    pub id: i32,
    pub customized_type: EntityKind,
    pub customized_id: i32,
    pub custom_field_id: i32,
    pub value: Option<String>,
}

impl CustomValue {
    pub fn customized(&self) -> PolymorphicRef {
        PolymorphicRef::new(self.customized_type.clone(), self.customized_id)
    }
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::custom_values)]
pub struct NewCustomValue {
    pub customized_type: EntityKind,
    pub customized_id: i32,
    pub custom_field_id: i32,
    pub value: Option<String>,
}

impl NewCustomValue {
    pub fn on(target: &PolymorphicRef, custom_field_id: i32, value: Option<String>) -> Self {
        Self {
            customized_type: target.kind.clone(),
            customized_id: target.id,
            custom_field_id,
            value,
        }
    }
}
