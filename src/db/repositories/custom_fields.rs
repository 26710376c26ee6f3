use diesel::prelude::*;

use crate::db::enums::CustomFieldType;
use crate::db::models::custom_field::{
    CustomField, CustomFieldEnumeration, CustomFieldProject, CustomFieldRole, CustomFieldTracker,
    CustomValue, NewCustomField, NewCustomFieldEnumeration, NewCustomFieldProject,
    NewCustomFieldRole, NewCustomFieldTracker, NewCustomValue,
};
use crate::db::models::polymorphic::PolymorphicRef;
use crate::db::repositories::record_repo;
use crate::error::AppResult;

record_repo!(CustomFieldRepo, custom_fields, CustomField, NewCustomField);
record_repo!(
    CustomFieldEnumerationRepo,
    custom_field_enumerations,
    CustomFieldEnumeration,
    NewCustomFieldEnumeration
);
record_repo!(CustomFieldProjectRepo, custom_fields_projects, CustomFieldProject, NewCustomFieldProject);
record_repo!(CustomFieldRoleRepo, custom_fields_roles, CustomFieldRole, NewCustomFieldRole);
record_repo!(CustomFieldTrackerRepo, custom_fields_trackers, CustomFieldTracker, NewCustomFieldTracker);
record_repo!(CustomValueRepo, custom_values, CustomValue, NewCustomValue);

impl CustomFieldRepo {
    pub fn list_by_type(
        conn: &mut PgConnection,
        field_type: CustomFieldType,
    ) -> AppResult<Vec<CustomField>> {
        use crate::schema::custom_fields::dsl::*;
        let rows = custom_fields
            .filter(type_.eq(field_type.as_str()))
            .order((position.asc(), id.asc()))
            .select(CustomField::as_select())
            .load(conn)?;
        Ok(rows)
    }

    /// Issue fields enabled for a tracker.
    pub fn list_for_tracker(conn: &mut PgConnection, target_tracker_id: i32) -> AppResult<Vec<CustomField>> {
        use crate::schema::{custom_fields, custom_fields_trackers};
        let rows = custom_fields_trackers::table
            .inner_join(custom_fields::table)
            .filter(custom_fields_trackers::tracker_id.eq(target_tracker_id))
            .order((custom_fields::position.asc(), custom_fields::id.asc()))
            .select(CustomField::as_select())
            .load(conn)?;
        Ok(rows)
    }
}

impl CustomFieldEnumerationRepo {
    pub fn list_by_field(
        conn: &mut PgConnection,
        target_field_id: i32,
    ) -> AppResult<Vec<CustomFieldEnumeration>> {
        use crate::schema::custom_field_enumerations::dsl::*;
        let rows = custom_field_enumerations
            .filter(custom_field_id.eq(target_field_id))
            .order((position.asc(), id.asc()))
            .select(CustomFieldEnumeration::as_select())
            .load(conn)?;
        Ok(rows)
    }
}

impl CustomValueRepo {
    /// All custom values stored for one record.
    pub fn list_for(conn: &mut PgConnection, target: &PolymorphicRef) -> AppResult<Vec<CustomValue>> {
        use crate::schema::custom_values::dsl::*;
        let rows = custom_values
            .filter(customized_type.eq(target.kind.as_str()))
            .filter(customized_id.eq(target.id))
            .order((custom_field_id.asc(), id.asc()))
            .select(CustomValue::as_select())
            .load(conn)?;
        Ok(rows)
    }

    /// Values of one field for one record. Multi-valued fields store a row
    /// per value.
    pub fn values_for(
        conn: &mut PgConnection,
        target: &PolymorphicRef,
        field_id: i32,
    ) -> AppResult<Vec<CustomValue>> {
        use crate::schema::custom_values::dsl::*;
        let rows = custom_values
            .filter(customized_type.eq(target.kind.as_str()))
            .filter(customized_id.eq(target.id))
            .filter(custom_field_id.eq(field_id))
            .order(id.asc())
            .select(CustomValue::as_select())
            .load(conn)?;
        Ok(rows)
    }

    pub fn value_for(
        conn: &mut PgConnection,
        target: &PolymorphicRef,
        field_id: i32,
    ) -> AppResult<Option<CustomValue>> {
        Ok(Self::values_for(conn, target, field_id)?.into_iter().next())
    }
}
