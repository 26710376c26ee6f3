use diesel::prelude::*;

use crate::db::models::polymorphic::PolymorphicRef;
use crate::db::models::system::{
    Attachment, Import, ImportItem, NewAttachment, NewImport, NewImportItem, NewSchemaMigration,
    NewSetting, SchemaMigration, Setting,
};
use crate::db::repositories::record_repo;
use crate::error::AppResult;

record_repo!(SettingRepo, settings, Setting, NewSetting);
record_repo!(AttachmentRepo, attachments, Attachment, NewAttachment);
record_repo!(ImportRepo, imports, Import, NewImport);
record_repo!(ImportItemRepo, import_items, ImportItem, NewImportItem);
record_repo!(SchemaMigrationRepo, schema_migrations, SchemaMigration, NewSchemaMigration);

impl SettingRepo {
    pub fn find_by_name(conn: &mut PgConnection, target_name: &str) -> AppResult<Option<Setting>> {
        use crate::schema::settings::dsl::*;
        let found = settings
            .filter(name.eq(target_name))
            .select(Setting::as_select())
            .first(conn)
            .optional()?;
        Ok(found)
    }
}

impl AttachmentRepo {
    pub fn list_for(conn: &mut PgConnection, target: &PolymorphicRef) -> AppResult<Vec<Attachment>> {
        use crate::schema::attachments::dsl::*;
        let rows = attachments
            .filter(container_type.eq(target.kind.as_str()))
            .filter(container_id.eq(target.id))
            .order((created_on.asc(), id.asc()))
            .select(Attachment::as_select())
            .load(conn)?;
        Ok(rows)
    }

    /// Uploads not attached to any container yet.
    pub fn list_unattached(conn: &mut PgConnection) -> AppResult<Vec<Attachment>> {
        use crate::schema::attachments::dsl::*;
        let rows = attachments
            .filter(container_id.is_null())
            .order(id.asc())
            .select(Attachment::as_select())
            .load(conn)?;
        Ok(rows)
    }

    pub fn find_by_digest(conn: &mut PgConnection, target_digest: &str) -> AppResult<Vec<Attachment>> {
        use crate::schema::attachments::dsl::*;
        let rows = attachments
            .filter(digest.eq(target_digest))
            .order(id.asc())
            .select(Attachment::as_select())
            .load(conn)?;
        Ok(rows)
    }
}

impl ImportItemRepo {
    pub fn list_by_import(conn: &mut PgConnection, target_import_id: i32) -> AppResult<Vec<ImportItem>> {
        use crate::schema::import_items::dsl::*;
        let rows = import_items
            .filter(import_id.eq(target_import_id))
            .order(position.asc())
            .select(ImportItem::as_select())
            .load(conn)?;
        Ok(rows)
    }
}

impl SchemaMigrationRepo {
    pub fn find_by_version(
        conn: &mut PgConnection,
        target_version: &str,
    ) -> AppResult<Option<SchemaMigration>> {
        use crate::schema::schema_migrations::dsl::*;
        let found = schema_migrations
            .filter(version.eq(target_version))
            .select(SchemaMigration::as_select())
            .first(conn)
            .optional()?;
        Ok(found)
    }

    pub fn is_applied(conn: &mut PgConnection, target_version: &str) -> AppResult<bool> {
        Ok(Self::find_by_version(conn, target_version)?.is_some())
    }
}
