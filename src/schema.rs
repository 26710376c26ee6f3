// Table declarations for the Redmine schema. The schema is owned upstream;
// names, types and nullability here must track it exactly.

diesel::table! {
    attachments (id) {
        id -> Int4,
        container_id -> Nullable<Int4>,
        #[max_length = 30]
        container_type -> Nullable<Varchar>,
        #[max_length = 1024]
        filename -> Varchar,
        #[max_length = 1024]
        disk_filename -> Varchar,
        filesize -> Int8,
        #[max_length = 1024]
        content_type -> Nullable<Varchar>,
        #[max_length = 64]
        digest -> Varchar,
        downloads -> Int4,
        author_id -> Int4,
        created_on -> Nullable<Timestamp>,
        #[max_length = 1024]
        description -> Nullable<Varchar>,
        #[max_length = 1024]
        disk_directory -> Nullable<Varchar>,
    }
}

diesel::table! {
    auth_sources (id) {
        id -> Int4,
        #[sql_name = "type"]
        #[max_length = 30]
        type_ -> Varchar,
        #[max_length = 60]
        name -> Varchar,
        #[max_length = 60]
        host -> Nullable<Varchar>,
        port -> Nullable<Int4>,
        #[max_length = 1024]
        account -> Nullable<Varchar>,
        #[max_length = 1024]
        account_password -> Nullable<Varchar>,
        #[max_length = 255]
        base_dn -> Nullable<Varchar>,
        #[max_length = 30]
        attr_login -> Nullable<Varchar>,
        #[max_length = 30]
        attr_firstname -> Nullable<Varchar>,
        #[max_length = 30]
        attr_lastname -> Nullable<Varchar>,
        #[max_length = 30]
        attr_mail -> Nullable<Varchar>,
        onthefly_register -> Bool,
        tls -> Bool,
        filter -> Nullable<Text>,
        timeout -> Nullable<Int4>,
    }
}

diesel::table! {
    boards (id) {
        id -> Int4,
        project_id -> Int4,
        #[max_length = 1024]
        name -> Varchar,
        #[max_length = 1024]
        description -> Nullable<Varchar>,
        position -> Nullable<Int4>,
        topics_count -> Int4,
        messages_count -> Int4,
        last_message_id -> Nullable<Int4>,
        parent_id -> Nullable<Int4>,
    }
}

diesel::table! {
    changes (id) {
        id -> Int4,
        changeset_id -> Int4,
        #[max_length = 1]
        action -> Varchar,
        path -> Text,
        from_path -> Nullable<Text>,
        #[max_length = 1024]
        from_revision -> Nullable<Varchar>,
        #[max_length = 1024]
        revision -> Nullable<Varchar>,
        #[max_length = 1024]
        branch -> Nullable<Varchar>,
    }
}

diesel::table! {
    changeset_parents (id) {
        id -> Int4,
        changeset_id -> Int4,
        parent_id -> Int4,
    }
}

diesel::table! {
    changesets (id) {
        id -> Int4,
        repository_id -> Int4,
        #[max_length = 255]
        revision -> Varchar,
        #[max_length = 1024]
        committer -> Nullable<Varchar>,
        committed_on -> Timestamp,
        comments -> Nullable<Text>,
        commit_date -> Nullable<Date>,
        #[max_length = 1024]
        scmid -> Nullable<Varchar>,
        user_id -> Nullable<Int4>,
    }
}

diesel::table! {
    changesets_issues (id) {
        id -> Int4,
        changeset_id -> Int4,
        issue_id -> Int4,
    }
}

diesel::table! {
    checklists (id) {
        id -> Int4,
        is_done -> Bool,
        #[max_length = 255]
        subject -> Nullable<Varchar>,
        position -> Int4,
        issue_id -> Int4,
        created_at -> Nullable<Timestamp>,
        updated_at -> Nullable<Timestamp>,
        is_section -> Bool,
    }
}

diesel::table! {
    comments (id) {
        id -> Int4,
        #[max_length = 30]
        commented_type -> Varchar,
        commented_id -> Int4,
        author_id -> Int4,
        content -> Nullable<Text>,
        created_on -> Timestamp,
        updated_on -> Timestamp,
    }
}

diesel::table! {
    custom_field_enumerations (id) {
        id -> Int4,
        custom_field_id -> Int4,
        #[max_length = 1024]
        name -> Varchar,
        active -> Bool,
        position -> Int4,
    }
}

diesel::table! {
    custom_fields (id) {
        id -> Int4,
        #[sql_name = "type"]
        #[max_length = 30]
        type_ -> Varchar,
        #[max_length = 30]
        name -> Varchar,
        #[max_length = 30]
        field_format -> Varchar,
        possible_values -> Nullable<Text>,
        #[max_length = 1024]
        regexp -> Nullable<Varchar>,
        min_length -> Nullable<Int4>,
        max_length -> Nullable<Int4>,
        is_required -> Bool,
        is_for_all -> Bool,
        is_filter -> Bool,
        position -> Nullable<Int4>,
        searchable -> Nullable<Bool>,
        default_value -> Nullable<Text>,
        editable -> Nullable<Bool>,
        visible -> Bool,
        multiple -> Nullable<Bool>,
        format_store -> Nullable<Text>,
        description -> Nullable<Text>,
    }
}

diesel::table! {
    custom_fields_projects (id) {
        id -> Int4,
        custom_field_id -> Int4,
        project_id -> Int4,
    }
}

diesel::table! {
    custom_fields_roles (id) {
        id -> Int4,
        custom_field_id -> Int4,
        role_id -> Int4,
    }
}

diesel::table! {
    custom_fields_trackers (id) {
        id -> Int4,
        custom_field_id -> Int4,
        tracker_id -> Int4,
    }
}

diesel::table! {
    custom_values (id) {
        id -> Int4,
        #[max_length = 30]
        customized_type -> Varchar,
        customized_id -> Int4,
        custom_field_id -> Int4,
        value -> Nullable<Text>,
    }
}

diesel::table! {
    documents (id) {
        id -> Int4,
        project_id -> Int4,
        category_id -> Int4,
        #[max_length = 1024]
        title -> Varchar,
        description -> Nullable<Text>,
        created_on -> Nullable<Timestamp>,
    }
}

diesel::table! {
    email_addresses (id) {
        id -> Int4,
        user_id -> Int4,
        #[max_length = 1024]
        address -> Varchar,
        is_default -> Bool,
        notify -> Bool,
        created_on -> Timestamp,
        updated_on -> Timestamp,
    }
}

diesel::table! {
    enabled_modules (id) {
        id -> Int4,
        project_id -> Nullable<Int4>,
        #[max_length = 1024]
        name -> Varchar,
    }
}

diesel::table! {
    enumerations (id) {
        id -> Int4,
        #[max_length = 30]
        name -> Varchar,
        position -> Nullable<Int4>,
        is_default -> Bool,
        #[sql_name = "type"]
        #[max_length = 17]
        type_ -> Nullable<Varchar>,
        active -> Bool,
        project_id -> Nullable<Int4>,
        parent_id -> Nullable<Int4>,
        #[max_length = 30]
        position_name -> Nullable<Varchar>,
    }
}

diesel::table! {
    groups_users (id) {
        id -> Int4,
        group_id -> Int4,
        user_id -> Int4,
    }
}

diesel::table! {
    import_items (id) {
        id -> Int4,
        import_id -> Int4,
        position -> Int4,
        obj_id -> Nullable<Int4>,
        message -> Nullable<Text>,
    }
}

diesel::table! {
    imports (id) {
        id -> Int4,
        #[sql_name = "type"]
        #[max_length = 1024]
        type_ -> Nullable<Varchar>,
        user_id -> Int4,
        #[max_length = 1024]
        filename -> Nullable<Varchar>,
        settings -> Nullable<Text>,
        total_items -> Nullable<Int4>,
        finished -> Bool,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

diesel::table! {
    issue_categories (id) {
        id -> Int4,
        project_id -> Int4,
        #[max_length = 60]
        name -> Varchar,
        assigned_to_id -> Nullable<Int4>,
    }
}

diesel::table! {
    issue_relations (id) {
        id -> Int4,
        issue_from_id -> Int4,
        issue_to_id -> Int4,
        #[max_length = 1024]
        relation_type -> Varchar,
        delay -> Nullable<Int4>,
    }
}

diesel::table! {
    issue_statuses (id) {
        id -> Int4,
        #[max_length = 30]
        name -> Varchar,
        is_closed -> Bool,
        position -> Nullable<Int4>,
        default_done_ratio -> Nullable<Int4>,
    }
}

diesel::table! {
    issues (id) {
        id -> Int4,
        tracker_id -> Int4,
        project_id -> Int4,
        #[max_length = 1024]
        subject -> Varchar,
        description -> Nullable<Text>,
        due_date -> Nullable<Date>,
        category_id -> Nullable<Int4>,
        status_id -> Int4,
        assigned_to_id -> Nullable<Int4>,
        priority_id -> Int4,
        fixed_version_id -> Nullable<Int4>,
        author_id -> Int4,
        lock_version -> Int4,
        created_on -> Nullable<Timestamp>,
        updated_on -> Nullable<Timestamp>,
        start_date -> Nullable<Date>,
        done_ratio -> Int4,
        estimated_hours -> Nullable<Float8>,
        parent_id -> Nullable<Int4>,
        root_id -> Nullable<Int4>,
        lft -> Nullable<Int4>,
        rgt -> Nullable<Int4>,
        is_private -> Bool,
        closed_on -> Nullable<Timestamp>,
    }
}

diesel::table! {
    journal_details (id) {
        id -> Int4,
        journal_id -> Int4,
        #[max_length = 30]
        property -> Varchar,
        #[max_length = 30]
        prop_key -> Varchar,
        old_value -> Nullable<Text>,
        value -> Nullable<Text>,
    }
}

diesel::table! {
    journals (id) {
        id -> Int4,
        journalized_id -> Int4,
        #[max_length = 30]
        journalized_type -> Varchar,
        user_id -> Int4,
        notes -> Nullable<Text>,
        created_on -> Timestamp,
        private_notes -> Bool,
    }
}

diesel::table! {
    member_roles (id) {
        id -> Int4,
        member_id -> Int4,
        role_id -> Int4,
        inherited_from -> Nullable<Int4>,
    }
}

diesel::table! {
    members (id) {
        id -> Int4,
        user_id -> Int4,
        project_id -> Int4,
        created_on -> Nullable<Timestamp>,
        mail_notification -> Bool,
    }
}

diesel::table! {
    messages (id) {
        id -> Int4,
        board_id -> Int4,
        parent_id -> Nullable<Int4>,
        #[max_length = 1024]
        subject -> Varchar,
        content -> Nullable<Text>,
        author_id -> Nullable<Int4>,
        replies_count -> Int4,
        last_reply_id -> Nullable<Int4>,
        created_on -> Timestamp,
        updated_on -> Timestamp,
        locked -> Nullable<Bool>,
        sticky -> Nullable<Int4>,
    }
}

diesel::table! {
    news (id) {
        id -> Int4,
        project_id -> Nullable<Int4>,
        #[max_length = 60]
        title -> Varchar,
        #[max_length = 255]
        summary -> Nullable<Varchar>,
        description -> Nullable<Text>,
        author_id -> Int4,
        created_on -> Nullable<Timestamp>,
        comments_count -> Int4,
    }
}

diesel::table! {
    open_id_authentication_associations (id) {
        id -> Int4,
        issued -> Nullable<Int4>,
        lifetime -> Nullable<Int4>,
        #[max_length = 1024]
        handle -> Nullable<Varchar>,
        #[max_length = 1024]
        assoc_type -> Nullable<Varchar>,
        server_url -> Nullable<Bytea>,
        secret -> Nullable<Bytea>,
    }
}

diesel::table! {
    open_id_authentication_nonces (id) {
        id -> Int4,
        timestamp -> Int4,
        #[max_length = 1024]
        server_url -> Nullable<Varchar>,
        #[max_length = 1024]
        salt -> Varchar,
    }
}

diesel::table! {
    projects (id) {
        id -> Int4,
        #[max_length = 1024]
        name -> Varchar,
        description -> Nullable<Text>,
        #[max_length = 1024]
        homepage -> Nullable<Varchar>,
        is_public -> Bool,
        parent_id -> Nullable<Int4>,
        created_on -> Nullable<Timestamp>,
        updated_on -> Nullable<Timestamp>,
        #[max_length = 1024]
        identifier -> Nullable<Varchar>,
        status -> Int4,
        lft -> Nullable<Int4>,
        rgt -> Nullable<Int4>,
        inherit_members -> Bool,
        default_version_id -> Nullable<Int4>,
        default_assigned_to_id -> Nullable<Int4>,
    }
}

diesel::table! {
    projects_trackers (id) {
        id -> Int4,
        project_id -> Int4,
        tracker_id -> Int4,
    }
}

diesel::table! {
    queries (id) {
        id -> Int4,
        project_id -> Nullable<Int4>,
        #[max_length = 1024]
        name -> Varchar,
        filters -> Nullable<Text>,
        user_id -> Int4,
        column_names -> Nullable<Text>,
        sort_criteria -> Nullable<Text>,
        #[max_length = 1024]
        group_by -> Nullable<Varchar>,
        #[sql_name = "type"]
        #[max_length = 1024]
        type_ -> Nullable<Varchar>,
        visibility -> Nullable<Int4>,
        options -> Nullable<Text>,
    }
}

diesel::table! {
    queries_roles (id) {
        id -> Int4,
        query_id -> Int4,
        role_id -> Int4,
    }
}

diesel::table! {
    repositories (id) {
        id -> Int4,
        project_id -> Int4,
        #[max_length = 1024]
        url -> Varchar,
        #[max_length = 60]
        login -> Nullable<Varchar>,
        #[max_length = 1024]
        password -> Nullable<Varchar>,
        #[max_length = 255]
        root_url -> Nullable<Varchar>,
        #[sql_name = "type"]
        #[max_length = 1024]
        type_ -> Nullable<Varchar>,
        #[max_length = 64]
        path_encoding -> Nullable<Varchar>,
        #[max_length = 64]
        log_encoding -> Nullable<Varchar>,
        extra_info -> Nullable<Text>,
        #[max_length = 1024]
        identifier -> Nullable<Varchar>,
        is_default -> Nullable<Bool>,
        created_on -> Nullable<Timestamp>,
    }
}

diesel::table! {
    roles (id) {
        id -> Int4,
        #[max_length = 255]
        name -> Varchar,
        position -> Nullable<Int4>,
        assignable -> Nullable<Bool>,
        builtin -> Int4,
        permissions -> Nullable<Text>,
        #[max_length = 30]
        issues_visibility -> Varchar,
        #[max_length = 30]
        users_visibility -> Varchar,
        #[max_length = 30]
        time_entries_visibility -> Varchar,
        all_roles_managed -> Bool,
        settings -> Nullable<Text>,
    }
}

diesel::table! {
    roles_managed_roles (id) {
        id -> Int4,
        role_id -> Int4,
        managed_role_id -> Int4,
    }
}

diesel::table! {
    schema_migrations (id) {
        id -> Int4,
        #[max_length = 255]
        version -> Varchar,
    }
}

diesel::table! {
    settings (id) {
        id -> Int4,
        #[max_length = 255]
        name -> Varchar,
        value -> Nullable<Text>,
        updated_on -> Nullable<Timestamp>,
    }
}

diesel::table! {
    time_entries (id) {
        id -> Int4,
        project_id -> Int4,
        author_id -> Nullable<Int4>,
        user_id -> Int4,
        issue_id -> Nullable<Int4>,
        hours -> Float8,
        #[max_length = 1024]
        comments -> Nullable<Varchar>,
        activity_id -> Int4,
        spent_on -> Date,
        tyear -> Int4,
        tmonth -> Int4,
        tweek -> Int4,
        created_on -> Timestamp,
        updated_on -> Timestamp,
    }
}

diesel::table! {
    tokens (id) {
        id -> Int4,
        user_id -> Int4,
        #[max_length = 30]
        action -> Varchar,
        #[max_length = 40]
        value -> Varchar,
        created_on -> Timestamp,
        updated_on -> Nullable<Timestamp>,
    }
}

diesel::table! {
    trackers (id) {
        id -> Int4,
        #[max_length = 30]
        name -> Varchar,
        description -> Nullable<Text>,
        is_in_chlog -> Bool,
        position -> Nullable<Int4>,
        is_in_roadmap -> Bool,
        fields_bits -> Nullable<Int4>,
        default_status_id -> Nullable<Int4>,
    }
}

diesel::table! {
    user_preferences (id) {
        id -> Int4,
        user_id -> Int4,
        others -> Nullable<Text>,
        hide_mail -> Nullable<Bool>,
        #[max_length = 1024]
        time_zone -> Nullable<Varchar>,
    }
}

diesel::table! {
    users (id) {
        id -> Int4,
        #[max_length = 1024]
        login -> Varchar,
        #[max_length = 40]
        hashed_password -> Varchar,
        #[max_length = 30]
        firstname -> Varchar,
        #[max_length = 255]
        lastname -> Varchar,
        admin -> Bool,
        status -> Int4,
        last_login_on -> Nullable<Timestamp>,
        #[max_length = 5]
        language -> Nullable<Varchar>,
        auth_source_id -> Nullable<Int4>,
        created_on -> Nullable<Timestamp>,
        updated_on -> Nullable<Timestamp>,
        #[sql_name = "type"]
        #[max_length = 1024]
        type_ -> Nullable<Varchar>,
        #[max_length = 1024]
        identity_url -> Nullable<Varchar>,
        #[max_length = 1024]
        mail_notification -> Varchar,
        #[max_length = 64]
        salt -> Nullable<Varchar>,
        must_change_passwd -> Bool,
        passwd_changed_on -> Nullable<Timestamp>,
    }
}

diesel::table! {
    versions (id) {
        id -> Int4,
        project_id -> Int4,
        #[max_length = 1024]
        name -> Varchar,
        #[max_length = 1024]
        description -> Nullable<Varchar>,
        effective_date -> Nullable<Date>,
        created_on -> Nullable<Timestamp>,
        updated_on -> Nullable<Timestamp>,
        #[max_length = 1024]
        wiki_page_title -> Nullable<Varchar>,
        #[max_length = 1024]
        status -> Nullable<Varchar>,
        #[max_length = 1024]
        sharing -> Varchar,
    }
}

diesel::table! {
    watchers (id) {
        id -> Int4,
        #[max_length = 1024]
        watchable_type -> Varchar,
        watchable_id -> Int4,
        user_id -> Nullable<Int4>,
    }
}

diesel::table! {
    wiki_content_versions (id) {
        id -> Int4,
        wiki_content_id -> Int4,
        page_id -> Int4,
        author_id -> Nullable<Int4>,
        data -> Nullable<Bytea>,
        #[max_length = 6]
        compression -> Nullable<Varchar>,
        #[max_length = 1024]
        comments -> Nullable<Varchar>,
        updated_on -> Timestamp,
        version -> Int4,
    }
}

diesel::table! {
    wiki_contents (id) {
        id -> Int4,
        page_id -> Int4,
        author_id -> Nullable<Int4>,
        text -> Nullable<Text>,
        #[max_length = 1024]
        comments -> Nullable<Varchar>,
        updated_on -> Timestamp,
        version -> Int4,
    }
}

diesel::table! {
    wiki_pages (id) {
        id -> Int4,
        wiki_id -> Int4,
        #[max_length = 255]
        title -> Varchar,
        created_on -> Timestamp,
        protected -> Bool,
        parent_id -> Nullable<Int4>,
    }
}

diesel::table! {
    wiki_redirects (id) {
        id -> Int4,
        wiki_id -> Int4,
        #[max_length = 1024]
        title -> Nullable<Varchar>,
        #[max_length = 1024]
        redirects_to -> Nullable<Varchar>,
        created_on -> Timestamp,
        redirects_to_wiki_id -> Int4,
    }
}

diesel::table! {
    wikis (id) {
        id -> Int4,
        project_id -> Int4,
        #[max_length = 255]
        start_page -> Varchar,
        status -> Int4,
    }
}

diesel::table! {
    workflows (id) {
        id -> Int4,
        tracker_id -> Int4,
        old_status_id -> Int4,
        new_status_id -> Int4,
        role_id -> Int4,
        assignee -> Bool,
        author -> Bool,
        #[sql_name = "type"]
        #[max_length = 30]
        type_ -> Nullable<Varchar>,
        #[max_length = 30]
        field_name -> Nullable<Varchar>,
        #[max_length = 30]
        rule -> Nullable<Varchar>,
    }
}

// Pairs with more than one foreign key between them (issues -> users,
// workflows -> issue_statuses, ...) and self references have no joinable!
// edge; join those with an explicit ON clause.
diesel::joinable!(attachments -> users (author_id));
diesel::joinable!(boards -> projects (project_id));
diesel::joinable!(changes -> changesets (changeset_id));
diesel::joinable!(changeset_parents -> changesets (changeset_id));
diesel::joinable!(changesets -> repositories (repository_id));
diesel::joinable!(changesets -> users (user_id));
diesel::joinable!(changesets_issues -> changesets (changeset_id));
diesel::joinable!(changesets_issues -> issues (issue_id));
diesel::joinable!(checklists -> issues (issue_id));
diesel::joinable!(comments -> users (author_id));
diesel::joinable!(custom_field_enumerations -> custom_fields (custom_field_id));
diesel::joinable!(custom_fields_projects -> custom_fields (custom_field_id));
diesel::joinable!(custom_fields_projects -> projects (project_id));
diesel::joinable!(custom_fields_roles -> custom_fields (custom_field_id));
diesel::joinable!(custom_fields_roles -> roles (role_id));
diesel::joinable!(custom_fields_trackers -> custom_fields (custom_field_id));
diesel::joinable!(custom_fields_trackers -> trackers (tracker_id));
diesel::joinable!(custom_values -> custom_fields (custom_field_id));
diesel::joinable!(documents -> issue_categories (category_id));
diesel::joinable!(documents -> projects (project_id));
diesel::joinable!(email_addresses -> users (user_id));
diesel::joinable!(enabled_modules -> projects (project_id));
diesel::joinable!(enumerations -> projects (project_id));
diesel::joinable!(import_items -> imports (import_id));
diesel::joinable!(imports -> users (user_id));
diesel::joinable!(issue_categories -> projects (project_id));
diesel::joinable!(issue_categories -> users (assigned_to_id));
diesel::joinable!(issues -> enumerations (priority_id));
diesel::joinable!(issues -> issue_categories (category_id));
diesel::joinable!(issues -> issue_statuses (status_id));
diesel::joinable!(issues -> projects (project_id));
diesel::joinable!(issues -> trackers (tracker_id));
diesel::joinable!(issues -> versions (fixed_version_id));
diesel::joinable!(journal_details -> journals (journal_id));
diesel::joinable!(journals -> users (user_id));
diesel::joinable!(member_roles -> members (member_id));
diesel::joinable!(member_roles -> roles (role_id));
diesel::joinable!(members -> projects (project_id));
diesel::joinable!(members -> users (user_id));
diesel::joinable!(messages -> boards (board_id));
diesel::joinable!(messages -> users (author_id));
diesel::joinable!(news -> projects (project_id));
diesel::joinable!(news -> users (author_id));
diesel::joinable!(projects -> users (default_assigned_to_id));
diesel::joinable!(projects_trackers -> projects (project_id));
diesel::joinable!(projects_trackers -> trackers (tracker_id));
diesel::joinable!(queries -> projects (project_id));
diesel::joinable!(queries -> users (user_id));
diesel::joinable!(queries_roles -> queries (query_id));
diesel::joinable!(queries_roles -> roles (role_id));
diesel::joinable!(repositories -> projects (project_id));
diesel::joinable!(time_entries -> enumerations (activity_id));
diesel::joinable!(time_entries -> issues (issue_id));
diesel::joinable!(time_entries -> projects (project_id));
diesel::joinable!(tokens -> users (user_id));
diesel::joinable!(trackers -> issue_statuses (default_status_id));
diesel::joinable!(user_preferences -> users (user_id));
diesel::joinable!(users -> auth_sources (auth_source_id));
diesel::joinable!(versions -> projects (project_id));
diesel::joinable!(watchers -> users (user_id));
diesel::joinable!(wiki_content_versions -> users (author_id));
diesel::joinable!(wiki_content_versions -> wiki_contents (wiki_content_id));
diesel::joinable!(wiki_content_versions -> wiki_pages (page_id));
diesel::joinable!(wiki_contents -> users (author_id));
diesel::joinable!(wiki_contents -> wiki_pages (page_id));
diesel::joinable!(wiki_pages -> wikis (wiki_id));
diesel::joinable!(wikis -> projects (project_id));
diesel::joinable!(workflows -> roles (role_id));
diesel::joinable!(workflows -> trackers (tracker_id));

diesel::allow_tables_to_appear_in_same_query!(
    attachments,
    auth_sources,
    boards,
    changes,
    changeset_parents,
    changesets,
    changesets_issues,
    checklists,
    comments,
    custom_field_enumerations,
    custom_fields,
    custom_fields_projects,
    custom_fields_roles,
    custom_fields_trackers,
    custom_values,
    documents,
    email_addresses,
    enabled_modules,
    enumerations,
    groups_users,
    import_items,
    imports,
    issue_categories,
    issue_relations,
    issue_statuses,
    issues,
    journal_details,
    journals,
    member_roles,
    members,
    messages,
    news,
    open_id_authentication_associations,
    open_id_authentication_nonces,
    projects,
    projects_trackers,
    queries,
    queries_roles,
    repositories,
    roles,
    roles_managed_roles,
    schema_migrations,
    settings,
    time_entries,
    tokens,
    trackers,
    user_preferences,
    users,
    versions,
    watchers,
    wiki_content_versions,
    wiki_contents,
    wiki_pages,
    wiki_redirects,
    wikis,
    workflows,
);
