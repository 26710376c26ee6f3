// Round trips through the typed records and relationship lookups

use chrono::NaiveDate;
use redmine_schema::db::enums::{CustomFieldType, EnumerationKind, FieldFormat, VersionSharing};
use redmine_schema::db::models::*;
use redmine_schema::db::repositories::*;

use crate::common::{
    self, new_enumeration, new_role, new_user, now, seed_issue, seed_issue_catalog, seed_project,
    seed_user,
};

#[test]
fn nullable_flags_keep_their_null() {
    let mut db = test_db!();
    let conn = &mut db.conn;
    let role = RoleRepo::insert(conn, &new_role("Developer", 1)).unwrap();
    assert_eq!(role.assignable, None);

    let fetched = RoleRepo::get(conn, role.id).unwrap();
    assert_eq!(fetched, role);
    assert!(!fetched.is_builtin());
}

#[test]
fn member_roles_and_managed_roles() {
    let mut db = test_db!();
    let conn = &mut db.conn;
    let user = seed_user(conn, "jsmith");
    let project = seed_project(conn, "Core", None);
    let manager = RoleRepo::insert(conn, &new_role("Manager", 1)).unwrap();
    let developer = RoleRepo::insert(conn, &new_role("Developer", 2)).unwrap();
    let reporter = RoleRepo::insert(conn, &new_role("Reporter", 3)).unwrap();

    for managed in [&reporter, &developer] {
        RoleManagedRoleRepo::insert(
            conn,
            &NewRoleManagedRole {
                role_id: manager.id,
                managed_role_id: managed.id,
            },
        )
        .unwrap();
    }
    let managed: Vec<String> = RoleRepo::managed_by(conn, manager.id)
        .unwrap()
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(managed, vec!["Developer".to_string(), "Reporter".to_string()]);

    let member = MemberRepo::insert(
        conn,
        &NewMember {
            user_id: user.id,
            project_id: project.id,
            created_on: Some(now()),
            mail_notification: false,
        },
    )
    .unwrap();
    let direct = MemberRoleRepo::insert(
        conn,
        &NewMemberRole {
            member_id: member.id,
            role_id: developer.id,
            inherited_from: None,
        },
    )
    .unwrap();
    // `inherited_from` is a plain id, not checked against member_roles.
    let inherited = MemberRoleRepo::insert(
        conn,
        &NewMemberRole {
            member_id: member.id,
            role_id: reporter.id,
            inherited_from: Some(31337),
        },
    )
    .unwrap();
    assert!(!direct.is_inherited());
    assert!(inherited.is_inherited());
    assert_eq!(MemberRoleRepo::roles_of_member(conn, member.id).unwrap().len(), 2);
    assert_eq!(
        MemberRepo::find_by_user_and_project(conn, user.id, project.id)
            .unwrap()
            .map(|m| m.id),
        Some(member.id)
    );
}

#[test]
fn groups_are_users_with_members() {
    let mut db = test_db!();
    let conn = &mut db.conn;
    let alice = seed_user(conn, "alice");
    let mut group = new_user("developers");
    group.type_ = Some("Group".to_string());
    let group = UserRepo::insert(conn, &group).unwrap();
    assert!(group.is_group());

    GroupUserRepo::insert(
        conn,
        &NewGroupUser {
            group_id: group.id,
            user_id: alice.id,
        },
    )
    .unwrap();

    assert_eq!(UserRepo::groups_of(conn, alice.id).unwrap(), vec![group.clone()]);
    assert_eq!(UserRepo::members_of_group(conn, group.id).unwrap(), vec![alice.clone()]);
    assert_eq!(
        UserRepo::find_by_login(conn, "alice").unwrap().map(|u| u.id),
        Some(alice.id)
    );
}

#[test]
fn version_sharing_round_trips() {
    let mut db = test_db!();
    let conn = &mut db.conn;
    let project = seed_project(conn, "Core", None);
    let version = VersionRepo::insert(
        conn,
        &NewVersion {
            project_id: project.id,
            name: "1.0".to_string(),
            description: None,
            effective_date: NaiveDate::from_ymd_opt(2024, 9, 1),
            created_on: Some(now()),
            updated_on: Some(now()),
            wiki_page_title: None,
            status: Some("open".to_string()),
            sharing: VersionSharing::Descendants,
        },
    )
    .unwrap();
    let listed = VersionRepo::list_by_project(conn, project.id).unwrap();
    assert_eq!(listed, vec![version]);
    assert_eq!(listed[0].sharing, VersionSharing::Descendants);
}

#[test]
fn wiki_history_stores_bytes() {
    let mut db = test_db!();
    let conn = &mut db.conn;
    let user = seed_user(conn, "jsmith");
    let project = seed_project(conn, "Core", None);
    let wiki = WikiRepo::insert(
        conn,
        &NewWiki {
            project_id: project.id,
            start_page: "Wiki".to_string(),
            status: 1,
        },
    )
    .unwrap();
    let page = WikiPageRepo::insert(
        conn,
        &NewWikiPage {
            wiki_id: wiki.id,
            title: "Wiki".to_string(),
            created_on: now(),
            protected: false,
            parent_id: None,
        },
    )
    .unwrap();
    let content = WikiContentRepo::insert(
        conn,
        &NewWikiContent {
            page_id: page.id,
            author_id: Some(user.id),
            text: Some("h1. Wiki\n\nÜber alles".to_string()),
            comments: None,
            updated_on: now(),
            version: 1,
        },
    )
    .unwrap();

    WikiContentVersionRepo::insert(conn, &NewWikiContentVersion::snapshot(&content)).unwrap();
    let stored = WikiContentVersionRepo::find_version(conn, content.id, 1)
        .unwrap()
        .unwrap();
    assert!(!stored.is_compressed());
    assert_eq!(
        stored.data.as_deref(),
        Some("h1. Wiki\n\nÜber alles".as_bytes())
    );
    assert_eq!(WikiContentVersionRepo::history(conn, content.id).unwrap().len(), 1);
    assert_eq!(WikiRepo::find_by_project(conn, project.id).unwrap(), Some(wiki));
    assert_eq!(WikiContentRepo::for_page(conn, page.id).unwrap(), Some(content));
}

#[test]
fn changeset_graph_and_issue_links() {
    let mut db = test_db!();
    let conn = &mut db.conn;
    let user = seed_user(conn, "jsmith");
    let project = seed_project(conn, "Core", None);
    let catalog = seed_issue_catalog(conn);
    let issue = seed_issue(conn, &catalog, project.id, user.id, "Crash", None);
    let repo = common::seed_repository(conn, project.id);

    let base = ChangesetRepo::insert(conn, &NewChangeset::new(repo.id, "a1", now())).unwrap();
    let fix = ChangesetRepo::insert(conn, &NewChangeset::new(repo.id, "b2", now())).unwrap();
    ChangesetParentRepo::insert(
        conn,
        &NewChangesetParent {
            changeset_id: fix.id,
            parent_id: base.id,
        },
    )
    .unwrap();
    ChangesetIssueRepo::insert(
        conn,
        &NewChangesetIssue {
            changeset_id: fix.id,
            issue_id: issue.id,
        },
    )
    .unwrap();
    assert!(ChangesetIssueRepo::insert(
        conn,
        &NewChangesetIssue {
            changeset_id: fix.id,
            issue_id: issue.id,
        },
    )
    .unwrap_err()
    .is_conflict());
    ChangeRepo::insert(
        conn,
        &NewChange {
            changeset_id: fix.id,
            action: "M".to_string(),
            path: "/src/main.c".to_string(),
            from_path: None,
            from_revision: None,
            revision: None,
            branch: Some("main".to_string()),
        },
    )
    .unwrap();

    assert_eq!(ChangesetRepo::parents(conn, fix.id).unwrap(), vec![base.clone()]);
    assert_eq!(ChangesetRepo::children(conn, base.id).unwrap(), vec![fix.clone()]);
    assert_eq!(ChangesetRepo::issues(conn, fix.id).unwrap(), vec![issue.clone()]);
    assert_eq!(ChangesetRepo::for_issue(conn, issue.id).unwrap(), vec![fix.clone()]);
    assert_eq!(ChangeRepo::list_by_changeset(conn, fix.id).unwrap().len(), 1);
    assert_eq!(
        RepositoryRepo::default_for_project(conn, project.id).unwrap().map(|r| r.id),
        Some(repo.id)
    );
}

#[test]
fn time_entries_group_by_reporting_week() {
    let mut db = test_db!();
    let conn = &mut db.conn;
    let user = seed_user(conn, "jsmith");
    let project = seed_project(conn, "Core", None);
    let catalog = seed_issue_catalog(conn);
    let issue = seed_issue(conn, &catalog, project.id, user.id, "Crash", None);
    let activity = EnumerationRepo::insert(
        conn,
        &new_enumeration("Development", EnumerationKind::TimeEntryActivity),
    )
    .unwrap();

    let day = |d: u32| NaiveDate::from_ymd_opt(2024, 5, d).unwrap();
    for (spent, hours) in [(day(13), 2.5), (day(15), 1.0), (day(21), 4.0)] {
        TimeEntryRepo::insert(
            conn,
            &NewTimeEntry::new(project.id, user.id, activity.id, hours, spent, now())
                .for_issue(issue.id),
        )
        .unwrap();
    }

    let week = TimeEntryRepo::list_by_period(conn, ReportingPeriod::of(day(14))).unwrap();
    assert_eq!(week.len(), 2);
    assert_eq!(week[0].spent_on, day(13));
    assert_eq!(week[0].tweek, 20);
    assert_eq!(TimeEntryRepo::total_hours_for_issue(conn, issue.id).unwrap(), 7.5);
    assert_eq!(TimeEntryRepo::list_by_issue(conn, issue.id).unwrap().len(), 3);
    assert_eq!(
        EnumerationRepo::list_by_kind(conn, EnumerationKind::TimeEntryActivity)
            .unwrap()
            .len(),
        1
    );
}

#[test]
fn issue_with_every_field_round_trips() {
    let mut db = test_db!();
    let conn = &mut db.conn;
    let author = seed_user(conn, "author");
    let assignee = seed_user(conn, "assignee");
    let project = seed_project(conn, "Core", None);
    let catalog = seed_issue_catalog(conn);
    let parent = seed_issue(conn, &catalog, project.id, author.id, "Parent", None);
    let category = IssueCategoryRepo::insert(
        conn,
        &NewIssueCategory {
            project_id: project.id,
            name: "Backend".to_string(),
            assigned_to_id: Some(assignee.id),
        },
    )
    .unwrap();
    let version = VersionRepo::insert(
        conn,
        &NewVersion {
            project_id: project.id,
            name: "2.0".to_string(),
            description: Some("next".to_string()),
            effective_date: None,
            created_on: None,
            updated_on: None,
            wiki_page_title: None,
            status: None,
            sharing: VersionSharing::None,
        },
    )
    .unwrap();

    let mut full = common::new_issue(&catalog, project.id, author.id, "Full", Some(parent.id));
    full.description = Some("All columns set".to_string());
    full.due_date = NaiveDate::from_ymd_opt(2024, 6, 30);
    full.category_id = Some(category.id);
    full.assigned_to_id = Some(assignee.id);
    full.fixed_version_id = Some(version.id);
    full.lock_version = 3;
    full.start_date = NaiveDate::from_ymd_opt(2024, 6, 1);
    full.done_ratio = 40;
    full.estimated_hours = Some(12.5);
    full.root_id = Some(parent.id);
    full.lft = Some(2);
    full.rgt = Some(3);
    full.is_private = true;
    full.closed_on = Some(now());

    let stored = IssueRepo::insert(conn, &full).unwrap();
    let fetched = IssueRepo::get(conn, stored.id).unwrap();
    assert_eq!(fetched, stored);
    assert_eq!(fetched.description.as_deref(), Some("All columns set"));
    assert_eq!(fetched.category_id, Some(category.id));
    assert_eq!(fetched.fixed_version_id, Some(version.id));
    assert_eq!(fetched.estimated_hours, Some(12.5));
    assert_eq!(fetched.closed_on, Some(now()));
    assert!(fetched.is_private);
    assert_eq!(IssueRepo::list_by_assignee(conn, assignee.id).unwrap(), vec![fetched]);

    // Left unset, read back as unset.
    let sparse = IssueRepo::get(conn, parent.id).unwrap();
    assert_eq!(sparse.description, None);
    assert_eq!(sparse.estimated_hours, None);
    assert_eq!(sparse.closed_on, None);
}

#[test]
fn workflow_transitions_and_checklists() {
    let mut db = test_db!();
    let conn = &mut db.conn;
    let user = seed_user(conn, "jsmith");
    let project = seed_project(conn, "Core", None);
    let catalog = seed_issue_catalog(conn);
    let issue = seed_issue(conn, &catalog, project.id, user.id, "Crash", None);
    let role = RoleRepo::insert(conn, &new_role("Developer", 1)).unwrap();
    let resolved = IssueStatusRepo::insert(
        conn,
        &NewIssueStatus {
            name: "Resolved".to_string(),
            is_closed: true,
            position: Some(2),
            default_done_ratio: Some(100),
        },
    )
    .unwrap();

    let rule = |type_: &str, field: Option<&str>| NewWorkflow {
        tracker_id: catalog.tracker.id,
        old_status_id: catalog.status.id,
        new_status_id: resolved.id,
        role_id: role.id,
        assignee: false,
        author: false,
        type_: Some(type_.to_string()),
        field_name: field.map(str::to_string),
        rule: field.map(|_| "readonly".to_string()),
    };
    WorkflowRepo::insert(conn, &rule(Workflow::TYPE_TRANSITION, None)).unwrap();
    WorkflowRepo::insert(conn, &rule(Workflow::TYPE_PERMISSION, Some("due_date"))).unwrap();

    let transitions =
        WorkflowRepo::transitions(conn, catalog.tracker.id, role.id, catalog.status.id).unwrap();
    assert_eq!(transitions.len(), 1);
    assert!(transitions[0].is_transition());
    assert_eq!(transitions[0].new_status_id, resolved.id);

    let statuses: Vec<String> = IssueStatusRepo::list_ordered(conn)
        .unwrap()
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(statuses, vec!["New".to_string(), "Resolved".to_string()]);

    ChecklistRepo::insert(conn, &NewChecklist::item(issue.id, "second", 2)).unwrap();
    ChecklistRepo::insert(conn, &NewChecklist::item(issue.id, "first", 1)).unwrap();
    let items: Vec<Option<String>> = ChecklistRepo::list_by_issue(conn, issue.id)
        .unwrap()
        .into_iter()
        .map(|c| c.subject)
        .collect();
    assert_eq!(items, vec![Some("first".to_string()), Some("second".to_string())]);
}

#[test]
fn auth_sources_and_account_records_round_trip() {
    let mut db = test_db!();
    let conn = &mut db.conn;
    let ldap = AuthSourceRepo::insert(
        conn,
        &NewAuthSource {
            type_: "AuthSourceLdap".to_string(),
            name: "Corporate LDAP".to_string(),
            host: Some("ldap.example.org".to_string()),
            port: Some(636),
            account: Some("cn=redmine,dc=example,dc=org".to_string()),
            account_password: Some("secret".to_string()),
            base_dn: Some("dc=example,dc=org".to_string()),
            attr_login: Some("uid".to_string()),
            attr_firstname: Some("givenName".to_string()),
            attr_lastname: Some("sn".to_string()),
            attr_mail: Some("mail".to_string()),
            onthefly_register: true,
            tls: true,
            filter: Some("(objectClass=person)".to_string()),
            timeout: None,
        },
    )
    .unwrap();
    assert_eq!(AuthSourceRepo::get(conn, ldap.id).unwrap(), ldap);
    assert_eq!(ldap.port, Some(636));
    assert_eq!(ldap.timeout, None);

    let mut remote = new_user("ldapuser");
    remote.auth_source_id = Some(ldap.id);
    let remote = UserRepo::insert(conn, &remote).unwrap();
    assert_eq!(remote.auth_source_id, Some(ldap.id));

    assert_eq!(UserPreferenceRepo::for_user(conn, remote.id).unwrap(), None);
    let pref = UserPreferenceRepo::insert(
        conn,
        &NewUserPreference {
            user_id: remote.id,
            others: Some("---\n:comments_sorting: desc\n".to_string()),
            hide_mail: None,
            time_zone: Some("Europe/Paris".to_string()),
        },
    )
    .unwrap();
    assert_eq!(UserPreferenceRepo::for_user(conn, remote.id).unwrap(), Some(pref.clone()));
    assert_eq!(pref.hide_mail, None);

    let association = OpenIdAssociationRepo::insert(
        conn,
        &NewOpenIdAuthenticationAssociation {
            issued: Some(1_716_199_200),
            lifetime: Some(1_209_600),
            handle: Some("{HMAC-SHA1}{664b0f20}".to_string()),
            assoc_type: Some("HMAC-SHA1".to_string()),
            server_url: Some(vec![0, 255, 10]),
            secret: Some(vec![0xde, 0xad, 0x00, 0xbe, 0xef]),
        },
    )
    .unwrap();
    let stored = OpenIdAssociationRepo::get(conn, association.id).unwrap();
    assert_eq!(stored.server_url, Some(vec![0, 255, 10]));
    assert_eq!(stored.secret, Some(vec![0xde, 0xad, 0x00, 0xbe, 0xef]));
    assert_eq!(stored, association);

    let nonce = OpenIdNonceRepo::insert(
        conn,
        &NewOpenIdAuthenticationNonce {
            timestamp: 1_716_199_200,
            server_url: None,
            salt: "a1b2".to_string(),
        },
    )
    .unwrap();
    assert_eq!(OpenIdNonceRepo::list(conn).unwrap(), vec![nonce]);
}

#[test]
fn settings_and_imports_round_trip() {
    let mut db = test_db!();
    let conn = &mut db.conn;
    let user = seed_user(conn, "jsmith");

    let setting = SettingRepo::insert(
        conn,
        &NewSetting {
            name: "app_title".to_string(),
            value: Some("Tracker".to_string()),
            updated_on: Some(now()),
        },
    )
    .unwrap();
    SettingRepo::insert(
        conn,
        &NewSetting {
            name: "welcome_text".to_string(),
            value: None,
            updated_on: None,
        },
    )
    .unwrap();
    assert_eq!(SettingRepo::find_by_name(conn, "app_title").unwrap(), Some(setting));
    assert_eq!(
        SettingRepo::find_by_name(conn, "welcome_text").unwrap().unwrap().value,
        None
    );
    assert_eq!(SettingRepo::find_by_name(conn, "host_name").unwrap(), None);

    let import = ImportRepo::insert(
        conn,
        &NewImport {
            type_: Some("IssueImport".to_string()),
            user_id: user.id,
            filename: Some("a1b2c3".to_string()),
            settings: Some("---\nseparator: \";\"\n".to_string()),
            total_items: Some(2),
            finished: false,
            created_at: now(),
            updated_at: now(),
        },
    )
    .unwrap();
    assert_eq!(ImportRepo::get(conn, import.id).unwrap(), import);

    let results = [(2, None, Some("Subject cannot be blank")), (1, Some(41), None)];
    for (position, obj_id, message) in results {
        ImportItemRepo::insert(
            conn,
            &NewImportItem {
                import_id: import.id,
                position,
                obj_id,
                message: message.map(str::to_string),
            },
        )
        .unwrap();
    }
    let items = ImportItemRepo::list_by_import(conn, import.id).unwrap();
    let rows: Vec<(i32, Option<i32>, Option<String>)> = items
        .into_iter()
        .map(|item| (item.position, item.obj_id, item.message))
        .collect();
    assert_eq!(
        rows,
        vec![
            (1, Some(41), None),
            (2, None, Some("Subject cannot be blank".to_string())),
        ]
    );
}

#[test]
fn project_news_documents_and_queries_round_trip() {
    let mut db = test_db!();
    let conn = &mut db.conn;
    let author = seed_user(conn, "jsmith");
    let project = seed_project(conn, "Core", None);

    for module in ["wiki", "issue_tracking", "news"] {
        EnabledModuleRepo::insert(
            conn,
            &NewEnabledModule {
                project_id: Some(project.id),
                name: module.to_string(),
            },
        )
        .unwrap();
    }
    EnabledModuleRepo::insert(
        conn,
        &NewEnabledModule {
            project_id: None,
            name: "documents".to_string(),
        },
    )
    .unwrap();
    assert_eq!(
        EnabledModuleRepo::names_for_project(conn, project.id).unwrap(),
        vec!["issue_tracking", "news", "wiki"]
    );

    let news = NewsRepo::insert(
        conn,
        &NewNews {
            project_id: Some(project.id),
            title: "Release 2.0".to_string(),
            summary: Some("Out now".to_string()),
            description: Some("Full changelog".to_string()),
            author_id: author.id,
            created_on: Some(now()),
            comments_count: 0,
        },
    )
    .unwrap();
    assert_eq!(NewsRepo::list_by_project(conn, project.id).unwrap(), vec![news.clone()]);
    assert_eq!(NewsRepo::get(conn, news.id).unwrap().summary.as_deref(), Some("Out now"));

    let category = IssueCategoryRepo::insert(
        conn,
        &NewIssueCategory {
            project_id: project.id,
            name: "Manuals".to_string(),
            assigned_to_id: None,
        },
    )
    .unwrap();
    let document = DocumentRepo::insert(
        conn,
        &NewDocument {
            project_id: project.id,
            category_id: category.id,
            title: "Install guide".to_string(),
            description: None,
            created_on: Some(now()),
        },
    )
    .unwrap();
    assert_eq!(DocumentRepo::list_by_project(conn, project.id).unwrap(), vec![document]);

    let query = SavedQueryRepo::insert(
        conn,
        &NewSavedQuery {
            project_id: Some(project.id),
            name: "My open issues".to_string(),
            filters: Some("---\nstatus_id:\n  :operator: o\n".to_string()),
            user_id: author.id,
            column_names: Some("---\n- :subject\n".to_string()),
            sort_criteria: Some("---\n- - id\n  - desc\n".to_string()),
            group_by: Some("tracker".to_string()),
            type_: Some("IssueQuery".to_string()),
            visibility: Some(SavedQuery::VISIBILITY_ROLES),
            options: None,
        },
    )
    .unwrap();
    assert_eq!(SavedQueryRepo::list_by_project(conn, project.id).unwrap(), vec![query.clone()]);

    let role = RoleRepo::insert(conn, &new_role("Reporter", 1)).unwrap();
    let query_role = QueryRoleRepo::insert(
        conn,
        &NewQueryRole {
            query_id: query.id,
            role_id: role.id,
        },
    )
    .unwrap();
    assert_eq!(QueryRoleRepo::get(conn, query_role.id).unwrap(), query_role);
}

#[test]
fn wiki_redirects_round_trip() {
    let mut db = test_db!();
    let conn = &mut db.conn;
    let core = seed_project(conn, "Core", None);
    let docs = seed_project(conn, "Docs", None);
    let wiki = |project_id: i32| NewWiki {
        project_id,
        start_page: "Wiki".to_string(),
        status: 1,
    };
    let core_wiki = WikiRepo::insert(conn, &wiki(core.id)).unwrap();
    let docs_wiki = WikiRepo::insert(conn, &wiki(docs.id)).unwrap();

    let redirect = WikiRedirectRepo::insert(
        conn,
        &NewWikiRedirect {
            wiki_id: core_wiki.id,
            title: Some("Install".to_string()),
            redirects_to: Some("Installation_Guide".to_string()),
            created_on: now(),
            redirects_to_wiki_id: docs_wiki.id,
        },
    )
    .unwrap();
    assert_eq!(
        WikiRedirectRepo::find_by_title(conn, core_wiki.id, "Install").unwrap(),
        Some(redirect.clone())
    );
    assert_eq!(redirect.redirects_to_wiki_id, docs_wiki.id);
    assert_eq!(WikiRedirectRepo::find_by_title(conn, docs_wiki.id, "Install").unwrap(), None);
    assert!(WikiRepo::delete_by_id(conn, docs_wiki.id).unwrap_err().is_foreign_key_violation());
}

#[test]
fn custom_field_links_round_trip() {
    let mut db = test_db!();
    let conn = &mut db.conn;
    let project = seed_project(conn, "Core", None);
    let catalog = seed_issue_catalog(conn);
    let role = RoleRepo::insert(conn, &new_role("Developer", 1)).unwrap();

    let mut severity = NewCustomField::new(
        CustomFieldType::IssueCustomField,
        "Severity",
        FieldFormat::Enumeration,
    );
    severity.regexp = Some("^[a-z]+$".to_string());
    severity.min_length = Some(1);
    severity.max_length = Some(20);
    severity.is_required = true;
    severity.is_filter = true;
    severity.position = Some(1);
    severity.searchable = Some(false);
    severity.default_value = Some("minor".to_string());
    severity.editable = Some(true);
    severity.visible = false;
    severity.multiple = Some(false);
    severity.format_store = Some("---\nedit_tag_style: ''\n".to_string());
    severity.description = Some("Impact on users".to_string());
    let field = CustomFieldRepo::insert(conn, &severity).unwrap();
    assert_eq!(CustomFieldRepo::get(conn, field.id).unwrap(), field);
    assert_eq!(field.searchable, Some(false));
    assert_eq!(field.possible_values, None);

    for (position, name, active) in [(2, "major", true), (1, "minor", true), (3, "legacy", false)] {
        CustomFieldEnumerationRepo::insert(
            conn,
            &NewCustomFieldEnumeration {
                custom_field_id: field.id,
                name: name.to_string(),
                active,
                position,
            },
        )
        .unwrap();
    }
    let values: Vec<(String, bool)> = CustomFieldEnumerationRepo::list_by_field(conn, field.id)
        .unwrap()
        .into_iter()
        .map(|value| (value.name, value.active))
        .collect();
    assert_eq!(
        values,
        vec![
            ("minor".to_string(), true),
            ("major".to_string(), true),
            ("legacy".to_string(), false),
        ]
    );

    let by_project = CustomFieldProjectRepo::insert(
        conn,
        &NewCustomFieldProject {
            custom_field_id: field.id,
            project_id: project.id,
        },
    )
    .unwrap();
    let by_role = CustomFieldRoleRepo::insert(
        conn,
        &NewCustomFieldRole {
            custom_field_id: field.id,
            role_id: role.id,
        },
    )
    .unwrap();
    let by_tracker = CustomFieldTrackerRepo::insert(
        conn,
        &NewCustomFieldTracker {
            custom_field_id: field.id,
            tracker_id: catalog.tracker.id,
        },
    )
    .unwrap();
    assert_eq!(CustomFieldProjectRepo::list(conn).unwrap(), vec![by_project]);
    assert_eq!(CustomFieldRoleRepo::list(conn).unwrap(), vec![by_role]);
    assert_eq!(CustomFieldTrackerRepo::list(conn).unwrap(), vec![by_tracker]);
    assert_eq!(
        CustomFieldRepo::list_for_tracker(conn, catalog.tracker.id).unwrap(),
        vec![field.clone()]
    );

    assert!(CustomFieldRepo::delete_by_id(conn, field.id).unwrap_err().is_foreign_key_violation());
}
