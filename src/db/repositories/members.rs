use diesel::prelude::*;

use crate::db::models::member::{
    Member, MemberRole, NewMember, NewMemberRole, NewRole, NewRoleManagedRole, Role,
    RoleManagedRole,
};
use crate::db::repositories::record_repo;
use crate::error::AppResult;

record_repo!(RoleRepo, roles, Role, NewRole);
record_repo!(RoleManagedRoleRepo, roles_managed_roles, RoleManagedRole, NewRoleManagedRole);
record_repo!(MemberRepo, members, Member, NewMember);
record_repo!(MemberRoleRepo, member_roles, MemberRole, NewMemberRole);

impl RoleRepo {
    /// The built-in role with the given code (non-member or anonymous).
    pub fn find_builtin(conn: &mut PgConnection, code: i32) -> AppResult<Option<Role>> {
        use crate::schema::roles::dsl::*;
        let role = roles
            .filter(builtin.eq(code))
            .order(id.asc())
            .select(Role::as_select())
            .first(conn)
            .optional()?;
        Ok(role)
    }

    /// Roles a member of `manager_role_id` may assign.
    pub fn managed_by(conn: &mut PgConnection, manager_role_id: i32) -> AppResult<Vec<Role>> {
        use crate::schema::{roles, roles_managed_roles};
        let rows = roles_managed_roles::table
            .inner_join(roles::table.on(roles::id.eq(roles_managed_roles::managed_role_id)))
            .filter(roles_managed_roles::role_id.eq(manager_role_id))
            .order(roles::position.asc())
            .select(Role::as_select())
            .load(conn)?;
        Ok(rows)
    }
}

impl MemberRepo {
    pub fn find_by_user_and_project(
        conn: &mut PgConnection,
        target_user_id: i32,
        target_project_id: i32,
    ) -> AppResult<Option<Member>> {
        use crate::schema::members::dsl::*;
        let member = members
            .filter(user_id.eq(target_user_id))
            .filter(project_id.eq(target_project_id))
            .select(Member::as_select())
            .first(conn)
            .optional()?;
        Ok(member)
    }

    pub fn list_by_project(conn: &mut PgConnection, target_project_id: i32) -> AppResult<Vec<Member>> {
        use crate::schema::members::dsl::*;
        let rows = members
            .filter(project_id.eq(target_project_id))
            .order(id.asc())
            .select(Member::as_select())
            .load(conn)?;
        Ok(rows)
    }

    pub fn list_by_user(conn: &mut PgConnection, target_user_id: i32) -> AppResult<Vec<Member>> {
        use crate::schema::members::dsl::*;
        let rows = members
            .filter(user_id.eq(target_user_id))
            .order(id.asc())
            .select(Member::as_select())
            .load(conn)?;
        Ok(rows)
    }
}

impl MemberRoleRepo {
    pub fn list_by_member(conn: &mut PgConnection, target_member_id: i32) -> AppResult<Vec<MemberRole>> {
        use crate::schema::member_roles::dsl::*;
        let rows = member_roles
            .filter(member_id.eq(target_member_id))
            .order(id.asc())
            .select(MemberRole::as_select())
            .load(conn)?;
        Ok(rows)
    }

    /// Roles held through a membership, direct and inherited alike.
    pub fn roles_of_member(conn: &mut PgConnection, target_member_id: i32) -> AppResult<Vec<Role>> {
        use crate::schema::{member_roles, roles};
        let rows = member_roles::table
            .inner_join(roles::table)
            .filter(member_roles::member_id.eq(target_member_id))
            .order(roles::position.asc())
            .then_order_by(roles::id.asc())
            .select(Role::as_select())
            .load(conn)?;
        Ok(rows)
    }
}
