use diesel::prelude::*;

use crate::db::models::user::{
    AuthSource, EmailAddress, GroupUser, NewAuthSource, NewEmailAddress, NewGroupUser,
    NewOpenIdAuthenticationAssociation, NewOpenIdAuthenticationNonce, NewToken, NewUser,
    NewUserPreference, OpenIdAuthenticationAssociation, OpenIdAuthenticationNonce, Token, User,
    UserPreference,
};
use crate::db::repositories::record_repo;
use crate::error::AppResult;

record_repo!(UserRepo, users, User, NewUser);
record_repo!(AuthSourceRepo, auth_sources, AuthSource, NewAuthSource);
record_repo!(EmailAddressRepo, email_addresses, EmailAddress, NewEmailAddress);
record_repo!(TokenRepo, tokens, Token, NewToken);
record_repo!(GroupUserRepo, groups_users, GroupUser, NewGroupUser);
record_repo!(UserPreferenceRepo, user_preferences, UserPreference, NewUserPreference);
record_repo!(
    OpenIdAssociationRepo,
    open_id_authentication_associations,
    OpenIdAuthenticationAssociation,
    NewOpenIdAuthenticationAssociation
);
record_repo!(
    OpenIdNonceRepo,
    open_id_authentication_nonces,
    OpenIdAuthenticationNonce,
    NewOpenIdAuthenticationNonce
);

impl UserRepo {
    pub fn find_by_login(conn: &mut PgConnection, target_login: &str) -> AppResult<Option<User>> {
        use crate::schema::users::dsl::*;
        let user = users
            .filter(login.eq(target_login))
            .select(User::as_select())
            .first(conn)
            .optional()?;
        Ok(user)
    }

    /// Groups the principal belongs to. Groups live in `users` too.
    pub fn groups_of(conn: &mut PgConnection, target_user_id: i32) -> AppResult<Vec<User>> {
        use crate::schema::{groups_users, users};
        let group_ids = groups_users::table
            .filter(groups_users::user_id.eq(target_user_id))
            .select(groups_users::group_id);
        let groups = users::table
            .filter(users::id.eq_any(group_ids))
            .order(users::id.asc())
            .select(User::as_select())
            .load(conn)?;
        Ok(groups)
    }

    pub fn members_of_group(conn: &mut PgConnection, target_group_id: i32) -> AppResult<Vec<User>> {
        use crate::schema::{groups_users, users};
        let user_ids = groups_users::table
            .filter(groups_users::group_id.eq(target_group_id))
            .select(groups_users::user_id);
        let members = users::table
            .filter(users::id.eq_any(user_ids))
            .order(users::id.asc())
            .select(User::as_select())
            .load(conn)?;
        Ok(members)
    }
}

impl EmailAddressRepo {
    pub fn find_by_address(
        conn: &mut PgConnection,
        target_address: &str,
    ) -> AppResult<Option<EmailAddress>> {
        use crate::schema::email_addresses::dsl::*;
        let found = email_addresses
            .filter(address.eq(target_address))
            .select(EmailAddress::as_select())
            .first(conn)
            .optional()?;
        Ok(found)
    }

    pub fn list_by_user(conn: &mut PgConnection, target_user_id: i32) -> AppResult<Vec<EmailAddress>> {
        use crate::schema::email_addresses::dsl::*;
        let rows = email_addresses
            .filter(user_id.eq(target_user_id))
            .order(id.asc())
            .select(EmailAddress::as_select())
            .load(conn)?;
        Ok(rows)
    }

    pub fn default_for_user(
        conn: &mut PgConnection,
        target_user_id: i32,
    ) -> AppResult<Option<EmailAddress>> {
        use crate::schema::email_addresses::dsl::*;
        let found = email_addresses
            .filter(user_id.eq(target_user_id))
            .filter(is_default.eq(true))
            .order(id.asc())
            .select(EmailAddress::as_select())
            .first(conn)
            .optional()?;
        Ok(found)
    }
}

impl TokenRepo {
    pub fn find_by_value(conn: &mut PgConnection, target_value: &str) -> AppResult<Option<Token>> {
        use crate::schema::tokens::dsl::*;
        let token = tokens
            .filter(value.eq(target_value))
            .select(Token::as_select())
            .first(conn)
            .optional()?;
        Ok(token)
    }
}

impl UserPreferenceRepo {
    pub fn for_user(
        conn: &mut PgConnection,
        target_user_id: i32,
    ) -> AppResult<Option<UserPreference>> {
        use crate::schema::user_preferences::dsl::*;
        let pref = user_preferences
            .filter(user_id.eq(target_user_id))
            .select(UserPreference::as_select())
            .first(conn)
            .optional()?;
        Ok(pref)
    }
}
