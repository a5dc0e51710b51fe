use crate::db::error::RepositoryError;
use crate::db::models::user::{NewUser, User};
use crate::db::schema::users;
use crate::db::{DbConnection, DbPool};
use diesel::prelude::*;

pub struct UserRepository {
    pool: DbPool,
}

impl UserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> Result<DbConnection, RepositoryError> {
        self.pool.get().map_err(Into::into)
    }

    pub fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        let mut conn = self.conn()?;

        users::table
            .filter(users::username.eq(username))
            .first::<User>(&mut conn)
            .optional()
            .map_err(Into::into)
    }

    pub fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let mut conn = self.conn()?;

        users::table
            .filter(users::email.eq(email))
            .first::<User>(&mut conn)
            .optional()
            .map_err(Into::into)
    }

    /// Créer un nouvel utilisateur
    pub fn create(&self, new_user: &NewUser) -> Result<User, RepositoryError> {
        let mut conn = self.conn()?;

        diesel::insert_into(users::table)
            .values(new_user)
            .get_result::<User>(&mut conn)
            .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::create_pool;

    fn test_repository() -> UserRepository {
        let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        UserRepository::new(create_pool(&database_url).expect("pool"))
    }

    fn test_user(suffix: &str) -> NewUser {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("clock")
            .as_nanos();

        NewUser {
            firstname: "Test".to_string(),
            lastname: "Operator".to_string(),
            username: format!("testuser_{suffix}_{nanos}"),
            email: format!("test_{suffix}_{nanos}@example.com"),
            password_hash: "test_hash".to_string(),
        }
    }

    fn cleanup(repository: &UserRepository, username: &str) {
        let mut conn = repository.conn().expect("conn");
        let _ = diesel::delete(users::table.filter(users::username.eq(username))).execute(&mut conn);
    }

    #[test]
    #[ignore = "requires a provisioned PostgreSQL (set DATABASE_URL)"]
    fn create_then_find_by_username() {
        let repository = test_repository();
        let new_user = test_user("create");

        let created = repository.create(&new_user).expect("should create user");
        assert_eq!(created.username, new_user.username);
        assert_eq!(created.email, new_user.email);

        let found = repository
            .find_by_username(&new_user.username)
            .expect("query should succeed");
        assert_eq!(found.expect("user should exist").id, created.id);

        cleanup(&repository, &new_user.username);
    }

    #[test]
    #[ignore = "requires a provisioned PostgreSQL (set DATABASE_URL)"]
    fn find_by_username_returns_none_for_unknown_user() {
        let repository = test_repository();

        let found = repository
            .find_by_username("nonexistent_user_12345")
            .expect("query should succeed even if user not found");

        assert!(found.is_none());
    }

    #[test]
    #[ignore = "requires a provisioned PostgreSQL (set DATABASE_URL)"]
    fn create_duplicate_username_fails() {
        let repository = test_repository();
        let first = test_user("duplicate");
        let mut second = first.clone();
        second.email = format!("other_{}", first.email);

        let created = repository.create(&first).expect("first insert");

        let result = repository.create(&second);
        assert!(
            matches!(result, Err(RepositoryError::UniqueViolation(_))),
            "should fail on the username unique constraint"
        );

        cleanup(&repository, &created.username);
    }
}
