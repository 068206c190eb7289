use async_trait::async_trait;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::user::models::authorities;
use crate::domain::user::models::parse_authorities;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::Uid;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

const UID_UNIQUE_CONSTRAINT: &str = "p_user_uid_key";

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    uid: String,
    password: String,
    name: String,
    roles: Vec<String>,
}

impl TryFrom<UserRow> for User {
    type Error = UserError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId(row.id),
            uid: Uid::new(row.uid)?,
            password_hash: row.password,
            name: row.name,
            roles: parse_authorities(&row.roles)?,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn save(&self, user: NewUser) -> Result<User, UserError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO p_user (uid, password, name, roles)
            VALUES ($1, $2, $3, $4)
            RETURNING id, uid, password, name, roles
            "#,
        )
        .bind(user.uid.as_str())
        .bind(&user.password_hash)
        .bind(&user.name)
        .bind(authorities(&user.roles))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() && db_err.constraint() == Some(UID_UNIQUE_CONSTRAINT)
                {
                    return UserError::UidAlreadyExists(user.uid.to_string());
                }
            }
            UserError::DatabaseError(e.to_string())
        })?;

        row.try_into()
    }

    async fn find_by_uid(&self, uid: &Uid) -> Result<Option<User>, UserError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, uid, password, name, roles
            FROM p_user
            WHERE uid = $1
            "#,
        )
        .bind(uid.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        row.map(User::try_from).transpose()
    }
}
