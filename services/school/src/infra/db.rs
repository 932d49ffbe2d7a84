use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use campus_domain::user::UserRole;
use campus_school_schema::custom_users;

use crate::domain::repository::UserRepository;
use crate::domain::types::{ProfileChanges, SchoolUser};
use crate::error::SchoolError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<SchoolUser>, SchoolError> {
        let model = custom_users::Entity::find()
            .filter(custom_users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<SchoolUser>, SchoolError> {
        let model = custom_users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn update_profile(
        &self,
        id: i32,
        changes: &ProfileChanges,
    ) -> Result<bool, SchoolError> {
        let mut am = custom_users::ActiveModel {
            id: Set(id),
            first_name: Set(changes.first_name.clone()),
            last_name: Set(changes.last_name.clone()),
            ..Default::default()
        };
        if let Some(ref hash) = changes.password_hash {
            am.password = Set(hash.clone());
        }
        if let Some(ref path) = changes.profile_pic {
            am.profile_pic = Set(Some(path.clone()));
        }
        match am.update(&self.db).await {
            Ok(_) => Ok(true),
            Err(DbErr::RecordNotUpdated) => Ok(false),
            Err(e) => Err(anyhow::Error::new(e).context("update profile").into()),
        }
    }

    async fn count_by_role(&self, role: UserRole) -> Result<u64, SchoolError> {
        let count = custom_users::Entity::find()
            .filter(custom_users::Column::UserType.eq(role.as_u8() as i16))
            .count(&self.db)
            .await
            .context("count users by role")?;
        Ok(count)
    }
}

fn user_from_model(model: custom_users::Model) -> SchoolUser {
    SchoolUser {
        id: model.id,
        email: model.email,
        username: model.username,
        password_hash: model.password,
        first_name: model.first_name,
        last_name: model.last_name,
        role_code: model.user_type,
        profile_pic: model.profile_pic,
        date_joined: model.date_joined,
    }
}
