//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::{NewUser, User};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub username: String,
    pub name: String,
    pub email: String,
    pub contact_no: String,
    pub password_hash: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for User {
    fn from(model: Model) -> Self {
        User {
            id: model.id,
            username: model.username,
            name: model.name,
            email: model.email,
            contact_no: model.contact_no,
            password_hash: model.password_hash,
        }
    }
}

/// Insert form: the id is left for the database to assign
impl From<NewUser> for ActiveModel {
    fn from(user: NewUser) -> Self {
        ActiveModel {
            username: Set(user.username),
            name: Set(user.name),
            email: Set(user.email),
            contact_no: Set(user.contact_no),
            password_hash: Set(user.password_hash),
            ..Default::default()
        }
    }
}

/// Update form: the username is never rewritten
impl From<User> for ActiveModel {
    fn from(user: User) -> Self {
        ActiveModel {
            id: sea_orm::Unchanged(user.id),
            name: Set(user.name),
            email: Set(user.email),
            contact_no: Set(user.contact_no),
            password_hash: Set(user.password_hash),
            ..Default::default()
        }
    }
}
