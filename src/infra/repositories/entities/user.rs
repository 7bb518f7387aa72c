//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::User;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub surname: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for User {
    fn from(model: Model) -> Self {
        User {
            id: model.id,
            name: model.name,
            surname: model.surname,
            email: model.email,
            password: model.password,
        }
    }
}

/// Convert domain entity to a fully-set active model
impl From<User> for ActiveModel {
    fn from(user: User) -> Self {
        use sea_orm::Set;

        ActiveModel {
            id: Set(user.id),
            name: Set(user.name),
            surname: Set(user.surname),
            email: Set(user.email),
            password: Set(user.password),
        }
    }
}
