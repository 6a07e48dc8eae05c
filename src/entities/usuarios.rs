use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "usuarios")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub nombre: String,
    /// Correo único; un organizador se resuelve por este campo
    pub email: String,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::organizadores::Entity")]
    Organizadores,
}

impl Related<super::organizadores::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Organizadores.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
