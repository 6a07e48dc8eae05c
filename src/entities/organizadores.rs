use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// Organizador: envuelve una cuenta de usuario registrada.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "organizadores")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub id_usuario: i64,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::usuarios::Entity",
        from = "Column::IdUsuario",
        to = "super::usuarios::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Usuario,
    #[sea_orm(has_many = "super::sorteos_organizadores::Entity")]
    SorteosOrganizadores,
}

impl Related<super::usuarios::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Usuario.def()
    }
}

impl Related<super::sorteos_organizadores::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SorteosOrganizadores.def()
    }
}

// muchos-a-muchos con sorteos a través de la tabla de unión
impl Related<super::sorteos::Entity> for Entity {
    fn to() -> RelationDef {
        super::sorteos_organizadores::Relation::Sorteo.def()
    }

    fn via() -> Option<RelationDef> {
        Some(
            super::sorteos_organizadores::Relation::Organizador
                .def()
                .rev(),
        )
    }
}

impl ActiveModelBehavior for ActiveModel {}
