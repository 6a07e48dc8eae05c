use sea_orm::entity::prelude::*;

/// Tabla de unión sorteo↔organizador. En una actualización las filas
/// se reemplazan por completo, nunca se mezclan.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "sorteos_organizadores")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub id_sorteo: i64,
    pub id_organizador: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::sorteos::Entity",
        from = "Column::IdSorteo",
        to = "super::sorteos::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Sorteo,
    #[sea_orm(
        belongs_to = "super::organizadores::Entity",
        from = "Column::IdOrganizador",
        to = "super::organizadores::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Organizador,
}

impl Related<super::sorteos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sorteo.def()
    }
}

impl Related<super::organizadores::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Organizador.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
