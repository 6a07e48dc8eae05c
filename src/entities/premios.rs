use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "premios")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub titulo: String,
    pub url_imagen: String,
    pub id_sorteo: i64,
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
}

impl Related<super::sorteos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sorteo.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
