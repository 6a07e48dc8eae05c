use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Estado de un número dentro del ciclo de venta.
/// La existencia de algún número `vendido` bloquea reducir el rango
/// y eliminar el sorteo.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(Some(20))")]
#[serde(rename_all = "snake_case")]
pub enum EstadoNumero {
    #[sea_orm(string_value = "reservado")]
    Reservado,
    #[sea_orm(string_value = "vendido")]
    Vendido,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "numeros")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub id_sorteo: i64,
    /// Número del boleto, en [1, rango_numeros] del sorteo
    pub numero: i32,
    pub estado: EstadoNumero,
    pub id_cliente: Option<i64>,
    pub id_pago: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
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
