use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// Configuración de tiempos de un sorteo:
/// - tiempo_limite_reserva: minutos que dura una reserva de número
/// - tiempo_recordatorio_pago: minutos antes de recordar el pago
/// - es_global: fila compartida sembrada por la migración inicial
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "configuraciones")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub tiempo_limite_reserva: i32,
    pub tiempo_recordatorio_pago: i32,
    pub es_global: bool,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::sorteos::Entity")]
    Sorteos,
}

impl Related<super::sorteos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sorteos.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
