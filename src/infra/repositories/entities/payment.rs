//! Payment entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Payment;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "payments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub order_id: Uuid,
    pub amount: f64,
    pub delivery_status: String,
    pub payment_method: String,
    pub status: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderId",
        to = "super::order::Column::Id"
    )]
    Order,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Payment {
    fn from(model: Model) -> Self {
        Payment {
            id: model.id,
            user_id: model.user_id,
            name: model.name,
            order_id: model.order_id,
            amount: model.amount,
            delivery_status: model.delivery_status,
            payment_method: model.payment_method,
            status: model.status,
            created_at: model.created_at,
        }
    }
}
