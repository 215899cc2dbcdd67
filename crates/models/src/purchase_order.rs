use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{dates, errors, organization, vendor};

pub const STATUSES: [&str; 5] = ["draft", "submitted", "approved", "received", "cancelled"];

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "purchase_order")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub organization_id: Uuid,
    pub vendor_id: Uuid,
    pub title: String,
    pub status: String,
    pub line_items: Json,
    pub shipping: Option<Json>,
    pub cost_breakdown: Option<Json>,
    pub due_date: Option<DateTimeWithTimeZone>,
    pub notes: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Organization,
    Vendor,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Organization => Entity::belongs_to(organization::Entity)
                .from(Column::OrganizationId)
                .to(organization::Column::Id)
                .into(),
            Relation::Vendor => Entity::belongs_to(vendor::Entity)
                .from(Column::VendorId)
                .to(vendor::Column::Id)
                .into(),
        }
    }
}

impl Related<vendor::Entity> for Entity {
    fn to() -> RelationDef { Relation::Vendor.def() }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, Validate)]
pub struct ShippingContact {
    #[validate(length(max = 128))]
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(max = 32))]
    pub phone: Option<String>,
    #[validate(length(max = 512))]
    pub address: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, Validate)]
pub struct CostBreakdown {
    #[validate(range(min = 0.0))]
    pub subtotal: Option<f64>,
    #[validate(range(min = 0.0))]
    pub tax: Option<f64>,
    #[validate(range(min = 0.0))]
    pub shipping: Option<f64>,
    #[validate(range(min = 0.0))]
    pub other: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, Validate)]
pub struct LineItem {
    pub part_id: Option<Uuid>,
    #[validate(length(min = 1, max = 512))]
    pub description: String,
    #[validate(range(min = 1))]
    pub quantity: i32,
    #[validate(range(min = 0.0))]
    pub unit_cost: f64,
}

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
pub struct CreatePurchaseOrder {
    pub organization_id: Uuid,
    pub vendor_id: Uuid,
    #[validate(length(min = 1, max = 256))]
    pub title: String,
    pub status: Option<String>,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
    pub shipping: Option<ShippingContact>,
    pub cost_breakdown: Option<CostBreakdown>,
    pub due_date: Option<String>,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, Validate)]
pub struct UpdatePurchaseOrder {
    pub vendor_id: Option<Uuid>,
    #[validate(length(min = 1, max = 256))]
    pub title: Option<String>,
    pub status: Option<String>,
    pub line_items: Option<Vec<LineItem>>,
    pub shipping: Option<ShippingContact>,
    pub cost_breakdown: Option<CostBreakdown>,
    pub due_date: Option<String>,
    pub notes: Option<String>,
}

pub fn validate_status(status: &str) -> Result<String, errors::ModelError> {
    let lower = status.to_ascii_lowercase();
    if !STATUSES.contains(&lower.as_str()) {
        return Err(errors::ModelError::Validation(format!("status must be one of {}", STATUSES.join(", "))));
    }
    Ok(lower)
}

fn to_json<T: Serialize + Validate>(value: &T) -> Result<Json, errors::ModelError> {
    value.validate().map_err(|e| errors::ModelError::Validation(e.to_string()))?;
    serde_json::to_value(value).map_err(|e| errors::ModelError::Validation(e.to_string()))
}

fn line_items_json(items: &[LineItem]) -> Result<Json, errors::ModelError> {
    for item in items {
        item.validate().map_err(|e| errors::ModelError::Validation(e.to_string()))?;
    }
    serde_json::to_value(items).map_err(|e| errors::ModelError::Validation(e.to_string()))
}

impl CreatePurchaseOrder {
    pub fn into_active(self, id: Uuid, now: DateTimeWithTimeZone) -> Result<ActiveModel, errors::ModelError> {
        let status = validate_status(self.status.as_deref().unwrap_or("draft"))?;
        let shipping = self.shipping.as_ref().map(to_json).transpose()?;
        let cost_breakdown = self.cost_breakdown.as_ref().map(to_json).transpose()?;
        Ok(ActiveModel {
            id: Set(id),
            organization_id: Set(self.organization_id),
            vendor_id: Set(self.vendor_id),
            title: Set(self.title),
            status: Set(status),
            line_items: Set(line_items_json(&self.line_items)?),
            shipping: Set(shipping),
            cost_breakdown: Set(cost_breakdown),
            due_date: Set(dates::parse_optional(self.due_date.as_deref())?),
            notes: Set(self.notes),
            created_at: Set(now),
            updated_at: Set(now),
        })
    }
}

impl UpdatePurchaseOrder {
    pub fn apply(self, am: &mut ActiveModel) -> Result<(), errors::ModelError> {
        if let Some(v) = self.vendor_id { am.vendor_id = Set(v); }
        if let Some(v) = self.title { am.title = Set(v); }
        if let Some(v) = self.status { am.status = Set(validate_status(&v)?); }
        if let Some(items) = self.line_items { am.line_items = Set(line_items_json(&items)?); }
        if let Some(s) = self.shipping { am.shipping = Set(Some(to_json(&s)?)); }
        if let Some(c) = self.cost_breakdown { am.cost_breakdown = Set(Some(to_json(&c)?)); }
        if let Some(raw) = self.due_date { am.due_date = Set(Some(dates::parse_due_date(&raw)?)); }
        if let Some(v) = self.notes { am.notes = Set(Some(v)); }
        Ok(())
    }
}
