use chrono::{TimeZone, Utc};
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, ActiveValue, Database, DatabaseConnection, EntityTrait};
use uuid::Uuid;

use crate::errors::ModelError;
use crate::{dates, location, organization, purchase_order, reminder, user, work_order};

fn now() -> sea_orm::prelude::DateTimeWithTimeZone {
    Utc::now().into()
}

async fn sqlite_db() -> anyhow::Result<DatabaseConnection> {
    let path = std::env::temp_dir().join(format!("cmms-models-{}.db", Uuid::new_v4()));
    let db = Database::connect(format!("sqlite://{}?mode=rwc", path.display())).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

#[test]
fn due_date_accepts_plain_date_as_utc_midnight() {
    let parsed = dates::parse_due_date("2024-03-05").unwrap();
    assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap());
}

#[test]
fn due_date_normalizes_offsets_to_utc() {
    let parsed = dates::parse_due_date("2024-03-05T10:00:00+02:00").unwrap();
    assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 3, 5, 8, 0, 0).unwrap());
    assert_eq!(parsed.offset().local_minus_utc(), 0);
}

#[test]
fn due_date_rejects_garbage() {
    assert!(matches!(dates::parse_due_date("next tuesday"), Err(ModelError::Validation(_))));
    assert!(dates::parse_optional(None).unwrap().is_none());
}

#[test]
fn purchase_order_defaults_and_nested_json() {
    let input = purchase_order::CreatePurchaseOrder {
        organization_id: Uuid::new_v4(),
        vendor_id: Uuid::new_v4(),
        title: "Bearings".into(),
        status: None,
        line_items: vec![purchase_order::LineItem {
            part_id: None,
            description: "6204 bearing".into(),
            quantity: 4,
            unit_cost: 2.5,
        }],
        shipping: Some(purchase_order::ShippingContact {
            name: Some("Dock 3".into()),
            email: None,
            phone: None,
            address: Some("1 Main St".into()),
        }),
        cost_breakdown: None,
        due_date: Some("2024-06-01".into()),
        notes: None,
    };
    let am = input.into_active(Uuid::new_v4(), now()).unwrap();
    assert_eq!(am.status, ActiveValue::Set("draft".to_string()));
    assert_eq!(am.cost_breakdown, ActiveValue::Set(None));
    match &am.shipping {
        ActiveValue::Set(Some(v)) => assert_eq!(v["name"], "Dock 3"),
        other => panic!("unexpected shipping {other:?}"),
    }
    assert!(matches!(am.due_date, ActiveValue::Set(Some(_))));
}

#[test]
fn purchase_order_update_without_due_date_leaves_it_alone() {
    let mut am = purchase_order::ActiveModel {
        due_date: ActiveValue::Unchanged(Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap().into())),
        ..Default::default()
    };
    purchase_order::UpdatePurchaseOrder { notes: Some("call first".into()), ..Default::default() }
        .apply(&mut am)
        .unwrap();
    assert!(matches!(am.due_date, ActiveValue::Unchanged(_)));

    let bad = purchase_order::UpdatePurchaseOrder { due_date: Some("31/12/2024".into()), ..Default::default() };
    assert!(bad.apply(&mut am).is_err());
}

#[test]
fn work_order_status_and_priority_are_checked() {
    let base = work_order::CreateWorkOrder {
        organization_id: Uuid::new_v4(),
        title: "Replace filter".into(),
        description: None,
        status: None,
        priority: Some("HIGH".into()),
        asset_id: None,
        location_id: None,
        due_date: None,
    };
    let am = base.clone().into_active(Uuid::new_v4(), now()).unwrap();
    assert_eq!(am.status, ActiveValue::Set("open".to_string()));
    assert_eq!(am.priority, ActiveValue::Set("high".to_string()));

    let bad = work_order::CreateWorkOrder { status: Some("done-ish".into()), ..base };
    assert!(bad.into_active(Uuid::new_v4(), now()).is_err());
}

#[test]
fn user_role_defaults_to_member() {
    let am = user::CreateUser {
        organization_id: Uuid::new_v4(),
        email: "Tech@Example.com".into(),
        name: "Tech".into(),
        role: None,
    }
    .into_active(Uuid::new_v4(), now())
    .unwrap();
    assert_eq!(am.role, ActiveValue::Set("member".to_string()));
    assert_eq!(am.email, ActiveValue::Set("tech@example.com".to_string()));
}

#[test]
fn location_cannot_parent_itself() {
    let id = Uuid::new_v4();
    let res = location::CreateLocation {
        organization_id: Uuid::new_v4(),
        name: "Plant".into(),
        address: None,
        parent_id: Some(id),
    }
    .into_active(id, now());
    assert!(res.is_err());
}

#[tokio::test]
async fn migrations_create_a_usable_schema() -> anyhow::Result<()> {
    let db = sqlite_db().await?;
    let org = organization::CreateOrganization { name: "Acme".into(), contact: None, address: None }
        .into_active(Uuid::new_v4(), now())?
        .insert(&db)
        .await?;

    let rem = reminder::CreateReminder {
        organization_id: org.id,
        work_order_id: None,
        user_id: None,
        message: "check pump".into(),
        fire_at: "2024-01-01T00:00:00Z".into(),
    }
    .into_active(Uuid::new_v4(), now())?
    .insert(&db)
    .await?;
    assert_eq!(rem.status, reminder::ReminderStatus::Pending);
    assert_eq!(rem.attempts, 0);

    organization::Entity::delete_by_id(org.id).exec(&db).await?;
    assert!(reminder::Entity::find_by_id(rem.id).one(&db).await?.is_none());
    Ok(())
}
