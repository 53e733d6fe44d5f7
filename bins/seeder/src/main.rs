//! Database seeder for Rentora development and testing.
//!
//! Seeds a demo tenant with settings, expense categories, a property with a
//! linked distribution channel, and sample directory records.
//!
//! Usage: cargo run --bin seeder

use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use serde_json::json;
use uuid::Uuid;

use rentora_core::settings::keys;
use rentora_db::entities::{
    channels, expense_categories, expense_subcategories, people, properties, property_channels,
    sea_orm_active_enums::PersonType, settings,
};

/// Demo tenant ID (consistent for all seeds)
const DEMO_TENANT_ID: i32 = 1;
/// Demo property ID (consistent for all seeds)
const DEMO_PROPERTY_ID: &str = "00000000-0000-0000-0000-000000000101";
/// Demo channel ID (consistent for all seeds)
const DEMO_CHANNEL_ID: &str = "00000000-0000-0000-0000-000000000102";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = rentora_db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    println!("Seeding tenant settings...");
    seed_settings(&db).await;

    println!("Seeding expense categories...");
    seed_expense_categories(&db).await;

    println!("Seeding property and channel...");
    seed_property_and_channel(&db).await;

    println!("Seeding sample people...");
    seed_people(&db).await;

    println!("Seeding complete!");
}

fn demo_property_id() -> Uuid {
    Uuid::parse_str(DEMO_PROPERTY_ID).unwrap()
}

fn demo_channel_id() -> Uuid {
    Uuid::parse_str(DEMO_CHANNEL_ID).unwrap()
}

/// Seeds the demo tenant's reservation status and type lists.
async fn seed_settings(db: &DatabaseConnection) {
    let values = [
        (
            keys::RESERVATION_STATUSES,
            json!([
                {"name": "confirmed", "color": "#2e7d32"},
                {"name": "checked_in", "color": "#1565c0"},
                {"name": "checked_out", "color": "#6a1b9a"},
                {"name": "cancelled", "color": "#c62828"}
            ]),
        ),
        (
            keys::RESERVATION_TYPES,
            json!(["short_stay", "long_stay", "owner_stay"]),
        ),
    ];

    for (key, value) in values {
        let exists = settings::Entity::find()
            .filter(settings::Column::TenantId.eq(DEMO_TENANT_ID))
            .filter(settings::Column::Key.eq(key))
            .one(db)
            .await
            .ok()
            .flatten()
            .is_some();
        if exists {
            continue;
        }

        let now = chrono::Utc::now().into();
        let setting = settings::ActiveModel {
            id: Set(Uuid::new_v4()),
            tenant_id: Set(DEMO_TENANT_ID),
            key: Set(key.to_string()),
            value: Set(value),
            created_at: Set(now),
            updated_at: Set(now),
        };
        setting.insert(db).await.expect("Failed to seed setting");
    }
}

/// Seeds the shared expense category tree.
async fn seed_expense_categories(db: &DatabaseConnection) {
    let tree = [
        ("Maintenance", vec!["Repairs", "Gardening", "Pool"]),
        ("Services", vec!["Cleaning", "Laundry"]),
        ("Supplies", vec!["Amenities", "Consumables"]),
    ];

    for (category_name, subcategory_names) in tree {
        let existing = expense_categories::Entity::find()
            .filter(expense_categories::Column::Name.eq(category_name))
            .one(db)
            .await
            .ok()
            .flatten();

        let category_id = if let Some(category) = existing {
            category.id
        } else {
            let category = expense_categories::ActiveModel {
                id: Set(Uuid::new_v4()),
                name: Set(category_name.to_string()),
            };
            category
                .insert(db)
                .await
                .expect("Failed to seed expense category")
                .id
        };

        for name in subcategory_names {
            let exists = expense_subcategories::Entity::find()
                .filter(expense_subcategories::Column::CategoryId.eq(category_id))
                .filter(expense_subcategories::Column::Name.eq(name))
                .one(db)
                .await
                .ok()
                .flatten()
                .is_some();
            if exists {
                continue;
            }

            let subcategory = expense_subcategories::ActiveModel {
                id: Set(Uuid::new_v4()),
                category_id: Set(category_id),
                name: Set(name.to_string()),
            };
            subcategory
                .insert(db)
                .await
                .expect("Failed to seed expense subcategory");
        }
    }
}

/// Seeds a demo property linked to a demo channel with Spanish VAT settings.
async fn seed_property_and_channel(db: &DatabaseConnection) {
    let now: sea_orm::prelude::DateTimeWithTimeZone = chrono::Utc::now().into();

    if properties::Entity::find_by_id(demo_property_id())
        .one(db)
        .await
        .ok()
        .flatten()
        .is_none()
    {
        let property = properties::ActiveModel {
            id: Set(demo_property_id()),
            tenant_id: Set(DEMO_TENANT_ID),
            name: Set("Villa Mar Azul".to_string()),
            address: Set(Some("Carrer de la Platja 12, Altea".to_string())),
            created_at: Set(now),
            updated_at: Set(now),
        };
        property.insert(db).await.expect("Failed to seed property");
    }

    if channels::Entity::find_by_id(demo_channel_id())
        .one(db)
        .await
        .ok()
        .flatten()
        .is_none()
    {
        let channel = channels::ActiveModel {
            id: Set(demo_channel_id()),
            tenant_id: Set(DEMO_TENANT_ID),
            name: Set("Booking".to_string()),
            person_id: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };
        channel.insert(db).await.expect("Failed to seed channel");
    }

    let link_exists = property_channels::Entity::find()
        .filter(property_channels::Column::PropertyId.eq(demo_property_id()))
        .filter(property_channels::Column::ChannelId.eq(demo_channel_id()))
        .one(db)
        .await
        .ok()
        .flatten()
        .is_some();
    if !link_exists {
        let link = property_channels::ActiveModel {
            id: Set(Uuid::new_v4()),
            property_id: Set(demo_property_id()),
            channel_id: Set(demo_channel_id()),
            apply_vat: Set(true),
            vat_percent: Set(Decimal::new(21, 0)),
            commission_percent: Set(Some(Decimal::new(15, 0))),
            created_at: Set(now),
            updated_at: Set(now),
        };
        link.insert(db)
            .await
            .expect("Failed to seed property-channel link");
    }
}

/// Seeds a sample guest and provider.
async fn seed_people(db: &DatabaseConnection) {
    let samples = [
        (
            PersonType::Guest,
            Some("Laura"),
            Some("Ferrer"),
            None,
            Some("laura.ferrer@example.com"),
        ),
        (
            PersonType::Provider,
            None,
            None,
            Some("Limpiezas Costa SL"),
            Some("info@limpiezascosta.example.com"),
        ),
    ];

    for (person_type, first_name, last_name, company_name, email) in samples {
        let exists = people::Entity::find()
            .filter(people::Column::Email.eq(email))
            .one(db)
            .await
            .ok()
            .flatten()
            .is_some();
        if exists {
            continue;
        }

        let now = chrono::Utc::now().into();
        let person = people::ActiveModel {
            id: Set(Uuid::new_v4()),
            person_type: Set(person_type),
            first_name: Set(first_name.map(str::to_string)),
            last_name: Set(last_name.map(str::to_string)),
            company_name: Set(company_name.map(str::to_string)),
            email: Set(email.map(str::to_string)),
            phone: Set(None),
            tax_id: Set(None),
            fiscal_address: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };
        person.insert(db).await.expect("Failed to seed person");
    }
}
