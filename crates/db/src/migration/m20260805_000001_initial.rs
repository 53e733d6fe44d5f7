//! Initial database migration.
//!
//! Creates all enums, tables, and indexes for the PMS schema. References to
//! people are declared `ON DELETE SET NULL`: deleting a contact never
//! cascades into reservations, expenses, or channels.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        // ============================================================
        // PART 1: ENUMS
        // ============================================================
        db.execute_unprepared(ENUMS_SQL).await?;

        // ============================================================
        // PART 2: DIRECTORY & CATALOG TABLES
        // ============================================================
        db.execute_unprepared(PEOPLE_SQL).await?;
        db.execute_unprepared(PROPERTIES_SQL).await?;
        db.execute_unprepared(CHANNELS_SQL).await?;
        db.execute_unprepared(PROPERTY_CHANNELS_SQL).await?;

        // ============================================================
        // PART 3: BOOKINGS & PAYMENTS
        // ============================================================
        db.execute_unprepared(RESERVATIONS_SQL).await?;
        db.execute_unprepared(PAYMENTS_SQL).await?;

        // ============================================================
        // PART 4: EXPENSES
        // ============================================================
        db.execute_unprepared(EXPENSE_CATEGORIES_SQL).await?;
        db.execute_unprepared(EXPENSE_SUBCATEGORIES_SQL).await?;
        db.execute_unprepared(EXPENSES_SQL).await?;

        // ============================================================
        // PART 5: SETTINGS
        // ============================================================
        db.execute_unprepared(SETTINGS_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_ALL_SQL).await?;
        Ok(())
    }
}

// ============================================================
// SQL CONSTANTS
// ============================================================

const ENUMS_SQL: &str = r"
-- Person roles in the directory
CREATE TYPE person_type AS ENUM (
    'guest',
    'provider',
    'distribution_channel',
    'other'
);

-- Expense lifecycle
CREATE TYPE expense_status AS ENUM (
    'pending',
    'completed',
    'cancelled'
);
";

const PEOPLE_SQL: &str = r"
CREATE TABLE people (
    id UUID PRIMARY KEY,
    person_type person_type NOT NULL,
    first_name TEXT,
    last_name TEXT,
    company_name TEXT,
    email TEXT,
    phone TEXT,
    tax_id TEXT,
    fiscal_address TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT people_name_required CHECK (
        (first_name IS NOT NULL AND btrim(first_name) <> '')
        OR (company_name IS NOT NULL AND btrim(company_name) <> '')
    )
);

CREATE INDEX idx_people_type ON people (person_type);
CREATE INDEX idx_people_updated_at ON people (updated_at DESC);
";

const PROPERTIES_SQL: &str = r"
CREATE TABLE properties (
    id UUID PRIMARY KEY,
    tenant_id INTEGER NOT NULL,
    name TEXT NOT NULL,
    address TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_properties_tenant ON properties (tenant_id);
";

const CHANNELS_SQL: &str = r"
CREATE TABLE channels (
    id UUID PRIMARY KEY,
    tenant_id INTEGER NOT NULL,
    name TEXT NOT NULL,
    person_id UUID REFERENCES people(id) ON DELETE SET NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_channels_tenant ON channels (tenant_id);
";

const PROPERTY_CHANNELS_SQL: &str = r"
CREATE TABLE property_channels (
    id UUID PRIMARY KEY,
    property_id UUID NOT NULL REFERENCES properties(id) ON DELETE CASCADE,
    channel_id UUID NOT NULL REFERENCES channels(id) ON DELETE CASCADE,
    apply_vat BOOLEAN NOT NULL DEFAULT TRUE,
    vat_percent NUMERIC(5, 2) NOT NULL DEFAULT 21,
    commission_percent NUMERIC(5, 2),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT property_channels_unique UNIQUE (property_id, channel_id)
);
";

const RESERVATIONS_SQL: &str = r"
CREATE TABLE reservations (
    id UUID PRIMARY KEY,
    tenant_id INTEGER NOT NULL,
    property_id UUID NOT NULL REFERENCES properties(id) ON DELETE CASCADE,
    property_channel_id UUID REFERENCES property_channels(id) ON DELETE SET NULL,
    guest_id UUID REFERENCES people(id) ON DELETE SET NULL,
    status TEXT NOT NULL,
    reservation_type TEXT,
    check_in DATE NOT NULL,
    check_out DATE NOT NULL,
    total_amount NUMERIC(12, 2),
    channel_commission NUMERIC(12, 2),
    collection_commission NUMERIC(12, 2),
    notes TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT reservations_dates CHECK (check_out >= check_in)
);

CREATE INDEX idx_reservations_tenant_check_in ON reservations (tenant_id, check_in);
CREATE INDEX idx_reservations_property ON reservations (property_id);
";

const PAYMENTS_SQL: &str = r"
CREATE TABLE payments (
    id UUID PRIMARY KEY,
    reservation_id UUID NOT NULL REFERENCES reservations(id) ON DELETE CASCADE,
    amount NUMERIC(12, 2),
    payment_date DATE NOT NULL,
    method TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_payments_reservation ON payments (reservation_id);
";

const EXPENSE_CATEGORIES_SQL: &str = r"
CREATE TABLE expense_categories (
    id UUID PRIMARY KEY,
    name TEXT NOT NULL UNIQUE
);
";

const EXPENSE_SUBCATEGORIES_SQL: &str = r"
CREATE TABLE expense_subcategories (
    id UUID PRIMARY KEY,
    category_id UUID NOT NULL REFERENCES expense_categories(id) ON DELETE CASCADE,
    name TEXT NOT NULL,
    CONSTRAINT expense_subcategories_unique UNIQUE (category_id, name)
);
";

const EXPENSES_SQL: &str = r"
CREATE TABLE expenses (
    id UUID PRIMARY KEY,
    tenant_id INTEGER NOT NULL,
    description TEXT NOT NULL,
    amount NUMERIC(12, 2),
    expense_date DATE NOT NULL,
    status expense_status NOT NULL DEFAULT 'pending',
    category_id UUID REFERENCES expense_categories(id) ON DELETE SET NULL,
    subcategory_id UUID REFERENCES expense_subcategories(id) ON DELETE SET NULL,
    vendor_id UUID REFERENCES people(id) ON DELETE SET NULL,
    reservation_id UUID REFERENCES reservations(id) ON DELETE SET NULL,
    is_recurring BOOLEAN NOT NULL DEFAULT FALSE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_expenses_tenant_date ON expenses (tenant_id, expense_date DESC);
CREATE INDEX idx_expenses_status ON expenses (status);
";

const SETTINGS_SQL: &str = r"
CREATE TABLE settings (
    id UUID PRIMARY KEY,
    tenant_id INTEGER NOT NULL,
    key TEXT NOT NULL,
    value JSONB NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT settings_unique UNIQUE (tenant_id, key)
);
";

const DROP_ALL_SQL: &str = r"
DROP TABLE IF EXISTS settings;
DROP TABLE IF EXISTS expenses;
DROP TABLE IF EXISTS expense_subcategories;
DROP TABLE IF EXISTS expense_categories;
DROP TABLE IF EXISTS payments;
DROP TABLE IF EXISTS reservations;
DROP TABLE IF EXISTS property_channels;
DROP TABLE IF EXISTS channels;
DROP TABLE IF EXISTS properties;
DROP TABLE IF EXISTS people;
DROP TYPE IF EXISTS expense_status;
DROP TYPE IF EXISTS person_type;
";
