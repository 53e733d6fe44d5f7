//! Reservation repository for financial lookups and overview rows.

use std::collections::HashMap;

use rust_decimal::Decimal;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use rentora_core::finance::{ReservationFinancials, VatConfig};
use rentora_core::reports::{OverviewFilter, ReservationSnapshot};

use crate::entities::{channels, payments, property_channels, reservations};

/// Error types for reservation operations.
#[derive(Debug, thiserror::Error)]
pub enum ReservationError {
    /// Reservation not found.
    #[error("Reservation not found: {0}")]
    NotFound(Uuid),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Reservation repository.
#[derive(Debug, Clone)]
pub struct ReservationRepository {
    db: DatabaseConnection,
}

impl ReservationRepository {
    /// Creates a new reservation repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a reservation together with its payments, oldest payment first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_with_payments(
        &self,
        id: Uuid,
    ) -> Result<Option<(reservations::Model, Vec<payments::Model>)>, ReservationError> {
        let Some(reservation) = reservations::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let payment_rows = payments::Entity::find()
            .filter(payments::Column::ReservationId.eq(id))
            .order_by_asc(payments::Column::PaymentDate)
            .all(&self.db)
            .await?;

        Ok(Some((reservation, payment_rows)))
    }

    /// Resolves the VAT settings stored on a reservation's property-channel
    /// link, when any.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn vat_config(
        &self,
        reservation: &reservations::Model,
    ) -> Result<Option<VatConfig>, ReservationError> {
        let Some(link_id) = reservation.property_channel_id else {
            return Ok(None);
        };

        let link = property_channels::Entity::find_by_id(link_id)
            .one(&self.db)
            .await?;

        Ok(link.map(|l| VatConfig {
            apply_vat: l.apply_vat,
            vat_percent: l.vat_percent,
        }))
    }

    /// Builds the pure financial view of a reservation row.
    #[must_use]
    pub fn financials(
        reservation: &reservations::Model,
        vat: Option<VatConfig>,
    ) -> ReservationFinancials {
        ReservationFinancials {
            total_amount: reservation.total_amount,
            channel_commission: reservation.channel_commission,
            collection_commission: reservation.collection_commission,
            vat,
        }
    }

    /// Loads the reservation snapshots feeding the overview report.
    ///
    /// Filters by tenant and check-in date range, optionally by property and
    /// by channel name. Payments, VAT settings, and channel names are
    /// batch-resolved.
    ///
    /// # Errors
    ///
    /// Returns an error if any database query fails.
    pub async fn overview_rows(
        &self,
        filter: &OverviewFilter,
    ) -> Result<Vec<ReservationSnapshot>, ReservationError> {
        let mut query = reservations::Entity::find()
            .filter(reservations::Column::TenantId.eq(filter.tenant_id.into_inner()))
            .filter(reservations::Column::CheckIn.gte(filter.date_from))
            .filter(reservations::Column::CheckIn.lte(filter.date_to));

        if let Some(property_id) = filter.property_id {
            query = query.filter(reservations::Column::PropertyId.eq(property_id));
        }

        let rows = query
            .order_by_asc(reservations::Column::CheckIn)
            .all(&self.db)
            .await?;
        tracing::debug!(
            tenant_id = %filter.tenant_id,
            count = rows.len(),
            "Loaded reservations for overview"
        );

        if rows.is_empty() {
            return Ok(vec![]);
        }

        // Batch-resolve property-channel links and their channel names.
        let link_ids: Vec<Uuid> = rows.iter().filter_map(|r| r.property_channel_id).collect();
        let links: HashMap<Uuid, property_channels::Model> = if link_ids.is_empty() {
            HashMap::new()
        } else {
            property_channels::Entity::find()
                .filter(property_channels::Column::Id.is_in(link_ids))
                .all(&self.db)
                .await?
                .into_iter()
                .map(|l| (l.id, l))
                .collect()
        };

        let channel_ids: Vec<Uuid> = links.values().map(|l| l.channel_id).collect();
        let channel_names: HashMap<Uuid, String> = if channel_ids.is_empty() {
            HashMap::new()
        } else {
            channels::Entity::find()
                .filter(channels::Column::Id.is_in(channel_ids))
                .all(&self.db)
                .await?
                .into_iter()
                .map(|c| (c.id, c.name))
                .collect()
        };

        // Batch-load payments, grouped by reservation.
        let reservation_ids: Vec<Uuid> = rows.iter().map(|r| r.id).collect();
        let mut payments_by_reservation: HashMap<Uuid, Vec<Option<Decimal>>> = HashMap::new();
        for payment in payments::Entity::find()
            .filter(payments::Column::ReservationId.is_in(reservation_ids))
            .all(&self.db)
            .await?
        {
            payments_by_reservation
                .entry(payment.reservation_id)
                .or_default()
                .push(payment.amount);
        }

        let mut snapshots = Vec::with_capacity(rows.len());
        for row in rows {
            let link = row.property_channel_id.and_then(|id| links.get(&id));
            let channel = link.and_then(|l| channel_names.get(&l.channel_id).cloned());

            if let Some(wanted) = filter.channel.as_deref()
                && channel.as_deref() != Some(wanted)
            {
                continue;
            }

            let vat = link.map(|l| VatConfig {
                apply_vat: l.apply_vat,
                vat_percent: l.vat_percent,
            });

            snapshots.push(ReservationSnapshot {
                financials: Self::financials(&row, vat),
                payment_amounts: payments_by_reservation.remove(&row.id).unwrap_or_default(),
                channel,
            });
        }

        Ok(snapshots)
    }
}
