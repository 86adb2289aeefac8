//! Dashboard statistics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Client, Invoice, InvoiceStatus};

/// Aggregates shown on the dashboard cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub user_id: String,
    /// Sum of paid invoice totals
    pub total_revenue: f64,
    /// Sum of sent and overdue invoice totals
    pub outstanding_amount: f64,
    pub total_invoices: usize,
    pub paid_invoices: usize,
    pub overdue_invoices: usize,
    pub total_clients: usize,
    pub computed_at: DateTime<Utc>,
}

impl DashboardStats {
    /// Recomputes every aggregate from raw records.
    ///
    /// Callers pass only the records owned by `user_id`.
    pub fn compute(user_id: &str, invoices: &[Invoice], clients: &[Client]) -> Self {
        let mut stats = Self {
            user_id: user_id.to_string(),
            total_revenue: 0.0,
            outstanding_amount: 0.0,
            total_invoices: invoices.len(),
            paid_invoices: 0,
            overdue_invoices: 0,
            total_clients: clients.len(),
            computed_at: Utc::now(),
        };

        for invoice in invoices {
            match invoice.status {
                InvoiceStatus::Paid => {
                    stats.paid_invoices += 1;
                    stats.total_revenue += invoice.total();
                }
                InvoiceStatus::Overdue => {
                    stats.overdue_invoices += 1;
                    stats.outstanding_amount += invoice.total();
                }
                InvoiceStatus::Sent => stats.outstanding_amount += invoice.total(),
                InvoiceStatus::Draft => {}
            }
        }

        stats
    }
}
