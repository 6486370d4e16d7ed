use anyhow::Result;
use std::io::Write;

use crate::application::ShopService;
use crate::domain::format_cents;

/// Exporter for writing the order backlog in machine-readable form
pub struct Exporter<'a> {
    service: &'a ShopService,
}

impl<'a> Exporter<'a> {
    pub fn new(service: &'a ShopService) -> Self {
        Self { service }
    }

    /// Export every accepted order to CSV, oldest first
    pub fn export_orders_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let orders = self.service.orders();
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["id", "placed_at", "customer", "drink", "price"])?;

        for order in &orders {
            csv_writer.write_record([
                order.id.to_string(),
                order.placed_at.to_rfc3339(),
                order.customer_name.clone(),
                order.drink.clone(),
                format_cents(order.price),
            ])?;
        }

        csv_writer.flush()?;
        Ok(orders.len())
    }
}
