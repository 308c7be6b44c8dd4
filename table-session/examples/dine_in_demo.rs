//! Dine-in walkthrough: scan a table, order, split the bill, reset
//!
//! Run with: cargo run -p table-session --example dine_in_demo

use anyhow::{Context, Result};
use table_session::{OrderStatus, SplitMode, TableSession, catalog, money, tables};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let venue = tables::restaurant();
    println!("{} {}", venue.logo.as_deref().unwrap_or(""), venue.name);

    // Guest scans the sticker on table 7
    let table = tables::resolve_table(7).context("table 7 not found")?;
    let mut session = TableSession::new();
    session.set_table(table.id.clone());

    // Browse the menu and build a cart
    for category in catalog::categories() {
        println!("-- {category} --");
        for item in catalog::items_by_category(*category) {
            println!("   {} ({:.2})", item.name, item.price);
        }
    }
    for id in ["item-004", "item-004", "item-009", "item-013"] {
        let item = catalog::find_item(id).context("unknown catalog id")?;
        session.add_item(item.clone());
    }
    println!(
        "cart: {} items, total {:.2}",
        session.item_count(),
        session.cart_total()
    );

    // Checkout
    let (order_id, total) = {
        let order = session.create_order()?;
        println!("order {} created, pay at {}", order.id, order.payment_url());
        (order.id.clone(), order.total)
    };

    // The party decides to split evenly among three people
    session.initialize_split_payment(&order_id, total, SplitMode::Even);
    let share = money::even_split_share(total, 3);
    for name in ["Alice", "Bob", "Carol"] {
        let remaining = session
            .split_payment()
            .context("split ledger open")?
            .remaining_amount();
        let amount = money::clamp_contribution(share, remaining);
        session.add_contribution(name, amount, None)?;
        println!("{name} paid {amount:.2}");
    }

    let split = session.split_payment().context("split ledger open")?;
    println!(
        "paid {:.2} of {:.2}, settled: {}",
        split.paid_amount(),
        split.total_amount(),
        split.is_fully_paid()
    );

    // Fully paid: close out the order and reset for the next guests
    if split.is_fully_paid() {
        session.update_order_status(OrderStatus::Paid)?;
        session.reset();
    }
    println!("table {} ready for the next party", table.number);

    Ok(())
}
