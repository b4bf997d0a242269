use std::io::{self, Write};

use anyhow::{anyhow, Context, Result};
use cart_core::Storefront;
use clap::{Parser, Subcommand};
use shared::domain::{ProductId, Quantity};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Parser, Debug)]
#[command(name = "storefront-tools", about = "Inspect the catalog and price a cart")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every catalog product.
    Catalog,
    /// Build a cart from `id:qty` pairs and print its lines and total.
    Quote {
        #[arg(required = true, value_parser = parse_line)]
        lines: Vec<(ProductId, Quantity)>,
    },
}

fn parse_line(raw: &str) -> Result<(ProductId, Quantity)> {
    let (id, qty) = raw
        .split_once(':')
        .ok_or_else(|| anyhow!("expected `id:qty`, got {raw:?}"))?;
    let id = id
        .trim()
        .parse::<i64>()
        .with_context(|| format!("invalid product id in {raw:?}"))?;
    let qty = qty
        .trim()
        .parse::<u32>()
        .with_context(|| format!("invalid quantity in {raw:?}"))?;
    Ok((ProductId(id), Quantity::new(qty)?))
}

fn write_catalog(storefront: &Storefront, out: &mut impl Write) -> Result<()> {
    for product in storefront.products() {
        writeln!(out, "{}  {}  {}", product.id, product.title, product.price)?;
    }
    Ok(())
}

fn write_quote(
    storefront: &mut Storefront,
    lines: &[(ProductId, Quantity)],
    out: &mut impl Write,
) -> Result<()> {
    for &(id, quantity) in lines {
        storefront.set_quantity(id, quantity)?;
        storefront
            .add_to_cart(id)
            .with_context(|| format!("cannot add product {id}"))?;
    }

    let Some(panel) = storefront.cart_panel() else {
        return Ok(());
    };
    for line in &panel.lines {
        writeln!(out, "{}  {}", line.label, line.subtotal_label)?;
    }
    writeln!(out, "Total: {}", panel.total_label)?;
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut storefront = Storefront::new();
    let mut stdout = io::stdout().lock();

    match cli.command {
        Command::Catalog => write_catalog(&storefront, &mut stdout)?,
        Command::Quote { lines } => write_quote(&mut storefront, &lines, &mut stdout)?,
    }

    Ok(())
}
