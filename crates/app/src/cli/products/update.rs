use clap::Args;
use catalog_app::domain::products::{ProductUpdate, ProductsService};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct UpdateProductArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Product id
    id: Uuid,

    /// Replacement name
    #[arg(long)]
    name: Option<String>,

    /// Replacement price
    #[arg(long)]
    price: Option<Decimal>,
}

pub(crate) async fn run(args: UpdateProductArgs) -> Result<(), String> {
    let update = ProductUpdate::new(args.name, args.price).map_err(|error| error.to_string())?;

    if update.is_empty() {
        return Err("nothing to update; pass --name and/or --price".to_string());
    }

    let updated = args
        .database
        .products()
        .await?
        .update_product(args.id.into(), update)
        .await
        .map_err(|error| format!("failed to update product {}: {error}", args.id))?;

    super::print_product(&updated);

    Ok(())
}
