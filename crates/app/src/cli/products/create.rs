use clap::Args;
use catalog_app::domain::products::{NewProduct, ProductsService};
use rust_decimal::Decimal;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct CreateProductArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Product name
    #[arg(long)]
    name: String,

    /// Product price
    #[arg(long)]
    price: Decimal,
}

pub(crate) async fn run(args: CreateProductArgs) -> Result<(), String> {
    let product = NewProduct::new(args.name, args.price).map_err(|error| error.to_string())?;

    let created = args
        .database
        .products()
        .await?
        .create_product(product)
        .await
        .map_err(|error| format!("failed to create product: {error}"))?;

    super::print_product(&created);

    Ok(())
}
