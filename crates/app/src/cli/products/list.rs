use clap::Args;
use catalog_app::domain::products::ProductsService;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct ListProductsArgs {
    #[command(flatten)]
    database: DatabaseArgs,
}

pub(crate) async fn run(args: ListProductsArgs) -> Result<(), String> {
    let products = args
        .database
        .products()
        .await?
        .list_products()
        .await
        .map_err(|error| format!("failed to list products: {error}"))?;

    if products.is_empty() {
        println!("no products found");
        return Ok(());
    }

    for product in &products {
        super::print_product(product);
        println!();
    }

    Ok(())
}
