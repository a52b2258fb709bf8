use clap::Args;
use catalog_app::domain::products::ProductsService;
use uuid::Uuid;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct DeleteProductArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Product id
    id: Uuid,
}

pub(crate) async fn run(args: DeleteProductArgs) -> Result<(), String> {
    let deleted = args
        .database
        .products()
        .await?
        .delete_product(args.id.into())
        .await
        .map_err(|error| format!("failed to delete product {}: {error}", args.id))?;

    println!("deleted product {}", deleted.uuid);

    Ok(())
}
