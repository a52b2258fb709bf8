use clap::{Args, Subcommand};
use catalog_app::domain::products::Product;

mod create;
mod delete;
mod list;
mod update;

#[derive(Debug, Args)]
pub(crate) struct ProductsCommand {
    #[command(subcommand)]
    command: ProductsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductsSubcommand {
    List(list::ListProductsArgs),
    Create(create::CreateProductArgs),
    Update(update::UpdateProductArgs),
    Delete(delete::DeleteProductArgs),
}

pub(crate) async fn run(command: ProductsCommand) -> Result<(), String> {
    match command.command {
        ProductsSubcommand::List(args) => list::run(args).await,
        ProductsSubcommand::Create(args) => create::run(args).await,
        ProductsSubcommand::Update(args) => update::run(args).await,
        ProductsSubcommand::Delete(args) => delete::run(args).await,
    }
}

fn print_product(product: &Product) {
    println!("id: {}", product.uuid);
    println!("name: {}", product.name);
    println!("price: {}", product.price);
}
