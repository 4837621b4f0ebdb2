use colored::*;
use stockroom::commands::{CmdMessage, MessageLevel};
use stockroom::config::AppConfig;
use stockroom::error::Result;
use stockroom::model::Product;
use stockroom::prompt::StdinPrompter;
use stockroom::session::{PromptPolicy, Session};
use stockroom::store::fs::CsvStore;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let base_dir = std::env::current_dir()?;
    let config = AppConfig::load(&base_dir)?;
    let store = CsvStore::new(config.db_dir_under(&base_dir))
        .with_files(&config.active_file, &config.default_file);

    let mut session = Session::start(store, StdinPrompter::new(), PromptPolicy::interactive())?;
    println!("{}", menu("Inventory Manager", session.product_count()));

    let result = session.run()?;
    print_messages(&result.messages);
    print_listed_products(&result.listed_products);
    print_full_products(&result.affected_products);
    Ok(())
}

fn menu(username: &str, products_count: usize) -> String {
    format!(
        "\
-----------------------------------
INVENTORY MANAGEMENT APPLICATION
-----------------------------------
Welcome {}!
There are {} products in the database.
    operation | description
    --------- | ------------------
    'List'    | Display a list of product identifiers and names.
    'Show'    | Show information about a product.
    'Create'  | Add a new product.
    'Update'  | Edit an existing product.
    'Destroy' | Delete an existing product.
    'Reset'   | Reset list to original state.",
        username, products_count
    )
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_listed_products(products: &[Product]) {
    for product in products {
        println!("#{}: {}", product.id, product.name);
    }
}

fn print_full_products(products: &[Product]) {
    for product in products {
        println!("#{}: {}", product.id.yellow(), product.name.bold());
        println!(
            "    aisle: {} | department: {} | price: {}",
            product.aisle, product.department, product.price
        );
    }
}
