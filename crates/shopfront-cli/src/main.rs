use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;
use shopfront_cli::seeder::{self, DEFAULT_SEED_PASSWORD, SeedConfig};
use shopfront_config::MongoConfig;
use shopfront_db::{
    Database, MongoCategoryRepository, MongoProductRepository, MongoUserRepository, connect,
    init_indexes,
};
use shopfront_observability::init_console_logging;

#[derive(Parser)]
#[command(name = "shopfront-cli")]
#[command(about = "Shopfront CLI - Administrative tools for Shopfront", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replace all data with fake users, categories and products
    Seed {
        /// Number of users to create
        #[arg(short = 'u', long, default_value = "5")]
        users: usize,

        /// Number of categories to create
        #[arg(short = 'c', long, default_value = "6")]
        categories: usize,

        /// Number of products to create
        #[arg(short = 'p', long, default_value = "25")]
        products: usize,

        /// Password given to every seeded user
        #[arg(long, default_value = DEFAULT_SEED_PASSWORD)]
        password: String,
    },
    /// Delete every user, category and product
    Clear,
    /// Create an administrator account
    CreateAdmin {
        /// Display name
        #[arg(short = 'n', long)]
        name: Option<String>,

        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_console_logging();

    let cli = Cli::parse();

    if let Err(e) = run(cli.command).await {
        eprintln!("\n❌ {e:#}");
        std::process::exit(1);
    }
}

async fn run(command: Commands) -> anyhow::Result<()> {
    let db = connect(&MongoConfig::from_env()).await?;
    init_indexes(&db).await?;

    match command {
        Commands::Seed {
            users,
            categories,
            products,
            password,
        } => {
            handle_seed(
                &db,
                SeedConfig::new(users, categories, products).with_password(password),
            )
            .await
        }
        Commands::Clear => handle_clear(&db).await,
        Commands::CreateAdmin {
            name,
            email,
            password,
        } => handle_create_admin(&db, name, email, password).await,
    }
}

async fn handle_seed(db: &Database, config: SeedConfig) -> anyhow::Result<()> {
    let summary = seeder::seed_all(
        &MongoUserRepository::new(db),
        &MongoCategoryRepository::new(db),
        &MongoProductRepository::new(db),
        config,
    )
    .await?;

    println!(
        "✅ Seeded {} users, {} categories and {} products",
        summary.users, summary.categories, summary.products
    );
    Ok(())
}

async fn handle_clear(db: &Database) -> anyhow::Result<()> {
    let cleared = seeder::clear_all(
        &MongoUserRepository::new(db),
        &MongoCategoryRepository::new(db),
        &MongoProductRepository::new(db),
    )
    .await?;

    println!(
        "✅ Removed {} users, {} categories and {} products",
        cleared.users, cleared.categories, cleared.products
    );
    Ok(())
}

async fn handle_create_admin(
    db: &Database,
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
) -> anyhow::Result<()> {
    let name = match name {
        Some(name) => name,
        None => Input::<String>::new().with_prompt("Name").interact_text()?,
    };

    let email = match email {
        Some(email) => email,
        None => Input::<String>::new().with_prompt("Email address").interact_text()?,
    };

    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()?,
    };

    let admin =
        seeder::create_admin(&MongoUserRepository::new(db), &name, &email, &password).await?;

    println!("\n✅ Admin created successfully!");
    println!("   Id: {}", admin.id);
    println!("   Email: {}", admin.email);
    println!("   Name: {}", admin.name);
    Ok(())
}
