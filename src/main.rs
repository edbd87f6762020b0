//! shipctl CLI - consignor deployment and rollback for Plus Shipping
//!
//! Usage: shipctl <COMMAND>
//!
//! Commands:
//!   generate  Render consignor INSERT statements to a SQL file
//!   deploy    Deploy consignor records to an environment's database
//!   rollback  Delete deployed consignor records from an environment
//!   shops     List the shops known to the registry

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;

use shipctl::application::{
    DeployConsignorUseCase, DeployInput, GenerateConsignorSqlUseCase, GenerateSqlInput,
    RollbackConsignorUseCase, RollbackInput,
};
use shipctl::domain::ports::{LocationRepository, ShopRepository};
use shipctl::infrastructure::cluster::KubectlBroker;
use shipctl::infrastructure::repositories::{
    ClusterConsignorRepository, FileSystemSqlRepository, JsonLocationRepository,
    YamlShopRepository, DEFAULT_LOCATIONS_PATH, DEFAULT_SHOPS_PATH,
};

/// shipctl - consignor deployment and rollback CLI
#[derive(Parser, Debug)]
#[command(name = "shipctl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render consignor INSERT statements to a SQL file
    Generate {
        /// Shop name from the registry
        #[arg(short, long)]
        shop: String,

        /// Test-data mode: status accepted, carrier ids from the registry
        #[arg(long)]
        test_data: bool,

        /// Output directory for the SQL file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Path to the shop registry
        #[arg(long, default_value = DEFAULT_SHOPS_PATH)]
        shops: PathBuf,

        /// Path to the location catalog
        #[arg(long, default_value = DEFAULT_LOCATIONS_PATH)]
        locations: PathBuf,
    },

    /// Deploy consignor records to an environment's database
    Deploy {
        /// Shop name from the registry
        #[arg(short, long)]
        shop: String,

        /// Target environment (e.g. staging, production)
        #[arg(short, long)]
        env: String,

        /// Deploy production records (status not_applied, zeroed carrier ids)
        #[arg(long)]
        production: bool,

        /// Show the SQL without executing it
        #[arg(long)]
        dry_run: bool,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,

        /// Path to the shop registry
        #[arg(long, default_value = DEFAULT_SHOPS_PATH)]
        shops: PathBuf,

        /// Path to the location catalog
        #[arg(long, default_value = DEFAULT_LOCATIONS_PATH)]
        locations: PathBuf,
    },

    /// Delete deployed consignor records from an environment
    Rollback {
        /// Shop name from the registry
        #[arg(short, long)]
        shop: String,

        /// Target environment (e.g. staging, production)
        #[arg(short, long)]
        env: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,

        /// Path to the shop registry
        #[arg(long, default_value = DEFAULT_SHOPS_PATH)]
        shops: PathBuf,
    },

    /// List the shops known to the registry
    Shops {
        /// Path to the shop registry
        #[arg(long, default_value = DEFAULT_SHOPS_PATH)]
        shops: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            shop,
            test_data,
            output,
            shops,
            locations,
        } => cmd_generate(&shop, test_data, output, shops, locations),
        Commands::Deploy {
            shop,
            env,
            production,
            dry_run,
            yes,
            shops,
            locations,
        } => cmd_deploy(&shop, &env, production, dry_run, yes, shops, locations),
        Commands::Rollback {
            shop,
            env,
            yes,
            shops,
        } => cmd_rollback(&shop, &env, yes, shops),
        Commands::Shops { shops } => cmd_shops(shops),
    }
}

fn cmd_generate(
    shop: &str,
    test_data: bool,
    output: Option<PathBuf>,
    shops: PathBuf,
    locations: PathBuf,
) -> Result<()> {
    println!("📦 shipctl generate");
    println!("Shop: {shop}");

    let use_case = GenerateConsignorSqlUseCase::new(
        Arc::new(YamlShopRepository::with_path(shops)),
        Arc::new(JsonLocationRepository::with_path(locations)),
        Arc::new(FileSystemSqlRepository::new()),
    );

    let result = use_case.execute(&GenerateSqlInput {
        shop_name: shop.to_string(),
        test_data,
        output_dir: output,
    })?;

    println!("\n✓ Generated {} consignor statements", result.consignor_count);
    println!("  application_status: {}", result.application_status);
    println!("  output: {}", result.filepath.display());

    if test_data {
        println!(
            "\n⚠ Test-data mode reuses the shop's existing carrier detail ids; \
             production areas each need their own carrier contract."
        );
    }

    Ok(())
}

fn cmd_deploy(
    shop_name: &str,
    env: &str,
    production: bool,
    dry_run: bool,
    yes: bool,
    shops_path: PathBuf,
    locations_path: PathBuf,
) -> Result<()> {
    let test_data = !production;

    println!("🚀 shipctl deploy");

    let shops = Arc::new(YamlShopRepository::with_path(shops_path));
    let locations = Arc::new(JsonLocationRepository::with_path(locations_path));
    let broker = Arc::new(KubectlBroker::new());
    let consignors = Arc::new(ClusterConsignorRepository::new(broker, shops.clone()));
    let use_case = DeployConsignorUseCase::new(shops.clone(), locations.clone(), consignors);

    // Resolve early so typos fail before any prompt or cluster contact.
    let shop = shops.find_by_name(shop_name)?;
    let environment = shop.environment(env)?;

    println!("Shop: {}", shop.shopify_shop_id());
    println!("Store ID: {}", shop.store_id());
    println!("Environment: {env}");
    println!("Namespace: {}", environment.namespace);
    println!(
        "Mode: {}",
        if test_data { "test data" } else { "production" }
    );

    if test_data && !shop.has_test_credentials() {
        println!("⚠ Shop has no carrier detail ids; deployed records will not be deployable.");
    }

    let location_count = locations.find_all()?.len();

    if dry_run {
        let sql = use_case.render_sql(shop_name, test_data)?;
        println!("\n{sql}");
        println!("\n✓ Dry run complete ({location_count} statements, nothing executed)");
        return Ok(());
    }

    if !confirm(
        &format!("Deploy {location_count} consignor records to \"{env}\"?"),
        yes,
    )? {
        println!("Deploy cancelled");
        return Ok(());
    }

    let result = use_case.execute(&DeployInput {
        shop_name: shop_name.to_string(),
        environment: env.to_string(),
        test_data,
    })?;

    if result.success {
        println!(
            "\n✓ Deployed {} consignor records to {}",
            result.deployed_count, result.environment
        );
        Ok(())
    } else {
        eprintln!(
            "\n✗ Deploy failed: {}",
            result.error_message.as_deref().unwrap_or("unknown error")
        );
        std::process::exit(1);
    }
}

fn cmd_rollback(shop_name: &str, env: &str, yes: bool, shops_path: PathBuf) -> Result<()> {
    println!("↩️  shipctl rollback");

    let shops = Arc::new(YamlShopRepository::with_path(shops_path));
    let broker = Arc::new(KubectlBroker::new());
    let consignors = Arc::new(ClusterConsignorRepository::new(broker, shops.clone()));
    let use_case = RollbackConsignorUseCase::new(shops.clone(), consignors);

    let shop = shops.find_by_name(shop_name)?;
    shop.environment(env)?;

    println!("Shop: {}", shop.shopify_shop_id());
    println!("Environment: {env}");
    println!("⚠ This deletes every distribution-center row for the shop.");

    if !confirm(
        &format!("Really delete the consignor records in \"{env}\"?"),
        yes,
    )? {
        println!("Rollback cancelled");
        return Ok(());
    }

    let result = use_case.execute(&RollbackInput {
        shop_name: shop_name.to_string(),
        environment: env.to_string(),
    })?;

    if result.success {
        println!(
            "\n✓ Deleted {} rows from {}",
            result.deleted_count, result.environment
        );
        Ok(())
    } else {
        eprintln!(
            "\n✗ Rollback failed: {}",
            result.error_message.as_deref().unwrap_or("unknown error")
        );
        std::process::exit(1);
    }
}

fn cmd_shops(shops_path: PathBuf) -> Result<()> {
    let shops = YamlShopRepository::with_path(shops_path);
    let names = shops.list_all()?;

    println!("Registered shops ({}):", names.len());
    for name in &names {
        println!("  - {name}");
    }

    Ok(())
}

/// Ask before touching the remote database. `--yes` skips the prompt; a
/// non-interactive stdin without `--yes` refuses rather than guessing.
fn confirm(prompt: &str, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }

    if !std::io::stdin().is_terminal() {
        anyhow::bail!("refusing to continue without confirmation; pass --yes in non-interactive runs");
    }

    Ok(dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_generate() {
        let cli = Cli::try_parse_from(["shipctl", "generate", "--shop", "81-test-store-plan-silver"])
            .unwrap();
        if let Commands::Generate { shop, test_data, .. } = cli.command {
            assert_eq!(shop, "81-test-store-plan-silver");
            assert!(!test_data);
        } else {
            panic!("Expected Generate command");
        }
    }

    #[test]
    fn test_cli_parse_generate_with_options() {
        let cli = Cli::try_parse_from([
            "shipctl",
            "generate",
            "--shop",
            "my-shop",
            "--test-data",
            "--output",
            "out",
        ])
        .unwrap();
        if let Commands::Generate {
            test_data, output, ..
        } = cli.command
        {
            assert!(test_data);
            assert_eq!(output, Some(PathBuf::from("out")));
        } else {
            panic!("Expected Generate command");
        }
    }

    #[test]
    fn test_cli_parse_deploy() {
        let cli = Cli::try_parse_from([
            "shipctl", "deploy", "--shop", "my-shop", "--env", "staging",
        ])
        .unwrap();
        if let Commands::Deploy {
            shop,
            env,
            production,
            dry_run,
            yes,
            ..
        } = cli.command
        {
            assert_eq!(shop, "my-shop");
            assert_eq!(env, "staging");
            assert!(!production);
            assert!(!dry_run);
            assert!(!yes);
        } else {
            panic!("Expected Deploy command");
        }
    }

    #[test]
    fn test_cli_parse_deploy_flags() {
        let cli = Cli::try_parse_from([
            "shipctl",
            "deploy",
            "--shop",
            "my-shop",
            "--env",
            "production",
            "--production",
            "--dry-run",
            "--yes",
        ])
        .unwrap();
        if let Commands::Deploy {
            production,
            dry_run,
            yes,
            ..
        } = cli.command
        {
            assert!(production);
            assert!(dry_run);
            assert!(yes);
        } else {
            panic!("Expected Deploy command");
        }
    }

    #[test]
    fn test_cli_parse_rollback() {
        let cli = Cli::try_parse_from([
            "shipctl", "rollback", "--shop", "my-shop", "--env", "staging", "--yes",
        ])
        .unwrap();
        if let Commands::Rollback { shop, env, yes, .. } = cli.command {
            assert_eq!(shop, "my-shop");
            assert_eq!(env, "staging");
            assert!(yes);
        } else {
            panic!("Expected Rollback command");
        }
    }

    #[test]
    fn test_cli_parse_shops() {
        let cli = Cli::try_parse_from(["shipctl", "shops"]).unwrap();
        if let Commands::Shops { shops } = cli.command {
            assert_eq!(shops, PathBuf::from(DEFAULT_SHOPS_PATH));
        } else {
            panic!("Expected Shops command");
        }
    }

    #[test]
    fn test_cli_requires_shop_for_deploy() {
        assert!(Cli::try_parse_from(["shipctl", "deploy", "--env", "staging"]).is_err());
    }

    #[test]
    fn test_cli_registry_path_override() {
        let cli = Cli::try_parse_from([
            "shipctl", "shops", "--shops", "alt/shops.yaml",
        ])
        .unwrap();
        if let Commands::Shops { shops } = cli.command {
            assert_eq!(shops, PathBuf::from("alt/shops.yaml"));
        } else {
            panic!("Expected Shops command");
        }
    }
}
