//! # IXP Export
//!
//! Exports peering sessions from the exchange database as JSON for route
//! server and route collector configuration.

mod bootstrap;
mod di;

use clap::{Parser, Subcommand};
use ixp_export_domain::{CliOverrides, ExportTarget};
use serde::Serialize;
use tracing::info;

use bootstrap::{init_database, init_logging, load_config};
use di::{Repositories, UseCases};

#[derive(Parser)]
#[command(name = "ixp-export")]
#[command(version)]
#[command(about = "Export IXP peering sessions for route server configuration")]
struct Cli {
    /// Path to configuration file
    #[arg(short = 'c', long, global = true)]
    config: Option<String>,

    /// SQLite database path (overrides config)
    #[arg(short = 'd', long, global = true)]
    database: Option<String>,

    /// Log level (overrides config)
    #[arg(short = 'l', long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Export deduplicated peering sessions on a VLAN, keyed by address
    Export {
        #[arg(long)]
        vlan: i64,

        /// IP protocol version: 4 or 6
        #[arg(short = 'p', long, default_value_t = 4, allow_negative_numbers = true)]
        protocol: i64,

        /// RS, RC, AS112 or any other consumer name (default from config)
        #[arg(short = 't', long)]
        target: Option<ExportTarget>,

        /// Export interfaces in quarantine instead of connected ones
        #[arg(short = 'q', long)]
        quarantine: bool,
    },

    /// List VLAN interfaces across all VLANs of an IXP
    IxpInterfaces {
        #[arg(long)]
        ixp: i64,
    },

    /// List customers attached to a VLAN
    VlanMembers {
        #[arg(long)]
        vlan: i64,

        /// Only interfaces enabled for this IP protocol version
        #[arg(short = 'p', long, allow_negative_numbers = true)]
        protocol: Option<i64>,

        /// Include internal (exchange-owned) customers
        #[arg(long)]
        include_internal: bool,
    },

    /// List every VLAN interface of a customer, keyed by VLAN interface id
    CustomerInterfaces {
        #[arg(long)]
        customer: i64,

        /// Only interfaces patched into a switch of this IXP
        #[arg(long)]
        ixp: Option<i64>,
    },

    /// List VLAN interfaces of external members with a connected port,
    /// keyed by VLAN interface id
    VlanInterfaces {
        #[arg(long)]
        vlan: i64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        database_path: cli.database.clone(),
        log_level: cli.log_level.clone(),
    };
    let config = load_config(cli.config.as_deref(), overrides)?;
    init_logging(&config);

    info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        database = %config.database.path,
        "Configuration loaded"
    );

    let pool = init_database(&config.database).await?;
    let repos = Repositories::new(pool.clone());
    let use_cases = UseCases::new(&repos);
    let pretty = config.export.pretty;

    match cli.command {
        Command::Export {
            vlan,
            protocol,
            target,
            quarantine,
        } => {
            let target = target.unwrap_or_else(|| config.export.default_target.clone());
            let exported = use_cases
                .export_vlan_interfaces
                .execute(vlan, protocol, &target, quarantine)
                .await?;
            print_json(&exported, pretty)?;
        }
        Command::IxpInterfaces { ixp } => {
            let rows = use_cases.list_ixp_interfaces.execute(ixp).await?;
            print_json(&rows, pretty)?;
        }
        Command::VlanMembers {
            vlan,
            protocol,
            include_internal,
        } => {
            let members = use_cases
                .list_vlan_members
                .execute(vlan, protocol, !include_internal)
                .await?;
            print_json(&members, pretty)?;
        }
        Command::CustomerInterfaces { customer, ixp } => {
            let interfaces = use_cases
                .list_customer_vlan_interfaces
                .execute(customer, ixp)
                .await?;
            print_json(&interfaces, pretty)?;
        }
        Command::VlanInterfaces { vlan } => {
            let interfaces = use_cases.list_vlan_interface_objects.execute(vlan).await?;
            print_json(&interfaces, pretty)?;
        }
    }

    pool.close().await;
    Ok(())
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let output = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", output);
    Ok(())
}
