mod cli;

use anyhow::{bail, Context};
use clap::ArgMatches;
use discogs_client::{Config, DiscogsClient};

fn username(m: &ArgMatches) -> &str {
    m.get_one::<String>("username")
        .map(String::as_str)
        .expect("required arg")
}

fn folder_id(m: &ArgMatches) -> anyhow::Result<i64> {
    m.get_one::<String>("folder")
        .expect("defaulted arg")
        .parse::<i64>()
        .context("invalid --folder id")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::build_cli();
    let matches = cmd.get_matches();
    let log_level = matches.get_one::<String>("log-level").cloned();
    let version_flag = matches.get_flag("version");

    cli::init_logging(log_level.as_deref());

    if version_flag {
        println!("discogs-client {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let Some((name, sub)) = matches.subcommand() else {
        bail!("missing subcommand; run with --help");
    };

    let cfg = Config::from_env().map_err(anyhow::Error::msg)?;
    let seed = (name == "random")
        .then(|| sub.get_one::<String>("seed"))
        .flatten();
    let client = match seed {
        Some(seed) => {
            let seed = seed.parse::<u64>().context("invalid --seed")?;
            DiscogsClient::with_seed(cfg, seed)?
        }
        None => DiscogsClient::new(cfg)?,
    };

    let out = match name {
        "identity" => serde_json::to_value(client.identity().await?)?,
        "collection-count" => {
            serde_json::json!({ "count": client.collection_count(username(sub)).await? })
        }
        "folders" => serde_json::to_value(client.folders(username(sub)).await?)?,
        "lists" => serde_json::to_value(client.lists(username(sub)).await?)?,
        "wantlist-count" => {
            serde_json::json!({ "count": client.wantlist_count(username(sub)).await? })
        }
        "value" => serde_json::to_value(client.collection_value(username(sub)).await?)?,
        "random" => {
            serde_json::to_value(client.random_record(username(sub), folder_id(sub)?).await?)?
        }
        "collection" => {
            serde_json::to_value(client.full_collection(username(sub), folder_id(sub)?).await?)?
        }
        "wantlist" => serde_json::to_value(client.full_wantlist(username(sub)).await?)?,
        "list-items" => {
            let id = sub
                .get_one::<String>("list-id")
                .expect("required arg")
                .parse::<i64>()
                .context("invalid list id")?;
            serde_json::to_value(client.list_items(id).await?)?
        }
        "status" => serde_json::to_value(client.api_status().await)?,
        other => bail!("unknown subcommand: {}", other),
    };

    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
