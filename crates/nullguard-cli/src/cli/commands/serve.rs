use crate::cli::args::ServeArgs;
use crate::exit_codes::EXIT_SUCCESS;
use anyhow::Context;
use nullguard_server::ServerConfig;
use tokio::net::TcpListener;

pub async fn run(args: ServeArgs) -> anyhow::Result<i32> {
    let cfg = resolve_config(&args)?;
    let listener = TcpListener::bind(cfg.bind)
        .await
        .with_context(|| format!("failed to bind {}", cfg.bind))?;
    nullguard_server::serve(listener, &cfg, nullguard_server::ctrl_c())
        .await
        .context("server error")?;
    Ok(EXIT_SUCCESS)
}

/// Defaults, then config file, then environment, then flags.
fn resolve_config(args: &ServeArgs) -> anyhow::Result<ServerConfig> {
    let base = match &args.config {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };
    let mut cfg = base.apply_env()?;
    apply_flags(&mut cfg, args);
    Ok(cfg)
}

fn apply_flags(cfg: &mut ServerConfig, args: &ServeArgs) {
    if let Some(bind) = args.bind {
        cfg.bind = bind;
    }
    if let Some(depth) = args.max_depth {
        cfg.max_depth = depth;
    }
    if let Some(limit) = args.body_limit {
        cfg.body_limit_bytes = limit;
    }
    if !args.optional.is_empty() {
        cfg.optional_fields.extend(args.optional.iter().cloned());
    }
}
