use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use astra::Server;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::db::{init_db, Database};
use crate::mailer::BrevoMailer;
use crate::responses::error_response;
use crate::router::{handle, AppState};
use crate::seo::sitemap::render_sitemap;
use crate::seo::RouteTable;

mod auth;
mod config;
mod db;
mod domain;
mod errors;
mod forms;
mod geos;
mod mailer;
mod responses;
mod router;
mod seo;
mod templates;

#[cfg(test)]
mod tests;

#[derive(Parser)]
#[command(name = "turanchito", about = "Venezuelan real-estate marketplace")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the web server (default).
    Serve,
    /// Print every generated city/category route.
    Routes {
        #[arg(long)]
        json: bool,
    },
    /// Write sitemap.xml to stdout or a file.
    Sitemap {
        #[arg(long)]
        out: Option<PathBuf>,
        /// Written as <lastmod> on every entry.
        #[arg(long)]
        lastmod: Option<NaiveDate>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("turanchito=info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let routes = match RouteTable::standard() {
        Ok(r) => r,
        Err(e) => {
            tracing::error!("route catalog is invalid: {e}");
            return ExitCode::FAILURE;
        }
    };

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config, routes),
        Command::Routes { json } => print_routes(&routes, json),
        Command::Sitemap { out, lastmod } => {
            let xml = render_sitemap(&config.base_url, &routes, lastmod);
            match out {
                Some(path) => match fs::write(&path, xml) {
                    Ok(()) => {
                        tracing::info!(path = %path.display(), entries = routes.len(), "sitemap written");
                        ExitCode::SUCCESS
                    }
                    Err(e) => {
                        tracing::error!("writing {} failed: {e}", path.display());
                        ExitCode::FAILURE
                    }
                },
                None => {
                    println!("{xml}");
                    ExitCode::SUCCESS
                }
            }
        }
    }
}

fn print_routes(routes: &RouteTable, json: bool) -> ExitCode {
    if json {
        match serde_json::to_string_pretty(routes.combinations()) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                tracing::error!("route export failed: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        for c in routes.combinations() {
            println!("/{}\t{}", c.route_slug, c.title);
        }
    }
    ExitCode::SUCCESS
}

fn serve(config: Config, routes: RouteTable) -> ExitCode {
    let db = Database::new(config.database_path.clone());
    if let Err(e) = init_db(&db) {
        tracing::error!("database initialization failed: {e}");
        return ExitCode::FAILURE;
    }

    let addr = config.addr;
    let workers = config.workers;
    tracing::info!(
        %addr,
        db = %config.database_path.display(),
        routes = routes.len(),
        "starting server"
    );

    let state = AppState {
        db,
        mailer: config.mail.as_ref().map(BrevoMailer::new),
        config,
        routes,
    };

    let result = Server::bind(&addr)
        .max_workers(workers)
        .serve(move |req, _info| handle(req, &state).unwrap_or_else(error_response));

    match result {
        Ok(()) => {
            tracing::info!("server shut down cleanly");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("server ended with error: {e}");
            ExitCode::FAILURE
        }
    }
}
