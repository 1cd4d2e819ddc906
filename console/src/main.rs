//! Command line front end for the admin console.
//!
//! # Usage
//!
//! ```bash
//! export ADMIN_API_BASE_URL=https://admin.example.com
//! export ADMIN_API_TOKEN=...
//!
//! admin-console dashboard
//! admin-console projects list --page 2 --status ACTIVE --search farm
//! admin-console projects delete p1 p2 --yes
//! ```
//!
//! Logging follows `RUST_LOG` (default `info`).

use admin_console::dashboard::{
    DashboardAction, DashboardEnvironment, DashboardReducer, DashboardState,
};
use admin_console::notification::DELETED_SUCCESSFULLY;
use admin_console::projects::{
    Pagination, ProjectFilters, ProjectsAction, ProjectsEnvironment, ProjectsReducer,
    ProjectsState, TableParams,
};
use admin_console_api::{
    ApiConfig, DashboardService, HttpClient, Project, ProjectService, SortOrder,
};
use admin_console_core::environment::SystemClock;
use admin_console_runtime::Store;
use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Admin console for the project backend
#[derive(Debug, Parser)]
#[command(name = "admin-console", version, about)]
struct Cli {
    /// Backend base URL
    #[arg(long, env = "ADMIN_API_BASE_URL")]
    base_url: String,

    /// Bearer token
    #[arg(long, env = "ADMIN_API_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Per-request timeout in seconds
    #[arg(
        long,
        env = "ADMIN_API_TIMEOUT_SECS",
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the summary counters
    Dashboard,

    /// Project management
    Projects {
        #[command(subcommand)]
        command: ProjectsCommand,
    },
}

#[derive(Debug, Subcommand)]
enum ProjectsCommand {
    /// List one page of projects
    List(ListArgs),

    /// Delete projects by id
    Delete {
        /// Ids to delete
        #[arg(required = true)]
        ids: Vec<String>,

        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Args)]
struct ListArgs {
    /// 1-based page number
    #[arg(long, default_value_t = NonZeroU32::MIN)]
    page: NonZeroU32,

    /// Rows per page
    #[arg(long, default_value = "10")]
    page_size: NonZeroU32,

    /// Free text search
    #[arg(long, default_value = "")]
    search: String,

    /// Status filter (repeatable): ACTIVE, INACTIVE
    #[arg(long = "status")]
    statuses: Vec<String>,

    /// Sort column
    #[arg(long)]
    sort: Option<String>,

    /// Sort direction
    #[arg(long, value_enum, requires = "sort")]
    order: Option<Order>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Order {
    Asc,
    Desc,
}

impl From<Order> for SortOrder {
    fn from(order: Order) -> Self {
        match order {
            Order::Asc => Self::Asc,
            Order::Desc => Self::Desc,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = {
        let config = ApiConfig::new(cli.base_url)
            .with_timeout(Duration::from_secs(cli.timeout_secs));
        match cli.token {
            Some(token) => config.with_access_token(token),
            None => config,
        }
    };
    let http = HttpClient::new(&config).context("invalid API configuration")?;
    // Effects finish within one request timeout; leave room for the reducer
    let wait = config.timeout + Duration::from_secs(5);

    match cli.command {
        Command::Dashboard => dashboard(http, wait).await,
        Command::Projects {
            command: ProjectsCommand::List(args),
        } => list_projects(http, args, wait).await,
        Command::Projects {
            command: ProjectsCommand::Delete { ids, yes },
        } => delete_projects(http, ids, yes, wait).await,
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

async fn dashboard(http: HttpClient, wait: Duration) -> anyhow::Result<()> {
    let env = DashboardEnvironment::new(
        Arc::new(DashboardService::new(http)),
        Arc::new(SystemClock),
    );
    let store = Store::new(DashboardState::default(), DashboardReducer, env);

    store
        .send(DashboardAction::Load)
        .await?
        .wait_with_timeout(wait)
        .await?;

    let state = store.state(Clone::clone).await;
    if let Some(error) = state.error {
        bail!("{}: {error}", error.message_key());
    }

    println!("=== Dashboard ===\n");
    if let Some(data) = state.data {
        for (key, value) in data.entries() {
            println!("  {key:<14} {value:>8}");
        }
    }
    Ok(())
}

async fn list_projects(http: HttpClient, args: ListArgs, wait: Duration) -> anyhow::Result<()> {
    let search = [args.search];
    let mut entries: Vec<(&str, &[String])> = vec![("search", &search[..])];
    if !args.statuses.is_empty() {
        entries.push(("statuses", &args.statuses[..]));
    }
    let filters = ProjectFilters::parse(entries)?;

    let params = TableParams::new(args.page_size)
        .with_filters(filters)
        .with_pagination(Pagination {
            current: args.page,
            page_size: args.page_size,
        })
        .with_sort(args.sort, args.order.map(SortOrder::from));

    let env = ProjectsEnvironment::new(
        Arc::new(ProjectService::new(http)),
        Arc::new(SystemClock),
    );
    let store = Store::new(ProjectsState::with_params(params), ProjectsReducer::new(), env);

    store
        .send(ProjectsAction::Load)
        .await?
        .wait_with_timeout(wait)
        .await?;

    let state = store.state(Clone::clone).await;
    if let Some(error) = state.error {
        bail!("{}: {error}", error.message_key());
    }

    println!("=== Projects ===\n");
    for project in &state.items {
        print_project(project);
    }
    println!(
        "\nPage {} of {} ({} projects)",
        state.params.pagination.current,
        state.page_count().max(1),
        state.total
    );
    Ok(())
}

fn print_project(project: &Project) {
    let location = project
        .location
        .map_or_else(String::new, |(lat, lng)| format!("{lat}, {lng}"));
    let owner = project.owner().map(|user| user.full_name()).unwrap_or_default();

    println!(
        "  {:<26} {:<24} {:<8} {:<22} {:>3} gw  {:<20} {}",
        project.id,
        project.name,
        project.status.label(),
        location,
        project.gateways_count(),
        owner,
        project.created_at.format("%d/%m/%Y - %H:%M:%S"),
    );
}

async fn delete_projects(
    http: HttpClient,
    ids: Vec<String>,
    confirmed: bool,
    wait: Duration,
) -> anyhow::Result<()> {
    if !confirmed {
        bail!(
            "Refusing to delete {} project(s) without --yes",
            ids.len()
        );
    }

    let env = ProjectsEnvironment::new(
        Arc::new(ProjectService::new(http)),
        Arc::new(SystemClock),
    );
    let store = Store::new(ProjectsState::default(), ProjectsReducer::new(), env);

    let mut handle = if let [id] = ids.as_slice() {
        store.send(ProjectsAction::DeleteRequested(id.clone())).await?
    } else {
        store.send(ProjectsAction::SelectionChanged(ids)).await?;
        store.send(ProjectsAction::DeleteManyRequested).await?
    };
    handle.wait_with_timeout(wait).await?;
    // Waits for in-flight requests but rejects their results; the
    // post-delete refetch is never read here
    store.shutdown(wait).await?;

    let notifications = store.state(|state| state.notifications.clone()).await;
    match notifications.iter().find(|notification| notification.is_error()) {
        Some(failure) => bail!("{}", failure.message),
        None => {
            println!("{DELETED_SUCCESSFULLY}");
            Ok(())
        },
    }
}
