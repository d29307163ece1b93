use std::sync::Arc;

use clap::Parser;
use futures::future::join_all;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use ghmetrics::app::surface_error;
use ghmetrics::models::{RepoList, RepoMetrics, UserProfile};
use ghmetrics::render::{render_repo, render_repo_list, render_user};
use ghmetrics::{parse_query, Config, MetricsClient, MetricsService, Query, SearchInput, Session, ViewMode};

#[derive(Parser, Debug)]
#[command(name = "ghmetrics")]
#[command(version = "0.1.0")]
#[command(about = "Explore GitHub repositories and user statistics")]
struct Args {
    /// Queries to look up: owner/repo, username, or GitHub URL.
    /// Starts an interactive session when omitted.
    queries: Vec<String>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<String>,

    /// Backend base URL (overrides METRICS_API_URL)
    #[arg(long)]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so rendered views own stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("ghmetrics=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let mut config = Config::from_env()?;
    if let Some(ref url) = args.api_url {
        config.api_url = url.trim_end_matches('/').to_string();
    }

    let service: Arc<dyn MetricsService> =
        Arc::new(MetricsClient::new(&config.api_url, config.timeout_secs)?);

    if args.queries.is_empty() {
        run_interactive(service).await
    } else {
        run_oneshot(service, &args).await
    }
}

enum Fetched {
    Repo(RepoMetrics),
    User(UserProfile),
}

/// Resolves every query argument, fetching them concurrently and printing
/// the results in argument order.
async fn run_oneshot(service: Arc<dyn MetricsService>, args: &Args) -> anyhow::Result<()> {
    let queries: Vec<Query> = args
        .queries
        .iter()
        .filter_map(|raw| {
            let parsed = parse_query(raw);
            if parsed.is_none() {
                tracing::warn!("Ignoring empty query argument");
            }
            parsed
        })
        .collect();

    let fetches = queries.iter().map(|query| {
        let service = Arc::clone(&service);
        async move {
            match query {
                Query::Repo { owner, repo } => {
                    service.repo_metrics(owner, repo).await.map(Fetched::Repo)
                }
                Query::User { username } => {
                    service.user_profile(username).await.map(Fetched::User)
                }
            }
        }
    });
    let results = join_all(fetches).await;

    let mut output = String::new();
    for result in results {
        match result {
            Ok(fetched) => output.push_str(&format_fetched(&fetched, &args.format)?),
            Err(err) => {
                output.push_str(&format!(
                    "\nError: {}\n",
                    surface_error(&err, service.base_url())
                ));
            }
        }
    }

    if let Some(ref path) = args.output {
        std::fs::write(path, &output)?;
        tracing::info!("Output written to: {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn format_fetched(fetched: &Fetched, format: &str) -> anyhow::Result<String> {
    let output = match (fetched, format) {
        (Fetched::Repo(metrics), "json") => serde_json::to_string_pretty(metrics)?,
        (Fetched::User(profile), "json") => serde_json::to_string_pretty(profile)?,
        (Fetched::Repo(metrics), _) => render_repo(metrics),
        (Fetched::User(profile), _) => {
            let mut view = render_user(profile);
            if let Some(repos) = profile.repositories.clone() {
                view.push_str(&render_repo_list(&RepoList::from_repos(repos)));
            }
            view
        }
    };
    Ok(output)
}

async fn run_interactive(service: Arc<dyn MetricsService>) -> anyhow::Result<()> {
    println!("GitHub Metrics Service");
    println!("Explore GitHub repositories and user statistics");
    println!("Enter owner/repo, a username, or a GitHub URL. Type :help for commands.\n");

    match service.health().await {
        Ok(true) => tracing::debug!("Backend at {} is healthy", service.base_url()),
        _ => tracing::warn!(
            "Backend at {} is not reporting healthy; lookups may fail",
            service.base_url()
        ),
    }

    let mut session = Session::new(service);
    let mut input = SearchInput::new();

    loop {
        let Some(line) = read_line("> ").await? else {
            break;
        };
        let line = line.trim().to_string();

        match line.as_str() {
            "" => continue,
            "quit" | "exit" | ":quit" => break,
            ":help" => {
                print_help();
                continue;
            }
            ":repo" => {
                session.set_view(ViewMode::Repo);
                render_active(&session);
                continue;
            }
            ":user" => {
                session.set_view(ViewMode::User);
                render_active(&session);
                continue;
            }
            _ => {}
        }

        input.set_value(line);
        let Some(query) = input.submit() else {
            continue;
        };

        input.set_loading(true);
        let spinner = searching_spinner();
        session.search(&query).await;
        spinner.finish_and_clear();
        input.set_loading(false);

        if let Some(error) = session.state().error() {
            println!("Error: {}", error);
        } else {
            render_active(&session);
        }
    }

    Ok(())
}

fn render_active(session: &Session) {
    let state = session.state();
    match state.view() {
        ViewMode::Repo => match state.repo() {
            Some(metrics) => println!("{}", render_repo(metrics)),
            None => println!("No repository loaded yet. Search for owner/repo."),
        },
        ViewMode::User => match state.user() {
            Some(profile) => {
                let mut view = render_user(profile);
                if let Some(list) = state.user_repos() {
                    view.push_str(&render_repo_list(list));
                }
                println!("{}", view);
            }
            None => println!("No user loaded yet. Search for a username."),
        },
    }
}

fn print_help() {
    println!("Commands:");
    println!("  <owner>/<repo>   look up repository metrics");
    println!("  <username>       look up a user profile");
    println!("  <GitHub URL>     either of the above, from a URL");
    println!("  :repo / :user    switch the active view without fetching");
    println!("  :help            show this help");
    println!("  quit / exit      leave the session");
}

fn searching_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} Searching...")
            .unwrap(),
    );
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Prompts and reads one line from stdin off the async runtime.
/// `None` on EOF.
async fn read_line(prompt: &str) -> anyhow::Result<Option<String>> {
    use std::io::Write;

    print!("{}", prompt);
    std::io::stdout().flush()?;

    let line = tokio::task::spawn_blocking(|| {
        let mut buf = String::new();
        match std::io::stdin().read_line(&mut buf) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(buf)),
            Err(err) => Err(err),
        }
    })
    .await??;

    Ok(line)
}
