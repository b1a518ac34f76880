use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use meeting_desk::config::DEFAULT_CONFIG_PATH;
use meeting_desk::confirm::{ConfirmationService, FixedAnchor, TerminalAnchor};
use meeting_desk::stub::{create_router, run_analysis_worker, StubState};
use meeting_desk::views::render::{render_create_errors, render_detail, render_list};
use meeting_desk::views::{CreateView, DetailView, Field, ListView, PollPolicy};
use meeting_desk::{Config, MeetingApi, MeetingClient, Route};
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "meeting-desk", version, about = "Create, browse and delete analysed meetings")]
struct Cli {
    /// Config file, without extension
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Override the meetings API base URL
    #[arg(long)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List all meetings
    List,

    /// Show one meeting, following its analysis until it settles
    Show {
        id: String,

        /// Print the current state once instead of polling
        #[arg(long)]
        no_follow: bool,
    },

    /// Submit a new meeting for analysis
    Create {
        #[arg(long)]
        title: String,

        #[arg(long, conflicts_with = "content_file", required_unless_present = "content_file")]
        content: Option<String>,

        #[arg(long)]
        content_file: Option<PathBuf>,
    },

    /// Delete a meeting after confirmation
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Open a client route, e.g. `/`, `/meetings/new` or `/meetings/<id>`
    Open { path: String },

    /// Run the in-memory stub backend
    ServeStub,
}

/// What every view needs
struct App {
    api: Arc<dyn MeetingApi>,
    prompt: ConfirmationService,
    policy: PollPolicy,
    follow: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let mut cfg = Config::load(&cli.config)?;
    if let Some(url) = cli.api_url {
        cfg.api.base_url = url;
    }

    info!("Meetings API: {}", cfg.api.base_url);

    let mut app = App {
        api: Arc::new(MeetingClient::new(&cfg.api)?),
        prompt: ConfirmationService::with_anchor(Arc::new(TerminalAnchor)),
        policy: PollPolicy::from(&cfg.polling),
        follow: true,
    };

    let start = match cli.command {
        Command::List => Route::MeetingList,
        Command::Show { id, no_follow } => {
            app.follow = !no_follow;
            Route::MeetingDetail(id)
        }
        Command::Create {
            title,
            content,
            content_file,
        } => {
            let content = match (content, content_file) {
                (Some(content), _) => content,
                (None, Some(path)) => std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?,
                (None, None) => String::new(),
            };
            create_meeting(&app, title, content).await?
        }
        Command::Delete { id, yes } => {
            if yes {
                app.prompt.set_anchor(Arc::new(FixedAnchor(true)));
            }
            match delete_meeting(&app, id).await? {
                Some(next) => next,
                None => return Ok(()),
            }
        }
        Command::Open { path } => Route::resolve(&path)?,
        Command::ServeStub => return serve_stub(&cfg).await,
    };

    navigate(&app, start).await
}

/// Run views, following the navigation each one returns
async fn navigate(app: &App, start: Route) -> Result<()> {
    let mut next = Some(start);

    while let Some(route) = next.take() {
        info!("Navigating to {}", route);
        next = match route {
            Route::MeetingList => {
                show_list(app).await;
                None
            }
            Route::MeetingCreate => {
                let (title, content) = read_create_form()?;
                Some(create_meeting(app, title, content).await?)
            }
            Route::MeetingDetail(id) => show_detail(app, id).await?,
        };
    }

    Ok(())
}

async fn show_list(app: &App) {
    let mut view = ListView::new(Arc::clone(&app.api));
    view.load().await;
    print!("{}", render_list(view.state()));
}

async fn show_detail(app: &App, id: String) -> Result<Option<Route>> {
    let mut view = DetailView::new(Arc::clone(&app.api), id, app.policy);
    if let Some(route) = view.load().await {
        return Ok(Some(route));
    }

    let mut rx = view.subscribe();
    let mut last = rx.borrow_and_update().clone();
    print!("{}", render_detail(&last));

    if !app.follow {
        return Ok(None);
    }

    while !last.is_done() {
        tokio::select! {
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let current = rx.borrow_and_update().clone();
                let status_changed = current.meeting.as_ref().map(|m| m.status)
                    != last.meeting.as_ref().map(|m| m.status);
                if status_changed || current.phase != last.phase {
                    println!();
                    print!("{}", render_detail(&current));
                }
                last = current;
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted, closing meeting view");
                break;
            }
        }
    }

    // Dropping the view tears the polling loop down.
    drop(view);
    Ok(None)
}

async fn create_meeting(app: &App, title: String, content: String) -> Result<Route> {
    let mut view = CreateView::new(Arc::clone(&app.api));
    view.set(Field::Title, title);
    view.set(Field::Content, content);

    match view.submit().await {
        Some(next) => Ok(next),
        None => {
            eprint!("{}", render_create_errors(&view));
            bail!("Meeting was not created");
        }
    }
}

/// `Ok(None)` when the user declined the prompt
async fn delete_meeting(app: &App, id: String) -> Result<Option<Route>> {
    let mut view = DetailView::new(Arc::clone(&app.api), id.clone(), app.policy);
    if let Some(route) = view.load().await {
        return Ok(Some(route));
    }
    view.stop_polling();

    let next = view.delete(&app.prompt).await;
    if let Some(error) = view.state().error_message {
        eprintln!("Fehler: {}", error);
        bail!("Failed to delete meeting {}", id);
    }
    Ok(next)
}

/// First stdin line is the title, the rest is the content
fn read_create_form() -> Result<(String, String)> {
    eprintln!("Titel in der ersten Zeile, danach der Meeting-Inhalt (Ende mit Ctrl-D):");

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read meeting from stdin")?;

    let (title, content) = input.split_once('\n').unwrap_or((input.as_str(), ""));
    Ok((title.trim().to_string(), content.to_string()))
}

async fn serve_stub(cfg: &Config) -> Result<()> {
    let (state, queue) = StubState::new();
    tokio::spawn(run_analysis_worker(
        state.clone(),
        queue,
        Duration::from_millis(cfg.stub.analysis_delay_ms),
        cfg.stub.max_content_len,
    ));

    let addr = format!("{}:{}", cfg.stub.http.bind, cfg.stub.http.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Stub backend listening on {}", addr);
    axum::serve(listener, create_router(state)).await?;

    Ok(())
}
