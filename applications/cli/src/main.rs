/// Harmony - multi-service music aggregator, headless front-end
use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use harmony_cli::views::{self, Outcome};
use harmony_cli::config::PASSWORD_ENV;
use harmony_cli::{resolve, AppConfig, AppContext, Route};
use harmony_core::{
    CatalogProvider, HarmonyError, PlaylistId, Provider, ResultKind, SearchResults, ServiceId,
    TrackId,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "harmony")]
#[command(about = "Browse and play music from Spotify, SoundCloud and Deezer in one place", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./harmony.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in with email and password, or to the demo account
    Login {
        /// Account email
        #[arg(short, long, required_unless_present = "demo")]
        email: Option<String>,
        /// Account password
        #[arg(short, long, env = PASSWORD_ENV, hide_env_values = true)]
        password: Option<String>,
        /// Use the demo account with every service connected
        #[arg(long, conflicts_with = "email")]
        demo: bool,
    },
    /// Log out and forget the saved session
    Logout,
    /// Show the logged-in user and their services
    Whoami {
        /// Print the user record as JSON
        #[arg(long)]
        json: bool,
    },
    /// List library playlists
    Library {
        /// Create a playlist with this name first
        #[arg(long)]
        create: Option<String>,
    },
    /// Show a playlist's tracks
    Playlist {
        /// Playlist id
        id: String,
    },
    /// Search across connected services
    Search {
        /// Search text
        query: String,
        /// Only search these services (repeatable)
        #[arg(long = "service", value_parser = parse_provider)]
        services: Vec<Provider>,
        /// Only return these result types (repeatable)
        #[arg(long = "type", value_parser = parse_kind)]
        kinds: Vec<ResultKind>,
    },
    /// Play a catalog track for a number of clock ticks
    Play {
        /// Track id
        track_id: String,
        /// Ticks to play before stopping
        #[arg(short, long, default_value_t = 5)]
        seconds: u32,
    },
    /// Connect a streaming service
    Connect {
        /// spotify, soundcloud or deezer
        #[arg(value_parser = parse_provider)]
        provider: Provider,
    },
    /// Disconnect a streaming service by its id
    Disconnect {
        /// Service id (see `whoami`)
        service_id: String,
    },
    /// Show which screen a path resolves to
    Route {
        /// Path such as /library or /playlist/pl-night-drive
        path: String,
    },
}

fn parse_provider(s: &str) -> Result<Provider, String> {
    Provider::from_str(s)
        .ok_or_else(|| format!("unknown service '{s}' (expected spotify, soundcloud or deezer)"))
}

fn parse_kind(s: &str) -> Result<ResultKind, String> {
    ResultKind::from_str(s)
        .ok_or_else(|| format!("unknown type '{s}' (expected tracks, artists, albums or playlists)"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "harmony=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;
    config.validate()?;
    let ctx = AppContext::new(&config)?;

    match cli.command {
        Commands::Login {
            email,
            password,
            demo,
        } => login(&ctx, email, password, demo).await?,
        Commands::Logout => {
            views::auth::logout(&ctx).await;
            println!("Logged out");
        }
        Commands::Whoami { json } => whoami(&ctx, json).await?,
        Commands::Library { create } => library(&ctx, create).await?,
        Commands::Playlist { id } => playlist(&ctx, PlaylistId::new(id)).await?,
        Commands::Search {
            query,
            services,
            kinds,
        } => search(&ctx, &query, &services, &kinds).await?,
        Commands::Play { track_id, seconds } => play(&ctx, TrackId::new(track_id), seconds).await?,
        Commands::Connect { provider } => connect(&ctx, provider).await?,
        Commands::Disconnect { service_id } => {
            require_route(&ctx, "/settings").await?;
            views::settings::disconnect(&ctx, &ServiceId::new(service_id.clone())).await?;
            println!("Disconnected {service_id}");
        }
        Commands::Route { path } => {
            let route = resolve(&path, ctx.is_authenticated().await);
            println!("{path} -> {route}");
        }
    }

    Ok(())
}

/// Refuse to run a screen the user cannot reach
async fn require_route(ctx: &AppContext, path: &str) -> anyhow::Result<Route> {
    match resolve(path, ctx.is_authenticated().await) {
        Route::Login if path != "/login" => {
            bail!("Not logged in. Run `harmony login --demo` first.")
        }
        route => Ok(route),
    }
}

async fn login(
    ctx: &AppContext,
    email: Option<String>,
    password: Option<String>,
    demo: bool,
) -> anyhow::Result<()> {
    let outcome = if demo {
        views::auth::demo_login(ctx).await
    } else {
        let email = email.unwrap_or_default();
        let password =
            password.with_context(|| format!("--password (or {PASSWORD_ENV}) is required"))?;
        views::auth::login(ctx, &email, &password).await
    };

    match outcome {
        Outcome::Applied(user) => {
            println!("Welcome back, {}!", user.name);
            for provider in user.connected_providers() {
                println!("  {} connected", provider.display_name());
            }
            Ok(())
        }
        Outcome::Failed(message) => bail!(message),
        Outcome::Superseded => bail!("Login was superseded by a newer attempt"),
    }
}

async fn whoami(ctx: &AppContext, json: bool) -> anyhow::Result<()> {
    let state = ctx.snapshot().await;
    let Some(user) = state.auth.user else {
        println!("Not logged in");
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&user)?);
        return Ok(());
    }

    println!("{} <{}>", user.name, user.email);
    for service in &user.services {
        let status = if service.connected {
            "connected"
        } else {
            "not connected"
        };
        println!(
            "  {:<12} {:<28} {status}",
            service.provider.display_name(),
            service.id.as_str()
        );
    }
    Ok(())
}

async fn library(ctx: &AppContext, create: Option<String>) -> anyhow::Result<()> {
    require_route(ctx, "/library").await?;
    views::library::load(ctx).await?;

    if let Some(name) = create {
        let playlist = views::library::create_playlist(ctx, &name).await;
        println!("Created \"{}\" ({})", playlist.name, playlist.id);
    }

    for playlist in views::library::playlists(ctx).await {
        println!(
            "{:<28} {:<24} {:>3} tracks  {}",
            playlist.id.as_str(),
            playlist.name,
            playlist.tracks.len(),
            playlist.owner
        );
    }
    Ok(())
}

async fn playlist(ctx: &AppContext, id: PlaylistId) -> anyhow::Result<()> {
    require_route(ctx, &format!("/playlist/{id}")).await?;
    views::library::load(ctx).await?;

    let playlist = views::playlist::open(ctx, &id).await?;
    println!("{} by {}", playlist.name, playlist.owner);
    if let Some(description) = &playlist.description {
        println!("{description}");
    }
    for (index, track) in playlist.tracks.iter().enumerate() {
        println!(
            "{:>3}. {:<8} {:<28} {:<20} {:>6}",
            index + 1,
            track.id.as_str(),
            track.title,
            track.artist,
            views::player::format_time(track.duration)
        );
    }
    println!(
        "{} tracks, {}",
        playlist.tracks.len(),
        views::player::format_time(u32::try_from(playlist.total_duration()).unwrap_or(u32::MAX))
    );
    views::playlist::close(ctx).await;
    Ok(())
}

async fn search(
    ctx: &AppContext,
    query: &str,
    services: &[Provider],
    kinds: &[ResultKind],
) -> anyhow::Result<()> {
    require_route(ctx, "/search").await?;
    views::search::restrict(ctx, services, kinds).await;

    match views::search::search(ctx, query).await {
        None => println!("Type something to search"),
        Some(Outcome::Applied(results)) => print_results(&results),
        Some(Outcome::Failed(message)) => bail!(message),
        Some(Outcome::Superseded) => {}
    }
    Ok(())
}

fn print_results(results: &SearchResults) {
    if results.is_empty() {
        println!("No results");
        return;
    }

    if !results.tracks.is_empty() {
        println!("Tracks");
        for track in &results.tracks {
            println!(
                "  {:<8} {} - {} [{}]",
                track.id.as_str(),
                track.title,
                track.artist,
                track.provider.display_name()
            );
        }
    }
    if !results.artists.is_empty() {
        println!("Artists");
        for artist in &results.artists {
            println!("  {} [{}]", artist.name, artist.provider.display_name());
        }
    }
    if !results.albums.is_empty() {
        println!("Albums");
        for album in &results.albums {
            println!("  {} - {} [{}]", album.title, album.artist, album.provider.display_name());
        }
    }
    if !results.playlists.is_empty() {
        println!("Playlists");
        for playlist in &results.playlists {
            println!(
                "  {:<20} {} ({} tracks)",
                playlist.id.as_str(),
                playlist.name,
                playlist.track_count
            );
        }
    }
}

async fn play(ctx: &AppContext, track_id: TrackId, seconds: u32) -> anyhow::Result<()> {
    require_route(ctx, "/").await?;

    let track = ctx
        .providers
        .catalog
        .tracks()
        .await?
        .into_iter()
        .find(|t| t.id == track_id)
        .ok_or_else(|| HarmonyError::TrackNotFound(track_id.clone()))?;

    ctx.store.lock().await.subscribe(|action, state| {
        if action.name() == "player/playNext" {
            println!("{}", views::player::describe(&state.player));
        }
    });

    views::home::play_track(ctx, track).await?;
    println!("{}", views::player::describe(&ctx.snapshot().await.player));

    let clock = ctx.start_clock().await;
    tokio::time::sleep(ctx.tick() * seconds + ctx.tick() / 2).await;
    clock.stop().await;

    println!("{}", views::player::describe(&ctx.snapshot().await.player));
    Ok(())
}

async fn connect(ctx: &AppContext, provider: Provider) -> anyhow::Result<()> {
    require_route(ctx, "/settings").await?;
    println!("Connecting {}...", provider.display_name());

    match views::settings::connect(ctx, provider).await? {
        Outcome::Applied(service) => {
            println!("{} connected ({})", provider.display_name(), service.id);
            Ok(())
        }
        Outcome::Failed(message) => bail!(message),
        Outcome::Superseded => Ok(()),
    }
}
