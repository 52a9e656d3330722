mod ui;

use crossterm::event::{self, Event as CEvent, KeyCode};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use dexbrowse::{fetch_catalog, fetch_entity_detail, filter_catalog, Catalog, Config, EntityProfile, PokeClient};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::error::Error;
use std::io;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::ui::{draw_ui, App, DetailRequest, Screen};

/// Shared slot a background fetch writes into for the render loop to pick up.
type Slot<T> = Arc<Mutex<Option<T>>>;
/// Like `Slot`, but every delivery is kept until the render loop drains it.
type Queue<T> = Arc<Mutex<Vec<T>>>;
type DetailResult = (DetailRequest, Result<EntityProfile, String>);

const USAGE: &str = "\
usage: dexbrowse              interactive browser
       dexbrowse --dump [QUERY]   print the catalog (optionally filtered) as JSON
       dexbrowse --show NAME      print one Pokémon's profile as JSON";

fn init_logging(config: &Config, interactive: bool) -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);
    if interactive {
        // stderr belongs to the terminal UI
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&config.log_file)?;
        fmt.with_ansi(false).with_writer(Mutex::new(file)).init();
    } else {
        fmt.with_writer(io::stderr).init();
    }
    Ok(())
}

fn spawn_catalog_fetch(client: &PokeClient, config: &Config, slot: &Slot<Result<Catalog, String>>) {
    let client = client.clone();
    let (page_size, timeout) = (config.page_size, config.timeout);
    let slot = slot.clone();
    tokio::spawn(async move {
        let result = fetch_catalog(&client, page_size, timeout)
            .await
            .map_err(|e| {
                error!(error = %e, "catalog fetch failed");
                e.to_string()
            });
        if let Ok(mut s) = slot.lock() {
            *s = Some(result);
        }
    });
}

fn spawn_detail_fetch(client: &PokeClient, request: DetailRequest, queue: &Queue<DetailResult>) {
    let client = client.clone();
    let queue = queue.clone();
    tokio::spawn(async move {
        let result = fetch_entity_detail(&client, &request.name)
            .await
            .map_err(|e| {
                error!(name = %request.name, error = %e, "detail fetch failed");
                e.to_string()
            });
        if let Ok(mut q) = queue.lock() {
            q.push((request, result));
        }
    });
}

fn take<T>(slot: &Slot<T>) -> Option<T> {
    slot.lock().ok().and_then(|mut s| s.take())
}

fn drain<T>(queue: &Queue<T>) -> Vec<T> {
    queue
        .lock()
        .map(|mut q| std::mem::take(&mut *q))
        .unwrap_or_default()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::from_env();
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("--dump") => {
            init_logging(&config, false)?;
            let client = PokeClient::from_config(&config)?;
            let catalog = fetch_catalog(&client, config.page_size, config.timeout).await?;
            let query = args.get(1).map(String::as_str).unwrap_or("");
            let entries = filter_catalog(&catalog.entries, query);
            println!("{}", serde_json::to_string_pretty(&entries)?);
            return Ok(());
        }
        Some("--show") => {
            let Some(name) = args.get(1) else {
                eprintln!("{}", USAGE);
                std::process::exit(2);
            };
            init_logging(&config, false)?;
            let client = PokeClient::from_config(&config)?;
            let profile = fetch_entity_detail(&client, name).await?;
            println!("{}", serde_json::to_string_pretty(&profile)?);
            return Ok(());
        }
        Some("-h") | Some("--help") => {
            println!("{}", USAGE);
            return Ok(());
        }
        Some(other) => {
            eprintln!("unknown argument '{}'\n{}", other, USAGE);
            std::process::exit(2);
        }
        None => {}
    }

    init_logging(&config, true)?;
    info!(base_url = %config.base_url, page_size = config.page_size, "starting");
    let client = PokeClient::from_config(&config)?;

    let catalog_slot: Slot<Result<Catalog, String>> = Arc::new(Mutex::new(None));
    let detail_queue: Queue<DetailResult> = Arc::new(Mutex::new(Vec::new()));
    spawn_catalog_fetch(&client, &config, &catalog_slot);

    // Terminal init
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let result = run(&mut terminal, &mut app, &client, &config, &catalog_slot, &detail_queue);

    // Restore terminal
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(LeaveAlternateScreen)?;
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    client: &PokeClient,
    config: &Config,
    catalog_slot: &Slot<Result<Catalog, String>>,
    detail_queue: &Queue<DetailResult>,
) -> Result<(), Box<dyn Error>> {
    let tick_rate = Duration::from_millis(200);
    let mut last_tick = Instant::now();

    loop {
        if let Some(result) = take(catalog_slot) {
            app.set_catalog(result);
        }
        for (request, result) in drain(detail_queue) {
            app.set_profile(&request, result);
        }

        draw_ui(terminal, app)?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));
        if event::poll(timeout)? {
            if let CEvent::Key(key) = event::read()? {
                if app.search_mode {
                    match key.code {
                        KeyCode::Enter | KeyCode::Esc => {
                            app.search_mode = false;
                        }
                        KeyCode::Backspace => {
                            app.search_query.pop();
                            app.apply_filter();
                        }
                        KeyCode::Char(c) => {
                            app.search_query.push(c);
                            app.apply_filter();
                        }
                        _ => {}
                    }
                    continue;
                }

                match key.code {
                    KeyCode::Char('q') => break,
                    KeyCode::F(1) | KeyCode::Char('h') => {
                        app.show_help = !app.show_help;
                    }
                    _ => match app.screen {
                        Screen::List => match key.code {
                            KeyCode::Char('/') => {
                                app.search_mode = true;
                                app.search_query.clear();
                                app.apply_filter();
                            }
                            KeyCode::Down => app.next(),
                            KeyCode::Up => app.previous(),
                            KeyCode::Enter => {
                                if let Some(request) = app.open_selected() {
                                    spawn_detail_fetch(client, request, detail_queue);
                                }
                            }
                            KeyCode::Char('r') => {
                                if app.begin_catalog_reload() {
                                    spawn_catalog_fetch(client, config, catalog_slot);
                                }
                            }
                            _ => {}
                        },
                        Screen::Detail => match key.code {
                            KeyCode::Esc | KeyCode::Backspace => app.close_detail(),
                            KeyCode::Right | KeyCode::Tab => app.next_tab(),
                            KeyCode::Left | KeyCode::BackTab => app.previous_tab(),
                            KeyCode::Char('r') => {
                                if let Some(request) = app.begin_detail_reload() {
                                    spawn_detail_fetch(client, request, detail_queue);
                                }
                            }
                            _ => {}
                        },
                    },
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }
    }
    Ok(())
}
