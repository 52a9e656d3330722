use dexbrowse::filter::filter_indices;
use dexbrowse::utils::{capitalize, format_dex_number, format_name, text_to_lines, type_color};
use dexbrowse::{Catalog, CatalogEntry, DetailTab, EntityProfile};
use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Span, Spans};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap};
use ratatui::{Frame, Terminal};
use std::io;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    List,
    Detail,
}

/// One outstanding detail fetch. `ticket` identifies the request so a
/// late answer to an older one can be told apart from the current one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRequest {
    pub ticket: u64,
    pub name: String,
}

/// Detail screen for one entity; `profile` is kept across a retry so the
/// last good data stays visible.
#[derive(Debug, Clone)]
pub struct DetailPane {
    pub name: String,
    pub ticket: u64,
    pub state: LoadState,
    pub profile: Option<EntityProfile>,
    pub tab: DetailTab,
}

pub struct App {
    pub entries: Vec<CatalogEntry>,
    pub skipped: Vec<String>,
    pub catalog_state: LoadState,
    pub visible: Vec<usize>, // indices into entries
    pub selected_visible: usize,
    pub search_mode: bool,
    pub search_query: String,
    pub screen: Screen,
    pub detail: Option<DetailPane>,
    pub show_help: bool,
    next_ticket: u64,
}

impl App {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            skipped: Vec::new(),
            catalog_state: LoadState::Loading,
            visible: Vec::new(),
            selected_visible: 0,
            search_mode: false,
            search_query: String::new(),
            screen: Screen::List,
            detail: None,
            show_help: false,
            next_ticket: 0,
        }
    }

    fn issue_ticket(&mut self) -> u64 {
        self.next_ticket += 1;
        self.next_ticket
    }

    /// Replace the list wholesale with a fetch result.
    pub fn set_catalog(&mut self, result: Result<Catalog, String>) {
        match result {
            Ok(catalog) => {
                self.entries = catalog.entries;
                self.skipped = catalog.skipped;
                self.catalog_state = LoadState::Ready;
            }
            Err(msg) => self.catalog_state = LoadState::Failed(msg),
        }
        self.apply_filter();
    }

    pub fn begin_catalog_reload(&mut self) -> bool {
        if self.catalog_state == LoadState::Loading {
            return false;
        }
        self.catalog_state = LoadState::Loading;
        true
    }

    pub fn selected(&self) -> Option<&CatalogEntry> {
        self.visible
            .get(self.selected_visible)
            .and_then(|&i| self.entries.get(i))
    }

    /// Switch to the detail screen for the selected entry and return the
    /// request that needs fetching.
    pub fn open_selected(&mut self) -> Option<DetailRequest> {
        let name = self.selected()?.name.clone();
        let ticket = self.issue_ticket();
        self.detail = Some(DetailPane {
            name: name.clone(),
            ticket,
            state: LoadState::Loading,
            profile: None,
            tab: DetailTab::default(),
        });
        self.screen = Screen::Detail;
        Some(DetailRequest { ticket, name })
    }

    /// Re-issue the fetch for the open pane, also while a previous one is
    /// still pending; only the newest request's answer is applied.
    pub fn begin_detail_reload(&mut self) -> Option<DetailRequest> {
        self.detail.as_ref()?;
        let ticket = self.issue_ticket();
        let pane = self.detail.as_mut()?;
        pane.ticket = ticket;
        pane.state = LoadState::Loading;
        Some(DetailRequest {
            ticket,
            name: pane.name.clone(),
        })
    }

    /// Answers to anything but the pane's latest request are ignored.
    pub fn set_profile(&mut self, request: &DetailRequest, result: Result<EntityProfile, String>) {
        let Some(pane) = self.detail.as_mut() else {
            return;
        };
        if pane.ticket != request.ticket {
            return;
        }
        match result {
            Ok(profile) => {
                pane.profile = Some(profile);
                pane.state = LoadState::Ready;
            }
            Err(msg) => pane.state = LoadState::Failed(msg),
        }
    }

    pub fn close_detail(&mut self) {
        self.screen = Screen::List;
        self.detail = None;
    }

    pub fn next_tab(&mut self) {
        if let Some(pane) = self.detail.as_mut() {
            pane.tab = pane.tab.next();
        }
    }

    pub fn previous_tab(&mut self) {
        if let Some(pane) = self.detail.as_mut() {
            pane.tab = pane.tab.previous();
        }
    }

    pub fn next(&mut self) {
        if !self.visible.is_empty() {
            self.selected_visible = (self.selected_visible + 1) % self.visible.len();
        }
    }

    pub fn previous(&mut self) {
        if !self.visible.is_empty() {
            if self.selected_visible == 0 {
                self.selected_visible = self.visible.len() - 1;
            } else {
                self.selected_visible -= 1;
            }
        }
    }

    pub fn apply_filter(&mut self) {
        self.visible = filter_indices(&self.entries, &self.search_query);

        if self.visible.is_empty() {
            self.selected_visible = 0;
        } else if self.selected_visible >= self.visible.len() {
            self.selected_visible = self.visible.len() - 1;
        }
    }
}

pub fn draw_ui<B: Backend>(terminal: &mut Terminal<B>, app: &App) -> io::Result<()> {
    terminal
        .draw(|f| {
            match (app.screen, app.detail.as_ref()) {
                (Screen::Detail, Some(pane)) => draw_detail(f, pane),
                _ => draw_list(f, app),
            }
            if app.show_help {
                draw_help(f, app.screen);
            }
        })
        .map(|_| ())
}

// helper to compute a centered rect for popups
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_w = r.width.saturating_mul(percent_x) / 100;
    let popup_h = r.height.saturating_mul(percent_y) / 100;
    let popup_x = r.x + (r.width.saturating_sub(popup_w) / 2);
    let popup_y = r.y + (r.height.saturating_sub(popup_h) / 2);
    Rect::new(popup_x, popup_y, popup_w, popup_h)
}

fn type_badges(types: &[String]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (i, t) in types.iter().enumerate() {
        let (r, g, b) = type_color(t);
        spans.push(Span::styled(
            format!(" {} ", capitalize(t)),
            Style::default().fg(Color::Black).bg(Color::Rgb(r, g, b)),
        ));
        if i + 1 < types.len() {
            spans.push(Span::raw(" "));
        }
    }
    spans
}

fn draw_list<B: Backend>(f: &mut Frame<B>, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(f.size());

    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(chunks[0]);

    let items: Vec<ListItem> = app
        .visible
        .iter()
        .filter_map(|&i| app.entries.get(i))
        .map(|e| {
            let (r, g, b) = type_color(&e.primary_type);
            ListItem::new(Spans::from(vec![
                Span::styled("  ", Style::default().bg(Color::Rgb(r, g, b))),
                Span::raw(format!(" {} {}", format_dex_number(e.id), format_name(&e.name))),
            ]))
        })
        .collect();

    let title = if app.skipped.is_empty() {
        "Pokémon".to_string()
    } else {
        format!("Pokémon ({} unavailable)", app.skipped.len())
    };
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    let mut state = ListState::default();
    if !app.visible.is_empty() {
        state.select(Some(app.selected_visible));
    }
    f.render_stateful_widget(list, left_chunks[0], &mut state);

    let search_text = if app.search_mode {
        format!("/{}", app.search_query)
    } else if app.search_query.is_empty() {
        "Press '/' to search by name or number.".to_string()
    } else {
        format!("Filter: {}", app.search_query)
    };
    let search_para = Paragraph::new(search_text)
        .block(Block::default().borders(Borders::ALL).title("Search"));
    f.render_widget(search_para, left_chunks[1]);

    let preview = match &app.catalog_state {
        LoadState::Loading => Paragraph::new("Loading Pokémon..."),
        LoadState::Failed(msg) => Paragraph::new(vec![
            Spans::from(Span::styled(
                msg.clone(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Spans::from(""),
            Spans::from("Press 'r' to retry."),
        ]),
        LoadState::Ready => match app.selected() {
            Some(e) => {
                let mut lines = vec![
                    Spans::from(Span::styled(
                        format!("{} {}", format_name(&e.name), format_dex_number(e.id)),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Spans::from(type_badges(&e.types)),
                    Spans::from(""),
                ];
                if let Some(url) = &e.image_url {
                    lines.push(Spans::from(format!("Artwork: {}", url)));
                }
                lines.push(Spans::from(""));
                lines.push(Spans::from("Press Enter for details."));
                Paragraph::new(lines)
            }
            None => Paragraph::new("No Pokémon match the filter"),
        },
    };
    f.render_widget(
        preview
            .block(Block::default().borders(Borders::ALL).title("Details"))
            .wrap(Wrap { trim: true }),
        chunks[1],
    );
}

fn draw_detail<B: Backend>(f: &mut Frame<B>, pane: &DetailPane) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(6),
        ])
        .split(f.size());

    let header = match &pane.profile {
        Some(p) => vec![
            Spans::from(vec![
                Span::styled(
                    capitalize(&p.entity.name),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("  {}", format_dex_number(p.entity.id))),
            ]),
            Spans::from(p.entity.image_url.clone().unwrap_or_else(|| "(no artwork)".into())),
        ],
        None => vec![Spans::from(Span::styled(
            format_name(&pane.name),
            Style::default().add_modifier(Modifier::BOLD),
        ))],
    };
    f.render_widget(
        Paragraph::new(header).block(Block::default().borders(Borders::ALL)),
        chunks[0],
    );

    let titles = DetailTab::ALL
        .iter()
        .map(|t| Spans::from(t.label()))
        .collect();
    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL))
        .select(pane.tab.index())
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        );
    f.render_widget(tabs, chunks[1]);

    let body: Vec<Spans> = match (&pane.state, &pane.profile) {
        (LoadState::Failed(msg), _) => vec![
            Spans::from(Span::styled(msg.clone(), Style::default().fg(Color::Red))),
            Spans::from(""),
            Spans::from("Press 'r' to retry."),
        ],
        (_, Some(p)) => tab_lines(p, pane.tab, chunks[2].width.saturating_sub(2) as usize),
        (_, None) => vec![Spans::from("Loading...")],
    };
    f.render_widget(
        Paragraph::new(body)
            .block(Block::default().borders(Borders::ALL).title(pane.tab.label()))
            .wrap(Wrap { trim: false }),
        chunks[2],
    );
}

fn tab_lines(p: &EntityProfile, tab: DetailTab, width: usize) -> Vec<Spans<'static>> {
    let mut lines: Vec<Spans> = Vec::new();
    match tab {
        DetailTab::Forms => {
            for v in &p.variants {
                lines.push(Spans::from(vec![
                    Span::styled(
                        format!("{:<16}", v.label()),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!(
                        "{}  {}",
                        format_name(&v.name),
                        v.image_url.as_deref().unwrap_or("(no image)")
                    )),
                ]));
            }
            if !p.skipped_variants.is_empty() {
                lines.push(Spans::from(Span::styled(
                    format!("{} form(s) could not be loaded", p.skipped_variants.len()),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            lines.push(Spans::from(""));
            lines.push(Spans::from(Span::styled(
                "Description",
                Style::default().add_modifier(Modifier::BOLD),
            )));
            for line in text_to_lines(&p.species.flavor_text, width.max(20)) {
                lines.push(Spans::from(line));
            }
        }
        DetailTab::Detail => {
            lines.push(Spans::from(format!("Height: {} m", p.entity.height_meters())));
            lines.push(Spans::from(format!("Weight: {} kg", p.entity.weight_kilograms())));
        }
        DetailTab::Types => {
            for t in &p.entity.types {
                lines.push(Spans::from(vec![Span::raw("• ")]
                    .into_iter()
                    .chain(type_badges(std::slice::from_ref(t)))
                    .collect::<Vec<_>>()));
            }
        }
        DetailTab::Stats => {
            // NAME | VALUE | bar, scaled against the highest possible base stat.
            let name_w = 16usize;
            let val_w = 4usize;
            let bar_max_w = width.saturating_sub(name_w + val_w + 2);
            let scale_max = 255.0f32;
            for st in &p.entity.stats {
                let bar_len = (((st.base as f32) / scale_max).min(1.0) * (bar_max_w as f32)).round() as usize;
                lines.push(Spans::from(format!(
                    "{:<name_w$} {:>val_w$} {}",
                    capitalize(&st.name),
                    st.base,
                    "█".repeat(bar_len),
                    name_w = name_w,
                    val_w = val_w
                )));
            }
        }
        DetailTab::Weakness => {
            lines.push(Spans::from(Span::styled(
                "No data available.",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }
    lines
}

fn draw_help<B: Backend>(f: &mut Frame<B>, screen: Screen) {
    let popup = centered_rect(60, 40, f.size());
    let mut help_lines: Vec<Spans> = vec![
        Spans::from(Span::styled(
            "Keybindings",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Spans::from(""),
        Spans::from("q          Quit"),
        Spans::from("r          Retry / refresh"),
        Spans::from("h, F1      Toggle this help"),
    ];
    match screen {
        Screen::List => {
            help_lines.push(Spans::from("/          Enter search mode"));
            help_lines.push(Spans::from("Enter/Esc  Finish search"));
            help_lines.push(Spans::from("Up/Down    Navigate list"));
            help_lines.push(Spans::from("Enter      Open details"));
        }
        Screen::Detail => {
            help_lines.push(Spans::from("Left/Right Switch tab"));
            help_lines.push(Spans::from("Esc        Back to list"));
        }
    }
    let help_para = Paragraph::new(help_lines)
        .block(Block::default().borders(Borders::ALL).title("Help"))
        .wrap(Wrap { trim: true });
    f.render_widget(ratatui::widgets::Clear, popup);
    f.render_widget(help_para, popup);
}
