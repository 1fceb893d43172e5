//! `Mailroom` - desktop front end for a REST mail backend.
//!
//! The view router from `mailroom-core` owns all view state; this binary
//! turns its effects into iced tasks and draws what it renders.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod message;
mod model;
mod style;
mod view;

use anyhow::Context;
use iced::keyboard::{self, Key, Modifiers};
use iced::widget::{column, container, row, text_editor};
use iced::{Element, Length, Subscription, Task};
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mailroom_core::render::{render_detail, render_mailbox};
use mailroom_core::router::execute;
use mailroom_core::{ApiClient, Config, DraftField, Effect, Error, Event, Router, ViewState};

use message::Message;
use model::AppSettings;
use style::widgets::palette::{self, ThemeMode};

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mailroom=debug,mailroom_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Mailroom");

    iced::application(Mailroom::new, Mailroom::update, Mailroom::view)
        .title("Mailroom")
        .subscription(Mailroom::subscription)
        .run()
}

/// Main application state.
struct Mailroom {
    /// View state and its transitions.
    router: Router,
    /// REST client, once configuration has loaded.
    client: Option<ApiClient>,
    /// Whether the config file has been read, successfully or not.
    config_loaded: bool,
    /// Round trips requested before the client existed.
    queued: Vec<Effect>,
    /// Compose body editor; mirrored into the router's draft on every edit.
    body: text_editor::Content,
    /// Current palette.
    theme_mode: ThemeMode,
    /// Failure outside the router (config or settings files).
    shell_notice: Option<String>,
}

impl Default for Mailroom {
    fn default() -> Self {
        Self {
            router: Router::default(),
            client: None,
            config_loaded: false,
            queued: Vec::new(),
            body: text_editor::Content::new(),
            theme_mode: ThemeMode::default(),
            shell_notice: None,
        }
    }
}

impl Mailroom {
    /// Create new application instance.
    fn new() -> (Self, Task<Message>) {
        let mut app = Self::default();
        palette::set_theme(app.theme_mode);

        // The inbox load waits in `queued` until the client is built.
        app.queued = app.router.start();

        let settings_task = Task::perform(
            async {
                AppSettings::load(&AppSettings::default_path())
                    .await
                    .map_err(|e| format!("{e:#}"))
            },
            Message::SettingsLoaded,
        );
        let config_task = Task::perform(load_config(), Message::ConfigLoaded);
        (app, Task::batch([settings_task, config_task]))
    }

    /// Update state based on message.
    #[allow(clippy::needless_pass_by_value)]
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Router(event) => return self.dispatch(event),
            Message::BodyEdited(action) => {
                let is_edit = action.is_edit();
                self.body.perform(action);
                if is_edit {
                    let body = self.body.text();
                    return self.dispatch(Event::DraftEdited(DraftField::Body, body));
                }
            }
            Message::ToggleTheme => {
                self.theme_mode = self.theme_mode.toggled();
                palette::set_theme(self.theme_mode);
                info!("Theme changed to {:?}", self.theme_mode);

                let settings = AppSettings {
                    theme_mode: self.theme_mode,
                };
                return Task::perform(
                    async move {
                        settings
                            .save(&AppSettings::default_path())
                            .await
                            .map_err(|e| format!("{e:#}"))
                    },
                    Message::SettingsSaved,
                );
            }
            Message::ConfigLoaded(result) => return self.start(result),
            Message::SettingsLoaded(result) => match result {
                Ok(settings) => {
                    info!("Settings loaded: theme={:?}", settings.theme_mode);
                    self.theme_mode = settings.theme_mode;
                    palette::set_theme(self.theme_mode);
                }
                Err(e) => {
                    warn!("Failed to load settings, using defaults: {}", e);
                    self.shell_notice = Some(format!("Settings ignored: {e}"));
                }
            },
            Message::SettingsSaved(result) => {
                if let Err(e) = result {
                    warn!("Failed to save settings: {}", e);
                    self.shell_notice = Some(format!("Failed to save settings: {e}"));
                }
            }
            Message::Ignored => {}
        }
        Task::none()
    }

    /// Builds the client and runs the round trips queued while it was missing.
    ///
    /// The router keeps whatever view the user reached in the meantime.
    fn start(&mut self, config: Result<Config, String>) -> Task<Message> {
        let config = config.unwrap_or_else(|e| {
            warn!("Failed to load config, using defaults: {}", e);
            self.shell_notice = Some(e);
            Config::default()
        });

        match ApiClient::new(&config) {
            Ok(client) => {
                info!("Using mail backend at {}", client.base_url());
                self.client = Some(client);
            }
            Err(e) => warn!("No usable mail backend: {}", e),
        }

        self.config_loaded = true;
        self.router.set_return_to_origin(config.return_to_origin);
        let queued = std::mem::take(&mut self.queued);
        debug!("Releasing {} queued round trips", queued.len());
        self.perform(queued)
    }

    /// Feeds `event` to the router and schedules the round trips it asks for.
    fn dispatch(&mut self, event: Event) -> Task<Message> {
        let before = self.router.generation();
        let effects = self.router.update(event);

        // A new compose view brings its own draft; the editor starts from it.
        if self.router.generation() != before
            && let Some(draft) = self.router.draft()
        {
            self.body = text_editor::Content::with_text(&draft.body);
        }

        self.perform(effects)
    }

    fn perform(&mut self, effects: Vec<Effect>) -> Task<Message> {
        let Some(client) = &self.client else {
            if !self.config_loaded {
                self.queued.extend(effects);
                return Task::none();
            }
            return Task::batch(effects.into_iter().map(|effect| {
                let event = effect.fail(Error::Config("no mail backend configured".into()));
                Task::done(Message::Router(event))
            }));
        };

        Task::batch(effects.into_iter().map(|effect| {
            debug!("Performing {:?}", effect);
            Task::perform(execute(client.clone(), effect), Message::Router)
        }))
    }

    /// Render current state as UI.
    fn view(&self) -> Element<'_, Message> {
        let state = self.router.state();

        let (title, content): (String, Element<'_, Message>) = match state {
            ViewState::MailboxList {
                mailbox,
                emails,
                status,
            } => {
                let list = render_mailbox(*mailbox, emails, status);
                (list.header.to_string(), view::view_mailbox(&list))
            }
            ViewState::Detail {
                mailbox,
                email: Some(email),
                pending,
                ..
            } => {
                let detail = render_detail(email, *mailbox, *pending);
                (detail.subject.clone(), view::view_detail(&detail))
            }
            ViewState::Detail { status, .. } => ("Email".to_string(), view::view_opening(status)),
            ViewState::Compose { draft, .. } => (
                "New Email".to_string(),
                view::view_compose(draft, &self.body),
            ),
        };

        let notice = self.router.notice().or(self.shell_notice.as_deref());
        let main = column![view::view_header(&title, notice), content]
            .width(Length::Fill)
            .height(Length::Fill);

        let sidebar = view::view_sidebar(
            view::highlighted(state.kind(), state.mailbox()),
            self.theme_mode,
        );

        container(row![sidebar, main])
            .width(Length::Fill)
            .height(Length::Fill)
            .style(style::widgets::app_style)
            .into()
    }

    /// Subscribe to keyboard events for shortcuts.
    #[allow(clippy::unused_self)] // Required signature for iced subscription
    fn subscription(&self) -> Subscription<Message> {
        keyboard::listen().map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                shortcut(&key, modifiers).map_or(Message::Ignored, Message::Router)
            }
            _ => Message::Ignored,
        })
    }
}

/// Maps a key press to the router event it triggers.
fn shortcut(key: &Key, modifiers: Modifiers) -> Option<Event> {
    let ctrl = modifiers.command(); // Ctrl on Linux/Windows, Cmd on macOS

    match key {
        Key::Character(c) if ctrl && c.as_str() == "n" => Some(Event::ComposeNew),
        Key::Character(c) if ctrl && c.as_str() == "r" => Some(Event::Reply),
        Key::Named(keyboard::key::Named::Enter) if ctrl => Some(Event::SubmitDraft),
        Key::Named(keyboard::key::Named::Escape) => Some(Event::Back),
        Key::Named(keyboard::key::Named::F5) => Some(Event::Refresh),
        _ => None,
    }
}

/// Reads the client config, applying environment overrides.
async fn load_config() -> Result<Config, String> {
    let path = Config::default_path();
    Config::load(&path)
        .await
        .with_context(|| format!("loading client config from {}", path.display()))
        .map_err(|e| format!("{e:#}"))
}
