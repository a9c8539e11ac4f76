// ABOUTME: Application state management: current page, theme, animations,
// easter eggs, and the tick that drives timers and the pending submission

use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::app::animation::{SkillsReveal, Splash, TypedText};
use crate::app::easter_egg::{KonamiTracker, LogoClickCounter};
use crate::app::notification::NotificationCenter;
use crate::config::Config;
use crate::contact::{
    ContactForm, SimulatedSubmitter, SubmissionOutcome, SubmitAttempt, Submitter,
};
use crate::models::Profile;

/// The portfolio's pages, in nav-bar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::About,
        Page::Skills,
        Page::Projects,
        Page::Contact,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Skills => "Skills",
            Page::Projects => "Projects",
            Page::Contact => "Contact",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    fn next(self) -> Page {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Page {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Color scheme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

const EASTER_EGG_DURATION: Duration = Duration::from_secs(5);
const TITLE_SWAP_DURATION: Duration = Duration::from_secs(3);
const EASTER_EGG_TOAST: Duration = Duration::from_millis(5000);

#[derive(Debug)]
pub struct AppState {
    pub profile: Profile,
    pub current_page: Page,
    pub theme: Theme,
    pub help_visible: bool,
    pub should_quit: bool,
    pub notifications: NotificationCenter,
    pub contact_form: ContactForm,
    /// Keys go to the contact form while true and the Contact page is shown.
    pub form_active: bool,
    pub typed: TypedText,
    pub splash: Splash,
    pub skills_reveal: SkillsReveal,
    pub konami: KonamiTracker,
    pub logo_clicks: LogoClickCounter,
    pub easter_egg_until: Option<Instant>,
    pub title_swap_until: Option<Instant>,
    pub projects_scroll: usize,
    /// Set by the submit event, consumed by the app tick (which owns the
    /// submitter).
    pub submit_requested: bool,
    config: Config,
    config_path: Option<PathBuf>,
}

impl AppState {
    pub fn new(config: Config, config_path: Option<PathBuf>, show_splash: bool) -> Self {
        let profile = Profile::sample();
        let reduced = config.reduced_motion;
        let theme = if config.prefers_dark() {
            Theme::Dark
        } else {
            Theme::Light
        };
        Self {
            current_page: Page::Home,
            theme,
            help_visible: false,
            should_quit: false,
            notifications: NotificationCenter::new(),
            contact_form: ContactForm::new(),
            form_active: false,
            typed: TypedText::new(profile.roles, reduced),
            splash: if show_splash && !reduced {
                Splash::new()
            } else {
                Splash::skipped()
            },
            skills_reveal: SkillsReveal::new(reduced),
            konami: KonamiTracker::new(),
            logo_clicks: LogoClickCounter::new(),
            easter_egg_until: None,
            title_swap_until: None,
            projects_scroll: 0,
            submit_requested: false,
            profile,
            config,
            config_path,
        }
    }

    pub fn go_to_page(&mut self, page: Page) {
        if self.current_page != page {
            debug!("switching to {} page", page.title());
        }
        self.current_page = page;
        self.form_active = page == Page::Contact;
        if page == Page::Skills {
            self.skills_reveal.begin();
        }
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.current_page.next());
    }

    pub fn prev_page(&mut self) {
        self.go_to_page(self.current_page.prev());
    }

    /// Flip the theme and persist the preference immediately.
    pub fn toggle_theme(&mut self) {
        self.theme = match self.theme {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        };
        info!("theme switched to {:?}", self.theme);
        self.config.set_theme_dark(self.theme == Theme::Dark);
        if let Some(ref path) = self.config_path {
            self.config.save_or_warn(path);
        }
    }

    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn reduced_motion(&self) -> bool {
        self.config.reduced_motion
    }

    pub fn easter_egg_active(&self) -> bool {
        self.easter_egg_until.is_some_and(|t| Instant::now() < t)
    }

    pub fn title_swapped(&self) -> bool {
        self.title_swap_until.is_some_and(|t| Instant::now() < t)
    }

    /// Konami sequence completed: celebrate and color the chrome for a bit.
    pub fn activate_konami_egg(&mut self) {
        info!("konami sequence entered");
        self.notifications.notify_for(
            "Konami Code Activated! You found the secret!",
            crate::app::notification::NotificationKind::Success,
            EASTER_EGG_TOAST,
        );
        self.easter_egg_until = Some(Instant::now() + EASTER_EGG_DURATION);
    }

    /// A click landed on the logo; every tenth one celebrates.
    pub fn logo_clicked(&mut self) {
        if self.logo_clicks.click() {
            self.notifications
                .success("10 clicks! You're persistent!");
            self.title_swap_until = Some(Instant::now() + TITLE_SWAP_DURATION);
        }
    }

    pub fn scroll_down(&mut self) {
        if self.current_page == Page::Projects
            && self.projects_scroll + 1 < self.profile.projects.len()
        {
            self.projects_scroll += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.projects_scroll = self.projects_scroll.saturating_sub(1);
    }

    pub fn scroll_top(&mut self) {
        self.projects_scroll = 0;
    }

    fn expire_timers(&mut self) {
        if self.easter_egg_until.is_some_and(|t| Instant::now() >= t) {
            self.easter_egg_until = None;
        }
        if self.title_swap_until.is_some_and(|t| Instant::now() >= t) {
            self.title_swap_until = None;
        }
    }
}

/// The application: state plus the submission action the contact form uses.
pub struct App {
    pub state: AppState,
    submitter: Box<dyn Submitter>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            submitter: Box::new(SimulatedSubmitter::new()),
        }
    }

    /// Swap the submission action; tests use this to make outcomes
    /// deterministic.
    pub fn with_submitter(state: AppState, submitter: Box<dyn Submitter>) -> Self {
        Self { state, submitter }
    }

    /// One step of the run loop's timer side: animations, notification
    /// lifecycle, the error-mark grace period, a requested submission, and
    /// the pending submission result.
    pub fn tick(&mut self) {
        let state = &mut self.state;
        state.splash.tick();
        state.typed.tick();
        state.notifications.tick();
        state.expire_timers();

        if state.submit_requested {
            state.submit_requested = false;
            match state.contact_form.try_submit(self.submitter.as_ref()) {
                SubmitAttempt::Invalid { message } => state.notifications.error(message),
                SubmitAttempt::Started => info!("contact submission started"),
                SubmitAttempt::AlreadySubmitting => {}
            }
        }

        if let Some(outcome) = state.contact_form.tick() {
            match outcome {
                SubmissionOutcome::Accepted => state
                    .notifications
                    .success("Thank you for your message! I will get back to you soon."),
                SubmissionOutcome::Failed => state.notifications.error(
                    "Sorry, there was an error sending your message. Please try again.",
                ),
            }
        }
    }
}
