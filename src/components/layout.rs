// ABOUTME: Main layout: header, page body, footer menu bar, and overlays

use ratatui::{
    prelude::*,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::{
    about::AboutComponent, contact_view::ContactComponent, help::HelpComponent,
    home::HomeComponent, navbar::{NavbarComponent, HEADER_HEIGHT}, projects::ProjectsComponent,
    skills::SkillsComponent, splash::SplashComponent, toast::ToastComponent,
};
use crate::app::state::{AppState, Page};

pub struct LayoutComponent {
    navbar: NavbarComponent,
    home: HomeComponent,
    about: AboutComponent,
    skills: SkillsComponent,
    projects: ProjectsComponent,
    contact: ContactComponent,
    toast: ToastComponent,
    splash: SplashComponent,
    help: HelpComponent,
}

impl LayoutComponent {
    pub fn new() -> Self {
        Self {
            navbar: NavbarComponent::new(),
            home: HomeComponent::new(),
            about: AboutComponent::new(),
            skills: SkillsComponent::new(),
            projects: ProjectsComponent::new(),
            contact: ContactComponent::new(),
            toast: ToastComponent::new(),
            splash: SplashComponent::new(),
            help: HelpComponent::new(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        // The splash owns the whole screen until it finishes fading.
        if !state.splash.is_done() {
            self.splash.render(frame, frame.size(), state);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT), // Navigation bar
                Constraint::Min(0),                // Page body
                Constraint::Length(3),             // Bottom menu bar
            ])
            .split(frame.size());

        self.navbar.render(frame, chunks[0], state);

        match state.current_page {
            Page::Home => self.home.render(frame, chunks[1], state),
            Page::About => self.about.render(frame, chunks[1], state),
            Page::Skills => self.skills.render(frame, chunks[1], state),
            Page::Projects => self.projects.render(frame, chunks[1], state),
            Page::Contact => self.contact.render(frame, chunks[1], state),
        }

        self.render_menu_bar(frame, chunks[2], state);

        // Overlays, toast on top of everything but help.
        self.toast.render(frame, frame.size(), state);
        if state.help_visible {
            self.help.render(frame, frame.size());
        }
    }

    fn render_menu_bar(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let menu_text = if state.current_page == Page::Contact && state.form_active {
            "[Tab] next field  [Enter] next/send  [Esc] leave form  [Ctrl+C] quit"
        } else {
            "[h/l] pages  [1-5] jump  [t] theme  [x] dismiss  [?] help  [q] quit"
        };

        let menu = Paragraph::new(menu_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);

        frame.render_widget(menu, area);
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}
