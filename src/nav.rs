use std::{fmt, str::FromStr};

use thiserror::Error;

/// Vertical offset past which the header switches to its translucent style.
pub const SCROLL_THRESHOLD: f64 = 50.0;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Experience,
    Skills,
    Projects,
    Contact,
}

impl Section {
    /// Entries shown in the header, in order.
    pub const NAV: [Section; 4] = [
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Experience => "experience",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Experience => "Experience",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("no section with id '{0}'")]
    UnknownSection(String),
}

impl FromStr for Section {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "about" => Ok(Section::About),
            "experience" => Ok(Section::Experience),
            "skills" => Ok(Section::Skills),
            "projects" => Ok(Section::Projects),
            "contact" => Ok(Section::Contact),
            _ => Err(NavError::UnknownSection(s.to_string())),
        }
    }
}

/// Something that can bring a page region into view by its element id.
pub trait SectionScroller {
    /// Returns `false` when no element carries `id`.
    fn scroll_to(&self, id: &str) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    Scrolled,
    Missing,
}

/// Mobile menu position, mapped onto the slide transition classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuPanel {
    OnScreen,
    OffScreen,
}

impl MenuPanel {
    pub fn for_state(open: bool) -> Self {
        if open {
            MenuPanel::OnScreen
        } else {
            MenuPanel::OffScreen
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            MenuPanel::OnScreen => "translate-x-0",
            MenuPanel::OffScreen => "translate-x-full",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    pub menu_open: bool,
}

impl NavState {
    pub fn toggle(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn panel(&self) -> MenuPanel {
        MenuPanel::for_state(self.menu_open)
    }

    /// Scrolls to `id` when it resolves and closes the menu either way.
    pub fn navigate(&mut self, scroller: &impl SectionScroller, id: &str) -> NavOutcome {
        let outcome = if scroller.scroll_to(id) {
            NavOutcome::Scrolled
        } else {
            NavOutcome::Missing
        };
        self.menu_open = false;
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakePage {
        ids: Vec<&'static str>,
        scrolled: RefCell<Vec<String>>,
    }

    impl FakePage {
        fn new() -> Self {
            Self {
                ids: vec!["about", "skills", "projects", "experience", "contact"],
                scrolled: RefCell::new(Vec::new()),
            }
        }
    }

    impl SectionScroller for FakePage {
        fn scroll_to(&self, id: &str) -> bool {
            if self.ids.contains(&id) {
                self.scrolled.borrow_mut().push(id.to_string());
                true
            } else {
                false
            }
        }
    }

    #[test]
    fn test_toggle_twice_restores_offscreen() {
        let mut nav = NavState::default();
        assert_eq!(nav.panel(), MenuPanel::OffScreen);
        nav.toggle();
        assert!(nav.menu_open);
        assert_eq!(nav.panel().class(), "translate-x-0");
        nav.toggle();
        assert!(!nav.menu_open);
        assert_eq!(nav.panel().class(), "translate-x-full");
    }

    #[test]
    fn test_navigate_existing_section() {
        let page = FakePage::new();
        let mut nav = NavState { menu_open: true };
        assert_eq!(nav.navigate(&page, "projects"), NavOutcome::Scrolled);
        assert!(!nav.menu_open);
        assert_eq!(*page.scrolled.borrow(), vec!["projects".to_string()]);
    }

    #[test]
    fn test_navigate_missing_section_is_noop() {
        let page = FakePage::new();
        let mut nav = NavState::default();
        assert_eq!(nav.navigate(&page, "blog"), NavOutcome::Missing);
        assert!(!nav.menu_open);
        assert!(page.scrolled.borrow().is_empty());

        let mut open = NavState { menu_open: true };
        open.navigate(&page, "nowhere");
        assert!(!open.menu_open);
    }

    #[test]
    fn test_section_ids_round_trip() {
        for section in [
            Section::About,
            Section::Experience,
            Section::Skills,
            Section::Projects,
            Section::Contact,
        ] {
            assert_eq!(section.id().parse::<Section>(), Ok(section));
        }
        assert_eq!(
            "blog".parse::<Section>(),
            Err(NavError::UnknownSection("blog".to_string()))
        );
        let labels = Section::NAV.iter().map(|s| s.label()).collect::<Vec<_>>();
        assert_eq!(labels, vec!["About", "Skills", "Projects", "Contact"]);
    }

    #[test]
    fn test_scroll_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
    }
}
