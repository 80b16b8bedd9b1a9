use crate::entities::{Achievement, Education, Experience, Profile, Project, SkillGroups};

/// Token identifying one visit of a screen. Load results carrying an older
/// token belong to a screen that is no longer mounted.
pub type MountId = u64;

/// Top-level screens, in tab bar order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Profile,
    Experience,
    Skills,
    Projects,
    Contact,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Profile, Tab::Experience, Tab::Skills, Tab::Projects, Tab::Contact];

    pub fn title(self) -> &'static str {
        use crate::constants::{TITLE_CONTACT, TITLE_EXPERIENCE, TITLE_PROFILE, TITLE_PROJECTS, TITLE_SKILLS};
        match self {
            Tab::Profile => TITLE_PROFILE,
            Tab::Experience => TITLE_EXPERIENCE,
            Tab::Skills => TITLE_SKILLS,
            Tab::Projects => TITLE_PROJECTS,
            Tab::Contact => TITLE_CONTACT,
        }
    }

    /// Configuration key, as used by `[ui] default_tab`
    pub fn key(self) -> &'static str {
        match self {
            Tab::Profile => "profile",
            Tab::Experience => "experience",
            Tab::Skills => "skills",
            Tab::Projects => "projects",
            Tab::Contact => "contact",
        }
    }

    pub fn from_key(key: &str) -> Option<Tab> {
        Tab::ALL.into_iter().find(|tab| tab.key().eq_ignore_ascii_case(key.trim()))
    }

    pub fn index(self) -> usize {
        Tab::ALL.iter().position(|tab| *tab == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Tab> {
        Tab::ALL.get(index).copied()
    }

    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn previous(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

/// Everything the home screen needs, fetched together
#[derive(Debug, Clone)]
pub struct HomeData {
    pub profile: Profile,
    pub achievements: Vec<Achievement>,
    pub education: Vec<Education>,
}

/// Result of a screen's fetch-on-mount
#[derive(Debug, Clone)]
pub enum ScreenData {
    Home(Box<HomeData>),
    Experience(Vec<Experience>),
    Skills(SkillGroups),
    Projects(Vec<Project>),
    Contact(Box<Profile>),
}

impl ScreenData {
    pub fn tab(&self) -> Tab {
        match self {
            ScreenData::Home(_) => Tab::Profile,
            ScreenData::Experience(_) => Tab::Experience,
            ScreenData::Skills(_) => Tab::Skills,
            ScreenData::Projects(_) => Tab::Projects,
            ScreenData::Contact(_) => Tab::Contact,
        }
    }

    /// Short summary for the logs
    pub fn describe(&self) -> String {
        match self {
            ScreenData::Home(home) => format!(
                "profile '{}', {} achievements, {} education entries",
                home.profile.full_name,
                home.achievements.len(),
                home.education.len()
            ),
            ScreenData::Experience(items) => format!("{} experiences", items.len()),
            ScreenData::Skills(groups) => format!("{} skill categories", groups.len()),
            ScreenData::Projects(items) => format!("{} projects", items.len()),
            ScreenData::Contact(profile) => format!("contact details for '{}'", profile.full_name),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    SwitchTab(Tab),
    NextTab,
    PreviousTab,
    Reload,

    // Data loading
    ScreenLoaded {
        mount: MountId,
        data: ScreenData,
    },
    ScreenFailed {
        mount: MountId,
        tab: Tab,
        error: String,
    },

    // Outbound
    OpenLink {
        url: String,
        fallback: String,
    },
    HapticTap,

    // UI operations
    ShowDialog(DialogType),
    HideDialog,
    CycleIconTheme,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogType {
    Error(String),
    /// Dismissible notice, e.g. a link the platform could not open
    Notice(String),
    Help,
    Logs,
}
