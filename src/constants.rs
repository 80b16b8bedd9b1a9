//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Screen titles
pub const TITLE_PROFILE: &str = "Profile";
pub const TITLE_EXPERIENCE: &str = "Experience";
pub const TITLE_SKILLS: &str = "Skills";
pub const TITLE_PROJECTS: &str = "Projects";
pub const TITLE_CONTACT: &str = "Contact";

// Section headers
pub const HEADER_ABOUT: &str = "👋 About Me";
pub const HEADER_EDUCATION: &str = "🎓 Education";
pub const HEADER_ACHIEVEMENTS: &str = "🏆 Achievements";
pub const HEADER_EXPERIENCE: &str = "💼 Work Experience";
pub const HEADER_SKILLS: &str = "🛠️ Technical Skills";
pub const HEADER_FEATURED: &str = "⭐ Featured Projects";
pub const HEADER_OTHER_PROJECTS: &str = "📂 More Projects";
pub const HEADER_PROJECTS: &str = "🚀 Projects";
pub const HEADER_CONTACT: &str = "📞 Get In Touch";

pub const SUBTITLE_EXPERIENCE: &str = "My professional journey through the years";
pub const SUBTITLE_SKILLS: &str = "Technologies I work with daily and continue to master";
pub const SUBTITLE_PROJECTS: &str = "A showcase of my best work and side projects";
pub const SUBTITLE_CONTACT: &str = "Let's connect! Pick any option below to reach me directly";

// Detail views
pub const DETAIL_CURRENT: &str = "🔥 Currently Working Here";
pub const DETAIL_RESPONSIBILITIES: &str = "📝 Responsibilities & Achievements";
pub const DETAIL_TECHNOLOGIES_USED: &str = "🛠️ Technologies Used";
pub const DETAIL_FEATURED: &str = "⭐ Featured Project";
pub const DETAIL_TECHNOLOGIES: &str = "🛠️ Technologies";
pub const DETAIL_LINKS: &str = "🔗 Links";
pub const LINK_LIVE_DEMO: &str = "Live Demo";
pub const LINK_GITHUB: &str = "GitHub";

// Contact screen copy
pub const CONTACT_INTRO_TITLE: &str = "I'm always open to";
pub const CONTACT_INTRO_HIGHLIGHT: &str = "new opportunities 🚀";
pub const CONTACT_INTRO_BODY: &str =
    "Whether it's a full-time role, freelance project, or just a chat about technology, feel free to reach out!";
pub const CONTACT_FOOTER: &str = concat!("Built with ❤️ in the terminal · vitae v", env!("CARGO_PKG_VERSION"));

// Loading and empty states
pub const LOADING_PROFILE: &str = "Loading Profile...";
pub const LOADING_GENERIC: &str = "Loading...";
pub const ERROR_SCREEN_UNAVAILABLE: &str = "⚠️ Could not load this screen";
pub const ERROR_PROFILE_UNAVAILABLE: &str = "⚠️ Could not load profile";
pub const ERROR_BACKEND_HINT: &str = "Make sure the resume backend is reachable (see [api] base_url)";
pub const EMPTY_EXPERIENCE: &str = "No experience to show";
pub const EMPTY_SKILLS: &str = "No skills to show";
pub const EMPTY_PROJECTS: &str = "No projects to show";
pub const EMPTY_CONTACT: &str = "No contact details to show";
pub const BADGE_CURRENT: &str = "Current";
pub const BADGE_FEATURED: &str = "⭐ Featured";
pub const HINT_DETAILS: &str = "Enter for details →";
pub const HINT_RETRY: &str = "Press 'r' to retry";

// Contact action fallbacks
pub const ERROR_OPEN_EMAIL: &str = "Could not open email client";
pub const ERROR_OPEN_DIALER: &str = "Could not open dialer";
pub const ERROR_OPEN_LINKEDIN: &str = "Could not open LinkedIn";
pub const ERROR_OPEN_GITHUB: &str = "Could not open GitHub";
pub const ERROR_OPEN_PORTFOLIO: &str = "Could not open portfolio";
pub const ERROR_OPEN_MAPS: &str = "Could not open maps";
pub const ERROR_OPEN_LINK: &str = "Could not open link";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc', 'G' or 'q' to close";
pub const DIALOG_TITLE_HELP: &str = "📖 Help - Press 'Esc', '?' or 'h' to close";
pub const DIALOG_TITLE_ERROR: &str = "Error";
pub const DIALOG_TITLE_NOTICE: &str = "Notice";
pub const NO_LOGS: &str = "No logs available";
pub const LOG_FILE_NOTE: &str = "Also written to";

// Environment
pub const ENV_API_URL: &str = "VITAE_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const MAX_TIMEOUT_SECS: u64 = 300;

// Animation defaults
/// Default reveal duration in milliseconds
pub const REVEAL_DEFAULT_DURATION_MS: u64 = 600;
/// Default reveal displacement in logical units
pub const REVEAL_DEFAULT_OFFSET: f32 = 30.0;
/// Logical units per terminal column when shifting a block
pub const UNITS_PER_COLUMN: f32 = 5.0;
/// Logical units per terminal row when shifting a block
pub const UNITS_PER_ROW: f32 = 15.0;
/// Maximum reveal duration accepted from configuration
pub const REVEAL_MAX_DURATION_MS: u64 = 5_000;

// UI Layout Constants
/// Height of the tab bar in rows
pub const TAB_BAR_HEIGHT: u16 = 3;
/// Height of the status bar in rows
pub const STATUS_BAR_HEIGHT: u16 = 1;
/// Tags shown on a timeline card before collapsing into "+N"
pub const TIMELINE_TAG_LIMIT: usize = 4;
/// Tags shown on a project card
pub const PROJECT_CARD_TAG_LIMIT: usize = 3;
/// Spinner frame length in milliseconds
pub const SPINNER_FRAME_MS: u64 = 80;
/// Entrance animations are finished by this many milliseconds after mount
pub const ANIMATION_HORIZON_MS: u64 = 4_000;
