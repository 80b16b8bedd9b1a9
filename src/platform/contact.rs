//! Contact actions derived from the profile.

use crate::constants::{
    ERROR_OPEN_DIALER, ERROR_OPEN_EMAIL, ERROR_OPEN_GITHUB, ERROR_OPEN_LINKEDIN, ERROR_OPEN_MAPS,
    ERROR_OPEN_PORTFOLIO,
};
use crate::entities::Profile;
use crate::icons::ContactIcon;

/// One tappable row on the contact screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactAction {
    pub id: &'static str,
    pub icon: ContactIcon,
    pub title: &'static str,
    pub subtitle: String,
    pub url: String,
    /// Shown when the platform cannot open `url`
    pub fallback: &'static str,
}

/// Build the contact actions for `profile`, in display order.
///
/// Actions whose target field is blank are omitted.
pub fn contact_actions(profile: &Profile) -> Vec<ContactAction> {
    let email = profile.email.trim();
    let phone = profile.phone.trim();
    let linked_in = profile.linked_in.trim();
    let github = profile.github.trim();
    let portfolio = profile.portfolio.trim();
    let location = profile.location.trim();

    let candidates = [
        (
            !email.is_empty(),
            ContactAction {
                id: "email",
                icon: ContactIcon::Email,
                title: "Send Email",
                subtitle: email.to_string(),
                url: format!("mailto:{}", email),
                fallback: ERROR_OPEN_EMAIL,
            },
        ),
        (
            !phone.is_empty(),
            ContactAction {
                id: "phone",
                icon: ContactIcon::Phone,
                title: "Call Me",
                subtitle: phone.to_string(),
                url: format!("tel:{}", phone),
                fallback: ERROR_OPEN_DIALER,
            },
        ),
        (
            !linked_in.is_empty(),
            ContactAction {
                id: "linkedin",
                icon: ContactIcon::LinkedIn,
                title: "LinkedIn Profile",
                subtitle: "Connect with me".to_string(),
                url: linked_in.to_string(),
                fallback: ERROR_OPEN_LINKEDIN,
            },
        ),
        (
            !github.is_empty(),
            ContactAction {
                id: "github",
                icon: ContactIcon::GitHub,
                title: "GitHub Profile",
                subtitle: "Check my code".to_string(),
                url: github.to_string(),
                fallback: ERROR_OPEN_GITHUB,
            },
        ),
        (
            !portfolio.is_empty(),
            ContactAction {
                id: "portfolio",
                icon: ContactIcon::Portfolio,
                title: "Portfolio Website",
                subtitle: portfolio.to_string(),
                url: portfolio.to_string(),
                fallback: ERROR_OPEN_PORTFOLIO,
            },
        ),
        (
            !location.is_empty(),
            ContactAction {
                id: "location",
                icon: ContactIcon::Location,
                title: "Location",
                subtitle: location.to_string(),
                url: format!("https://maps.google.com/?q={}", urlencoding::encode(location)),
                fallback: ERROR_OPEN_MAPS,
            },
        ),
    ];

    candidates
        .into_iter()
        .filter_map(|(present, action)| present.then_some(action))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_is_url_encoded() {
        let profile = Profile {
            location: "San Francisco, CA".to_string(),
            ..Profile::default()
        };
        let actions = contact_actions(&profile);
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].url, "https://maps.google.com/?q=San%20Francisco%2C%20CA");
    }
}
