use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub joined: String,
}

/// Who is looking at the dashboard. Passed around explicitly; there is no global login state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    user: Option<Profile>,
}

impl Session {
    pub fn signed_in(profile: Profile) -> Self {
        Self {
            user: Some(profile),
        }
    }

    pub fn signed_out() -> Self {
        Self { user: None }
    }

    pub fn user(&self) -> Option<&Profile> {
        self.user.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}
