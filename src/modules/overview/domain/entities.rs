use serde::Deserialize;

/// Record counts reported by `GET /overview`. Missing counters read as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Overview {
    pub blogs: u64,
    pub projects: u64,
    pub skills: u64,
    pub experiences: u64,
    pub contacts: u64,
    pub messages: u64,
}

impl Overview {
    /// `(title, count, icon)` per dashboard card, in display order.
    pub fn cards(&self) -> [(&'static str, u64, &'static str); 6] {
        [
            ("Blogs", self.blogs, "fa-solid fa-chart-line"),
            ("Projects", self.projects, "fa-solid fa-folder"),
            ("Skills", self.skills, "fa-solid fa-code"),
            ("Experiences", self.experiences, "fa-solid fa-briefcase"),
            ("Contacts", self.contacts, "fa-solid fa-users"),
            ("Messages", self.messages, "fa-solid fa-envelope"),
        ]
    }
}
