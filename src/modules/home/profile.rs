//! Fixed profile content shown on the public site.

pub const NAME: &str = "Arman Mia";
pub const FOOTER_ROLE: &str = "Web Developer";

/// Rotated through by the hero headline.
pub const ROLES: [&str; 4] = [
    "Frontend Developer",
    "JavaScript Developer",
    "React JS Developer",
    "Web Developer",
];

pub const BIO: &str = "I am a motivated and adaptable individual with a passion for learning \
and delivering high-quality results. With a positive attitude and growth mindset, I am eager \
to take on challenges and make a meaningful impact.";

pub const RESUME: &str = "/arman-mia-resume.pdf";
pub const PORTRAIT: &str = "/static/not-found.svg";

pub struct Social {
    pub href: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
}

pub const HERO_SOCIALS: [Social; 3] = [
    Social {
        href: "https://www.facebook.com/arman2mia",
        icon: "fa-brands fa-facebook-f",
        label: "Facebook",
    },
    Social {
        href: "https://www.linkedin.com/in/arman-miaa",
        icon: "fa-brands fa-linkedin-in",
        label: "LinkedIn",
    },
    Social {
        href: "https://wa.me/8801736550601",
        icon: "fa-brands fa-whatsapp",
        label: "WhatsApp",
    },
];

/// `(href, font-awesome brand icon)` pairs for the footer.
pub const FOOTER_SOCIALS: &[(&str, &str)] = &[
    ("https://www.facebook.com/arman2mia", "fa-facebook-f"),
    ("https://www.linkedin.com/in/arman-miaa", "fa-linkedin-in"),
    ("https://github.com/arman-miaa", "fa-github"),
    ("https://discord.com/users/1080759260260089857", "fa-discord"),
];

pub const EMAIL: &str = "arman-miaa36@gmail.com";

pub const CONTACT_LINKS: [Social; 6] = [
    Social {
        href: "mailto:arman-miaa36@gmail.com",
        icon: "fa-solid fa-envelope",
        label: EMAIL,
    },
    Social {
        href: "tel:+8801736550601",
        icon: "fa-solid fa-phone-volume",
        label: "+8801736-550-601",
    },
    Social {
        href: "https://www.facebook.com/arman2mia",
        icon: "fa-brands fa-facebook",
        label: "facebook.com/arman2mia",
    },
    Social {
        href: "https://m.me/arman2mia",
        icon: "fa-brands fa-facebook-messenger",
        label: "m.me/arman2mia",
    },
    Social {
        href: "https://www.linkedin.com/in/arman-miaa",
        icon: "fa-brands fa-linkedin",
        label: "linkedin.com/in/arman-mia-am",
    },
    Social {
        href: "https://github.com/arman-miaa",
        icon: "fa-brands fa-square-github",
        label: "github.com/arman-miaa",
    },
];

pub const ABOUT: &str = "a passionate web developer specializing in frontend, backend, and \
full-stack development. I enjoy creating interactive, dynamic web applications that offer \
seamless user experiences.";

/// `(icon, title, text)` highlight boxes beside the about text.
pub const ABOUT_BOXES: [(&str, &str, &str); 3] = [
    ("fa-brands fa-react", "Frontend", "React, Next.js, Tailwind CSS"),
    ("fa-brands fa-node-js", "Backend", "Node.js, Express"),
    ("fa-solid fa-database", "Full Stack", "MongoDB, PostgreSQL"),
];
