//! Literal portfolio content.
//!
//! Everything the page displays lives here as `'static` data so components
//! stay purely presentational.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use crate::components::icons::IconKind;

pub const OWNER_NAME: &str = "Ashish Rathod";
pub const TAGLINE: &str = "Full Stack Developer & Information Technology Student";
pub const LOGO_TEXT: &str = "Portfolio";
pub const PAGE_TITLE: &str = "Ashish Rathod | Portfolio";

pub const PROFILE_IMAGE: &str = "/assets/profile.svg";

pub const CV_DOWNLOAD_URL: &str = "https://drive.google.com/uc?export=download&id=16zYBDGfjnBkcjpXO73vvgt4fVPDIqR3_";
pub const CV_VIEW_URL: &str = "https://drive.google.com/file/d/16zYBDGfjnBkcjpXO73vvgt4fVPDIqR3_/view";
pub const CV_FILENAME: &str = "Ashish_Rathod_CV.pdf";

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "I'm a passionate Information Technology student at Dharmsinh Desai University with a \
     strong foundation in full-stack development. I specialize in modern web technologies \
     and love creating innovative solutions that solve real-world problems.",
    "With a current CPI of 7.53/10.00, I'm constantly learning and exploring new technologies. \
     I've participated in hackathons and developed several full-stack projects using MERN stack, \
     React.js, and Spring Boot.",
];

pub const CONTACT_HEADING: &str = "Let's Connect";
pub const CONTACT_TEXT: &str = "Ready to bring your next project to life? Let's create something amazing together.";
pub const CONTACT_EMAIL: &str = "ashishrathod53839@gmail.com";
pub const FOOTER_TEXT: &str = "\u{a9} 2025 Ashish Rathod. All rights reserved.";

/// An icon link in the hero banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: IconKind,
    pub label: &'static str,
    pub href: &'static str,
}

impl SocialLink {
    /// Whether the link leaves the site (and should open in a new tab).
    #[must_use]
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http")
    }
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink { icon: IconKind::Github, label: "GitHub", href: "https://github.com/ashishrathod9" },
    SocialLink {
        icon: IconKind::Linkedin,
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/ashish-rathod-519b54316/",
    },
    SocialLink { icon: IconKind::Mail, label: "Email", href: "mailto:ashishrathod53839@gmail.com" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillCategory {
    pub icon: IconKind,
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_CATEGORIES: [SkillCategory; 3] = [
    SkillCategory {
        icon: IconKind::Code,
        title: "Programming Languages",
        skills: &["C", "C++", "Java", "JavaScript"],
    },
    SkillCategory {
        icon: IconKind::Zap,
        title: "Web Technologies",
        skills: &["HTML", "CSS", "React.js", "Tailwind CSS"],
    },
    SkillCategory {
        icon: IconKind::Palette,
        title: "Backend & Database",
        skills: &["Spring Boot", "Node.js", "MySQL", "MongoDB", ".NET"],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub code_url: &'static str,
    pub live_url: Option<&'static str>,
}

pub const PROJECTS: [Project; 6] = [
    Project {
        title: "SSCOverflow",
        description: "Student-focused Q&A platform inspired by Stack Overflow with question posting, voting, \
                      badge system, and real-time chat",
        tech: &[".NET Core", "React.js"],
        code_url: "https://github.com/ashishrathod9/SSCOverflow",
        live_url: None,
    },
    Project {
        title: "ConnectUs",
        description: "Service marketplace platform connecting customers with local service providers for home services",
        tech: &["MERN Stack", "Tailwind CSS"],
        code_url: "https://github.com/ashishrathod9/ConnectUs",
        live_url: Some("https://connect-us-xi.vercel.app/"),
    },
    Project {
        title: "CampusWeb Builder",
        description: "Dynamic website builder for educational institutions with student portals and course management",
        tech: &["MERN Stack", "Tailwind CSS"],
        code_url: "https://github.com/ashishrathod9/CampusWeb-Builder",
        live_url: Some("https://websitecreator-navy.vercel.app/"),
    },
    Project {
        title: "Project-Pilot",
        description: "Streamlined project management platform with team management, issue tracking, and commenting features",
        tech: &["React.js", "shadcn.ui", "Spring Boot"],
        code_url: "https://github.com/ashishrathod9/Project-Pilot",
        live_url: None,
    },
    Project {
        title: "VidBot",
        description: "AI-powered platform generating animated 3D math videos based on user prompts \
                      (DUHacks 4.0 Top 5 Finalist)",
        tech: &["AI", "3D Animation", "Mathematics"],
        code_url: "https://github.com/ashishrathod9/VidBot",
        live_url: None,
    },
    Project {
        title: "Crop Detection Website",
        description: "Agriculture-themed project detecting suitable crops based on soil conditions \
                      (DA-IICT Hackathon 2024)",
        tech: &["Agriculture", "Machine Learning", "Web Development"],
        code_url: "https://github.com/ashishrathod9/Crop-Recommendation-System",
        live_url: None,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactEntry {
    pub icon: IconKind,
    pub title: &'static str,
    pub value: &'static str,
}

pub const CONTACTS: [ContactEntry; 5] = [
    ContactEntry { icon: IconKind::Mail, title: "Email", value: CONTACT_EMAIL },
    ContactEntry { icon: IconKind::Linkedin, title: "LinkedIn", value: "linkedin.com/in/ashish-rathod-519b54316" },
    ContactEntry { icon: IconKind::Github, title: "GitHub", value: "github.com/ashishrathod9" },
    ContactEntry { icon: IconKind::Code, title: "LeetCode", value: "leetcode.com/your-profile" },
    ContactEntry { icon: IconKind::Zap, title: "Phone", value: "+91 6353334263" },
];

/// `mailto:` target for the "Get In Touch" button.
#[must_use]
pub fn contact_mailto() -> String {
    format!("mailto:{CONTACT_EMAIL}")
}
