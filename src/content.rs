//! Literal portfolio content.
//!
//! Everything rendered on the page comes from the constants in this module.
//! Lists are slices so the author's ordering is the display ordering.

use chrono::{DateTime, Datelike};

pub const OWNER: &str = "Gaurav Nilawar";
pub const TAGLINE: &str = "Full-Stack Developer & CS Student";
pub const EMAIL: &str = "nilawargaurav@gmail.com";
pub const PHONE: &str = "+91-9922874715";
pub const PHONE_URI: &str = "tel:+919922874715";
pub const LOCATION: &str = "Nagpur, Maharashtra, India";
pub const GITHUB: &str = "https://github.com/gaurav1Nn";
pub const LINKEDIN: &str = "https://www.linkedin.com/in/gaurav-nilawar-99185b259/";
pub const LEETCODE: &str = "https://leetcode.com/u/gauravnilawar26/";

/// Line icons drawn as inline SVG on a 24x24 stroke grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Award,
    Brain,
    Calendar,
    Code,
    Database,
    ExternalLink,
    Github,
    Globe,
    Linkedin,
    Mail,
    MapPin,
    Menu,
    Phone,
    Send,
    Smartphone,
    Trophy,
    TrendingUp,
    Users,
    X,
    Zap,
}

impl Icon {
    pub const ALL: [Icon; 20] = [
        Icon::Award,
        Icon::Brain,
        Icon::Calendar,
        Icon::Code,
        Icon::Database,
        Icon::ExternalLink,
        Icon::Github,
        Icon::Globe,
        Icon::Linkedin,
        Icon::Mail,
        Icon::MapPin,
        Icon::Menu,
        Icon::Phone,
        Icon::Send,
        Icon::Smartphone,
        Icon::Trophy,
        Icon::TrendingUp,
        Icon::Users,
        Icon::X,
        Icon::Zap,
    ];

    /// Path data for the icon's strokes.
    pub fn paths(&self) -> &'static [&'static str] {
        match self {
            Icon::Award => &[
                "M18 8a6 6 0 1 1-12 0a6 6 0 1 1 12 0",
                "M15.477 12.89 17 22l-5-3-5 3 1.523-9.11",
            ],
            Icon::Brain => &[
                "M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18Z",
                "M12 5a3 3 0 1 1 5.997.125 4 4 0 0 1 2.526 5.77 4 4 0 0 1-.556 6.588A4 4 0 1 1 12 18Z",
                "M12 5v13",
            ],
            Icon::Calendar => &[
                "M8 2v4",
                "M16 2v4",
                "M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "M3 10h18",
            ],
            Icon::Code => &["m16 18 6-6-6-6", "m8 6-6 6 6 6"],
            Icon::Database => &[
                "M3 5c0 1.66 4 3 9 3s9-1.34 9-3-4-3-9-3-9 1.34-9 3",
                "M3 5v14c0 1.66 4 3 9 3s9-1.34 9-3V5",
                "M3 12c0 1.66 4 3 9 3s9-1.34 9-3",
            ],
            Icon::ExternalLink => &[
                "M15 3h6v6",
                "M10 14 21 3",
                "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6",
            ],
            Icon::Github => &[
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
                "M9 18c-4.51 2-5-2-7-2",
            ],
            Icon::Globe => &[
                "M22 12a10 10 0 1 1-20 0a10 10 0 1 1 20 0",
                "M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20",
                "M2 12h20",
            ],
            Icon::Linkedin => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M6 4a2 2 0 1 1-4 0a2 2 0 1 1 4 0",
            ],
            Icon::Mail => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
            ],
            Icon::MapPin => &[
                "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z",
                "M15 10a3 3 0 1 1-6 0a3 3 0 1 1 6 0",
            ],
            Icon::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            Icon::Phone => &[
                "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
            ],
            Icon::Send => &["m22 2-7 20-4-9-9-4Z", "M22 2 11 13"],
            Icon::Smartphone => &[
                "M7 2h10a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z",
                "M12 18h.01",
            ],
            Icon::Trophy => &[
                "M6 9H4.5a2.5 2.5 0 0 1 0-5H6",
                "M18 9h1.5a2.5 2.5 0 0 0 0-5H18",
                "M4 22h16",
                "M10 14.66V17c0 .55-.47.98-.97 1.21C7.85 18.75 7 20.24 7 22",
                "M14 14.66V17c0 .55.47.98.97 1.21C16.15 18.75 17 20.24 17 22",
                "M18 2H6v7a6 6 0 0 0 12 0V2Z",
            ],
            Icon::TrendingUp => &["m22 7-8.5 8.5-5-5L2 17", "M16 7h6v6"],
            Icon::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M13 7a4 4 0 1 1-8 0a4 4 0 1 1 8 0",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
            Icon::X => &["M18 6 6 18", "m6 6 12 12"],
            Icon::Zap => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
        }
    }
}

/// Where a counter's unit sits relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affix {
    None,
    Prefix(&'static str),
    Suffix(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatCounter {
    pub target: f64,
    pub affix: Affix,
    pub label: &'static str,
    pub icon: Icon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillItem {
    pub name: &'static str,
    /// Proficiency in percent, `0..=100`.
    pub level: u8,
}

impl SkillItem {
    /// CSS width of the filled bar.
    pub fn bar_width(&self) -> String {
        format!("{}%", self.level.min(100))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceCategory {
    pub ordinal: &'static str,
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolGroup {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub employer: &'static str,
    pub title: &'static str,
    pub employment_type: &'static str,
    pub duration: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
    pub skills: &'static [&'static str],
    pub icon: Icon,
}

/// Which side of the timeline spine a card sits on (desktop layout).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineSide {
    Left,
    Right,
}

impl TimelineSide {
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            TimelineSide::Left
        } else {
            TimelineSide::Right
        }
    }

    /// Horizontal offset, in pixels, the card slides in from.
    pub fn entry_offset(&self) -> i32 {
        match self {
            TimelineSide::Left => -100,
            TimelineSide::Right => 100,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    /// Live deployment, when there is one.
    pub link: Option<&'static str>,
    pub source: &'static str,
    pub featured: bool,
    pub award: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub accent: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Icon,
}

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "I'm a passionate Computer Science Engineering student at Ramdeobaba University, specializing in Data Science with a strong foundation in full-stack development and machine learning.",
    "My journey includes winning the ETHSF Hackathon 2025 in San Francisco, building innovative blockchain applications, and solving 300+ coding problems. I love creating solutions that make a real impact.",
];

pub const STATS: &[StatCounter] = &[
    StatCounter {
        target: 300.0,
        affix: Affix::Suffix("+"),
        label: "LeetCode Problems",
        icon: Icon::Code,
    },
    StatCounter {
        target: 8.23,
        affix: Affix::None,
        label: "CGPA",
        icon: Icon::Award,
    },
    StatCounter {
        target: 3.0,
        affix: Affix::None,
        label: "Major Projects",
        icon: Icon::Users,
    },
    StatCounter {
        target: 2000.0,
        affix: Affix::Prefix("$"),
        label: "Hackathon Prize",
        icon: Icon::Trophy,
    },
];

pub const CORE_SKILLS: &[SkillItem] = &[
    SkillItem {
        name: "Full-Stack Development",
        level: 90,
    },
    SkillItem {
        name: "Data Structures & Algorithms",
        level: 85,
    },
    SkillItem {
        name: "Machine Learning",
        level: 80,
    },
    SkillItem {
        name: "Blockchain Development",
        level: 75,
    },
];

pub const RECENT_ACHIEVEMENT: Achievement = Achievement {
    title: "ETHSF Hackathon 2025 Winner",
    description: "Won for developing an innovative decentralized solution under ZetaChain's problem statement, showcasing expertise in blockchain technology.",
    icon: Icon::Trophy,
    accent: "text-yellow-400",
};

pub const RECENT_ACHIEVEMENT_DETAIL: &str = "San Francisco • $2,000 Prize";

pub const SERVICES: &[ServiceCategory] = &[
    ServiceCategory {
        ordinal: "01",
        icon: Icon::Code,
        title: "Frontend Development",
        description: "Building responsive and interactive user interfaces with modern frameworks and libraries.",
        technologies: &["React.js", "TypeScript", "Tailwind CSS", "JavaScript"],
    },
    ServiceCategory {
        ordinal: "02",
        icon: Icon::Database,
        title: "Backend Development",
        description: "Creating robust server-side applications and RESTful APIs with secure authentication.",
        technologies: &["Node.js", "Express.js", "MongoDB", "PostgreSQL"],
    },
    ServiceCategory {
        ordinal: "03",
        icon: Icon::Brain,
        title: "Machine Learning",
        description: "Developing intelligent systems and predictive models using Python and ML frameworks.",
        technologies: &["Python", "scikit-learn", "Flask", "Random Forest"],
    },
    ServiceCategory {
        ordinal: "04",
        icon: Icon::Globe,
        title: "Blockchain Development",
        description: "Building decentralized applications and smart contracts on various blockchain platforms.",
        technologies: &["Sui Blockchain", "Move", "Web3", "Smart Contracts"],
    },
    ServiceCategory {
        ordinal: "05",
        icon: Icon::Zap,
        title: "Problem Solving",
        description: "Strong algorithmic thinking with 300+ problems solved across competitive programming platforms.",
        technologies: &["C++", "Java", "Data Structures", "Algorithms"],
    },
    ServiceCategory {
        ordinal: "06",
        icon: Icon::Smartphone,
        title: "Full-Stack Integration",
        description: "End-to-end application development from database design to user interface implementation.",
        technologies: &["MERN Stack", "JWT", "RESTful APIs", "Git"],
    },
];

pub const TOOLBOX: &[ToolGroup] = &[
    ToolGroup {
        title: "Languages",
        items: &["C++", "Java", "JavaScript", "TypeScript", "Python", "SQL"],
    },
    ToolGroup {
        title: "Frontend",
        items: &["React.js", "HTML5", "Tailwind CSS"],
    },
    ToolGroup {
        title: "Backend",
        items: &["Node.js", "Express.js", "MongoDB", "PostgreSQL"],
    },
    ToolGroup {
        title: "Tools",
        items: &["VS Code", "Git", "GitHub", "Postman", "Cursor"],
    },
];

pub const EXPERIENCES: &[ExperienceEntry] = &[ExperienceEntry {
    employer: "Alignerr",
    title: "Machine Learning Model Tester",
    employment_type: "Freelance",
    duration: "November 2024 - April 2025",
    location: "Remote",
    description: "Stress-tested ML models using advanced prompt engineering and edge-case scenarios. Reported failure patterns and collaborated with developers to refine model behavior.",
    achievements: &[
        "Improved model efficiency and robustness by approximately 15%",
        "Developed comprehensive testing frameworks for ML model validation",
        "Collaborated with cross-functional teams to enhance model performance",
    ],
    skills: &[
        "Machine Learning",
        "Python",
        "Model Testing",
        "Prompt Engineering",
    ],
    icon: Icon::Award,
}];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Campus Connect",
        category: "Full-Stack Development",
        description: "A peer-to-peer collaboration platform where students share coding achievements, host technical discussions, and access AI-generated learning roadmaps to foster coding excellence.",
        image: "https://images.pexels.com/photos/3184291/pexels-photo-3184291.jpeg?auto=compress&cs=tinysrgb&w=800",
        technologies: &["React.js", "Node.js", "MongoDB", "JWT", "Tailwind CSS"],
        link: Some("https://campus-connect-eight-gray.vercel.app/"),
        source: "https://github.com/gaurav1Nn/campus-connect",
        featured: true,
        award: None,
    },
    Project {
        title: "SuiSplit",
        category: "Blockchain Development",
        description: "Decentralized bill-splitting dApp with smart contracts on Sui blockchain, enabling secure crypto settlements with immutable transaction records.",
        image: "https://images.pexels.com/photos/844124/pexels-photo-844124.jpeg?auto=compress&cs=tinysrgb&w=800",
        technologies: &["React.js", "TypeScript", "Tailwind CSS", "Sui Blockchain", "Move"],
        link: Some("https://sui-split.vercel.app/"),
        source: "https://github.com/gaurav1Nn/suisplit",
        featured: true,
        award: Some("ETHSF Hackathon Winner"),
    },
    Project {
        title: "Medisen",
        category: "Machine Learning",
        description: "Medical assistant web application predicting top 5 diseases from user symptoms using Random Forest Classifier with 80%+ accuracy.",
        image: "https://images.pexels.com/photos/4386466/pexels-photo-4386466.jpeg?auto=compress&cs=tinysrgb&w=800",
        technologies: &["React.js", "Flask", "Python", "Random Forest", "scikit-learn"],
        link: None,
        source: "https://github.com/gaurav1Nn/Medisen",
        featured: false,
        award: None,
    },
];

pub fn featured_projects() -> impl Iterator<Item = &'static Project> {
    PROJECTS.iter().filter(|p| p.featured)
}

pub fn other_projects() -> impl Iterator<Item = &'static Project> {
    PROJECTS.iter().filter(|p| !p.featured)
}

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        title: "ETHSF Hackathon 2025 Winner",
        description: "Won $2,000 prize for innovative decentralized solution",
        icon: Icon::Award,
        accent: "text-yellow-400",
    },
    Achievement {
        title: "LeetCode Problem Solver",
        description: "300+ problems solved with consistent practice",
        icon: Icon::Award,
        accent: "text-green-400",
    },
    Achievement {
        title: "Competitive Programming",
        description: "Max rating: 1640 (CodeChef), 1231 (Codeforces)",
        icon: Icon::Award,
        accent: "text-blue-400",
    },
];

pub const SOCIALS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        href: GITHUB,
        icon: Icon::Github,
    },
    SocialLink {
        label: "LinkedIn",
        href: LINKEDIN,
        icon: Icon::Linkedin,
    },
    SocialLink {
        label: "LeetCode",
        href: LEETCODE,
        icon: Icon::ExternalLink,
    },
];

pub const WHAT_I_BRING: &[&str] = &[
    "Strong foundation in Computer Science with 8.23 CGPA",
    "Proven problem-solving skills with 300+ LeetCode problems",
    "Hackathon winner with practical project experience",
    "Full-stack development and machine learning expertise",
];

pub const CONTACT_INTRO: &str = "I'm actively seeking internship and full-time opportunities. Let's discuss how we can work together to build something amazing.";

pub const CONTACT_PITCH: &str = "I'm currently in my final year of Computer Science Engineering at Ramdeobaba University and actively looking for opportunities to apply my skills in real-world projects. Whether it's an internship, full-time role, or freelance project, I'd love to hear from you.";

/// Label and placeholder for one contact form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldCopy {
    pub label: &'static str,
    pub placeholder: &'static str,
}

/// Form copy in input order: name, email, subject, message.
pub const CONTACT_FIELDS: [FieldCopy; 4] = [
    FieldCopy {
        label: "Full Name",
        placeholder: "Your Name",
    },
    FieldCopy {
        label: "Email Address",
        placeholder: "your@email.com",
    },
    FieldCopy {
        label: "Subject",
        placeholder: "Internship Opportunity / Job Discussion",
    },
    FieldCopy {
        label: "Message",
        placeholder: "Tell me about the opportunity or project you'd like to discuss...",
    },
];

const FALLBACK_YEAR: i32 = 2025;

/// Copyright year for the footer, taken from the build timestamp.
pub fn copyright_year() -> i32 {
    year_of(env!("BUILD_TIME"))
}

fn year_of(timestamp: &str) -> i32 {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|t| t.year())
        .unwrap_or(FALLBACK_YEAR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_targets_and_affixes() {
        let rendered = STATS
            .iter()
            .map(|s| (s.label, s.target, s.affix))
            .collect::<Vec<_>>();
        assert_eq!(rendered[0], ("LeetCode Problems", 300.0, Affix::Suffix("+")));
        assert_eq!(rendered[1], ("CGPA", 8.23, Affix::None));
        assert_eq!(rendered[3], ("Hackathon Prize", 2000.0, Affix::Prefix("$")));
    }

    #[test]
    fn test_project_partition_keeps_order() {
        let featured = featured_projects().map(|p| p.title).collect::<Vec<_>>();
        let other = other_projects().map(|p| p.title).collect::<Vec<_>>();
        assert_eq!(featured, vec!["Campus Connect", "SuiSplit"]);
        assert_eq!(other, vec!["Medisen"]);
        assert_eq!(featured.len() + other.len(), PROJECTS.len());
    }

    #[test]
    fn test_list_attributes_preserve_author_order() {
        assert_eq!(
            SERVICES[0].technologies,
            &["React.js", "TypeScript", "Tailwind CSS", "JavaScript"]
        );
        assert_eq!(
            EXPERIENCES[0].achievements[0],
            "Improved model efficiency and robustness by approximately 15%"
        );
        let ordinals = SERVICES.iter().map(|s| s.ordinal).collect::<Vec<_>>();
        assert_eq!(ordinals, vec!["01", "02", "03", "04", "05", "06"]);
    }

    #[test]
    fn test_timeline_sides_alternate() {
        assert_eq!(TimelineSide::for_index(0), TimelineSide::Left);
        assert_eq!(TimelineSide::for_index(1), TimelineSide::Right);
        assert_eq!(TimelineSide::for_index(2), TimelineSide::Left);
        assert_eq!(TimelineSide::Left.entry_offset(), -100);
        assert_eq!(TimelineSide::Right.entry_offset(), 100);
    }

    #[test]
    fn test_skill_bar_width_is_clamped() {
        let item = SkillItem {
            name: "Overflow",
            level: 140,
        };
        assert_eq!(item.bar_width(), "100%");
        assert_eq!(CORE_SKILLS[0].bar_width(), "90%");
    }

    #[test]
    fn test_every_icon_draws_something() {
        for icon in Icon::ALL {
            let paths = icon.paths();
            assert!(!paths.is_empty(), "{icon:?} has no strokes");
            for d in paths {
                assert!(d.starts_with(['M', 'm']), "{icon:?} path must start with a move: {d}");
            }
        }
    }

    #[test]
    fn test_copyright_year() {
        assert_eq!(year_of("2026-10-19T08:00:00+00:00"), 2026);
        assert_eq!(year_of("not a timestamp"), FALLBACK_YEAR);
        assert!(copyright_year() >= FALLBACK_YEAR);
    }
}
