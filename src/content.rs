//! Hard-coded catalogs rendered by the page sections.

pub const SITE_NAME: &str = "Portfolio";
pub const OWNER_NAME: &str = "Your Name";

/// Section ids in page order. Navigation links and scroll tracking use the same list.
pub static SECTIONS: [&str; 6] = [
    "hero",
    "about",
    "projects",
    "skills",
    "testimonials",
    "contact",
];

pub static SUBTITLES: [&str; 4] = [
    "A passionate developer creating amazing things with code.",
    "Building intuitive and engaging user experiences.",
    "Turning ideas into reality with modern web technologies.",
    "Crafting innovative solutions for the digital world.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MilestoneCategory {
    Education,
    Experience,
    Achievement,
    Skill,
    Personal,
}

impl MilestoneCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            MilestoneCategory::Education => "education",
            MilestoneCategory::Experience => "experience",
            MilestoneCategory::Achievement => "achievement",
            MilestoneCategory::Skill => "skill",
            MilestoneCategory::Personal => "personal",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub category: MilestoneCategory,
    pub details: Option<&'static str>,
    pub image: Option<&'static str>,
}

pub static MILESTONES: [Milestone; 6] = [
    Milestone {
        year: "2018",
        title: "Started Coding Journey",
        description: "Began learning web development with HTML, CSS, and JavaScript through online courses and personal projects.",
        icon: "💻",
        category: MilestoneCategory::Personal,
        details: Some("Built my first static website at age 16, sparking a lifelong passion for creating digital experiences."),
        image: None,
    },
    Milestone {
        year: "2020",
        title: "Computer Science Degree",
        description: "Graduated with honors in Computer Science from University of Technology, specializing in full-stack development.",
        icon: "🎓",
        category: MilestoneCategory::Education,
        details: Some("Thesis on \"Responsive Web Applications Using Modern Frameworks\" – explored component architectures and performance optimization."),
        image: Some("https://via.placeholder.com/300x200/4ECDC4/FFFFFF?text=Graduation"),
    },
    Milestone {
        year: "2021",
        title: "First Professional Role",
        description: "Joined TechCorp as a Junior Frontend Developer, working on e-commerce platforms and UI components.",
        icon: "💼",
        category: MilestoneCategory::Experience,
        details: Some("Collaborated with a team of 10 to launch 5 major features, improving user engagement by 40%. Learned agile methodologies and code reviews."),
        image: None,
    },
    Milestone {
        year: "2022",
        title: "Hackathon Winner",
        description: "Won the Global Hackathon for an AI-powered task management app built in 48 hours.",
        icon: "🏆",
        category: MilestoneCategory::Achievement,
        details: Some("Team of 4; integrated NLP for natural language input. Judged on innovation, usability, and technical execution. Gained 500+ GitHub stars."),
        image: Some("https://via.placeholder.com/300x200/FFE66D/000000?text=Hackathon"),
    },
    Milestone {
        year: "2023",
        title: "Senior Developer Promotion",
        description: "Promoted to Senior Full-Stack Developer at Innovate Inc., leading projects with 20+ team members.",
        icon: "🚀",
        category: MilestoneCategory::Experience,
        details: Some("Mentored juniors, architected scalable APIs and microservices. Delivered a dashboard that reduced data processing time by 60%."),
        image: None,
    },
    Milestone {
        year: "2024",
        title: "Open-Source Contributor",
        description: "Contributed to major open-source repositories, with 50+ pull requests merged.",
        icon: "🌟",
        category: MilestoneCategory::Achievement,
        details: Some("Key contributions: performance tooling and security enhancements for popular web frameworks. Built community through conferences and workshops."),
        image: None,
    },
];

/// A titled card used by the values and hobbies tabs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static VALUES: [Highlight; 4] = [
    Highlight {
        icon: "🎯",
        title: "Innovation",
        description: "Always pushing boundaries with cutting-edge technologies to create unique solutions.",
    },
    Highlight {
        icon: "🤝",
        title: "Collaboration",
        description: "Thriving in team environments, valuing diverse perspectives to achieve collective success.",
    },
    Highlight {
        icon: "⚡",
        title: "Efficiency",
        description: "Focused on clean, scalable code that optimizes performance without compromising quality.",
    },
    Highlight {
        icon: "🌱",
        title: "Growth",
        description: "Lifelong learner, continuously upskilling in emerging trends like AI and Web3.",
    },
];

pub static HOBBIES: [Highlight; 4] = [
    Highlight {
        icon: "📸",
        title: "Photography",
        description: "Capturing moments and experimenting with digital art to inspire creative coding projects.",
    },
    Highlight {
        icon: "🥾",
        title: "Hiking",
        description: "Exploring nature trails to clear the mind and find inspiration in the world around us.",
    },
    Highlight {
        icon: "📚",
        title: "Sci-Fi Reading",
        description: "Diving into futuristic stories that fuel innovative ideas for tech solutions.",
    },
    Highlight {
        icon: "🎮",
        title: "Gaming",
        description: "Analyzing game mechanics to understand user engagement and interactive design principles.",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub progress: u8,
}

pub static STATS: [Stat; 3] = [
    Stat {
        value: "3+",
        label: "Years Experience",
        progress: 80,
    },
    Stat {
        value: "25+",
        label: "Projects Delivered",
        progress: 90,
    },
    Stat {
        value: "10+",
        label: "Technologies Mastered",
        progress: 100,
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub image: &'static str,
    pub link: &'static str,
    pub tech: &'static [&'static str],
    pub features: &'static [&'static str],
    pub category: &'static str,
}

pub static PROJECT_CATEGORIES: [&str; 7] = [
    "All",
    "Web App",
    "Dashboard",
    "Mobile",
    "Portfolio",
    "AI",
    "Productivity",
];

pub static PROJECTS: [Project; 6] = [
    Project {
        id: 1,
        title: "E-Commerce Platform",
        description: "A modern web app with a typed API backend.",
        long_description: "Full-stack e-commerce solution with user authentication, payment integration, and admin dashboard. Features real-time inventory management, responsive design, and SEO optimization for all devices.",
        image: "https://via.placeholder.com/400x250/FF6B6B/FFFFFF?text=E-Commerce",
        link: "#",
        tech: &["React", "Node.js", "MongoDB", "Stripe"],
        features: &["User Auth", "Payments", "Admin Panel", "Responsive", "SEO"],
        category: "Web App",
    },
    Project {
        id: 2,
        title: "Social Media Dashboard",
        description: "An analytics platform with stunning UI.",
        long_description: "Interactive dashboard for social media metrics, including advanced charts, dynamic filters, export options, and predictive analytics. Integrates multiple APIs for real-time data visualization.",
        image: "https://via.placeholder.com/400x250/4ECDC4/FFFFFF?text=Dashboard",
        link: "#",
        tech: &["Vue", "Chart.js", "Express", "APIs"],
        features: &["Real-time Charts", "Filters", "Export Data", "Multi-API", "Analytics"],
        category: "Dashboard",
    },
    Project {
        id: 3,
        title: "Mobile Fitness App",
        description: "Mobile app design and development.",
        long_description: "Cross-platform fitness tracker with personalized workout plans, AI progress tracking, social sharing, and health metrics integration. Runs on iOS and Android with offline capabilities and push notifications.",
        image: "https://via.placeholder.com/400x250/FFE66D/000000?text=Fitness+App",
        link: "#",
        tech: &["React Native", "Firebase", "Redux"],
        features: &["Workout Plans", "Progress Tracking", "Social Share", "Offline Mode", "AI Insights"],
        category: "Mobile",
    },
    Project {
        id: 4,
        title: "Portfolio Website",
        description: "Personal portfolio with interactive elements.",
        long_description: "This very site! A dynamic portfolio rendered on the server and hydrated with WebAssembly, featuring theme customization, smooth animations, persistent settings, and accessibility features.",
        image: "https://via.placeholder.com/400x250/6C5CE7/FFFFFF?text=Portfolio",
        link: "#",
        tech: &["Rust", "Leptos", "WebAssembly", "Tailwind"],
        features: &["Theme Switcher", "Animations", "Responsive", "Persistent Settings", "Accessibility"],
        category: "Portfolio",
    },
    Project {
        id: 5,
        title: "AI Chatbot",
        description: "Intelligent chatbot using machine learning.",
        long_description: "Conversational AI assistant for customer support, integrated with NLP and sentiment analysis. Handles queries in multiple languages with 95% accuracy and learns from interactions.",
        image: "https://via.placeholder.com/400x250/A78BFA/FFFFFF?text=Chatbot",
        link: "#",
        tech: &["Python", "TensorFlow", "React"],
        features: &["NLP", "Sentiment Analysis", "Multi-language", "Learning", "Integration"],
        category: "AI",
    },
    Project {
        id: 6,
        title: "Task Management Tool",
        description: "Collaborative project management app.",
        long_description: "Feature-rich task manager with team collaboration, Kanban boards, time tracking, and integrations with calendars and notifications. Built for scalability and team productivity.",
        image: "https://via.placeholder.com/400x250/45B7D1/FFFFFF?text=Task+Manager",
        link: "#",
        tech: &["Next.js", "PostgreSQL", "Socket.io"],
        features: &["Kanban Boards", "Time Tracking", "Notifications", "Integrations", "Team Collab"],
        category: "Productivity",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
    pub category: &'static str,
    pub icon: &'static str,
}

impl Skill {
    pub fn proficiency(&self) -> &'static str {
        if self.level > 90 {
            "advanced"
        } else {
            "strong"
        }
    }
}

pub static SKILL_CATEGORIES: [&str; 7] = [
    "All",
    "Frontend",
    "Backend",
    "Database",
    "Styling",
    "Design",
    "Tools",
];

pub static SKILLS: [Skill; 10] = [
    Skill { name: "React", level: 95, category: "Frontend", icon: "⚛️" },
    Skill { name: "JavaScript", level: 90, category: "Frontend", icon: "📜" },
    Skill { name: "TypeScript", level: 85, category: "Frontend", icon: "🔤" },
    Skill { name: "Node.js", level: 80, category: "Backend", icon: "🐳" },
    Skill { name: "Python", level: 75, category: "Backend", icon: "🐍" },
    Skill { name: "MongoDB", level: 70, category: "Database", icon: "🗄️" },
    Skill { name: "CSS3", level: 95, category: "Styling", icon: "🎨" },
    Skill { name: "Sass", level: 85, category: "Styling", icon: "💅" },
    Skill { name: "Figma", level: 80, category: "Design", icon: "🎯" },
    Skill { name: "Git", level: 90, category: "Tools", icon: "📂" },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
    pub company: &'static str,
    pub avatar: &'static str,
}

pub static TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        id: 1,
        name: "John Doe",
        role: "CEO",
        quote: "Outstanding work! Transformed our vision into reality with innovative solutions.",
        company: "TechCorp",
        avatar: "https://via.placeholder.com/80/FF6B6B/FFFFFF?text=JD",
    },
    Testimonial {
        id: 2,
        name: "Jane Smith",
        role: "CTO",
        quote: "Exceptional developer with deep knowledge of modern technologies. Highly recommended!",
        company: "Innovate Inc.",
        avatar: "https://via.placeholder.com/80/4ECDC4/FFFFFF?text=JS",
    },
    Testimonial {
        id: 3,
        name: "Mike Johnson",
        role: "Product Manager",
        quote: "Delivered projects on time with top-notch quality. A true professional.",
        company: "FutureLabs",
        avatar: "https://via.placeholder.com/80/FFE66D/000000?text=MJ",
    },
    Testimonial {
        id: 4,
        name: "Sarah Lee",
        role: "Designer",
        quote: "Collaborated seamlessly, bringing technical expertise to creative challenges.",
        company: "DesignHub",
        avatar: "https://via.placeholder.com/80/6C5CE7/FFFFFF?text=SL",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub icon: &'static str,
    pub url: &'static str,
}

pub static SOCIAL_LINKS: [SocialLink; 5] = [
    SocialLink { name: "LinkedIn", icon: "💼", url: "https://linkedin.com" },
    SocialLink { name: "GitHub", icon: "🐙", url: "https://github.com" },
    SocialLink { name: "Email", icon: "✉️", url: "mailto:your.email@example.com" },
    SocialLink { name: "Twitter", icon: "🐦", url: "https://twitter.com" },
    SocialLink { name: "Dribbble", icon: "🎨", url: "https://dribbble.com" },
];

/// `word` with its first letter upper-cased.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_project_ids_unique() {
        let ids: HashSet<u32> = PROJECTS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn test_categories_cover_catalogs() {
        assert_eq!(PROJECT_CATEGORIES[0], "All");
        assert_eq!(SKILL_CATEGORIES[0], "All");
        for project in PROJECTS.iter() {
            assert!(PROJECT_CATEGORIES.contains(&project.category), "{}", project.title);
        }
        for skill in SKILLS.iter() {
            assert!(SKILL_CATEGORIES.contains(&skill.category), "{}", skill.name);
        }
    }

    #[test]
    fn test_skill_names_unique() {
        // Skill reveals are keyed by name
        let names: HashSet<&str> = SKILLS.iter().map(|s| s.name).collect();
        assert_eq!(names.len(), SKILLS.len());
        assert!(SKILLS.iter().all(|s| s.level <= 100));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("advanced"), "Advanced");
        assert_eq!(capitalize("a"), "A");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_skill_proficiency() {
        assert_eq!(SKILLS[0].proficiency(), "advanced"); // React, 95
        assert_eq!(SKILLS[1].proficiency(), "strong"); // JavaScript, 90
    }
}
