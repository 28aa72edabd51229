use std::fmt;

/// A link to an external profile page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
}

/// A named group of related skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillGroup {
    pub name: &'static str,
    pub description: &'static str,
    pub skills: &'static [&'static str],
}

/// Portfolio project category, used for filtering the project list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectCategory {
    Frontend,
    FullStack,
    UiDesign,
}

static ALL_CATEGORIES: &[ProjectCategory] = &[
    ProjectCategory::Frontend,
    ProjectCategory::FullStack,
    ProjectCategory::UiDesign,
];

impl ProjectCategory {
    /// Returns the display label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            ProjectCategory::Frontend => "Frontend",
            ProjectCategory::FullStack => "Full Stack",
            ProjectCategory::UiDesign => "UI/UX Design",
        }
    }

    /// Returns all categories in filter order.
    pub fn all() -> &'static [ProjectCategory] {
        ALL_CATEGORIES
    }
}

#[mutants::skip]
impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A showcased project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub category: ProjectCategory,
    pub technologies: &'static [&'static str],
}

/// All static portfolio content rendered by the screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    /// Short first name used in greetings and the footer.
    pub name: &'static str,
    /// The hero greeting revealed by the typewriter effect.
    pub greeting: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    /// "About Me" paragraphs, in order.
    pub about: &'static [&'static str],
    /// Short status badges shown under the about text.
    pub badges: &'static [&'static str],
    pub email: &'static str,
    pub location: &'static str,
    pub socials: &'static [SocialLink],
    pub skills: &'static [SkillGroup],
    pub projects: &'static [Project],
}

impl Profile {
    /// Returns the built-in portfolio content.
    pub fn builtin() -> &'static Profile {
        &PROFILE
    }

    /// Returns the footer credit line for the given year.
    pub fn footer_line(&self, year: i32) -> String {
        format!("Made with ♥ By {}. © {}", self.name, year)
    }
}

static PROFILE: Profile = Profile {
    name: "Ameen",
    greeting: "Hello, I'm Ameen",
    headline: "Full Stack Developer",
    tagline: "Building scalable, user-centric web applications with precision and passion, \
              leveraging deep expertise in the MERN stack to create seamless, \
              high-performance digital experiences.",
    about: &[
        "I'm a passionate MERN Stack full-stack developer, focused on building scalable, \
         efficient, and user-friendly applications. Though a fresher, I have 1 year of \
         hands-on experience developing real-world projects using MongoDB, Express.js, \
         React.js, and Node.js.",
        "My coding journey started in 10th grade, fueling my passion for development. \
         Since then, I've committed to continuous learning and practical project-building.",
        "Beyond coding, I keep up with industry trends, explore new technologies, and \
         analyze their impact on development. I also enjoy gaming, which sharpens my \
         problem-solving and strategic thinking skills.",
    ],
    badges: &[
        "Based in Kochi, Kerala, India",
        "Available for Work",
        "Computer Commerce Student",
    ],
    email: "mhdameent2006@gmail.com",
    location: "Kochi, India",
    socials: &[
        SocialLink {
            name: "LinkedIn",
            url: "https://www.linkedin.com/in/muhammed-ameen-t/",
        },
        SocialLink {
            name: "GitHub",
            url: "https://github.com/Muhammed-Ameen-T",
        },
        SocialLink {
            name: "Instagram",
            url: "https://instagram.com/ameen.t___",
        },
        SocialLink {
            name: "X",
            url: "https://x.com/muhammed_ameent",
        },
    ],
    skills: &[
        SkillGroup {
            name: "Programming Languages",
            description: "Core languages I use to build applications",
            skills: &["JavaScript", "TypeScript"],
        },
        SkillGroup {
            name: "Frontend Development",
            description: "Technologies I use to create beautiful user interfaces",
            skills: &["HTML5", "CSS3", "ReactJS", "TailwindCSS", "Bootstrap", "Next.js"],
        },
        SkillGroup {
            name: "Backend & Database",
            description: "Tools that power the server-side of my applications",
            skills: &["Node.js", "Express.js", "MongoDB", "PostgreSQL", "Redis"],
        },
        SkillGroup {
            name: "Libraries & Dev Tools",
            description: "Essential utilities that enhance my development workflow",
            skills: &[
                "GitHub",
                "Git",
                "Firebase",
                "Redux",
                "Socket.io",
                "Puppeteer",
                "Nodemailer",
                "JWT",
                "Joi",
                "Cloudinary",
                "Multer",
                "Postman",
            ],
        },
        SkillGroup {
            name: "Cloud & DevOps",
            description: "Platforms I use to deploy and scale applications",
            skills: &["AWS", "Google Cloud", "Vercel", "Render", "Docker", "Kubernetes"],
        },
        SkillGroup {
            name: "Design & Content",
            description: "Creative tools that help me design and visualize",
            skills: &["Figma", "Adobe Photoshop", "Adobe Illustrator", "Microsoft Office"],
        },
        SkillGroup {
            name: "Payment Gateways",
            description: "Solutions I implement for secure online transactions",
            skills: &["Stripe", "PayPal", "Razorpay"],
        },
    ],
    projects: &[
        Project {
            title: "E-Commerce Dashboard",
            description: "A responsive admin dashboard with dark theme, real-time data \
                          visualization, and user management features built with modern web \
                          technologies.",
            category: ProjectCategory::Frontend,
            technologies: &["React", "Tailwind CSS", "Chart.js", "Framer Motion"],
        },
        Project {
            title: "Task Management App",
            description: "A full-stack task management application with drag-and-drop \
                          functionality, user authentication, and real-time updates using \
                          Socket.io.",
            category: ProjectCategory::FullStack,
            technologies: &["React", "Node.js", "MongoDB", "Socket.io"],
        },
        Project {
            title: "Cyber Portfolio",
            description: "A futuristic portfolio website with space-themed design, interactive \
                          animations, and cutting-edge visual effects.",
            category: ProjectCategory::UiDesign,
            technologies: &["React", "Framer Motion", "Three.js", "Tailwind CSS"],
        },
        Project {
            title: "Crypto Tracker",
            description: "A cryptocurrency tracking application with real-time price updates, \
                          historical data charts, and advanced portfolio management features.",
            category: ProjectCategory::Frontend,
            technologies: &["React", "Redux", "Chart.js", "CoinGecko API"],
        },
        Project {
            title: "AI Recipe Finder",
            description: "An intelligent recipe discovery platform using AI to suggest meals \
                          based on available ingredients, dietary preferences, and nutritional \
                          goals.",
            category: ProjectCategory::FullStack,
            technologies: &["React", "Node.js", "OpenAI API", "Express"],
        },
        Project {
            title: "Holographic UI Kit",
            description: "A comprehensive UI component library featuring holographic effects, \
                          cyber-punk aesthetics, and modern design patterns for futuristic \
                          applications.",
            category: ProjectCategory::UiDesign,
            technologies: &["React", "Storybook", "CSS3", "TypeScript"],
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_identity_fields() {
        let profile = Profile::builtin();
        assert_eq!(profile.name, "Ameen");
        assert_eq!(profile.greeting, "Hello, I'm Ameen");
        assert_eq!(profile.headline, "Full Stack Developer");
        assert_eq!(profile.email, "mhdameent2006@gmail.com");
    }

    #[test]
    fn builtin_has_about_and_badges() {
        let profile = Profile::builtin();
        assert_eq!(profile.about.len(), 3);
        assert_eq!(profile.badges.len(), 3);
        assert!(profile.badges.contains(&"Available for Work"));
    }

    #[test]
    fn builtin_has_all_skill_groups() {
        let profile = Profile::builtin();
        assert_eq!(profile.skills.len(), 7);
        for group in profile.skills {
            assert!(!group.skills.is_empty(), "{} has no skills", group.name);
            assert!(!group.description.is_empty());
        }
    }

    #[test]
    fn builtin_has_six_projects_with_technologies() {
        let profile = Profile::builtin();
        assert_eq!(profile.projects.len(), 6);
        for project in profile.projects {
            assert!(
                !project.technologies.is_empty(),
                "{} has no technologies",
                project.title
            );
        }
    }

    #[test]
    fn builtin_socials_have_absolute_urls() {
        for link in Profile::builtin().socials {
            assert!(link.url.starts_with("https://"), "{} url", link.name);
        }
    }

    #[test]
    fn every_category_is_used_by_some_project() {
        let profile = Profile::builtin();
        for category in ProjectCategory::all() {
            assert!(
                profile.projects.iter().any(|p| p.category == *category),
                "{category:?} unused"
            );
        }
    }

    #[test]
    fn category_labels_match_expected() {
        assert_eq!(ProjectCategory::Frontend.label(), "Frontend");
        assert_eq!(ProjectCategory::FullStack.label(), "Full Stack");
        assert_eq!(ProjectCategory::UiDesign.label(), "UI/UX Design");
    }

    #[test]
    fn footer_line_contains_name_and_year() {
        let line = Profile::builtin().footer_line(2026);
        assert!(line.contains("Ameen"));
        assert!(line.contains("2026"));
    }
}
