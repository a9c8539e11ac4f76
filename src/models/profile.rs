// ABOUTME: Portfolio content: owner identity, rotating headline roles,
// skills with proficiency levels, and showcased projects

/// A skill with its proficiency, rendered as an animated bar.
#[derive(Debug, Clone)]
pub struct Skill {
    pub name: &'static str,
    /// Target bar fill in percent, 0..=100.
    pub level: u16,
}

/// A showcased project.
#[derive(Debug, Clone)]
pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    pub stack: &'static str,
}

/// Everything the portfolio displays about its owner.
#[derive(Debug, Clone)]
pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
    /// Rotating strings for the typed headline on the home page.
    pub roles: &'static [&'static str],
    pub about: &'static [&'static str],
    pub skills: &'static [Skill],
    pub projects: &'static [Project],
}

impl Profile {
    pub fn sample() -> Self {
        Self {
            name: "Jordan Reyes",
            tagline: "Hi, I build things for the web and the terminal.",
            roles: &[
                "Tech Enthusiast",
                "Web Developer",
                "Cyber Security Enthusiast",
                "Problem Solver",
            ],
            about: &[
                "I am a developer who enjoys taking ideas from a rough sketch",
                "to something people can actually use. Most of my time goes",
                "into web applications and security tooling, with occasional",
                "detours into systems programming and automation.",
                "",
                "When not writing code I read about security research, tinker",
                "with home-lab hardware, and contribute to open source.",
            ],
            skills: &[
                Skill { name: "HTML & CSS", level: 90 },
                Skill { name: "JavaScript", level: 85 },
                Skill { name: "Rust", level: 75 },
                Skill { name: "Python", level: 80 },
                Skill { name: "Network Security", level: 70 },
                Skill { name: "Linux & Tooling", level: 85 },
            ],
            projects: &[
                Project {
                    name: "Portfolio Site",
                    description: "Personal site with theme switching, lazy loading, and a validated contact form.",
                    stack: "HTML / CSS / JavaScript",
                },
                Project {
                    name: "Packet Lens",
                    description: "Small packet capture visualizer for spotting noisy hosts on a home network.",
                    stack: "Python / scapy",
                },
                Project {
                    name: "Dotfile Butler",
                    description: "Bootstrap script that syncs and links dotfiles across machines.",
                    stack: "Shell / Git",
                },
                Project {
                    name: "CTF Notebook",
                    description: "Writeups and reusable snippets from capture-the-flag events.",
                    stack: "Markdown / Python",
                },
            ],
        }
    }
}
