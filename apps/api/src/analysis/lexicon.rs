//! Static keyword tables used by the heuristics. All terms are lowercase and every table is
//! stored in ascending byte order, so matches collected in table order come out sorted.

pub const TECHNICAL_SKILLS: &[&str] = &[
    ".net",
    "angular",
    "ansible",
    "api",
    "artificial intelligence",
    "aws",
    "azure",
    "c#",
    "c++",
    "css",
    "data science",
    "devops",
    "django",
    "docker",
    "elasticsearch",
    "figma",
    "flask",
    "flutter",
    "generative ai",
    "git",
    "golang",
    "graphql",
    "hadoop",
    "html",
    "hugging face",
    "java",
    "javascript",
    "jenkins",
    "kafka",
    "kotlin",
    "kubernetes",
    "linux",
    "llm",
    "machine learning",
    "microservices",
    "mongodb",
    "mysql",
    "node.js",
    "nosql",
    "php",
    "postgresql",
    "power bi",
    "python",
    "pytorch",
    "react",
    "redis",
    "rest",
    "ruby",
    "rust",
    "scala",
    "spark",
    "spring boot",
    "sql",
    "swift",
    "tableau",
    "tensorflow",
    "terraform",
    "vue.js",
    "windows",
    "xamarin",
];

pub const SOFT_SKILLS: &[&str] = &[
    "adaptable",
    "analytical",
    "collaboration",
    "communication",
    "conflict resolution",
    "creative",
    "critical thinking",
    "decision making",
    "emotional intelligence",
    "innovative",
    "leadership",
    "mentoring",
    "negotiation",
    "organized",
    "problem solving",
    "project management",
    "strategic planning",
    "teamwork",
    "time management",
];

/// Role category and the skills it expects. Some expected skills are not in
/// `TECHNICAL_SKILLS`, so those can never be matched; the percentage still counts them.
pub const JOB_PROFILES: &[(&str, &[&str])] = &[
    (
        "Cloud Engineering / DevOps",
        &[
            "ansible",
            "aws",
            "azure",
            "ci/cd",
            "docker",
            "gcp",
            "git",
            "jenkins",
            "kubernetes",
            "linux",
            "python",
            "terraform",
        ],
    ),
    (
        "Cyber Security",
        &[
            "cyber security",
            "encryption",
            "firewall",
            "linux",
            "networking",
            "penetration testing",
            "python",
            "siem",
        ],
    ),
    (
        "Data Science",
        &[
            "data science",
            "machine learning",
            "numpy",
            "pandas",
            "power bi",
            "python",
            "pytorch",
            "r",
            "scikit-learn",
            "sql",
            "tableau",
            "tensorflow",
        ],
    ),
    (
        "Software Development",
        &[
            ".net",
            "angular",
            "c#",
            "c++",
            "css",
            "django",
            "docker",
            "flask",
            "git",
            "html",
            "java",
            "javascript",
            "python",
            "react",
            "spring boot",
            "sql",
            "vue.js",
        ],
    ),
];

pub const RESUME_SECTIONS: &[&str] = &[
    "about",
    "achievements",
    "certifications",
    "contact",
    "education",
    "employment",
    "experience",
    "objective",
    "professional experience",
    "profile",
    "projects",
    "qualifications",
    "skills",
    "summary",
    "work experience",
];

pub const EDUCATION_KEYWORDS: &[&str] = &[
    "bachelor",
    "certification",
    "cgpa",
    "college",
    "course",
    "degree",
    "diploma",
    "gpa",
    "graduated",
    "institute",
    "master",
    "phd",
    "school",
    "training",
    "university",
];

pub const EXPERIENCE_KEYWORDS: &[&str] = &["employment", "experience", "work"];
