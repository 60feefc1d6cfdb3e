//! Fixed keyword tables driving every extractor.
//!
//! Each table is an ordered slice. Matching is first-match-wins in
//! declaration order, so the order of entries here is part of the behavior.
//! Keywords are matched as substrings of the lower-cased request text
//! unless an extractor says otherwise, so an upper-case entry never matches.

use tq_protocol::{AssignmentType, Urgency};

/// A named skill category with its detection keywords and surcharge.
#[derive(Debug, Clone, Copy)]
pub struct SkillRule {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub price: f64,
}

/// A priced unit of work, detected by its literal phrase.
#[derive(Debug, Clone, Copy)]
pub struct TaskRule {
    pub name: &'static str,
    pub price: f64,
}

/// Alternate phrasings for a task, tried only when no task phrase matched.
#[derive(Debug, Clone, Copy)]
pub struct VerbPattern {
    pub task: &'static str,
    pub phrases: &'static [&'static str],
}

/// Surcharge applied to a skill missing from `SKILLS`.
pub const DEFAULT_SKILL_PRICE: f64 = 15.0;

/// Price applied to a detected task missing from `TASKS`.
pub const DEFAULT_TASK_PRICE: f64 = 30.0;

// ── Urgency ───────────────────────────────────────────────────

/// Checked in order: every High term before any Medium term, and so on.
pub const URGENCY_TERMS: &[(Urgency, &[&str])] = &[
    (
        Urgency::High,
        &[
            "tonight",
            "urgent",
            // Upper-case, so it never matches the lower-cased text.
            "ASAP",
            "immediately",
            "due today",
            "due tonight",
            "now",
        ],
    ),
    (
        Urgency::Medium,
        &["tomorrow", "by tomorrow", "soon", "this week", "next week"],
    ),
    (
        Urgency::Low,
        &["no rush", "whenever", "whenever possible", "flexible"],
    ),
];

// ── Skills ────────────────────────────────────────────────────

pub const SKILLS: &[SkillRule] = &[
    SkillRule {
        name: "Machine Learning",
        keywords: &[
            "machine learning",
            "ml",
            "deep learning",
            "deep-learning",
            "cnn",
            "rnn",
            "transformer",
            "transformers",
            "bert",
            "gpt",
            "classification",
            "regression",
            "pytorch",
            "torch",
            "tensorflow",
            "keras",
            "scikit-learn",
            "sklearn",
        ],
        price: 9000.0,
    },
    SkillRule {
        name: "Natural Language Processing",
        keywords: &[
            "nlp",
            "natural language",
            "natural-language",
            "huggingface",
            "tokenization",
            "named entity",
            "ner",
            "language model",
            "sequence labeling",
        ],
        price: 7500.0,
    },
    SkillRule {
        name: "Computer Vision",
        keywords: &[
            "computer vision",
            "cv",
            "opencv",
            "object detection",
            "segmentation",
            "yolo",
            "mask r-cnn",
            "image processing",
            "face recognition",
        ],
        price: 7500.0,
    },
    SkillRule {
        name: "Data Science",
        keywords: &[
            "data science",
            "data analysis",
            "eda",
            "exploratory data analysis",
            "feature engineering",
            "modeling",
        ],
        price: 5000.0,
    },
    SkillRule {
        name: "Python",
        keywords: &[
            "python",
            "numpy",
            "pandas",
            "scipy",
            "matplotlib",
            "seaborn",
            "jupyter",
            "notebook",
        ],
        price: 2000.0,
    },
    SkillRule {
        name: "Data Engineering",
        keywords: &[
            "spark",
            "pyspark",
            "hadoop",
            "etl",
            "airflow",
            "data pipeline",
            "beam",
        ],
        price: 4000.0,
    },
    SkillRule {
        name: "Cloud",
        keywords: &[
            "aws",
            "amazon web services",
            "azure",
            "gcp",
            "google cloud",
            "lambda",
            "ecs",
            "eks",
            "cloud run",
        ],
        price: 3500.0,
    },
    SkillRule {
        name: "DevOps",
        keywords: &[
            "docker",
            "kubernetes",
            "k8s",
            "ci/cd",
            "jenkins",
            "github actions",
            "gitlab ci",
        ],
        price: 3000.0,
    },
    SkillRule {
        name: "Databases",
        keywords: &[
            "sql",
            "mysql",
            "postgres",
            "postgresql",
            "mongodb",
            "redis",
            "sqlite",
            "database",
            "nosql",
        ],
        price: 2500.0,
    },
    SkillRule {
        name: "Web",
        keywords: &[
            "html",
            "css",
            "javascript",
            "js",
            "react",
            "node",
            "express",
            "flask",
            "django",
            "fastapi",
            "rest api",
            "graphql",
            "typescript",
        ],
        price: 2000.0,
    },
    SkillRule {
        name: "Electronics",
        keywords: &[
            "circuit",
            "arduino",
            "pcb",
            "sensor",
            "electronics",
            "simulation",
            "proteus",
            "multisim",
        ],
        price: 4000.0,
    },
    SkillRule {
        name: "Embedded",
        keywords: &[
            "embedded",
            "arduino",
            "esp32",
            "raspberry pi",
            "microcontroller",
            "firmware",
            "rtos",
        ],
        price: 4500.0,
    },
    SkillRule {
        name: "Matlab",
        keywords: &["matlab", "simulink"],
        price: 3000.0,
    },
    SkillRule {
        name: "LaTeX",
        keywords: &["latex", "tex", "report formatting"],
        price: 1000.0,
    },
    SkillRule {
        name: "C++",
        keywords: &["c++", "cpp", "stl", "memory management", "pointer"],
        price: 2500.0,
    },
    SkillRule {
        name: "Java",
        keywords: &["java", "jvm", "spring", "spring boot"],
        price: 1500.0,
    },
    SkillRule {
        name: "R",
        keywords: &[
            "r language",
            "r programming",
            "r-project",
            "r stats",
            "tidyverse",
            "ggplot2",
            "rstudio",
            "statistical analysis",
        ],
        price: 2000.0,
    },
    SkillRule {
        name: "Excel",
        keywords: &["excel", "vba", "spreadsheet", "pivot table"],
        price: 1000.0,
    },
    SkillRule {
        name: "Mobile",
        keywords: &[
            "android",
            "ios",
            "flutter",
            "react native",
            "swift",
            "kotlin",
        ],
        price: 3000.0,
    },
    SkillRule {
        name: "Security",
        keywords: &[
            "security",
            "cybersecurity",
            "penetration testing",
            "vulnerability",
            "oauth",
            "jwt",
        ],
        price: 4000.0,
    },
];

/// Surcharge for a skill name, falling back to `DEFAULT_SKILL_PRICE`.
pub fn skill_price(name: &str) -> f64 {
    SKILLS
        .iter()
        .find(|s| s.name == name)
        .map(|s| s.price)
        .unwrap_or(DEFAULT_SKILL_PRICE)
}

// ── Tasks ─────────────────────────────────────────────────────

pub const TASKS: &[TaskRule] = &[
    TaskRule {
        name: "fix ml pipeline",
        price: 8000.0,
    },
    TaskRule {
        name: "debug code",
        price: 4000.0,
    },
    TaskRule {
        name: "implement model",
        price: 10000.0,
    },
    TaskRule {
        name: "train model",
        price: 12000.0,
    },
    TaskRule {
        name: "data cleaning",
        price: 500.0,
    },
    TaskRule {
        name: "feature engineering",
        price: 600.0,
    },
    TaskRule {
        name: "label images",
        price: 700.0,
    },
    TaskRule {
        name: "annotate data",
        price: 600.0,
    },
    TaskRule {
        name: "create report",
        price: 300.0,
    },
    TaskRule {
        name: "write report",
        price: 300.0,
    },
    TaskRule {
        name: "latex formatting",
        price: 200.0,
    },
    TaskRule {
        name: "prepare slides",
        price: 250.0,
    },
    TaskRule {
        name: "deploy to cloud",
        price: 7000.0,
    },
    TaskRule {
        name: "optimize model",
        price: 20000.0,
    },
    TaskRule {
        name: "code review",
        price: 3500.0,
    },
    TaskRule {
        name: "create frontend",
        price: 450.0,
    },
    TaskRule {
        name: "build mobile app",
        price: 2000.0,
    },
    TaskRule {
        name: "simulate circuit",
        price: 5000.0,
    },
    TaskRule {
        name: "design pcb",
        price: 600.0,
    },
    TaskRule {
        name: "create diagram",
        price: 20.0,
    },
    TaskRule {
        name: "research literature",
        price: 400.0,
    },
];

pub const VERB_PATTERNS: &[VerbPattern] = &[
    VerbPattern {
        task: "debug code",
        phrases: &["debug", "fix bug", "fix code", "resolve error"],
    },
    VerbPattern {
        task: "fix ml pipeline",
        phrases: &["pipeline", "fix pipeline", "ml pipeline", "repair pipeline"],
    },
    VerbPattern {
        task: "implement model",
        phrases: &["implement model", "implement a model", "build model"],
    },
    VerbPattern {
        task: "train model",
        phrases: &["train model", "training"],
    },
    VerbPattern {
        task: "data cleaning",
        phrases: &["clean data", "data cleaning", "cleaning dataset"],
    },
    VerbPattern {
        task: "label images",
        phrases: &["label images", "image labeling", "annotate images"],
    },
    VerbPattern {
        task: "create report",
        phrases: &["write report", "report on", "prepare report"],
    },
    VerbPattern {
        task: "latex formatting",
        phrases: &["latex", "tex", "format in latex"],
    },
    VerbPattern {
        task: "deploy to cloud",
        phrases: &["deploy", "deployment", "deploy to"],
    },
    VerbPattern {
        task: "optimize model",
        phrases: &["optimize", "tune hyper"],
    },
    VerbPattern {
        task: "code review",
        phrases: &["code review", "review code"],
    },
];

/// Price of a task name, falling back to `DEFAULT_TASK_PRICE`.
pub fn task_price(name: &str) -> f64 {
    TASKS
        .iter()
        .find(|t| t.name == name)
        .map(|t| t.price)
        .unwrap_or(DEFAULT_TASK_PRICE)
}

// ── Implementation languages and platforms ────────────────────

pub const IMPLEMENTATION_LANGUAGES: &[(&str, &[&str])] = &[
    ("Python", &["python"]),
    ("C++", &["c++", "cpp"]),
    ("Java", &["java"]),
    ("JavaScript", &["javascript", "js", "node", "react"]),
    ("Mobile", &["android", "ios", "flutter", "react native"]),
    ("Matlab", &["matlab", "simulink"]),
    ("LaTeX", &["latex", "tex"]),
];

pub const MOBILE_PLATFORM_TERMS: &[&str] = &["android", "ios", "mobile", "react native", "flutter"];

pub const WEB_PLATFORM_TERMS: &[&str] = &["web", "frontend", "react", "angular", "vue"];

// ── Branch selection ──────────────────────────────────────────

pub const WRITING_TERMS: &[&str] = &[
    "report",
    "essay",
    "literature review",
    "paper",
    "write",
    "writing",
    "assignment",
];

pub const CODING_TERMS: &[&str] = &[
    "code",
    "implement",
    "script",
    "function",
    "debug",
    "ml",
    "machine learning",
    "deep learning",
    "train model",
    "model",
    "pipeline",
];

/// Skills that, when present, put a request on the coding/ML branch.
pub const CODING_SKILLS: &[&str] = &["Machine Learning", "Python", "C++", "Java", "Data Science"];

pub const HANDWRITING_TERMS: &[&str] = &[
    "handwritten",
    "handwriting",
    "written by hand",
    "hand written",
    "fast handwriting",
    "fast writing",
];

// ── Type fallback rules ───────────────────────────────────────

/// Keyword rules used when no classifier answers. First match wins.
pub const TYPE_RULES: &[(AssignmentType, &[&str])] = &[
    (
        AssignmentType::Report,
        &["report", "essay", "literature review", "paper"],
    ),
    (AssignmentType::Diagram, &["diagram", "draw", "figure"]),
    (
        AssignmentType::Code,
        &["code", "implement", "script", "function"],
    ),
    (
        AssignmentType::Assignment,
        &["project", "assignment", "homework"],
    ),
];

/// Messages with at most this many words and no type keyword are irrelevant.
pub const SHORT_MESSAGE_WORDS: usize = 5;

// ── Domain ────────────────────────────────────────────────────

pub const AI_ML_DOMAIN_TERMS: &[&str] = &[
    "machine learning",
    "deep learning",
    "neural",
    "classification",
    "regression",
    "cnn",
    "rnn",
];
pub const ELECTRONICS_DOMAIN_TERMS: &[&str] =
    &["arduino", "circuit", "pcb", "electronic", "simulation"];
pub const WRITING_DOMAIN_TERMS: &[&str] = &["essay", "report", "literature review", "paper"];

// ── Content-word filter ───────────────────────────────────────

pub const STOPWORDS: &[&str] = &[
    "the", "a", "an", "is", "are", "of", "to", "in", "on", "for", "and", "or", "with", "please",
    "plz", "thanks", "thank", "ok", "okay", "bye", "regards", "dear", "sincerely", "yours",
    "truly", "best", "wishes", "looking", "forward", "hear", "from", "you", "let", "us", "know",
    "do", "not", "need", "help", "me", "my", "it", "that", "this", "as", "at", "by", "be", "was",
    "were", "but", "if", "so", "such", "all", "any", "can", "will", "just", "about", "what",
    "which", "who", "whom", "when", "where", "how", "also", "there", "their", "them", "then",
    "than", "too", "very", "more", "most", "some", "no", "nor", "only", "own", "same", "other",
    "ours", "yourselves", "himself", "herself", "itself",
];

pub const GREETINGS: &[&str] = &[
    "hi", "hello", "hey", "yo", "hii", "hiii", "good", "morning", "evening", "afternoon", "night",
    "greetings", "salutations", "wassup", "sup", "howdy", "welcome", "hiya", "cheers", "peace",
    "shalom", "namaste", "salut", "ciao", "hola",
];

// ── Irrelevance replies ───────────────────────────────────────

pub const IRRELEVANT_REPLIES: &[&str] = &[
    "Bhai, your message is so empty, even Shakespeare would call it ‘Much Ado About Nothing – Lite Version’.",
    "Itna vague text? Ghalib bhi hota toh keh deta: ‘Ishara bhi hota toh kuch baat banti’.",
    "Ye message dekhkar meri neural network ne bhi bola: ‘Bruh, yeh kya bhej diya tune?’",
    "Tumhara message itna halkā hai ki gravity bhi usse attract karne se mana kar rahi hai.",
    "Your request is like modern poetry — confusing, pointless, and open to *too many* interpretations.",
    "Itna confusion toh Hamlet ko bhi nahi tha: ‘To understand this… or not to understand this?’",
    "Bhai, ye kya text hai? Na sense, na context — bas existential crisis ka trailer.",
    "Tumhara message toh aisa laga jaise coding class me koi pooch le: ‘Sir, urdu me code hota hai kya ?’",
    "Your text is the literary equivalent of NULL — exists, par kaam ka nahi.",
    "Bhai, ye message dekhke meri AI bhi sochne lagi: ‘Ganje ki quality thodi kharab hai ’",
];

/// Any of `terms` occurs as a substring of `text`.
pub fn contains_any(text: &str, terms: &[&str]) -> bool {
    terms.iter().any(|t| text.contains(t))
}
