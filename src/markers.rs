//! Built-in marker term lists.
//!
//! These are data, not logic: the curated vocabulary that distinguishes
//! separation-oriented language from unity-oriented language. The lists are
//! validated once at startup (unique within a list, disjoint across lists)
//! when [`crate::LexiconPair::builtin`] is first touched.
//!
//! Terms are matched by substring containment, so a short term also fires
//! inside longer words ("possible" inside "impossible"). Keep that in mind
//! when extending the lists.

/// Terms that signal separation-oriented framing.
pub const SEPARATION_MARKERS: &[&str] = &[
    // Core separation concepts
    "fear",
    "lack",
    "impossible",
    "us versus them",
    "judgement",
    "crisis",
    "scarcity",
    "division",
    "conflict",
    "enemy",
    // Competition and control
    "zero-sum",
    "my way",
    "compete",
    "dominate",
    "control",
    "threat",
    "danger",
    "attack",
    "defend",
    "protect",
    // Scarcity and possession
    "limited",
    "finite",
    "not enough",
    "mine",
    "yours",
    // Isolation
    "separate",
    "isolated",
    "alone",
    "abandoned",
    "rejected",
    // Defeat and powerlessness
    "failure",
    "loss",
    "defeat",
    "victim",
    "powerless",
    // Hostility
    "hate",
    "anger",
    "resentment",
    "revenge",
    "punishment",
    // Moral judgement
    "wrong",
    "bad",
    "evil",
    "sin",
    "guilt",
    "shame",
    "blame",
    "fault",
    "mistake",
    "error",
    // Inadequacy
    "weak",
    "inferior",
    "less than",
    "unworthy",
    "inadequate",
    // Hopelessness
    "can't",
    "won't",
    "never",
    "hopeless",
    "desperate",
    "anxious",
    "worried",
    "stressed",
    "overwhelmed",
    // Collapse and finality
    "chaos",
    "disorder",
    "destruction",
    "collapse",
    "end",
    "death",
    "dying",
    "terminal",
    "fatal",
    "doomed",
    // Exclusion and rank
    "exclusive",
    "elite",
    "superior",
    "better than",
    "privilege",
    "hierarchy",
    "rank",
    "status",
    "class",
    "caste",
    // Barriers
    "border",
    "boundary",
    "wall",
    "barrier",
    "fence",
    "restriction",
    "limitation",
    "constraint",
    "prohibition",
    "ban",
    // Rivalry
    "competition",
    "rivalry",
    "opponent",
    "adversary",
    "foe",
];

/// Terms that signal unity-oriented framing.
pub const UNITY_MARKERS: &[&str] = &[
    // Core unity concepts
    "love",
    "unity",
    "co-create",
    "abundance",
    "possibility",
    "solution",
    "harmony",
    "peace",
    "together",
    "collaboration",
    // Wholeness
    "shared source",
    "potential",
    "oneness",
    "wholeness",
    "integration",
    "connection",
    "relationship",
    "bond",
    "link",
    "bridge",
    // Boundlessness
    "infinite",
    "unlimited",
    "boundless",
    "endless",
    "eternal",
    // Collectivity
    "collective",
    "community",
    "all beings",
    "everyone",
    "humanity",
    "united",
    "joined",
    "merged",
    "combined",
    // Accomplishment
    "success",
    "victory",
    "triumph",
    "achievement",
    "accomplishment",
    "empowerment",
    "strength",
    "capability",
    "capacity",
    "ability",
    // Care
    "compassion",
    "kindness",
    "care",
    "support",
    "help",
    "forgiveness",
    "acceptance",
    "understanding",
    "empathy",
    "sympathy",
    // Worth
    "right",
    "good",
    "virtue",
    "merit",
    "worth",
    "honor",
    "respect",
    "dignity",
    "value",
    "appreciation",
    "strong",
    "capable",
    "worthy",
    "deserving",
    "adequate",
    // Possibility and calm
    "possible",
    "can",
    "will",
    "always",
    "hopeful",
    "calm",
    "peaceful",
    "serene",
    "tranquil",
    "relaxed",
    // Order and vitality
    "order",
    "balance",
    "equilibrium",
    "stability",
    "life",
    "living",
    "vital",
    "vibrant",
    "thriving",
    // Openness and fairness
    "inclusive",
    "open",
    "welcoming",
    "accepting",
    "embracing",
    "equality",
    "fairness",
    "justice",
    "equity",
    "opening",
    "gateway",
    "portal",
    "passage",
    "access",
    // Freedom and cooperation
    "freedom",
    "liberty",
    "autonomy",
    "independence",
    "sovereignty",
    "cooperation",
    "partnership",
    "alliance",
    "synergy",
    "symbiosis",
    // Trust and joy
    "trust",
    "faith",
    "belief",
    "confidence",
    "assurance",
    "joy",
    "happiness",
    "delight",
    "pleasure",
    "bliss",
    "gratitude",
    "thankfulness",
    "acknowledgment",
    "recognition",
    // Growth and creation
    "growth",
    "development",
    "evolution",
    "progress",
    "advancement",
    "creation",
    "generation",
    "manifestation",
    "emergence",
    "birth",
    // Clarity and truth
    "light",
    "illumination",
    "clarity",
    "insight",
    "wisdom",
    "truth",
    "authenticity",
    "genuineness",
    "sincerity",
    "honesty",
    "beauty",
    "grace",
    "elegance",
    "refinement",
    "excellence",
];
