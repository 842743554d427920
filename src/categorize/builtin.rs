//! The stock category table for remote/trainee listings.

use super::taxonomy::{CategoryRule, KeywordWeight, Weights};

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn rule(
    name: &str,
    primary: &[&str],
    technologies: &[&str],
    exclusions: &[&str],
    patterns: &[&str],
) -> CategoryRule {
    CategoryRule {
        primary: owned(primary),
        technologies: owned(technologies),
        exclusions: owned(exclusions),
        patterns: owned(patterns),
        ..CategoryRule::new(name)
    }
}

pub fn builtin_rules() -> Vec<CategoryRule> {
    vec![
        software_engineer(),
        data_science(),
        rule("Legal", LEGAL, &[], &[], LEGAL_PATTERNS),
        rule("Translation", TRANSLATION, &[], &[], TRANSLATION_PATTERNS),
        rule("Marketing", MARKETING, &[], &[], MARKETING_PATTERNS),
        rule("Sales", SALES, &[], &[], SALES_PATTERNS),
        rule("Administrative", ADMINISTRATIVE, &[], &[], ADMINISTRATIVE_PATTERNS),
        rule("Human Resources", HUMAN_RESOURCES, &[], &[], HUMAN_RESOURCES_PATTERNS),
        rule("Design", DESIGN, &[], &[], DESIGN_PATTERNS),
        rule("Content Creation", CONTENT, &[], &[], CONTENT_PATTERNS),
        rule("Video/Media", VIDEO, &[], &[], VIDEO_PATTERNS),
        rule("DevOps", DEVOPS, &[], &[], DEVOPS_PATTERNS),
        rule("QA/Testing", QA, &[], &[], QA_PATTERNS),
        rule("Customer Support", SUPPORT, &[], &[], SUPPORT_PATTERNS),
        rule("Finance/Accounting", FINANCE, &[], &[], FINANCE_PATTERNS),
        rule(
            "Healthcare/Medical",
            HEALTHCARE,
            &[],
            HEALTHCARE_EXCLUSIONS,
            HEALTHCARE_PATTERNS,
        ),
        rule("Trading/Finance", TRADING, &[], &[], TRADING_PATTERNS),
    ]
}

fn software_engineer() -> CategoryRule {
    rule(
        "Software Engineer",
        &[
            "software engineer", "software developer", "developer", "programmer", "coder",
            "full stack", "fullstack", "frontend", "front-end", "backend", "back-end",
            "web developer", "application developer", "systems developer", "mobile developer",
            "ios engineer", "android developer", "react developer", "angular developer",
            "vue developer", "node developer", "python developer", "java developer",
            "php developer", "ruby developer", "go developer", "rust developer",
            "c++ developer", "c# developer", ".net developer", "django developer",
            "flask developer", "spring developer", "express developer", "laravel developer",
            "rails developer", "asp.net developer", "html developer", "css developer",
            "javascript developer", "typescript developer", "jquery developer",
            "desarrollador", "desarrollador/a",
        ],
        &[
            "react", "angular", "vue", "node.js", "nodejs", "python", "java", "javascript",
            "typescript", "php", "ruby", "go", "golang", "rust", "c++", "c#", ".net",
            "django", "flask", "spring", "express", "laravel", "rails", "asp.net",
            "html", "css", "sass", "scss", "bootstrap", "tailwind", "jquery",
        ],
        &[
            "kinesiólogo", "kinesiologo", "attorney", "lawyer", "accountant", "recruiter",
            "assistant", "coordinator", "manager", "specialist", "analyst", "trader",
            "setter", "generation", "marketing", "sales", "hr", "human resources",
            "translator", "paralegal", "litigation", "immigration", "law", "legal",
        ],
        &[
            r"\b(software|web|mobile|full.?stack|front.?end|back.?end)\s+(developer|engineer|programmer)\b",
            r"\b(react|angular|vue|node|python|java|javascript|typescript|php|ruby|go|rust|c\+\+|c#|\.net)\s+(developer|engineer)\b",
            r"\b(developer|engineer|programmer)\b.*\b(react|angular|vue|node|python|java|javascript|typescript|php|ruby|go|rust|c\+\+|c#|\.net)\b",
        ],
    )
}

/// Data Science titles share many words with other categories, so generic
/// phrases score low and the category needs a floor to win.
fn data_science() -> CategoryRule {
    let mut rule = rule(
        "Data Science",
        &[
            "data scientist", "data analyst", "machine learning engineer", "ml engineer",
            "ai engineer", "artificial intelligence engineer", "statistician", "bi analyst",
            "business intelligence analyst", "analytics engineer", "data engineer",
            "research scientist", "quantitative analyst", "quants", "data science",
            "machine learning", "deep learning", "artificial intelligence", "ai/ml",
        ],
        &[
            "pandas", "numpy", "tensorflow", "pytorch", "scikit-learn", "scikit learn",
            "jupyter", "spark", "hadoop", "tableau", "power bi", "powerbi", "matplotlib",
            "seaborn", "plotly", "r", "sas", "spss", "stata", "excel", "sql", "nosql",
        ],
        DATA_SCIENCE_EXCLUSIONS,
        &[
            r"\b(data\s+scientist|data\s+analyst|machine\s+learning\s+engineer|ml\s+engineer)\b",
            r"\b(ai\s+engineer|artificial\s+intelligence\s+engineer|statistician)\b",
            r"\b(bi\s+analyst|business\s+intelligence\s+analyst|analytics\s+engineer)\b",
            r"\b(data\s+engineer|research\s+scientist|quantitative\s+analyst)\b",
            r"\b(pandas|numpy|tensorflow|pytorch|scikit|jupyter|spark|hadoop|tableau|power\s+bi)\b",
        ],
    );
    rule.weights = Weights {
        primary: KeywordWeight::boosted(
            5.0,
            25.0,
            &[
                "data scientist", "data analyst", "machine learning", "ml engineer",
                "ai engineer", "statistician", "bi analyst", "analytics engineer",
                "data engineer", "research scientist", "quantitative analyst",
            ],
        ),
        technology: KeywordWeight::boosted(
            2.0,
            15.0,
            &[
                "pandas", "numpy", "tensorflow", "pytorch", "scikit", "jupyter", "spark",
                "hadoop", "tableau", "power bi", "matplotlib", "seaborn", "plotly", "r",
                "sas", "spss", "stata",
            ],
        ),
        word_technology: 1.0,
        word_primary: 1.0,
        ..Weights::default()
    };
    rule.min_score = Some(20.0);
    rule
}

const DATA_SCIENCE_EXCLUSIONS: &[&str] = &[
    "attorney", "lawyer", "accountant", "recruiter", "assistant", "coordinator",
    "manager", "specialist", "trader", "setter", "generation", "marketing",
    "sales", "hr", "human resources", "kinesiólogo", "kinesiologo", "vendedor",
    "asesor", "redactor", "publicitario", "creativo", "translator", "paralegal",
    "litigation", "immigration", "law", "legal", "german", "spanish", "french",
    "interpreter", "translation", "language", "linguist", "freelance", "frelance",
    "freelancer", "frelancer", "virtual", "remote", "online", "digital", "web",
    "frontend", "front-end", "backend", "back-end", "full stack", "fullstack",
    "developer", "programmer", "coder", "software", "web developer", "mobile",
    "react", "angular", "vue", "node", "javascript", "typescript", "python",
    "java", "php", "ruby", "go", "rust", "c++", "c#", ".net", "django", "flask",
    "spring", "express", "laravel", "rails", "asp.net", "html", "css", "sass",
    "scss", "bootstrap", "tailwind", "jquery", "designer", "design", "ui", "ux",
    "graphic", "visual", "creative", "brand", "logo", "product", "content",
    "writer", "editor", "creator", "copy", "blog", "article", "copywriter",
    "video", "media", "production", "filming", "editing", "motion", "cinematographer",
    "customer", "client", "technical", "help", "support", "success", "care",
    "administrative", "executive", "personal", "virtual assistant", "office",
    "admin", "hr", "human resources", "recruiter", "talent", "acquisition",
    "hiring", "sourcer", "marketing", "seo", "sem", "ppc", "social", "email",
    "digital", "brand", "growth", "ads", "google ads", "facebook ads",
    "instagram ads", "linkedin ads", "twitter ads", "sales", "business development",
    "account", "executive", "representative", "bdr", "sdr", "lead generation",
    "appointment setter", "qa", "quality assurance", "testing", "tester",
    "test engineer", "devops", "sre", "platform", "infrastructure", "cloud",
    "site reliability", "docker", "kubernetes", "aws", "azure", "gcp",
    "consultor", "consultoría", "funcional", "ecommerce", "ecomerce", "analista",
    "especialista", "productor", "asesor", "comercial", "telefónico", "educación",
    "sap", "reporting", "salesforce", "aml", "cft", "manuales", "conciliaciones",
    "bancarias", "excel", "erp", "business", "process", "management", "consulting",
    "sustainability", "responsible", "consultant", "health", "industry", "public",
    "service", "infrastructure", "dba", "informix", "consultores", "fi",
    "founder", "residence", "trainee", "intern", "graduate", "quantitative",
    "bookkeeper", "financial", "accounting", "treasury", "bookkeeping",
];

const LEGAL: &[&str] = &[
    "attorney", "lawyer", "paralegal", "legal assistant", "legal specialist",
    "litigation", "immigration", "law specialist", "legal analyst", "legal coordinator",
    "legal manager", "legal consultant", "legal advisor", "legal researcher",
    "legal writer", "legal editor", "legal translator", "legal interpreter",
];
const LEGAL_PATTERNS: &[&str] = &[
    r"\b(attorney|lawyer|paralegal|legal|litigation|immigration|law)\b",
    r"\b(german|spanish|french|english)\s+(translator|interpreter|specialist)\b",
];

const TRANSLATION: &[&str] = &[
    "translator", "interpreter", "translation specialist", "language specialist",
    "german translator", "spanish translator", "french translator", "english translator",
    "bilingual specialist", "language coordinator", "translation coordinator",
];
const TRANSLATION_PATTERNS: &[&str] = &[
    r"\b(translator|interpreter|translation|language|bilingual)\b",
    r"\b(german|spanish|french|english|portuguese|italian)\s+(translator|interpreter)\b",
];

const MARKETING: &[&str] = &[
    "marketing specialist", "digital marketing specialist", "seo specialist",
    "sem specialist", "ppc specialist", "social media specialist", "content marketing",
    "email marketing", "growth marketing", "brand marketing", "marketing analyst",
    "marketing coordinator", "marketing manager", "ads specialist", "media buyer",
    "seo", "sem", "ppc", "google ads", "facebook ads", "instagram ads",
];
const MARKETING_PATTERNS: &[&str] = &[
    r"\b(marketing|seo|sem|ppc|content|social|email|digital|brand|growth|ads|media)\b",
    r"\b(google.?ads|facebook.?ads|instagram.?ads|linkedin.?ads|twitter.?ads)\b",
];

const SALES: &[&str] = &[
    "sales representative", "sales specialist", "account executive", "business development",
    "sales development representative", "sdr", "business development representative",
    "bdr", "sales manager", "account manager", "sales coordinator", "lead generation",
    "sales consultant", "sales analyst", "appointment setter", "vendedor", "prospeción",
    "prospección", "ventas", "comercial",
];
const SALES_PATTERNS: &[&str] = &[
    r"\b(sales|business.?development|account|executive|representative|bdr|sdr|lead.?generation|vendedor|prospeción|prospección|ventas|comercial)\b",
];

const ADMINISTRATIVE: &[&str] = &[
    "administrative assistant", "executive assistant", "personal assistant",
    "virtual assistant", "office coordinator", "administrative coordinator",
    "office manager", "administrative manager", "assistant", "coordinator",
    "medical records specialist", "records specialist", "liability specialist",
    "third-party liability", "medical records", "records management",
    "administrative specialist", "office specialist", "administrative analyst",
    "office analyst", "administrative coordinator", "office coordinator",
];
const ADMINISTRATIVE_PATTERNS: &[&str] = &[
    r"\b(assistant|coordinator|manager|admin|executive|virtual|office|administrative)\b",
    r"\b(medical\s+records|records\s+specialist|liability\s+specialist|third.?party\s+liability)\b",
];

const HUMAN_RESOURCES: &[&str] = &[
    "hr specialist", "human resources specialist", "recruiter", "talent acquisition",
    "hr coordinator", "hr manager", "recruitment specialist", "talent sourcer",
    "hr assistant", "people operations", "hr analyst",
];
const HUMAN_RESOURCES_PATTERNS: &[&str] =
    &[r"\b(hr|human.?resources|recruiter|talent|acquisition|hiring|sourcer)\b"];

const DESIGN: &[&str] = &[
    "ui designer", "ux designer", "graphic designer", "visual designer",
    "product designer", "web designer", "brand designer", "creative designer",
    "interaction designer", "user experience designer", "user interface designer",
];
const DESIGN_PATTERNS: &[&str] =
    &[r"\b(design|ui|ux|graphic|visual|creative|brand|logo|product.?design)\b"];

const CONTENT: &[&str] = &[
    "content creator", "content writer", "copywriter", "blog writer", "article writer",
    "content specialist", "content manager", "editor", "content editor", "writer",
];
const CONTENT_PATTERNS: &[&str] =
    &[r"\b(content|writer|editor|creator|copy|blog|article|copywriter)\b"];

const VIDEO: &[&str] = &[
    "video editor", "video producer", "video creator", "cinematographer",
    "video specialist", "media producer", "video coordinator", "editor",
];
const VIDEO_PATTERNS: &[&str] =
    &[r"\b(video|editor|media|production|filming|editing|motion|cinematographer)\b"];

const DEVOPS: &[&str] = &[
    "devops engineer", "site reliability engineer", "sre", "platform engineer",
    "infrastructure engineer", "cloud engineer", "systems engineer", "reliability engineer",
    "automation engineer", "ci/cd engineer", "deployment engineer",
];
const DEVOPS_PATTERNS: &[&str] = &[
    r"\b(devops|sre|platform|infrastructure|cloud|site.?reliability)\s+(engineer|specialist)\b",
];

const QA: &[&str] = &[
    "qa engineer", "quality assurance engineer", "test engineer", "software tester",
    "automation tester", "manual tester", "test analyst", "quality analyst",
    "testing engineer", "qa specialist", "test specialist",
];
const QA_PATTERNS: &[&str] = &[r"\b(qa|quality.?assurance|testing|tester|test.?engineer)\b"];

const SUPPORT: &[&str] = &[
    "customer support", "customer service", "technical support", "help desk",
    "support specialist", "customer success", "client support", "support engineer",
    "customer care", "support analyst",
];
const SUPPORT_PATTERNS: &[&str] = &[r"\b(customer|client|technical|help|support|success|care)\b"];

const FINANCE: &[&str] = &[
    "accountant", "bookkeeper", "financial analyst", "finance analyst",
    "accounting specialist", "financial specialist", "treasury analyst",
    "accounting clerk", "financial clerk", "bookkeeping specialist",
    "accounting assistant", "financial assistant", "accounting coordinator",
    "financial coordinator", "accounting manager", "financial manager",
    "accounting consultant", "financial consultant", "accounting advisor",
    "financial advisor", "accounting supervisor", "financial supervisor",
    "accounting director", "financial director", "accounting controller",
    "financial controller", "accounting officer", "financial officer",
    "accounting executive", "financial executive", "accounting administrator",
    "financial administrator",
];
const FINANCE_PATTERNS: &[&str] =
    &[r"\b(accountant|bookkeeper|financial|accounting|treasury|bookkeeping)\b"];

const HEALTHCARE: &[&str] = &[
    "kinesiólogo", "kinesiologo", "physiotherapist", "physical therapist",
    "medical assistant", "healthcare assistant", "medical specialist",
    "healthcare specialist", "medical analyst", "healthcare analyst",
    "medical coordinator", "healthcare coordinator", "medical manager",
    "healthcare manager", "medical consultant", "healthcare consultant",
    "medical advisor", "healthcare advisor", "medical supervisor",
    "healthcare supervisor", "medical director", "healthcare director",
    "medical officer", "healthcare officer", "medical executive",
    "healthcare executive", "medical administrator", "healthcare administrator",
];
const HEALTHCARE_EXCLUSIONS: &[&str] = &[
    "medical records", "records specialist", "liability specialist",
    "third-party liability", "records management", "administrative",
    "office", "coordinator", "assistant", "manager", "specialist",
];
const HEALTHCARE_PATTERNS: &[&str] = &[
    r"\b(kinesiólogo|kinesiologo|physiotherapist|physical\s+therapist|medical|healthcare)\b",
];

const TRADING: &[&str] = &[
    "quantitative trader", "trader", "trading analyst", "trading specialist",
    "trading coordinator", "trading manager", "trading consultant",
    "trading advisor", "trading supervisor", "trading director",
    "trading officer", "trading executive", "trading administrator",
];
const TRADING_PATTERNS: &[&str] = &[r"\b(quantitative\s+trader|trader|trading)\b"];
