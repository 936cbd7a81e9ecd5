//! Cross-cutting, shared constants and static scoring tables.
//!
//! Every table here is read-only after process start. The classifier, query
//! builder and relevance filter all borrow these; nothing reloads them per
//! request.

/// Total result budget for a BASIC scan.
pub const DEFAULT_MAX_RESULTS_BASIC: usize = 30;

/// Total result budget for a PRO scan, split across sub-queries.
pub const DEFAULT_MAX_RESULTS_PRO: usize = 100;

/// Upper bound on results fetched for any single sub-query.
pub const DEFAULT_PER_QUERY_LIMIT: usize = 25;

/// Items per provider page. Google Custom Search caps `num` at 10.
pub const PROVIDER_PAGE_SIZE: usize = 10;

/// The provider exposes no reliable results past this rank; pagination stops here.
pub const PROVIDER_MAX_RANK: usize = 100;

/// Default in-flight sub-query limit for the PRO fan-out.
pub const DEFAULT_FANOUT_CONCURRENCY: usize = 4;

/// Per-call deadline for one provider request, in seconds.
pub const PROVIDER_TIMEOUT_SECS: u64 = 15;

/// Negative keywords, Italian.
pub const NEGATIVE_KEYWORDS_IT: &[&str] = &[
    "truffa",
    "frode",
    "indagine",
    "arresto",
    "sanzione",
    "indagato",
    "inchiesta",
    "condanna",
    "riciclaggio",
];

/// Negative keywords, English.
pub const NEGATIVE_KEYWORDS_EN: &[&str] = &[
    "fraud",
    "scandal",
    "lawsuit",
    "investigation",
    "fine",
    "charged",
    "indicted",
    "money laundering",
    "class action",
];

/// Negative keywords, Spanish.
pub const NEGATIVE_KEYWORDS_ES: &[&str] = &[
    "estafa",
    "fraude",
    "investigación",
    "demanda",
    "sanción",
    "acusado",
    "blanqueo",
];

/// Tiered strategy, top tier: violent / serious crime terms.
pub const TIER_SERIOUS_CRIME: &[&str] = &[
    "murder",
    "homicide",
    "terrorism",
    "arrested",
    "arrest",
    "assault",
    "trafficking",
    "omicidio",
    "arresto",
    "terrorismo",
    "asesinato",
];

/// Tiered strategy, middle tier: financial crime terms.
pub const TIER_FINANCIAL_CRIME: &[&str] = &[
    "fraud",
    "money laundering",
    "embezzlement",
    "bribery",
    "corruption",
    "indicted",
    "truffa",
    "frode",
    "riciclaggio",
    "corruzione",
    "estafa",
    "fraude",
    "blanqueo",
];

/// Tiered strategy, bottom tier: regulatory / litigation terms.
pub const TIER_REGULATORY: &[&str] = &[
    "lawsuit",
    "investigation",
    "fine",
    "sanction",
    "class action",
    "probe",
    "indagine",
    "sanzione",
    "inchiesta",
    "demanda",
    "sanción",
    "investigación",
];

/// High-authority media and regulator domains. Matched as substring of the
/// result hostname, so subdomains (e.g. `press.reuters.com`) count.
pub const HIGH_AUTH_DOMAINS: &[&str] = &[
    "sec.gov",
    "justice.gov",
    "ft.com",
    "bloomberg.com",
    "reuters.com",
    "nytimes.com",
    "wsj.com",
    "apnews.com",
    "ansa.it",
    "repubblica.it",
    "corriere.it",
    "sole24ore.com",
    "consob.it",
    "bancaditalia.it",
    "ivass.it",
    "agcm.it",
    "bafin.de",
    "amf-france.org",
    "fca.org.uk",
];

/// Year tokens that mark a mention as recent enough to raise its score.
pub const RECENT_YEARS: &[&str] = &["2026", "2025", "2024", "2023"];

/// Tokens dropped when building a subject's significant-token list:
/// articles, conjunctions and legal-entity suffixes in the supported
/// languages. Tokens of length <= 2 are dropped separately.
pub const SUBJECT_STOP_WORDS: &[&str] = &[
    "the", "and", "inc", "llc", "ltd", "plc", "corp", "company", "group", "holding", "srl", "spa",
    "snc", "sas", "gmbh", "sarl", "los", "las", "della", "delle", "dei", "degli",
];
