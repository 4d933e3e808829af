//! Built-in English singularization rules.
//!
//! Evaluated top to bottom against the full name; the first rule whose
//! pattern matches wins. Irregulars and uncountables come first so the
//! generic suffix rules at the bottom never see them.

pub(super) const DEFAULT_RULES: &[(&str, &str)] = &[
    // uncountables
    (
        r"(?i)(equipment|information|metadata|data|news|series|species|sheep|fish|deer)$",
        "$1",
    ),
    // irregulars
    (r"(?i)(p)eople$", "$1erson"),
    (r"(?i)(^|_)(wo)?men$", "$1$2man"),
    (r"(?i)(child)ren$", "$1"),
    (r"(?i)(t)eeth$", "$1ooth"),
    (r"(?i)(f)eet$", "$1oot"),
    (r"(?i)(g)eese$", "$1oose"),
    (r"(?i)(ox)en$", "$1"),
    (r"(?i)(criteri|phenomen)a$", "$1on"),
    (r"(?i)(m|l)ice$", "$1ouse"),
    // latin and greek plurals
    (r"(?i)(matr)ices$", "$1ix"),
    (r"(?i)(vert|ind|append)ices$", "$1ex"),
    (r"(?i)(octop|vir|radi|cact|fung|alumn|bacill|stimul)i$", "$1us"),
    (
        r"(?i)(analy|ba|diagno|parenthe|progno|synop|the|hypothe|ellip)ses$",
        "$1sis",
    ),
    (r"(?i)(^|_)(ax|cris)es$", "$1$2is"),
    // suffixes
    (r"(?i)(alias|status|bus|census|campus|virus)es$", "$1"),
    (r"(?i)(quiz)zes$", "$1"),
    (r"(?i)(her|potat|tomat|ech|vet)oes$", "$1o"),
    (r"(?i)(movie|cookie|zombie|calorie|prairie|tie|pie)s$", "$1"),
    (r"(?i)([^aeiouy]|qu)ies$", "$1y"),
    (r"(?i)(kni|wi|li)ves$", "$1fe"),
    (r"(?i)(shel|wol|hal|lea|loa|thie|sel)ves$", "$1f"),
    (r"(?i)(x|ch|ss|sh|zz)es$", "$1"),
    // already singular
    (r"(?i)(ss|us|is)$", "$1"),
    (r"(?i)s$", ""),
];
