//! Built-in abbreviation list used by sentence segmentation.

/// English abbreviations that are normally followed by a period without ending
/// a sentence. Stored lower-case and without the final period.
pub const ENGLISH_ABBREVIATIONS: &[&str] = &[
    // Titles
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "rev", "hon", "capt", "col",
    "gen", "gov", "lt", "maj", "sgt", "sen", "rep", "pres",
    // Latin and editorial
    "e.g", "i.e", "etc", "vs", "cf", "al", "approx", "ca", "viz",
    // Organizations and places
    "inc", "ltd", "corp", "bros", "dept", "univ", "ave", "blvd", "rd", "mt", "ft",
    // Months
    "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
    // Times and references
    "a.m", "p.m", "fig", "vol", "pp", "u.s", "u.k",
];
