//! Static swatch images and suggested values for the variant editor.

const IMAGE_TABLE: &[(&str, &str)] = &[
    ("Midnight", "/static/img/variants/midnight.png"),
    ("Silver", "/static/img/variants/silver.png"),
    ("Starlight", "/static/img/variants/starlight.png"),
    ("Space Gray", "/static/img/variants/space-gray.png"),
    ("Gold", "/static/img/variants/gold.png"),
    ("Black", "/static/img/variants/black.png"),
    ("White", "/static/img/variants/white.png"),
    ("Red", "/static/img/variants/red.png"),
    ("Blue", "/static/img/variants/blue.png"),
    ("Green", "/static/img/variants/green.png"),
    ("Cotton", "/static/img/variants/cotton.png"),
    ("Leather", "/static/img/variants/leather.png"),
];

pub fn image_for(value: &str) -> Option<&'static str> {
    IMAGE_TABLE
        .iter()
        .find(|(name, _)| *name == value)
        .map(|(_, url)| *url)
}

const PRESETS: &[(&str, &[&str])] = &[
    ("Color", &["Midnight", "Silver", "Starlight", "Space Gray", "Gold"]),
    ("Size", &["XS", "S", "M", "L", "XL"]),
    ("SSD", &["256GB", "512GB", "1TB", "2TB"]),
    ("Memory", &["8GB", "16GB", "24GB"]),
    ("Material", &["Cotton", "Leather"]),
];

/// Suggested values for an axis type, matched case-insensitively.
pub fn preset_values(kind: &str) -> &'static [&'static str] {
    PRESETS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(kind))
        .map(|(_, values)| *values)
        .unwrap_or(&[])
}

pub fn presets() -> impl Iterator<Item = (&'static str, &'static [&'static str])> {
    PRESETS.iter().copied()
}
