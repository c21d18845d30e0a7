/// Style used when the requested one is not in the table.
pub const DEFAULT_STYLE: &str = "Photorealistic";

const STYLE_DESCRIPTIONS: &[(&str, &str)] = &[
    (
        "Photorealistic",
        "photorealistic, high-end commercial photography, studio lighting, sharp details, professional product shot",
    ),
    (
        "Neon",
        "neon lights, dark moody atmosphere, vibrant glowing colors, cyberpunk-inspired, futuristic",
    ),
    (
        "Pastel",
        "soft pastel colors, minimalist, clean, gentle gradients, calming aesthetic, modern",
    ),
    (
        "Luxury",
        "luxury, gold accents, rich textures, premium feel, elegant composition, dark sophisticated tones",
    ),
];

/// Phrase fragment for a visual style name. Names match exactly.
pub fn style_description(style: &str) -> &'static str {
    lookup(style).or_else(|| lookup(DEFAULT_STYLE)).unwrap_or_default()
}

fn lookup(style: &str) -> Option<&'static str> {
    STYLE_DESCRIPTIONS
        .iter()
        .find(|(name, _)| *name == style)
        .map(|(_, description)| *description)
}

pub fn style_names() -> impl Iterator<Item = &'static str> {
    STYLE_DESCRIPTIONS.iter().map(|(name, _)| *name)
}
