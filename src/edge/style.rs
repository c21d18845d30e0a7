pub const DEFAULT_STYLE: &str = "photorealistic";

const STYLE_PROMPTS: &[(&str, &str)] = &[
    (
        "photorealistic",
        "high-end commercial product photography, studio lighting, 8k resolution, sharp focus",
    ),
    (
        "cyberpunk",
        "neon lights, cyberpunk city background, futuristic, glowing, vibrant colors, cinematic",
    ),
    (
        "pastel",
        "minimalist pastel colors, soft lighting, clean composition, gentle aesthetic",
    ),
    (
        "3d-render",
        "3d octane render, abstract geometric shapes, glossy materials, surreal, high detail",
    ),
    (
        "lifestyle",
        "authentic lifestyle photography, warm natural lighting, golden hour, happy atmosphere",
    ),
];

/// Base style phrase for the one-shot generator. Missing or unknown styles
/// use [`DEFAULT_STYLE`].
pub fn style_prompt(style: Option<&str>) -> &'static str {
    style
        .and_then(lookup)
        .or_else(|| lookup(DEFAULT_STYLE))
        .unwrap_or_default()
}

fn lookup(style: &str) -> Option<&'static str> {
    STYLE_PROMPTS
        .iter()
        .find(|(name, _)| *name == style)
        .map(|(_, prompt)| *prompt)
}
