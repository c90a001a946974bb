// Static styling catalogs - the fixed choice sets behind the prompt

/// A single styling choice. The label is what the user picks from; the value
/// is the English fragment spliced into the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleChoice {
    pub label: &'static str,
    pub value: &'static str,
}

const fn choice(label: &'static str, value: &'static str) -> StyleChoice {
    StyleChoice { label, value }
}

pub const ASPECT_RATIOS: &[StyleChoice] = &[
    choice("Square (1:1)", "1:1"),
    choice("Portrait (3:4)", "3:4"),
    choice("Landscape (4:3)", "4:3"),
    choice("Widescreen (16:9)", "16:9"),
    choice("Tall (9:16)", "9:16"),
];

pub const LIGHTING_STYLES: &[StyleChoice] = &[
    choice("Soft Studio Light", "soft, even studio lighting"),
    choice("Dramatic Hard Light", "dramatic, high-contrast hard lighting"),
    choice("Natural Sunlight", "bright, natural sunlight"),
    choice("Backlit Glow", "a beautiful backlit glow"),
    choice("Moody Cinematic", "moody, cinematic lighting"),
];

pub const CAMERA_PERSPECTIVES: &[StyleChoice] = &[
    choice("Eye-level Shot", "straight-on eye-level shot"),
    choice("High-angle Shot", "high-angle shot looking down"),
    choice("Low-angle Shot", "low-angle shot looking up"),
    choice("45-degree Angle", "dynamic 45-degree angle shot"),
    choice("Top-down (Flat Lay)", "top-down flat lay perspective"),
];

pub const IMAGE_QUALITIES: &[StyleChoice] = &[
    choice("Hyper-realistic", "hyper-realistic and incredibly detailed"),
    choice("Cinematic", "a cinematic, film-like quality"),
    choice("Sharp & Crisp", "an ultra-sharp, crisp, and clean look"),
    choice("Dreamy & Soft", "a dreamy, soft-focus aesthetic"),
];

pub const COLOR_VIBES: &[StyleChoice] = &[
    choice("Vibrant & Punchy", "vibrant, punchy, and saturated"),
    choice("Muted & Moody", "muted, moody, and desaturated"),
    choice("Warm & Nostalgic", "warm, nostalgic, and golden-hour"),
    choice("Cool & Minimalist", "cool, minimalist, and modern"),
    choice("Monochromatic", "a sleek monochromatic color scheme"),
];

pub const CAMERA_LENSES: &[StyleChoice] = &[
    choice("DSLR, 50mm Prime Lens", "a professional DSLR with a 50mm f/1.8 prime lens"),
    choice("Shot on iPhone 15 Pro", "a modern smartphone like the iPhone 15 Pro"),
    choice("Vintage Film Camera", "a vintage 35mm film camera with a grainy texture"),
    choice("Wide-Angle Lens", "a wide-angle lens for an expansive view"),
    choice("Macro Lens", "a macro lens for extreme close-up details"),
];

pub const ENVIRONMENTS: &[StyleChoice] = &[
    choice("On a Marble Surface", "placed on a clean marble surface"),
    choice(
        "Floating in Mid-air",
        "creatively floating in mid-air against a solid color background",
    ),
    choice("Minimalist Studio", "in a clean, minimalist studio setting"),
    choice(
        "Against a Tropical Background",
        "against a lush, tropical background with plants",
    ),
    choice("On a Wooden Table", "on a rustic wooden table"),
];

/// The seven dimensions a shot can be styled along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    AspectRatio,
    LightingStyle,
    CameraPerspective,
    ImageQuality,
    ColorVibes,
    CameraLens,
    Environment,
}

impl Dimension {
    pub const ALL: [Dimension; 7] = [
        Dimension::AspectRatio,
        Dimension::LightingStyle,
        Dimension::CameraPerspective,
        Dimension::ImageQuality,
        Dimension::ColorVibes,
        Dimension::CameraLens,
        Dimension::Environment,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Dimension::AspectRatio => "aspect ratio",
            Dimension::LightingStyle => "lighting style",
            Dimension::CameraPerspective => "camera perspective",
            Dimension::ImageQuality => "image quality",
            Dimension::ColorVibes => "color vibes",
            Dimension::CameraLens => "camera lens",
            Dimension::Environment => "environment",
        }
    }

    /// The catalog table for this dimension
    pub fn choices(&self) -> &'static [StyleChoice] {
        match self {
            Dimension::AspectRatio => ASPECT_RATIOS,
            Dimension::LightingStyle => LIGHTING_STYLES,
            Dimension::CameraPerspective => CAMERA_PERSPECTIVES,
            Dimension::ImageQuality => IMAGE_QUALITIES,
            Dimension::ColorVibes => COLOR_VIBES,
            Dimension::CameraLens => CAMERA_LENSES,
            Dimension::Environment => ENVIRONMENTS,
        }
    }

    /// Look up a choice by its display label, ignoring case
    pub fn by_label(&self, label: &str) -> Option<&'static StyleChoice> {
        self.choices()
            .iter()
            .find(|c| c.label.eq_ignore_ascii_case(label))
    }

    pub fn by_index(&self, index: usize) -> Option<&'static StyleChoice> {
        self.choices().get(index)
    }
}

/// One selected choice per dimension. Fields only ever hold entries from the
/// static tables above; the initial selection is the first entry of each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StylingOptions {
    pub aspect_ratio: &'static StyleChoice,
    pub lighting_style: &'static StyleChoice,
    pub camera_perspective: &'static StyleChoice,
    pub image_quality: &'static StyleChoice,
    pub color_vibes: &'static StyleChoice,
    pub camera_lens: &'static StyleChoice,
    pub environment: &'static StyleChoice,
}

impl Default for StylingOptions {
    fn default() -> Self {
        Self {
            aspect_ratio: &ASPECT_RATIOS[0],
            lighting_style: &LIGHTING_STYLES[0],
            camera_perspective: &CAMERA_PERSPECTIVES[0],
            image_quality: &IMAGE_QUALITIES[0],
            color_vibes: &COLOR_VIBES[0],
            camera_lens: &CAMERA_LENSES[0],
            environment: &ENVIRONMENTS[0],
        }
    }
}

impl StylingOptions {
    /// Replace the selection for one dimension
    pub fn set(&mut self, dimension: Dimension, choice: &'static StyleChoice) {
        match dimension {
            Dimension::AspectRatio => self.aspect_ratio = choice,
            Dimension::LightingStyle => self.lighting_style = choice,
            Dimension::CameraPerspective => self.camera_perspective = choice,
            Dimension::ImageQuality => self.image_quality = choice,
            Dimension::ColorVibes => self.color_vibes = choice,
            Dimension::CameraLens => self.camera_lens = choice,
            Dimension::Environment => self.environment = choice,
        }
    }

    pub fn get(&self, dimension: Dimension) -> &'static StyleChoice {
        match dimension {
            Dimension::AspectRatio => self.aspect_ratio,
            Dimension::LightingStyle => self.lighting_style,
            Dimension::CameraPerspective => self.camera_perspective,
            Dimension::ImageQuality => self.image_quality,
            Dimension::ColorVibes => self.color_vibes,
            Dimension::CameraLens => self.camera_lens,
            Dimension::Environment => self.environment,
        }
    }
}
