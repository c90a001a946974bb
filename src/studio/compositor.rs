// Prompt composition - derives the generation prompt from styling state

use super::catalog::StylingOptions;

/// Build the generation prompt for the current styling state.
///
/// Deterministic: the output depends only on the arguments. Clauses are joined
/// in a fixed order, then whitespace runs are collapsed and the ends trimmed.
pub fn compose(
    options: &StylingOptions,
    has_style_image: bool,
    environment_enabled: bool,
) -> String {
    let style_reference = if has_style_image {
        "The desired style is heavily inspired by the reference photo provided. "
    } else {
        ""
    };

    let environment = if environment_enabled {
        format!(
            "Place the product in an environment that feels like it is {}. ",
            options.environment.value
        )
    } else {
        String::new()
    };

    let prompt = format!(
        "Create a professional, high-end commercial product photograph of the subject \
         in the primary uploaded image. {style_reference}The final image must have a \
         {aspect_ratio} aspect ratio. The lighting should be {lighting}. Position the \
         camera for a {perspective}. The overall image quality should be {quality}, \
         featuring {colors} colors. The shot should appear as if taken with \
         {lens}. {environment}The final image should be clean, professional, and \
         eye-catching.",
        aspect_ratio = options.aspect_ratio.value,
        lighting = options.lighting_style.value,
        perspective = options.camera_perspective.value,
        quality = options.image_quality.value,
        colors = options.color_vibes.value,
        lens = options.camera_lens.value,
    );

    normalize_whitespace(&prompt)
}

/// Collapse whitespace runs to single spaces and trim the ends
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE_PROMPT: &str = "Create a professional, high-end commercial product \
         photograph of the subject in the primary uploaded image. The final image \
         must have a 1:1 aspect ratio. The lighting should be soft, even studio \
         lighting. Position the camera for a straight-on eye-level shot. The overall \
         image quality should be hyper-realistic and incredibly detailed, featuring \
         vibrant, punchy, and saturated colors. The shot should appear as if taken \
         with a professional DSLR with a 50mm f/1.8 prime lens. Place the product in \
         an environment that feels like it is placed on a clean marble surface. The \
         final image should be clean, professional, and eye-catching.";

    fn expected_base() -> String {
        normalize_whitespace(BASE_PROMPT)
    }

    #[test]
    fn test_default_options_full_prompt() {
        let options = StylingOptions::default();
        assert_eq!(compose(&options, false, true), expected_base());
    }

    #[test]
    fn test_style_reference_clause_follows_opening_sentence() {
        let options = StylingOptions::default();
        let with_style = compose(&options, true, true);
        let expected = expected_base().replace(
            "uploaded image. The final image must",
            "uploaded image. The desired style is heavily inspired by the reference \
             photo provided. The final image must",
        );
        assert_eq!(with_style, normalize_whitespace(&expected));
    }

    #[test]
    fn test_environment_disabled_drops_clause_without_double_space() {
        let options = StylingOptions::default();
        let prompt = compose(&options, false, false);
        assert!(!prompt.contains("Place the product in an environment"));
        assert!(!prompt.contains("  "));
        assert!(prompt.ends_with(
            "prime lens. The final image should be clean, professional, and eye-catching."
        ));
    }

    #[test]
    fn test_compose_is_deterministic() {
        let options = StylingOptions::default();
        assert_eq!(compose(&options, true, false), compose(&options, true, false));
    }

    #[test]
    fn test_no_leading_or_trailing_whitespace() {
        let options = StylingOptions::default();
        for (style, env) in [(false, false), (false, true), (true, false), (true, true)] {
            let prompt = compose(&options, style, env);
            assert_eq!(prompt, prompt.trim());
            assert!(!prompt.contains("  "));
        }
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("  a  b \t c\n"), "a b c");
    }
}
