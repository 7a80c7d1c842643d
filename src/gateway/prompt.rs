use crate::models::ConversionDirection;

/// Sampling temperature for conversion requests. Kept low so the same input
/// converts to the same output.
pub const CONVERSION_TEMPERATURE: f32 = 0.1;

/// Fixed instruction constraining the model to act as a pure converter
pub const SYSTEM_INSTRUCTION: &str = "\
You are a highly accurate Bengali text encoding converter.
Your sole purpose is to convert text between Unicode (standard web Bengali) and Bijoy 52 (ANSI/ASCII legacy encoding used with fonts like SutonnyMJ).

Rules:
1. If the request is 'UnicodeToBijoy', convert the provided standard Bengali text into Bijoy 52 ASCII strings. The output will look like random English characters and symbols (e.g., 'Avwg' for 'আমি').
2. If the request is 'BijoyToUnicode', convert the provided Bijoy ASCII string back to standard Bengali Unicode.
3. Preserve all punctuation and formatting exactly.
4. Do NOT output any explanations, markdown code blocks, or preamble. Return ONLY the converted raw text string.
5. If the input is empty or invalid, return an empty string.
";

/// Build the per-request instruction for `text` flowing in `direction`
pub fn build_prompt(text: &str, direction: ConversionDirection) -> String {
    match direction {
        ConversionDirection::UnicodeToBijoy => {
            format!("Convert this Unicode Bengali text to Bijoy 52 ANSI: \n\n{}", text)
        }
        ConversionDirection::BijoyToUnicode => {
            format!("Convert this Bijoy 52 ANSI text to Unicode Bengali: \n\n{}", text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_to_bijoy_prompt() {
        let prompt = build_prompt("আমি", ConversionDirection::UnicodeToBijoy);
        assert_eq!(prompt, "Convert this Unicode Bengali text to Bijoy 52 ANSI: \n\nআমি");
    }

    #[test]
    fn test_bijoy_to_unicode_prompt() {
        let prompt = build_prompt("Avwg", ConversionDirection::BijoyToUnicode);
        assert_eq!(prompt, "Convert this Bijoy 52 ANSI text to Unicode Bengali: \n\nAvwg");
    }

    #[test]
    fn test_prompt_keeps_text_verbatim() {
        let text = "  line one\n\tline two, with punctuation!  ";
        let prompt = build_prompt(text, ConversionDirection::UnicodeToBijoy);
        assert!(prompt.ends_with(text));
    }

    #[test]
    fn test_system_instruction_rules() {
        assert!(SYSTEM_INSTRUCTION.contains("Preserve all punctuation and formatting exactly"));
        assert!(SYSTEM_INSTRUCTION.contains("Return ONLY the converted raw text string"));
        assert!(SYSTEM_INSTRUCTION.contains("return an empty string"));
        assert!(SYSTEM_INSTRUCTION.contains("markdown code blocks"));
    }
}
