//! Prompt template for recipe generation.

use std::fmt::Write as _;

use crate::types::GenerationRequest;

const PERSONA: &str = "You are Meggie, a caring kitchen assistant who helps hostel students cook delicious meals. Be warm, encouraging, and provide detailed but accessible recipes.";

const REQUIREMENTS: &str = "Requirements:
- Make it suitable for hostel cooking (basic equipment like single burner, one pan)
- Use LOCAL INDIAN ingredient names (paneer, not cottage cheese; curd, not yogurt; aloo, not potato)
- Include cooking times and temperatures
- Add hostel-specific tips and easy substitutions
- Make it budget-friendly and student-oriented
- Keep the tone warm, encouraging, and relatable to Indian hostel students
- Include ingredient substitutions for common hostel scenarios
- Add shortcuts and time-saving hacks";

const OUTPUT_FORMAT: &str = "Format your response as:
**Recipe Name**
*Brief encouraging intro*

**Ingredients:**
• [detailed list with quantities]

**Equipment Needed:**
• [basic hostel equipment]

**Step-by-Step Instructions:**
1. [detailed step with timing]
2. [continue...]

**Meggie's Hostel Tips:**
• [helpful hints specific to hostel cooking, substitutions, and shortcuts]

**Variations:**
• [how to modify with different ingredients commonly available in hostels]

**Storage Tips:**
• [how to store leftovers in hostel conditions]

Keep it conversational, encouraging, and include emojis sparingly. Use local Indian ingredient names throughout. Make it feel like advice from a caring friend who understands hostel life.";

/// Render the full prompt sent to the provider.
///
/// `inspiration` holds recipe titles from the lookup service; it may be empty.
pub fn render_recipe_prompt(request: &GenerationRequest, inspiration: &[String]) -> String {
    let mut prompt = format!(
        "{PERSONA}\n\nYou are Meggie, a sweet and caring kitchen assistant for hostel students. \
         Create a detailed, step-by-step recipe using these LOCAL INDIAN ingredients: {}.",
        request.ingredients.join(", ")
    );

    if !inspiration.is_empty() {
        let _ = write!(
            prompt,
            "\n\nInspiration from real recipes: {}",
            inspiration.join(", ")
        );
    }

    prompt.push_str("\n\n");
    prompt.push_str(REQUIREMENTS);

    if let Some(preferences) = request.preferences() {
        let _ = write!(prompt, "\n- Consider these preferences: {}", preferences);
    }
    if let Some(budget) = request.budget() {
        let _ = write!(prompt, "\n- Keep it within budget: {}", budget);
    }
    if let Some(time) = request.time() {
        let _ = write!(prompt, "\n- Should take about: {} minutes", time);
    }

    prompt.push_str("\n\n");
    prompt.push_str(OUTPUT_FORMAT);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_includes_ingredients_and_constraints() {
        let request = GenerationRequest {
            ingredients: vec!["rice".to_string(), "egg".to_string()],
            preferences: Some("spicy ".to_string()),
            budget: Some("₹50".to_string()),
            time: Some("15".to_string()),
        };
        let prompt = render_recipe_prompt(&request, &[]);

        assert!(prompt.starts_with(PERSONA));
        assert!(prompt.contains("LOCAL INDIAN ingredients: rice, egg."));
        assert!(prompt.contains("- Consider these preferences: spicy\n"));
        assert!(prompt.contains("- Keep it within budget: ₹50\n"));
        assert!(prompt.contains("- Should take about: 15 minutes\n"));
        assert!(!prompt.contains("Inspiration"));
    }

    #[test]
    fn test_omits_blank_constraints() {
        let request = GenerationRequest {
            ingredients: vec!["dal".to_string()],
            preferences: Some("".to_string()),
            ..Default::default()
        };
        let prompt = render_recipe_prompt(&request, &[]);
        assert!(!prompt.contains("Consider these preferences"));
        assert!(!prompt.contains("budget:"));
        assert!(!prompt.contains("Should take about"));
    }

    #[test]
    fn test_inspiration_titles() {
        let request = GenerationRequest::new(vec!["potato".to_string()]);
        let prompt = render_recipe_prompt(
            &request,
            &["Aloo Gobi".to_string(), "Hash Browns".to_string()],
        );
        assert!(prompt.contains("\n\nInspiration from real recipes: Aloo Gobi, Hash Browns\n\n"));
    }
}
