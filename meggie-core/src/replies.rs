//! Meggie's canned conversational replies.

use crate::ingredients::{DetectedIngredients, Ingredient};

/// First message of every conversation.
pub const WELCOME: &str = "Hey there! 😊 I'm so excited to help you cook something delicious today! What ingredients do you have in your hostel kitchen right now? Don't worry if it's just basic stuff - we'll make magic happen! ✨";

/// Shown by a presentation layer when producing a reply fails outright.
pub const APOLOGY: &str = "Oops! I'm having a little trouble right now 😅 But I'm still here to help! Try asking me again, or tell me what ingredients you have and I'll work with my backup recipes! 💕";

pub const BREAKFAST: &str = "Good morning! 🌅 For a delicious hostel breakfast, try:

• **Masala Scrambled Eggs** - with onions, tomatoes, and green chilies
• **Poha Upma** - quick and filling with minimal ingredients
• **French Toast** - if you have bread, eggs, and milk
• **Oats Porridge** - healthy and customizable with any toppings

Tell me what ingredients you have, and I'll create a detailed breakfast recipe just for you! 😊";

pub const BUDGET: &str = "I totally get it - hostel life and budgets! 💕

Here are my **detailed budget meals**:
• **Dal Rice Bowl** (₹25-35) - protein-rich and filling
• **Masala Maggi Deluxe** (₹30-40) - upgraded with eggs and veggies
• **Spiced Bread Omelette** (₹20-30) - restaurant-style technique
• **Simple Khichdi** (₹20-25) - comfort food at its best

Share your exact ingredients and budget, and I'll create a **step-by-step gourmet recipe** that'll make your friends jealous! 🌸";

pub const EMPTY_KITCHEN: &str = "Oh honey! 😅 The classic empty-hostel-kitchen situation!

**Emergency Solutions:**
• **Community Cooking** - team up with roommates for shared ingredients
• **Mess Hall Hacks** - see what's available there
• **Quick Store Run** - ₹100 can get you rice, dal, oil, and onions for multiple meals
• **Tea & Biscuits** - sometimes that's all we need

**Survival Kit for Next Time:** Rice, dal, oil, onions, salt, and chili powder - these 6 items can make 20+ different dishes!

What's your current situation? I might have some creative solutions! 💪";

/// Onboarding reply when nothing else applies.
pub const DEFAULT: &str = "Hey there! 😊 I'm Meggie, your personal hostel kitchen assistant! I'm here to help you create **amazing meals** with whatever you have!

**Just tell me:**
• What ingredients are in your kitchen right now?
• Any specific cravings or dietary preferences?
• How much time do you have to cook?
• What's your budget like?

I'll create **detailed, step-by-step recipes** that'll have your hostel friends begging for the secret! Ready to cook something incredible? 🌸✨";

const RICE_IDEAS: &str = "**Rice possibilities:** Fried rice, biryani-style rice, tomato rice, lemon rice, or even sweet rice for dessert!\n\n";

const EGG_IDEAS: &str = "**Egg magic:** Scrambled masala eggs, egg curry, egg fried rice, or a fluffy omelette with whatever veggies you have!\n\n";

const ASK_FOR_MORE: &str = "Give me the **complete list** of what you have (including spices, oil, etc.), and I'll create a **detailed, restaurant-quality recipe** that'll make your hostel room smell amazing! 🏠✨";

/// Acknowledge what the user has and ask for the rest.
pub fn partial_acknowledgement(detected: &DetectedIngredients) -> String {
    let mut reply = format!(
        "Ooh, I can see you have **{}**! 😊 That's a great start!\n\n",
        detected
    );

    if detected.contains(Ingredient::Rice) {
        reply.push_str(RICE_IDEAS);
    }
    if detected.contains(Ingredient::Egg) {
        reply.push_str(EGG_IDEAS);
    }

    reply.push_str(ASK_FOR_MORE);
    reply
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingredients::detect;

    #[test]
    fn test_partial_acknowledgement_rice_and_egg() {
        let reply = partial_acknowledgement(&detect("some rice and an egg"));
        assert!(reply.starts_with("Ooh, I can see you have **rice, egg**! 😊"));
        assert!(reply.contains(RICE_IDEAS));
        assert!(reply.contains(EGG_IDEAS));
        assert!(reply.ends_with(ASK_FOR_MORE));
    }

    #[test]
    fn test_partial_acknowledgement_without_blurbs() {
        let reply = partial_acknowledgement(&detect("just dal"));
        assert_eq!(
            reply,
            format!("Ooh, I can see you have **dal**! 😊 That's a great start!\n\n{ASK_FOR_MORE}")
        );
    }
}
