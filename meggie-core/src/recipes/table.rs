//! The curated hostel recipes served without any network call.

use std::sync::LazyLock;

use super::Recipe;

pub(super) static RICE_TOMATO: LazyLock<Recipe> = LazyLock::new(|| {
    Recipe::new(
        "Aromatic Hostel-Style Tomato Rice",
        &[
            "1 cup basmati rice",
            "3-4 medium tomatoes",
            "1 large onion",
            "2-3 garlic cloves",
            "1 tsp cumin seeds",
            "1/2 tsp turmeric",
            "1 tsp red chili powder",
            "salt to taste",
            "3 tbsp cooking oil",
            "fresh coriander leaves",
        ],
        &[
            "Wash and soak rice for 15 minutes, then boil with salt until 70% cooked (8-10 mins). Drain and set aside.",
            "Heat oil in a heavy-bottomed pan. Add cumin seeds and let them splutter.",
            "Add finely chopped onions and sauté until golden brown (5-6 minutes).",
            "Add minced garlic and cook for 1 minute until fragrant.",
            "Add chopped tomatoes, turmeric, and chili powder. Cook until tomatoes break down completely (8-10 minutes).",
            "Gently fold in the parboiled rice. Add salt and mix carefully to avoid breaking grains.",
            "Cover and cook on low heat for 10-12 minutes until rice is fully cooked.",
            "Garnish with fresh coriander and serve hot with raita or pickle! 🍚✨",
        ],
        Some("Pro tip: Add a bay leaf while boiling rice for extra aroma! No garlic? Use ginger instead. Save time by using canned tomatoes when fresh ones are expensive."),
    )
});

pub(super) static EGG_RICE: LazyLock<Recipe> = LazyLock::new(|| {
    Recipe::new(
        "Restaurant-Style Egg Fried Rice",
        &[
            "2 cups cooked rice (preferably day-old)",
            "3 eggs",
            "1 medium onion",
            "2 spring onions",
            "2 cloves garlic",
            "1 tbsp soy sauce",
            "1 tsp vinegar",
            "1/2 tsp black pepper",
            "salt to taste",
            "3 tbsp oil",
        ],
        &[
            "Beat eggs with a pinch of salt and black pepper. Set aside.",
            "Heat 1 tbsp oil in a large pan or wok on high heat.",
            "Pour beaten eggs and scramble quickly. Remove and set aside.",
            "Heat remaining oil, add minced garlic and chopped onions. Stir-fry for 2-3 minutes.",
            "Add cold rice, breaking up any clumps with a spatula.",
            "Stir-fry rice for 3-4 minutes until heated through and slightly crispy.",
            "Add soy sauce, vinegar, and scrambled eggs back to the pan.",
            "Toss everything together for 2 minutes. Garnish with chopped spring onions.",
            "Serve immediately while hot! 🍳🥢",
        ],
        Some("Secret: Use day-old rice for the best texture! Add frozen mixed vegetables for extra nutrition. No soy sauce? Mix ketchup with a little water and salt!"),
    )
});

pub(super) static MAGGI_UPGRADE: LazyLock<Recipe> = LazyLock::new(|| {
    Recipe::new(
        "Gourmet Hostel Masala Maggi Bowl",
        &[
            "2 packets maggi noodles",
            "1 large onion",
            "2 tomatoes",
            "2 eggs",
            "1 green chili",
            "1 tsp ginger-garlic paste",
            "1/2 tsp garam masala",
            "1 tsp red chili powder",
            "fresh coriander",
            "2 tbsp oil",
            "cheese slice (optional)",
        ],
        &[
            "Boil water in a large pot. Add maggi noodles (reserve one masala packet) and cook for 2 minutes. Drain and set aside.",
            "Heat oil in a deep pan. Add chopped onions and green chili, sauté until onions turn pink.",
            "Add ginger-garlic paste and cook for 1 minute until aromatic.",
            "Add chopped tomatoes, reserved masala packet, chili powder, and garam masala. Cook until tomatoes are soft (5-6 minutes).",
            "Beat eggs and pour into the pan. Scramble with the masala mixture.",
            "Add the cooked noodles and toss everything together for 2-3 minutes.",
            "Add a splash of water if too dry. Cook for another 2 minutes.",
            "Garnish with fresh coriander and cheese slice if available.",
            "Serve in bowls with a cup of chai! 🍜🔥",
        ],
        Some("Level up: Add capsicum, carrots, or any leftover vegetables. Make it creamy by adding a spoonful of mayonnaise at the end. Freeze the extra masala packets for future use!"),
    )
});
