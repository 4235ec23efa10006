pub mod conversation;
pub mod error;
pub mod generator;
pub mod ingredients;
pub mod llm;
pub mod localize;
pub mod lookup;
pub mod orchestrator;
pub mod recipes;
pub mod remote;
pub mod replies;
pub mod types;

pub use conversation::{Conversation, Message, MessageId};
pub use error::{ConfigError, LookupError};
pub use generator::RecipeGenerator;
pub use ingredients::{detect, DetectedIngredients, Ingredient};
pub use llm::{create_provider_from_env, LlmError, LlmProvider};
pub use localize::{localize_text, to_global};
pub use orchestrator::{Meggie, Reply, ReplySource};
pub use recipes::{format_recipe, resolve_local, Recipe, RecipeKey};
pub use remote::{HttpGenerator, MockGenerator, RemoteGenerator};
pub use types::{GenerateRecipeError, GenerateRecipeResponse, GenerationOutcome, GenerationRequest};
