use utoipa::OpenApi;

use crate::application::http::{
    challenge::router::ChallengeApiDoc,
    experience::router::{ExperienceApiDoc, IngredientExperienceApiDoc},
    flavor::router::FlavorApiDoc,
    ingredient::router::IngredientApiDoc,
    journal::router::JournalApiDoc,
    mood::router::MoodApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Flavorscope API"
    ),
    nest(
        (path = "/ingredients", api = IngredientApiDoc),
        (path = "/ingredients", api = IngredientExperienceApiDoc),
        (path = "/flavor", api = FlavorApiDoc),
        (path = "/challenges", api = ChallengeApiDoc),
        (path = "/journal", api = JournalApiDoc),
        (path = "/experiences", api = ExperienceApiDoc),
        (path = "/moods", api = MoodApiDoc),
    )
)]
pub struct ApiDoc;
